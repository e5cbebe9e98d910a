//! Main logger implementation

use super::{
    config::LoggerConfig,
    context::{HandlerContext, LoggerContext},
    error::{LoggerError, Result},
    handler::{Formatter, Handler},
    level::{IntoLevel, Level},
    message::Message,
    timers::Timers,
};
use crate::handlers::{default_handler, web_handler, DefaultHandlerOptions, WebHandlerOptions};
use crate::sinks::Console;
use parking_lot::{Mutex, RwLock};
use std::sync::Arc;
use std::thread::{self, ThreadId};

type SharedHandler = Arc<Mutex<Box<dyn Handler>>>;

/// Options accepted by [`Logger::with_options`]
pub struct LoggerOptions {
    pub default_level: Level,
    pub name: Option<String>,
    /// Options for the console handler registered at construction
    pub handler: DefaultHandlerOptions,
}

impl Default for LoggerOptions {
    fn default() -> Self {
        Self {
            default_level: Level::Debug,
            name: None,
            handler: DefaultHandlerOptions::default(),
        }
    }
}

/// Level filter plus ordered fan-out to registered handlers.
///
/// Every accepted call runs all handlers synchronously, in registration
/// order, on the calling thread. A dispatch works on a snapshot of the
/// handler list, so handlers may register further handlers; those only see
/// later calls. A handler that logs through the logger currently invoking it
/// gets [`LoggerError::HandlerError`] back instead of a nested dispatch.
pub struct Logger {
    context: RwLock<LoggerContext>,
    handlers: Mutex<Vec<SharedHandler>>,
    /// Threads currently inside `invoke`
    dispatching: Mutex<Vec<ThreadId>>,
    timers: Timers,
}

impl Logger {
    pub const VERSION: &'static str = env!("CARGO_PKG_VERSION");

    pub const CLEAR: Level = Level::Clear;
    pub const DEBUG: Level = Level::Debug;
    pub const INFO: Level = Level::Info;
    pub const TIME: Level = Level::Time;
    pub const WARN: Level = Level::Warn;
    pub const ERROR: Level = Level::Error;
    pub const OFF: Level = Level::Off;

    /// DEBUG filter with the default console handler registered
    #[must_use]
    pub fn new() -> Self {
        Self::with_options(LoggerOptions::default())
    }

    #[must_use]
    pub fn with_options(options: LoggerOptions) -> Self {
        let logger = Self::bare(options.default_level, options.name);
        logger.add_handler(logger.create_default_handler(options.handler));
        logger
    }

    /// A logger with no handlers at all
    fn bare(level: Level, name: Option<String>) -> Self {
        Self {
            context: RwLock::new(LoggerContext {
                name,
                filter_level: level,
            }),
            handlers: Mutex::new(Vec::new()),
            dispatching: Mutex::new(Vec::new()),
            timers: Timers::new(),
        }
    }

    /// Build a logger from declarative configuration
    #[must_use]
    pub fn from_config(config: &LoggerConfig) -> Self {
        let mut builder = Logger::builder().default_level(config.default_level);
        if let Some(name) = &config.name {
            builder = builder.name(name.clone());
        }
        #[cfg(feature = "console")]
        {
            builder = builder.console(crate::sinks::StdConsole::with_colors(config.colors));
        }
        builder.build()
    }

    /// Append a handler; handlers are never deduplicated or removed
    pub fn add_handler(&self, handler: Box<dyn Handler>) {
        self.handlers.lock().push(Arc::new(Mutex::new(handler)));
    }

    pub fn handler_count(&self) -> usize {
        self.handlers.lock().len()
    }

    /// Replace the filter level.
    ///
    /// Anything that does not describe a level (`None`, an unknown name) is
    /// ignored and the current level is kept.
    pub fn set_level<L: IntoLevel>(&self, level: L) {
        if let Some(level) = level.into_level() {
            self.context.write().filter_level = level;
        }
    }

    pub fn level(&self) -> Level {
        self.context.read().filter_level
    }

    pub fn name(&self) -> Option<String> {
        self.context.read().name.clone()
    }

    /// Snapshot of the logger context
    pub fn context(&self) -> LoggerContext {
        self.context.read().clone()
    }

    pub fn timers(&self) -> &Timers {
        &self.timers
    }

    /// Would a call at `level` reach the handlers?
    pub fn enabled_for(&self, level: Level) -> bool {
        level.value() >= self.context.read().filter_level.value()
    }

    /// Dispatch `messages` at `level` to every handler, in registration order.
    ///
    /// Filtered calls return `Ok(())` without touching any handler. The first
    /// handler error stops the dispatch and is returned. A call made from
    /// inside one of this logger's handlers fails with a handler error and
    /// reaches no handler.
    pub fn invoke(&self, level: Level, messages: &[Message]) -> Result<()> {
        if !self.enabled_for(level) {
            return Ok(());
        }

        let _dispatch = DispatchGuard::enter(&self.dispatching)?;
        let context = HandlerContext::merge(level, &self.context.read());
        let handlers = self.handlers.lock().clone();
        for handler in &handlers {
            handler.lock().handle(messages, &context)?;
        }
        Ok(())
    }

    fn invoke_with<I>(&self, level: Level, messages: I) -> Result<()>
    where
        I: IntoIterator,
        I::Item: Into<Message>,
    {
        let messages: Vec<Message> = messages.into_iter().map(Into::into).collect();
        self.invoke(level, &messages)
    }

    #[inline]
    pub fn debug<I>(&self, messages: I) -> Result<()>
    where
        I: IntoIterator,
        I::Item: Into<Message>,
    {
        self.invoke_with(Level::Debug, messages)
    }

    #[inline]
    pub fn info<I>(&self, messages: I) -> Result<()>
    where
        I: IntoIterator,
        I::Item: Into<Message>,
    {
        self.invoke_with(Level::Info, messages)
    }

    #[inline]
    pub fn warn<I>(&self, messages: I) -> Result<()>
    where
        I: IntoIterator,
        I::Item: Into<Message>,
    {
        self.invoke_with(Level::Warn, messages)
    }

    #[inline]
    pub fn error<I>(&self, messages: I) -> Result<()>
    where
        I: IntoIterator,
        I::Item: Into<Message>,
    {
        self.invoke_with(Level::Error, messages)
    }

    /// Alias for [`Logger::debug`]
    #[inline]
    pub fn log<I>(&self, messages: I) -> Result<()>
    where
        I: IntoIterator,
        I::Item: Into<Message>,
    {
        self.invoke_with(Level::Debug, messages)
    }

    /// Ask every handler to wipe its output
    #[inline]
    pub fn clear<I>(&self, messages: I) -> Result<()>
    where
        I: IntoIterator,
        I::Item: Into<Message>,
    {
        self.invoke_with(Level::Clear, messages)
    }

    /// Start the timer `label`. Empty labels are ignored.
    pub fn time(&self, label: &str) -> Result<()> {
        if label.is_empty() {
            return Ok(());
        }

        self.timers.start(label);
        self.invoke(Level::Time, &[Message::from(label), Message::from("start")])
    }

    /// Report the timer `label`. Elapsed time is computed by each handler.
    pub fn time_end(&self, label: &str) -> Result<()> {
        if label.is_empty() {
            return Ok(());
        }

        self.invoke(Level::Time, &[Message::from(label), Message::from("end")])
    }

    /// Build a console handler sharing this logger's timers.
    ///
    /// Not registered; pass the result to [`Logger::add_handler`].
    pub fn create_default_handler(&self, options: DefaultHandlerOptions) -> Box<dyn Handler> {
        default_handler(options, self.timers.clone())
    }

    /// Build a DOM handler sharing this logger's timers.
    ///
    /// Not registered; pass the result to [`Logger::add_handler`].
    pub fn create_web_handler(&self, options: WebHandlerOptions) -> Box<dyn Handler> {
        web_handler(options, self.timers.clone())
    }
}

/// Marks the current thread as dispatching until dropped
struct DispatchGuard<'a> {
    active: &'a Mutex<Vec<ThreadId>>,
    thread: ThreadId,
}

impl<'a> DispatchGuard<'a> {
    fn enter(active: &'a Mutex<Vec<ThreadId>>) -> Result<Self> {
        let thread = thread::current().id();
        let mut threads = active.lock();
        if threads.contains(&thread) {
            return Err(LoggerError::handler("re-entrant dispatch"));
        }
        threads.push(thread);
        Ok(Self { active, thread })
    }
}

impl Drop for DispatchGuard<'_> {
    fn drop(&mut self) {
        self.active.lock().retain(|thread| *thread != self.thread);
    }
}

impl Default for Logger {
    fn default() -> Self {
        Self::new()
    }
}

/// Builder for constructing Logger with a fluent API
///
/// # Example
/// ```
/// use handler_logger::prelude::*;
///
/// let console = BufferedConsole::new();
/// let logger = Logger::builder()
///     .default_level(Level::Info)
///     .name("app")
///     .console(console.clone())
///     .build();
///
/// logger.debug(["hidden"]).unwrap();
/// logger.info(["shown"]).unwrap();
/// assert_eq!(console.texts(), vec!["[app] shown"]);
/// ```
pub struct LoggerBuilder {
    default_level: Level,
    name: Option<String>,
    default_handler: Option<DefaultHandlerOptions>,
    handlers: Vec<Box<dyn Handler>>,
}

impl LoggerBuilder {
    fn update_default_handler(
        mut self,
        update: impl FnOnce(DefaultHandlerOptions) -> DefaultHandlerOptions,
    ) -> Self {
        self.default_handler = self.default_handler.take().map(update);
        self
    }
}

impl LoggerBuilder {
    /// Create a new builder with default values
    pub fn new() -> Self {
        Self {
            default_level: Level::Debug,
            name: None,
            default_handler: Some(DefaultHandlerOptions::default()),
            handlers: Vec::new(),
        }
    }

    #[must_use = "builder methods return a new value"]
    pub fn default_level(mut self, level: Level) -> Self {
        self.default_level = level;
        self
    }

    #[must_use = "builder methods return a new value"]
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Console used by the default handler.
    ///
    /// Has no effect once [`LoggerBuilder::without_default_handler`] was called.
    #[must_use = "builder methods return a new value"]
    pub fn console<C: Console + 'static>(self, console: C) -> Self {
        self.update_default_handler(|options| options.with_console(console))
    }

    /// Formatter used by the default handler.
    ///
    /// Has no effect once [`LoggerBuilder::without_default_handler`] was called.
    #[must_use = "builder methods return a new value"]
    pub fn formatter<F>(self, formatter: F) -> Self
    where
        F: Fn(&mut Vec<Message>, &HandlerContext) + Send + Sync + 'static,
    {
        let formatter: Formatter = Arc::new(formatter);
        self.update_default_handler(|options| DefaultHandlerOptions {
            formatter: Some(formatter),
            ..options
        })
    }

    /// Skip registering the console handler
    #[must_use = "builder methods return a new value"]
    pub fn without_default_handler(mut self) -> Self {
        self.default_handler = None;
        self
    }

    /// Register an extra handler after the default one
    #[must_use = "builder methods return a new value"]
    pub fn handler<H: Handler + 'static>(mut self, handler: H) -> Self {
        self.handlers.push(Box::new(handler));
        self
    }

    /// Build the Logger
    pub fn build(self) -> Logger {
        let logger = Logger::bare(self.default_level, self.name);
        if let Some(options) = self.default_handler {
            logger.add_handler(logger.create_default_handler(options));
        }
        for handler in self.handlers {
            logger.add_handler(handler);
        }
        logger
    }
}

impl Default for LoggerBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl Logger {
    /// Create a builder for Logger
    #[must_use]
    pub fn builder() -> LoggerBuilder {
        LoggerBuilder::new()
    }
}
