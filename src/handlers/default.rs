//! Console-backed handler

use super::{TimerEvent, TimerPhase};
use crate::core::{
    handler::default_formatter, Formatter, Handler, HandlerContext, Level, Message, NoopHandler,
    Result, Timers,
};
use crate::sinks::{Console, ConsoleMethod};
use std::sync::Arc;

/// Options for [`default_handler`]
pub struct DefaultHandlerOptions {
    /// Console to write to; `None` makes the handler a no-op
    pub console: Option<Box<dyn Console>>,
    pub formatter: Option<Formatter>,
}

impl DefaultHandlerOptions {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_console<C: Console + 'static>(mut self, console: C) -> Self {
        self.console = Some(Box::new(console));
        self
    }

    #[must_use]
    pub fn without_console(mut self) -> Self {
        self.console = None;
        self
    }

    #[must_use]
    pub fn with_formatter<F>(mut self, formatter: F) -> Self
    where
        F: Fn(&mut Vec<Message>, &HandlerContext) + Send + Sync + 'static,
    {
        self.formatter = Some(Arc::new(formatter));
        self
    }
}

impl Default for DefaultHandlerOptions {
    fn default() -> Self {
        Self {
            console: environment_console(),
            formatter: None,
        }
    }
}

#[cfg(feature = "console")]
fn environment_console() -> Option<Box<dyn Console>> {
    Some(Box::new(crate::sinks::StdConsole::new()))
}

#[cfg(not(feature = "console"))]
fn environment_console() -> Option<Box<dyn Console>> {
    None
}

/// Writes each accepted call to a console, choosing the console method by level
pub struct ConsoleHandler {
    console: Box<dyn Console>,
    formatter: Formatter,
    timers: Timers,
}

impl ConsoleHandler {
    pub fn new(console: Box<dyn Console>, formatter: Option<Formatter>, timers: Timers) -> Self {
        Self {
            console,
            formatter: formatter.unwrap_or_else(default_formatter),
            timers,
        }
    }

    fn handle_time(&mut self, event: TimerEvent) -> Result<()> {
        let native = match event.phase {
            TimerPhase::Start => ConsoleMethod::Time,
            TimerPhase::End => ConsoleMethod::TimeEnd,
        };

        if self.console.supports(native) {
            match event.phase {
                TimerPhase::Start => self.console.time(&event.display_label),
                TimerPhase::End => self.console.time_end(&event.display_label),
            }
        } else {
            let text = event.fallback_text(&self.timers);
            self.console.log(&[Message::String(text)])
        }
    }

    /// Console method for a real severity, falling back to `Log`
    fn method_for(&self, level: Level) -> ConsoleMethod {
        let preferred = match level {
            Level::Warn => ConsoleMethod::Warn,
            Level::Error => ConsoleMethod::Error,
            Level::Info => ConsoleMethod::Info,
            Level::Debug => ConsoleMethod::Debug,
            _ => ConsoleMethod::Log,
        };

        if self.console.supports(preferred) {
            preferred
        } else {
            ConsoleMethod::Log
        }
    }
}

impl Handler for ConsoleHandler {
    fn handle(&mut self, messages: &[Message], context: &HandlerContext) -> Result<()> {
        match context.level {
            Level::Time => self.handle_time(TimerEvent::parse(messages, context)),
            Level::Clear => {
                if self.console.supports(ConsoleMethod::Clear) {
                    self.console.clear()
                } else {
                    Ok(())
                }
            }
            level => {
                let method = self.method_for(level);
                let mut messages = messages.to_vec();
                (self.formatter)(&mut messages, context);

                match method {
                    ConsoleMethod::Log => self.console.log(&messages),
                    method => self.console.write(method, &messages),
                }
            }
        }
    }
}

/// Build the console handler, or a no-op handler when there is no console
pub fn default_handler(options: DefaultHandlerOptions, timers: Timers) -> Box<dyn Handler> {
    match options.console {
        Some(console) => Box::new(ConsoleHandler::new(console, options.formatter, timers)),
        None => Box::new(NoopHandler),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::LoggerContext;
    use crate::sinks::BufferedConsole;

    fn ctx(level: Level, name: Option<&str>) -> HandlerContext {
        let mut logger_ctx = LoggerContext::new(Level::Debug);
        logger_ctx.name = name.map(String::from);
        HandlerContext::merge(level, &logger_ctx)
    }

    fn handler_for(console: &BufferedConsole) -> Box<dyn Handler> {
        default_handler(
            DefaultHandlerOptions::new().with_console(console.clone()),
            Timers::new(),
        )
    }

    #[test]
    fn test_level_selects_console_method() {
        let console = BufferedConsole::new();
        let mut handler = handler_for(&console);

        for level in [Level::Debug, Level::Info, Level::Warn, Level::Error] {
            handler.handle(&[Message::from("m")], &ctx(level, None)).unwrap();
        }

        let methods: Vec<_> = console.calls().iter().map(|c| c.method).collect();
        assert_eq!(
            methods,
            vec![
                ConsoleMethod::Debug,
                ConsoleMethod::Info,
                ConsoleMethod::Warn,
                ConsoleMethod::Error
            ]
        );
    }

    #[test]
    fn test_missing_methods_fall_back_to_log() {
        let console = BufferedConsole::with_methods(&[ConsoleMethod::Error]);
        let mut handler = handler_for(&console);

        handler.handle(&[Message::from("w")], &ctx(Level::Warn, None)).unwrap();
        handler.handle(&[Message::from("e")], &ctx(Level::Error, None)).unwrap();
        handler.handle(&[Message::from("o")], &ctx(Level::Off, None)).unwrap();

        let methods: Vec<_> = console.calls().iter().map(|c| c.method).collect();
        assert_eq!(methods, vec![ConsoleMethod::Log, ConsoleMethod::Error, ConsoleMethod::Log]);
    }

    #[test]
    fn test_formatter_applied_to_copy() {
        let console = BufferedConsole::new();
        let mut handler = handler_for(&console);
        let messages = vec![Message::from("hello")];

        handler.handle(&messages, &ctx(Level::Info, Some("X"))).unwrap();

        assert_eq!(console.texts(), vec!["[X] hello"]);
        assert_eq!(messages, vec![Message::from("hello")]);
    }

    #[test]
    fn test_custom_formatter() {
        let console = BufferedConsole::new();
        let mut handler = default_handler(
            DefaultHandlerOptions::new()
                .with_console(console.clone())
                .with_formatter(|messages, ctx| messages.push(Message::from(ctx.level.name()))),
            Timers::new(),
        );

        handler.handle(&[Message::from("x")], &ctx(Level::Warn, Some("ignored"))).unwrap();

        assert_eq!(console.texts(), vec!["x WARN"]);
    }

    #[test]
    fn test_native_timers() {
        let console = BufferedConsole::new();
        let mut handler = handler_for(&console);
        let time = ctx(Level::Time, Some("app"));

        handler.handle(&[Message::from("T"), Message::from("start")], &time).unwrap();
        handler.handle(&[Message::from("T"), Message::from("end")], &time).unwrap();

        let calls = console.calls();
        assert_eq!(calls[0].method, ConsoleMethod::Time);
        assert_eq!(calls[0].text(), "[app] T");
        assert_eq!(calls[1].method, ConsoleMethod::TimeEnd);
        assert_eq!(calls[1].text(), "[app] T");
    }

    #[test]
    fn test_fallback_timers_use_logger_table() {
        let console = BufferedConsole::log_only();
        let timers = Timers::new();
        let mut handler = default_handler(
            DefaultHandlerOptions::new().with_console(console.clone()),
            timers.clone(),
        );
        let time = ctx(Level::Time, None);

        timers.start("T");
        handler.handle(&[Message::from("T"), Message::from("start")], &time).unwrap();
        handler.handle(&[Message::from("T"), Message::from("end")], &time).unwrap();

        let texts = console.texts();
        assert_eq!(texts[0], "T: timer started");
        let ms: u128 = texts[1]
            .strip_prefix("T: ")
            .and_then(|rest| rest.strip_suffix("ms"))
            .and_then(|n| n.parse().ok())
            .expect("elapsed should be a whole number of ms");
        assert!(ms < 60_000);
    }

    #[test]
    fn test_clear_only_when_supported() {
        let console = BufferedConsole::new();
        handler_for(&console).handle(&[], &ctx(Level::Clear, None)).unwrap();
        assert_eq!(console.calls()[0].method, ConsoleMethod::Clear);

        let bare = BufferedConsole::log_only();
        handler_for(&bare).handle(&[], &ctx(Level::Clear, None)).unwrap();
        assert!(bare.is_empty());
    }

    #[test]
    fn test_no_console_is_noop() {
        let options = DefaultHandlerOptions::new().without_console();
        let mut handler = default_handler(options, Timers::new());
        assert!(handler.handle(&[Message::from("x")], &ctx(Level::Error, None)).is_ok());
    }
}
