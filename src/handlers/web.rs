//! DOM-backed handler
//!
//! Each message of an accepted call becomes its own child element of the
//! configured container, tagged `log <LEVEL>`.

use super::TimerEvent;
use crate::core::{
    handler::default_formatter, Formatter, Handler, HandlerContext, Level, Message, NoopHandler,
    Result, Timers,
};
use crate::sinks::{escape_html, shared_element, Element, LogElement, SharedElement};
use std::sync::Arc;

/// Emits one message into the container
pub type Appender = Box<dyn FnMut(&Message, &HandlerContext) -> Result<()> + Send>;

/// Empties the container
pub type Clearer = Box<dyn FnMut() -> Result<()> + Send>;

/// Options for [`web_handler`]
///
/// # Example
///
/// ```
/// use handler_logger::handlers::WebHandlerOptions;
/// use handler_logger::sinks::MemoryElement;
///
/// let element = MemoryElement::new();
/// let options = WebHandlerOptions::new().with_element(element.clone());
/// assert!(options.element.is_some());
/// ```
#[derive(Default)]
pub struct WebHandlerOptions {
    /// Container to render into; `None` makes the handler a no-op
    pub element: Option<SharedElement>,
    pub formatter: Option<Formatter>,
    pub appender: Option<Appender>,
    pub clearer: Option<Clearer>,
}

impl WebHandlerOptions {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_element<E: Element + 'static>(mut self, element: E) -> Self {
        self.element = Some(shared_element(element));
        self
    }

    #[must_use]
    pub fn with_shared_element(mut self, element: SharedElement) -> Self {
        self.element = Some(element);
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

    #[must_use]
    pub fn with_appender<F>(mut self, appender: F) -> Self
    where
        F: FnMut(&Message, &HandlerContext) -> Result<()> + Send + 'static,
    {
        self.appender = Some(Box::new(appender));
        self
    }

    #[must_use]
    pub fn with_clearer<F>(mut self, clearer: F) -> Self
    where
        F: FnMut() -> Result<()> + Send + 'static,
    {
        self.clearer = Some(Box::new(clearer));
        self
    }
}

/// Append a `div.log.<LEVEL>` holding the escaped message text
fn default_appender(element: SharedElement) -> Appender {
    Box::new(move |message, context| {
        let child = LogElement::div(
            format!("log {}", context.level.name()),
            escape_html(&message.to_string()),
        );
        element.lock().append(child)
    })
}

fn default_clearer(element: SharedElement) -> Clearer {
    Box::new(move || element.lock().set_inner_html(""))
}

pub struct WebHandler {
    formatter: Formatter,
    appender: Appender,
    clearer: Clearer,
    timers: Timers,
}

impl WebHandler {
    fn new(element: SharedElement, options: WebHandlerOptions, timers: Timers) -> Self {
        Self {
            formatter: options.formatter.unwrap_or_else(default_formatter),
            appender: options
                .appender
                .unwrap_or_else(|| default_appender(Arc::clone(&element))),
            clearer: options.clearer.unwrap_or_else(|| default_clearer(element)),
            timers,
        }
    }
}

impl Handler for WebHandler {
    fn handle(&mut self, messages: &[Message], context: &HandlerContext) -> Result<()> {
        match context.level {
            Level::Time => {
                let text = TimerEvent::parse(messages, context).fallback_text(&self.timers);
                (self.appender)(&Message::String(text), context)
            }
            Level::Clear => (self.clearer)(),
            _ => {
                let mut messages = messages.to_vec();
                (self.formatter)(&mut messages, context);
                for message in &messages {
                    (self.appender)(message, context)?;
                }
                Ok(())
            }
        }
    }
}

/// Build the DOM handler, or a no-op handler when no element is configured
pub fn web_handler(mut options: WebHandlerOptions, timers: Timers) -> Box<dyn Handler> {
    match options.element.take() {
        Some(element) => Box::new(WebHandler::new(element, options, timers)),
        None => Box::new(NoopHandler),
    }
}
