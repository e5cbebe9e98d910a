//! Handler trait for log output destinations

use super::{context::HandlerContext, error::Result, message::Message};
use std::sync::Arc;

/// Invoked once for every accepted log call.
///
/// Handlers receive the raw message list and the merged context. An error
/// returned here aborts the remaining handlers for that call and reaches the
/// caller of the logging method.
pub trait Handler: Send {
    fn handle(&mut self, messages: &[Message], context: &HandlerContext) -> Result<()>;
}

impl<F> Handler for F
where
    F: FnMut(&[Message], &HandlerContext) -> Result<()> + Send,
{
    fn handle(&mut self, messages: &[Message], context: &HandlerContext) -> Result<()> {
        self(messages, context)
    }
}

/// Handler that does nothing; returned by factories whose sink is missing
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopHandler;

impl Handler for NoopHandler {
    fn handle(&mut self, _messages: &[Message], _context: &HandlerContext) -> Result<()> {
        Ok(())
    }
}

/// Rewrites a message list in place before a handler emits it
pub type Formatter = Arc<dyn Fn(&mut Vec<Message>, &HandlerContext) + Send + Sync>;

/// Prepend `"[name]"` when the logger is named
pub fn default_message_formatter(messages: &mut Vec<Message>, context: &HandlerContext) {
    if let Some(name) = &context.name {
        messages.insert(0, Message::String(format!("[{}]", name)));
    }
}

pub(crate) fn default_formatter() -> Formatter {
    Arc::new(default_message_formatter)
}
