//! In-memory console that records every call
//!
//! Clones share the same buffer, so a copy can be moved into a handler while
//! another handle is kept for inspection.

use super::console::{Console, ConsoleMethod};
use crate::core::{join_messages, Message, Result};
use parking_lot::Mutex;
use std::sync::Arc;

#[derive(Debug, Clone, PartialEq)]
pub struct ConsoleCall {
    pub method: ConsoleMethod,
    pub messages: Vec<Message>,
}

impl ConsoleCall {
    pub fn text(&self) -> String {
        join_messages(&self.messages)
    }
}

#[derive(Debug, Clone)]
pub struct BufferedConsole {
    calls: Arc<Mutex<Vec<ConsoleCall>>>,
    supported: Vec<ConsoleMethod>,
}

impl BufferedConsole {
    /// A console with every capability
    pub fn new() -> Self {
        Self::with_methods(&ConsoleMethod::ALL)
    }

    /// A console exposing only the generic `log` method
    pub fn log_only() -> Self {
        Self::with_methods(&[ConsoleMethod::Log])
    }

    pub fn with_methods(methods: &[ConsoleMethod]) -> Self {
        Self {
            calls: Arc::new(Mutex::new(Vec::new())),
            supported: methods.to_vec(),
        }
    }

    pub fn calls(&self) -> Vec<ConsoleCall> {
        self.calls.lock().clone()
    }

    /// Rendered text of every call, in order
    pub fn texts(&self) -> Vec<String> {
        self.calls.lock().iter().map(ConsoleCall::text).collect()
    }

    pub fn len(&self) -> usize {
        self.calls.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.calls.lock().is_empty()
    }

    /// Forget recorded calls
    pub fn reset(&self) {
        self.calls.lock().clear();
    }

    fn record(&self, method: ConsoleMethod, messages: Vec<Message>) {
        self.calls.lock().push(ConsoleCall { method, messages });
    }
}

impl Default for BufferedConsole {
    fn default() -> Self {
        Self::new()
    }
}

impl Console for BufferedConsole {
    fn supports(&self, method: ConsoleMethod) -> bool {
        method == ConsoleMethod::Log || self.supported.contains(&method)
    }

    fn log(&mut self, messages: &[Message]) -> Result<()> {
        self.record(ConsoleMethod::Log, messages.to_vec());
        Ok(())
    }

    fn write(&mut self, method: ConsoleMethod, messages: &[Message]) -> Result<()> {
        self.record(method, messages.to_vec());
        Ok(())
    }

    fn time(&mut self, label: &str) -> Result<()> {
        self.record(ConsoleMethod::Time, vec![Message::from(label)]);
        Ok(())
    }

    fn time_end(&mut self, label: &str) -> Result<()> {
        self.record(ConsoleMethod::TimeEnd, vec![Message::from(label)]);
        Ok(())
    }

    fn clear(&mut self) -> Result<()> {
        self.record(ConsoleMethod::Clear, Vec::new());
        Ok(())
    }
}
