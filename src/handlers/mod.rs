//! Built-in handler implementations

pub mod default;
pub mod web;

pub use default::{default_handler, ConsoleHandler, DefaultHandlerOptions};
pub use web::{web_handler, Appender, Clearer, WebHandler, WebHandlerOptions};

use crate::core::{HandlerContext, Message, Timers};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum TimerPhase {
    Start,
    End,
}

/// A TIME-level dispatch decoded from its `[label, "start" | "end"]` messages
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct TimerEvent {
    /// Label as given to `time`/`time_end`; keys the logger's timer table
    pub label: String,
    /// Label shown to the user, prefixed with `"[name] "` for named loggers
    pub display_label: String,
    pub phase: TimerPhase,
}

impl TimerEvent {
    pub fn parse(messages: &[Message], context: &HandlerContext) -> Self {
        let label = messages.first().map(ToString::to_string).unwrap_or_default();
        let phase = match messages.get(1).and_then(Message::as_str) {
            Some("start") => TimerPhase::Start,
            _ => TimerPhase::End,
        };

        Self {
            display_label: format!("{}{}", context.name_prefix(), label),
            label,
            phase,
        }
    }

    /// Text line for sinks without native timer support
    pub fn fallback_text(&self, timers: &Timers) -> String {
        match self.phase {
            TimerPhase::Start => format!("{}: timer started", self.display_label),
            TimerPhase::End => match timers.elapsed(&self.label) {
                Some(elapsed) => format!("{}: {}ms", self.display_label, elapsed.as_millis()),
                None => format!("{}: timer not started", self.display_label),
            },
        }
    }
}
