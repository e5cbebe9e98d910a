//! Logger and per-call handler contexts
//!
//! - `LoggerContext`: configuration owned by one logger (name, filter level)
//! - `HandlerContext`: what a handler sees for one accepted call; the
//!   invoked level merged over a copy of the logger context

use super::level::Level;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct LoggerContext {
    pub name: Option<String>,
    pub filter_level: Level,
}

impl LoggerContext {
    pub fn new(filter_level: Level) -> Self {
        Self {
            name: None,
            filter_level,
        }
    }

    #[must_use]
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct HandlerContext {
    pub level: Level,
    pub name: Option<String>,
    pub filter_level: Level,
}

impl HandlerContext {
    /// Build the context for one dispatch.
    ///
    /// The explicit `level` always wins; every other field is copied from the
    /// logger context, which is left untouched.
    pub fn merge(level: Level, context: &LoggerContext) -> Self {
        Self {
            level,
            name: context.name.clone(),
            filter_level: context.filter_level,
        }
    }

    /// `"[name] "` when the logger is named, empty otherwise
    pub fn name_prefix(&self) -> String {
        match &self.name {
            Some(name) => format!("[{}] ", name),
            None => String::new(),
        }
    }
}
