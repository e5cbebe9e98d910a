//! # Handler Logger
//!
//! A lightweight, pluggable logging facade: one logger filters calls by level
//! and fans accepted calls out to any number of handlers, in registration
//! order.
//!
//! ## Features
//!
//! - **Level filtering**: DEBUG, INFO, WARN, ERROR plus the TIME and CLEAR
//!   pseudo-levels
//! - **Multiple Handlers**: console-backed and DOM-backed handlers, or any
//!   closure
//! - **Named timers**: `time` / `time_end` pairs reported by each handler
//! - **Capability probing**: sinks declare optional methods, handlers fall
//!   back to plain output when one is missing
//!
//! ```
//! use handler_logger::prelude::*;
//!
//! let console = BufferedConsole::new();
//! let logger = Logger::builder()
//!     .default_level(Level::Warn)
//!     .console(console.clone())
//!     .build();
//!
//! logger.info(["a"]).unwrap();
//! logger.warn(["b"]).unwrap();
//! assert_eq!(console.texts(), vec!["b"]);
//! ```

pub mod core;
pub mod handlers;
pub mod macros;
pub mod sinks;

pub mod prelude {
    #[cfg(feature = "console")]
    pub use crate::sinks::StdConsole;
    pub use crate::core::{
        Formatter, Handler, HandlerContext, IntoLevel, Level, Logger, LoggerBuilder, LoggerConfig,
        LoggerContext, LoggerError, LoggerOptions, Message, Result, TimestampFormat,
    };
    pub use crate::handlers::{DefaultHandlerOptions, WebHandlerOptions};
    pub use crate::sinks::{BufferedConsole, Console, ConsoleMethod, Element, MemoryElement};
}

pub use core::{
    default_message_formatter, join_messages, Formatter, Handler, HandlerContext, IntoLevel, Level,
    Logger, LoggerBuilder, LoggerConfig, LoggerContext, LoggerError, LoggerOptions, Message,
    NoopHandler, Result, Timers, TimestampFormat,
};
pub use handlers::{DefaultHandlerOptions, WebHandlerOptions};
