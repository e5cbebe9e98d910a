//! Core logger types and traits

pub mod config;
pub mod context;
pub mod error;
pub mod handler;
pub mod level;
pub mod logger;
pub mod message;
pub mod timers;
pub mod timestamp;

pub use config::LoggerConfig;
pub use context::{HandlerContext, LoggerContext};
pub use error::{LoggerError, Result};
pub use handler::{default_message_formatter, Formatter, Handler, NoopHandler};
pub use level::{IntoLevel, Level};
pub use logger::{Logger, LoggerBuilder, LoggerOptions};
pub use message::{join_messages, Message};
pub use timers::Timers;
pub use timestamp::TimestampFormat;
