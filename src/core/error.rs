//! Error types for the logger system

pub type Result<T> = std::result::Result<T, LoggerError>;

#[derive(Debug, thiserror::Error)]
pub enum LoggerError {
    /// Generic IO error
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    /// JSON (de)serialization error
    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),

    /// A sink (console, element) refused a write
    #[error("Sink error ({sink}): {message}")]
    SinkError { sink: String, message: String },

    /// A registered handler failed
    #[error("Handler error: {0}")]
    HandlerError(String),
}

impl LoggerError {
    /// Create a sink error
    pub fn sink(sink: impl Into<String>, message: impl Into<String>) -> Self {
        LoggerError::SinkError {
            sink: sink.into(),
            message: message.into(),
        }
    }

    /// Create a handler error
    pub fn handler<S: Into<String>>(msg: S) -> Self {
        LoggerError::HandlerError(msg.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_creation() {
        let err = LoggerError::sink("console", "closed");
        assert!(matches!(err, LoggerError::SinkError { .. }));

        let err = LoggerError::handler("boom");
        assert!(matches!(err, LoggerError::HandlerError(_)));
    }

    #[test]
    fn test_error_display() {
        let err = LoggerError::sink("element", "detached from document");
        assert_eq!(err.to_string(), "Sink error (element): detached from document");

        let err = LoggerError::handler("boom");
        assert_eq!(err.to_string(), "Handler error: boom");
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = std::io::Error::new(std::io::ErrorKind::BrokenPipe, "pipe closed");
        let err: LoggerError = io_err.into();

        assert!(matches!(err, LoggerError::IoError(_)));
        assert!(err.to_string().contains("pipe closed"));
    }
}
