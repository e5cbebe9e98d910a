//! Logging macros for mixed-type message lists.
//!
//! Each argument is converted with `Message::from`, so values of different
//! types can be passed in one call, like the arguments of a console call.
//!
//! # Examples
//!
//! ```
//! use handler_logger::prelude::*;
//! use handler_logger::info;
//!
//! let console = BufferedConsole::new();
//! let logger = Logger::builder().console(console.clone()).build();
//!
//! info!(logger, "listening on port", 8080).unwrap();
//! assert_eq!(console.texts(), vec!["listening on port 8080"]);
//! ```

/// Log at DEBUG.
///
/// # Examples
///
/// ```
/// # use handler_logger::prelude::*;
/// # let logger = Logger::builder().without_default_handler().build();
/// use handler_logger::debug;
/// debug!(logger, "counter value:", 10).unwrap();
/// ```
#[macro_export]
macro_rules! debug {
    ($logger:expr, $($arg:expr),+ $(,)?) => {
        $logger.debug([$($crate::Message::from($arg)),+])
    };
}

/// Log at INFO.
///
/// # Examples
///
/// ```
/// # use handler_logger::prelude::*;
/// # let logger = Logger::builder().without_default_handler().build();
/// use handler_logger::info;
/// info!(logger, "processing", 100, "items").unwrap();
/// ```
#[macro_export]
macro_rules! info {
    ($logger:expr, $($arg:expr),+ $(,)?) => {
        $logger.info([$($crate::Message::from($arg)),+])
    };
}

/// Log at WARN.
#[macro_export]
macro_rules! warn {
    ($logger:expr, $($arg:expr),+ $(,)?) => {
        $logger.warn([$($crate::Message::from($arg)),+])
    };
}

/// Log at ERROR.
#[macro_export]
macro_rules! error {
    ($logger:expr, $($arg:expr),+ $(,)?) => {
        $logger.error([$($crate::Message::from($arg)),+])
    };
}

/// Alias for [`debug!`].
#[macro_export]
macro_rules! log {
    ($logger:expr, $($arg:expr),+ $(,)?) => {
        $crate::debug!($logger, $($arg),+)
    };
}

/// Clear the output of every handler, optionally passing messages along.
#[macro_export]
macro_rules! clear {
    ($logger:expr $(,)?) => {
        $logger.clear(::std::iter::empty::<$crate::Message>())
    };
    ($logger:expr, $($arg:expr),+ $(,)?) => {
        $logger.clear([$($crate::Message::from($arg)),+])
    };
}

#[cfg(test)]
mod tests {
    use crate::core::{Level, Logger};
    use crate::sinks::{BufferedConsole, ConsoleMethod};

    fn logger_with(console: &BufferedConsole) -> Logger {
        Logger::builder().console(console.clone()).build()
    }

    #[test]
    fn test_mixed_arguments() {
        let console = BufferedConsole::new();
        let logger = logger_with(&console);

        info!(logger, "user", 42, "active", true).unwrap();

        assert_eq!(console.texts(), vec!["user 42 active true"]);
    }

    #[test]
    fn test_each_level_macro() {
        let console = BufferedConsole::new();
        let logger = logger_with(&console);

        debug!(logger, "d").unwrap();
        info!(logger, "i").unwrap();
        warn!(logger, "w").unwrap();
        error!(logger, "e").unwrap();
        log!(logger, "l").unwrap();
        clear!(logger).unwrap();
        clear!(logger, "reset", 2).unwrap();

        let methods: Vec<_> = console.calls().iter().map(|c| c.method).collect();
        assert_eq!(
            methods,
            vec![
                ConsoleMethod::Debug,
                ConsoleMethod::Info,
                ConsoleMethod::Warn,
                ConsoleMethod::Error,
                ConsoleMethod::Debug,
                ConsoleMethod::Clear,
                ConsoleMethod::Clear,
            ]
        );
    }

    #[test]
    fn test_macros_respect_filter() {
        let console = BufferedConsole::new();
        let logger = logger_with(&console);
        logger.set_level(Level::Error);

        warn!(logger, "hidden").unwrap();
        error!(logger, "shown",).unwrap();

        assert_eq!(console.texts(), vec!["shown"]);
    }
}
