//! Console-like sink capability
//!
//! A console exposes a guaranteed `log` method plus optional capabilities
//! (level-specific output, native timers, clearing). Handlers probe
//! [`Console::supports`] at call time and fall back to `log` when a
//! capability is missing.

use crate::core::{Message, Result};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ConsoleMethod {
    Log,
    Debug,
    Info,
    Warn,
    Error,
    Time,
    TimeEnd,
    Clear,
}

impl ConsoleMethod {
    pub const ALL: [ConsoleMethod; 8] = [
        ConsoleMethod::Log,
        ConsoleMethod::Debug,
        ConsoleMethod::Info,
        ConsoleMethod::Warn,
        ConsoleMethod::Error,
        ConsoleMethod::Time,
        ConsoleMethod::TimeEnd,
        ConsoleMethod::Clear,
    ];
}

pub trait Console: Send {
    /// Whether the optional capability is available right now.
    ///
    /// `Log` is always available regardless of the answer.
    fn supports(&self, method: ConsoleMethod) -> bool;

    /// Generic output; the fallback for every other method
    fn log(&mut self, messages: &[Message]) -> Result<()>;

    /// Emit through a level-specific method.
    ///
    /// Only called for methods that `supports` reported.
    fn write(&mut self, method: ConsoleMethod, messages: &[Message]) -> Result<()> {
        let _ = method;
        self.log(messages)
    }

    fn time(&mut self, _label: &str) -> Result<()> {
        Ok(())
    }

    fn time_end(&mut self, _label: &str) -> Result<()> {
        Ok(())
    }

    fn clear(&mut self) -> Result<()> {
        Ok(())
    }
}

impl<C: Console + ?Sized> Console for Box<C> {
    fn supports(&self, method: ConsoleMethod) -> bool {
        (**self).supports(method)
    }

    fn log(&mut self, messages: &[Message]) -> Result<()> {
        (**self).log(messages)
    }

    fn write(&mut self, method: ConsoleMethod, messages: &[Message]) -> Result<()> {
        (**self).write(method, messages)
    }

    fn time(&mut self, label: &str) -> Result<()> {
        (**self).time(label)
    }

    fn time_end(&mut self, label: &str) -> Result<()> {
        (**self).time_end(label)
    }

    fn clear(&mut self) -> Result<()> {
        (**self).clear()
    }
}

#[cfg(feature = "console")]
pub use self::std_console::StdConsole;

#[cfg(feature = "console")]
mod std_console {
    use super::{Console, ConsoleMethod};
    use crate::core::{join_messages, Message, Result, TimestampFormat};
    use colored::Colorize;
    use std::collections::HashMap;
    use std::io::Write;
    use std::time::Instant;

    const CLEAR_SCREEN: &str = "\x1b[2J\x1b[1;1H";

    /// Terminal console writing to stdout and stderr
    pub struct StdConsole {
        use_colors: bool,
        timestamp_format: Option<TimestampFormat>,
        timers: HashMap<String, Instant>,
    }

    impl StdConsole {
        pub fn new() -> Self {
            Self {
                use_colors: true,
                timestamp_format: None,
                timers: HashMap::new(),
            }
        }

        pub fn with_colors(use_colors: bool) -> Self {
            Self {
                use_colors,
                ..Self::new()
            }
        }

        /// Prefix every line with the time of the call
        ///
        /// # Examples
        ///
        /// ```
        /// use handler_logger::sinks::StdConsole;
        /// use handler_logger::TimestampFormat;
        ///
        /// let console = StdConsole::new()
        ///     .with_timestamp_format(TimestampFormat::LocalTime);
        /// ```
        #[must_use]
        pub fn with_timestamp_format(mut self, format: TimestampFormat) -> Self {
            self.timestamp_format = Some(format);
            self
        }

        fn render(&self, method: ConsoleMethod, messages: &[Message]) -> String {
            let text = join_messages(messages);
            let text = if self.use_colors {
                match method {
                    ConsoleMethod::Debug => text.bright_black().to_string(),
                    ConsoleMethod::Warn => text.yellow().to_string(),
                    ConsoleMethod::Error => text.red().to_string(),
                    _ => text,
                }
            } else {
                text
            };

            match &self.timestamp_format {
                Some(format) => format!("{} {}", format.now(), text),
                None => text,
            }
        }

        fn emit(&self, method: ConsoleMethod, line: &str) -> Result<()> {
            // Route Warn and Error to stderr, others to stdout
            match method {
                ConsoleMethod::Warn | ConsoleMethod::Error => {
                    writeln!(std::io::stderr().lock(), "{}", line)?;
                }
                _ => {
                    writeln!(std::io::stdout().lock(), "{}", line)?;
                }
            }
            Ok(())
        }
    }

    impl Default for StdConsole {
        fn default() -> Self {
            Self::new()
        }
    }

    impl Console for StdConsole {
        fn supports(&self, _method: ConsoleMethod) -> bool {
            true
        }

        fn log(&mut self, messages: &[Message]) -> Result<()> {
            self.write(ConsoleMethod::Log, messages)
        }

        fn write(&mut self, method: ConsoleMethod, messages: &[Message]) -> Result<()> {
            let line = self.render(method, messages);
            self.emit(method, &line)
        }

        fn time(&mut self, label: &str) -> Result<()> {
            self.timers.insert(label.to_string(), Instant::now());
            Ok(())
        }

        fn time_end(&mut self, label: &str) -> Result<()> {
            match self.timers.remove(label) {
                Some(start) => {
                    let ms = start.elapsed().as_secs_f64() * 1000.0;
                    let text = Message::String(format!("{}: {:.3}ms", label, ms));
                    let line = self.render(ConsoleMethod::Log, &[text]);
                    self.emit(ConsoleMethod::Log, &line)
                }
                None => {
                    let line = self.render(
                        ConsoleMethod::Warn,
                        &[Message::String(format!("Timer '{}' does not exist", label))],
                    );
                    self.emit(ConsoleMethod::Warn, &line)
                }
            }
        }

        fn clear(&mut self) -> Result<()> {
            let mut stdout = std::io::stdout().lock();
            stdout.write_all(CLEAR_SCREEN.as_bytes())?;
            stdout.flush()?;
            Ok(())
        }
    }

}
