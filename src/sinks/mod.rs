//! Sinks the built-in handlers write into

pub mod console;
pub mod dom;
pub mod memory;

pub use console::{Console, ConsoleMethod};
#[cfg(feature = "console")]
pub use console::StdConsole;
pub use dom::{escape_html, shared_element, Element, LogElement, MemoryElement, SharedElement};
pub use memory::{BufferedConsole, ConsoleCall};
