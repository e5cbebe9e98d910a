//! Basic logger usage example
//!
//! Demonstrates the console handler, level filtering and named timers.
//!
//! Run with: cargo run --example basic_usage

use handler_logger::prelude::*;
use handler_logger::{info, warn};

fn main() -> Result<()> {
    println!("=== Handler Logger - Basic Usage Example ===\n");

    let logger = Logger::builder().name("demo").build();

    println!("1. Logging at different levels:");
    logger.debug(["This is a debug message"])?;
    logger.info(["This is an info message"])?;
    logger.warn(["This is a warning message"])?;
    logger.error(["This is an error message"])?;

    println!("\n2. Mixed message values:");
    info!(logger, "processed", 128, "items in", 3.5, "seconds")?;

    println!("\n3. Raising the filter level to WARN:");
    logger.set_level(Level::Warn);
    logger.info(["Info message (hidden)"])?;
    warn!(logger, "Warning message (visible)")?;

    println!("\n4. Timers:");
    logger.set_level(Level::Debug);
    logger.time("Logger Examples")?;
    std::thread::sleep(std::time::Duration::from_millis(25));
    logger.time_end("Logger Examples")?;

    println!("\n=== Example completed successfully! ===");

    Ok(())
}
