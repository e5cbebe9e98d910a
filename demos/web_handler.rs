//! DOM handler example
//!
//! Renders log calls into an in-memory element and prints the resulting
//! markup, alongside the console output of the default handler.
//!
//! Run with: cargo run --example web_handler

use handler_logger::prelude::*;

fn main() -> Result<()> {
    let element = MemoryElement::new();
    let logger = Logger::new();
    let options = WebHandlerOptions::new().with_element(element.clone());
    logger.add_handler(logger.create_web_handler(options));

    logger.time("Logger Examples")?;
    logger.info(["Info message"])?;
    logger.warn(["Warning message"])?;
    logger.error(["EMERGENCY"])?;
    logger.time_end("Logger Examples")?;

    println!("\nRendered markup:");
    for child in element.children() {
        println!("  {}", child.outer_html());
    }

    handler_logger::clear!(logger)?;
    println!("\nAfter clear: {} children", element.len());

    Ok(())
}
