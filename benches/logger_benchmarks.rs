//! Criterion benchmarks for handler_logger

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use handler_logger::prelude::*;

// ============================================================================
// Filtering Benchmarks
// ============================================================================

fn bench_filtered_calls(c: &mut Criterion) {
    let mut group = c.benchmark_group("filtered");
    group.throughput(Throughput::Elements(1));

    let logger = Logger::builder()
        .default_level(Level::Error)
        .console(BufferedConsole::new())
        .build();

    group.bench_function("debug_below_filter", |b| {
        b.iter(|| logger.debug(black_box(["dropped"])));
    });

    group.bench_function("enabled_for", |b| {
        b.iter(|| logger.enabled_for(black_box(Level::Warn)));
    });

    group.finish();
}

// ============================================================================
// Dispatch Benchmarks
// ============================================================================

fn bench_fan_out(c: &mut Criterion) {
    let mut group = c.benchmark_group("fan_out");
    group.throughput(Throughput::Elements(1));

    for handler_count in [1usize, 4, 16] {
        let logger = Logger::builder().without_default_handler().build();
        for _ in 0..handler_count {
            logger.add_handler(Box::new(|messages: &[Message], _: &HandlerContext| -> Result<()> {
                black_box(messages.len());
                Ok(())
            }));
        }

        group.bench_with_input(
            BenchmarkId::from_parameter(handler_count),
            &handler_count,
            |b, _| {
                b.iter(|| logger.info(black_box(["message", "with", "parts"])));
            },
        );
    }

    group.finish();
}

fn bench_builtin_handlers(c: &mut Criterion) {
    let mut group = c.benchmark_group("builtin_handlers");
    group.throughput(Throughput::Elements(1));

    let console = BufferedConsole::new();
    let logger = Logger::builder()
        .name("bench")
        .console(console.clone())
        .build();
    group.bench_function("console_handler", |b| {
        b.iter(|| {
            logger.warn(black_box(["warning"])).unwrap();
            console.reset();
        });
    });

    let element = MemoryElement::new();
    let web_logger = Logger::builder().without_default_handler().build();
    web_logger.add_handler(
        web_logger.create_web_handler(WebHandlerOptions::new().with_element(element.clone())),
    );
    group.bench_function("web_handler", |b| {
        b.iter(|| {
            web_logger.info(black_box(["<b>markup</b>"])).unwrap();
            handler_logger::clear!(web_logger).unwrap();
        });
    });

    group.finish();
}

criterion_group!(benches, bench_filtered_calls, bench_fan_out, bench_builtin_handlers);
criterion_main!(benches);
