//! Benchmark suite for formatting and parsing
//!
//! # Running Benchmarks
//!
//! ```bash
//! cargo bench
//! ```

use currency_formatter::CurrencyFormatter;
use divan::black_box;

fn main() {
    divan::main();
}

/// Select, configure and render a EUR value
#[divan::bench]
fn format_eur() -> String {
    CurrencyFormatter::new()
        .select_currency(black_box("EUR"))
        .set_value(black_box(1234567.891))
        .and_then(|handle| handle.with_suffix("Eur").format())
        .expect("Formatting failed")
}

/// Render through a formatter reused across iterations
#[divan::bench]
fn format_usd_reused_formatter(bencher: divan::Bencher) {
    let formatter = CurrencyFormatter::new();

    bencher.bench_local(|| {
        formatter
            .select_currency(black_box("usd"))
            .with_decimals(3)
            .set_value(black_box(-987654321.5))
            .and_then(|handle| handle.format())
            .expect("Formatting failed")
    });
}

/// Parse strings of both separator conventions
#[divan::bench(args = ["€ 1.234.567,89", "$ 1,234,567.89", "1234567"])]
fn parse_to_number(text: &str) -> f64 {
    CurrencyFormatter::parse_to_number(black_box(text))
}
