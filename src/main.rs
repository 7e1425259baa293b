//! Currency Formatter CLI
//!
//! Command-line interface for formatting and parsing currency strings.
//!
//! # Usage
//!
//! ```bash
//! currency-fmt format 1000.456 --currency EUR                 # € 1.000,46
//! currency-fmt format 1000.456 --currency USD --suffix USD    # 1,000.46 USD
//! currency-fmt format 1000.456 -c GBP --prefix £ -d 2 \
//!     --thousands-separator , --decimals-separator .          # £ 1,000.46
//! currency-fmt parse "1.234,56"                               # 1234.56
//! currency-fmt batch amounts.csv > formatted.csv
//! currency-fmt currencies
//! ```
//!
//! Diagnostics go to stderr; set `RUST_LOG` (e.g. `RUST_LOG=currency_formatter=info`)
//! for more detail.
//!
//! # Exit Codes
//!
//! - 0: Success
//! - 1: Error (invalid value, incomplete configuration, unreadable input, etc.)

use currency_formatter::cli::{self, Command, FormatArgs};
use currency_formatter::{BatchFormatter, CurrencyFormatter, FormatError};
use std::process;
use tracing::error;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn main() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "currency_formatter=warn,currency_fmt=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let args = cli::parse_args();

    if let Err(e) = run(args.command) {
        error!("{}", e);
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}

fn run(command: Command) -> Result<(), FormatError> {
    match command {
        Command::Format(format_args) => {
            println!("{}", format_value(&format_args)?);
        }
        Command::Parse { text } => {
            println!("{}", CurrencyFormatter::parse_to_number(&text));
        }
        Command::Batch { input_file } => {
            let mut output = std::io::stdout();
            BatchFormatter::new().process(&input_file, &mut output)?;
        }
        Command::Currencies => {
            for code in CurrencyFormatter::new().resolver().codes() {
                println!("{}", code);
            }
        }
    }
    Ok(())
}

fn format_value(args: &FormatArgs) -> Result<String, FormatError> {
    CurrencyFormatter::new()
        .select_currency(&args.currency)
        .apply(&args.to_overrides())
        .set_value(args.value)?
        .format()
}
