//! intake CLI entry point
//!
//! A minimal entrypoint that delegates to the CLI module and exits
//! with its code: 0 valid, 1 validation failures, 2 usage or I/O
//! error.

use intake::cli;

fn main() {
    std::process::exit(cli::run());
}
