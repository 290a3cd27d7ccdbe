//! doc-depgen entry point
//!
//! Parses the command line, runs the generator and turns any hard failure
//! into a readable message on standard error with exit status 1.

use clap::Parser;
use doc_depgen::cli::Cli;
use doc_depgen::core::user_friendly_error;

fn main() {
    let cli = Cli::parse();

    #[cfg(windows)]
    colored::control::set_virtual_terminal(true).ok();

    if let Err(e) = cli.execute() {
        let error_ctx = user_friendly_error(e);
        error_ctx.display();
        std::process::exit(1);
    }
}
