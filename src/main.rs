mod classify;
mod cli;
mod expiry;
mod output;
mod pruner;
mod report;
mod scanner;
mod sweep;

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;

use crate::sweep::SweepOptions;

fn main() -> ExitCode {
    let cli = cli::Cli::parse();

    output::print_banner();

    let (directory, clean, verbose) = match cli.command {
        cli::Command::Scan { directory, verbose } => (directory, false, verbose),
        cli::Command::Clean {
            directory,
            confirm,
            verbose,
        } => {
            if !confirm {
                output::print_no_confirm_warning();
            }
            (directory, confirm, verbose)
        }
    };

    let options = SweepOptions {
        root: PathBuf::from(directory),
        clean,
        verbose,
    };

    match sweep::sweep(&options) {
        Ok(report) => {
            output::print_report(&report);
            if !clean {
                output::print_dry_run_footer();
            }
            ExitCode::SUCCESS
        }
        Err(e) => {
            output::print_fatal(&format!("{}: {e}", options.root.display()));
            ExitCode::FAILURE
        }
    }
}
