use colored::Colorize;

use crate::report::{self, Report};

pub fn format_size(bytes: u64) -> String {
    if bytes >= 1_073_741_824 {
        format!("{:.2} GB", bytes as f64 / 1_073_741_824.0)
    } else if bytes >= 1_048_576 {
        format!("{:.2} MB", bytes as f64 / 1_048_576.0)
    } else if bytes >= 1_024 {
        format!("{:.2} KB", bytes as f64 / 1_024.0)
    } else {
        format!("{} B", bytes)
    }
}

pub fn print_banner() {
    println!(
        "{}",
        "cachesweep - expired cache entry cleaner".bold().cyan()
    );
    println!();
}

pub fn print_report(report: &Report) {
    println!("{}", "=== Report ===".bold().white());
    for &category in report::ALL_CATEGORIES {
        let value = report.get(category);
        let rendered = if category.ends_with("_size") {
            format_size(value)
        } else {
            value.to_string()
        };
        println!("  {:<38} {}", category, rendered.green());
    }
    println!();
}

pub fn print_expired(path: &str, timestamp: u64) {
    println!(
        "  {} {}  {}",
        "expired".yellow(),
        path.dimmed(),
        timestamp.to_string().yellow()
    );
}

pub fn print_unexpired(path: &str, timestamp: u64) {
    println!(
        "  {} {}  {}",
        "keep".green(),
        path.dimmed(),
        timestamp.to_string().green()
    );
}

pub fn print_deleted(path: &str, size: &str) {
    println!("  {} {}  {}", "deleted".red(), path.dimmed(), size.yellow());
}

pub fn print_pruned(path: &str) {
    println!("  {} {}", "pruned".red(), path.dimmed());
}

pub fn print_delete_error(path: &str, err: &str) {
    println!(
        "  {} {} — {}",
        "failed".red().bold(),
        path.dimmed(),
        err.red()
    );
}

pub fn print_entry_error(path: &str, err: &str) {
    println!(
        "  {} {} — {}",
        "error".red().bold(),
        path.dimmed(),
        err.red()
    );
}

pub fn print_fatal(msg: &str) {
    eprintln!("{} {}", "Fatal:".red().bold(), msg.red());
}

pub fn print_dry_run_footer() {
    println!(
        "{}",
        "This was a dry run. Run `cachesweep clean <dir> --confirm` to delete."
            .yellow()
            .bold()
    );
}

pub fn print_no_confirm_warning() {
    println!(
        "{}",
        "No --confirm flag provided. Running as dry-run scan."
            .yellow()
            .bold()
    );
    println!();
}
