use colored::Colorize;
use serde::Serialize;

use crate::shared_types::ApiResponse;

pub fn print_json<T: Serialize>(value: &T) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);

    Ok(())
}

/// one bold line for a mutating command, plus the raw envelope when `verbose`
pub fn print_outcome(summary: &str, res: &ApiResponse, verbose: bool) -> anyhow::Result<()> {
    println!("{}", summary.bold());
    if verbose {
        println!("{}", serde_json::to_string(res)?.dimmed());
    }

    Ok(())
}

pub fn print_error(err: &anyhow::Error) {
    eprintln!("{} {:#}", "error:".red().bold(), err);
}
