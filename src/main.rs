use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use clap::Parser;
use spire::Enumerator;
use tracing::{Level, debug};
use tracing_subscriber::FmtSubscriber;

#[derive(Parser, Debug)]
#[command(
    name = "spire",
    about = "Count the distinct values of 2^2^…^2 with n twos over all bracketings"
)]
struct Cli {
    /// Stop after this many terms (default: run until interrupted).
    #[arg(long)]
    limit: Option<usize>,

    /// Log progress details to stderr.
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let level = if cli.verbose > 0 { Level::DEBUG } else { Level::INFO };
    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)
        .context("failed to set tracing subscriber")?;

    let start = Instant::now();
    let mut enumerator = Enumerator::new();

    let mut n = 1;
    while cli.limit.is_none_or(|limit| n <= limit) {
        let count = enumerator.term(n)?;
        let elapsed = start.elapsed();
        debug!(n, count, ?elapsed, "term computed");
        println!(
            "a({n}) = {count} {} {:>12}",
            format_elapsed(elapsed),
            format_resident()
        );
        n += 1;
    }

    Ok(())
}

fn format_elapsed(elapsed: Duration) -> String {
    let centis = elapsed.as_millis() / 10;
    let (seconds, centis) = (centis / 100, centis % 100);
    let (minutes, seconds) = (seconds / 60, seconds % 60);
    let (hours, minutes) = (minutes / 60, minutes % 60);
    format!("{hours}:{minutes:02}:{seconds:02}.{centis:02}")
}

/// Resident set size in megabytes to two decimals, or a dash where the
/// platform offers no cheap way to read it.
fn format_resident() -> String {
    match resident_kb() {
        Some(kb) => format!("{:.2}", kb as f64 / 1024.0),
        None => "-".to_string(),
    }
}

#[cfg(target_os = "linux")]
fn resident_kb() -> Option<u64> {
    let status = std::fs::read_to_string("/proc/self/status").ok()?;
    let line = status.lines().find(|line| line.starts_with("VmRSS:"))?;
    line.split_whitespace().nth(1)?.parse().ok()
}

#[cfg(not(target_os = "linux"))]
fn resident_kb() -> Option<u64> {
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_elapsed() {
        assert_eq!(format_elapsed(Duration::ZERO), "0:00:00.00");
        assert_eq!(format_elapsed(Duration::from_millis(12_340)), "0:00:12.34");
        assert_eq!(
            format_elapsed(Duration::from_secs(2 * 3600 + 5 * 60 + 7)),
            "2:05:07.00"
        );
    }
}
