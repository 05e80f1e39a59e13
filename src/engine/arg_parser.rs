use clap::Parser;
use std::path::PathBuf;

use crate::DuOpts;
use crate::utils::config::WorkerConsts;

/// Parallel disk usage: total bytes of every file under a directory.
#[derive(Clone, Debug, Parser)]
#[command(name = "pardu")]
#[command(about = "Sum the size of every file under DIRECTORY using WORKERS threads.")]
pub struct Cli {
    /// Directory to measure.
    #[arg(value_name = "DIRECTORY")]
    pub dir: PathBuf,

    /// Number of worker threads (at least 1).
    #[arg(value_name = "WORKERS", value_parser = parse_worker_count)]
    pub workers: usize,

    /// Verbose output.
    #[arg(long, short = 'v')]
    pub verbose: bool,

    /// Follow symbolic links.
    #[arg(long, short = 'f')]
    pub follow_links: bool,
}

impl Cli {
    /// Library options for this invocation.
    pub fn opts(&self) -> DuOpts {
        DuOpts {
            num_workers: self.workers,
            follow_links: self.follow_links,
        }
    }
}

fn parse_worker_count(s: &str) -> Result<usize, String> {
    let n: usize = s
        .parse()
        .map_err(|_| format!("`{s}` is not a whole number"))?;
    if n < WorkerConsts::MIN_WORKERS {
        return Err(format!("must be at least {}", WorkerConsts::MIN_WORKERS));
    }
    Ok(n)
}
