//! CLI command handler: measure one directory and print the total.

use anyhow::Result;
use log::debug;

use crate::du_dir;
use crate::engine::arg_parser::Cli;
use crate::engine::report::format_total;
use crate::utils::setup_logging;

/// Run the disk usage computation for `cli.dir` and print the one-line report to stdout.
pub fn handle_run(cli: &Cli) -> Result<()> {
    setup_logging(cli.verbose);
    let opts = cli.opts();
    debug!("Measuring {} with {} workers", cli.dir.display(), opts.num_workers);
    let usage = du_dir(&cli.dir, &opts)?;
    println!("{}", format_total(usage.total_bytes));
    Ok(())
}
