#![deny(
    warnings,
    clippy::all,
    clippy::pedantic,
    clippy::nursery,
    clippy::cargo
)]
#![allow(clippy::multiple_crate_versions)]

use anyhow::Result;
use clap::Parser;
use sportlog::{cli, packages, report, utils};

#[macro_use]
extern crate sportlog;

fn main() -> Result<()> {
    let cli = cli::Cli::parse();
    utils::init_logging(cli.verbose, cli.quiet);

    let pkgs = match &cli.packages {
        Some(path) => packages::read_packages_file(path)?,
        None => {
            dlog!("no packages file given, using built-in samples");
            packages::default_packages()
        }
    };
    dlog!(
        "mode=summarise packages={} format={:?} details={} keep_going={}",
        pkgs.len(),
        cli.format,
        cli.details,
        cli.keep_going
    );

    let failed = report::run_batch(&pkgs, cli.keep_going, |i, pkg, summary| {
        let details = cli.details.then_some((i, pkg.code.as_str()));
        println!("{}", report::render(summary, cli.format, details)?);
        Ok(())
    })?;

    report::ensure_all_summarised(failed, pkgs.len())
}
