//! `wp-latest-version` entrypoint.
//!
//! Queries the WordPress version-check API and prints the latest release
//! version to stdout.

use clap::Parser;
use std::io::Write;
use wp_release_tools::cli::LatestVersionArgs;
use wp_release_tools::download::HttpFetcher;
use wp_release_tools::error::Result;
use wp_release_tools::output::{exit_code_for_run_result, write_result_line};
use wp_release_tools::version::fetch_latest_version;

fn main() {
    // Parsed for --help/--version handling; the tool takes no flags.
    let _args = LatestVersionArgs::parse();
    let mut stdout = std::io::stdout();
    let mut stderr = std::io::stderr();
    let exit_code = exit_code_for_run_result(run(&mut stdout), &mut stderr);
    if exit_code != 0 {
        std::process::exit(exit_code);
    }
}

fn run(stdout: &mut dyn Write) -> Result<()> {
    let version = fetch_latest_version(&HttpFetcher)?;
    write_result_line(stdout, version)
}
