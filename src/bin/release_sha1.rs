//! `wp-release-sha1` entrypoint.
//!
//! Fetches the published SHA-1 checksum for a WordPress release archive and
//! prints the digest to stdout.

use clap::Parser;
use std::io::Write;
use wp_release_tools::checksum::published_sha1;
use wp_release_tools::cli::ReleaseSha1Args;
use wp_release_tools::download::HttpFetcher;
use wp_release_tools::error::Result;
use wp_release_tools::output::{exit_code_for_run_result, write_result_line};

fn main() {
    let args = ReleaseSha1Args::parse();
    let mut stdout = std::io::stdout();
    let mut stderr = std::io::stderr();
    let exit_code = exit_code_for_run_result(run(&args, &mut stdout), &mut stderr);
    if exit_code != 0 {
        std::process::exit(exit_code);
    }
}

fn run(args: &ReleaseSha1Args, stdout: &mut dyn Write) -> Result<()> {
    let digest = published_sha1(&HttpFetcher, &args.version)?;
    write_result_line(stdout, digest)
}
