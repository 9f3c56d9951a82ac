//! `wp-fetch-assets` entrypoint.
//!
//! Downloads the WordPress release archive and the WP-CLI phar, verifies
//! the archive checksum when one is supplied, and extracts the archive into
//! the output directory. Prints nothing to stdout; progress goes to stderr.

use clap::Parser;
use wp_release_tools::cli::FetchAssetsArgs;
use wp_release_tools::download::HttpFetcher;
use wp_release_tools::error::Result;
use wp_release_tools::fetch::{FetchConfig, fetch_assets};
use wp_release_tools::output::exit_code_for_run_result;
use wp_release_tools::sha1_digest::Sha1Digest;

fn main() {
    let args = FetchAssetsArgs::parse();
    let mut stderr = std::io::stderr();
    let run_result = run(&args, &mut stderr);
    let exit_code = exit_code_for_run_result(run_result, &mut stderr);
    if exit_code != 0 {
        std::process::exit(exit_code);
    }
}

fn run(args: &FetchAssetsArgs, stderr: &mut dyn std::io::Write) -> Result<()> {
    let expected_sha1 = Sha1Digest::parse_flag(args.wordpress_sha1.as_deref())?;

    let config = FetchConfig {
        wordpress_version: args.wordpress_version.clone(),
        expected_sha1,
        wp_cli_version: args.wp_cli_version.clone(),
        out_dir: args.out_dir.clone(),
    };
    fetch_assets(&HttpFetcher, &config, stderr)
}
