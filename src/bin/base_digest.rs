//! `wp-base-digest` entrypoint.
//!
//! Resolves the registry manifest digest of a base image via
//! `docker buildx imagetools inspect` and prints it to stdout.

use clap::Parser;
use std::io::Write;
use wp_release_tools::cli::BaseDigestArgs;
use wp_release_tools::error::Result;
use wp_release_tools::inspect::base_image_digest;
use wp_release_tools::output::{exit_code_for_run_result, write_result_line};

fn main() {
    let args = BaseDigestArgs::parse();
    let mut stdout = std::io::stdout();
    let mut stderr = std::io::stderr();
    let exit_code = exit_code_for_run_result(run(&args, &mut stdout), &mut stderr);
    if exit_code != 0 {
        std::process::exit(exit_code);
    }
}

fn run(args: &BaseDigestArgs, stdout: &mut dyn Write) -> Result<()> {
    let digest = base_image_digest(&args.image)?;
    write_result_line(stdout, digest)
}
