//! `wp-compute-tags` entrypoint.
//!
//! Derives the ordered image tag list for a build and prints one
//! fully-qualified tag per line.

use clap::Parser;
use std::io::Write;
use wp_release_tools::cli::ComputeTagsArgs;
use wp_release_tools::error::Result;
use wp_release_tools::output::{exit_code_for_run_result, write_result_line};
use wp_release_tools::tags::compute_tags;

fn main() {
    let args = ComputeTagsArgs::parse();
    let mut stdout = std::io::stdout();
    let mut stderr = std::io::stderr();
    let exit_code = exit_code_for_run_result(run(&args, &mut stdout), &mut stderr);
    if exit_code != 0 {
        std::process::exit(exit_code);
    }
}

fn run(args: &ComputeTagsArgs, stdout: &mut dyn Write) -> Result<()> {
    let tags = compute_tags(
        &args.image,
        &args.wp_version,
        args.distro,
        &args.base_digest_short,
        args.rolling.as_deref(),
    );
    for tag in tags {
        write_result_line(stdout, tag)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prints_one_tag_per_line_in_order() {
        let args = ComputeTagsArgs::parse_from([
            "wp-compute-tags",
            "--image",
            "x",
            "--wp-version",
            "6.4",
            "--distro",
            "debian",
            "--base-digest-short",
            "abc123",
        ]);
        let mut stdout = Vec::new();
        run(&args, &mut stdout).expect("pure computation");

        let text = String::from_utf8(stdout).expect("stdout was not UTF-8");
        assert_eq!(text, "x:6.4-debian\nx:6.4\nx:6.4-debian-base-abc123\n");
    }

    #[test]
    fn rolling_tags_lead_the_output() {
        let args = ComputeTagsArgs::parse_from([
            "wp-compute-tags",
            "--image",
            "x",
            "--wp-version",
            "6.4",
            "--distro",
            "alpine",
            "--base-digest-short",
            "abc123",
            "--rolling",
            "latest",
        ]);
        let mut stdout = Vec::new();
        run(&args, &mut stdout).expect("pure computation");

        let text = String::from_utf8(stdout).expect("stdout was not UTF-8");
        assert!(text.starts_with("x:latest\n"));
    }
}
