//! Result and progress line writers for the binaries.
//!
//! The tools print result values to stdout, one per line, and progress or
//! error text to stderr. Both sinks are passed as `dyn Write` so binary
//! logic can be tested against byte buffers. Result writes are fallible:
//! a tool that cannot deliver its result must exit non-zero. Progress and
//! error writes are best-effort.

use crate::error::Result;
use std::io::Write;

/// Write a result line, propagating write failures.
///
/// Used for the stdout result channel: if the result cannot be written,
/// the run must fail rather than exit successfully with no output.
///
/// # Errors
///
/// Returns [`crate::error::ReleaseToolError::Io`] if the write fails.
pub fn write_result_line(sink: &mut dyn Write, message: impl std::fmt::Display) -> Result<()> {
    writeln!(sink, "{message}")?;
    Ok(())
}

/// Write a progress or diagnostic line, ignoring write failures.
///
/// Output failures here are unreportable (the sink is the report channel),
/// so they are swallowed.
pub fn write_line(sink: &mut dyn Write, message: impl std::fmt::Display) {
    if writeln!(sink, "{message}").is_err() {
        // Best-effort output; nowhere to report the failure.
    }
}

/// Map a run result to a process exit code, printing the error to stderr.
#[must_use]
pub fn exit_code_for_run_result(result: Result<()>, stderr: &mut dyn Write) -> i32 {
    match result {
        Ok(()) => 0,
        Err(err) => {
            write_line(stderr, err);
            1
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ReleaseToolError;

    /// A sink whose writes always fail.
    struct BrokenSink;

    impl Write for BrokenSink {
        fn write(&mut self, _buf: &[u8]) -> std::io::Result<usize> {
            Err(std::io::Error::other("sink is broken"))
        }

        fn flush(&mut self) -> std::io::Result<()> {
            Err(std::io::Error::other("sink is broken"))
        }
    }

    #[test]
    fn exit_code_is_zero_on_success_with_no_output() {
        let mut stderr = Vec::new();
        let code = exit_code_for_run_result(Ok(()), &mut stderr);
        assert_eq!(code, 0);
        assert!(stderr.is_empty());
    }

    #[test]
    fn exit_code_is_one_and_error_is_printed() {
        let err = ReleaseToolError::NoOffers;
        let mut stderr = Vec::new();
        let code = exit_code_for_run_result(Err(err), &mut stderr);
        assert_eq!(code, 1);

        let text = String::from_utf8(stderr).expect("stderr was not UTF-8");
        assert!(text.contains("no offers"));
    }

    #[test]
    fn write_result_line_appends_newline() {
        let mut sink = Vec::new();
        write_result_line(&mut sink, "6.4.2").expect("write to buffer");
        assert_eq!(sink, b"6.4.2\n");
    }

    #[test]
    fn failed_result_write_becomes_nonzero_exit() {
        let run_result = write_result_line(&mut BrokenSink, "6.4.2");
        assert!(matches!(run_result, Err(ReleaseToolError::Io(_))));

        let mut stderr = Vec::new();
        let code = exit_code_for_run_result(run_result, &mut stderr);
        assert_eq!(code, 1);
    }

    #[test]
    fn write_line_swallows_failures() {
        // Progress writes have nowhere to report failure; this must not panic.
        write_line(&mut BrokenSink, "Downloading...");
    }
}
