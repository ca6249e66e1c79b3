use crate::{append::append_once, config::AppendConfig};
use log::debug;
use std::io::{self, Write};
use std::process::ExitCode;

/**
 * @brief Run one append and report the outcome on `out`.
 * @param cfg What to append to and how.
 * @param out Receives the status line on failure; untouched on success.
 * @return 0 on success, the failure exit status otherwise.
 */
pub fn exit_status_with<W: Write>(cfg: &AppendConfig, out: &mut W) -> u8 {
    match append_once(cfg) {
        Ok(_) => 0,
        Err(e) => {
            debug!("{}: {}", e, e.io_error());
            if let Err(report) = writeln!(out, "{}", e.console_message()).and_then(|()| out.flush()) {
                debug!("could not report failure: {}", report);
            }
            e.exit_status()
        }
    }
}

/// `exit_status_with` as a process exit code.
pub fn run_with<W: Write>(cfg: &AppendConfig, out: &mut W) -> ExitCode {
    ExitCode::from(exit_status_with(cfg, out))
}

/**
 * @brief Append to `./test.txt` with default settings, reporting on stdout.
 * @return Exit code for `main`: success, or 255 after printing the failure line.
 */
pub fn run() -> ExitCode {
    run_with(&AppendConfig::default(), &mut io::stdout().lock())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn success_prints_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let p = dir.path().join("test.txt");
        fs::write(&p, b"").unwrap();
        let mut out = Vec::new();
        assert_eq!(exit_status_with(&AppendConfig::for_target(&p), &mut out), 0);
        assert!(out.is_empty());
        assert_eq!(fs::read(&p).unwrap(), b"CHLOS\n");
    }

    #[test]
    fn missing_file_prints_error() {
        let dir = tempfile::tempdir().unwrap();
        let p = dir.path().join("test.txt");
        let mut out = Vec::new();
        assert_eq!(exit_status_with(&AppendConfig::for_target(&p), &mut out), 255);
        assert_eq!(out, b"error\n");
        assert!(!p.exists());
    }

    #[test]
    fn directory_target_is_an_open_failure() {
        let dir = tempfile::tempdir().unwrap();
        let mut out = Vec::new();
        assert_ne!(exit_status_with(&AppendConfig::for_target(dir.path()), &mut out), 0);
        assert_eq!(out, b"error\n");
    }

    struct BrokenOut;

    impl Write for BrokenOut {
        fn write(&mut self, _: &[u8]) -> io::Result<usize> {
            Err(io::Error::from(io::ErrorKind::BrokenPipe))
        }

        fn flush(&mut self) -> io::Result<()> {
            Err(io::Error::from(io::ErrorKind::BrokenPipe))
        }
    }

    #[test]
    fn unreportable_failure_still_fails() {
        let dir = tempfile::tempdir().unwrap();
        let p = dir.path().join("missing.txt");
        assert_eq!(exit_status_with(&AppendConfig::for_target(&p), &mut BrokenOut), 255);
    }
}
