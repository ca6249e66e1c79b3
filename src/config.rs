use std::path::PathBuf;

/// File the binary appends to, relative to the working directory.
pub const TARGET_PATH: &str = "test.txt";

/// Bytes appended on every run.
pub const PAYLOAD: &[u8] = b"CHLOS\n";

/// Exit status reported on either failure.
pub const FAILURE_EXIT_CODE: u8 = 255;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum WriteMode {
    /// One write call. A short write still counts as success.
    #[default]
    Single,
    /// Keep writing until the whole payload is accepted.
    Full,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppendConfig {
    pub target: PathBuf,
    pub mode: WriteMode,
    pub sync: bool,
}

impl Default for AppendConfig {
    fn default() -> Self {
        Self {
            target: PathBuf::from(TARGET_PATH),
            mode: WriteMode::Single,
            sync: false,
        }
    }
}

impl AppendConfig {
    /**
     * @brief Default settings aimed at another file.
     * @param target Path of an existing file to append to.
     * @return AppendConfig with default mode and no sync.
     */
    pub fn for_target(target: impl Into<PathBuf>) -> Self {
        Self {
            target: target.into(),
            ..Self::default()
        }
    }
}
