//! Configuration of an extraction run.

use super::error::Error;
use std::path::{Path, PathBuf};

//------------ Config --------------------------------------------------------

/// The configuration of an extraction run.
#[derive(Clone, Debug)]
pub struct Config {
    /// The directory containing the zone files.
    ///
    /// The statistics file is written here, too.
    pub directory: PathBuf,

    /// The pattern for the names of regular zone files in `directory`.
    pub pattern: String,

    /// Names of additional zone files in `directory`.
    ///
    /// These are processed even if they don’t match `pattern`. If they
    /// don’t exist, they are skipped with a warning.
    pub extra_zones: Vec<String>,

    /// Names of zone files to run through the fast path.
    pub fast_path_zones: Vec<String>,

    /// The number of zone files to process in parallel.
    pub parallel: usize,

    /// Log a count of processed files instead of each file’s name.
    pub progress: bool,

    /// After how many lines the fast path writes out its names.
    pub flush_lines: usize,
}

impl Config {
    /// The default pattern for regular zone files.
    pub const DEFAULT_PATTERN: &'static str = "*.txt.gz";

    /// The default number of lines before the fast path flushes.
    pub const DEFAULT_FLUSH_LINES: usize = 50_000_000;

    /// Creates a default configuration for the given directory.
    pub fn new(directory: impl Into<PathBuf>) -> Self {
        Config {
            directory: directory.into(),
            pattern: Self::DEFAULT_PATTERN.into(),
            extra_zones: vec!["com.zone.gz".into(), "org.zone.gz".into()],
            fast_path_zones: vec!["com.zone.gz".into()],
            parallel: 2,
            progress: false,
            flush_lines: Self::DEFAULT_FLUSH_LINES,
        }
    }

    /// Checks that the configuration can be used.
    pub fn validate(&self) -> Result<(), Error> {
        if self.directory.as_os_str().is_empty() {
            return Err(Error::Config("missing directory"));
        }
        if self.parallel < 1 {
            return Err(Error::Config("parallel must be positive"));
        }
        if self.flush_lines < 1 {
            return Err(Error::Config("flush lines must be positive"));
        }
        Ok(())
    }

    /// Returns whether the given zone file should use the fast path.
    pub fn is_fast_path(&self, path: &Path) -> bool {
        match path.file_name().and_then(|name| name.to_str()) {
            Some(name) => self.fast_path_zones.iter().any(|z| z == name),
            None => false,
        }
    }

    /// Returns the path of the statistics file.
    pub fn stats_path(&self) -> PathBuf {
        self.directory.join("stats")
    }
}

//============ Tests =========================================================

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn validate() {
        assert!(Config::new("/data/zones").validate().is_ok());
        assert!(Config::new("").validate().is_err());

        let mut config = Config::new("/data/zones");
        config.parallel = 0;
        assert!(matches!(config.validate(), Err(Error::Config(_))));
    }

    #[test]
    fn fast_path() {
        let config = Config::new("/data/zones");
        assert!(config.is_fast_path(Path::new("/data/zones/com.zone.gz")));
        assert!(!config.is_fast_path(Path::new("/data/zones/org.zone.gz")));
        assert!(!config.is_fast_path(Path::new("/data/zones/net.txt.gz")));
    }
}
