use crate::error::{CliError, Result};
use serde::Deserialize;
use std::path::Path;

/// A folding run described as a TOML file.
///
/// Every field is optional; command-line flags override whatever the file
/// provides, and anything still missing falls back to the defaults in
/// `commands::fold`.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields, rename_all = "kebab-case")]
pub struct RunFile {
    pub sequence: Option<String>,
    pub path: Option<String>,
    pub steps: Option<u64>,
    pub seed: Option<u64>,
    pub retry_limit: Option<usize>,
}

impl RunFile {
    pub fn load(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        toml::from_str(&contents).map_err(|source| CliError::RunFile {
            path: path.to_path_buf(),
            source,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_run_file(contents: &str) -> (tempfile::TempDir, std::path::PathBuf) {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("run.toml");
        let mut file = std::fs::File::create(&path).unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        (dir, path)
    }

    #[test]
    fn load_parses_a_complete_run_file() {
        let (_dir, path) = write_run_file(
            r#"
sequence = "HPPHHP"
path = "EENWW"
steps = 2000
seed = 42
retry-limit = 500
"#,
        );
        let run = RunFile::load(&path).unwrap();
        assert_eq!(run.sequence.as_deref(), Some("HPPHHP"));
        assert_eq!(run.path.as_deref(), Some("EENWW"));
        assert_eq!(run.steps, Some(2_000));
        assert_eq!(run.seed, Some(42));
        assert_eq!(run.retry_limit, Some(500));
    }

    #[test]
    fn load_accepts_a_minimal_run_file() {
        let (_dir, path) = write_run_file("sequence = \"HPH\"\n");
        let run = RunFile::load(&path).unwrap();
        assert_eq!(run.sequence.as_deref(), Some("HPH"));
        assert_eq!(run.steps, None);
    }

    #[test]
    fn load_rejects_unknown_keys() {
        let (_dir, path) = write_run_file("temperature = 1.5\n");
        assert!(matches!(
            RunFile::load(&path),
            Err(CliError::RunFile { .. })
        ));
    }

    #[test]
    fn load_propagates_missing_file_as_io_error() {
        let result = RunFile::load(Path::new("/nonexistent/run.toml"));
        assert!(matches!(result, Err(CliError::Io(_))));
    }
}
