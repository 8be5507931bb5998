//! Named string results handed to the CI runner.

use crate::error::{ReleaseError, Result};
use std::env;
use std::fs::OpenOptions;
use std::io::Write;
use std::path::PathBuf;

/// Destination for `name -> value` workflow outputs
pub trait OutputSink {
    fn set_output(&mut self, name: &str, value: &str) -> Result<()>;
}

/// Appends outputs to the file named by `GITHUB_OUTPUT`.
///
/// Without a file, outputs are printed as `::set-output` workflow commands.
#[derive(Debug, Clone, Default)]
pub struct GithubOutputFile {
    path: Option<PathBuf>,
}

impl GithubOutputFile {
    pub fn new(path: Option<PathBuf>) -> Self {
        GithubOutputFile { path }
    }

    pub fn from_env() -> Self {
        let path = env::var_os("GITHUB_OUTPUT")
            .filter(|p| !p.is_empty())
            .map(PathBuf::from);
        GithubOutputFile { path }
    }
}

/// `EOF_` followed by 32 random hex digits
fn random_delimiter() -> String {
    let bytes: [u8; 16] = rand::random();
    let hex: String = bytes.iter().map(|b| format!("{:02x}", b)).collect();
    format!("EOF_{}", hex)
}

/// Render one entry in the `GITHUB_OUTPUT` file format
fn format_entry(name: &str, value: &str, delimiter: impl FnOnce() -> String) -> String {
    if value.contains('\n') {
        let delimiter = delimiter();
        format!("{}<<{}\n{}\n{}\n", name, delimiter, value, delimiter)
    } else {
        format!("{}={}\n", name, value)
    }
}

impl OutputSink for GithubOutputFile {
    fn set_output(&mut self, name: &str, value: &str) -> Result<()> {
        let Some(path) = &self.path else {
            println!("::set-output name={}::{}", name, value);
            return Ok(());
        };

        let mut file = OpenOptions::new()
            .append(true)
            .create(true)
            .open(path)
            .map_err(|e| {
                ReleaseError::output(format!("cannot open {}: {}", path.display(), e))
            })?;
        file.write_all(format_entry(name, value, random_delimiter).as_bytes())?;
        tracing::debug!(name, "wrote output");
        Ok(())
    }
}

/// Collects outputs in memory, preserving write order
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MemoryOutputs {
    pub entries: Vec<(String, String)>,
}

impl MemoryOutputs {
    pub fn new() -> Self {
        Self::default()
    }

    /// Most recent value written under `name`
    pub fn get(&self, name: &str) -> Option<&str> {
        self.entries
            .iter()
            .rev()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.as_str())
    }
}

impl OutputSink for MemoryOutputs {
    fn set_output(&mut self, name: &str, value: &str) -> Result<()> {
        self.entries.push((name.to_string(), value.to_string()));
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_format_single_line() {
        assert_eq!(
            format_entry("new-version", "v1.2.3", || unreachable!()),
            "new-version=v1.2.3\n"
        );
    }

    #[test]
    fn test_format_multi_line() {
        assert_eq!(
            format_entry("changelog", "a\nb", || "EOF_x".to_string()),
            "changelog<<EOF_x\na\nb\nEOF_x\n"
        );
    }

    #[test]
    fn test_random_delimiter_shape() {
        let delimiter = random_delimiter();
        assert!(delimiter.starts_with("EOF_"));
        assert_eq!(delimiter.len(), 4 + 32);
        assert!(delimiter[4..].chars().all(|c| c.is_ascii_hexdigit()));
        assert_ne!(delimiter, random_delimiter());
    }

    #[test]
    fn test_github_output_file_appends() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("output");
        fs::write(&path, "existing=1\n").unwrap();

        let mut sink = GithubOutputFile::new(Some(path.clone()));
        sink.set_output("skipped", "false").unwrap();
        sink.set_output("changelog", "line one\nline two").unwrap();

        let content = fs::read_to_string(&path).unwrap();
        let lines: Vec<&str> = content.lines().collect();
        assert_eq!(lines[0], "existing=1");
        assert_eq!(lines[1], "skipped=false");
        assert!(lines[2].starts_with("changelog<<EOF_"));
        assert_eq!(lines[3], "line one");
        assert_eq!(lines[4], "line two");
        assert_eq!(lines[5], &lines[2]["changelog<<".len()..]);
    }

    #[test]
    fn test_memory_outputs_latest_wins() {
        let mut outputs = MemoryOutputs::new();
        outputs.set_output("a", "1").unwrap();
        outputs.set_output("a", "2").unwrap();
        assert_eq!(outputs.get("a"), Some("2"));
        assert_eq!(outputs.get("b"), None);
    }
}
