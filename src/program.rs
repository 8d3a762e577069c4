//! Program loading
//!
//! Reads program text from disk and strips the line breaks and spaces that
//! source files are usually laid out with. Only `'\n'`, `'\r'` and `' '` are
//! removed; any other character reaches the interpreter unchanged.

use std::fmt;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Failure to read a program file
#[derive(Debug)]
pub enum LoadError {
    /// The file does not exist
    NotFound { path: PathBuf },
    /// Reading the file failed
    Io { path: PathBuf, source: io::Error },
}

impl fmt::Display for LoadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LoadError::NotFound { path } => {
                write!(f, "File '{}' not found", path.display())
            }
            LoadError::Io { path, source } => {
                write!(f, "Failed to read '{}': {}", path.display(), source)
            }
        }
    }
}

impl std::error::Error for LoadError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            LoadError::NotFound { .. } => None,
            LoadError::Io { source, .. } => Some(source),
        }
    }
}

/// Remove line breaks and spaces from program text
pub fn normalize(text: &str) -> String {
    text.chars()
        .filter(|c| !matches!(c, '\n' | '\r' | ' '))
        .collect()
}

/// Read and normalize the program at `path`
pub fn load(path: impl AsRef<Path>) -> Result<String, LoadError> {
    let path = path.as_ref();
    match fs::read_to_string(path) {
        Ok(text) => Ok(normalize(&text)),
        Err(e) if e.kind() == io::ErrorKind::NotFound => Err(LoadError::NotFound {
            path: path.to_path_buf(),
        }),
        Err(source) => Err(LoadError::Io {
            path: path.to_path_buf(),
            source,
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_strips_layout() {
        assert_eq!(normalize("+ +\r\n[ - ]\n"), "++[-]");
    }

    #[test]
    fn test_normalize_keeps_tabs_and_other_symbols() {
        assert_eq!(normalize("+\t#."), "+\t#.");
    }

    #[test]
    fn test_load_missing_file() {
        let err = load("definitely/not/a/real/program.bf").unwrap_err();
        assert!(matches!(err, LoadError::NotFound { .. }));
        assert_eq!(
            err.to_string(),
            "File 'definitely/not/a/real/program.bf' not found"
        );
    }

    #[test]
    fn test_load_reads_and_normalizes() {
        let path = std::env::temp_dir().join(format!("brainf-load-{}.bf", std::process::id()));
        fs::write(&path, "+++\n.\n").unwrap();

        let program = load(&path).unwrap();
        fs::remove_file(&path).unwrap();

        assert_eq!(program, "+++.");
    }
}
