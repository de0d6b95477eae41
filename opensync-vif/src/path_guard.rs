use std::path::{Component, Path, PathBuf};

use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum PathGuardError {
    #[error("empty file name")]
    Empty,
    #[error("file name {0:?} must be a single path component")]
    NotAFileName(String),
}

/// Resolve `name` inside `dir`, refusing anything that could escape it.
pub fn file_in_dir(dir: &Path, name: &str) -> Result<PathBuf, PathGuardError> {
    if name.is_empty() {
        return Err(PathGuardError::Empty);
    }
    // `Path::components` folds `a/./b`, so check the raw text for separators too.
    let mut components = Path::new(name).components();
    let single = matches!(
        (components.next(), components.next()),
        (Some(Component::Normal(_)), None)
    );
    if !single || name.contains(['/', '\\']) || name == ".." {
        return Err(PathGuardError::NotAFileName(name.to_string()));
    }
    Ok(dir.join(name))
}

#[cfg(test)]
mod tests {
    use std::path::Path;

    use super::{file_in_dir, PathGuardError};

    #[test]
    fn accepts_plain_names() {
        let path = file_in_dir(Path::new("/tmp"), "logo.png").expect("path");
        assert_eq!(path, Path::new("/tmp/logo.png"));
    }

    #[test]
    fn rejects_traversal_and_separators() {
        let dir = Path::new("/tmp");
        assert_eq!(file_in_dir(dir, ""), Err(PathGuardError::Empty));
        for name in ["..", ".", "../etc/passwd", "a/b", "/abs", "a\\b"] {
            assert!(file_in_dir(dir, name).is_err(), "{name}");
        }
    }
}
