//! Source file access
//!
//! The workspace is the only place the tool touches the filesystem for
//! diff input. The diff core itself performs no I/O.

use anyhow::Context;
use std::path::{Path, PathBuf};

#[derive(Debug)]
pub struct Workspace {
    path: Box<Path>,
}

impl Workspace {
    pub fn new(path: Box<Path>) -> Self {
        Workspace { path }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read one source file for comparison.
    ///
    /// A missing file and an empty file are both boundary errors: there is
    /// nothing meaningful to compare against.
    pub fn read_source(&self, file_path: &Path) -> anyhow::Result<String> {
        let file_path = self.resolve(file_path);

        let content = std::fs::read_to_string(&file_path)
            .with_context(|| format!("failed to read source file: {}", file_path.display()))?;

        if content.is_empty() {
            anyhow::bail!("source file is empty: {}", file_path.display());
        }

        Ok(content)
    }

    /// Read one corpus file for vocabulary training. Unlike diff sources,
    /// an empty corpus file is allowed.
    pub fn read_corpus(&self, file_path: &Path) -> anyhow::Result<String> {
        let file_path = self.resolve(file_path);

        std::fs::read_to_string(&file_path)
            .with_context(|| format!("failed to read corpus file: {}", file_path.display()))
    }

    fn resolve(&self, file_path: &Path) -> PathBuf {
        if file_path.is_absolute() {
            file_path.to_path_buf()
        } else {
            self.path.join(file_path)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::Workspace;
    use pretty_assertions::assert_eq;
    use rstest::rstest;
    use std::path::Path;

    #[rstest]
    fn reading_an_existing_source_returns_its_content() -> anyhow::Result<()> {
        let dir = assert_fs::TempDir::new()?;
        std::fs::write(dir.path().join("old.txt"), "some content")?;
        let workspace = Workspace::new(dir.path().to_path_buf().into_boxed_path());

        let content = workspace.read_source(Path::new("old.txt"))?;

        assert_eq!(content, "some content");
        Ok(())
    }

    #[rstest]
    fn reading_a_missing_source_fails() -> anyhow::Result<()> {
        let dir = assert_fs::TempDir::new()?;
        let workspace = Workspace::new(dir.path().to_path_buf().into_boxed_path());

        let result = workspace.read_source(Path::new("absent.txt"));

        assert!(result.is_err());
        Ok(())
    }

    #[rstest]
    fn reading_an_empty_source_fails() -> anyhow::Result<()> {
        let dir = assert_fs::TempDir::new()?;
        std::fs::write(dir.path().join("empty.txt"), "")?;
        let workspace = Workspace::new(dir.path().to_path_buf().into_boxed_path());

        let result = workspace.read_source(Path::new("empty.txt"));

        assert!(result.is_err());
        Ok(())
    }
}
