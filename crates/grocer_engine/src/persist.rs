use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use grocer_logging::grocer_debug;
use tempfile::NamedTempFile;
use thiserror::Error;

pub const GROCERY_LIST_FILENAME: &str = "grocery-list.txt";

#[derive(Debug, Error)]
pub enum PersistError {
    #[error("{} exists and is not a directory", .0.display())]
    NotADirectory(PathBuf),
    #[error("cannot create {}: {source}", path.display())]
    CreateDir { path: PathBuf, source: io::Error },
    #[error("cannot write {}: {source}", path.display())]
    Write { path: PathBuf, source: io::Error },
}

/// Creates `dir` (and parents) unless it already is a directory.
pub fn ensure_output_dir(dir: &Path) -> Result<(), PersistError> {
    if dir.is_dir() {
        return Ok(());
    }
    if dir.exists() {
        return Err(PersistError::NotADirectory(dir.to_path_buf()));
    }
    fs::create_dir_all(dir).map_err(|source| PersistError::CreateDir {
        path: dir.to_path_buf(),
        source,
    })
}

/// Output directory for saved grocery lists.
///
/// Files are written to a temp file in the same directory and then renamed
/// over the target, so an interrupted run leaves the previous list intact.
#[derive(Debug, Clone)]
pub struct ListStore {
    dir: PathBuf,
}

impl ListStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Saves `grocery_list` as [`GROCERY_LIST_FILENAME`], newline-terminated.
    pub fn save(&self, grocery_list: &str) -> Result<PathBuf, PersistError> {
        let mut content = grocery_list.trim_end().to_string();
        content.push('\n');
        self.save_as(GROCERY_LIST_FILENAME, &content)
    }

    pub fn save_as(&self, filename: &str, content: &str) -> Result<PathBuf, PersistError> {
        ensure_output_dir(&self.dir)?;
        let target = self.dir.join(filename);
        let write_err = |source| PersistError::Write {
            path: target.clone(),
            source,
        };

        let mut tmp = NamedTempFile::new_in(&self.dir).map_err(write_err)?;
        tmp.write_all(content.as_bytes()).map_err(write_err)?;
        tmp.as_file_mut().sync_all().map_err(write_err)?;
        tmp.persist(&target).map_err(|err| write_err(err.error))?;

        grocer_debug!("Wrote {} bytes to {:?}", content.len(), target);
        Ok(target)
    }
}

/// Shorthand for `ListStore::new(dir).save(grocery_list)`.
pub fn write_grocery_list(dir: &Path, grocery_list: &str) -> Result<PathBuf, PersistError> {
    ListStore::new(dir).save(grocery_list)
}
