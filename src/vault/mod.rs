//! Local folder/file storage collaborator.
//!
//! Mirrors the external storage contract: create-folder-if-absent-by-name
//! under a fixed root, create-file-with-bytes within a folder, and soft
//! deletion of temporary artifacts (trashed files are moved aside, not
//! removed, so they stay inspectable).

use crate::errors::AppResult;
use std::fs;
use std::path::{Path, PathBuf};

pub struct Vault {
    root: PathBuf,
}

impl Vault {
    pub fn new<P: Into<PathBuf>>(root: P) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Folder naming convention shared by project creation and PDF output.
    pub fn project_folder_name(project_id: &str, customer_name: &str) -> String {
        format!("{}_{}", project_id, customer_name)
    }

    /// Look up the project folder by name, creating it when absent.
    pub fn ensure_project_folder(&self, project_id: &str, customer_name: &str) -> AppResult<PathBuf> {
        let dir = self
            .root
            .join(Self::project_folder_name(project_id, customer_name));
        if !dir.is_dir() {
            fs::create_dir_all(&dir)?;
        }
        Ok(dir)
    }

    pub fn create_file(&self, folder: &Path, name: &str, bytes: &[u8]) -> AppResult<PathBuf> {
        let path = folder.join(name);
        fs::write(&path, bytes)?;
        Ok(path)
    }

    /// Stage a temporary working copy of a document under the vault root.
    pub fn stage(&self, name: &str, text: &str) -> AppResult<PathBuf> {
        fs::create_dir_all(&self.root)?;
        let path = self.root.join(name);
        fs::write(&path, text)?;
        Ok(path)
    }

    /// Soft delete: move the file into the trash folder under the root.
    pub fn trash(&self, file: &Path) -> AppResult<()> {
        let trash_dir = self.root.join(".trash");
        fs::create_dir_all(&trash_dir)?;
        let name = file
            .file_name()
            .map(|n| n.to_string_lossy().to_string())
            .unwrap_or_else(|| "unnamed".to_string());
        fs::rename(file, trash_dir.join(name))?;
        Ok(())
    }
}
