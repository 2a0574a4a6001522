//! Learning-project scaffolding
//!
//! Writes the placeholder directory tree a student fills in while working
//! through the exercises: a conversation log, frontend and backend stubs,
//! and a README.

use crate::Result;
use std::fs;
use std::path::{Path, PathBuf};

const CHAT_LOG_PLACEHOLDER: &str = "Paste your entire conversation here\n";
const FRONTEND_PLACEHOLDER: &str = "// Paste the content of docker-learning-app.tsx here\n";
const BACKEND_PLACEHOLDER: &str = "# Paste the content of main.py here\n";
const README_PLACEHOLDER: &str = "# Paste the content of the README.md here\n";

/// Manages paths inside the scaffolded project tree
#[derive(Debug, Clone)]
pub struct ProjectPaths {
    root: PathBuf,
}

impl ProjectPaths {
    /// Create a new ProjectPaths instance rooted at the given directory
    pub fn new(root: impl AsRef<Path>) -> Self {
        Self {
            root: root.as_ref().to_path_buf(),
        }
    }

    /// Get the root directory
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Directory holding the conversation log
    pub fn conversation_dir(&self) -> PathBuf {
        self.root.join("conversation")
    }

    /// Directory for frontend sources
    pub fn frontend_dir(&self) -> PathBuf {
        self.root.join("src").join("frontend")
    }

    /// Directory for backend sources
    pub fn backend_dir(&self) -> PathBuf {
        self.root.join("src").join("backend")
    }

    /// Directory for documentation
    pub fn docs_dir(&self) -> PathBuf {
        self.root.join("docs")
    }

    /// Conversation log file
    pub fn chat_log(&self) -> PathBuf {
        self.conversation_dir().join("chat_log.md")
    }

    /// Frontend application stub
    pub fn frontend_app(&self) -> PathBuf {
        self.frontend_dir().join("docker-learning-app.tsx")
    }

    /// Backend application stub
    pub fn backend_main(&self) -> PathBuf {
        self.backend_dir().join("main.py")
    }

    /// Project README
    pub fn readme(&self) -> PathBuf {
        self.root.join("README.md")
    }

    /// Ensure all required directories exist
    pub fn ensure_directories(&self) -> Result<()> {
        fs::create_dir_all(self.conversation_dir())?;
        fs::create_dir_all(self.frontend_dir())?;
        fs::create_dir_all(self.backend_dir())?;
        fs::create_dir_all(self.docs_dir())?;
        Ok(())
    }
}

/// Create the project tree and write the placeholder files.
///
/// Safe to run repeatedly; existing placeholders are overwritten.
pub fn create(root: impl AsRef<Path>) -> Result<ProjectPaths> {
    let paths = ProjectPaths::new(root);
    paths.ensure_directories()?;

    fs::write(paths.chat_log(), CHAT_LOG_PLACEHOLDER)?;
    fs::write(paths.frontend_app(), FRONTEND_PLACEHOLDER)?;
    fs::write(paths.backend_main(), BACKEND_PLACEHOLDER)?;
    fs::write(paths.readme(), README_PLACEHOLDER)?;

    Ok(paths)
}
