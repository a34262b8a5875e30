//! Common test utilities for depsrc integration tests

#![allow(dead_code)]

use std::path::{Path, PathBuf};

use assert_cmd::Command;
use tempfile::TempDir;

/// A scratch workspace with its own cache root
pub struct TestWorkspace {
    /// Temporary directory
    pub temp: TempDir,
    /// Path to workspace root
    pub path: PathBuf,
    /// Cache root passed to the binary
    pub cache_dir: PathBuf,
}

impl TestWorkspace {
    /// Create a new test workspace
    pub fn new() -> Self {
        let temp = TempDir::new().expect("Failed to create temp directory");
        let path = temp.path().join("work");
        let cache_dir = temp.path().join("cache");
        std::fs::create_dir_all(&path).expect("Failed to create workspace directory");
        Self {
            temp,
            path,
            cache_dir,
        }
    }

    /// Write a file in workspace
    pub fn write_file(&self, path: &str, content: &str) -> PathBuf {
        let file_path = self.path.join(path);
        if let Some(parent) = file_path.parent() {
            std::fs::create_dir_all(parent).expect("Failed to create parent directory");
        }
        std::fs::write(&file_path, content).expect("Failed to write file");
        file_path
    }

    /// Command for the depsrc binary running inside the workspace
    #[allow(deprecated)]
    pub fn cmd(&self) -> Command {
        let mut cmd = Command::cargo_bin("depsrc").expect("Failed to find depsrc binary");
        cmd.current_dir(&self.path);
        cmd.env("DEPSRC_CACHE_DIR", &self.cache_dir);
        cmd.env("GIT_TERMINAL_PROMPT", "0");
        cmd.env_remove("RUST_LOG");
        cmd
    }

    /// Create a git repository in the workspace holding `depsrc.yaml`
    pub fn create_git_repo(&self, name: &str, content: &str) -> GitFixture {
        let path = self.temp.path().join("upstream").join(name);
        let repo = git2::Repository::init(&path).expect("Failed to init repository");
        let fixture = GitFixture { repo, path };
        fixture.commit("depsrc.yaml", content, "Initial commit");
        fixture
    }

    /// Names of the entries under the cache root
    pub fn cache_entries(&self) -> Vec<String> {
        match std::fs::read_dir(&self.cache_dir) {
            Ok(entries) => entries
                .filter_map(Result::ok)
                .map(|e| e.file_name().to_string_lossy().to_string())
                .collect(),
            Err(_) => Vec::new(),
        }
    }
}

impl Default for TestWorkspace {
    fn default() -> Self {
        Self::new()
    }
}

/// An upstream git repository for clone tests
pub struct GitFixture {
    pub repo: git2::Repository,
    pub path: PathBuf,
}

impl GitFixture {
    /// `file://` URL of the repository
    pub fn url(&self) -> String {
        format!("file://{}", self.path.display())
    }

    /// Write `name` and commit it on the current branch
    pub fn commit(&self, name: &str, content: &str, message: &str) {
        std::fs::write(self.path.join(name), content).expect("Failed to write file");

        let mut index = self.repo.index().expect("Failed to open index");
        index.add_path(Path::new(name)).expect("Failed to stage file");
        index.write().expect("Failed to write index");
        let tree_id = index.write_tree().expect("Failed to write tree");
        let tree = self.repo.find_tree(tree_id).expect("Failed to find tree");

        let sig = git2::Signature::now("Test", "test@example.com").expect("Failed to sign");
        let parent = self.repo.head().ok().and_then(|h| h.peel_to_commit().ok());
        let parents: Vec<&git2::Commit<'_>> = parent.iter().collect();
        self.repo
            .commit(Some("HEAD"), &sig, &sig, message, &tree, &parents)
            .expect("Failed to commit");
    }

    /// Tag the current HEAD
    pub fn tag(&self, name: &str) {
        let head = self
            .repo
            .head()
            .and_then(|h| h.peel_to_commit())
            .expect("Failed to resolve HEAD");
        self.repo
            .tag_lightweight(name, head.as_object(), false)
            .expect("Failed to tag");
    }
}

/// Path printed by `depsrc resolve`, trailing newline removed
pub fn stdout_path(output: &std::process::Output) -> PathBuf {
    PathBuf::from(String::from_utf8_lossy(&output.stdout).trim_end())
}
