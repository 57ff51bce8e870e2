// src/core/test_utils.rs
use anyhow::Result;
use std::fs::{self, File};
use std::io::Write as _;
use std::path::PathBuf;
use tempfile::TempDir;

pub fn create_test_file(dir: &TempDir, name: &str, content: &str) -> Result<PathBuf> {
    let file_path = dir.path().join(name);
    if let Some(parent) = file_path.parent() {
        fs::create_dir_all(parent)?;
    }
    let mut file = File::create(&file_path)?;
    file.write_all(content.as_bytes())?;
    Ok(file_path)
}

pub fn setup_test_project() -> Result<TempDir> {
    let dir = TempDir::new()?;

    create_test_file(&dir, "main.py", "import app\n")?;
    create_test_file(&dir, "README.md", "# Project\n")?;
    create_test_file(&dir, "app/__init__.py", "")?;
    create_test_file(&dir, "app/models.py", "class Model:\n    pass\n")?;
    create_test_file(&dir, "app/data.json", "{}")?;
    create_test_file(&dir, "app/migrations/0001_initial.py", "")?;
    create_test_file(&dir, "tests/conftest.py", "")?;
    create_test_file(&dir, "tests/test_models.py", "")?;

    create_test_file(&dir, "venv/lib/site.py", "")?;
    create_test_file(&dir, "app/__pycache__/models.py", "")?;
    create_test_file(&dir, "node_modules/pkg/build.py", "")?;
    create_test_file(&dir, ".git/hooks/pre_commit.py", "")?;
    create_test_file(&dir, ".hidden/secret.py", "")?;

    Ok(dir)
}
