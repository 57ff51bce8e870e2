// tests/integration_tests/collection_test.rs
use super::common::{create_test_file, setup_test_project};
use anyhow::Result;
use std::path::{Path, PathBuf};
use tempfile::TempDir;
use undersort::{EXCLUDED_DIRS, collect_python_files};

fn names(root: &Path, files: &[PathBuf]) -> Vec<String> {
    files
        .iter()
        .filter_map(|file| file.strip_prefix(root).ok())
        .map(|file| file.to_string_lossy().into_owned())
        .collect()
}

#[test]
fn test_collects_only_python_sources() -> Result<()> {
    let temp_dir = TempDir::new()?;
    for index in 0..5 {
        create_test_file(temp_dir.path(), &format!("pkg/module_{index}.py"), "")?;
        create_test_file(temp_dir.path(), &format!("pkg/notes_{index}.txt"), "")?;
    }
    create_test_file(temp_dir.path(), "pkg/stub.pyi", "")?;
    create_test_file(temp_dir.path(), "pkg/compiled.pyc", "")?;

    let files = collect_python_files::<&str>(temp_dir.path(), true, &[]);

    assert_eq!(files.len(), 5, "Should collect exactly the .py files");
    assert!(
        files
            .iter()
            .all(|file| file.extension().is_some_and(|ext| ext == "py"))
    );
    Ok(())
}

#[test]
fn test_project_layout() -> Result<()> {
    let temp_dir = setup_test_project()?;
    let files = collect_python_files::<&str>(temp_dir.path(), true, &[]);

    assert_eq!(
        names(temp_dir.path(), &files),
        vec![
            "app/__init__.py",
            "app/migrations/0001_initial.py",
            "app/models.py",
            "app/service.py",
            "main.py",
            "tests/conftest.py",
        ]
    );
    Ok(())
}

#[test]
fn test_denylisted_directories_win_over_patterns() -> Result<()> {
    let temp_dir = setup_test_project()?;
    let files = collect_python_files(temp_dir.path(), true, &["nothing/*"]);

    for file in names(temp_dir.path(), &files) {
        for excluded in EXCLUDED_DIRS {
            assert!(
                !file.split('/').any(|segment| segment == excluded),
                "{file} is inside {excluded}"
            );
        }
        assert!(
            !file.split('/').any(|segment| segment.starts_with('.')),
            "{file} is inside a hidden directory"
        );
    }
    Ok(())
}

#[test]
fn test_result_is_sorted_regardless_of_creation_order() -> Result<()> {
    let temp_dir = TempDir::new()?;
    for name in ["zeta.py", "alpha/b.py", "beta.py", "alpha/a.py", "Alpha.py"] {
        create_test_file(temp_dir.path(), name, "")?;
    }

    let files = collect_python_files::<&str>(temp_dir.path(), true, &[]);

    assert_eq!(
        names(temp_dir.path(), &files),
        vec!["Alpha.py", "alpha/a.py", "alpha/b.py", "beta.py", "zeta.py"]
    );
    assert_eq!(files, collect_python_files::<&str>(temp_dir.path(), true, &[]));
    Ok(())
}

#[test]
fn test_dot_components_are_dropped() -> Result<()> {
    let temp_dir = setup_test_project()?;
    let root = temp_dir.path().join(".").join("app");

    let files = collect_python_files::<&str>(&root, false, &[]);

    let expected: Vec<PathBuf> = ["__init__.py", "models.py", "service.py"]
        .iter()
        .map(|name| temp_dir.path().join("app").join(name))
        .collect();
    assert_eq!(files, expected);
    Ok(())
}
