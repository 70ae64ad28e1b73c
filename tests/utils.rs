#![allow(dead_code)]

use configure_skeleton::cli::{run, Args, PromptStyle, SkipConfirm::All};
use log::debug;
use std::fs;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

pub const SKELETON_DIR: &str = "tests/fixtures/skeleton";
pub const EXPECTED_DIR: &str = "tests/fixtures/expected";
pub const SCRIPT_NAME: &str = "configure";

pub const WIDGET_ANSWERS: &str = r#"{
    "author_name": "Jane Doe",
    "author_username": "janedoe",
    "vendor_name": "Acme Corp",
    "vendor_username": "acme",
    "vendor_namespace": "Acme",
    "package_name": "Laravel Widget",
    "class_name": "Widget",
    "package_description": "Widgets for Laravel"
}"#;

/// Copies `src` recursively into `dst`, hidden entries included.
pub fn copy_dir(src: &Path, dst: &Path) {
    for entry in WalkDir::new(src).into_iter().filter_map(Result::ok) {
        let rel = entry.path().strip_prefix(src).unwrap();
        let target = dst.join(rel);
        if entry.file_type().is_dir() {
            fs::create_dir_all(&target).unwrap();
        } else {
            fs::copy(entry.path(), &target).unwrap();
        }
    }
}

/// Copies the skeleton fixture into a fresh temporary directory and returns
/// the directory guard together with the checkout root.
pub fn skeleton_checkout() -> (tempfile::TempDir, PathBuf) {
    let tmp_dir = tempfile::tempdir().unwrap();
    let root = tmp_dir.path().join("laravel-widget");
    copy_dir(Path::new(SKELETON_DIR), &root);
    (tmp_dir, root)
}

/// Arguments for an unattended run over `root`.
pub fn unattended_args(root: &Path, answers: Option<&str>) -> Args {
    Args {
        path: root.to_path_buf(),
        verbose: 2,
        answers: answers.map(|a| a.to_string()),
        non_interactive: true,
        skip_confirms: vec![All],
        dry_run: false,
        no_install: true,
        keep_script: false,
        script: Some(PathBuf::from(SCRIPT_NAME)),
        exclude: Vec::new(),
        offline: true,
        prompt_style: PromptStyle::Plain,
    }
}

/// Prints a diff of files and their contents between two directories.
/// Shows files only present in one directory and content differences for files present in both.
///
/// # Arguments
/// * `dir1` - The first directory to compare (actual output).
/// * `dir2` - The second directory to compare (expected output).
pub fn print_dir_diff(dir1: &Path, dir2: &Path) {
    let collect = |dir: &Path| -> std::collections::HashSet<PathBuf> {
        WalkDir::new(dir)
            .into_iter()
            .filter_map(Result::ok)
            .filter(|e| e.path().is_file())
            .map(|e| e.path().strip_prefix(dir).unwrap().to_path_buf())
            .collect()
    };
    let files1 = collect(dir1);
    let files2 = collect(dir2);

    println!("\n=== Directory Comparison ===");
    println!("Actual output:   {:?}", dir1);
    println!("Expected output: {:?}", dir2);
    println!();

    for file in files1.difference(&files2) {
        println!("  + {:?}", file);
    }
    for file in files2.difference(&files1) {
        println!("  - {:?}", file);
    }

    for file in files1.intersection(&files2) {
        let content1 = fs::read_to_string(dir1.join(file)).unwrap_or_default();
        let content2 = fs::read_to_string(dir2.join(file)).unwrap_or_default();
        if content1 != content2 {
            println!("\n  File: {:?}", file);
            println!("  --- Actual content:\n{}", content1);
            println!("  --- Expected content:\n{}", content2);
        }
    }
    println!("=== End of Comparison ===\n");
}

/// Asserts that two directory trees are identical, printing the differences
/// first when they are not.
pub fn assert_same_tree(actual: &Path, expected: &Path) {
    match dir_diff::is_different(actual, expected) {
        Ok(true) => {
            print_dir_diff(actual, expected);
            panic!("Directories differ. See above for details.");
        }
        Ok(false) => {}
        Err(e) => {
            debug!("Error comparing directories: {e:?}");
            panic!("Failed to compare directories");
        }
    }
}

/// Configures a fresh skeleton copy with `answers` and compares the result to
/// `expected_dir`.
pub fn run_and_assert(expected_dir: &str, answers: &str) {
    let (_tmp_dir, root) = skeleton_checkout();
    run(unattended_args(&root, Some(answers))).unwrap();
    assert_same_tree(&root, Path::new(expected_dir));
}
