//! Test harness for sift integration tests

use std::path::Path;
use std::process::Command;

pub use sift::test_utils::TestTree;

/// Run the sift binary in `dir` and capture its output.
pub fn run_sift(dir: &Path, args: &[&str]) -> (String, String, bool) {
    let binary = env!("CARGO_BIN_EXE_sift");
    let output = Command::new(binary)
        .args(args)
        .current_dir(dir)
        .output()
        .expect("Failed to run sift");

    let stdout = String::from_utf8_lossy(&output.stdout).to_string();
    let stderr = String::from_utf8_lossy(&output.stderr).to_string();
    let success = output.status.success();

    (stdout, stderr, success)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_harness_creates_temp_dir() {
        let tree = TestTree::new();
        assert!(tree.path().exists());
    }

    #[test]
    fn test_harness_add_file() {
        let tree = TestTree::new();
        let file_path = tree.add_file("notes.txt", "hello");
        assert!(file_path.exists());
    }

    #[test]
    fn test_harness_add_file_sized() {
        let tree = TestTree::new();
        let file_path = tree.add_file_sized("blob.bin", 1234);
        assert_eq!(std::fs::metadata(file_path).unwrap().len(), 1234);
    }
}
