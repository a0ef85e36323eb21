use std::fs;
use std::path::Path;

use sweepfs::{remove_tree, try_remove_tree, SweepError};

// ---------------------------------------------------------------------------
// Test helpers
// ---------------------------------------------------------------------------

/// Create a temporary directory tree for testing.
///
/// Structure:
/// ```
/// tmp/
///   victim/
///     a.txt
///     b.txt
///     sub/
///       x.txt
///       deeper/
///         y.txt
///   bystander.txt
/// ```
///
/// `victim` is what gets removed; `bystander.txt` proves the removal stays
/// inside the target.
fn setup_tree() -> tempfile::TempDir {
    let dir = tempfile::tempdir().unwrap();
    let root = dir.path();

    let victim = root.join("victim");
    fs::create_dir(&victim).unwrap();
    fs::write(victim.join("a.txt"), "a").unwrap();
    fs::write(victim.join("b.txt"), "b").unwrap();

    let sub = victim.join("sub");
    fs::create_dir(&sub).unwrap();
    fs::write(sub.join("x.txt"), "x").unwrap();

    let deeper = sub.join("deeper");
    fs::create_dir(&deeper).unwrap();
    fs::write(deeper.join("y.txt"), "y").unwrap();

    fs::write(root.join("bystander.txt"), "untouched").unwrap();

    dir
}

/// Count entries below `root`, the root itself excluded.
fn entry_count(root: &Path) -> usize {
    walkdir::WalkDir::new(root)
        .into_iter()
        .filter_map(Result::ok)
        .filter(|e| e.path() != root)
        .count()
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[test]
fn removes_empty_directory() {
    let dir = tempfile::tempdir().unwrap();
    let empty = dir.path().join("empty");
    fs::create_dir(&empty).unwrap();

    assert!(remove_tree(&empty));
    assert!(!empty.exists(), "directory should be gone");
}

#[test]
fn removes_flat_tree() {
    let dir = tempfile::tempdir().unwrap();
    let flat = dir.path().join("flat");
    fs::create_dir(&flat).unwrap();
    for name in ["a", "b", "c"] {
        fs::write(flat.join(name), name).unwrap();
    }

    assert!(remove_tree(&flat));
    assert!(!flat.exists());
}

#[test]
fn removes_nested_tree_and_nothing_else() {
    let dir = setup_tree();
    let victim = dir.path().join("victim");

    assert!(remove_tree(&victim));

    assert!(!victim.exists(), "whole tree should be gone");
    assert!(
        dir.path().join("bystander.txt").exists(),
        "siblings of the target must survive"
    );
    assert_eq!(entry_count(dir.path()), 1, "only the bystander remains");
}

#[test]
fn nonexistent_root_fails_without_mutation() {
    let dir = setup_tree();
    let before = entry_count(dir.path());

    let err = try_remove_tree(dir.path().join("does-not-exist")).unwrap_err();

    assert!(matches!(err, SweepError::NotFound(_)));
    assert!(err.is_precondition());
    assert_eq!(entry_count(dir.path()), before, "nothing may be touched");
}

#[test]
fn file_root_fails_and_file_survives() {
    let dir = tempfile::tempdir().unwrap();
    let file = dir.path().join("plain.txt");
    fs::write(&file, "not a directory").unwrap();

    assert!(!remove_tree(&file), "a file is not a removable tree");
    assert!(file.exists(), "the file must survive the rejection");
}

#[test]
fn boolean_and_result_entry_points_agree() {
    let dir = tempfile::tempdir().unwrap();
    let target = dir.path().join("t");
    fs::create_dir(&target).unwrap();

    assert!(try_remove_tree(&target).is_ok());
    assert!(!remove_tree(&target), "second removal has no tree to remove");
}

#[cfg(unix)]
#[test]
fn symlinked_directory_is_unlinked_not_followed() {
    let dir = tempfile::tempdir().unwrap();
    let outside = dir.path().join("outside");
    fs::create_dir(&outside).unwrap();
    fs::write(outside.join("keep.txt"), "keep").unwrap();

    let victim = dir.path().join("victim");
    fs::create_dir(&victim).unwrap();
    std::os::unix::fs::symlink(&outside, victim.join("link")).unwrap();

    assert!(remove_tree(&victim));
    assert!(!victim.exists());
    assert!(
        outside.join("keep.txt").exists(),
        "the link target's contents must survive"
    );
}

#[cfg(unix)]
#[test]
fn failed_removal_leaves_remnant_then_retry_succeeds() {
    use std::os::unix::fs::PermissionsExt;

    let dir = setup_tree();
    let victim = dir.path().join("victim");
    let sub = victim.join("sub");

    // Strip write permission so the entries inside `sub` cannot be removed.
    fs::set_permissions(&sub, fs::Permissions::from_mode(0o555)).unwrap();

    let err = try_remove_tree(&victim).unwrap_err();
    assert!(!err.is_precondition(), "the walk got past the root");
    assert!(sub.exists(), "the obstructed directory must remain");
    assert!(
        sub.join("x.txt").exists(),
        "the undeletable entry must remain"
    );

    // Clear the obstruction; the rerun finishes the job.
    fs::set_permissions(&sub, fs::Permissions::from_mode(0o755)).unwrap();
    assert!(remove_tree(&victim));
    assert!(!victim.exists(), "retry should leave nothing behind");
}
