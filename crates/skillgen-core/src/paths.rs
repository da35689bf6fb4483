//! Target path availability.

use std::path::Path;

/// Whether nothing exists at `path` (file, directory or symlink, dangling or not).
///
/// Any stat error counts as available: a missing path, or a parent that is a
/// plain file. Creation then reports the real cause as a write failure.
///
/// Advisory only: another process can still create the path between this check
/// and the scaffolder's `create_dir_all`.
pub fn is_available(path: &Path) -> bool {
    std::fs::symlink_metadata(path).is_err()
}
