use std::path::{Path, PathBuf};

/// Directories searched for relative resources: the executable's folder,
/// the working directory, then the crate root when it still exists.
fn search_roots() -> impl Iterator<Item = PathBuf> {
    let exe_dir = std::env::current_exe()
        .ok()
        .and_then(|exe| exe.parent().map(Path::to_path_buf));
    let cwd = std::env::current_dir().ok();
    let crate_root = Some(PathBuf::from(env!("CARGO_MANIFEST_DIR"))).filter(|dir| dir.exists());
    [exe_dir, cwd, crate_root].into_iter().flatten()
}

/// First existing `root/path` over [`search_roots`]. A path found nowhere is
/// anchored at the first root so error messages show where it was expected.
pub fn resolve_resource_path(path: &Path) -> PathBuf {
    if path.is_absolute() {
        return path.to_path_buf();
    }
    let mut expected = None;
    for root in search_roots() {
        let candidate = root.join(path);
        if candidate.exists() {
            return candidate;
        }
        expected.get_or_insert(candidate);
    }
    expected.unwrap_or_else(|| path.to_path_buf())
}
