use std::{
    fs::{self, File, Permissions},
    io::Write,
    path::{Path, PathBuf},
};

/// Replaces `path` with `bytes` so that readers see either the old file or
/// the complete new one. The data goes to a hidden sibling first and is
/// renamed into place; on failure the sibling is removed.
///
/// A symlink at `path` is followed and its target replaced. The new file takes
/// the permissions of the one it replaces, but not its owner.
pub fn write_atomically(path: &Path, bytes: &[u8]) -> std::io::Result<()> {
    let target = fs::canonicalize(path).unwrap_or_else(|_| path.into());
    let permissions = fs::metadata(&target).ok().map(|meta| meta.permissions());
    let staging = staging_path(&target);
    let result = write_synced(&staging, bytes, permissions);
    let result = result.and_then(|()| fs::rename(&staging, &target));
    if result.is_err() {
        let _ = fs::remove_file(&staging);
    }
    result
}

fn write_synced(
    path: &Path,
    bytes: &[u8],
    permissions: Option<Permissions>,
) -> std::io::Result<()> {
    let mut file = File::create(path)?;
    file.write_all(bytes)?;
    if let Some(permissions) = permissions {
        file.set_permissions(permissions)?;
    }
    file.sync_all()
}

fn staging_path(path: &Path) -> PathBuf {
    let name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();
    path.with_file_name(format!(".{name}.{}.tmp", std::process::id()))
}
