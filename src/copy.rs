use std::fs;
use std::path::Path;

use anyhow::{bail, Context, Result};

/// Recursively copy `src` into `dest`, creating missing directories.
///
/// Entries whose file name appears in `skip_names` are ignored, and the
/// filter is re-applied at every nesting level. Existing destination files
/// are overwritten byte-for-byte. Symbolic links are recreated with their
/// original target rather than followed (Unix; elsewhere the target's
/// contents are copied).
pub fn copy_tree(src: &Path, dest: &Path, skip_names: &[&str]) -> Result<()> {
    if !src.exists() {
        bail!("source directory does not exist: {}", src.display());
    }

    fs::create_dir_all(dest)
        .with_context(|| format!("failed to create directory {}", dest.display()))?;

    let entries = fs::read_dir(src)
        .with_context(|| format!("failed to read directory {}", src.display()))?;

    for entry in entries {
        let entry = entry.with_context(|| format!("failed to read entry in {}", src.display()))?;
        let name = entry.file_name();

        if skip_names.iter().any(|skip| name == *skip) {
            continue;
        }

        let src_path = entry.path();
        let dest_path = dest.join(&name);
        let file_type = entry
            .file_type()
            .with_context(|| format!("failed to stat {}", src_path.display()))?;

        if file_type.is_symlink() {
            copy_link(&src_path, &dest_path)?;
        } else if file_type.is_dir() {
            copy_tree(&src_path, &dest_path, skip_names)?;
        } else {
            fs::copy(&src_path, &dest_path).with_context(|| {
                format!(
                    "failed to copy {} -> {}",
                    src_path.display(),
                    dest_path.display()
                )
            })?;
        }
    }

    Ok(())
}

/// Recreate a symbolic link at `dest` with the same target as `src`.
#[cfg(unix)]
fn copy_link(src: &Path, dest: &Path) -> Result<()> {
    let target = fs::read_link(src)
        .with_context(|| format!("failed to read link {}", src.display()))?;

    // symlink() refuses to overwrite, so clear any previous entry first.
    if fs::symlink_metadata(dest).is_ok() {
        fs::remove_file(dest)
            .with_context(|| format!("failed to remove {}", dest.display()))?;
    }

    std::os::unix::fs::symlink(&target, dest).with_context(|| {
        format!(
            "failed to create link {} -> {}",
            dest.display(),
            target.display()
        )
    })
}

#[cfg(not(unix))]
fn copy_link(src: &Path, dest: &Path) -> Result<()> {
    fs::copy(src, dest)
        .with_context(|| format!("failed to copy {}", src.display()))
        .map(|_| ())
}
