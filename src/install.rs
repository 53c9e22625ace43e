use std::ffi::OsStr;
use std::fs;
use std::path::{Path, PathBuf};

use anyhow::Context;
use thiserror::Error;

use crate::copy;

/// Directory holding Claude Code configuration inside a project.
pub const CLAUDE_DIR: &str = ".claude";
/// Subdirectory of [`CLAUDE_DIR`] holding slash-command definitions.
pub const COMMANDS_DIR: &str = "commands";
/// Namespace folder holding this tool's own command definitions.
pub const NAMESPACE: &str = "spec-chain";
/// Top-level files reserved for user customization, never overwritten.
pub const USER_FILES: [&str; 2] = ["CLAUDE.md", "prime.md"];

#[derive(Debug, Error)]
pub enum InstallError {
    /// The namespace directory already exists and `--force` was not given.
    #[error("spec-chain commands already exist in {}", .0.display())]
    AlreadyInstalled(PathBuf),

    /// The package installation has no `.claude` tree to copy from.
    #[error("could not find .claude directory in package installation (looked in {})", .0.display())]
    SourceNotFound(PathBuf),

    /// The copy itself failed partway through.
    #[error(transparent)]
    Copy(#[from] anyhow::Error),
}

/// Outcome of a successful install.
#[derive(Debug)]
pub struct InstallReport {
    /// Whether an existing installation was removed first.
    pub replaced: bool,
    /// Names of the commands now available, without the `.md` extension.
    pub commands: Vec<String>,
}

/// Check whether spec-chain commands are installed under `dir`.
pub fn is_installed(dir: &Path) -> bool {
    dir.join(CLAUDE_DIR).join(COMMANDS_DIR).join(NAMESPACE).is_dir()
}

/// Install the bundled command tree from `package_root` into `target_dir`.
///
/// The whole `.claude` tree is merged into the target's `.claude` directory,
/// minus the [`USER_FILES`] reserved for the user. The existing-install check
/// runs before anything is touched; with `force`, a previous namespace
/// directory is removed so stale commands do not survive the reinstall.
pub fn install(
    package_root: &Path,
    target_dir: &Path,
    force: bool,
) -> Result<InstallReport, InstallError> {
    let claude_dir = target_dir.join(CLAUDE_DIR);
    let namespace_dir = claude_dir.join(COMMANDS_DIR).join(NAMESPACE);

    if namespace_dir.exists() && !force {
        return Err(InstallError::AlreadyInstalled(namespace_dir));
    }

    let source_dir = package_root.join(CLAUDE_DIR);
    if !source_dir.exists() {
        return Err(InstallError::SourceNotFound(package_root.to_path_buf()));
    }

    let replaced = namespace_dir.exists();
    if replaced {
        fs::remove_dir_all(&namespace_dir)
            .with_context(|| format!("failed to remove {}", namespace_dir.display()))?;
    }

    copy::copy_tree(&source_dir, &claude_dir, &USER_FILES)?;

    Ok(InstallReport {
        replaced,
        commands: installed_commands(&namespace_dir),
    })
}

/// List the command names shipped in the installed namespace directory.
fn installed_commands(namespace_dir: &Path) -> Vec<String> {
    let Ok(entries) = fs::read_dir(namespace_dir) else {
        return Vec::new();
    };

    let mut names: Vec<String> = entries
        .flatten()
        .filter_map(|entry| {
            let path = entry.path();
            if path.extension() != Some(OsStr::new("md")) {
                return None;
            }
            path.file_stem().map(|stem| stem.to_string_lossy().into_owned())
        })
        .collect();
    names.sort();
    names
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn write_file(path: &Path, content: &str) {
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, content).unwrap();
    }

    /// Lay out a package root with the bundled .claude tree.
    fn fake_package_root() -> TempDir {
        let root = TempDir::new().unwrap();
        let commands = root.path().join(".claude/commands/spec-chain");
        write_file(&commands.join("init-spec-chain.md"), "# init");
        write_file(&commands.join("run-spec-chain.md"), "# run");
        write_file(&commands.join("validate-spec-chain.md"), "# validate");
        write_file(&root.path().join(".claude/CLAUDE.md"), "package notes");
        write_file(&root.path().join(".claude/prime.md"), "package prime");
        root
    }

    #[test]
    fn test_install_copies_command_tree() {
        let package = fake_package_root();
        let target = TempDir::new().unwrap();

        let report = install(package.path(), target.path(), false).unwrap();

        assert!(!report.replaced);
        assert_eq!(
            report.commands,
            vec!["init-spec-chain", "run-spec-chain", "validate-spec-chain"]
        );
        assert!(is_installed(target.path()));
        let installed = target.path().join(".claude/commands/spec-chain/init-spec-chain.md");
        assert_eq!(fs::read_to_string(installed).unwrap(), "# init");
    }

    #[test]
    fn test_reserved_user_files_are_not_copied() {
        let package = fake_package_root();
        let target = TempDir::new().unwrap();

        install(package.path(), target.path(), false).unwrap();

        assert!(!target.path().join(".claude/CLAUDE.md").exists());
        assert!(!target.path().join(".claude/prime.md").exists());
    }

    #[test]
    fn test_existing_user_files_survive_install() {
        let package = fake_package_root();
        let target = TempDir::new().unwrap();
        write_file(&target.path().join(".claude/CLAUDE.md"), "my project notes");

        install(package.path(), target.path(), false).unwrap();

        assert_eq!(
            fs::read_to_string(target.path().join(".claude/CLAUDE.md")).unwrap(),
            "my project notes"
        );
    }

    #[test]
    fn test_second_install_without_force_fails_and_leaves_tree_alone() {
        let package = fake_package_root();
        let target = TempDir::new().unwrap();
        install(package.path(), target.path(), false).unwrap();

        let marker = target.path().join(".claude/commands/spec-chain/local.md");
        write_file(&marker, "local change");

        let err = install(package.path(), target.path(), false).unwrap_err();

        assert!(matches!(err, InstallError::AlreadyInstalled(_)));
        assert_eq!(fs::read_to_string(&marker).unwrap(), "local change");
    }

    #[test]
    fn test_force_replaces_namespace_completely() {
        let package = fake_package_root();
        let target = TempDir::new().unwrap();
        install(package.path(), target.path(), false).unwrap();

        // A stale command not present in the package must not survive.
        let stale = target.path().join(".claude/commands/spec-chain/stale.md");
        write_file(&stale, "old");

        let report = install(package.path(), target.path(), true).unwrap();

        assert!(report.replaced);
        assert!(!stale.exists());
        assert_eq!(
            report.commands,
            vec!["init-spec-chain", "run-spec-chain", "validate-spec-chain"]
        );
    }

    #[test]
    fn test_missing_source_reports_searched_path() {
        let package = TempDir::new().unwrap();
        let target = TempDir::new().unwrap();

        let err = install(package.path(), target.path(), false).unwrap_err();

        match err {
            InstallError::SourceNotFound(searched) => {
                assert_eq!(searched, package.path());
            }
            other => panic!("expected SourceNotFound, got {other:?}"),
        }
        assert!(!target.path().join(".claude").exists());
    }

    #[test]
    fn test_sibling_namespaces_are_left_alone() {
        let package = fake_package_root();
        let target = TempDir::new().unwrap();
        let sibling = target.path().join(".claude/commands/other-tool/cmd.md");
        write_file(&sibling, "unrelated");

        install(package.path(), target.path(), false).unwrap();

        assert_eq!(fs::read_to_string(&sibling).unwrap(), "unrelated");
    }
}
