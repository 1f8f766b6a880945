//! # Sub-project Discovery (`augment::discovery`)
//!
//! File: cli/src/augment/discovery.rs
//!
//! Builds the ordered set of project files under a submodule root. Only files
//! sitting directly inside an *immediate* subdirectory of the root count:
//!
//! ```text
//! YARG.Core/
//!   Core/Core.csproj          <- found
//!   Core/Tests/Tests.csproj   <- too deep, ignored
//!   Root.csproj               <- not inside a subdirectory, ignored
//! ```
//!
//! Entries are sorted by file name at every level, so the result is
//! lexicographic by path and identical across platforms.
//!
use super::diagnostics::Diagnostics;
use std::path::{Path, PathBuf};
use tracing::debug;
use walkdir::WalkDir;

/// Returns every `*.{extension}` file one directory below `root`, sorted.
///
/// The extension match ignores ASCII case. Entries that cannot be read are
/// reported as warnings and skipped.
pub fn discover_projects(
    root: &Path,
    extension: &str,
    diagnostics: &dyn Diagnostics,
) -> Vec<PathBuf> {
    let mut projects = Vec::new();
    let walker = WalkDir::new(root)
        .min_depth(2)
        .max_depth(2)
        .follow_links(true)
        .sort_by_file_name();

    for entry in walker {
        let entry = match entry {
            Ok(entry) => entry,
            Err(e) => {
                diagnostics.warn(&format!(
                    "Skipping unreadable entry under {}: {}",
                    root.display(),
                    e
                ));
                continue;
            }
        };
        if !entry.file_type().is_file() {
            continue;
        }
        let matches = entry
            .path()
            .extension()
            .and_then(|ext| ext.to_str())
            .map_or(false, |ext| ext.eq_ignore_ascii_case(extension));
        if matches {
            debug!("Discovered project file: {}", entry.path().display());
            projects.push(entry.into_path());
        }
    }
    projects
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::augment::test_support::RecordingDiagnostics;
    use std::fs;
    use tempfile::tempdir;

    fn touch(path: &Path) {
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, "<Project />").unwrap();
    }

    #[test]
    fn test_only_immediate_subdirectories_are_scanned() {
        let root = tempdir().unwrap();
        touch(&root.path().join("Root.csproj"));
        touch(&root.path().join("Core/Core.csproj"));
        touch(&root.path().join("Core/Tests/Tests.csproj"));
        touch(&root.path().join("Core/readme.md"));

        let diagnostics = RecordingDiagnostics::default();
        let projects = discover_projects(root.path(), "csproj", &diagnostics);

        assert_eq!(projects, vec![root.path().join("Core/Core.csproj")]);
        assert!(diagnostics.warnings().is_empty());
    }

    #[test]
    fn test_results_are_sorted_by_path() {
        let root = tempdir().unwrap();
        touch(&root.path().join("B/b.proj"));
        touch(&root.path().join("A/z.proj"));
        touch(&root.path().join("A/a.proj"));

        let projects = discover_projects(root.path(), "proj", &RecordingDiagnostics::default());

        assert_eq!(
            projects,
            vec![
                root.path().join("A/a.proj"),
                root.path().join("A/z.proj"),
                root.path().join("B/b.proj"),
            ]
        );
    }

    #[test]
    fn test_extension_match_ignores_case() {
        let root = tempdir().unwrap();
        touch(&root.path().join("Core/Core.CSPROJ"));

        let projects = discover_projects(root.path(), "csproj", &RecordingDiagnostics::default());
        assert_eq!(projects.len(), 1);
    }

    #[test]
    fn test_directory_named_like_project_is_ignored() {
        let root = tempdir().unwrap();
        fs::create_dir_all(root.path().join("Core/Fake.csproj")).unwrap();

        let projects = discover_projects(root.path(), "csproj", &RecordingDiagnostics::default());
        assert!(projects.is_empty());
    }

    #[cfg(unix)]
    #[test]
    fn test_unreadable_directory_is_warned_and_skipped() {
        use std::os::unix::fs::PermissionsExt;

        let root = tempdir().unwrap();
        touch(&root.path().join("A/a.proj"));
        touch(&root.path().join("Locked/hidden.proj"));
        touch(&root.path().join("Z/z.proj"));
        let locked = root.path().join("Locked");
        fs::set_permissions(&locked, fs::Permissions::from_mode(0o000)).unwrap();
        // Privileged users can still list the directory.
        let still_readable = fs::read_dir(&locked).is_ok();

        let diagnostics = RecordingDiagnostics::default();
        let projects = discover_projects(root.path(), "proj", &diagnostics);
        fs::set_permissions(&locked, fs::Permissions::from_mode(0o755)).unwrap();

        if still_readable {
            return;
        }
        assert_eq!(
            projects,
            vec![root.path().join("A/a.proj"), root.path().join("Z/z.proj")]
        );
        assert_eq!(diagnostics.warnings().len(), 1);
        assert!(diagnostics.warnings()[0].contains("Skipping unreadable entry"));
    }

    #[cfg(unix)]
    #[test]
    fn test_dangling_link_is_warned_and_skipped() {
        let root = tempdir().unwrap();
        touch(&root.path().join("A/a.proj"));
        touch(&root.path().join("B/b.proj"));
        std::os::unix::fs::symlink(
            root.path().join("nowhere.proj"),
            root.path().join("A/broken.proj"),
        )
        .unwrap();

        let diagnostics = RecordingDiagnostics::default();
        let projects = discover_projects(root.path(), "proj", &diagnostics);

        assert_eq!(
            projects,
            vec![root.path().join("A/a.proj"), root.path().join("B/b.proj")]
        );
        assert_eq!(diagnostics.warnings().len(), 1);
    }
}
