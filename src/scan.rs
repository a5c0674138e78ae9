//! Result-file discovery.

use crate::Result;
use anyhow::Context;
use std::path::{Path, PathBuf};

/// Find files under `root` (cwd when absent) matching `pattern`, a glob in
/// which `**` crosses directory levels.
///
/// Returned paths are relative to `root`. A missing root is not an error:
/// like shell globbing it simply matches nothing, and the run completes with
/// an empty figure. That is deliberately unlike the fatal treatment of
/// malformed paths and lines further down the pipeline. Matches come back in
/// the glob crate's sorted traversal order, so rescanning an unchanged tree
/// yields the same sequence.
pub fn scan(root: Option<&Path>, pattern: &str) -> Result<Vec<PathBuf>> {
    let root = root.unwrap_or(Path::new("."));
    let rooted = root.join(pattern);
    let rooted = rooted
        .to_str()
        .with_context(|| format!("scan root {} is not valid UTF-8", root.display()))?;

    let mut files = Vec::new();
    for entry in glob::glob(rooted).with_context(|| format!("bad scan pattern {pattern:?}"))? {
        let path = entry.context("walk result tree")?;
        if !path.is_file() {
            continue;
        }
        let rel = path.strip_prefix(root).unwrap_or(&path);
        files.push(rel.to_path_buf());
    }
    Ok(files)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::fs;

    fn touch(path: &Path) {
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, "x\n").unwrap();
    }

    #[test]
    fn finds_files_relative_to_root_in_sorted_order() {
        let tmp = tempfile::tempdir().unwrap();
        touch(&tmp.path().join("out-x/2/a/run.out"));
        touch(&tmp.path().join("out-x/1/a/run.out"));
        touch(&tmp.path().join("out-y/1/b/run.out"));

        let files = scan(Some(tmp.path()), "out-*/**/*.out").unwrap();
        assert_eq!(
            files,
            vec![
                PathBuf::from("out-x/1/a/run.out"),
                PathBuf::from("out-x/2/a/run.out"),
                PathBuf::from("out-y/1/b/run.out"),
            ]
        );
    }

    #[test]
    fn recursive_pattern_crosses_depths() {
        let tmp = tempfile::tempdir().unwrap();
        touch(&tmp.path().join("drop/host.stats.out"));
        touch(&tmp.path().join("keep/2024/night/host.stats.out"));
        touch(&tmp.path().join("keep/notes.txt"));

        let files = scan(Some(tmp.path()), "**/*stats.out").unwrap();
        assert_eq!(
            files,
            vec![
                PathBuf::from("drop/host.stats.out"),
                PathBuf::from("keep/2024/night/host.stats.out"),
            ]
        );
    }

    #[test]
    fn directories_matching_the_pattern_are_skipped() {
        let tmp = tempfile::tempdir().unwrap();
        fs::create_dir_all(tmp.path().join("a/dir.stats.out")).unwrap();
        touch(&tmp.path().join("a/file.stats.out"));

        let files = scan(Some(tmp.path()), "**/*stats.out").unwrap();
        assert_eq!(files, vec![PathBuf::from("a/file.stats.out")]);
    }

    #[test]
    fn missing_root_scans_empty() {
        let tmp = tempfile::tempdir().unwrap();
        let gone = tmp.path().join("does-not-exist");
        let files = scan(Some(&gone), "out-*/**/*.out").unwrap();
        assert_eq!(files, Vec::<PathBuf>::new());
    }

    #[test]
    fn rescan_is_identical() {
        let tmp = tempfile::tempdir().unwrap();
        touch(&tmp.path().join("out-x/1/a/run.out"));
        touch(&tmp.path().join("out-x/8/a/run.out"));

        let first = scan(Some(tmp.path()), "out-*/**/*.out").unwrap();
        let second = scan(Some(tmp.path()), "out-*/**/*.out").unwrap();
        assert_eq!(first, second);
    }
}
