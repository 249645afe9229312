//! Pure assembly helpers: part joining, reference blocks, directory
//! resolution. The fallible sequencing lives in the app orchestrator.

use std::path::{Path, PathBuf};

use crate::domain::ExecutionContext;
use crate::domain::config::DirectoryStrategy;

/// Separator between prompt parts. Omitted parts contribute nothing,
/// never an empty line.
pub const PART_SEPARATOR: &str = "\n\n";

/// Literal opener used in fix mode when no `fix.md` exists.
pub const DEFAULT_FIX_OPENER: &str = "Please fix";

/// Placeholder directory value meaning "the current directory".
pub const DIRECTORY_PLACEHOLDER: &str = ".";

/// Join non-empty parts with a blank-line separator.
pub fn join_parts(parts: &[String]) -> String {
    let kept: Vec<&str> =
        parts.iter().map(String::as_str).filter(|part| !part.is_empty()).collect();
    kept.join(PART_SEPARATOR)
}

/// Format the reference block listing file paths and/or a directory.
pub fn reference_block(files: &[String], directory: Option<&str>) -> Option<String> {
    let mut lines: Vec<String> = Vec::new();

    if !files.is_empty() {
        lines.push("Referencing files:".to_string());
        lines.extend(files.iter().cloned());
    }

    if let Some(dir) = directory {
        lines.push("Referencing dir:".to_string());
        lines.push(dir.to_string());
    }

    if lines.is_empty() { None } else { Some(lines.join("\n")) }
}

/// Resolve a directory reference to an absolute path.
///
/// The `.` placeholder resolves per the configured strategy: `git` prefers
/// the enclosing repository root when one was detected, `filesystem` always
/// uses the cwd. Other relative paths are anchored at the cwd.
pub fn resolve_directory(
    ctx: &ExecutionContext,
    strategy: DirectoryStrategy,
    raw: &str,
    repo_root: Option<&Path>,
) -> PathBuf {
    if raw == DIRECTORY_PLACEHOLDER {
        return match (strategy, repo_root) {
            (DirectoryStrategy::Git, Some(root)) => root.to_path_buf(),
            _ => ctx.cwd.clone(),
        };
    }

    let path = Path::new(raw);
    if path.is_absolute() { path.to_path_buf() } else { ctx.cwd.join(path) }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeMap;

    fn ctx() -> ExecutionContext {
        ExecutionContext::new(
            PathBuf::from("/home/dev"),
            PathBuf::from("/work/project"),
            BTreeMap::new(),
        )
    }

    #[test]
    fn join_skips_empty_parts() {
        let parts =
            vec!["pre".to_string(), String::new(), "base".to_string(), String::new()];

        assert_eq!(join_parts(&parts), "pre\n\nbase");
    }

    #[test]
    fn reference_block_lists_files_then_dir() {
        let files = vec!["src/main.rs".to_string(), "src/lib.rs".to_string()];
        let block = reference_block(&files, Some("/work/project")).unwrap();

        assert_eq!(
            block,
            "Referencing files:\nsrc/main.rs\nsrc/lib.rs\nReferencing dir:\n/work/project"
        );
    }

    #[test]
    fn reference_block_is_none_when_nothing_referenced() {
        assert!(reference_block(&[], None).is_none());
    }

    #[test]
    fn placeholder_resolves_to_repo_root_under_git_strategy() {
        let resolved = resolve_directory(
            &ctx(),
            DirectoryStrategy::Git,
            ".",
            Some(Path::new("/work")),
        );
        assert_eq!(resolved, PathBuf::from("/work"));
    }

    #[test]
    fn placeholder_resolves_to_cwd_under_filesystem_strategy() {
        let resolved = resolve_directory(
            &ctx(),
            DirectoryStrategy::Filesystem,
            ".",
            Some(Path::new("/work")),
        );
        assert_eq!(resolved, PathBuf::from("/work/project"));
    }

    #[test]
    fn relative_directory_is_anchored_at_cwd() {
        let resolved = resolve_directory(&ctx(), DirectoryStrategy::Git, "sub/dir", None);
        assert_eq!(resolved, PathBuf::from("/work/project/sub/dir"));
    }
}
