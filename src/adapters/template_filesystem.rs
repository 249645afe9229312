use std::fs;
use std::path::{Path, PathBuf};

use crate::domain::config::Config;
use crate::domain::{AppError, TemplateHandle, TemplateKind, template_name};
use crate::ports::{TemplateEntry, TemplateStore};

/// Filesystem-backed template store.
///
/// Roots are held in precedence order (local first when configured).
/// Within a root the `pre/` and `post/` subdirectories are scanned in
/// directory order; the first stem match wins. That tie-break is a
/// deliberate simplicity tradeoff and is documented, not hidden.
pub struct FilesystemTemplateStore {
    roots: Vec<PathBuf>,
}

impl FilesystemTemplateStore {
    pub fn new(roots: Vec<PathBuf>) -> Self {
        Self { roots }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(config.template_roots())
    }

    fn load(path: &Path, name: &str) -> Result<TemplateHandle, AppError> {
        let source = fs::read_to_string(path).map_err(|err| AppError::ContentCollection {
            path: path.display().to_string(),
            reason: err.to_string(),
        })?;
        Ok(TemplateHandle { name: name.to_string(), path: path.to_path_buf(), source })
    }

    fn scan_dir(
        dir: &Path,
        kind: TemplateKind,
        root_index: usize,
        out: &mut Vec<TemplateEntry>,
    ) -> Result<(), AppError> {
        let entries = match fs::read_dir(dir) {
            Ok(entries) => entries,
            // A missing pre/ or post/ directory just means no templates there.
            Err(_) => return Ok(()),
        };

        for entry in entries {
            let entry = entry.map_err(|err| AppError::ContentCollection {
                path: dir.display().to_string(),
                reason: err.to_string(),
            })?;
            let path = entry.path();
            if !path.is_file() {
                continue;
            }
            if path.extension().and_then(|ext| ext.to_str())
                != Some(template_name::TEMPLATE_EXTENSION)
            {
                continue;
            }
            let Some(stem) = path.file_stem().and_then(|stem| stem.to_str()) else {
                continue;
            };

            out.push(TemplateEntry {
                name: template_name::display_name(stem),
                stem: stem.to_string(),
                kind,
                root_index,
                is_default: template_name::is_default_marked(stem),
            });
        }
        Ok(())
    }
}

impl TemplateStore for FilesystemTemplateStore {
    fn discover(
        &self,
        name: &str,
        kind: Option<TemplateKind>,
    ) -> Result<TemplateHandle, AppError> {
        let kinds: &[TemplateKind] = match &kind {
            Some(k) => std::slice::from_ref(k),
            None => &TemplateKind::ALL,
        };

        for root in &self.roots {
            for k in kinds {
                let dir = root.join(k.dir_name());
                let entries = match fs::read_dir(&dir) {
                    Ok(entries) => entries,
                    Err(_) => continue,
                };

                for entry in entries.flatten() {
                    let path = entry.path();
                    if !path.is_file() {
                        continue;
                    }
                    if path.extension().and_then(|ext| ext.to_str())
                        != Some(template_name::TEMPLATE_EXTENSION)
                    {
                        continue;
                    }
                    let Some(stem) = path.file_stem().and_then(|stem| stem.to_str()) else {
                        continue;
                    };
                    if template_name::matches(stem, name) {
                        return Self::load(&path, &template_name::display_name(stem));
                    }
                }
            }
        }

        Err(AppError::TemplateNotFound { name: name.to_string() })
    }

    fn load_root_file(&self, file_name: &str) -> Result<TemplateHandle, AppError> {
        for root in &self.roots {
            let path = root.join(file_name);
            if path.is_file() {
                let name = Path::new(file_name)
                    .file_stem()
                    .and_then(|stem| stem.to_str())
                    .unwrap_or(file_name)
                    .to_string();
                return Self::load(&path, &name);
            }
        }
        Err(AppError::TemplateNotFound { name: file_name.to_string() })
    }

    fn entries(&self) -> Result<Vec<TemplateEntry>, AppError> {
        let mut out = Vec::new();
        for (root_index, root) in self.roots.iter().enumerate() {
            for kind in TemplateKind::ALL {
                Self::scan_dir(&root.join(kind.dir_name()), kind, root_index, &mut out)?;
            }
        }
        Ok(out)
    }

    fn roots(&self) -> &[PathBuf] {
        &self.roots
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn store_with(files: &[(&str, &str)]) -> (TempDir, FilesystemTemplateStore) {
        let root = TempDir::new().unwrap();
        for (rel, content) in files {
            let path = root.path().join(rel);
            fs::create_dir_all(path.parent().unwrap()).unwrap();
            fs::write(path, content).unwrap();
        }
        let store = FilesystemTemplateStore::new(vec![root.path().to_path_buf()]);
        (root, store)
    }

    #[test]
    fn discovery_is_case_insensitive_on_the_stem() {
        let (_root, store) =
            store_with(&[("pre/Engineering-Defaults.md", "be rigorous")]);

        for requested in ["engineering-defaults", "ENGINEERING-DEFAULTS", "Engineering-Defaults"] {
            let handle = store.discover(requested, Some(TemplateKind::Pre)).unwrap();
            assert_eq!(handle.source, "be rigorous");
            assert_eq!(handle.name, "Engineering-Defaults");
        }
    }

    #[test]
    fn default_marked_file_answers_to_both_names() {
        let (_root, store) = store_with(&[("pre/review.default.md", "review carefully")]);

        assert!(store.discover("review", Some(TemplateKind::Pre)).is_ok());
        assert!(store.discover("review.default", Some(TemplateKind::Pre)).is_ok());
    }

    #[test]
    fn non_template_extensions_are_ignored() {
        let (_root, store) = store_with(&[("pre/notes.txt", "not a template")]);

        let err = store.discover("notes", Some(TemplateKind::Pre)).unwrap_err();
        assert!(matches!(err, AppError::TemplateNotFound { .. }));
    }

    #[test]
    fn kind_restricts_the_search() {
        let (_root, store) = store_with(&[("post/wrapup.md", "summarize")]);

        assert!(store.discover("wrapup", Some(TemplateKind::Pre)).is_err());
        assert!(store.discover("wrapup", Some(TemplateKind::Post)).is_ok());
        assert!(store.discover("wrapup", None).is_ok());
    }

    #[test]
    fn local_root_wins_duplicate_names() {
        let local = TempDir::new().unwrap();
        let global = TempDir::new().unwrap();
        for (root, content) in [(&local, "local wins"), (&global, "global loses")] {
            let dir = root.path().join("pre");
            fs::create_dir_all(&dir).unwrap();
            fs::write(dir.join("shared.md"), content).unwrap();
        }
        let store = FilesystemTemplateStore::new(vec![
            local.path().to_path_buf(),
            global.path().to_path_buf(),
        ]);

        let handle = store.discover("shared", Some(TemplateKind::Pre)).unwrap();
        assert_eq!(handle.source, "local wins");
    }

    #[test]
    fn root_file_lookup_finds_fix_template() {
        let (root, store) = store_with(&[("pre/x.md", "x")]);
        fs::write(root.path().join("fix.md"), "Please repair").unwrap();

        let handle = store.load_root_file("fix.md").unwrap();
        assert_eq!(handle.source, "Please repair");
        assert_eq!(handle.name, "fix");
    }

    #[test]
    fn entries_report_defaults_and_roots() {
        let (_root, store) = store_with(&[
            ("pre/review.default.md", "a"),
            ("pre/quick.md", "b"),
            ("post/wrapup.md", "c"),
        ]);

        let entries = store.entries().unwrap();
        assert_eq!(entries.len(), 3);

        let review = entries.iter().find(|e| e.name == "review").unwrap();
        assert!(review.is_default);
        assert_eq!(review.kind, TemplateKind::Pre);

        let quick = entries.iter().find(|e| e.name == "quick").unwrap();
        assert!(!quick.is_default);
    }
}
