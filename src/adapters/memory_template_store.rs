use std::path::PathBuf;

use crate::domain::{AppError, TemplateHandle, TemplateKind, template_name};
use crate::ports::{TemplateEntry, TemplateStore};

/// In-memory template store.
///
/// Backs orchestrator unit tests without touching the filesystem; honors
/// the same naming and precedence conventions as the filesystem store.
pub struct MemoryTemplateStore {
    roots: Vec<PathBuf>,
    /// (root_index, kind or None for a root-level file, stem, content)
    files: Vec<(usize, Option<TemplateKind>, String, String)>,
}

impl MemoryTemplateStore {
    pub fn new() -> Self {
        Self { roots: vec![PathBuf::from("/memory")], files: Vec::new() }
    }

    pub fn with_template(
        mut self,
        kind: TemplateKind,
        stem: &str,
        content: &str,
    ) -> Self {
        self.files.push((0, Some(kind), stem.to_string(), content.to_string()));
        self
    }

    pub fn with_root_file(mut self, stem: &str, content: &str) -> Self {
        self.files.push((0, None, stem.to_string(), content.to_string()));
        self
    }

    fn handle(&self, root_index: usize, stem: &str, content: &str) -> TemplateHandle {
        TemplateHandle {
            name: template_name::display_name(stem),
            path: self.roots[root_index].join(format!("{stem}.md")),
            source: content.to_string(),
        }
    }
}

impl Default for MemoryTemplateStore {
    fn default() -> Self {
        Self::new()
    }
}

impl TemplateStore for MemoryTemplateStore {
    fn discover(
        &self,
        name: &str,
        kind: Option<TemplateKind>,
    ) -> Result<TemplateHandle, AppError> {
        for (root_index, file_kind, stem, content) in &self.files {
            let Some(file_kind) = file_kind else { continue };
            if let Some(wanted) = kind
                && *file_kind != wanted
            {
                continue;
            }
            if template_name::matches(stem, name) {
                return Ok(self.handle(*root_index, stem, content));
            }
        }
        Err(AppError::TemplateNotFound { name: name.to_string() })
    }

    fn load_root_file(&self, file_name: &str) -> Result<TemplateHandle, AppError> {
        let stem = file_name.strip_suffix(".md").unwrap_or(file_name);
        for (root_index, file_kind, file_stem, content) in &self.files {
            if file_kind.is_none() && file_stem == stem {
                return Ok(self.handle(*root_index, file_stem, content));
            }
        }
        Err(AppError::TemplateNotFound { name: file_name.to_string() })
    }

    fn entries(&self) -> Result<Vec<TemplateEntry>, AppError> {
        Ok(self
            .files
            .iter()
            .filter_map(|(root_index, kind, stem, _)| {
                kind.map(|kind| TemplateEntry {
                    name: template_name::display_name(stem),
                    stem: stem.clone(),
                    kind,
                    root_index: *root_index,
                    is_default: template_name::is_default_marked(stem),
                })
            })
            .collect())
    }

    fn roots(&self) -> &[PathBuf] {
        &self.roots
    }
}
