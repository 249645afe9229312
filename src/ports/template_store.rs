use std::path::PathBuf;

use crate::domain::{AppError, TemplateHandle, TemplateKind};

/// A template discovered in one of the configured roots.
#[derive(Debug, Clone)]
pub struct TemplateEntry {
    /// Display name: the stem with the default marker stripped.
    pub name: String,
    /// Stem as it appears on disk.
    pub stem: String,
    pub kind: TemplateKind,
    /// Index into [`TemplateStore::roots`]; 0 is the highest-precedence root.
    pub root_index: usize,
    /// Whether the stem carries the default marker.
    pub is_default: bool,
}

/// Port for discovering and loading templates.
///
/// Implementations re-read from disk on every call; nothing is cached
/// across invocations.
pub trait TemplateStore {
    /// Find and load a template by name.
    ///
    /// `kind` restricts the search to `pre/` or `post/`; `None` scans both.
    /// The first match across the configured roots wins, local root first.
    fn discover(
        &self,
        name: &str,
        kind: Option<TemplateKind>,
    ) -> Result<TemplateHandle, AppError>;

    /// Load a template directly from a root-level file such as `fix.md`.
    fn load_root_file(&self, file_name: &str) -> Result<TemplateHandle, AppError>;

    /// Enumerate every template visible in every root, in precedence order.
    fn entries(&self) -> Result<Vec<TemplateEntry>, AppError>;

    /// The configured roots in precedence order.
    fn roots(&self) -> &[PathBuf];
}
