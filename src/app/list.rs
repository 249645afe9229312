//! Renders the `list` subcommand output: configured roots and every
//! discoverable template.

use std::collections::HashMap;

use crate::domain::{AppError, TemplateKind};
use crate::ports::TemplateStore;

/// Build the listing text for the configured template roots.
pub fn execute<S: TemplateStore>(store: &S) -> Result<String, AppError> {
    let roots = store.roots();
    let entries = store.entries()?;

    let mut out = String::from("Template roots:\n");
    for (index, root) in roots.iter().enumerate() {
        let marker = if roots.len() > 1 && index == 0 { " (local)" } else { "" };
        out.push_str(&format!("  {}{marker}\n", root.display()));
    }

    for kind in TemplateKind::ALL {
        out.push_str(&format!("\n{} templates:\n", kind_label(kind)));

        let mut first_seen: HashMap<&str, usize> = HashMap::new();
        let mut any = false;
        for entry in entries.iter().filter(|entry| entry.kind == kind) {
            // Entries come in precedence order, so a repeated display name
            // is shadowed by the root where that name first appeared. A
            // duplicate can also arise within one root when a default-marked
            // stem and a plain stem share a name.
            let shadowed = first_seen.contains_key(entry.name.as_str());
            let winner = *first_seen.entry(entry.name.as_str()).or_insert(entry.root_index);
            let mut markers = String::new();
            if entry.is_default {
                markers.push_str(" (default)");
            }
            if shadowed {
                markers.push_str(&format!(
                    " (shadowed by {})",
                    roots[winner].display()
                ));
            }
            out.push_str(&format!("  {}{markers}\n", entry.name));
            any = true;
        }
        if !any {
            out.push_str("  (none)\n");
        }
    }

    Ok(out.trim_end().to_string())
}

fn kind_label(kind: TemplateKind) -> &'static str {
    match kind {
        TemplateKind::Pre => "Pre",
        TemplateKind::Post => "Post",
    }
}
