use std::sync::OnceLock;

use minijinja::{Environment, UndefinedBehavior};

use crate::domain::{AppError, TemplateData, TemplateHandle};
use crate::ports::TemplateRenderer;

/// Minijinja-backed renderer with the fixed prompt helper set registered.
pub struct MinijinjaRenderer;

impl MinijinjaRenderer {
    pub fn new() -> Self {
        Self
    }
}

impl Default for MinijinjaRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl TemplateRenderer for MinijinjaRenderer {
    fn render(&self, handle: &TemplateHandle, data: &TemplateData) -> Result<String, AppError> {
        let env = ENV.get_or_init(|| {
            let mut env = Environment::new();
            env.set_undefined_behavior(UndefinedBehavior::Strict);
            env.add_function("truncate", |length: i64, text: String| truncate(length, &text));
            env.add_function("mdFence", |language: String, text: String| {
                md_fence(&language, &text)
            });
            env.add_function("indent", |spaces: i64, text: String| indent(spaces, &text));
            env.add_function("dedent", |text: String| dedent(&text));
            env
        });

        env.render_str(&handle.source, data).map_err(|err| AppError::TemplateInvalid {
            name: handle.name.clone(),
            reason: err.to_string(),
        })
    }
}

static ENV: OnceLock<Environment<'static>> = OnceLock::new();

/// Truncate to `length` characters, with a 3-character ellipsis when there
/// is room for one.
fn truncate(length: i64, text: &str) -> String {
    let length = length.max(0) as usize;
    let chars: Vec<char> = text.chars().collect();
    if chars.len() <= length {
        return text.to_string();
    }
    if length <= 3 {
        return chars[..length].iter().collect();
    }
    let mut out: String = chars[..length - 3].iter().collect();
    out.push_str("...");
    out
}

/// Wrap in a fenced code block, omitting the language tag when empty.
fn md_fence(language: &str, text: &str) -> String {
    if language.is_empty() {
        format!("```\n{text}\n```")
    } else {
        format!("```{language}\n{text}\n```")
    }
}

/// Prefix every non-blank line with `spaces` spaces.
fn indent(spaces: i64, text: &str) -> String {
    if spaces <= 0 {
        return text.to_string();
    }
    let prefix = " ".repeat(spaces as usize);
    text.split('\n')
        .map(|line| {
            if line.trim().is_empty() { line.to_string() } else { format!("{prefix}{line}") }
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Remove the minimum common leading whitespace across non-blank lines.
/// Tabs count as 4 columns; removing part of a tab degrades to spaces.
fn dedent(text: &str) -> String {
    let lines: Vec<&str> = text.split('\n').collect();

    let mut min_indent: Option<usize> = None;
    for line in &lines {
        if line.trim().is_empty() {
            continue;
        }
        let mut columns = 0;
        for ch in line.chars() {
            match ch {
                ' ' => columns += 1,
                '\t' => columns += 4,
                _ => break,
            }
        }
        min_indent = Some(min_indent.map_or(columns, |current| current.min(columns)));
    }

    let min_indent = match min_indent {
        Some(columns) if columns > 0 => columns,
        _ => return text.to_string(),
    };

    let dedented: Vec<String> = lines
        .iter()
        .map(|line| {
            if line.trim().is_empty() {
                return line.to_string();
            }
            let mut removed = 0;
            for (byte_index, ch) in line.char_indices() {
                if removed >= min_indent {
                    return line[byte_index..].to_string();
                }
                match ch {
                    ' ' => removed += 1,
                    '\t' => {
                        removed += 4;
                        if removed > min_indent {
                            // Partial tab: pad the overshoot with spaces.
                            let next = byte_index + ch.len_utf8();
                            return format!(
                                "{}{}",
                                " ".repeat(removed - min_indent),
                                &line[next..]
                            );
                        }
                    }
                    _ => return line[byte_index..].to_string(),
                }
            }
            String::new()
        })
        .collect();

    dedented.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeMap;
    use std::path::PathBuf;

    use crate::domain::{FixInfo, GitInfo};

    fn handle(source: &str) -> TemplateHandle {
        TemplateHandle {
            name: "test".to_string(),
            path: PathBuf::from("/tmp/test.md"),
            source: source.to_string(),
        }
    }

    fn data() -> TemplateData {
        TemplateData {
            prompt: "Fix this bug".to_string(),
            now: "2026-08-24T10:00:00+00:00".to_string(),
            cwd: "/work/project".to_string(),
            files: vec!["src/main.rs".to_string()],
            dir: String::new(),
            git: GitInfo::default(),
            config: BTreeMap::new(),
            env: BTreeMap::new(),
            fix: FixInfo::default(),
        }
    }

    #[test]
    fn truncate_adds_ellipsis_when_there_is_room() {
        assert_eq!(truncate(10, "This is a very long string"), "This is...");
        assert_eq!(truncate(3, "abcdef"), "abc");
        assert_eq!(truncate(10, "short"), "short");
    }

    #[test]
    fn md_fence_tags_the_language_when_present() {
        assert_eq!(md_fence("go", "fmt.Println(1)"), "```go\nfmt.Println(1)\n```");
        assert_eq!(md_fence("", "plain"), "```\nplain\n```");
    }

    #[test]
    fn indent_skips_blank_lines() {
        assert_eq!(indent(2, "a\n\nb"), "  a\n\n  b");
        assert_eq!(indent(0, "a"), "a");
    }

    #[test]
    fn dedent_removes_minimum_common_indent() {
        assert_eq!(dedent("    a\n    b\n        c"), "a\nb\n    c");
    }

    #[test]
    fn dedent_counts_tabs_as_four_columns() {
        assert_eq!(dedent("\ta\n    b"), "a\nb");
    }

    #[test]
    fn dedent_leaves_unindented_text_alone() {
        assert_eq!(dedent("a\n  b"), "a\n  b");
    }

    #[test]
    fn render_exposes_data_fields_and_helpers() {
        let renderer = MinijinjaRenderer::new();
        let rendered = renderer
            .render(&handle("{{ truncate(10, prompt) }} in {{ cwd }}"), &data())
            .unwrap();

        assert_eq!(rendered, "Fix thi... in /work/project");
    }

    #[test]
    fn render_error_carries_template_name() {
        let renderer = MinijinjaRenderer::new();
        let err = renderer.render(&handle("{{ unterminated"), &data()).unwrap_err();

        match err {
            AppError::TemplateInvalid { name, .. } => assert_eq!(name, "test"),
            other => panic!("expected TemplateInvalid, got {other:?}"),
        }
    }

    #[test]
    fn undefined_variables_are_render_errors() {
        let renderer = MinijinjaRenderer::new();
        let err = renderer.render(&handle("{{ nonsense }}"), &data()).unwrap_err();

        assert!(matches!(err, AppError::TemplateInvalid { .. }));
    }
}
