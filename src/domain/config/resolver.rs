//! Configuration precedence resolution.
//!
//! Layers, lowest to highest: built-in defaults, the config file, `PROMPTER_*`
//! environment variables, explicit caller overrides. Missing config file is
//! not an error.

use std::fs;
use std::path::{Path, PathBuf};

use crate::domain::config::{Config, ConfigLayer, DirectoryStrategy, Target};
use crate::domain::{AppError, ExecutionContext};

const ENV_PREFIX: &str = "PROMPTER_";

/// Resolve the effective configuration for this run.
pub fn resolve(
    ctx: &ExecutionContext,
    config_path: Option<&Path>,
    overrides: ConfigLayer,
) -> Result<Config, AppError> {
    let mut layer = defaults();
    layer.merge(file_layer(ctx, config_path)?);
    layer.merge(env_layer(ctx));
    layer.merge(overrides);

    let config = finalize(ctx, layer)?;
    validate(&config)?;
    Ok(config)
}

fn defaults() -> ConfigLayer {
    ConfigLayer {
        templates_root: Some("~/.config/prompter".to_string()),
        local_templates_root: None,
        editor: Some("nvim".to_string()),
        default_pre: Some(String::new()),
        default_post: Some(String::new()),
        fix_file: Some("/tmp/prompter-fix.txt".to_string()),
        directory_strategy: Some("git".to_string()),
        target: Some("clipboard".to_string()),
        interactive_default: Some(true),
    }
}

/// Default config file location under the context home.
pub fn default_config_path(ctx: &ExecutionContext) -> PathBuf {
    ctx.home.join(".config").join("prompter").join("config.toml")
}

fn file_layer(ctx: &ExecutionContext, config_path: Option<&Path>) -> Result<ConfigLayer, AppError> {
    let path = match config_path {
        Some(explicit) => ctx.expand_path(&explicit.to_string_lossy()),
        None => default_config_path(ctx),
    };

    if !path.exists() {
        return Ok(ConfigLayer::default());
    }

    let content = fs::read_to_string(&path).map_err(|err| {
        AppError::configuration(format!("failed to read config file {}: {err}", path.display()))
    })?;

    toml::from_str(&content).map_err(|err| {
        AppError::configuration(format!("failed to parse config file {}: {err}", path.display()))
    })
}

fn env_layer(ctx: &ExecutionContext) -> ConfigLayer {
    let get = |key: &str| ctx.env_var(&format!("{ENV_PREFIX}{key}")).map(str::to_string);

    ConfigLayer {
        templates_root: get("TEMPLATES_ROOT"),
        local_templates_root: get("LOCAL_TEMPLATES_ROOT"),
        editor: get("EDITOR"),
        default_pre: get("DEFAULT_PRE"),
        default_post: get("DEFAULT_POST"),
        fix_file: get("FIX_FILE"),
        directory_strategy: get("DIRECTORY_STRATEGY"),
        target: get("TARGET"),
        interactive_default: get("INTERACTIVE_DEFAULT").map(|v| {
            matches!(v.trim().to_ascii_lowercase().as_str(), "true" | "1" | "yes")
        }),
    }
}

fn finalize(ctx: &ExecutionContext, layer: ConfigLayer) -> Result<Config, AppError> {
    // Defaults populate every field, so the unwraps below cannot fire; the
    // fallbacks are belt-and-braces for a hand-built layer.
    let templates_root = layer.templates_root.unwrap_or_else(|| "~/.config/prompter".to_string());
    let fix_file = layer.fix_file.unwrap_or_else(|| "/tmp/prompter-fix.txt".to_string());
    let strategy_raw = layer.directory_strategy.unwrap_or_else(|| "git".to_string());
    let target_raw = layer.target.unwrap_or_else(|| "clipboard".to_string());

    let directory_strategy = DirectoryStrategy::parse(&strategy_raw)?;
    let target = Target::parse(&target_raw).map_err(|_| {
        AppError::configuration(format!(
            "invalid target: {target_raw} (must be 'clipboard', 'stdout', or 'file:/path')"
        ))
    })?;

    Ok(Config {
        templates_root: ctx.expand_path(&templates_root),
        local_templates_root: layer
            .local_templates_root
            .filter(|value| !value.is_empty())
            .map(|value| ctx.expand_path(&value)),
        editor: layer.editor.unwrap_or_else(|| "nvim".to_string()),
        default_pre: layer.default_pre.unwrap_or_default(),
        default_post: layer.default_post.unwrap_or_default(),
        fix_file: ctx.expand_path(&fix_file),
        directory_strategy,
        target,
        interactive_default: layer.interactive_default.unwrap_or(true),
    })
}

/// Validate the resolved configuration.
///
/// May create the templates root when absent (best-effort auto-repair);
/// never deletes or overwrites existing content.
pub fn validate(config: &Config) -> Result<(), AppError> {
    let root = &config.templates_root;
    if !root.exists() {
        fs::create_dir_all(root).map_err(|_| {
            AppError::configuration(format!(
                "templates root does not exist and cannot be created: {}",
                root.display()
            ))
        })?;
    } else if !root.is_dir() {
        return Err(AppError::configuration(format!(
            "templates root is not a directory: {}",
            root.display()
        )));
    }
    Ok(())
}
