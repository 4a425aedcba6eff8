//! Configuration loading

use std::fs;
use std::path::{Path, PathBuf};

use log::debug;

use crate::error::{TreeError, TreeResult};

use super::types::{CharsetMode, Config};

/// File name of the per-project configuration, looked up in the tree root
pub const PROJECT_CONFIG_FILE: &str = ".foldertree.toml";

/// Template written by `foldertree init`
pub const CONFIG_TEMPLATE: &str = r#"# foldertree configuration
#
# Exclude patterns are tested against each entry's name and full path.
# The first `*` in a pattern matches any run of characters; the rest of the
# pattern is a regular expression (so `.` matches any character).

[tree]
exclude = [
    "^\\.git$",
    "node_modules",
    "^target$",
]

[output]
# auto | unicode | ascii
charset = "auto"
"#;

/// Non-fatal configuration warning surfaced to CLI users.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigWarning {
    pub key: String,
    pub file: PathBuf,
    pub line: Option<usize>,
    pub suggestion: Option<String>,
}

/// Load configuration and collect non-fatal warnings (e.g. unknown keys).
pub fn load_with_warnings(path: &Path) -> TreeResult<(Config, Vec<ConfigWarning>)> {
    let content = fs::read_to_string(path).map_err(|e| TreeError::Config {
        file: path.to_path_buf(),
        message: e.to_string(),
    })?;
    parse_with_warnings(path, &content)
}

/// Parse TOML content, collecting unknown keys as warnings
pub fn parse_with_warnings(path: &Path, content: &str) -> TreeResult<(Config, Vec<ConfigWarning>)> {
    let mut unknown_paths: Vec<String> = Vec::new();
    let deserializer = toml::de::Deserializer::new(content);

    let config: Config = serde_ignored::deserialize(deserializer, |p| {
        unknown_paths.push(p.to_string());
    })
    .map_err(|e| TreeError::Config {
        file: path.to_path_buf(),
        message: e.to_string(),
    })?;

    let warnings = unknown_paths
        .into_iter()
        .map(|path_str| {
            let key = path_str
                .split('.')
                .next_back()
                .unwrap_or(path_str.as_str())
                .to_string();
            ConfigWarning {
                key: key.clone(),
                file: path.to_path_buf(),
                line: find_line_number(content, &key),
                suggestion: suggest_key(&key),
            }
        })
        .collect();

    Ok((config, warnings))
}

/// Load from project config, else user config, else defaults; then apply env overrides
pub fn load_layered(root: &Path) -> TreeResult<(Config, Vec<ConfigWarning>)> {
    let project_config = root.join(PROJECT_CONFIG_FILE);
    if project_config.is_file() {
        debug!("Loading project config {}", project_config.display());
        let (config, warnings) = load_with_warnings(&project_config)?;
        return Ok((with_env_overrides(config), warnings));
    }

    if let Some(user_config) = user_config_path() {
        if user_config.is_file() {
            debug!("Loading user config {}", user_config.display());
            let (config, warnings) = load_with_warnings(&user_config)?;
            return Ok((with_env_overrides(config), warnings));
        }
    }

    Ok((with_env_overrides(Config::default()), Vec::new()))
}

/// Apply environment variable overrides (FOLDERTREE_* prefix)
pub fn with_env_overrides(config: Config) -> Config {
    with_env_overrides_from(config, |key| std::env::var(key).ok())
}

pub(crate) fn with_env_overrides_from(
    mut config: Config,
    get_env: impl Fn(&str) -> Option<String>,
) -> Config {
    // FOLDERTREE_EXCLUDE (comma-separated, replaces the configured list)
    if let Some(exclude) = get_env("FOLDERTREE_EXCLUDE") {
        config.tree.exclude = exclude
            .split(',')
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(String::from)
            .collect();
    }

    // FOLDERTREE_CHARSET
    if let Some(charset) = get_env("FOLDERTREE_CHARSET") {
        match CharsetMode::parse(&charset) {
            Some(mode) => config.output.charset = mode,
            None => debug!("Ignoring unknown FOLDERTREE_CHARSET value '{}'", charset),
        }
    }

    config
}

/// User-level config file (`$XDG_CONFIG_HOME/foldertree/config.toml`)
pub fn user_config_path() -> Option<PathBuf> {
    std::env::var("XDG_CONFIG_HOME")
        .ok()
        .filter(|v| !v.is_empty())
        .map(PathBuf::from)
        .or_else(dirs::config_dir)
        .map(|dir| dir.join("foldertree").join("config.toml"))
}

fn find_line_number(content: &str, needle: &str) -> Option<usize> {
    for (i, line) in content.lines().enumerate() {
        if line.contains(needle) {
            return Some(i + 1);
        }
    }
    None
}

fn suggest_key(unknown: &str) -> Option<String> {
    const CANDIDATES: &[&str] = &["tree", "exclude", "output", "charset"];

    let mut best: Option<(&str, usize)> = None;
    for candidate in CANDIDATES {
        let dist = levenshtein(unknown, candidate);
        best = match best {
            None => Some((candidate, dist)),
            Some((_, best_dist)) if dist < best_dist => Some((candidate, dist)),
            Some(current) => Some(current),
        };
    }

    match best {
        Some((candidate, dist)) if dist <= 2 => Some(candidate.to_string()),
        _ => None,
    }
}

fn levenshtein(a: &str, b: &str) -> usize {
    if a == b {
        return 0;
    }

    let a_bytes = a.as_bytes();
    let b_bytes = b.as_bytes();

    let mut prev: Vec<usize> = (0..=b_bytes.len()).collect();
    let mut curr = vec![0usize; b_bytes.len() + 1];

    for (i, &ac) in a_bytes.iter().enumerate() {
        curr[0] = i + 1;
        for (j, &bc) in b_bytes.iter().enumerate() {
            let cost = if ac == bc { 0 } else { 1 };
            curr[j + 1] =
                std::cmp::min(std::cmp::min(prev[j + 1] + 1, curr[j] + 1), prev[j] + cost);
        }
        prev.clone_from_slice(&curr);
    }

    prev[b_bytes.len()]
}
