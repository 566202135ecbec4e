//! Generator settings and the JSON settings-file loader.
//!
//! Accepts both the short keys (`enabled`, `comment_style`, `max_lines`)
//! and the editor-plugin keys (`doxydoc_enabled`, `doxydoc_javadoc`,
//! `doxydoc_max_lines`). Short keys win when both are present.

use crate::model::CommentStyle;
use anyhow::{Context, Result};
use serde::Deserialize;
use std::fs;
use std::path::Path;

/// Default number of lines joined after a declaration's first line.
pub const DEFAULT_MAX_LINES: usize = 5;

/// Settings passed to the classifier and assembler.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub enabled: bool,
    pub comment_style: CommentStyle,
    /// Extra lines joined to tolerate signatures split across lines
    pub max_lines: usize,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            enabled: true,
            comment_style: CommentStyle::At,
            max_lines: DEFAULT_MAX_LINES,
        }
    }
}

/// On-disk settings; every key optional.
#[derive(Debug, Default, Deserialize)]
struct SettingsFile {
    enabled: Option<bool>,
    comment_style: Option<String>,
    max_lines: Option<usize>,
    doxydoc_enabled: Option<bool>,
    doxydoc_javadoc: Option<bool>,
    doxydoc_max_lines: Option<usize>,
}

impl Config {
    /// Parse settings from JSON text; absent keys keep their defaults.
    pub fn from_json(text: &str) -> Result<Config> {
        let file: SettingsFile =
            serde_json::from_str(text).context("invalid settings JSON")?;
        let defaults = Config::default();

        let comment_style = match file.comment_style.as_deref() {
            Some(s) => CommentStyle::parse(s)
                .with_context(|| format!("unknown comment_style: {s:?}. Use \"@\" or \"\\\\\""))?,
            None => match file.doxydoc_javadoc {
                Some(true) => CommentStyle::At,
                Some(false) => CommentStyle::Backslash,
                None => defaults.comment_style,
            },
        };

        Ok(Config {
            enabled: file
                .enabled
                .or(file.doxydoc_enabled)
                .unwrap_or(defaults.enabled),
            comment_style,
            max_lines: file
                .max_lines
                .or(file.doxydoc_max_lines)
                .unwrap_or(defaults.max_lines),
        })
    }

    /// Read and parse a settings file.
    pub fn load(path: &Path) -> Result<Config> {
        let text = fs::read_to_string(path)
            .with_context(|| format!("failed to read settings: {}", path.display()))?;
        Config::from_json(&text).with_context(|| format!("in {}", path.display()))
    }
}
