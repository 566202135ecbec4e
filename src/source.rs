//! Text-source boundary: reading the lines around a `/**` opener and
//! running the classify → normalize → assemble pipeline on them.

use crate::classify::classify;
use crate::config::Config;
use crate::model::{DeclarationKind, DocTemplate, RawMatch};
use crate::signature::normalize_template_args;
use crate::template::assemble_template;

/// Anything that can hand out raw lines by 0-based index.
pub trait TextSource {
    fn line(&self, index: usize) -> Option<&str>;
}

/// An in-memory document split into lines.
#[derive(Debug, Default, Clone)]
pub struct Buffer {
    lines: Vec<String>,
}

impl Buffer {
    pub fn new(text: &str) -> Self {
        Buffer {
            lines: text.lines().map(str::to_string).collect(),
        }
    }

    /// 0-based index of the first line that ends in a bare `/**` opener.
    pub fn first_opener(&self) -> Option<usize> {
        self.lines.iter().position(|l| is_bare_opener(l))
    }
}

impl TextSource for Buffer {
    fn line(&self, index: usize) -> Option<&str> {
        self.lines.get(index).map(String::as_str)
    }
}

/// A line whose only content after trimming ends with `/**`.
pub fn is_bare_opener(line: &str) -> bool {
    line.trim_end().ends_with("/**")
}

/// Lines after the opener that the classifier may look at: the
/// declaration line, a possible template line, and `max_lines` more.
pub fn context_window<T: TextSource + ?Sized>(
    source: &T,
    opener: usize,
    max_lines: usize,
) -> Vec<&str> {
    (opener + 1..)
        .take(max_lines.saturating_add(2))
        .map_while(|i| source.line(i))
        .collect()
}

/// Generate the template for the opener on line `opener` (0-based).
///
/// Returns `None` when generation is disabled. A missing opener or a
/// missing next line yields the closed fallback template.
pub fn generate<T: TextSource + ?Sized>(
    source: &T,
    opener: usize,
    config: &Config,
) -> Option<DocTemplate> {
    if !config.enabled {
        tracing::debug!("generation disabled by settings");
        return None;
    }

    let raw = match source.line(opener) {
        Some(line) if line.contains("/**") => {
            let window = context_window(source, opener, config.max_lines);
            classify(&window, config)
        }
        _ => {
            tracing::debug!(line = opener, "no documentation comment opener");
            RawMatch::bare(DeclarationKind::PlainComment)
        }
    };

    Some(build(&raw, config))
}

/// Normalize the template header (if any) and assemble.
pub fn build(raw: &RawMatch, config: &Config) -> DocTemplate {
    let template_params = raw
        .template_args_text
        .as_deref()
        .map(normalize_template_args)
        .unwrap_or_default();

    if raw.kind == DeclarationKind::PlainComment {
        tracing::warn!("unable to classify the declaration after the comment opener");
    }

    assemble_template(raw, &template_params, config.comment_style)
}
