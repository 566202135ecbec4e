//! Renderer module — trait-based format dispatch.

pub mod json;
pub mod plain;
pub mod snippet;

use crate::model::{DocLine, DocTemplate};
use anyhow::{anyhow, Result};

/// Trait for rendering a DocTemplate into a specific output format.
pub trait Renderer {
    fn render(&self, template: &DocTemplate) -> String;
}

/// Create a renderer for the given format name.
pub fn create_renderer(format: &str) -> Result<Box<dyn Renderer>> {
    match format {
        "snippet" => Ok(Box::new(snippet::SnippetRenderer)),
        "plain" | "text" => Ok(Box::new(plain::PlainRenderer)),
        "json" => Ok(Box::new(json::JsonRenderer)),
        _ => Err(anyhow!(
            "unknown format: {}. Use snippet, plain, or json",
            format
        )),
    }
}

/// Text after ` * ` for one line, with fields rendered by `field`.
fn line_content(
    template: &DocTemplate,
    line: &DocLine,
    field: impl Fn(usize, &str) -> String,
) -> String {
    match line {
        DocLine::Blank => String::new(),
        DocLine::Field { field: f } => field(f.index, &f.hint),
        DocLine::Tag {
            command,
            label,
            field: f,
        } => {
            let mut out = String::new();
            out.push(template.style.as_char());
            out.push_str(command);
            out.push(' ');
            if let Some(label) = label {
                out.push_str(label);
                out.push(' ');
            }
            out.push_str(&field(f.index, &f.hint));
            out
        }
    }
}
