//! Plain-text renderer — a complete comment block with hints written out.

use crate::model::DocTemplate;
use crate::render::{line_content, Renderer};

pub struct PlainRenderer;

impl Renderer for PlainRenderer {
    fn render(&self, template: &DocTemplate) -> String {
        let mut out = String::from("/**\n");
        for line in &template.lines {
            let content = line_content(template, line, |_, hint| hint.to_string());
            let content = content.trim_end();
            if content.is_empty() {
                out.push_str(" *\n");
            } else {
                out.push_str(" * ");
                out.push_str(content);
                out.push('\n');
            }
        }
        if template.closed {
            out.push_str(" */\n");
        }
        out
    }
}
