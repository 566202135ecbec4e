//! Editor snippet renderer.
//!
//! Produces the text inserted right after the `/**` opener: one
//! `"\n * ..."` line per doc line with TextMate-style `${n:hint}`
//! fields, followed by `"\n */"` when the template is closed.

use crate::model::DocTemplate;
use crate::render::{line_content, Renderer};

pub struct SnippetRenderer;

impl Renderer for SnippetRenderer {
    fn render(&self, template: &DocTemplate) -> String {
        let mut out = String::new();
        for line in &template.lines {
            let content = line_content(template, line, placeholder);
            if content.is_empty() {
                out.push_str("\n *");
            } else {
                out.push_str("\n * ");
                out.push_str(&content);
            }
        }
        if template.closed {
            out.push_str("\n */");
        }
        out
    }
}

fn placeholder(index: usize, hint: &str) -> String {
    if hint.is_empty() {
        format!("${{{index}}}")
    } else {
        format!("${{{index}:{}}}", escape(hint))
    }
}

/// Escape characters with meaning inside a snippet field.
fn escape(hint: &str) -> String {
    hint.replace('\\', "\\\\")
        .replace('$', "\\$")
        .replace('}', "\\}")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::*;
    use crate::template::assemble_template;

    fn function(style: CommentStyle) -> DocTemplate {
        let raw = RawMatch {
            kind: DeclarationKind::Function,
            return_type: Some("int".to_string()),
            name: Some("add".to_string()),
            args_text: Some("int a, int b".to_string()),
            template_args_text: None,
        };
        assemble_template(&raw, &[], style)
    }

    #[test]
    fn function_snippet() {
        let out = SnippetRenderer.render(&function(CommentStyle::At));
        assert_eq!(
            out,
            "\n * @brief ${1:[brief description]}\
             \n * @details ${2:[long description]}\
             \n *\
             \n * @param a ${3:[description]}\
             \n * @param b ${4:[description]}\
             \n * @return ${5:[description]}\
             \n */"
        );
    }

    #[test]
    fn backslash_style() {
        let out = SnippetRenderer.render(&function(CommentStyle::Backslash));
        assert!(out.starts_with("\n * \\brief ${1:[brief description]}"));
        assert!(out.contains("\\param b ${4:[description]}"));
    }

    #[test]
    fn fallback_snippet() {
        let t = assemble_template(&RawMatch::bare(DeclarationKind::PlainComment), &[], CommentStyle::At);
        assert_eq!(SnippetRenderer.render(&t), "\n * ${1}\n */");
    }

    #[test]
    fn continuation_snippet_is_open() {
        let t = assemble_template(&RawMatch::bare(DeclarationKind::Continuation), &[], CommentStyle::At);
        assert_eq!(SnippetRenderer.render(&t), "\n * ${1}");
    }

    #[test]
    fn hint_escaping() {
        assert_eq!(escape("a}b$c"), "a\\}b\\$c");
    }
}
