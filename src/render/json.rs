//! JSON renderer — structured output for tooling integration.
//!
//! Serializes the DocTemplate model directly with `serde_json`.

use crate::model::DocTemplate;
use crate::render::Renderer;

pub struct JsonRenderer;

impl Renderer for JsonRenderer {
    fn render(&self, template: &DocTemplate) -> String {
        // DocTemplate holds only strings, numbers and enums
        let mut out = serde_json::to_string_pretty(template).unwrap_or_default();
        out.push('\n');
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::*;
    use crate::template::assemble_template;

    #[test]
    fn serializes_fields() {
        let raw = RawMatch {
            kind: DeclarationKind::Constructor,
            return_type: None,
            name: Some("Foo".to_string()),
            args_text: Some("int size".to_string()),
            template_args_text: None,
        };
        let t = assemble_template(&raw, &[], CommentStyle::Backslash);
        let value: serde_json::Value = serde_json::from_str(&JsonRenderer.render(&t)).unwrap();

        assert_eq!(value["kind"], "constructor");
        assert_eq!(value["style"], "\\");
        assert_eq!(value["closed"], true);
        let lines = value["lines"].as_array().unwrap();
        assert_eq!(lines[0]["type"], "tag");
        assert_eq!(lines[0]["command"], "brief");
        assert_eq!(lines[2]["type"], "blank");
        assert_eq!(lines[3]["label"], "size");
        assert_eq!(lines[3]["field"]["index"], 3);
    }
}
