//! Template assembler — turns a classified declaration into an ordered
//! list of doc lines with auto-incrementing placeholder indices.

use crate::model::*;
use crate::signature::tokenize_parameter_list;

const BRIEF_HINT: &str = "[brief description]";
const DETAILS_HINT: &str = "[long description]";
const DESCRIPTION_HINT: &str = "[description]";

/// Accumulates lines and hands out placeholder indices in emission order.
struct Builder {
    lines: Vec<DocLine>,
    next_index: usize,
}

impl Builder {
    fn new() -> Self {
        Builder {
            lines: Vec::new(),
            next_index: 1,
        }
    }

    fn next_field(&mut self, hint: &str) -> Field {
        let field = Field {
            index: self.next_index,
            hint: hint.to_string(),
        };
        self.next_index += 1;
        field
    }

    fn tag(&mut self, command: &str, label: Option<&str>, hint: &str) {
        let field = self.next_field(hint);
        self.lines.push(DocLine::Tag {
            command: command.to_string(),
            label: label.map(str::to_string),
            field,
        });
    }

    fn bare_field(&mut self) {
        let field = self.next_field("");
        self.lines.push(DocLine::Field { field });
    }

    fn blank(&mut self) {
        self.lines.push(DocLine::Blank);
    }

    fn brief_and_details(&mut self) {
        self.tag("brief", None, BRIEF_HINT);
        self.tag("details", None, DETAILS_HINT);
    }

    fn finish(self, kind: DeclarationKind, style: CommentStyle) -> DocTemplate {
        DocTemplate {
            kind,
            style,
            lines: self.lines,
            closed: kind != DeclarationKind::Continuation,
        }
    }
}

/// Build the documentation template for a classified declaration.
///
/// `template_params` are the normalized names from the `template <...>`
/// header, empty for non-templated declarations.
pub fn assemble_template(
    raw: &RawMatch,
    template_params: &[String],
    style: CommentStyle,
) -> DocTemplate {
    let mut b = Builder::new();

    match raw.kind {
        DeclarationKind::FileStart => {
            b.tag("file", None, "[file name]");
            b.brief_and_details();
            b.blank();
            b.tag("author", None, "[authors name]");
            b.tag("date", None, "[file date]");
            b.tag("copyright", None, "[copyright description]");
        }
        DeclarationKind::Define => b.brief_and_details(),
        DeclarationKind::Class => record(&mut b, "class"),
        DeclarationKind::Struct => record(&mut b, "struct"),
        DeclarationKind::Enum => record(&mut b, "enum"),
        DeclarationKind::Template => {
            b.brief_and_details();
            if !template_params.is_empty() {
                b.blank();
            }
            for name in template_params {
                b.tag("tparam", Some(name), DESCRIPTION_HINT);
            }
        }
        DeclarationKind::Constructor | DeclarationKind::Function => {
            function(&mut b, raw, template_params)
        }
        DeclarationKind::Continuation | DeclarationKind::PlainComment => b.bare_field(),
    }

    b.finish(raw.kind, style)
}

fn record(b: &mut Builder, keyword: &str) {
    b.tag(keyword, None, &format!("[{keyword} name]"));
    b.brief_and_details();
}

fn function(b: &mut Builder, raw: &RawMatch, template_params: &[String]) {
    b.brief_and_details();

    let params: Vec<Parameter> = match raw.args_text.as_deref().map(str::trim) {
        Some(args) if !args.is_empty() && !args.eq_ignore_ascii_case("void") => {
            tokenize_parameter_list(args)
                .into_iter()
                .filter(|p| !p.is_void())
                .collect()
        }
        _ => Vec::new(),
    };

    // A template parameter used as a parameter's type is documented by that parameter
    let mut leftover: Vec<&String> = template_params.iter().collect();
    for param in &params {
        if let Some(pos) = leftover.iter().position(|t| **t == param.type_text) {
            leftover.remove(pos);
        }
    }

    let return_type = raw
        .return_type
        .as_deref()
        .filter(|r| !r.is_empty() && *r != "void");

    if !params.is_empty() || !leftover.is_empty() || return_type.is_some() {
        b.blank();
    }
    for param in &params {
        b.tag("param", Some(&param.name_text), DESCRIPTION_HINT);
    }
    for name in leftover {
        b.tag("tparam", Some(name), DESCRIPTION_HINT);
    }
    if return_type.is_some() {
        b.tag("return", None, DESCRIPTION_HINT);
    }
}
