//! Data model for classified declarations and generated templates — format-agnostic.

use serde::Serialize;

/// Declaration category inferred from the lines after a `/**` opener.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DeclarationKind {
    /// `#include` on the first line, taken as the start of a file
    FileStart,
    Define,
    Class,
    Struct,
    Enum,
    /// Templated class or struct
    Template,
    Constructor,
    Function,
    /// The next line is already inside a comment
    Continuation,
    /// Nothing matched
    PlainComment,
}

/// Result of one classification attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawMatch {
    pub kind: DeclarationKind,
    /// Declared return type, absent for constructors
    pub return_type: Option<String>,
    /// Function, constructor or operator name
    pub name: Option<String>,
    /// Raw text between the outer parentheses
    pub args_text: Option<String>,
    /// Raw text between the outer angle brackets of a `template <...>` line
    pub template_args_text: Option<String>,
}

impl RawMatch {
    /// A match with no captures.
    pub fn bare(kind: DeclarationKind) -> Self {
        RawMatch {
            kind,
            return_type: None,
            name: None,
            args_text: None,
            template_args_text: None,
        }
    }
}

/// A tokenized function parameter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Parameter {
    pub type_text: String,
    pub name_text: String,
}

impl Parameter {
    pub fn new(type_text: impl Into<String>, name_text: impl Into<String>) -> Self {
        Parameter {
            type_text: type_text.into(),
            name_text: name_text.into(),
        }
    }

    /// The `("void", "")` pair produced for an empty parameter list.
    pub fn is_void(&self) -> bool {
        self.type_text == "void" && self.name_text.is_empty()
    }
}

/// Command character prefixed to every doxygen tag.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub enum CommentStyle {
    /// `@brief` (javadoc)
    #[default]
    #[serde(rename = "@")]
    At,
    /// `\brief` (Qt)
    #[serde(rename = "\\")]
    Backslash,
}

impl CommentStyle {
    pub fn as_char(self) -> char {
        match self {
            CommentStyle::At => '@',
            CommentStyle::Backslash => '\\',
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "@" | "javadoc" => Some(CommentStyle::At),
            "\\" | "qt" => Some(CommentStyle::Backslash),
            _ => None,
        }
    }
}

/// A fillable slot in a generated template.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Field {
    /// 1-based, unique within one template
    pub index: usize,
    /// Default text shown until replaced; may be empty
    pub hint: String,
}

/// One line inside the generated comment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum DocLine {
    /// ` *` separator
    Blank,
    /// `@command [label] ${n:hint}`
    Tag {
        command: String,
        label: Option<String>,
        field: Field,
    },
    /// A placeholder with no command
    Field { field: Field },
}

impl DocLine {
    pub fn field(&self) -> Option<&Field> {
        match self {
            DocLine::Blank => None,
            DocLine::Tag { field, .. } | DocLine::Field { field } => Some(field),
        }
    }
}

/// Generated documentation template, ready to render.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DocTemplate {
    pub kind: DeclarationKind,
    pub style: CommentStyle,
    pub lines: Vec<DocLine>,
    /// Whether the template ends the comment with `*/`
    pub closed: bool,
}

impl DocTemplate {
    /// Fields in emission order.
    pub fn fields(&self) -> impl Iterator<Item = &Field> {
        self.lines.iter().filter_map(DocLine::field)
    }

    /// Label of every tag line with the given command, in order.
    pub fn labels(&self, command: &str) -> Vec<&str> {
        self.lines
            .iter()
            .filter_map(|line| match line {
                DocLine::Tag {
                    command: c, label, ..
                } if c == command => Some(label.as_deref().unwrap_or("")),
                _ => None,
            })
            .collect()
    }

    /// Number of tag lines with the given command.
    pub fn count(&self, command: &str) -> usize {
        self.labels(command).len()
    }
}
