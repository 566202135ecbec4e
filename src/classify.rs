//! Declaration classifier — ordered regex cascade, first match wins.
//!
//! The window starts at the line right after the `/**` opener. Directive
//! and class-like rules only look at the first line; constructor and
//! function rules look at the first line joined with up to
//! `max_lines` following lines so wrapped signatures still match.
//!
//! Only one `template <...>` header is looked past: with stacked headers
//! the declaration falls through to the plain rules and both template
//! argument lists are dropped.

use crate::config::Config;
use crate::model::{DeclarationKind, RawMatch};
use regex::Regex;
use std::sync::LazyLock;

// -- Regex patterns -----------------------------------------------------------

/// `inline`, `static`, ... or `[[attribute]]`, each followed by whitespace.
const MODIFIERS: &str =
    r"\s*(?:(?:inline|static|constexpr|friend|virtual|explicit|\[\[.+\]\])\s+)*";

/// Characters accepted inside a parameter list.
const ARGS: &str = r"\((?P<args>[\w\s:<>\[\]\(\),.*&=]*)\).+";

static RE_COMMENT_LINE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^\s*\*").unwrap());

static RE_TEMPLATE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\s*template\s*<(.+)>").unwrap());

static RE_INCLUDE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"#\s*include").unwrap());

static RE_DEFINE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"#\s*define").unwrap());

static RE_CLASS: LazyLock<Regex> = LazyLock::new(|| record_pattern("class"));

static RE_STRUCT: LazyLock<Regex> = LazyLock::new(|| record_pattern("struct"));

static RE_ENUM: LazyLock<Regex> = LazyLock::new(|| record_pattern("enum"));

static RE_CONSTRUCTOR: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!(
        r"^{MODIFIERS}~?(?P<name>[a-zA-Z_]\w*)(?:::[a-zA-Z_]\w*)?{ARGS}"
    ))
    .unwrap()
});

static RE_FUNCTION: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(&format!("^{}", function_pattern())).unwrap());

// Unanchored: a plain declaration may be preceded by text the prefix can't absorb
static RE_FUNCTION_ANYWHERE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(&function_pattern()).unwrap());

fn record_pattern(keyword: &str) -> Regex {
    Regex::new(&format!(
        r"^\s*(?:typedef)?\s*{keyword}\b\s*(?P<name>[a-zA-Z_]\w*)?\s*\{{?"
    ))
    .unwrap()
}

fn function_pattern() -> String {
    format!(
        concat!(
            r"{}(?P<return>(?:typename\s*)?[\w:<>]+)?\s*",
            r"(?:[A-Za-z_]\w*::)?",
            r"(?P<name>operator\s*.{{1,2}}|[A-Za-z_:]\w*)\s*",
            "{}"
        ),
        MODIFIERS, ARGS
    )
}

// -- Rule tables --------------------------------------------------------------

#[derive(Clone, Copy)]
enum Scope {
    /// Only the first line of the window
    Line,
    /// The first line joined with the lines after it
    Joined,
}

struct Rule {
    kind: DeclarationKind,
    scope: Scope,
    regex: &'static LazyLock<Regex>,
}

/// Tried against the line after a `template <...>` header.
static TEMPLATED_RULES: [Rule; 4] = [
    Rule { kind: DeclarationKind::Constructor, scope: Scope::Joined, regex: &RE_CONSTRUCTOR },
    Rule { kind: DeclarationKind::Function, scope: Scope::Joined, regex: &RE_FUNCTION },
    Rule { kind: DeclarationKind::Template, scope: Scope::Line, regex: &RE_CLASS },
    Rule { kind: DeclarationKind::Template, scope: Scope::Line, regex: &RE_STRUCT },
];

/// Tried against the first line of the window. Order matters: constructor
/// must come before function, which would also accept it.
static DECLARATION_RULES: [Rule; 7] = [
    Rule { kind: DeclarationKind::FileStart, scope: Scope::Line, regex: &RE_INCLUDE },
    Rule { kind: DeclarationKind::Define, scope: Scope::Line, regex: &RE_DEFINE },
    Rule { kind: DeclarationKind::Class, scope: Scope::Line, regex: &RE_CLASS },
    Rule { kind: DeclarationKind::Struct, scope: Scope::Line, regex: &RE_STRUCT },
    Rule { kind: DeclarationKind::Enum, scope: Scope::Line, regex: &RE_ENUM },
    Rule { kind: DeclarationKind::Constructor, scope: Scope::Joined, regex: &RE_CONSTRUCTOR },
    Rule { kind: DeclarationKind::Function, scope: Scope::Joined, regex: &RE_FUNCTION_ANYWHERE },
];

// -- Public API ---------------------------------------------------------------

/// Classify the declaration that follows a documentation-comment opener.
///
/// Never fails: an empty window or an unrecognized declaration yields
/// [`DeclarationKind::PlainComment`].
pub fn classify<S: AsRef<str>>(lines: &[S], config: &Config) -> RawMatch {
    let lines: Vec<&str> = lines.iter().map(AsRef::as_ref).collect();
    let Some(first) = lines.first().copied() else {
        return RawMatch::bare(DeclarationKind::PlainComment);
    };

    if RE_COMMENT_LINE.is_match(first) {
        return RawMatch::bare(DeclarationKind::Continuation);
    }

    if let Some(caps) = RE_TEMPLATE.captures(first) {
        let template_args = caps[1].to_string();
        let rest = &lines[1..];
        if let Some(next) = rest.first().copied() {
            let joined = join_lines(rest, config.max_lines);
            if let Some(found) = first_match(&TEMPLATED_RULES, next, &joined) {
                return RawMatch {
                    template_args_text: Some(template_args),
                    ..found
                };
            }
        }
        tracing::debug!(line = first, "template header without a recognized declaration");
    }

    let joined = join_lines(&lines, config.max_lines);
    first_match(&DECLARATION_RULES, first, &joined)
        .unwrap_or_else(|| RawMatch::bare(DeclarationKind::PlainComment))
}

// -- Helper functions ---------------------------------------------------------

fn first_match(rules: &[Rule], line: &str, joined: &str) -> Option<RawMatch> {
    rules.iter().find_map(|rule| {
        let text = match rule.scope {
            Scope::Line => line,
            Scope::Joined => joined,
        };
        let caps = rule.regex.captures(text)?;
        tracing::debug!(kind = ?rule.kind, text, "matched declaration rule");

        let capture = |name: &str| {
            caps.name(name)
                .map(|m| m.as_str().trim().to_string())
                .filter(|s| !s.is_empty())
        };
        Some(RawMatch {
            kind: rule.kind,
            return_type: capture("return"),
            name: capture("name"),
            args_text: caps.name("args").map(|m| m.as_str().to_string()),
            template_args_text: None,
        })
    })
}

/// Join the first line with up to `max_lines` following lines, stopping
/// at the first empty line.
fn join_lines(lines: &[&str], max_lines: usize) -> String {
    let Some((first, rest)) = lines.split_first() else {
        return String::new();
    };
    let mut joined = first.to_string();
    for line in rest.iter().take(max_lines) {
        if line.is_empty() {
            break;
        }
        joined.push(' ');
        joined.push_str(line);
    }
    joined
}
