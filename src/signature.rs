//! Parameter-list and template-argument tokenizers.
//!
//! Both work on raw text captured by the classifier and strip syntactic
//! noise with regexes before splitting on commas. This is a lexical
//! heuristic: function-pointer parameters and nested templates are
//! mis-parsed, and the tests below pin that behavior.

use crate::model::Parameter;
use regex::Regex;
use std::sync::LazyLock;

// -- Template arguments -------------------------------------------------------

// decltype(...) plus whatever else belongs to the same entry
static RE_DECLTYPE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"decltype\s*\(.*?\)[^,]*").unwrap());

static RE_DEFAULT_VALUE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s*=[^,]*").unwrap());

static RE_TRAILING_IDENT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"([A-Za-z_]\w*)\s*$").unwrap());

static RE_COMMA_SPLIT: LazyLock<Regex> = LazyLock::new(|| Regex::new(r",\s*").unwrap());

// -- Parameter lists ----------------------------------------------------------

static RE_CV: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\b(?:const|volatile)\b\s*").unwrap());

static RE_NAMESPACE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\w+::").unwrap());

// Greedy on purpose: `map<int, int> a, vector<int> b` collapses to `map b`
static RE_TEMPLATE_TYPE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"([a-zA-Z_]\w*)\s*<.+>").unwrap());

static RE_PARENS: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\((.*)\)").unwrap());

static RE_ARRAY: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\[.*\]").unwrap());

static RE_IDENT: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\b[A-Za-z_]\w*").unwrap());

/// Reduce the text between `template <` and `>` to bare parameter names.
///
/// `typename T, class U = int, decltype(x) V` → `["T", "U"]`. Entries that
/// are empty after stripping are dropped rather than kept as blank names.
pub fn normalize_template_args(raw: &str) -> Vec<String> {
    let text = RE_DECLTYPE.replace_all(raw, "");
    let text = RE_DEFAULT_VALUE.replace_all(&text, "");

    let names: Vec<String> = RE_COMMA_SPLIT
        .split(&text)
        .filter_map(|entry| {
            RE_TRAILING_IDENT
                .captures(entry)
                .map(|caps| caps[1].to_string())
        })
        .collect();

    tracing::debug!(before = raw, after = ?names, "normalized template arguments");
    names
}

/// Split the text between a signature's parentheses into (type, name) pairs.
///
/// An empty list yields the single pair `("void", "")`. A lone word with
/// no name (`void`, `int`) yields nothing. Segments that do not contain
/// a `type name` pair are dropped.
pub fn tokenize_parameter_list(raw: &str) -> Vec<Parameter> {
    let text = strip_noise(raw);
    tracing::debug!(before = raw, after = %text, "normalized parameter list");

    if !text.contains(',') {
        let trimmed = text.trim();
        if trimmed.is_empty() {
            return vec![Parameter::new("void", "")];
        }
        if !trimmed.contains(char::is_whitespace) {
            tracing::debug!(segment = trimmed, "bare type without a parameter name");
            return Vec::new();
        }
        return last_pair(trimmed).into_iter().collect();
    }

    text.split(',')
        .filter_map(|segment| {
            let param = last_pair(segment);
            if param.is_none() {
                tracing::debug!(segment, "dropping unrecognized parameter segment");
            }
            param
        })
        .collect()
}

/// Remove references, qualifiers, namespaces, template arguments,
/// parentheses and array suffixes.
fn strip_noise(raw: &str) -> String {
    let text = raw.replace(['&', '*'], "").replace("...", "");
    let text = RE_CV.replace_all(&text, "");
    let text = RE_NAMESPACE.replace_all(&text, "");
    let text = RE_TEMPLATE_TYPE.replace_all(&text, "$1");
    let text = RE_PARENS.replace_all(&text, "$1");
    RE_ARRAY.replace_all(&text, "").into_owned()
}

/// The last two identifiers separated only by whitespace, as (type, name).
fn last_pair(segment: &str) -> Option<Parameter> {
    let idents: Vec<_> = RE_IDENT.find_iter(segment).collect();
    idents
        .windows(2)
        .rev()
        .find(|w| {
            let gap = &segment[w[0].end()..w[1].start()];
            !gap.is_empty() && gap.chars().all(char::is_whitespace)
        })
        .map(|w| Parameter::new(w[0].as_str(), w[1].as_str()))
}
