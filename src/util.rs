use crate::error::Error;
use hyper::HeaderMap;
use serde::Serialize;
use std::collections::HashMap;

/// An argument to [`comma_join`]. Callers passing something that isn't a
/// sequence of strings wrap it in `Unsupported` with a short description;
/// such arguments are reported and skipped rather than failing the join.
#[derive(Debug, Clone)]
pub enum JoinArg {
    Strings(Vec<String>),
    Unsupported(String),
}

impl From<Vec<String>> for JoinArg {
    fn from(strings: Vec<String>) -> Self {
        JoinArg::Strings(strings)
    }
}

impl From<&[&str]> for JoinArg {
    fn from(strings: &[&str]) -> Self {
        JoinArg::Strings(strings.iter().map(|s| String::from(*s)).collect())
    }
}

/// Flattens all string sequences, in the order given, and joins them with
/// `", "`. Produces an empty string when no valid entries remain.
pub fn comma_join<I>(args: I) -> String
where
    I: IntoIterator<Item = JoinArg>,
{
    let mut entries = Vec::new();

    for arg in args {
        match arg {
            JoinArg::Strings(strings) => entries.extend(strings),
            JoinArg::Unsupported(what) => {
                tracing::warn!("comma_join called with a non string-sequence argument: {}", what);
            }
        }
    }

    entries.join(", ")
}

/// Reformats a JSON body with one tab per nesting level and a three-tab
/// base prefix on every line after the first, so the result can be embedded
/// in an already-indented documentation block. Member order is preserved.
pub fn indent_json(body: &str) -> Result<String, Error> {
    let value: serde_json::Value = serde_json::from_str(body).map_err(Error::InvalidJson)?;

    let mut out = Vec::new();
    let formatter = serde_json::ser::PrettyFormatter::with_indent(b"\t");
    let mut serializer = serde_json::Serializer::with_formatter(&mut out, formatter);
    value.serialize(&mut serializer).map_err(Error::InvalidJson)?;

    let pretty = String::from_utf8(out).map_err(|_| Error::InvalidBody)?;
    Ok(pretty.replace('\n', "\n\t\t\t"))
}

pub(crate) fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

pub(crate) fn extract_headers(header_map: &HeaderMap) -> HashMap<String, String> {
    // header values with opaque characters are ignored
    header_map
        .iter()
        .map(|(k, v)| (String::from(k.as_str()), v.to_str()))
        .filter_map(|(key, value)| value.ok().map(|v| (key, String::from(v))))
        .collect::<HashMap<_, _>>()
}
