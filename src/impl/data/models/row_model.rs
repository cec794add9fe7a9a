use regex::Regex;
use serde_json::{Map, Value};
use std::sync::OnceLock;

/// One loosely-typed record from a backend table. Keys are not guaranteed
/// present and values may be `number | string | null`; every accessor here is
/// total and degrades to `None`/`0` instead of erroring.
#[derive(Debug, Clone, Default)]
pub struct RowModel(pub Map<String, Value>);

fn numeric_scrub_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"[^0-9+\-.]").expect("hardcoded regex should be valid"))
}

/// Permissive float parse: strips thousands separators and any character that
/// is not a digit, sign, or decimal dot, then parses. Non-finite results are
/// rejected.
pub(crate) fn parse_numeric_text(raw: &str) -> Option<f64> {
    let scrubbed = numeric_scrub_regex().replace_all(raw.trim(), "");
    if scrubbed.is_empty() {
        return None;
    }
    scrubbed.parse::<f64>().ok().filter(|v| v.is_finite())
}

impl RowModel {
    pub fn new(fields: Map<String, Value>) -> Self {
        Self(fields)
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    /// Whether the key holds a value the numeric sniffer considers a
    /// candidate (a number, or any string).
    fn is_numeric_candidate(&self, key: &str) -> bool {
        matches!(self.0.get(key), Some(Value::Number(_)) | Some(Value::String(_)))
    }

    /// Numeric value of one field, if present and parseable.
    pub fn numeric(&self, key: &str) -> Option<f64> {
        match self.0.get(key)? {
            Value::Number(n) => n.as_f64().filter(|v| v.is_finite()),
            Value::String(s) => parse_numeric_text(s),
            _ => None,
        }
    }

    /// First candidate key with a numeric-looking value, parsed; `0.0` when no
    /// candidate matches or parsing fails. Total by contract.
    pub fn resolve_numeric(&self, candidate_keys: &[&str]) -> f64 {
        candidate_keys
            .iter()
            .find_map(|k| self.numeric(k))
            .unwrap_or(0.0)
    }

    /// Non-empty trimmed string value of one field.
    pub fn text(&self, key: &str) -> Option<&str> {
        match self.0.get(key)? {
            Value::String(s) => {
                let trimmed = s.trim();
                (!trimmed.is_empty()).then_some(trimmed)
            }
            _ => None,
        }
    }

    /// First candidate key holding a non-empty string.
    pub fn first_text(&self, candidate_keys: &[&str]) -> Option<&str> {
        candidate_keys.iter().find_map(|k| self.text(k))
    }

    /// Id-like value of one field: a finite number or a non-empty string,
    /// rendered as a string.
    pub fn id_string(&self, key: &str) -> Option<String> {
        match self.0.get(key)? {
            Value::Number(n) => Some(n.to_string()),
            Value::String(s) => {
                let trimmed = s.trim();
                (!trimmed.is_empty()).then(|| trimmed.to_string())
            }
            _ => None,
        }
    }

    /// First candidate key holding an id-like value.
    pub fn first_id(&self, candidate_keys: &[&str]) -> Option<String> {
        candidate_keys.iter().find_map(|k| self.id_string(k))
    }
}

/// Amount key for a whole batch, sniffed from the FIRST row only. If the
/// first row lacks a candidate that later rows carry, that key stays ignored
/// for rows resolved through the sniffed key; [`resolve_numeric_field`] falls
/// back to per-row sniffing only when this returns `None`. Known sharp edge,
/// kept to match the backend's reference consumers.
pub fn sniff_numeric_key<'a>(rows: &[RowModel], candidate_keys: &[&'a str]) -> Option<&'a str> {
    let first = rows.first()?;
    candidate_keys
        .iter()
        .find(|k| first.is_numeric_candidate(k))
        .copied()
}

/// Batch-wide numeric resolution per the sniff-from-first-row policy.
pub fn resolve_numeric_field(rows: &[RowModel], candidate_keys: &[&str]) -> Vec<f64> {
    let primary = sniff_numeric_key(rows, candidate_keys);
    rows.iter()
        .map(|row| match primary {
            Some(key) => row.numeric(key).unwrap_or(0.0),
            None => row.resolve_numeric(candidate_keys),
        })
        .collect()
}
