/// Normalization for free-text identity matching across tables: lowercase,
/// trim, collapse internal whitespace.
pub(crate) fn norm_label(raw: &str) -> String {
    raw.trim()
        .to_lowercase()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}

/// Bidirectional substring containment over normalized labels. Deliberately
/// fuzzy: "visa card" matches both "card" and "bank visa card primary".
/// Empty sides never match.
pub(crate) fn fuzzy_label_match(a: &str, b: &str) -> bool {
    let a = norm_label(a);
    let b = norm_label(b);
    if a.is_empty() || b.is_empty() {
        return false;
    }
    a.contains(&b) || b.contains(&a)
}
