use crate::data::models::row_model::RowModel;
use crate::entities::CategoryIdentity;

/// Foreign-key-like columns, preferred over free-text labels.
pub(crate) const CATEGORY_ID_KEYS: &[&str] =
    &["category_id", "cat_id", "budget_category_id", "category_ref"];

/// Free-text label columns, in reference priority order.
pub(crate) const CATEGORY_LABEL_KEYS: &[&str] = &["category", "group", "type", "label"];

/// Category identity resolution. Idempotent: the same row always resolves to
/// the same identity. FK-derived identities use the raw id as a placeholder
/// label until hydration replaces it.
pub(crate) fn resolve_category(row: &RowModel) -> CategoryIdentity {
    if let Some(id) = row.first_id(CATEGORY_ID_KEYS) {
        return match row.first_text(CATEGORY_LABEL_KEYS) {
            Some(label) => CategoryIdentity {
                id,
                label: label.to_string(),
                placeholder_label: false,
            },
            None => CategoryIdentity {
                label: id.clone(),
                id,
                placeholder_label: true,
            },
        };
    }
    if let Some(label) = row.first_text(CATEGORY_LABEL_KEYS) {
        return CategoryIdentity {
            id: label.to_lowercase(),
            label: label.to_string(),
            placeholder_label: false,
        };
    }
    CategoryIdentity::uncategorized()
}

/// Normalizes a raw category id for the lookup query: numeric-looking values
/// become JSON numbers, everything else a trimmed string.
pub(crate) fn lookup_key(raw_id: &str) -> serde_json::Value {
    let trimmed = raw_id.trim();
    if let Ok(n) = trimmed.parse::<i64>() {
        return serde_json::Value::from(n);
    }
    serde_json::Value::from(trimmed)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn row(value: serde_json::Value) -> RowModel {
        match value {
            serde_json::Value::Object(map) => RowModel::new(map),
            _ => panic!("test rows must be objects"),
        }
    }

    #[test]
    fn prefers_foreign_key_over_label() {
        let r = row(json!({ "category_id": 7, "category": "Food" }));
        let identity = resolve_category(&r);
        assert_eq!(identity.id, "7");
        assert_eq!(identity.label, "Food");
    }

    #[test]
    fn label_fallback_lowercases_id() {
        let r = row(json!({ "category": "Food & Dining" }));
        let identity = resolve_category(&r);
        assert_eq!(identity.id, "food & dining");
        assert_eq!(identity.label, "Food & Dining");
    }

    #[test]
    fn defaults_to_uncategorized() {
        let identity = resolve_category(&row(json!({ "name": "Rent" })));
        assert_eq!(identity, CategoryIdentity::uncategorized());
    }

    #[test]
    fn resolution_is_idempotent() {
        let r = row(json!({ "category_id": "abc-1" }));
        assert_eq!(resolve_category(&r), resolve_category(&r));
    }

    #[test]
    fn fk_only_rows_need_hydration() {
        let r = row(json!({ "category_id": 7 }));
        assert!(resolve_category(&r).needs_hydration());
        let labeled = row(json!({ "category": "Food" }));
        assert!(!resolve_category(&labeled).needs_hydration());
    }

    #[test]
    fn lowercase_labels_never_need_hydration() {
        // "food" lowercases to itself, so id == label; provenance, not
        // string equality, decides hydration.
        let identity = resolve_category(&row(json!({ "category": "food" })));
        assert_eq!(identity.id, identity.label);
        assert!(!identity.needs_hydration());
    }

    #[test]
    fn lookup_key_normalizes_numeric_ids() {
        assert_eq!(lookup_key("42"), json!(42));
        assert_eq!(lookup_key(" abc "), json!("abc"));
    }
}
