/// Stable category identity for one fetch cycle. `id` is either a stringified
/// foreign-key value or a lowercased free-text label; `label` is the
/// human-readable name, possibly hydrated from a lookup table after the fact.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryIdentity {
    pub id: String,
    pub label: String,
    /// True when `label` is a placeholder copied from a foreign-key id and a
    /// lookup-table name should replace it. Carried explicitly so a label
    /// that happens to equal its lowercased id (e.g. `"food"`) is never
    /// mistaken for an unhydrated foreign key.
    pub placeholder_label: bool,
}

impl CategoryIdentity {
    pub const UNCATEGORIZED_ID: &'static str = "uncategorized";

    pub fn uncategorized() -> Self {
        Self {
            id: Self::UNCATEGORIZED_ID.to_string(),
            label: "Uncategorized".to_string(),
            placeholder_label: false,
        }
    }

    pub fn needs_hydration(&self) -> bool {
        self.placeholder_label
    }
}
