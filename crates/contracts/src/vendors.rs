use serde::{Deserialize, Serialize};

/// Vendor keys known to the ingest pipeline. The set is closed: every raw
/// dataset comes from one of these card programs / retailers.
pub const KNOWN_VENDORS: &[&str] = &["amazon", "cruzbuy", "pcard"];

/// Display label for a vendor key: first character uppercased, the rest
/// lowercased (e.g. "amazon" -> "Amazon", "pcard" -> "Pcard").
pub fn display_label(key: &str) -> String {
    let mut chars = key.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars.flat_map(|c| c.to_lowercase())).collect(),
        None => String::new(),
    }
}

/// Filter selecting which vendor datasets contribute to an aggregation.
///
/// Serialized as a plain string in query parameters: `"all"` is the
/// include-everything sentinel, anything else is a vendor key. Unknown keys
/// are valid and simply select nothing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Scope {
    All,
    Vendor(String),
}

impl Scope {
    pub fn includes(&self, vendor_key: &str) -> bool {
        match self {
            Scope::All => true,
            Scope::Vendor(key) => key == vendor_key,
        }
    }
}

impl From<String> for Scope {
    fn from(s: String) -> Self {
        if s.eq_ignore_ascii_case("all") {
            Scope::All
        } else {
            Scope::Vendor(s)
        }
    }
}

impl From<Scope> for String {
    fn from(scope: Scope) -> Self {
        match scope {
            Scope::All => "all".to_string(),
            Scope::Vendor(key) => key,
        }
    }
}

impl Default for Scope {
    fn default() -> Self {
        Scope::All
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_label() {
        assert_eq!(display_label("amazon"), "Amazon");
        assert_eq!(display_label("pcard"), "Pcard");
        assert_eq!(display_label("CRUZBUY"), "Cruzbuy");
        assert_eq!(display_label(""), "");
    }

    #[test]
    fn test_scope_from_string() {
        assert_eq!(Scope::from("all".to_string()), Scope::All);
        assert_eq!(Scope::from("All".to_string()), Scope::All);
        assert_eq!(
            Scope::from("amazon".to_string()),
            Scope::Vendor("amazon".to_string())
        );
    }

    #[test]
    fn test_scope_includes() {
        assert!(Scope::All.includes("pcard"));
        assert!(Scope::Vendor("pcard".into()).includes("pcard"));
        assert!(!Scope::Vendor("pcard".into()).includes("amazon"));
    }
}
