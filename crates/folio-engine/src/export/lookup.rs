use std::collections::BTreeMap;

/// Symbolic font keys stored on text runs, resolved to concrete values.
///
/// `font_sizes` is the size map (key to points), `font_families` the family
/// map (key to font name). Built once and read-only afterwards.
#[derive(Debug, Clone, PartialEq)]
pub struct LookupTables {
    pub font_sizes: BTreeMap<String, f32>,
    pub font_families: BTreeMap<String, String>,
}

/// Family key used for runs carrying the `code` mark
pub const MONOSPACE: &str = "monospace";

impl Default for LookupTables {
    fn default() -> Self {
        let font_sizes = [("small", 9.0), ("normal", 12.0), ("medium", 21.0), ("huge", 30.0)]
            .into_iter()
            .map(|(key, size)| (key.to_string(), size))
            .collect();
        let font_families = [("sans", "Helvetica"), ("serif", "Georgia"), (MONOSPACE, "Monaco")]
            .into_iter()
            .map(|(key, family)| (key.to_string(), family.to_string()))
            .collect();
        Self {
            font_sizes,
            font_families,
        }
    }
}

impl LookupTables {
    /// Tables with no entries; every key is unresolved
    pub fn empty() -> Self {
        Self {
            font_sizes: BTreeMap::new(),
            font_families: BTreeMap::new(),
        }
    }

    pub fn font_size(&self, key: &str) -> Option<f32> {
        self.font_sizes.get(key).copied()
    }

    pub fn font_family(&self, key: &str) -> Option<&str> {
        self.font_families.get(key).map(String::as_str)
    }

    /// Layer `overrides` on top, replacing entries with the same key
    pub fn extend(&mut self, overrides: LookupTables) {
        self.font_sizes.extend(overrides.font_sizes);
        self.font_families.extend(overrides.font_families);
    }
}
