use serde::Deserialize;

/// Minimal view of a territory document, used to key it before the full parse.
#[derive(Clone, Deserialize)]
pub struct NamedJsonObject {
    country: String
}

impl NamedJsonObject {
    pub fn country(&self) -> &str {
        &self.country
    }

    /// Registry key: country codes are matched case-insensitively.
    pub fn key(&self) -> String {
        self.country.to_ascii_lowercase()
    }
}
