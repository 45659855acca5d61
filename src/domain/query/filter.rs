use serde::{Deserialize, Serialize};

/// User-editable listing filters. An empty string means "unconstrained".
/// Replaced wholesale on every edit.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterState {
    /// Name substring
    pub name: String,
    pub status: String,
    pub species: String,
    pub gender: String,
}

impl FilterState {
    pub fn new(
        name: impl Into<String>,
        status: impl Into<String>,
        species: impl Into<String>,
        gender: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            status: status.into(),
            species: species.into(),
            gender: gender.into(),
        }
    }

    /// Non-empty fields as `(parameter, value)` pairs, in request order
    pub fn active_fields(&self) -> Vec<(&'static str, &str)> {
        [
            ("name", self.name.as_str()),
            ("status", self.status.as_str()),
            ("species", self.species.as_str()),
            ("gender", self.gender.as_str()),
        ]
        .into_iter()
        .filter(|(_, value)| !value.is_empty())
        .collect()
    }

    pub fn has_active_filters(&self) -> bool {
        !self.active_fields().is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_has_no_active_fields() {
        let filters = FilterState::default();
        assert!(filters.active_fields().is_empty());
        assert!(!filters.has_active_filters());
    }

    #[test]
    fn test_active_fields_keep_request_order() {
        let filters = FilterState::new("rick", "", "human", "male");
        assert_eq!(
            filters.active_fields(),
            vec![("name", "rick"), ("species", "human"), ("gender", "male")]
        );
    }
}
