use serde::{Deserialize, Serialize};

/// A selectable database, as shown in the "Select Database" dropdown.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DatabaseDescriptor {
    pub label: String,
    pub value: String,
}

impl DatabaseDescriptor {
    pub fn from_name(name: impl Into<String>) -> Self {
        let name = name.into();
        Self {
            label: name.clone(),
            value: name,
        }
    }
}

/// Body returned by `GET /dbnames`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct DatabaseNamesResponse {
    #[serde(default)]
    pub db_name: Vec<String>,
}

impl DatabaseNamesResponse {
    pub fn into_descriptors(self) -> Vec<DatabaseDescriptor> {
        self.db_name
            .into_iter()
            .map(DatabaseDescriptor::from_name)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn names_become_label_value_pairs() {
        let response: DatabaseNamesResponse =
            serde_json::from_str(r#"{"db_name":["sales","hr"]}"#).unwrap();
        let descriptors = response.into_descriptors();
        assert_eq!(descriptors.len(), 2);
        assert_eq!(descriptors[1].label, "hr");
        assert_eq!(descriptors[1].value, "hr");
    }
}
