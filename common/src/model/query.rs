use serde::{Deserialize, Serialize};

/// A column reported back by the query validation endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidatedColumn {
    pub col_name: String,
    pub data_type: String,
}

/// Successful body of `POST /validate-sql-query`.
///
/// Each column becomes one row of the permission matrix, see
/// [`crate::permissions::rows_from_validation`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidateQueryResponse {
    #[serde(default)]
    pub columns: Vec<ValidatedColumn>,
}

impl ValidateQueryResponse {
    pub fn new<N, T>(columns: impl IntoIterator<Item = (N, T)>) -> Self
    where
        N: Into<String>,
        T: Into<String>,
    {
        Self {
            columns: columns
                .into_iter()
                .map(|(name, data_type)| ValidatedColumn {
                    col_name: name.into(),
                    data_type: data_type.into(),
                })
                .collect(),
        }
    }
}
