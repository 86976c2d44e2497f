use serde::{Deserialize, Serialize};

/// A permission grantee. Referenced everywhere by `id`; `name` is display only.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RoleDescriptor {
    pub id: String,
    pub name: String,
}

impl RoleDescriptor {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
        }
    }
}

/// Body returned by `GET /roles`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RolesResponse {
    #[serde(default)]
    pub roles: Vec<RoleDescriptor>,
}
