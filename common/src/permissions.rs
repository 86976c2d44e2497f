//! Column-by-role write permission grid edited on the "Configure Access" step.
//!
//! The grid is derived from a query validation response through
//! [`rows_from_validation`], then edited cell by cell. It also carries the
//! role catalog it was built against so that every row always has exactly
//! one entry per known role, even when the roles arrive after the rows.

use std::collections::BTreeMap;

use log::debug;

use crate::error::WizardError;
use crate::model::query::ValidateQueryResponse;
use crate::model::role::RoleDescriptor;
use crate::requests::ColumnPayload;

/// One column of the future report and who may write it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnPermissionRow {
    pub column_name: String,
    pub data_type: String,
    /// `true` for columns added by hand rather than discovered by validation.
    pub is_user_added: bool,
    /// Role id to write permission.
    pub permission: BTreeMap<String, bool>,
}

impl ColumnPermissionRow {
    fn new(
        column_name: impl Into<String>,
        data_type: impl Into<String>,
        is_user_added: bool,
        roles: &[RoleDescriptor],
    ) -> Self {
        Self {
            column_name: column_name.into(),
            data_type: data_type.into(),
            is_user_added,
            permission: roles.iter().map(|r| (r.id.clone(), false)).collect(),
        }
    }

    pub fn is_writable_by(&self, role_id: &str) -> bool {
        self.permission.get(role_id).copied().unwrap_or(false)
    }
}

/// Maps a validation response to fresh rows: one per column, every role denied.
pub fn rows_from_validation(
    response: &ValidateQueryResponse,
    roles: &[RoleDescriptor],
) -> Vec<ColumnPermissionRow> {
    response
        .columns
        .iter()
        .map(|c| ColumnPermissionRow::new(&c.col_name, &c.data_type, false, roles))
        .collect()
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PermissionMatrix {
    roles: Vec<RoleDescriptor>,
    rows: Vec<ColumnPermissionRow>,
}

impl PermissionMatrix {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_roles(roles: Vec<RoleDescriptor>) -> Self {
        Self {
            roles,
            rows: Vec::new(),
        }
    }

    pub fn roles(&self) -> &[RoleDescriptor] {
        &self.roles
    }

    pub fn rows(&self) -> &[ColumnPermissionRow] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Replaces the role catalog and brings every row in line with it.
    ///
    /// Roles new to the catalog are added as denied; roles no longer in it
    /// are dropped. Existing grants for surviving roles are kept.
    pub fn set_roles(&mut self, roles: Vec<RoleDescriptor>) {
        for row in &mut self.rows {
            row.permission
                .retain(|role_id, _| roles.iter().any(|r| &r.id == role_id));
            for role in &roles {
                row.permission.entry(role.id.clone()).or_insert(false);
            }
        }
        debug!(
            "permission matrix now covers {} roles across {} rows",
            roles.len(),
            self.rows.len()
        );
        self.roles = roles;
    }

    /// Replaces all rows with the columns of a validation response.
    pub fn initialize(&mut self, response: &ValidateQueryResponse) {
        self.rows = rows_from_validation(response, &self.roles);
    }

    /// Flips one cell and returns its new value.
    pub fn toggle(&mut self, row_index: usize, role_id: &str) -> Result<bool, WizardError> {
        let len = self.rows.len();
        let row = self
            .rows
            .get_mut(row_index)
            .ok_or(WizardError::RowOutOfBounds {
                index: row_index,
                len,
            })?;
        let cell = row
            .permission
            .get_mut(role_id)
            .ok_or_else(|| WizardError::UnknownRole(role_id.to_string()))?;
        *cell = !*cell;
        Ok(*cell)
    }

    /// Appends a hand-made column with every role denied.
    ///
    /// Names are trimmed and compared case-sensitively against existing rows.
    pub fn add_column(&mut self, name: &str, data_type: &str) -> Result<(), WizardError> {
        let name = name.trim();
        let data_type = data_type.trim();
        if name.is_empty() {
            return Err(WizardError::EmptyColumnName);
        }
        if data_type.is_empty() {
            return Err(WizardError::EmptyDataType);
        }
        if self.rows.iter().any(|r| r.column_name == name) {
            return Err(WizardError::DuplicateColumn(name.to_string()));
        }

        self.rows
            .push(ColumnPermissionRow::new(name, data_type, true, &self.roles));
        Ok(())
    }

    /// Removes a row, whether it came from validation or was added by hand.
    pub fn delete_column(&mut self, row_index: usize) -> Result<ColumnPermissionRow, WizardError> {
        if row_index >= self.rows.len() {
            return Err(WizardError::RowOutOfBounds {
                index: row_index,
                len: self.rows.len(),
            });
        }
        Ok(self.rows.remove(row_index))
    }

    /// Drops all rows. The role catalog is reference data and stays.
    pub fn clear(&mut self) {
        self.rows.clear();
    }

    /// Column entries of the create-report payload, `writableBy` in catalog order.
    pub fn to_payload_columns(&self) -> Vec<ColumnPayload> {
        self.rows
            .iter()
            .map(|row| ColumnPayload {
                name: row.column_name.clone(),
                data_type: row.data_type.clone(),
                writable_by: self
                    .roles
                    .iter()
                    .filter(|role| row.is_writable_by(&role.id))
                    .map(|role| role.id.clone())
                    .collect(),
            })
            .collect()
    }
}
