//! Ordered approval/processing stages of a staged report.

use crate::error::WizardError;
use crate::requests::StagePayload;

/// Number of stages a staged report starts with.
pub const DEFAULT_STAGE_COUNT: usize = 2;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StageDraft {
    pub name: String,
    pub description: String,
    /// Role ids in the order they were picked, without duplicates.
    pub assigned_role_ids: Vec<String>,
}

impl StageDraft {
    /// A stage is complete when it is named, described and has a role.
    pub fn is_complete(&self) -> bool {
        !self.name.trim().is_empty()
            && !self.description.trim().is_empty()
            && !self.assigned_role_ids.is_empty()
    }

    pub fn to_payload(&self) -> StagePayload {
        StagePayload {
            name: self.name.trim().to_string(),
            description: self.description.trim().to_string(),
            roles: self.assigned_role_ids.clone(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StageField {
    Name,
    Description,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StageList {
    stages: Vec<StageDraft>,
    /// Leading stages that `remove_stage` refuses to delete.
    protected: usize,
}

impl Default for StageList {
    fn default() -> Self {
        Self::initialize_default()
    }
}

impl StageList {
    /// Two empty stages, both protected from removal.
    pub fn initialize_default() -> Self {
        Self {
            stages: vec![StageDraft::default(); DEFAULT_STAGE_COUNT],
            protected: DEFAULT_STAGE_COUNT,
        }
    }

    /// Two empty stages, any of which may be removed.
    pub fn unprotected() -> Self {
        Self {
            protected: 0,
            ..Self::initialize_default()
        }
    }

    pub fn stages(&self) -> &[StageDraft] {
        &self.stages
    }

    pub fn len(&self) -> usize {
        self.stages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stages.is_empty()
    }

    fn stage_mut(&mut self, index: usize) -> Result<&mut StageDraft, WizardError> {
        let len = self.stages.len();
        self.stages
            .get_mut(index)
            .ok_or(WizardError::StageOutOfBounds { index, len })
    }

    pub fn update_field(
        &mut self,
        index: usize,
        field: StageField,
        value: impl Into<String>,
    ) -> Result<(), WizardError> {
        let stage = self.stage_mut(index)?;
        match field {
            StageField::Name => stage.name = value.into(),
            StageField::Description => stage.description = value.into(),
        }
        Ok(())
    }

    /// Replaces the stage's roles wholesale. Repeated ids keep their first position.
    pub fn update_roles(&mut self, index: usize, role_ids: Vec<String>) -> Result<(), WizardError> {
        let stage = self.stage_mut(index)?;
        let mut unique: Vec<String> = Vec::with_capacity(role_ids.len());
        for id in role_ids {
            if !unique.contains(&id) {
                unique.push(id);
            }
        }
        stage.assigned_role_ids = unique;
        Ok(())
    }

    pub fn add_role(&mut self, index: usize, role_id: &str) -> Result<(), WizardError> {
        let mut roles = self.stage_mut(index)?.assigned_role_ids.clone();
        roles.push(role_id.to_string());
        self.update_roles(index, roles)
    }

    pub fn remove_role(&mut self, index: usize, role_id: &str) -> Result<(), WizardError> {
        let mut roles = self.stage_mut(index)?.assigned_role_ids.clone();
        roles.retain(|id| id != role_id);
        self.update_roles(index, roles)
    }

    /// Appends an empty stage and returns its index.
    pub fn add_stage(&mut self) -> usize {
        self.stages.push(StageDraft::default());
        self.stages.len() - 1
    }

    pub fn is_removable(&self, index: usize) -> bool {
        index < self.stages.len() && index >= self.protected
    }

    pub fn remove_stage(&mut self, index: usize) -> Result<StageDraft, WizardError> {
        if index >= self.stages.len() {
            return Err(WizardError::StageOutOfBounds {
                index,
                len: self.stages.len(),
            });
        }
        if index < self.protected {
            return Err(WizardError::ProtectedStage(index));
        }
        Ok(self.stages.remove(index))
    }

    pub fn is_complete(&self) -> bool {
        self.stages.iter().all(StageDraft::is_complete)
    }

    /// Indexes of stages still missing a name, description or role.
    pub fn incomplete_stages(&self) -> Vec<usize> {
        self.stages
            .iter()
            .enumerate()
            .filter(|(_, s)| !s.is_complete())
            .map(|(i, _)| i)
            .collect()
    }

    pub fn to_payload(&self) -> Vec<StagePayload> {
        self.stages.iter().map(StageDraft::to_payload).collect()
    }
}
