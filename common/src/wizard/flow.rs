use std::fmt;

/// Which wizard the operator runs. Each flow owns its ordered list of steps.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Flow {
    #[default]
    Unselected,
    /// Database, query and access only.
    Interactive,
    /// Interactive plus an approval stage definition step.
    Staged,
}

const INTERACTIVE_STEPS: [Step; 3] = [Step::SelectDatabase, Step::EnterQuery, Step::ConfigureAccess];

const STAGED_STEPS: [Step; 4] = [
    Step::SelectDatabase,
    Step::EnterQuery,
    Step::ConfigureAccess,
    Step::CreateStages,
];

impl Flow {
    pub const SELECTABLE: [Flow; 2] = [Flow::Interactive, Flow::Staged];

    pub fn steps(self) -> &'static [Step] {
        match self {
            Flow::Unselected => &[],
            Flow::Interactive => &INTERACTIVE_STEPS,
            Flow::Staged => &STAGED_STEPS,
        }
    }

    pub fn step_count(self) -> usize {
        self.steps().len()
    }

    pub fn label(self) -> &'static str {
        match self {
            Flow::Unselected => "",
            Flow::Interactive => "Interactive report",
            Flow::Staged => "Staged report",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            Flow::Unselected => "",
            Flow::Interactive => "Pick a database, write a query and decide who can edit each column.",
            Flow::Staged => "Everything in an interactive report, plus approval stages with assigned roles.",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Step {
    SelectDatabase,
    EnterQuery,
    ConfigureAccess,
    CreateStages,
}

impl Step {
    pub fn label(self) -> &'static str {
        match self {
            Step::SelectDatabase => "Select Database",
            Step::EnterQuery => "Enter Query",
            Step::ConfigureAccess => "Configure Access",
            Step::CreateStages => "Create Stages",
        }
    }
}

impl fmt::Display for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn staged_flow_inserts_stages_after_access() {
        assert_eq!(Flow::Interactive.step_count(), 3);
        assert_eq!(Flow::Staged.step_count(), 4);
        assert_eq!(&Flow::Staged.steps()[..3], Flow::Interactive.steps());
        assert_eq!(Flow::Staged.steps()[3], Step::CreateStages);
        assert!(Flow::Unselected.steps().is_empty());
    }
}
