//! Wizard steps and the progress bar model

use serde::{Deserialize, Serialize};
use std::fmt;

/// The three data-entry steps, in order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WizardStep {
    /// 사고 - what happened
    Incident,
    /// 보험사 - which insurer, how much, which policy
    Insurance,
    /// 상황 - who to call back
    Contact,
}

impl WizardStep {
    pub const ALL: [WizardStep; 3] = [WizardStep::Incident, WizardStep::Insurance, WizardStep::Contact];

    pub fn index(self) -> usize {
        match self {
            WizardStep::Incident => 0,
            WizardStep::Insurance => 1,
            WizardStep::Contact => 2,
        }
    }

    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    /// Label shown in the step bar
    pub fn label(self) -> &'static str {
        match self {
            WizardStep::Incident => "사고",
            WizardStep::Insurance => "보험사",
            WizardStep::Contact => "상황",
        }
    }

    pub fn next(self) -> Option<Self> {
        Self::from_index(self.index() + 1)
    }

    pub fn previous(self) -> Option<Self> {
        self.index().checked_sub(1).and_then(Self::from_index)
    }

    pub fn is_first(self) -> bool {
        self.previous().is_none()
    }

    pub fn is_last(self) -> bool {
        self.next().is_none()
    }
}

impl fmt::Display for WizardStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.index(), self.label())
    }
}

/// How a step is drawn in the progress bar
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StepStatus {
    Completed,
    Current,
    Upcoming,
}

/// One entry of the progress bar
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct StepProgress {
    pub step: WizardStep,
    pub label: &'static str,
    pub status: StepStatus,
}

/// Builds the progress bar for the given active step
pub fn progress(current: WizardStep) -> Vec<StepProgress> {
    WizardStep::ALL
        .iter()
        .map(|&step| StepProgress {
            step,
            label: step.label(),
            status: match step.cmp(&current) {
                std::cmp::Ordering::Less => StepStatus::Completed,
                std::cmp::Ordering::Equal => StepStatus::Current,
                std::cmp::Ordering::Greater => StepStatus::Upcoming,
            },
        })
        .collect()
}
