//! Setup wizard step planner.
//!
//! The plan is a straight line; the only branch is at the résumé step, where
//! an upload and a skip both land on personal info.

use serde::{Deserialize, Serialize};

use crate::design::roles::is_fresher;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WizardStep {
    Role,
    Resume,
    PersonalInfo,
    Skills,
    Projects,
    Education,
    Achievements,
    Theme,
}

const FULL_PLAN: [WizardStep; 8] = [
    WizardStep::Role,
    WizardStep::Resume,
    WizardStep::PersonalInfo,
    WizardStep::Skills,
    WizardStep::Projects,
    WizardStep::Education,
    WizardStep::Achievements,
    WizardStep::Theme,
];

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StepEvent {
    #[default]
    Continue,
    ResumeUploaded,
    ResumeSkipped,
}

/// Ordered steps for `role_id`. Freshers have no achievements step.
pub fn wizard_steps(role_id: &str) -> Vec<WizardStep> {
    let fresher = is_fresher(role_id);
    FULL_PLAN
        .iter()
        .copied()
        .filter(|step| !(fresher && *step == WizardStep::Achievements))
        .collect()
}

/// The step after `current`, or `None` when `current` is last or not in the plan.
pub fn next_step(role_id: &str, current: WizardStep, event: StepEvent) -> Option<WizardStep> {
    if current == WizardStep::Resume
        && matches!(event, StepEvent::ResumeUploaded | StepEvent::ResumeSkipped)
    {
        return Some(WizardStep::PersonalInfo);
    }
    let steps = wizard_steps(role_id);
    let index = steps.iter().position(|s| *s == current)?;
    steps.get(index + 1).copied()
}

pub fn previous_step(role_id: &str, current: WizardStep) -> Option<WizardStep> {
    let steps = wizard_steps(role_id);
    let index = steps.iter().position(|s| *s == current)?;
    index.checked_sub(1).map(|i| steps[i])
}
