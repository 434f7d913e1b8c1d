//! Pure reducer over the onboarding wizard state
//!
//! Each step is a variant carrying its own data and completion flag.
//! Completion is recomputed whenever a step's data is replaced, so a step
//! form cannot leave a stale flag behind.

use std::collections::BTreeMap;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::steps::{BasicInfo, ConsentInfo, InsuranceInfo, MedicalHistory, StepForm, StepId};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StepEntry<T> {
    pub data: T,
    pub complete: bool,
}

impl<T: StepForm> StepEntry<T> {
    fn validated(data: T, today: NaiveDate) -> Self {
        let complete = data.is_valid(today);
        Self { data, complete }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "step", rename_all = "camelCase")]
pub enum StepState {
    BasicInfo(StepEntry<BasicInfo>),
    MedicalHistory(StepEntry<MedicalHistory>),
    Insurance(StepEntry<InsuranceInfo>),
    Consent(StepEntry<ConsentInfo>),
}

impl StepState {
    pub fn id(&self) -> StepId {
        match self {
            StepState::BasicInfo(_) => StepId::BasicInfo,
            StepState::MedicalHistory(_) => StepId::MedicalHistory,
            StepState::Insurance(_) => StepId::Insurance,
            StepState::Consent(_) => StepId::Consent,
        }
    }

    pub fn is_complete(&self) -> bool {
        match self {
            StepState::BasicInfo(entry) => entry.complete,
            StepState::MedicalHistory(entry) => entry.complete,
            StepState::Insurance(entry) => entry.complete,
            StepState::Consent(entry) => entry.complete,
        }
    }

    fn set_complete(&mut self, complete: bool) {
        match self {
            StepState::BasicInfo(entry) => entry.complete = complete,
            StepState::MedicalHistory(entry) => entry.complete = complete,
            StepState::Insurance(entry) => entry.complete = complete,
            StepState::Consent(entry) => entry.complete = complete,
        }
    }
}

/// Everything the wizard holds between renders
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WizardState {
    pub current: StepId,
    /// Reference date for date-of-birth checks, fixed at mount
    pub today: NaiveDate,
    steps: [StepState; 4],
}

impl WizardState {
    /// Fresh wizard on the first step; medical history starts complete
    pub fn new(today: NaiveDate) -> Self {
        Self {
            current: StepId::BasicInfo,
            today,
            steps: [
                StepState::BasicInfo(StepEntry::default()),
                StepState::MedicalHistory(StepEntry {
                    data: MedicalHistory::default(),
                    complete: true,
                }),
                StepState::Insurance(StepEntry::default()),
                StepState::Consent(StepEntry::default()),
            ],
        }
    }

    pub fn steps(&self) -> &[StepState] {
        &self.steps
    }

    pub fn is_complete(&self, step: StepId) -> bool {
        self.steps.iter().any(|s| s.id() == step && s.is_complete())
    }

    pub fn all_complete(&self) -> bool {
        self.steps.iter().all(StepState::is_complete)
    }

    pub fn incomplete_steps(&self) -> Vec<StepId> {
        self.steps
            .iter()
            .filter(|s| !s.is_complete())
            .map(StepState::id)
            .collect()
    }

    pub fn completion_map(&self) -> BTreeMap<StepId, bool> {
        self.steps.iter().map(|s| (s.id(), s.is_complete())).collect()
    }

    pub fn basic_info(&self) -> Option<&BasicInfo> {
        self.steps.iter().find_map(|s| match s {
            StepState::BasicInfo(entry) => Some(&entry.data),
            _ => None,
        })
    }

    pub fn medical_history(&self) -> Option<&MedicalHistory> {
        self.steps.iter().find_map(|s| match s {
            StepState::MedicalHistory(entry) => Some(&entry.data),
            _ => None,
        })
    }

    pub fn insurance(&self) -> Option<&InsuranceInfo> {
        self.steps.iter().find_map(|s| match s {
            StepState::Insurance(entry) => Some(&entry.data),
            _ => None,
        })
    }

    pub fn consent(&self) -> Option<&ConsentInfo> {
        self.steps.iter().find_map(|s| match s {
            StepState::Consent(entry) => Some(&entry.data),
            _ => None,
        })
    }

    fn put(&mut self, step: StepState) {
        let id = step.id();
        if let Some(slot) = self.steps.iter_mut().find(|s| s.id() == id) {
            *slot = step;
        }
    }
}

impl Default for WizardState {
    fn default() -> Self {
        Self::new(chrono::Local::now().date_naive())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WizardAction {
    UpdateBasicInfo(BasicInfo),
    UpdateMedicalHistory(MedicalHistory),
    UpdateInsurance(InsuranceInfo),
    UpdateConsent(ConsentInfo),
    /// Explicit override of a step's completion flag
    SetCompletion(StepId, bool),
    /// Forward one step; ignored unless the current step is complete
    Next,
    /// Back one step; never gated
    Previous,
}

pub fn reduce(mut state: WizardState, action: WizardAction) -> WizardState {
    let today = state.today;
    match action {
        WizardAction::UpdateBasicInfo(data) => {
            state.put(StepState::BasicInfo(StepEntry::validated(data, today)));
        }
        WizardAction::UpdateMedicalHistory(data) => {
            state.put(StepState::MedicalHistory(StepEntry::validated(data, today)));
        }
        WizardAction::UpdateInsurance(data) => {
            state.put(StepState::Insurance(StepEntry::validated(data, today)));
        }
        WizardAction::UpdateConsent(data) => {
            state.put(StepState::Consent(StepEntry::validated(data, today)));
        }
        WizardAction::SetCompletion(step, complete) => {
            if let Some(slot) = state.steps.iter_mut().find(|s| s.id() == step) {
                slot.set_complete(complete);
            }
        }
        WizardAction::Next => {
            if state.is_complete(state.current) {
                if let Some(next) = state.current.next() {
                    state.current = next;
                }
            }
        }
        WizardAction::Previous => {
            if let Some(previous) = state.current.previous() {
                state.current = previous;
            }
        }
    }
    state
}
