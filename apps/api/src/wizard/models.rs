//! Session data carried through the wizard: intake answers, the contract
//! buffer, and the report returned by the analysis service.

use serde::{Deserialize, Serialize};

/// Minimum contract length (in characters) before analysis may start.
pub const MIN_CONTRACT_CHARS: usize = 50;

/// Structured context about the user's position in the contract.
/// Every text field may be empty; `Default` is the reset state.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct IntakeAnswers {
    pub purpose: String,
    pub representation: String,
    pub jurisdiction: String,
    pub contract_type: String,
    pub stage: String,
    pub counterparty: String,
    pub risk_tolerance: String,
    pub priorities: String,
    pub time_horizon: String,
    pub due_diligence: bool,
    pub additional_info: String,
}

/// Identifier of a free-text intake field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum IntakeField {
    Purpose,
    Representation,
    Jurisdiction,
    ContractType,
    Stage,
    Counterparty,
    RiskTolerance,
    Priorities,
    TimeHorizon,
    AdditionalInfo,
}

impl IntakeAnswers {
    /// The fields that must be filled before the contract step opens.
    pub fn is_complete(&self) -> bool {
        !self.purpose.is_empty() && !self.representation.is_empty() && !self.contract_type.is_empty()
    }

    pub fn field_mut(&mut self, field: IntakeField) -> &mut String {
        match field {
            IntakeField::Purpose => &mut self.purpose,
            IntakeField::Representation => &mut self.representation,
            IntakeField::Jurisdiction => &mut self.jurisdiction,
            IntakeField::ContractType => &mut self.contract_type,
            IntakeField::Stage => &mut self.stage,
            IntakeField::Counterparty => &mut self.counterparty,
            IntakeField::RiskTolerance => &mut self.risk_tolerance,
            IntakeField::Priorities => &mut self.priorities,
            IntakeField::TimeHorizon => &mut self.time_horizon,
            IntakeField::AdditionalInfo => &mut self.additional_info,
        }
    }

    /// Applies every field present in `patch`, leaving the rest untouched.
    pub fn apply(&mut self, patch: IntakePatch) {
        let IntakePatch {
            purpose,
            representation,
            jurisdiction,
            contract_type,
            stage,
            counterparty,
            risk_tolerance,
            priorities,
            time_horizon,
            due_diligence,
            additional_info,
        } = patch;

        let text_updates = [
            (IntakeField::Purpose, purpose),
            (IntakeField::Representation, representation),
            (IntakeField::Jurisdiction, jurisdiction),
            (IntakeField::ContractType, contract_type),
            (IntakeField::Stage, stage),
            (IntakeField::Counterparty, counterparty),
            (IntakeField::RiskTolerance, risk_tolerance),
            (IntakeField::Priorities, priorities),
            (IntakeField::TimeHorizon, time_horizon),
            (IntakeField::AdditionalInfo, additional_info),
        ];
        for (field, value) in text_updates {
            if let Some(value) = value {
                *self.field_mut(field) = value;
            }
        }
        if let Some(flag) = due_diligence {
            self.due_diligence = flag;
        }
    }
}

/// Partial update of [`IntakeAnswers`], as sent by the form on each keystroke.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IntakePatch {
    pub purpose: Option<String>,
    pub representation: Option<String>,
    pub jurisdiction: Option<String>,
    pub contract_type: Option<String>,
    pub stage: Option<String>,
    pub counterparty: Option<String>,
    pub risk_tolerance: Option<String>,
    pub priorities: Option<String>,
    pub time_horizon: Option<String>,
    pub due_diligence: Option<bool>,
    pub additional_info: Option<String>,
}

/// The contract under analysis. Replaced wholesale on paste or upload.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ContractDocument(String);

impl ContractDocument {
    pub fn new(text: impl Into<String>) -> Self {
        Self(text.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Length in characters, not bytes.
    pub fn char_len(&self) -> usize {
        self.0.chars().count()
    }

    pub fn is_ready(&self) -> bool {
        self.char_len() >= MIN_CONTRACT_CHARS
    }
}

/// Markdown-like text returned by the analysis service. Immutable once received.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct AnalysisReport(String);

impl AnalysisReport {
    pub fn new(text: impl Into<String>) -> Self {
        Self(text.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}
