//! Wizard state machine.
//!
//! WELCOME → INTAKE → CONTRACT_INPUT → ANALYZING → RESULTS, plus the single
//! backward step CONTRACT_INPUT → INTAKE and a confirmed reset to WELCOME.
//!
//! Stage-specific data lives inside [`Stage`]: an error can only exist on the
//! contract step and a report only on the results step. Intake answers and the
//! contract buffer outlive stage changes so a failed analysis can be retried
//! without re-entering anything.

use chrono::{DateTime, Utc};
use serde::Serialize;
use thiserror::Error;
use tracing::{debug, info};
use uuid::Uuid;

use crate::analysis::assembler::{assemble_prompt, PromptPayload};
use crate::analysis::AnalysisFailed;
use crate::extract::ExtractError;
use crate::locale::Language;
use crate::wizard::models::{
    AnalysisReport, ContractDocument, IntakeAnswers, IntakePatch, MIN_CONTRACT_CHARS,
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Stage {
    Welcome,
    Intake,
    ContractInput { error: Option<String> },
    Analyzing,
    Results { report: AnalysisReport },
}

/// Payload-free discriminant of [`Stage`], used on the wire and in errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum StageKind {
    Welcome,
    Intake,
    ContractInput,
    Analyzing,
    Results,
}

impl Stage {
    pub fn kind(&self) -> StageKind {
        match self {
            Stage::Welcome => StageKind::Welcome,
            Stage::Intake => StageKind::Intake,
            Stage::ContractInput { .. } => StageKind::ContractInput,
            Stage::Analyzing => StageKind::Analyzing,
            Stage::Results { .. } => StageKind::Results,
        }
    }
}

/// A refused wizard operation. The session is left untouched.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WizardError {
    #[error("cannot {action} during stage {stage:?}")]
    WrongStage {
        action: &'static str,
        stage: StageKind,
    },

    #[error("purpose, representation and contract type are required")]
    IntakeIncomplete,

    #[error("contract text must be at least {MIN_CONTRACT_CHARS} characters")]
    ContractTooShort,

    #[error("a file extraction is still in progress")]
    ExtractionInFlight,
}

/// Result of a restart request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RestartOutcome {
    /// Nothing was cleared; the caller must ask again with confirmation.
    NeedsConfirmation { prompt: &'static str },
    Restarted,
}

/// All mutable state of one wizard run. Lives in memory only.
#[derive(Debug)]
pub struct Session {
    id: Uuid,
    language: Language,
    intake: IntakeAnswers,
    document: ContractDocument,
    stage: Stage,
    extracting: bool,
    created_at: DateTime<Utc>,
}

impl Session {
    pub fn new(language: Language) -> Self {
        Self {
            id: Uuid::new_v4(),
            language,
            intake: IntakeAnswers::default(),
            document: ContractDocument::default(),
            stage: Stage::Welcome,
            extracting: false,
            created_at: Utc::now(),
        }
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn language(&self) -> Language {
        self.language
    }

    pub fn intake(&self) -> &IntakeAnswers {
        &self.intake
    }

    pub fn document(&self) -> &ContractDocument {
        &self.document
    }

    pub fn stage(&self) -> &Stage {
        &self.stage
    }

    pub fn is_extracting(&self) -> bool {
        self.extracting
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub fn report(&self) -> Option<&AnalysisReport> {
        match &self.stage {
            Stage::Results { report } => Some(report),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&str> {
        match &self.stage {
            Stage::ContractInput { error } => error.as_deref(),
            _ => None,
        }
    }

    /// The language toggle works in every stage.
    pub fn set_language(&mut self, language: Language) {
        self.language = language;
    }

    // ── Guards ────────────────────────────────────────────────────────────

    pub fn can_continue(&self) -> bool {
        self.stage == Stage::Intake && self.intake.is_complete()
    }

    pub fn can_analyze(&self) -> bool {
        matches!(self.stage, Stage::ContractInput { .. })
            && !self.extracting
            && self.document.is_ready()
    }

    pub fn can_restart(&self) -> bool {
        self.stage != Stage::Analyzing && !self.extracting
    }

    /// True while an analysis or a file extraction is pending.
    pub fn is_busy(&self) -> bool {
        self.stage == Stage::Analyzing || self.extracting
    }

    fn require(&self, expected: StageKind, action: &'static str) -> Result<(), WizardError> {
        let stage = self.stage.kind();
        if stage == expected {
            Ok(())
        } else {
            Err(WizardError::WrongStage { action, stage })
        }
    }

    fn require_idle(&self) -> Result<(), WizardError> {
        if self.extracting {
            Err(WizardError::ExtractionInFlight)
        } else {
            Ok(())
        }
    }

    // ── Transitions ───────────────────────────────────────────────────────

    pub fn start(&mut self) -> Result<(), WizardError> {
        self.require(StageKind::Welcome, "start")?;
        self.stage = Stage::Intake;
        Ok(())
    }

    pub fn update_intake(&mut self, patch: IntakePatch) -> Result<(), WizardError> {
        self.require(StageKind::Intake, "edit intake answers")?;
        self.intake.apply(patch);
        Ok(())
    }

    pub fn proceed_to_contract(&mut self) -> Result<(), WizardError> {
        self.require(StageKind::Intake, "continue to the contract")?;
        if !self.intake.is_complete() {
            return Err(WizardError::IntakeIncomplete);
        }
        self.stage = Stage::ContractInput { error: None };
        Ok(())
    }

    pub fn back_to_intake(&mut self) -> Result<(), WizardError> {
        self.require(StageKind::ContractInput, "go back to intake")?;
        self.require_idle()?;
        self.stage = Stage::Intake;
        Ok(())
    }

    pub fn set_contract_text(&mut self, text: String) -> Result<(), WizardError> {
        self.require(StageKind::ContractInput, "edit the contract")?;
        self.require_idle()?;
        self.document = ContractDocument::new(text);
        Ok(())
    }

    /// Checks that a file may be uploaded now, without changing anything.
    pub fn check_upload(&self) -> Result<(), WizardError> {
        self.require(StageKind::ContractInput, "upload a file")?;
        self.require_idle()
    }

    /// Marks a file extraction as in flight. Input is locked until
    /// [`Session::finish_extraction`] runs.
    pub fn begin_extraction(&mut self) -> Result<(), WizardError> {
        self.check_upload()?;
        self.extracting = true;
        Ok(())
    }

    /// Applies the extractor's outcome. Whitespace-only text counts as a
    /// failure and leaves the document unchanged.
    pub fn finish_extraction(
        &mut self,
        outcome: Result<String, ExtractError>,
    ) -> Result<(), ExtractError> {
        self.extracting = false;
        let text = outcome?;
        if text.trim().is_empty() {
            return Err(ExtractError::NoText);
        }
        debug!(session = %self.id, chars = text.chars().count(), "contract replaced from file");
        self.document = ContractDocument::new(text);
        Ok(())
    }

    /// Enters ANALYZING and returns the prompt to send. The caller must
    /// later hand the outcome to [`Session::complete_analysis`].
    pub fn begin_analysis(&mut self) -> Result<PromptPayload, WizardError> {
        self.require(StageKind::ContractInput, "start the analysis")?;
        self.require_idle()?;
        if !self.document.is_ready() {
            return Err(WizardError::ContractTooShort);
        }
        let payload = assemble_prompt(&self.intake, &self.document, self.language);
        self.stage = Stage::Analyzing;
        info!(session = %self.id, language = %self.language, "analysis started");
        Ok(payload)
    }

    pub fn complete_analysis(
        &mut self,
        outcome: Result<AnalysisReport, AnalysisFailed>,
    ) -> Result<(), WizardError> {
        self.require(StageKind::Analyzing, "complete the analysis")?;
        self.stage = match outcome {
            Ok(report) => Stage::Results { report },
            Err(AnalysisFailed) => Stage::ContractInput {
                error: Some(self.language.messages().analysis_failed.to_string()),
            },
        };
        info!(session = %self.id, stage = ?self.stage.kind(), "analysis finished");
        Ok(())
    }

    /// Clears everything and returns to WELCOME, but only once confirmed.
    pub fn restart(&mut self, confirmed: bool) -> Result<RestartOutcome, WizardError> {
        if self.stage == Stage::Analyzing {
            return Err(WizardError::WrongStage {
                action: "restart",
                stage: StageKind::Analyzing,
            });
        }
        self.require_idle()?;
        if !confirmed {
            return Ok(RestartOutcome::NeedsConfirmation {
                prompt: self.language.messages().restart_confirm,
            });
        }
        self.intake = IntakeAnswers::default();
        self.document = ContractDocument::default();
        self.stage = Stage::Welcome;
        info!(session = %self.id, "session restarted");
        Ok(RestartOutcome::Restarted)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn complete_intake() -> IntakePatch {
        IntakePatch {
            purpose: Some("decide whether to sign".into()),
            representation: Some("tenant".into()),
            contract_type: Some("lease".into()),
            ..Default::default()
        }
    }

    fn at_contract_input() -> Session {
        let mut session = Session::new(Language::En);
        session.start().unwrap();
        session.update_intake(complete_intake()).unwrap();
        session.proceed_to_contract().unwrap();
        session
    }

    fn ready_session() -> Session {
        let mut session = at_contract_input();
        session.set_contract_text("L".repeat(MIN_CONTRACT_CHARS)).unwrap();
        session
    }

    #[test]
    fn test_new_session_starts_at_welcome() {
        let session = Session::new(Language::Pt);
        assert_eq!(session.stage(), &Stage::Welcome);
        assert_eq!(session.language(), Language::Pt);
        assert!(session.report().is_none());
    }

    #[test]
    fn test_intake_guard_refuses_each_missing_field() {
        let cases = [
            IntakePatch {
                purpose: Some(String::new()),
                ..complete_intake()
            },
            IntakePatch {
                representation: Some(String::new()),
                ..complete_intake()
            },
            IntakePatch {
                contract_type: Some(String::new()),
                ..complete_intake()
            },
        ];
        for patch in cases {
            let mut session = Session::new(Language::En);
            session.start().unwrap();
            session.update_intake(patch).unwrap();
            assert!(!session.can_continue());
            assert_eq!(
                session.proceed_to_contract(),
                Err(WizardError::IntakeIncomplete)
            );
            assert_eq!(session.stage(), &Stage::Intake);
        }
    }

    #[test]
    fn test_intake_cannot_be_edited_outside_intake_stage() {
        let mut session = Session::new(Language::En);
        let err = session.update_intake(complete_intake()).unwrap_err();
        assert!(matches!(
            err,
            WizardError::WrongStage {
                stage: StageKind::Welcome,
                ..
            }
        ));
    }

    #[test]
    fn test_contract_length_threshold() {
        let mut session = at_contract_input();
        session
            .set_contract_text("x".repeat(MIN_CONTRACT_CHARS - 1))
            .unwrap();
        assert!(!session.can_analyze());
        assert_eq!(session.begin_analysis(), Err(WizardError::ContractTooShort));
        assert_eq!(session.stage().kind(), StageKind::ContractInput);

        session.set_contract_text("x".repeat(MIN_CONTRACT_CHARS)).unwrap();
        assert!(session.can_analyze());
        assert!(session.begin_analysis().is_ok());
        assert_eq!(session.stage(), &Stage::Analyzing);
    }

    #[test]
    fn test_successful_analysis_shows_report() {
        let mut session = ready_session();
        session.begin_analysis().unwrap();
        assert!(session.report().is_none());
        session
            .complete_analysis(Ok(AnalysisReport::new("## Summary")))
            .unwrap();
        assert_eq!(session.stage().kind(), StageKind::Results);
        assert_eq!(session.report().unwrap().as_str(), "## Summary");
        assert!(session.error().is_none());
    }

    #[test]
    fn test_failed_analysis_preserves_inputs() {
        let mut session = ready_session();
        let intake_before = session.intake().clone();
        let document_before = session.document().clone();

        session.begin_analysis().unwrap();
        session.complete_analysis(Err(AnalysisFailed)).unwrap();

        assert_eq!(session.stage().kind(), StageKind::ContractInput);
        assert_eq!(session.intake(), &intake_before);
        assert_eq!(session.document(), &document_before);
        assert_eq!(
            session.error(),
            Some(Language::En.messages().analysis_failed)
        );
    }

    #[test]
    fn test_failure_message_follows_language() {
        let mut session = ready_session();
        session.set_language(Language::Pt);
        session.begin_analysis().unwrap();
        session.complete_analysis(Err(AnalysisFailed)).unwrap();
        assert_eq!(
            session.error(),
            Some(Language::Pt.messages().analysis_failed)
        );
    }

    #[test]
    fn test_retry_after_failure_clears_error() {
        let mut session = ready_session();
        session.begin_analysis().unwrap();
        session.complete_analysis(Err(AnalysisFailed)).unwrap();
        session.begin_analysis().unwrap();
        assert!(session.error().is_none());
    }

    #[test]
    fn test_no_reentrant_analysis() {
        let mut session = ready_session();
        session.begin_analysis().unwrap();
        assert!(!session.can_analyze());
        assert!(matches!(
            session.begin_analysis(),
            Err(WizardError::WrongStage { .. })
        ));
    }

    #[test]
    fn test_completion_outside_analyzing_is_refused() {
        let mut session = ready_session();
        assert!(session
            .complete_analysis(Ok(AnalysisReport::new("late")))
            .is_err());
        assert_eq!(session.stage().kind(), StageKind::ContractInput);
    }

    #[test]
    fn test_restart_needs_confirmation() {
        let mut session = ready_session();
        let outcome = session.restart(false).unwrap();
        assert_eq!(
            outcome,
            RestartOutcome::NeedsConfirmation {
                prompt: Language::En.messages().restart_confirm
            }
        );
        assert_eq!(session.stage().kind(), StageKind::ContractInput);
        assert!(!session.document().as_str().is_empty());
    }

    #[test]
    fn test_confirmed_restart_resets_everything() {
        let mut session = ready_session();
        session.begin_analysis().unwrap();
        session
            .complete_analysis(Ok(AnalysisReport::new("report")))
            .unwrap();

        assert_eq!(session.restart(true).unwrap(), RestartOutcome::Restarted);
        assert_eq!(session.stage(), &Stage::Welcome);
        assert_eq!(session.intake(), &IntakeAnswers::default());
        assert!(session.document().as_str().is_empty());
        assert!(session.report().is_none());
        assert!(session.error().is_none());
    }

    #[test]
    fn test_restart_refused_while_analyzing() {
        let mut session = ready_session();
        session.begin_analysis().unwrap();
        assert!(!session.can_restart());
        assert!(session.restart(true).is_err());
        assert_eq!(session.stage(), &Stage::Analyzing);
    }

    #[test]
    fn test_back_keeps_contract_text() {
        let mut session = ready_session();
        session.back_to_intake().unwrap();
        assert_eq!(session.stage(), &Stage::Intake);
        session.proceed_to_contract().unwrap();
        assert!(session.document().is_ready());
    }

    #[test]
    fn test_extraction_locks_input() {
        let mut session = ready_session();
        session.begin_extraction().unwrap();
        assert!(session.is_extracting());
        assert!(!session.can_analyze());
        assert_eq!(
            session.set_contract_text("pasted".into()),
            Err(WizardError::ExtractionInFlight)
        );
        assert_eq!(session.begin_analysis(), Err(WizardError::ExtractionInFlight));
        assert_eq!(session.back_to_intake(), Err(WizardError::ExtractionInFlight));
        assert_eq!(session.restart(true), Err(WizardError::ExtractionInFlight));
        assert_eq!(session.begin_extraction(), Err(WizardError::ExtractionInFlight));
    }

    #[test]
    fn test_extraction_replaces_document() {
        let mut session = ready_session();
        session.begin_extraction().unwrap();
        session
            .finish_extraction(Ok("--- Page 1 ---\nLease agreement\n\n".into()))
            .unwrap();
        assert!(!session.is_extracting());
        assert_eq!(
            session.document().as_str(),
            "--- Page 1 ---\nLease agreement\n\n"
        );
    }

    #[test]
    fn test_whitespace_extraction_leaves_document_unchanged() {
        let mut session = ready_session();
        let before = session.document().clone();
        session.begin_extraction().unwrap();
        let err = session.finish_extraction(Ok(" \n\t ".into())).unwrap_err();
        assert!(matches!(err, ExtractError::NoText));
        assert_eq!(session.document(), &before);
        assert!(!session.is_extracting());
    }

    #[test]
    fn test_failed_extraction_unlocks_input() {
        let mut session = ready_session();
        let before = session.document().clone();
        session.begin_extraction().unwrap();
        let err = session
            .finish_extraction(Err(ExtractError::Unreadable("bad xref".into())))
            .unwrap_err();
        assert!(matches!(err, ExtractError::Unreadable(_)));
        assert_eq!(session.document(), &before);
        assert!(session.can_analyze());
    }

    #[test]
    fn test_upload_check_needs_contract_stage() {
        let session = Session::new(Language::En);
        assert_eq!(
            session.check_upload(),
            Err(WizardError::WrongStage {
                action: "upload a file",
                stage: StageKind::Welcome,
            })
        );

        let mut session = ready_session();
        assert_eq!(session.check_upload(), Ok(()));
        assert!(!session.is_extracting());
        session.begin_extraction().unwrap();
        assert_eq!(session.check_upload(), Err(WizardError::ExtractionInFlight));
    }

    #[test]
    fn test_busy_while_extracting_or_analyzing() {
        let mut session = ready_session();
        assert!(!session.is_busy());
        session.begin_extraction().unwrap();
        assert!(session.is_busy());
        session.finish_extraction(Err(ExtractError::NoText)).unwrap_err();
        assert!(!session.is_busy());
        session.begin_analysis().unwrap();
        assert!(session.is_busy());
        session.complete_analysis(Err(AnalysisFailed)).unwrap();
        assert!(!session.is_busy());
    }
}
