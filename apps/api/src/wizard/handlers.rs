//! Axum route handlers for the wizard API.
//!
//! Every handler locks one session, applies one transition, and answers with
//! the resulting [`SessionView`]. Long-running work (file extraction and the
//! analysis call) runs in a spawned task that owns the completion step, so a
//! dropped request can never strand a session mid-operation.

use std::sync::Arc;

use anyhow::anyhow;
use axum::{
    extract::{Multipart, Path, Query, State},
    http::StatusCode,
    response::Html,
    Json,
};
use bytes::Bytes;
use chrono::{DateTime, Local, Utc};
use serde::{Deserialize, Serialize};
use tracing::{debug, error, warn};
use uuid::Uuid;

use crate::analysis::assembler::PromptPayload;
use crate::analysis::{AnalysisFailed, Analyzer};
use crate::errors::{AppError, AppJson};
use crate::extract::{classify, extract_document, ExtractError};
use crate::locale::{Language, Locale};
use crate::render::html::{blocks_to_html, printable_page};
use crate::render::{render_report, Block};
use crate::state::AppState;
use crate::wizard::models::{IntakeAnswers, IntakePatch};
use crate::wizard::session::{RestartOutcome, Session, StageKind, WizardError};
use crate::wizard::store::SharedSession;

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Default, Deserialize)]
pub struct CreateSessionQuery {
    pub language: Option<Language>,
}

#[derive(Debug, Deserialize)]
pub struct ContractTextRequest {
    pub text: String,
}

#[derive(Debug, Default, Deserialize)]
pub struct RestartRequest {
    #[serde(default)]
    pub confirm: bool,
}

#[derive(Debug, Deserialize)]
pub struct LanguageRequest {
    pub language: Language,
}

/// Snapshot of a session as the front-end sees it.
#[derive(Debug, Serialize)]
pub struct SessionView {
    pub id: Uuid,
    pub stage: StageKind,
    pub language: Language,
    pub intake: IntakeAnswers,
    pub contract_text: String,
    pub contract_chars: usize,
    pub extracting: bool,
    pub error: Option<String>,
    pub report: Option<String>,
    pub can_continue: bool,
    pub can_analyze: bool,
    pub can_restart: bool,
    pub created_at: DateTime<Utc>,
}

impl From<&Session> for SessionView {
    fn from(session: &Session) -> Self {
        Self {
            id: session.id(),
            stage: session.stage().kind(),
            language: session.language(),
            intake: session.intake().clone(),
            contract_text: session.document().as_str().to_string(),
            contract_chars: session.document().char_len(),
            extracting: session.is_extracting(),
            error: session.error().map(str::to_string),
            report: session.report().map(|r| r.as_str().to_string()),
            can_continue: session.can_continue(),
            can_analyze: session.can_analyze(),
            can_restart: session.can_restart(),
            created_at: session.created_at(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct RestartResponse {
    pub restarted: bool,
    pub confirmation_prompt: Option<&'static str>,
    pub session: SessionView,
}

#[derive(Debug, Serialize)]
pub struct ReportResponse {
    pub title: &'static str,
    pub subtitle: String,
    pub blocks: Vec<Block>,
    pub html: String,
    pub disclaimer: &'static str,
}

// ────────────────────────────────────────────────────────────────────────────
// Helpers
// ────────────────────────────────────────────────────────────────────────────

async fn find_session(state: &AppState, id: Uuid) -> Result<SharedSession, AppError> {
    state
        .sessions
        .get(id)
        .await
        .ok_or_else(|| AppError::NotFound(format!("Session {id} not found")))
}

fn refused(language: Language, err: WizardError) -> AppError {
    debug!("Transition refused: {err}");
    AppError::TransitionRefused(language.messages().transition_refused.to_string())
}

fn extraction_failed(language: Language, err: ExtractError) -> AppError {
    let messages = language.messages();
    let message = match &err {
        ExtractError::Unreadable(cause) => {
            warn!("Could not read uploaded file: {cause}");
            messages.unreadable_file
        }
        ExtractError::NoText => messages.no_extractable_text,
    };
    AppError::ExtractionFailed(message.to_string())
}

/// Locks the session, applies `transition`, and returns the updated view.
async fn transition<F>(state: &AppState, id: Uuid, apply: F) -> Result<Json<SessionView>, AppError>
where
    F: FnOnce(&mut Session) -> Result<(), WizardError>,
{
    let shared = find_session(state, id).await?;
    let mut session = shared.lock().await;
    let language = session.language();
    apply(&mut *session).map_err(|e| refused(language, e))?;
    Ok(Json(SessionView::from(&*session)))
}

/// Runs the analysis call and applies its outcome to the session.
///
/// The call itself runs in a nested task so that even a panic inside the
/// analyzer resolves to `AnalysisFailed` and the session leaves ANALYZING.
fn spawn_analysis(
    shared: SharedSession,
    analyzer: Arc<dyn Analyzer>,
    payload: PromptPayload,
    language: Language,
) -> tokio::task::JoinHandle<Result<SessionView, WizardError>> {
    tokio::spawn(async move {
        let call = tokio::spawn(async move { analyzer.analyze(&payload, language).await });
        let outcome = match call.await {
            Ok(outcome) => outcome,
            Err(e) => {
                error!("Analysis task aborted: {e}");
                Err(AnalysisFailed)
            }
        };
        let mut session = shared.lock().await;
        session.complete_analysis(outcome)?;
        Ok(SessionView::from(&*session))
    })
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// GET /api/v1/locale/:lang
pub async fn handle_get_locale(Path(lang): Path<String>) -> Result<Json<&'static Locale>, AppError> {
    let language: Language = lang
        .parse()
        .map_err(|e: crate::locale::UnknownLanguage| AppError::Validation(e.to_string()))?;
    Ok(Json(language.locale()))
}

/// POST /api/v1/sessions
pub async fn handle_create_session(
    State(state): State<AppState>,
    Query(query): Query<CreateSessionQuery>,
) -> (StatusCode, Json<SessionView>) {
    let shared = state
        .sessions
        .create(query.language.unwrap_or_default())
        .await;
    let session = shared.lock().await;
    (StatusCode::CREATED, Json(SessionView::from(&*session)))
}

/// GET /api/v1/sessions/:id
pub async fn handle_get_session(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<SessionView>, AppError> {
    let shared = find_session(&state, id).await?;
    let session = shared.lock().await;
    Ok(Json(SessionView::from(&*session)))
}

/// POST /api/v1/sessions/:id/start
pub async fn handle_start(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<SessionView>, AppError> {
    transition(&state, id, Session::start).await
}

/// PATCH /api/v1/sessions/:id/intake
pub async fn handle_update_intake(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    AppJson(patch): AppJson<IntakePatch>,
) -> Result<Json<SessionView>, AppError> {
    transition(&state, id, |s| s.update_intake(patch)).await
}

/// POST /api/v1/sessions/:id/intake/submit
pub async fn handle_submit_intake(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<SessionView>, AppError> {
    transition(&state, id, Session::proceed_to_contract).await
}

/// POST /api/v1/sessions/:id/back
pub async fn handle_back(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<SessionView>, AppError> {
    transition(&state, id, Session::back_to_intake).await
}

/// PUT /api/v1/sessions/:id/contract
pub async fn handle_set_contract(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    AppJson(req): AppJson<ContractTextRequest>,
) -> Result<Json<SessionView>, AppError> {
    transition(&state, id, |s| s.set_contract_text(req.text)).await
}

/// PUT /api/v1/sessions/:id/language
pub async fn handle_set_language(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    AppJson(req): AppJson<LanguageRequest>,
) -> Result<Json<SessionView>, AppError> {
    transition(&state, id, |s| {
        s.set_language(req.language);
        Ok(())
    })
    .await
}

/// POST /api/v1/sessions/:id/contract/upload
///
/// Multipart form with a single `file` field (.pdf, .txt or .md).
pub async fn handle_upload(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    mut multipart: Multipart,
) -> Result<Json<SessionView>, AppError> {
    let shared = find_session(&state, id).await?;

    let mut upload: Option<(String, Option<String>, Bytes)> = None;
    while let Some(field) = multipart.next_field().await? {
        if field.name() != Some("file") {
            continue;
        }
        let file_name = field.file_name().unwrap_or_default().to_string();
        let content_type = field.content_type().map(str::to_string);
        let data = field.bytes().await?;
        upload = Some((file_name, content_type, data));
        break;
    }
    let (file_name, content_type, data) =
        upload.ok_or_else(|| AppError::Validation("Missing 'file' field".to_string()))?;

    let kind = {
        let mut session = shared.lock().await;
        let language = session.language();
        session.check_upload().map_err(|e| refused(language, e))?;
        let kind = classify(content_type.as_deref(), &file_name).ok_or_else(|| {
            AppError::UnsupportedFileType(language.messages().unsupported_file.to_string())
        })?;
        session
            .begin_extraction()
            .map_err(|e| refused(language, e))?;
        kind
    };
    debug!(session = %id, file = %file_name, ?kind, bytes = data.len(), "extracting upload");

    let task_session = shared.clone();
    let handle = tokio::spawn(async move {
        let outcome = extract_document(kind, data).await;
        let mut session = task_session.lock().await;
        let language = session.language();
        session
            .finish_extraction(outcome)
            .map_err(|e| extraction_failed(language, e))?;
        Ok::<_, AppError>(SessionView::from(&*session))
    });

    let view = handle
        .await
        .map_err(|e| AppError::Internal(anyhow!("extraction task failed: {e}")))??;
    Ok(Json(view))
}

/// POST /api/v1/sessions/:id/analyze
///
/// Blocks until the analysis resolves. On failure the session is back on the
/// contract step with a localized error; this is a 200, not an HTTP error.
pub async fn handle_analyze(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<SessionView>, AppError> {
    let shared = find_session(&state, id).await?;

    let (payload, language) = {
        let mut session = shared.lock().await;
        let language = session.language();
        let payload = session
            .begin_analysis()
            .map_err(|e| refused(language, e))?;
        (payload, language)
    };

    let handle = spawn_analysis(shared, state.analyzer.clone(), payload, language);
    let view = handle
        .await
        .map_err(|e| AppError::Internal(anyhow!("analysis task failed: {e}")))?
        .map_err(|e| refused(language, e))?;
    Ok(Json(view))
}

/// POST /api/v1/sessions/:id/restart
///
/// Without `"confirm": true` nothing changes and the localized confirmation
/// prompt is returned.
pub async fn handle_restart(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    AppJson(req): AppJson<RestartRequest>,
) -> Result<Json<RestartResponse>, AppError> {
    let shared = find_session(&state, id).await?;
    let mut session = shared.lock().await;
    let language = session.language();
    let outcome = session
        .restart(req.confirm)
        .map_err(|e| refused(language, e))?;

    let (restarted, confirmation_prompt) = match outcome {
        RestartOutcome::Restarted => (true, None),
        RestartOutcome::NeedsConfirmation { prompt } => (false, Some(prompt)),
    };
    Ok(Json(RestartResponse {
        restarted,
        confirmation_prompt,
        session: SessionView::from(&*session),
    }))
}

/// GET /api/v1/sessions/:id/report
pub async fn handle_get_report(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<ReportResponse>, AppError> {
    let shared = find_session(&state, id).await?;
    let session = shared.lock().await;
    let language = session.language();
    let report = session.report().ok_or_else(|| {
        refused(
            language,
            WizardError::WrongStage {
                action: "view the report",
                stage: session.stage().kind(),
            },
        )
    })?;

    let blocks = render_report(report.as_str());
    let ui = language.ui();
    let intake = session.intake();
    Ok(Json(ReportResponse {
        title: ui.report_title,
        subtitle: format!("{} • {}", intake.representation, intake.contract_type),
        html: blocks_to_html(&blocks),
        blocks,
        disclaimer: ui.disclaimer,
    }))
}

/// GET /api/v1/sessions/:id/report/print
pub async fn handle_print_report(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Html<String>, AppError> {
    let shared = find_session(&state, id).await?;
    let session = shared.lock().await;
    let language = session.language();
    let report = session.report().ok_or_else(|| {
        refused(
            language,
            WizardError::WrongStage {
                action: "print the report",
                stage: session.stage().kind(),
            },
        )
    })?;

    let blocks = render_report(report.as_str());
    let today = Local::now().date_naive();
    Ok(Html(printable_page(&blocks, language, today)))
}
