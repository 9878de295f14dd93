// Contract analysis: prompt assembly and the seam to the analysis service.
// All generative calls go through llm_client; nothing here talks HTTP.

pub mod assembler;
pub mod prompts;

use async_trait::async_trait;
use thiserror::Error;
use tracing::{error, info, warn};

use crate::analysis::assembler::PromptPayload;
use crate::llm_client::LlmClient;
use crate::locale::Language;
use crate::wizard::models::AnalysisReport;

/// Opaque failure of an analysis run. The cause is logged, never surfaced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("contract analysis failed")]
pub struct AnalysisFailed;

/// Turns an assembled prompt into a report.
///
/// Default: [`LlmAnalyzer`]. Tests swap in a canned implementation.
#[async_trait]
pub trait Analyzer: Send + Sync {
    async fn analyze(
        &self,
        payload: &PromptPayload,
        language: Language,
    ) -> Result<AnalysisReport, AnalysisFailed>;
}

/// Analyzer backed by the generative language API.
pub struct LlmAnalyzer {
    llm: LlmClient,
}

impl LlmAnalyzer {
    pub fn new(llm: LlmClient) -> Self {
        Self { llm }
    }
}

#[async_trait]
impl Analyzer for LlmAnalyzer {
    async fn analyze(
        &self,
        payload: &PromptPayload,
        language: Language,
    ) -> Result<AnalysisReport, AnalysisFailed> {
        let response = self
            .llm
            .generate(&payload.user_message, &payload.system_instruction)
            .await
            .map_err(|e| {
                error!("Analysis call failed: {e}");
                AnalysisFailed
            })?;

        match response.text() {
            Some(text) if !text.is_empty() => {
                info!("Analysis received: {} chars", text.chars().count());
                Ok(AnalysisReport::new(text))
            }
            _ => {
                warn!("Analysis service returned no text");
                Ok(AnalysisReport::new(language.messages().empty_analysis))
            }
        }
    }
}
