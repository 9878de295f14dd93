//! Localization table: every user-facing string and the per-language
//! analyst instruction, keyed by [`Language`].
//!
//! Field identifiers of [`IntakeAnswers`](crate::wizard::models::IntakeAnswers)
//! never change with the language; only labels and prose do.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::wizard::models::IntakeField;

mod en;
mod pt;

/// The two supported locales.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    En,
    Pt,
}

impl Language {
    pub fn code(self) -> &'static str {
        match self {
            Language::En => "en",
            Language::Pt => "pt",
        }
    }

    /// Full localization table for this language.
    pub fn locale(self) -> &'static Locale {
        match self {
            Language::En => &en::LOCALE,
            Language::Pt => &pt::LOCALE,
        }
    }

    pub fn ui(self) -> &'static UiStrings {
        &self.locale().ui
    }

    pub fn messages(self) -> &'static Messages {
        &self.locale().messages
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unsupported language '{0}' (expected 'en' or 'pt')")]
pub struct UnknownLanguage(pub String);

impl FromStr for Language {
    type Err = UnknownLanguage;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "en" | "en-us" => Ok(Language::En),
            "pt" | "pt-br" => Ok(Language::Pt),
            other => Err(UnknownLanguage(other.to_string())),
        }
    }
}

/// Everything the front-end and the prompt assembler need for one language.
#[derive(Debug, Serialize)]
pub struct Locale {
    pub ui: UiStrings,
    pub messages: Messages,
    pub questions: &'static [Question],
    /// Analyst instruction sent as the system prompt.
    #[serde(skip)]
    pub system_instruction: &'static str,
    /// Human-readable name of the language the report must be written in.
    #[serde(skip)]
    pub output_language: &'static str,
}

/// Static screen copy, one field per label in the wizard.
#[derive(Debug, Serialize)]
pub struct UiStrings {
    pub title: &'static str,
    pub subtitle: &'static str,
    pub description: &'static str,
    pub risk_card: &'static str,
    pub risk_desc: &'static str,
    pub gap_card: &'static str,
    pub gap_desc: &'static str,
    pub plan_card: &'static str,
    pub plan_desc: &'static str,
    pub start_btn: &'static str,
    pub context_title: &'static str,
    pub context_desc: &'static str,
    pub continue_btn: &'static str,
    pub upload_title: &'static str,
    pub upload_desc: &'static str,
    pub drag_drop: &'static str,
    pub or_paste: &'static str,
    pub back_btn: &'static str,
    pub analyze_btn: &'static str,
    pub analyzing_title: &'static str,
    pub analyzing_desc: &'static str,
    pub report_title: &'static str,
    pub print_btn: &'static str,
    pub new_analysis_btn: &'static str,
    pub disclaimer: &'static str,
    pub dd_label: &'static str,
    pub dd_desc: &'static str,
    pub supported_files: &'static str,
    pub nav_context: &'static str,
    pub nav_contract: &'static str,
    pub nav_report: &'static str,
}

/// Messages surfaced when something goes wrong or needs confirmation.
#[derive(Debug, Serialize)]
pub struct Messages {
    pub restart_confirm: &'static str,
    pub analysis_failed: &'static str,
    pub unsupported_file: &'static str,
    pub unreadable_file: &'static str,
    pub no_extractable_text: &'static str,
    pub transition_refused: &'static str,
    pub empty_analysis: &'static str,
}

/// One free-text intake question.
#[derive(Debug, Serialize)]
pub struct Question {
    pub id: IntakeField,
    pub label: &'static str,
    pub placeholder: &'static str,
    pub help: &'static str,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_language_codes() {
        assert_eq!("en".parse::<Language>().unwrap(), Language::En);
        assert_eq!("PT-BR".parse::<Language>().unwrap(), Language::Pt);
        assert!("fr".parse::<Language>().is_err());
    }

    #[test]
    fn test_both_locales_ask_the_same_questions() {
        let en: Vec<_> = Language::En.locale().questions.iter().map(|q| q.id).collect();
        let pt: Vec<_> = Language::Pt.locale().questions.iter().map(|q| q.id).collect();
        assert_eq!(en, pt);
        assert_eq!(en.len(), 9);
        assert!(!en.contains(&IntakeField::Priorities));
    }

    #[test]
    fn test_system_instruction_pins_response_language() {
        assert!(Language::En.locale().system_instruction.contains("ENGLISH"));
        assert!(Language::Pt.locale().system_instruction.contains("PORTUGUÊS"));
    }

    #[test]
    fn test_language_serializes_lowercase() {
        assert_eq!(serde_json::to_string(&Language::Pt).unwrap(), "\"pt\"");
    }
}
