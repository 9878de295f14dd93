//! Prompt assembly. Pure and deterministic.
//!
//! The contract text is embedded verbatim. Length limits are the analysis
//! service's problem; nothing here truncates or summarizes.

use serde::Serialize;

use crate::analysis::prompts::USER_PROMPT_TEMPLATE;
use crate::locale::Language;
use crate::wizard::models::{ContractDocument, IntakeAnswers};

/// What gets sent to the analysis service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PromptPayload {
    pub system_instruction: String,
    pub user_message: String,
}

pub fn assemble_prompt(
    intake: &IntakeAnswers,
    document: &ContractDocument,
    language: Language,
) -> PromptPayload {
    let locale = language.locale();
    let due_diligence = if intake.due_diligence { "YES" } else { "NO" };

    let user_message = fill_template(
        USER_PROMPT_TEMPLATE,
        &[
            ("output_language", locale.output_language),
            ("purpose", intake.purpose.as_str()),
            ("representation", intake.representation.as_str()),
            ("jurisdiction", intake.jurisdiction.as_str()),
            ("contract_type", intake.contract_type.as_str()),
            ("stage", intake.stage.as_str()),
            ("counterparty", intake.counterparty.as_str()),
            ("risk_tolerance", intake.risk_tolerance.as_str()),
            ("priorities", intake.priorities.as_str()),
            ("time_horizon", intake.time_horizon.as_str()),
            ("due_diligence", due_diligence),
            ("additional_info", intake.additional_info.as_str()),
            ("contract_text", document.as_str()),
        ],
    );

    PromptPayload {
        system_instruction: locale.system_instruction.to_string(),
        user_message,
    }
}

/// Substitutes `{name}` placeholders in a single left-to-right pass.
/// Substituted values are never rescanned, so answer text containing
/// braces comes through untouched. Unknown placeholders are kept literally.
fn fill_template(template: &str, values: &[(&str, &str)]) -> String {
    let capacity = template.len() + values.iter().map(|(_, v)| v.len()).sum::<usize>();
    let mut out = String::with_capacity(capacity);
    let mut rest = template;

    while let Some(open) = rest.find('{') {
        out.push_str(&rest[..open]);
        let after = &rest[open + 1..];
        let replacement = after.find('}').and_then(|close| {
            let key = &after[..close];
            values
                .iter()
                .find(|(name, _)| *name == key)
                .map(|(_, value)| (*value, close))
        });
        match replacement {
            Some((value, close)) => {
                out.push_str(value);
                rest = &after[close + 1..];
            }
            None => {
                out.push('{');
                rest = after;
            }
        }
    }
    out.push_str(rest);
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::prompts::CONTRACT_DELIMITER;

    const LEASE_EXCERPT: &str = "The Tenant shall pay rent monthly on the first business day.";

    fn lease_intake() -> IntakeAnswers {
        IntakeAnswers {
            purpose: "decide whether to sign".into(),
            representation: "tenant".into(),
            contract_type: "lease".into(),
            ..Default::default()
        }
    }

    #[test]
    fn test_lease_scenario() {
        assert_eq!(LEASE_EXCERPT.chars().count(), 60);
        let payload = assemble_prompt(
            &lease_intake(),
            &ContractDocument::new(LEASE_EXCERPT),
            Language::En,
        );
        let msg = &payload.user_message;

        assert!(msg.contains("1. Purpose: decide whether to sign"));
        assert!(msg.contains("2. Representing: tenant"));
        assert!(msg.contains("9. Background Check Requested: NO"));

        let (_, after) = msg.split_once(CONTRACT_DELIMITER).unwrap();
        assert!(after.contains(LEASE_EXCERPT));
        assert!(msg.contains("Output Language: English (US)."));
        assert!(payload.system_instruction.contains("ENGLISH"));
    }

    #[test]
    fn test_assembly_is_deterministic() {
        let intake = lease_intake();
        let doc = ContractDocument::new(LEASE_EXCERPT);
        let a = assemble_prompt(&intake, &doc, Language::Pt);
        let b = assemble_prompt(&intake, &doc, Language::Pt);
        assert_eq!(a, b);
    }

    #[test]
    fn test_due_diligence_flag_serialized() {
        let intake = IntakeAnswers {
            due_diligence: true,
            ..lease_intake()
        };
        let payload = assemble_prompt(&intake, &ContractDocument::default(), Language::En);
        assert!(payload
            .user_message
            .contains("9. Background Check Requested: YES"));
    }

    #[test]
    fn test_risk_and_priorities_share_a_line() {
        let intake = IntakeAnswers {
            risk_tolerance: "low".into(),
            priorities: "IP ownership".into(),
            ..lease_intake()
        };
        let payload = assemble_prompt(&intake, &ContractDocument::default(), Language::En);
        assert!(payload
            .user_message
            .contains("7. Risk/Priorities: low - IP ownership"));
    }

    #[test]
    fn test_language_swaps_only_instruction_text() {
        let intake = lease_intake();
        let doc = ContractDocument::new(LEASE_EXCERPT);
        let en = assemble_prompt(&intake, &doc, Language::En);
        let pt = assemble_prompt(&intake, &doc, Language::Pt);
        assert_ne!(en.system_instruction, pt.system_instruction);
        assert!(pt.user_message.contains("Output Language: Portuguese (Brazil)."));
        assert!(pt.user_message.contains("2. Representing: tenant"));
    }

    #[test]
    fn test_long_contract_is_not_truncated() {
        let text = "Clause. ".repeat(50_000);
        let payload = assemble_prompt(
            &lease_intake(),
            &ContractDocument::new(text.clone()),
            Language::En,
        );
        assert!(payload.user_message.contains(&text));
    }

    #[test]
    fn test_placeholder_lookalikes_in_answers_are_kept() {
        let intake = IntakeAnswers {
            purpose: "check {contract_text} clause".into(),
            ..lease_intake()
        };
        let payload = assemble_prompt(&intake, &ContractDocument::new("BODY"), Language::En);
        assert!(payload
            .user_message
            .contains("1. Purpose: check {contract_text} clause"));
        assert_eq!(payload.user_message.matches("BODY").count(), 1);
    }

    #[test]
    fn test_fill_template_keeps_unknown_and_unbalanced_braces() {
        assert_eq!(fill_template("a {x} {y} {", &[("x", "1")]), "a 1 {y} {");
    }
}
