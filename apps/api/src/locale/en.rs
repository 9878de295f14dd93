use super::{Locale, Messages, Question, UiStrings};
use crate::analysis::prompts::SYSTEM_INSTRUCTION_EN;
use crate::wizard::models::IntakeField;

pub(super) static LOCALE: Locale = Locale {
    ui: UiStrings {
        title: "Contract Risk Analysis",
        subtitle: "Reimagined",
        description: "LexGuard uses advanced AI to stress-test your contracts. We identify hidden risks, abusive clauses, and missing protections based on **who you represent**.",
        risk_card: "Risk Detection",
        risk_desc: "Finds liabilities and traps before you sign.",
        gap_card: "Clause Gap Analysis",
        gap_desc: "Points out what is missing to protect you.",
        plan_card: "Negotiation Plan",
        plan_desc: "Actionable advice to improve your position.",
        start_btn: "Start Analysis",
        context_title: "Analysis Context",
        context_desc: "To provide a realistic and critical analysis, LexGuard needs to understand your position.",
        continue_btn: "Continue to Contract Upload",
        upload_title: "Upload Contract",
        upload_desc: "Paste the contract text below or upload a PDF/text file.",
        drag_drop: "Drag & Drop PDF or text file here",
        or_paste: "or paste text directly",
        back_btn: "Back to Context",
        analyze_btn: "Start Analysis",
        analyzing_title: "Analyzing Contract...",
        analyzing_desc: "Our AI is currently reading the document, cross-referencing with your interests, and identifying potential risks. This may take up to a minute.",
        report_title: "Analysis Report",
        print_btn: "Print Report",
        new_analysis_btn: "New Analysis",
        disclaimer: "Disclaimer: LexGuard AI is an automated tool and does not constitute professional legal advice. Always consult with a qualified attorney before signing binding agreements.",
        dd_label: "9. Include Background Check / Due Diligence?",
        dd_desc: "LexGuard will suggest specific checks on the counterparty using public data sources.",
        supported_files: "Supported: .pdf, .txt, .md",
        nav_context: "Context",
        nav_contract: "Contract",
        nav_report: "Report",
    },
    messages: Messages {
        restart_confirm: "This will clear your current analysis. Are you sure?",
        analysis_failed: "An error occurred during analysis. Please check your API key and try again.",
        unsupported_file: "Please upload a .pdf, .txt, or .md file.",
        unreadable_file: "Error reading file. It may be corrupt or not a text-based PDF.",
        no_extractable_text: "Could not extract text from this file. It might be empty or a scanned image.",
        transition_refused: "This step is not available right now.",
        empty_analysis: "No analysis could be generated.",
    },
    questions: &[
        Question {
            id: IntakeField::Purpose,
            label: "1. Purpose of the analysis",
            placeholder: "e.g., decide whether to sign, renegotiate, terminate, sue...",
            help: "What is the main objective of this analysis?",
        },
        Question {
            id: IntakeField::Representation,
            label: "2. Who do you represent?",
            placeholder: "e.g., buyer, seller, employee, tenant, investor...",
            help: "In favor of whom should the contract be analyzed?",
        },
        Question {
            id: IntakeField::Jurisdiction,
            label: "3. Governing law and jurisdiction",
            placeholder: "e.g., New York (USA), London (UK), Brazil...",
            help: "Which country/state governs this contract?",
        },
        Question {
            id: IntakeField::ContractType,
            label: "4. Type of contract",
            placeholder: "e.g., SaaS, NDA, Employment, Lease...",
            help: "What specific type of agreement is this?",
        },
        Question {
            id: IntakeField::Stage,
            label: "5. Stage of the relationship",
            placeholder: "e.g., Draft under negotiation, Signed and in force...",
            help: "Is this a new draft or an existing dispute?",
        },
        Question {
            id: IntakeField::Counterparty,
            label: "6. Counterparty profile",
            placeholder: "e.g., Large corporation, startup, individual...",
            help: "Who is the other party? Do you know anything about them?",
        },
        Question {
            id: IntakeField::RiskTolerance,
            label: "7. Risk tolerance & Priorities",
            placeholder: "e.g., Maximum protection, IP ownership is key...",
            help: "Are you looking for a balanced view or maximum security?",
        },
        Question {
            id: IntakeField::TimeHorizon,
            label: "8. Time horizon & Economic relevance",
            placeholder: "e.g., 2 years, High financial impact...",
            help: "How long does it last and how much money is at stake?",
        },
        Question {
            id: IntakeField::AdditionalInfo,
            label: "10. Anything else important",
            placeholder: "e.g., Worried about the non-compete clause...",
            help: "Specific clauses or scenarios that worry you.",
        },
    ],
    system_instruction: SYSTEM_INSTRUCTION_EN,
    output_language: "English (US)",
};
