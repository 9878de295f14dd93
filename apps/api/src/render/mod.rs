//! Report renderer. Turns the analysis text into display blocks.
//!
//! Line-oriented: each physical line maps to exactly one [`Block`] and no
//! line looks at its neighbours; a final newline does not open an extra
//! line. Supported markup is deliberately small:
//! `#`/`##`/`###` headings, `-`/`*` bullets, `N.` numbered items, and inline
//! `**bold**`. Blocks keep raw text; escaping happens in [`html`].

pub mod html;

use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;

static NUMBERED_ITEM: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^([0-9]+)\.\s").expect("numbered item pattern is valid"));
static BOLD_SPAN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\*\*(.*?)\*\*").expect("bold pattern is valid"));

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Block {
    /// Heading text is shown as-is; bold markers are not resolved inside it.
    Heading { level: u8, text: String },
    Bullet { spans: Vec<Span> },
    /// `label` is the source number plus its dot, never renumbered.
    Numbered { label: String, spans: Vec<Span> },
    /// Vertical spacing for a blank line.
    Spacer,
    Paragraph { spans: Vec<Span> },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "style", content = "text", rename_all = "snake_case")]
pub enum Span {
    Plain(String),
    Bold(String),
}

pub fn render_report(text: &str) -> Vec<Block> {
    text.lines().map(render_line).collect()
}

fn render_line(line: &str) -> Block {
    for (marker, level) in [("### ", 3), ("## ", 2), ("# ", 1)] {
        if let Some(rest) = line.strip_prefix(marker) {
            return Block::Heading {
                level,
                text: rest.to_string(),
            };
        }
    }

    let trimmed = line.trim();
    if let Some(rest) = trimmed
        .strip_prefix("- ")
        .or_else(|| trimmed.strip_prefix("* "))
    {
        return Block::Bullet {
            spans: resolve_bold(rest),
        };
    }

    if let Some(caps) = NUMBERED_ITEM.captures(trimmed) {
        let marker_end = caps.get(0).map_or(0, |m| m.end());
        return Block::Numbered {
            label: format!("{}.", &caps[1]),
            spans: resolve_bold(&trimmed[marker_end..]),
        };
    }

    if trimmed.is_empty() {
        return Block::Spacer;
    }

    Block::Paragraph {
        spans: resolve_bold(line),
    }
}

/// Greedy left-to-right pairing of `**` markers. An unpaired marker stays
/// in the plain text.
fn resolve_bold(text: &str) -> Vec<Span> {
    let mut spans = Vec::new();
    let mut cursor = 0;

    for caps in BOLD_SPAN.captures_iter(text) {
        let Some(whole) = caps.get(0) else { continue };
        if whole.start() > cursor {
            spans.push(Span::Plain(text[cursor..whole.start()].to_string()));
        }
        spans.push(Span::Bold(caps[1].to_string()));
        cursor = whole.end();
    }
    if cursor < text.len() {
        spans.push(Span::Plain(text[cursor..].to_string()));
    }
    spans
}
