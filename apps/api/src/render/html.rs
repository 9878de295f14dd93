//! HTML output for rendered reports: a fragment for embedding and a
//! standalone printable page.
//!
//! Report text comes from an external generative service, so every text
//! span is escaped before it is wrapped in markup.

use chrono::NaiveDate;

use crate::locale::Language;
use crate::render::{Block, Span};

const PRODUCT_NAME: &str = "LexGuard AI";

pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

fn spans_to_html(spans: &[Span]) -> String {
    spans
        .iter()
        .map(|span| match span {
            Span::Plain(text) => escape_html(text),
            Span::Bold(text) => format!("<strong>{}</strong>", escape_html(text)),
        })
        .collect()
}

/// One element per block, newline separated.
pub fn blocks_to_html(blocks: &[Block]) -> String {
    let mut out = String::new();
    for block in blocks {
        let element = match block {
            Block::Heading { level, text } => {
                format!("<h{level}>{}</h{level}>", escape_html(text))
            }
            Block::Bullet { spans } => format!(
                "<div class=\"item\"><span class=\"marker\">•</span><span>{}</span></div>",
                spans_to_html(spans)
            ),
            Block::Numbered { label, spans } => format!(
                "<div class=\"item\"><span class=\"marker\">{}</span><span>{}</span></div>",
                escape_html(label),
                spans_to_html(spans)
            ),
            Block::Spacer => "<div class=\"spacer\"></div>".to_string(),
            Block::Paragraph { spans } => format!("<p>{}</p>", spans_to_html(spans)),
        };
        out.push_str(&element);
        out.push('\n');
    }
    out
}

pub fn format_report_date(date: NaiveDate, language: Language) -> String {
    match language {
        Language::En => date.format("%m/%d/%Y").to_string(),
        Language::Pt => date.format("%d/%m/%Y").to_string(),
    }
}

/// Self-contained page that opens the print dialog once loaded.
pub fn printable_page(blocks: &[Block], language: Language, date: NaiveDate) -> String {
    let ui = language.ui();
    let report_title = escape_html(ui.report_title);

    format!(
        r#"<!DOCTYPE html>
<html lang="{lang}">
<head>
<meta charset="utf-8">
<title>{report_title} - {PRODUCT_NAME}</title>
<style>
  body {{ font-family: sans-serif; padding: 40px; color: #0f172a; -webkit-print-color-adjust: exact; }}
  .page {{ max-width: 56rem; margin: 0 auto; }}
  header {{ display: flex; justify-content: space-between; align-items: flex-end; border-bottom: 1px solid #e2e8f0; padding-bottom: 1rem; margin-bottom: 2rem; }}
  .item {{ display: flex; margin-left: 1rem; }}
  .marker {{ margin-right: 0.5rem; font-weight: 600; }}
  .spacer {{ height: 0.5rem; }}
  footer {{ margin-top: 3rem; padding-top: 2rem; border-top: 1px solid #f1f5f9; text-align: center; color: #94a3b8; font-size: 0.875rem; }}
</style>
</head>
<body>
<div class="page">
<header>
  <h1>{PRODUCT_NAME}</h1>
  <div>
    <p>{report_title}</p>
    <p class="date">{date}</p>
  </div>
</header>
<main>
{content}</main>
<footer><p>{disclaimer}</p></footer>
</div>
<script>
  window.addEventListener("load", function () {{ setTimeout(function () {{ window.print(); }}, 500); }});
</script>
</body>
</html>
"#,
        lang = language.code(),
        date = format_report_date(date, language),
        content = blocks_to_html(blocks),
        disclaimer = escape_html(ui.disclaimer),
    )
}
