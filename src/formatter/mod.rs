//! Turns the model's loosely structured plan text into HTML.
//!
//! The text is split into meal sections by header keywords, every line in a
//! section is classified (macros, calories, tip or plain text), and each
//! classification gets its own styled block. Text without any recognized
//! header is emitted as one paragraph.

mod annotate;
mod render;
mod sections;

pub use annotate::{
    annotate_line, is_preparation_tip, match_calories, match_macro_triple, LineAnnotation, Macros,
};
pub use render::{render_annotation, render_section, section_icon, RenderedSection};
pub use sections::{is_section_header, split_sections, Section, SectionedPlan};

use html_escape::encode_text;

/// Format a raw plan into an HTML fragment. Never fails.
pub fn format_plan(text: &str) -> String {
    let plan = split_sections(text);

    if plan.sections.is_empty() {
        return format!("<p>{}</p>", encode_text(text).replace('\n', "<br>"));
    }

    plan.sections
        .iter()
        .map(|section| render_section(section).to_html())
        .collect()
}
