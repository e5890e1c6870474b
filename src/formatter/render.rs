use super::annotate::{annotate_line, LineAnnotation, Macros};
use super::sections::Section;
use html_escape::encode_text;

/// Icon lookup by section-name keyword, first match wins.
const SECTION_ICONS: [(&str, &str); 6] = [
    ("BREAKFAST", "🍳"),
    ("LUNCH", "🍛"),
    ("DINNER", "🍽️"),
    ("SNACK", "🥜"),
    ("HYDRATION", "💧"),
    ("WATER", "💧"),
];

const DEFAULT_ICON: &str = "🍳";

/// A section ready to be written into the email body
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedSection {
    pub name: String,
    pub icon: &'static str,
    pub lines: Vec<String>,
}

impl RenderedSection {
    pub fn to_html(&self) -> String {
        let mut html = format!(
            "<div class=\"meal-section\">\n<h2><span class=\"meal-icon\">{}</span> {}</h2>\n<div class=\"meal-content\">\n",
            self.icon,
            encode_text(&self.name)
        );
        for line in &self.lines {
            html.push_str(line);
            html.push('\n');
        }
        html.push_str("</div>\n</div>\n");
        html
    }
}

/// Icon for a section name, or the default icon when no keyword matches.
pub fn section_icon(name: &str) -> &'static str {
    let upper = name.to_uppercase();
    SECTION_ICONS
        .iter()
        .find(|(keyword, _)| upper.contains(keyword))
        .map(|(_, icon)| *icon)
        .unwrap_or(DEFAULT_ICON)
}

/// Title, icon and rendered blocks for one section.
pub fn render_section(section: &Section) -> RenderedSection {
    RenderedSection {
        name: section.name.clone(),
        icon: section_icon(&section.name),
        lines: section
            .lines
            .iter()
            .map(|line| render_annotation(&annotate_line(line)))
            .collect(),
    }
}

/// The styled HTML block for one classified line.
pub fn render_annotation(annotation: &LineAnnotation) -> String {
    match annotation {
        LineAnnotation::MacroTriple(macros) => render_macros(macros),
        LineAnnotation::CalorieCount(value) => {
            format!("<div class=\"calorie-info\">{} calories</div>", value)
        }
        LineAnnotation::PreparationTip(text) => format!(
            "<div class=\"prep-tip\"><span class=\"tip-icon\">💡</span> {}</div>",
            encode_text(text)
        ),
        LineAnnotation::PlainText(text) => format!("<p>{}</p>", encode_text(text)),
    }
}

fn render_macros(macros: &Macros) -> String {
    let items = [
        ("🥩", "Protein", &macros.protein),
        ("🍚", "Carbs", &macros.carbs),
        ("🌱", "Fiber", &macros.fiber),
    ];

    let mut html = String::from("<div class=\"macro-box\">");
    for (icon, label, value) in items {
        html.push_str(&format!(
            "<div class=\"macro-item\"><span class=\"macro-icon\">{}</span><span class=\"macro-label\">{}</span><span class=\"macro-value\">{}g</span></div>",
            icon, label, value
        ));
    }
    html.push_str("</div>");
    html
}
