/// Header keywords, matched as a prefix of the upper-cased line.
const HEADER_KEYWORDS: [&str; 8] = [
    "BREAKFAST",
    "LUNCH",
    "DINNER",
    "SNACK",
    "MORNING SNACK",
    "EVENING SNACK",
    "HYDRATION",
    "WATER",
];

/// A named group of plan lines, bounded by recognized header lines
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Section {
    /// The header line as written by the model (trimmed, case preserved)
    pub name: String,
    pub lines: Vec<String>,
}

/// A plan split into its sections
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SectionedPlan {
    /// Lines seen before the first header
    pub preamble: Vec<String>,
    /// Sections in order of first appearance
    pub sections: Vec<Section>,
}

/// Returns true when a trimmed line opens a new section.
pub fn is_section_header(line: &str) -> bool {
    let upper = line.to_uppercase();
    HEADER_KEYWORDS
        .iter()
        .any(|keyword| upper.starts_with(keyword))
}

/// Split raw plan text into sections.
///
/// Blank lines are dropped and every other line is trimmed. A header whose
/// text repeats an earlier one re-opens that section, so its lines are
/// appended to the earlier group instead of starting a second one.
pub fn split_sections(text: &str) -> SectionedPlan {
    let mut plan = SectionedPlan::default();
    let mut current: Option<usize> = None;

    for line in text.lines().map(str::trim).filter(|l| !l.is_empty()) {
        if is_section_header(line) {
            let index = match plan.sections.iter().position(|s| s.name == line) {
                Some(index) => index,
                None => {
                    plan.sections.push(Section {
                        name: line.to_string(),
                        lines: Vec::new(),
                    });
                    plan.sections.len() - 1
                }
            };
            current = Some(index);
            continue;
        }

        match current {
            Some(index) => plan.sections[index].lines.push(line.to_string()),
            None => plan.preamble.push(line.to_string()),
        }
    }

    plan
}
