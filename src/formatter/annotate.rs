use once_cell::sync::Lazy;
use regex::Regex;

static MACRO_TRIPLE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"(?i)protein:?\s*(\d+)\s*g.*carb(?:s|ohydrates?)?:?\s*(\d+)\s*g.*fib(?:er|re):?\s*(\d+)\s*g",
    )
    .expect("macro pattern is valid")
});

static CALORIES: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)(\d+)\s*(?:kcal|calories|cal)").expect("calorie pattern is valid"));

const TIP_KEYWORDS: [&str; 3] = ["tip", "prepare", "cook"];

/// Gram values of one macro line, kept as the digits the model wrote
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Macros {
    pub protein: String,
    pub carbs: String,
    pub fiber: String,
}

/// Classification of a single content line
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineAnnotation {
    MacroTriple(Macros),
    CalorieCount(String),
    PreparationTip(String),
    PlainText(String),
}

/// Classify a content line.
///
/// Checks run in a fixed priority: macro triple, calorie count, preparation
/// tip, plain text. The first match wins.
pub fn annotate_line(line: &str) -> LineAnnotation {
    if let Some(macros) = match_macro_triple(line) {
        return LineAnnotation::MacroTriple(macros);
    }
    if let Some(calories) = match_calories(line) {
        return LineAnnotation::CalorieCount(calories);
    }
    if is_preparation_tip(line) {
        return LineAnnotation::PreparationTip(line.to_string());
    }
    LineAnnotation::PlainText(line.to_string())
}

/// Protein, carbs and fiber grams, in that order on the line.
pub fn match_macro_triple(line: &str) -> Option<Macros> {
    let caps = MACRO_TRIPLE.captures(line)?;
    Some(Macros {
        protein: caps[1].to_string(),
        carbs: caps[2].to_string(),
        fiber: caps[3].to_string(),
    })
}

/// The first number followed by `kcal`, `calories` or `cal`.
pub fn match_calories(line: &str) -> Option<String> {
    CALORIES.captures(line).map(|caps| caps[1].to_string())
}

/// Whether the line contains any tip keyword, ignoring case.
pub fn is_preparation_tip(line: &str) -> bool {
    let lower = line.to_lowercase();
    TIP_KEYWORDS.iter().any(|keyword| lower.contains(keyword))
}
