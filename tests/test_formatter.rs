use nutrition_alert::formatter::{
    annotate_line, format_plan, render_section, split_sections, LineAnnotation, Macros,
};

const SAMPLE_PLAN: &str = "\
BREAKFAST
Ragi dosa with coconut chutney
Protein: 12g | Carbs: 45g | Fiber: 6g
Approximately 320 kcal
Tip: ferment the batter overnight for a softer dosa

MORNING SNACK
Sprouted moong sundal
150 calories

LUNCH
Brown rice, sambar and beans poriyal
Protein: 18g | Carbs: 70g | Fiber: 10g
520 kcal
Cook the beans lightly to keep them crunchy

EVENING SNACK
Buttermilk with roasted chana

DINNER
Two chapatis with palak dal
Protein: 20g | Carbs: 50g | Fiber: 9g
450 kcal

HYDRATION
Drink 8 to 10 glasses of water through the day
";

fn non_header_lines(text: &str) -> Vec<&str> {
    text.lines()
        .map(str::trim)
        .filter(|l| !l.is_empty())
        .filter(|l| !nutrition_alert::formatter::is_section_header(l))
        .collect()
}

#[test]
fn test_macro_line_renders_three_items() {
    assert_eq!(
        annotate_line("Protein: 25g | Carbs: 30g | Fiber: 5g"),
        LineAnnotation::MacroTriple(Macros {
            protein: "25".to_string(),
            carbs: "30".to_string(),
            fiber: "5".to_string(),
        })
    );

    let html = format_plan("LUNCH\nProtein: 25g | Carbs: 30g | Fiber: 5g");
    assert_eq!(html.matches("class=\"macro-item\"").count(), 3);
    assert!(html.contains("Protein</span><span class=\"macro-value\">25g"));
    assert!(html.contains("Carbs</span><span class=\"macro-value\">30g"));
    assert!(html.contains("Fiber</span><span class=\"macro-value\">5g"));
}

#[test]
fn test_example_line_classifications() {
    assert_eq!(
        annotate_line("This meal has 350 kcal"),
        LineAnnotation::CalorieCount("350".to_string())
    );
    assert!(matches!(
        annotate_line("Tip: soak the lentils overnight"),
        LineAnnotation::PreparationTip(_)
    ));
    assert!(matches!(
        annotate_line("Rice and dal with a side of pickle"),
        LineAnnotation::PlainText(_)
    ));
}

#[test]
fn test_two_section_example() {
    let text = "BREAKFAST\nIdli and sambar\n200 kcal\nLUNCH\nRice and curry\n400 kcal";
    let plan = split_sections(text);

    let names: Vec<&str> = plan.sections.iter().map(|s| s.name.as_str()).collect();
    assert_eq!(names, vec!["BREAKFAST", "LUNCH"]);

    for section in &plan.sections {
        let annotations: Vec<LineAnnotation> =
            section.lines.iter().map(|l| annotate_line(l)).collect();
        assert_eq!(annotations.len(), 2);
        assert!(matches!(annotations[0], LineAnnotation::PlainText(_)));
        assert!(matches!(annotations[1], LineAnnotation::CalorieCount(_)));
    }

    let html = format_plan(text);
    assert!(html.contains("<p>Idli and sambar</p>"));
    assert!(html.contains("<div class=\"calorie-info\">200 calories</div>"));
    assert!(html.contains("<p>Rice and curry</p>"));
    assert!(html.contains("<div class=\"calorie-info\">400 calories</div>"));
}

#[test]
fn test_no_headers_falls_back_to_single_paragraph() {
    let html = format_plan("Eat a balanced diet today.");
    assert_eq!(html, "<p>Eat a balanced diet today.</p>");
    assert!(!html.contains("meal-section"));
}

#[test]
fn test_every_content_line_is_rendered_once() {
    let plan = split_sections(SAMPLE_PLAN);
    let rendered: Vec<String> = plan
        .sections
        .iter()
        .flat_map(|section| render_section(section).lines)
        .collect();

    // One fragment per non-blank, non-header line
    assert_eq!(rendered.len(), non_header_lines(SAMPLE_PLAN).len());

    let html = format_plan(SAMPLE_PLAN);
    for fragment in &rendered {
        assert_eq!(html.matches(fragment.as_str()).count(), 1, "{fragment}");
    }
}

#[test]
fn test_sample_plan_structure() {
    let html = format_plan(SAMPLE_PLAN);

    assert_eq!(html.matches("class=\"meal-section\"").count(), 6);
    assert_eq!(html.matches("class=\"macro-box\"").count(), 3);
    assert_eq!(html.matches("class=\"calorie-info\"").count(), 4);
    assert_eq!(html.matches("class=\"prep-tip\"").count(), 2);

    let order = ["BREAKFAST", "MORNING SNACK", "LUNCH", "EVENING SNACK", "DINNER", "HYDRATION"];
    let positions: Vec<usize> = order
        .iter()
        .map(|name| html.find(&format!("</span> {}</h2>", name)).unwrap())
        .collect();
    assert!(positions.windows(2).all(|w| w[0] < w[1]));

    assert!(html.contains("<span class=\"meal-icon\">🥜</span> MORNING SNACK"));
    assert!(html.contains("<span class=\"meal-icon\">💧</span> HYDRATION"));
}

#[test]
fn test_formatting_is_idempotent() {
    assert_eq!(format_plan(SAMPLE_PLAN), format_plan(SAMPLE_PLAN));
    assert_eq!(format_plan("no headers"), format_plan("no headers"));
}
