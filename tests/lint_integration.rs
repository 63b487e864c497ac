//! Integration tests for the lint checks

use layout_mockup::{
    render_with_config, render_with_lint, LintCategory, Mockup, OutputFormat, RenderConfig,
    Stylesheet,
};

fn load(source: &str) -> Mockup {
    Mockup::from_str(source, &Stylesheet::default()).expect("Should load")
}

#[test]
fn test_true_positives_all_categories() {
    let mockup = load(include_str!("fixtures/overlapping.toml"));
    let config = RenderConfig::new()
        .with_format(OutputFormat::Svg)
        .with_lint(true);
    let (svg, warnings) =
        render_with_lint(&mockup.regions, mockup.canvas, &config).expect("Should render");

    // Image is still produced
    assert!(!svg.is_empty());

    let categories: Vec<LintCategory> = warnings.iter().map(|w| w.category).collect();
    assert_eq!(
        categories,
        vec![LintCategory::Overlap, LintCategory::Label],
        "Unexpected warnings: {:?}",
        warnings
    );
    assert!(warnings[0].message.contains("\"Back\" and \"Front\""));
    assert!(warnings[0].message.contains("24 square units"));
    assert!(warnings[1].message.contains("\"Badge\""));
}

#[test]
fn test_dashboard_is_clean() {
    let mockup = Mockup::dashboard();
    let config = RenderConfig::new()
        .with_format(OutputFormat::Svg)
        .with_lint(true);
    let (_, warnings) =
        render_with_lint(&mockup.regions, mockup.canvas, &config).expect("Should render");

    assert!(
        warnings.is_empty(),
        "Expected no warnings for the dashboard, got: {:?}",
        warnings.iter().map(|w| w.to_string()).collect::<Vec<_>>()
    );
}

#[test]
fn test_lint_disabled_no_warnings() {
    let mockup = load(include_str!("fixtures/overlapping.toml"));
    // lint: false (default)
    let config = RenderConfig::new().with_format(OutputFormat::Svg);
    let (_, warnings) =
        render_with_lint(&mockup.regions, mockup.canvas, &config).expect("Should render");

    assert!(warnings.is_empty(), "Lint disabled should produce no warnings");
}

#[test]
fn test_render_with_config_still_works() {
    let mockup = load(include_str!("fixtures/overlapping.toml"));
    let config = RenderConfig::new()
        .with_format(OutputFormat::Svg)
        .with_lint(true);
    let svg = render_with_config(&mockup.regions, mockup.canvas, &config).expect("Should render");
    assert!(String::from_utf8(svg).unwrap().contains("<svg"));
}

#[test]
fn test_lint_warning_format() {
    let mockup = load(include_str!("fixtures/overlapping.toml"));
    let config = RenderConfig::new()
        .with_format(OutputFormat::Svg)
        .with_lint(true);
    let (_, warnings) =
        render_with_lint(&mockup.regions, mockup.canvas, &config).expect("Should render");

    for w in &warnings {
        let text = w.to_string();
        assert!(
            text.starts_with("warning[overlap]: ") || text.starts_with("warning[label]: "),
            "Unexpected format: {}",
            text
        );
        assert!(!w.message.is_empty(), "Warning message should not be empty");
    }
}

#[test]
fn test_out_of_bounds_fixture_fails_before_lint() {
    let mockup = load(include_str!("fixtures/out-of-bounds.toml"));
    let config = RenderConfig::new().with_lint(true);
    let err = render_with_lint(&mockup.regions, mockup.canvas, &config).unwrap_err();
    assert!(err.is_validation());
    assert!(err.to_string().contains("Too Wide"));
}
