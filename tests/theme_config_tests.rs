use chart_canvas::ChartError;
use chart_canvas::core::ExtentTuning;
use chart_canvas::render::Color;
use chart_canvas::theme::ChartTheme;

#[test]
fn partial_json_overrides_only_named_fields() {
    let theme = ChartTheme::from_json(
        r##"{
            "background": "#101010",
            "crosshair": { "dash": [2.0, 2.0] },
            "extent": { "top_padding_ratio": 0.3 }
        }"##,
    )
    .expect("valid theme");

    let defaults = ChartTheme::default();
    assert_eq!(theme.background, Color::from_rgb8(0x10, 0x10, 0x10));
    assert_eq!(theme.crosshair.dash, vec![2.0, 2.0]);
    assert_eq!(theme.crosshair.color, defaults.crosshair.color);
    assert_eq!(theme.extent.top_padding_ratio, 0.3);
    assert_eq!(
        theme.extent.bottom_padding_ratio,
        ExtentTuning::default().bottom_padding_ratio
    );
    assert_eq!(theme.candle, defaults.candle);
    assert_eq!(theme.no_data.message, "Market opened");
}

#[test]
fn default_theme_pads_ten_percent_below_twenty_above() {
    let theme = ChartTheme::default();
    assert_eq!(theme.extent.bottom_padding_ratio, 0.10);
    assert_eq!(theme.extent.top_padding_ratio, 0.20);
    assert!(theme.validate().is_ok());
}

#[test]
fn invalid_values_are_config_errors() {
    let bad_color = ChartTheme::from_json(r#"{ "background": "not-a-color" }"#);
    assert!(matches!(bad_color, Err(ChartError::Config(_))));

    let bad_width = ChartTheme::from_json(r#"{ "grid": { "line_width": 0.0 } }"#);
    assert!(matches!(bad_width, Err(ChartError::Config(_))));

    let bad_dash = ChartTheme::from_json(r#"{ "crosshair": { "dash": [-1.0] } }"#);
    assert!(matches!(bad_dash, Err(ChartError::Config(_))));

    let bad_padding = ChartTheme::from_json(r#"{ "extent": { "top_padding_ratio": -0.5 } }"#);
    assert!(matches!(bad_padding, Err(ChartError::Config(_))));
}

#[test]
fn serialized_theme_loads_back() {
    let json = ChartTheme::default().to_json().expect("serialize");
    assert!(json.contains("\"background\": \"#"));
    let reloaded = ChartTheme::from_json(&json).expect("reload");
    assert_eq!(reloaded.candle, ChartTheme::default().candle);
    assert_eq!(reloaded.crosshair.dash, ChartTheme::default().crosshair.dash);
}
