//! Integration tests for style resolution.

use gridglyph_style::prelude::*;
use gridglyph_style::style::STYLE_KEYS;

fn base_style() -> Style {
    Style {
        foreground: "#101010".to_string(),
        background: "#fafafa".to_string(),
        stroke: "#202020".to_string(),
        thickness: 2.0,
        radius: 4.0,
        padding: 1.0,
        margin: 0.0,
        width: 10.0,
        scale: 1.0,
        family: "Iosevka".to_string(),
        height: 14.0,
        weight: FontWeight::Numeric(300),
    }
}

/// Every single-field override touches exactly that field.
#[test]
fn test_each_override_replaces_one_field() {
    let resolver = StyleResolver::new();
    let base = base_style();

    let cases: Vec<(&str, StyleOverrides)> = vec![
        ("foreground", StyleOverrides::new().foreground("#ff0000")),
        ("background", StyleOverrides::new().background("#00ff00")),
        ("stroke", StyleOverrides::new().stroke("#0000ff")),
        ("thickness", StyleOverrides::new().thickness(0.5)),
        ("radius", StyleOverrides::new().radius(8.0)),
        ("padding", StyleOverrides::new().padding(3.0)),
        ("margin", StyleOverrides::new().margin(2.0)),
        ("width", StyleOverrides::new().width(40.0)),
        ("scale", StyleOverrides::new().scale(0.5)),
        ("family", StyleOverrides::new().family("Fira Code")),
        ("height", StyleOverrides::new().height(18.0)),
        ("weight", StyleOverrides::new().weight(800)),
    ];
    assert_eq!(cases.len(), STYLE_KEYS.len());

    for (key, overrides) in cases {
        let style = resolver.resolve(Some(&base), &overrides);
        let expected = overrides.apply_to(&base);
        assert_eq!(style, expected, "override of {key}");
        assert_ne!(style, base, "override of {key} had no effect");
    }
}

#[test]
fn test_full_override_replaces_everything() {
    let resolver = StyleResolver::new();
    let overrides = StyleOverrides::new()
        .foreground("#000001")
        .background("#000002")
        .stroke("#000003")
        .thickness(0.0)
        .radius(0.0)
        .padding(0.0)
        .margin(0.0)
        .width(1.0)
        .scale(2.0)
        .family("Mono")
        .height(9.0)
        .weight(100);

    let style = resolver.resolve(Some(&base_style()), &overrides);
    assert_eq!(style.foreground, "#000001");
    assert_eq!(style.background, "#000002");
    assert_eq!(style.stroke, "#000003");
    assert_eq!(style.thickness, 0.0);
    assert_eq!(style.width, 1.0);
    assert_eq!(style.family, "Mono");
    assert_eq!(style.weight, FontWeight::Numeric(100));
}

#[test]
fn test_weight_names_and_numbers() {
    let resolver = StyleResolver::new();

    let bold = resolver.resolve(None, &StyleOverrides::new().weight("bold"));
    assert_eq!(bold.weight, FontWeight::Numeric(700));

    let numeric = resolver.resolve(None, &StyleOverrides::new().weight(550));
    assert_eq!(numeric.weight, FontWeight::Numeric(550));

    let unknown = resolver.resolve(None, &StyleOverrides::new().weight("wobbly"));
    assert_eq!(unknown.weight, FontWeight::Named("wobbly".to_string()));
}

#[test]
fn test_color_normalization_is_idempotent() {
    let resolver = StyleResolver::new();
    let once = resolver.resolve(None, &StyleOverrides::new().foreground("teal"));
    let twice = resolver.resolve(Some(&once), &StyleOverrides::new());
    assert_eq!(once.foreground, "#008080");
    assert_eq!(once, twice);
}

#[test]
fn test_overrides_from_toml_resolve() {
    let resolver = StyleResolver::new();
    let overrides = StyleOverrides::from_toml_str(
        r#"
        foreground = "navy"
        weight = "semibold"
        radius = "round"
        "#,
    )
    .expect("valid TOML");

    let style = resolver.resolve(None, &overrides);
    assert_eq!(style.foreground, "#000080");
    assert_eq!(style.weight, FontWeight::Numeric(600));
    assert_eq!(style.radius, Style::default().radius);
}
