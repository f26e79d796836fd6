//! Properties of parsing and canonicalization that hold across many inputs

use timing_fn::{parse, EasingFunction, InvalidSyntax, TimingKeyword};

/// Inputs that parse, in assorted spellings
const VALID_INPUTS: &[&str] = &[
    "ease",
    "linear",
    "ease-in",
    "ease-out",
    "ease-in-out",
    "step-start",
    "step-end",
    "steps(1)",
    "steps(1, start)",
    "steps(12, end)",
    "steps(+7,start)",
    "cubic-bezier(0, 0, 1, 1)",
    "cubic-bezier(0.1, -0.2, 0.3, -0.4)",
    "cubic-bezier(0.1, 1.2, 0.3, 1.4)",
    "cubic-bezier(.5, 2e1, 1.0, -3.25)",
    "cubic-bezier( 0.68 , -0.55 , 0.265 , 1.55 )",
    "cubic-bezier(1, -1000000, 0, 1000000)",
];

/// Keyword spellings and their written-out equivalents
const KEYWORD_EXPANSIONS: &[(&str, &str)] = &[
    ("ease", "cubic-bezier(0.25, 0.1, 0.25, 1)"),
    ("linear", "cubic-bezier(0, 0, 1, 1)"),
    ("ease-in", "cubic-bezier(0.42, 0, 1, 1)"),
    ("ease-out", "cubic-bezier(0, 0, 0.58, 1)"),
    ("ease-in-out", "cubic-bezier(0.42, 0, 0.58, 1)"),
    ("step-start", "steps(1, start)"),
    ("step-end", "steps(1, end)"),
];

#[test]
fn test_canonical_form_reparses_to_same_value() {
    for input in VALID_INPUTS {
        let value = parse(input).unwrap_or_else(|e| panic!("'{}' should parse: {}", input, e));
        let canonical = value.to_canonical_string();
        let reparsed = parse(&canonical)
            .unwrap_or_else(|e| panic!("canonical '{}' should parse: {}", canonical, e));
        assert_eq!(reparsed, value, "{} -> {}", input, canonical);
        assert_eq!(reparsed.to_canonical_string(), canonical);
    }
}

#[test]
fn test_keywords_equal_their_expansions() {
    for (keyword, expanded) in KEYWORD_EXPANSIONS {
        assert_eq!(parse(keyword).unwrap(), parse(expanded).unwrap(), "{}", keyword);
    }
    assert_eq!(KEYWORD_EXPANSIONS.len(), TimingKeyword::ALL.len());
}

#[test]
fn test_x_boundaries_with_arbitrary_y() {
    for y in [-1e9, -2.5, -1.0, 0.0, 0.5, 1.0, 3.75, 1e9] {
        let text = format!("cubic-bezier(0, {}, 1, {})", y, y);
        assert!(parse(&text).is_ok(), "{} should be valid", text);
    }
    for text in ["cubic-bezier(-0.0001, 0, 0.5, 1)", "cubic-bezier(0.5, 0, 1.0001, 1)"] {
        assert!(
            matches!(parse(text), Err(InvalidSyntax::ControlPointOutOfRange { .. })),
            "{} should be out of range",
            text
        );
    }
}

#[test]
fn test_steps_count_boundary() {
    assert_eq!(parse("steps(1, end)").unwrap().to_canonical_string(), "steps(1)");
    assert!(parse("steps(0, end)").is_err());
    assert!(parse("steps(-3, end)").is_err());
    assert!(parse("steps(3.3, end)").is_err());
    assert!(parse("steps(3, top)").is_err());
}

#[test]
fn test_formatting_does_not_change_the_value() {
    let spellings = [
        "cubic-bezier(0.5, 0, 1, 1)",
        "cubic-bezier(0.5,0,1,1)",
        "  cubic-bezier(\t.5 ,0.0, 1.000 ,+1 )\n",
        "cubic-bezier(5e-1, 0e0, 1E0, 100e-2)",
        "cubic-bezier(0.5,/**/0,/* x2 */1,1)",
        "/* lead */cubic-bezier(0.5, 0, 1, 1)/* trail */",
        "\x0ccubic-bezier(\r\n0.5,\x0c0,\r1,\n1)\r\n",
        "cubic-bezier(0.5, 0, 1, 1",
    ];
    let values: Vec<EasingFunction> = spellings.iter().map(|s| parse(s).unwrap()).collect();
    for value in &values {
        assert_eq!(value.to_canonical_string(), "cubic-bezier(0.5, 0, 1, 1)");
    }
}

#[test]
fn test_non_css_whitespace_is_rejected() {
    for text in [
        "\u{a0}ease",
        "ease\u{a0}",
        "cubic-bezier(0.5,\u{a0}0, 1, 1)",
        "steps(3,\u{a0}start)",
        "\u{feff}linear",
    ] {
        assert!(parse(text).is_err(), "{:?} should be rejected", text);
    }
}

#[test]
fn test_extreme_magnitudes_round_trip_compactly() {
    for text in ["cubic-bezier(0, 1e308, 1, 1)", "cubic-bezier(1e-300, -1e300, 1, 1)"] {
        let value = parse(text).unwrap();
        let canonical = value.to_canonical_string();
        assert!(canonical.len() < 48, "{} -> {}", text, canonical);
        assert_eq!(parse(&canonical).unwrap(), value);
    }
}

#[test]
fn test_parse_is_deterministic_across_threads() {
    let handles: Vec<_> = (0..4)
        .map(|_| {
            std::thread::spawn(|| {
                VALID_INPUTS.iter().map(|s| parse(s).unwrap().to_canonical_string()).collect::<Vec<_>>()
            })
        })
        .collect();
    let results: Vec<Vec<String>> = handles.into_iter().map(|h| h.join().unwrap()).collect();
    for window in results.windows(2) {
        assert_eq!(window[0], window[1]);
    }
}
