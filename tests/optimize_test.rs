//! End-to-end optimizer behavior.

use svgtidy::{Options, is_well_formed, optimize, optimize_with_options};

/// The canonical tracer artifact: long decimals, a duplicated segment and an
/// empty fill.
#[test]
fn test_tracer_output_example() {
    let svg = r#"<svg><path d="M10.123456 10.789012 L20.345678 20.901234 L20.345678 20.901234 Z" fill="" /></svg>"#;

    let optimized = optimize(svg);

    assert!(optimized.contains("M10.1 10.8"), "{optimized}");
    assert!(!optimized.contains("10.123456"));
    assert!(!optimized.contains(r#"fill="""#));
    assert_eq!(optimized.matches("L20.3 20.9").count(), 1, "{optimized}");
    assert_eq!(optimized, r#"<svg><path d="M10.1 10.8 L20.3 20.9 Z" /></svg>"#);
}

#[test]
fn test_removes_declaration_and_comments() {
    let svg = r#"<?xml version="1.0" encoding="UTF-8"?>
<!-- Generator: some tracer
     spanning lines -->
<svg xmlns="http://www.w3.org/2000/svg">
    <!-- inner -->
    <rect width="10" height="10"/>
</svg>"#;

    let optimized = optimize(svg);

    assert!(!optimized.contains("<?xml"));
    assert!(!optimized.contains("<!--"));
    assert_eq!(
        optimized,
        r#"<svg xmlns="http://www.w3.org/2000/svg"><rect width="10" height="10"/></svg>"#
    );
}

#[test]
fn test_inter_tag_whitespace_is_removed() {
    let optimized = optimize("<svg>\n\t<g>\n\t\t<rect/>\n\t</g>\n</svg>\n");
    assert_eq!(optimized, "<svg><g><rect/></g></svg>");
}

#[test]
fn test_precision_option() {
    let svg = r#"<svg><circle cx="1.23456" cy="-7.891" r="3"/></svg>"#;

    let two = optimize_with_options(
        svg,
        &Options {
            precision: 2,
            ..Options::default()
        },
    );
    assert_eq!(two, r#"<svg><circle cx="1.23" cy="-7.89" r="3"/></svg>"#);

    let zero = optimize_with_options(
        svg,
        &Options {
            precision: 0,
            ..Options::default()
        },
    );
    assert_eq!(zero, r#"<svg><circle cx="1" cy="-8" r="3"/></svg>"#);
}

#[test]
fn test_keep_comments_option() {
    let svg = "<svg><!-- keep --><rect/></svg>";
    let optimized = optimize_with_options(
        svg,
        &Options {
            remove_comments: false,
            ..Options::default()
        },
    );
    assert_eq!(optimized, svg);
}

#[test]
fn test_total_on_odd_input() {
    assert_eq!(optimize(""), "");
    assert_eq!(optimize("   \n  "), "");
    assert_eq!(optimize("not an svg 1.25"), "not an svg 1.3");
    assert_eq!(optimize("<svg><g"), "<svg><g");
}

#[test]
fn test_output_stays_well_formed() {
    let svg = r##"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 10.5 10.5">
        <path d="M 0.55 0.55 L 9.95 0.55 L 9.95 9.95 Z" stroke="" fill="#000"/>
    </svg>"##;
    assert!(is_well_formed(svg));

    let optimized = optimize(svg);
    assert!(is_well_formed(&optimized), "{optimized}");
    assert!(optimized.contains(r#"viewBox="0 0 10.5 10.5""#));
    assert!(optimized.contains("M 0.6 0.6 L 10.0 0.6 L 10.0 10.0 Z"), "{optimized}");
}

#[test]
fn test_idempotent_on_example() {
    let svg = r#"<?xml version="1.0"?>
<svg>
  <path d="M 1.05 2.95 M 1.05 2.95 L 3.333 4.444 L 3.333 4.444 L 3.333 4.444" class="" />
</svg>"#;
    let once = optimize(svg);
    assert_eq!(optimize(&once), once);
    assert_eq!(once, r#"<svg><path d="M 1.1 3.0 L 3.3 4.4" /></svg>"#);
}

#[test]
fn test_attribute_like_text_is_kept() {
    let svg = r#"<svg><g> a="" <rect/></g></svg>"#;
    let once = optimize(svg);
    assert_eq!(once, svg);
    assert_eq!(optimize(&once), once);
}
