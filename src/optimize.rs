//! SVG optimization passes.
//!
//! Every pass is a plain text transform over the markup. They run in a fixed
//! order and later passes rely on the earlier ones: rounding assumes
//! whitespace has been collapsed, command collapsing compares the rounded
//! operands textually.

use std::borrow::Cow;
use std::sync::LazyLock;

use regex::{Captures, Regex};

use crate::Options;
use crate::log::{debug, pass_delta};
use crate::number::round_decimal;

static XML_DECLARATION: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?s)<\?xml.*?\?>").expect("valid regex"));

static COMMENT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?s)<!--.*?-->").expect("valid regex"));

static WHITESPACE_RUN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s+").expect("valid regex"));

static DECIMAL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[-+]?[0-9]+\.[0-9]+").expect("valid regex"));

static PATH_DATA_ATTR: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?P<pre>(?:^|\s)d\s*=\s*)(?:"(?P<dq>[^"]*)"|'(?P<sq>[^']*)')"#)
        .expect("valid regex")
});

/// An absolute command letter followed by one operand pair.
static COMMAND_PAIR: LazyLock<Regex> = LazyLock::new(|| {
    let num = r"[-+]?(?:[0-9]+\.?[0-9]*|\.[0-9]+)(?:[eE][-+]?[0-9]+)?";
    Regex::new(&format!(r"([MLHVCSQTAZ])[\s,]*({num})[\s,]*({num})")).expect("valid regex")
});

static TAG: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"<[^<>]*>").expect("valid regex"));

static EMPTY_ATTR: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"\s+[A-Za-z-]+\s*=\s*(?:""|'')"#).expect("valid regex"));

/// Apply all enabled passes, in order, to an SVG string.
pub fn run_passes(svg: &str, options: &Options) -> String {
    let mut out = svg.to_string();

    if options.remove_xml_declaration || options.remove_comments {
        out = apply("strip_non_visual", out, |s| {
            strip_markup(s, options.remove_xml_declaration, options.remove_comments)
        });
    }

    if options.collapse_whitespace {
        out = apply("collapse_whitespace", out, collapse_whitespace);
    }

    if options.round_coordinates {
        out = apply("round_coordinates", out, |s| {
            round_coordinates(s, options.precision)
        });
    }

    if options.remove_redundant_commands {
        out = apply("remove_redundant_commands", out, remove_redundant_commands);
    }

    if options.remove_empty_attributes {
        out = apply("remove_empty_attributes", out, remove_empty_attributes);
    }

    let out = out.trim().to_string();
    debug!(before = svg.len(), after = out.len(), "optimized svg");
    out
}

fn apply(name: &'static str, input: String, pass: impl FnOnce(&str) -> String) -> String {
    let output = pass(&input);
    pass_delta(name, input.len(), output.len());
    output
}

/// Remove `<?xml ...?>` declarations and `<!-- ... -->` comments.
pub fn strip_non_visual(svg: &str) -> String {
    strip_markup(svg, true, true)
}

fn strip_markup(svg: &str, declarations: bool, comments: bool) -> String {
    let mut out = Cow::Borrowed(svg);
    if declarations {
        out = Cow::Owned(XML_DECLARATION.replace_all(&out, "").into_owned());
    }
    if comments {
        out = Cow::Owned(COMMENT.replace_all(&out, "").into_owned());
    }
    out.into_owned()
}

/// Collapse every whitespace run to one space, then drop the space between
/// adjacent tags entirely.
pub fn collapse_whitespace(svg: &str) -> String {
    let collapsed = WHITESPACE_RUN.replace_all(svg, " ");
    collapsed.replace("> <", "><")
}

/// Rewrite every decimal literal to exactly `decimal_places` fractional
/// digits. Integers are left alone.
pub fn round_coordinates(svg: &str, decimal_places: u8) -> String {
    DECIMAL
        .replace_all(svg, |caps: &Captures<'_>| round_decimal(&caps[0], decimal_places))
        .into_owned()
}

/// Collapse an absolute path command repeated with the same operand pair,
/// e.g. `L20 20 L20 20` becomes `L20 20`.
///
/// Runs of any length collapse to one occurrence. Only the contents of `d`
/// attributes are touched; input with no markup at all is treated as bare
/// path data.
pub fn remove_redundant_commands(svg: &str) -> String {
    if !svg.contains('<') {
        return collapse_path_data(svg).into_owned();
    }

    PATH_DATA_ATTR
        .replace_all(svg, |caps: &Captures<'_>| {
            let pre = caps.name("pre").map_or("", |m| m.as_str());
            if let Some(value) = caps.name("dq") {
                format!("{pre}\"{}\"", collapse_path_data(value.as_str()))
            } else if let Some(value) = caps.name("sq") {
                format!("{pre}'{}'", collapse_path_data(value.as_str()))
            } else {
                caps[0].to_string()
            }
        })
        .into_owned()
}

fn collapse_path_data(d: &str) -> Cow<'_, str> {
    struct Pair<'a> {
        letter: &'a str,
        x: &'a str,
        y: &'a str,
        end: usize,
    }

    let mut out = String::new();
    let mut copied = 0;
    let mut prev: Option<Pair<'_>> = None;

    for caps in COMMAND_PAIR.captures_iter(d) {
        let (Some(whole), Some(letter), Some(x), Some(y)) =
            (caps.get(0), caps.get(1), caps.get(2), caps.get(3))
        else {
            continue;
        };

        // `L1 2 3 4` is two segments; only a lone pair is comparable.
        if starts_with_number(&d[whole.end()..]) {
            prev = None;
            continue;
        }

        if let Some(p) = prev.as_mut()
            && p.letter == letter.as_str()
            && p.x == x.as_str()
            && p.y == y.as_str()
            && d[p.end..whole.start()].chars().all(is_separator)
        {
            out.push_str(&d[copied..p.end]);
            copied = whole.end();
            p.end = whole.end();
            continue;
        }

        prev = Some(Pair {
            letter: letter.as_str(),
            x: x.as_str(),
            y: y.as_str(),
            end: whole.end(),
        });
    }

    if copied == 0 {
        return Cow::Borrowed(d);
    }
    out.push_str(&d[copied..]);
    Cow::Owned(out)
}

fn is_separator(c: char) -> bool {
    c.is_whitespace() || c == ','
}

fn starts_with_number(rest: &str) -> bool {
    rest.trim_start_matches(is_separator)
        .starts_with(|c: char| c.is_ascii_digit() || matches!(c, '.' | '-' | '+'))
}

/// Remove attributes whose value is empty, e.g. `fill=""` or `stroke=''`.
///
/// Only tags are touched; `a=""` in text content is text.
pub fn remove_empty_attributes(svg: &str) -> String {
    TAG.replace_all(svg, |caps: &Captures<'_>| EMPTY_ATTR.replace_all(&caps[0], "").into_owned())
        .into_owned()
}
