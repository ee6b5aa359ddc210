//! Pretty-printing of SVG markup for display.

use std::sync::LazyLock;

use regex::Regex;

use crate::log::debug;

static TAG_BOUNDARY: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r">\s*<").expect("valid regex"));

static PRESERVE_OPEN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"<([A-Za-z_][\w:.-]*)\b[^>]*\sxml:space\s*=\s*["']preserve["'][^>]*>"#)
        .expect("valid regex")
});

/// An empty root collapses back to one line, with or without attributes.
static EMPTY_SVG: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(<svg\b[^>]*>)\n(</svg>)$").expect("valid regex"));

/// Widest indent step honored; larger `indent_size` values are clamped.
pub const MAX_INDENT_SIZE: usize = 16;

/// Formatting options.
#[derive(Debug, Clone)]
pub struct FormatOptions {
    /// Spaces per nesting level (default: 2)
    pub indent_size: usize,
    /// Keep the content of `xml:space="preserve"` elements untouched
    pub preserve_whitespace: bool,
}

impl Default for FormatOptions {
    fn default() -> Self {
        Self {
            indent_size: 2,
            preserve_whitespace: true,
        }
    }
}

/// Format an SVG string with default settings.
///
/// `None` and the empty string both format to the empty string.
pub fn format_svg<'a>(svg: impl Into<Option<&'a str>>) -> String {
    format_svg_with_options(svg, &FormatOptions::default())
}

/// Format an SVG string, one tag per line, children indented one level
/// deeper than their parent.
pub fn format_svg_with_options<'a>(
    svg: impl Into<Option<&'a str>>,
    options: &FormatOptions,
) -> String {
    let Some(svg) = svg.into() else {
        return String::new();
    };
    let svg = svg.trim();
    if svg.is_empty() {
        return String::new();
    }

    let indent_size = options.indent_size.clamp(1, MAX_INDENT_SIZE);

    let (body, preserved) = if options.preserve_whitespace {
        stash_preserved(svg)
    } else {
        (svg.to_string(), Vec::new())
    };

    let mut lines = Vec::new();
    let mut depth = 0usize;
    for line in split_tags(&body) {
        if is_closing_tag(line) && depth > 0 {
            depth -= 1;
        }
        lines.push(format!("{}{}", " ".repeat(indent_size.saturating_mul(depth)), line));
        if is_opening_tag(line) {
            depth += 1;
        }
    }

    let joined = lines.join("\n");
    let mut out = EMPTY_SVG.replace(&joined, "$1$2").into_owned();

    for (token, content) in &preserved {
        out = out.replacen(token.as_str(), content, 1);
    }

    debug!(lines = lines.len(), preserved = preserved.len(), "formatted svg");
    out
}

/// Swap the content of every `xml:space="preserve"` element for a token.
///
/// Tokens are keyed by the source offset of the content so identical
/// elements get distinct tokens.
fn stash_preserved(svg: &str) -> (String, Vec<(String, String)>) {
    let mut body = String::with_capacity(svg.len());
    let mut preserved = Vec::new();
    let mut pos = 0;

    while let Some(caps) = PRESERVE_OPEN.captures_at(svg, pos) {
        let (Some(open), Some(name)) = (caps.get(0), caps.get(1)) else {
            break;
        };
        if open.as_str().ends_with("/>") {
            body.push_str(&svg[pos..open.end()]);
            pos = open.end();
            continue;
        }

        let close_tag = format!("</{}>", name.as_str());
        let Some(close) = svg[open.end()..].find(&close_tag) else {
            break;
        };
        let content_end = open.end() + close;
        let content = &svg[open.end()..content_end];

        body.push_str(&svg[pos..open.end()]);
        if content.is_empty() {
            pos = open.end();
            continue;
        }

        let token = format!("\u{E000}{}\u{E001}", open.end());
        body.push_str(&token);
        preserved.push((token, content.to_string()));
        pos = content_end;
    }

    body.push_str(&svg[pos..]);
    (body, preserved)
}

/// Split markup at every `>`/`<` pair separated only by whitespace.
fn split_tags(body: &str) -> Vec<&str> {
    let mut lines = Vec::new();
    let mut start = 0;
    for boundary in TAG_BOUNDARY.find_iter(body) {
        lines.push(body[start..boundary.start() + 1].trim());
        start = boundary.end() - 1;
    }
    lines.push(body[start..].trim());
    lines
}

fn is_closing_tag(line: &str) -> bool {
    line.starts_with("</")
}

/// An opening tag whose children follow on later lines.
fn is_opening_tag(line: &str) -> bool {
    let mut chars = line.chars();
    chars.next() == Some('<')
        && chars.next().is_some_and(|c| c.is_ascii_alphabetic() || c == '_')
        && !line.ends_with("/>")
        && !line.contains("</")
}
