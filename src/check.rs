//! XML well-formedness probe.

use quick_xml::Reader;
use quick_xml::events::{BytesStart, Event};

/// Whether `svg` parses as a single well-formed XML element tree.
///
/// Used to detect a pass that broke previously valid markup.
pub fn is_well_formed(svg: &str) -> bool {
    let mut reader = Reader::from_str(svg);
    reader.config_mut().check_end_names = true;

    let mut depth = 0usize;
    let mut roots = 0usize;

    loop {
        match reader.read_event() {
            Ok(Event::Start(start)) => {
                if !attributes_ok(&start) {
                    return false;
                }
                if depth == 0 {
                    roots += 1;
                }
                depth += 1;
            }
            Ok(Event::Empty(start)) => {
                if !attributes_ok(&start) {
                    return false;
                }
                if depth == 0 {
                    roots += 1;
                }
            }
            Ok(Event::End(_)) => {
                if depth == 0 {
                    return false;
                }
                depth -= 1;
            }
            Ok(Event::Text(text)) => {
                if depth == 0 && !text.iter().all(u8::is_ascii_whitespace) {
                    return false;
                }
            }
            Ok(Event::Eof) => return depth == 0 && roots == 1,
            Ok(_) => {}
            Err(_) => return false,
        }
    }
}

fn attributes_ok(start: &BytesStart<'_>) -> bool {
    start.attributes().all(|attr| attr.is_ok())
}
