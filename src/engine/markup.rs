//! Minimaler Markup-Leser: baut aus RML-Text den Element-Baum auf.
//!
//! Layout, Styles und Textinhalte werden nicht ausgewertet.

use crate::core::{ElementId, ElementTree, LoadError};
use quick_xml::events::{BytesStart, Event};
use quick_xml::Reader;

fn xml_error(reader: &Reader<&[u8]>, err: impl std::fmt::Display) -> LoadError {
    LoadError::new(format!("{} (Position {})", err, reader.buffer_position()))
}

/// Liest Tag, `id` und `class` eines Start-/Empty-Tags.
fn read_element(
    reader: &Reader<&[u8]>,
    e: &BytesStart<'_>,
) -> Result<(String, Option<String>, Vec<String>), LoadError> {
    let name = e.name();
    let tag = reader
        .decoder()
        .decode(name.as_ref())
        .map_err(|err| xml_error(reader, err))?
        .into_owned();

    let mut dom_id = None;
    let mut classes = Vec::new();
    for attr in e.attributes().with_checks(false) {
        let attr = attr.map_err(|err| xml_error(reader, err))?;
        let key = reader
            .decoder()
            .decode(attr.key.as_ref())
            .map_err(|err| xml_error(reader, err))?;
        match key.as_ref() {
            "id" => {
                let value = attr
                    .unescape_value()
                    .map_err(|err| xml_error(reader, err))?;
                dom_id = Some(value.into_owned());
            }
            "class" => {
                let value = attr
                    .unescape_value()
                    .map_err(|err| xml_error(reader, err))?;
                classes = value.split_whitespace().map(str::to_string).collect();
            }
            _ => {}
        }
    }
    Ok((tag, dom_id, classes))
}

/// Parst Markup-Text in einen Element-Baum.
///
/// Fehler: fehlerhaftes XML, kein oder mehrere Wurzelelemente, offene Tags.
pub fn parse_markup(text: &str) -> Result<ElementTree, LoadError> {
    let mut reader = Reader::from_str(text);
    reader.config_mut().trim_text(true);

    let mut tree = ElementTree::new();
    let mut stack: Vec<ElementId> = Vec::new();
    let mut buffer = Vec::new();

    loop {
        let event = reader
            .read_event_into(&mut buffer)
            .map_err(|err| xml_error(&reader, err))?;
        match event {
            Event::Start(ref e) | Event::Empty(ref e) => {
                let parent = stack.last().copied();
                if parent.is_none() && !tree.is_empty() {
                    return Err(LoadError::new("multiple root elements"));
                }
                let (tag, dom_id, classes) = read_element(&reader, e)?;
                let id = tree.push(parent, tag, dom_id, classes);
                if matches!(event, Event::Start(_)) {
                    stack.push(id);
                }
            }
            Event::End(_) => {
                stack.pop();
            }
            Event::Eof => break,
            _ => {}
        }
        buffer.clear();
    }

    if let Some(open) = stack.last().and_then(|id| tree.get(*id)) {
        return Err(LoadError::new(format!("unclosed element <{}>", open.tag)));
    }
    if tree.is_empty() {
        return Err(LoadError::new("document has no root element"));
    }
    Ok(tree)
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r#"<rml>
        <head><title>Demo</title><style>body { width: 100%; }</style></head>
        <body class="window main">
            <div id="menu"><button id="start">Start</button></div>
            <img src="logo.png"/>
        </body>
    </rml>"#;

    #[test]
    fn builds_tree_with_ids_and_classes() {
        let tree = parse_markup(SAMPLE).expect("gültiges Markup");
        assert_eq!(tree.len(), 8);
        let start = tree.find_by_dom_id("start").expect("button#start");
        assert_eq!(tree.path(start), "rml > body.window.main > div#menu > button#start");
    }

    #[test]
    fn mismatched_end_tag_is_load_error() {
        let result = parse_markup("<rml><body></div></rml>");
        assert!(result.is_err());
    }

    #[test]
    fn unclosed_element_is_load_error() {
        assert!(parse_markup("<rml><body>").is_err());
    }

    #[test]
    fn empty_text_is_load_error() {
        let err = parse_markup("   ").expect_err("kein Wurzelelement");
        assert!(err.message.contains("no root"));
    }

    #[test]
    fn second_root_is_load_error() {
        assert!(parse_markup("<rml/><rml/>").is_err());
    }
}
