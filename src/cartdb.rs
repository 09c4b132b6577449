use super::SimpleResult;
use super::model::*;
use super::util::*;
use quick_xml::Reader;
use quick_xml::events::{BytesStart, Event};
use simple_error::SimpleError;
use std::io::{BufRead, BufReader};
use std::path::Path;

pub fn parse_cartdb_file<P: AsRef<Path>>(path: &P) -> SimpleResult<Node> {
    let file = open_file(path)?;
    parse_cartdb(BufReader::new(file))
}

/// Builds the element tree of a cartridge database document.
///
/// Only elements and their attributes are kept. Text, comments, processing
/// instructions and the declaration are skipped.
pub fn parse_cartdb<R: BufRead>(reader: R) -> SimpleResult<Node> {
    let mut reader = Reader::from_reader(reader);
    let mut buffer = Vec::new();
    let mut stack: Vec<Node> = Vec::new();
    let mut root: Option<Node> = None;

    loop {
        let event = try_with!(
            reader.read_event_into(&mut buffer),
            "Failed to parse document at position {}",
            reader.buffer_position()
        );
        match event {
            Event::Start(element) => stack.push(parse_element(&element)?),
            Event::Empty(element) => {
                let node = parse_element(&element)?;
                attach_node(&mut stack, &mut root, node)?;
            }
            Event::End(_) => match stack.pop() {
                Some(node) => attach_node(&mut stack, &mut root, node)?,
                None => bail!("Unexpected closing tag"),
            },
            Event::Eof => break,
            _ => (),
        }
        buffer.clear();
    }

    if let Some(node) = stack.last() {
        bail!("Unexpected end of document, <{}> is not closed", node.name);
    }

    root.ok_or_else(|| SimpleError::new("Document has no root element"))
}

fn parse_element(element: &BytesStart) -> SimpleResult<Node> {
    let name = String::from_utf8_lossy(element.name().as_ref()).into_owned();
    let mut node = Node {
        name,
        ..Default::default()
    };
    for attribute in element.attributes() {
        let attribute = try_with!(attribute, "Malformed attribute in <{}>", node.name);
        let key = String::from_utf8_lossy(attribute.key.as_ref()).into_owned();
        let value = try_with!(
            attribute.unescape_value(),
            "Failed to unescape attribute {} in <{}>",
            key,
            node.name
        );
        node.attributes.insert(key, value.into_owned());
    }
    Ok(node)
}

fn attach_node(stack: &mut [Node], root: &mut Option<Node>, node: Node) -> SimpleResult<()> {
    match stack.last_mut() {
        Some(parent) => parent.children.push(node),
        None => {
            if root.is_some() {
                bail!("Unexpected second root element <{}>", node.name);
            }
            *root = Some(node);
        }
    }
    Ok(())
}
