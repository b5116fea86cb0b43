//! Locates and decodes the station details table on a CDEC staMeta page.
//!
//! The page carries no semantic markup for station metadata: a cell whose
//! first child is a bold element holds a field name, and the non-bold cells
//! that follow hold its value. Decoding walks the raw document tree and
//! rebuilds the field/value mapping from that convention.

use ego_tree::NodeRef;
use scraper::{Html, Node};

#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum DecodeError {
    #[error("metadata table has no body section")]
    MissingBody,
    #[error("metadata table cell has no readable content")]
    EmptyCell,
}

/// Collects every `table` element in the document, in document order.
/// A nested table appears after the table that contains it.
pub fn find_tables(document: &Html) -> Vec<NodeRef<'_, Node>> {
    document
        .tree
        .root()
        .descendants()
        .filter(|node| is_element(node, "table"))
        .collect()
}

/// Key tracking carried across cells and rows. The key is never reset at a
/// row boundary; a value cell seen before any key cell lands under the
/// empty-string key, matching how the upstream page degrades.
enum KeyState {
    NoKey,
    Key(String),
}

impl KeyState {
    fn as_str(&self) -> &str {
        match self {
            KeyState::NoKey => "",
            KeyState::Key(key) => key,
        }
    }
}

/// Rebuilds the ordered field/value mapping from one metadata table.
///
/// Keys keep the position where they first appeared; a key that receives
/// more than one value keeps the last one.
pub fn decode_metadata_table(
    table: NodeRef<'_, Node>,
) -> Result<Vec<(String, String)>, DecodeError> {
    let body = table
        .children()
        .find(|node| is_element(node, "tbody"))
        .ok_or(DecodeError::MissingBody)?;

    let mut fields: Vec<(String, String)> = Vec::new();
    let mut state = KeyState::NoKey;

    for row in body.children().filter(|node| node.value().is_element()) {
        for cell in row.children().filter(|node| node.value().is_element()) {
            let content = cell.first_child().ok_or(DecodeError::EmptyCell)?;

            if is_element(&content, "b") || is_element(&content, "strong") {
                state = KeyState::Key(first_text(&content).ok_or(DecodeError::EmptyCell)?);
            } else {
                let value = content_text(&content).ok_or(DecodeError::EmptyCell)?;
                upsert(&mut fields, state.as_str(), value);
            }
        }
    }

    Ok(fields)
}

fn is_element(node: &NodeRef<'_, Node>, tag: &str) -> bool {
    node.value()
        .as_element()
        .map_or(false, |element| element.name() == tag)
}

/// Text of a cell's first content node: a text node directly, or the first
/// text inside an element node. Later siblings and deeper nesting are not
/// captured.
fn content_text(node: &NodeRef<'_, Node>) -> Option<String> {
    match node.value() {
        Node::Text(text) => Some(text.text.to_string()),
        Node::Element(_) => first_text(node),
        _ => None,
    }
}

fn first_text(node: &NodeRef<'_, Node>) -> Option<String> {
    node.children()
        .find_map(|child| child.value().as_text().map(|text| text.text.to_string()))
}

fn upsert(fields: &mut Vec<(String, String)>, key: &str, value: String) {
    match fields.iter_mut().find(|(existing, _)| existing.as_str() == key) {
        Some(entry) => entry.1 = value,
        None => fields.push((key.to_string(), value)),
    }
}

// -- Tests -------------------------------------------------------------------
