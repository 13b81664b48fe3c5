//! Pull-based XML node stream with registry-driven entity resolution.
//!
//! Wraps a `quick_xml::Reader` and turns its events into owned [`Node`]s.
//! Text and attribute values are unescaped here, with entity references
//! resolved against the predefined XML entities first and the
//! [`EntityRegistry`] second. Any other reference aborts the decode with
//! [`JmdictError::UnresolvableEntity`].
//!
//! Declarations, the DOCTYPE (including its internal subset), comments and
//! processing instructions never reach the caller.

use std::io::{self, BufRead};
use std::sync::Arc;

use log::trace;
use quick_xml::escape::unescape_with;
use quick_xml::events::{BytesStart, Event};
use quick_xml::Reader;

use crate::jmdict::entities::EntityRegistry;
use crate::jmdict::types::error::{JmdictError, Result};

/// One structural step through the document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    Open {
        name: String,
        attrs: Vec<(String, String)>,
    },
    Text(String),
    Close(String),
    Eof,
}

impl Node {
    /// True for a text run made only of whitespace.
    pub fn is_blank(&self) -> bool {
        matches!(self, Node::Text(text) if text.trim().is_empty())
    }
}

pub struct XmlStream<'e, R> {
    reader: Reader<R>,
    buf: Vec<u8>,
    entities: &'e EntityRegistry,
    trim_text: bool,
    /// Close node owed for a self-closing tag that was reported as `Open`.
    pending_close: Option<String>,
}

impl<'e, R: BufRead> XmlStream<'e, R> {
    pub fn new(input: R, entities: &'e EntityRegistry, trim_text: bool) -> Self {
        let mut reader = Reader::from_reader(input);
        reader.config_mut().trim_text(trim_text);
        Self {
            reader,
            buf: Vec::new(),
            entities,
            trim_text,
            pending_close: None,
        }
    }

    /// Returns the next element boundary or text run.
    ///
    /// Whitespace-only text is dropped when trimming is on. Otherwise it is
    /// returned, and containers skip it with [`Node::is_blank`].
    pub fn next_node(&mut self) -> Result<Node> {
        if let Some(name) = self.pending_close.take() {
            return Ok(Node::Close(name));
        }

        let entities = self.entities;
        loop {
            self.buf.clear();
            let position = self.reader.buffer_position() as u64;
            let event = match self.reader.read_event_into(&mut self.buf) {
                Ok(event) => event,
                Err(quick_xml::Error::Io(e)) => {
                    let e = Arc::try_unwrap(e)
                        .unwrap_or_else(|shared| io::Error::new(shared.kind(), shared.to_string()));
                    return Err(JmdictError::Io(e));
                }
                Err(source) => {
                    return Err(JmdictError::Xml {
                        position: self.reader.buffer_position() as u64,
                        source,
                    });
                }
            };

            match event {
                Event::Start(e) => {
                    let (name, attrs) = open_tag(&e, entities, position)?;
                    return Ok(Node::Open { name, attrs });
                }
                Event::Empty(e) => {
                    let (name, attrs) = open_tag(&e, entities, position)?;
                    self.pending_close = Some(name.clone());
                    return Ok(Node::Open { name, attrs });
                }
                Event::End(e) => {
                    let name = utf8(e.name().as_ref(), "element name")?.to_string();
                    return Ok(Node::Close(name));
                }
                Event::Text(e) => {
                    let raw = utf8(&e, "text")?;
                    if self.trim_text && raw.trim().is_empty() {
                        continue;
                    }
                    return Ok(Node::Text(unescape(raw, entities, position)?));
                }
                Event::CData(e) => {
                    let text = utf8(&e, "CDATA section")?.to_string();
                    return Ok(Node::Text(text));
                }
                Event::Eof => return Ok(Node::Eof),
                _ => {}
            }
        }
    }

    /// Consumes everything up to and including the root start tag.
    pub fn expect_root(&mut self, root: &str) -> Result<()> {
        match self.next_significant()? {
            Node::Open { name, .. } if name == root => Ok(()),
            Node::Open { name, .. } => Err(JmdictError::MalformedDocument(format!(
                "Expected root element <{}>, found <{}>",
                root, name
            ))),
            Node::Eof => Err(JmdictError::MalformedDocument(format!(
                "No root element <{}> found",
                root
            ))),
            other => Err(JmdictError::MalformedDocument(format!(
                "Expected root element <{}>, found {:?}",
                root, other
            ))),
        }
    }

    /// Succeeds only if nothing but trivia follows the root element.
    pub fn expect_eof(&mut self) -> Result<()> {
        match self.next_significant()? {
            Node::Eof => Ok(()),
            other => Err(JmdictError::MalformedDocument(format!(
                "Unexpected content after the root element: {:?}",
                other
            ))),
        }
    }

    /// Like [`next_node`](Self::next_node), skipping whitespace-only text.
    pub fn next_significant(&mut self) -> Result<Node> {
        loop {
            let node = self.next_node()?;
            if !node.is_blank() {
                return Ok(node);
            }
        }
    }

    /// Reads the text content of `element`, whose start tag was just consumed.
    ///
    /// Child elements are not allowed. An element with no content yields an
    /// empty string.
    pub fn read_text(&mut self, element: &str) -> Result<String> {
        let mut text = String::new();
        loop {
            match self.next_node()? {
                Node::Text(chunk) => text.push_str(&chunk),
                Node::Close(name) if name == element => return Ok(text),
                Node::Open { name, .. } => {
                    return Err(JmdictError::MalformedDocument(format!(
                        "Unexpected element <{}> inside <{}>",
                        name, element
                    )));
                }
                Node::Close(name) => {
                    return Err(JmdictError::MalformedDocument(format!(
                        "Unexpected </{}> inside <{}>",
                        name, element
                    )));
                }
                Node::Eof => return Err(unexpected_eof(element)),
            }
        }
    }

    /// Consumes `element` and everything nested in it.
    pub fn skip_element(&mut self, element: &str) -> Result<()> {
        let mut depth = 0usize;
        loop {
            match self.next_node()? {
                Node::Open { .. } => depth += 1,
                Node::Close(_) if depth == 0 => return Ok(()),
                Node::Close(_) => depth -= 1,
                Node::Text(_) => {}
                Node::Eof => return Err(unexpected_eof(element)),
            }
        }
    }
}

/// Drives a container element: calls `visit` once per child start tag until
/// the container's end tag. Non-blank text directly inside the container is
/// an error.
pub fn for_each_child<'e, R, F>(
    stream: &mut XmlStream<'e, R>,
    parent: &str,
    mut visit: F,
) -> Result<()>
where
    R: BufRead,
    F: FnMut(&mut XmlStream<'e, R>, &str, &[(String, String)]) -> Result<()>,
{
    loop {
        match stream.next_significant()? {
            Node::Open { name, attrs } => {
                trace!("<{}> child <{}>", parent, name);
                visit(stream, &name, &attrs)?;
            }
            Node::Close(name) if name == parent => return Ok(()),
            Node::Close(name) => {
                return Err(JmdictError::MalformedDocument(format!(
                    "Unexpected </{}> inside <{}>",
                    name, parent
                )));
            }
            Node::Text(text) => {
                return Err(JmdictError::MalformedDocument(format!(
                    "Unexpected text '{}' inside <{}>",
                    text, parent
                )));
            }
            Node::Eof => return Err(unexpected_eof(parent)),
        }
    }
}

/// Returns the value of attribute `key`, if present.
pub fn attribute<'a>(attrs: &'a [(String, String)], key: &str) -> Option<&'a str> {
    attrs
        .iter()
        .find(|(name, _)| name == key)
        .map(|(_, value)| value.as_str())
}

fn open_tag(
    e: &BytesStart<'_>,
    entities: &EntityRegistry,
    position: u64,
) -> Result<(String, Vec<(String, String)>)> {
    let name = utf8(e.name().as_ref(), "element name")?.to_string();
    let attrs = e
        .attributes()
        .map(|attr_result| {
            let attr = attr_result.map_err(|e| {
                JmdictError::MalformedDocument(format!("Failed to parse XML attribute: {}", e))
            })?;
            let key = utf8(attr.key.as_ref(), "attribute name")?.to_string();
            let value = unescape(utf8(&attr.value, "attribute value")?, entities, position)?;
            Ok((key, value))
        })
        .collect::<Result<Vec<_>>>()?;
    Ok((name, attrs))
}

/// Expands character and entity references in `raw`.
fn unescape(raw: &str, entities: &EntityRegistry, position: u64) -> Result<String> {
    let mut missing: Option<String> = None;
    let result = unescape_with(raw, |name| {
        let resolved = predefined_entity(name).or_else(|| entities.resolve(name));
        if resolved.is_none() {
            missing = Some(name.to_string());
        }
        resolved
    });

    match result {
        Ok(text) => Ok(text.into_owned()),
        Err(err) => match missing {
            Some(name) => Err(JmdictError::UnresolvableEntity { name, position }),
            None => Err(JmdictError::MalformedDocument(format!(
                "Invalid escape sequence near byte {}: {}",
                position, err
            ))),
        },
    }
}

/// The five entities every XML document may use without declaring them.
fn predefined_entity(name: &str) -> Option<&'static str> {
    match name {
        "lt" => Some("<"),
        "gt" => Some(">"),
        "amp" => Some("&"),
        "apos" => Some("'"),
        "quot" => Some("\""),
        _ => None,
    }
}

fn utf8<'a>(bytes: &'a [u8], what: &str) -> Result<&'a str> {
    std::str::from_utf8(bytes)
        .map_err(|e| JmdictError::MalformedDocument(format!("Invalid UTF-8 in {}: {}", what, e)))
}

fn unexpected_eof(element: &str) -> JmdictError {
    JmdictError::MalformedDocument(format!("Unexpected end of document inside <{}>", element))
}
