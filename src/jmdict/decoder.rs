use std::io::BufRead;

use log::{debug, info};

use super::entities::EntityRegistry;
use super::format::entry;
use super::format::stream::{for_each_child, XmlStream};
use super::types::error::{JmdictError, Result};
use super::types::models::Dictionary;
use super::utils;

/// Name of the document root element.
pub const ROOT_ELEMENT: &str = "JMdict";

/// Decodes JMdict documents into a [`Dictionary`].
///
/// A decoder only holds configuration, so one value can be reused for any
/// number of documents, including from several threads at once.
///
/// ```no_run
/// use std::fs::File;
/// use std::io::BufReader;
/// use jmdict_reader::Decoder;
///
/// let file = BufReader::new(File::open("JMdict_e.xml")?);
/// let dictionary = Decoder::new().decode(file)?;
/// println!("{} entries", dictionary.len());
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[derive(Debug, Clone, Copy)]
pub struct Decoder<'e> {
    entities: &'e EntityRegistry,
    trim_text: bool,
}

impl Decoder<'static> {
    /// A decoder using the process-wide [`EntityRegistry::global`].
    pub fn new() -> Self {
        Self::with_registry(EntityRegistry::global())
    }
}

impl Default for Decoder<'static> {
    fn default() -> Self {
        Self::new()
    }
}

impl<'e> Decoder<'e> {
    /// A decoder resolving entity references through `entities`.
    pub fn with_registry(entities: &'e EntityRegistry) -> Self {
        Self {
            entities,
            trim_text: true,
        }
    }

    /// Whether leading and trailing whitespace of text nodes is stripped.
    /// Enabled by default.
    ///
    /// With trimming off, element text keeps its whitespace as written,
    /// including text that is only whitespace (`<reb> </reb>` reads `" "`).
    /// Whitespace between elements is skipped either way.
    pub fn trim_text(mut self, trim: bool) -> Self {
        self.trim_text = trim;
        self
    }

    pub fn registry(&self) -> &'e EntityRegistry {
        self.entities
    }

    /// Decodes one complete document from `input`.
    ///
    /// # Errors
    /// Returns an error, and no partial dictionary, if:
    /// - the input is not well-formed XML or not shaped like JMdict
    /// - an entity reference is not in the registry
    /// - an entry has no reading or no sense
    /// - a classification code is outside its vocabulary
    /// - a priority token does not match `<code><rank>`
    pub fn decode<R: BufRead>(&self, input: R) -> Result<Dictionary> {
        info!("Decoding JMdict document ({} entities registered)", self.entities.len());
        let mut stream = XmlStream::new(input, self.entities, self.trim_text);

        stream.expect_root(ROOT_ELEMENT)?;
        debug!("Found root element <{}>", ROOT_ELEMENT);

        let mut entries = Vec::new();
        for_each_child(&mut stream, ROOT_ELEMENT, |stream, name, _attrs| {
            if name != "entry" {
                return Err(JmdictError::MalformedDocument(format!(
                    "Unexpected element <{}> inside <{}>",
                    name, ROOT_ELEMENT
                )));
            }
            entries.push(entry::decode_entry(stream)?);
            if entries.len() % 50_000 == 0 {
                debug!("Decoded {} entries so far", entries.len());
            }
            Ok(())
        })?;
        stream.expect_eof()?;

        info!("JMdict document decoded: {} entries", entries.len());
        Ok(Dictionary { entries })
    }

    /// Decodes a document held in memory.
    ///
    /// A UTF-16 byte order mark is honoured; anything else is read as UTF-8.
    pub fn decode_bytes(&self, bytes: &[u8]) -> Result<Dictionary> {
        let utf8 = utils::to_utf8(bytes)?;
        self.decode(&*utf8)
    }
}

/// Decodes one document from `input`, resolving entities through `entities`.
pub fn decode<R: BufRead>(input: R, entities: &EntityRegistry) -> Result<Dictionary> {
    Decoder::with_registry(entities).decode(input)
}

/// Decodes an in-memory document, resolving entities through `entities`.
pub fn decode_bytes(bytes: &[u8], entities: &EntityRegistry) -> Result<Dictionary> {
    Decoder::with_registry(entities).decode_bytes(bytes)
}
