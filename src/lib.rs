//! # jmdict-reader
//!
//! A streaming reader for the JMdict Japanese-multilingual dictionary.
//!
//! JMdict abbreviates its classification codes as general entity references
//! (`&n;`, `&uk;`, `&v5k;`) that only its internal DTD declares. This crate
//! resolves them through a fixed [`EntityRegistry`], decodes every entry into
//! a typed [`Dictionary`], and rejects anything outside the closed
//! vocabularies or the priority token grammar.
//!
//! ```no_run
//! use jmdict_reader::{decode_bytes, EntityRegistry};
//!
//! let xml = std::fs::read("JMdict_e.xml")?;
//! let dictionary = decode_bytes(&xml, EntityRegistry::global())?;
//! for entry in dictionary.find("ねこ") {
//!     println!("{}: {:?}", entry.seq, entry.senses[0].glosses);
//! }
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
pub mod jmdict;

// Re-export the main types for convenience
pub use jmdict::*;
