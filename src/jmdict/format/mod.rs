//! Document parsing layer for the JMdict XML format.
//!
//! This module sits between the public [`Decoder`](crate::jmdict::decoder::Decoder)
//! and the `quick_xml` tokenizer.
//!
//! # Module Organization
//!
//! - [`stream`]: Owned node stream over `quick_xml` events, with entity resolution
//! - [`entry`]: Decodes `<entry>` with its kanji, reading and info groups
//! - [`sense`]: Decodes `<sense>` with its loanword sources and examples
//!
//! # Architecture
//!
//! ```text
//! <JMdict>                      ← decoder::Decoder::decode()
//! ├── <entry>                   ← entry::decode_entry()
//! │   ├── <ent_seq>
//! │   ├── <k_ele>*  <r_ele>+
//! │   ├── <info>?
//! │   └── <sense>+              ← sense::decode_sense()
//! └── ...
//! ```

pub mod entry;
pub mod sense;
pub mod stream;
