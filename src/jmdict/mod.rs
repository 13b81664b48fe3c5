//! Core JMdict decoding module.
//!
//! # Module Organization
//!
//! - [`types`]: Entry model, priority tokens, vocabularies and errors
//! - [`entities`]: Entity registry installed into the XML tokenizer
//! - `format`: Element-level decoding of the document
//! - [`decoder`]: Public entry points

pub mod decoder;
pub mod entities;
pub(crate) mod format;
pub mod types;
mod utils;

pub use decoder::{decode, decode_bytes, Decoder, ROOT_ELEMENT};
pub use entities::EntityRegistry;
pub use types::error::{JmdictError, PriorityError, Result, UnknownCodeError};
pub use types::models::*;
pub use types::priority::{Priority, PriorityCode, NF_BUCKET_SIZE};
pub use types::vocabulary::{
    describe_dialect, describe_field, describe_misc, describe_orthography,
    describe_part_of_speech, Dialect, Field, Misc, Orthography, PartOfSpeech, Vocabulary,
};
