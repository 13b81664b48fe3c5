//! Decoding of `<sense>` and its nested `<lsource>` and `<example>` elements.

use std::io::BufRead;

use crate::jmdict::types::error::{JmdictError, Result};
use crate::jmdict::types::models::{
    Example, ExampleSentence, ExampleSource, LoanSource, LoanSourceKind, Sense,
};
use crate::jmdict::types::vocabulary::{Dialect, Field, Misc, PartOfSpeech};

use super::entry::{read_code, unexpected_child};
use super::stream::{attribute, for_each_child, Node, XmlStream};

/// Default `xml:lang` of `<lsource>`.
const DEFAULT_SOURCE_LANG: &str = "eng";

/// Decodes one sense whose `<sense>` start tag was just consumed.
///
/// `parts_of_speech` stays empty when the sense has no `<pos>`; inheriting
/// from an earlier sense is left to the reader of the model.
pub fn decode_sense<R: BufRead>(stream: &mut XmlStream<'_, R>, seq: u64) -> Result<Sense> {
    let mut sense = Sense::default();

    for_each_child(stream, "sense", |stream, name, attrs| {
        match name {
            "stagk" => sense.kanji_restrictions.push(stream.read_text("stagk")?),
            "stagr" => sense.reading_restrictions.push(stream.read_text("stagr")?),
            "pos" => sense
                .parts_of_speech
                .push(read_code::<_, PartOfSpeech>(stream, seq, "pos")?),
            "xref" => sense.cross_references.push(stream.read_text("xref")?),
            "ant" => sense.antonyms.push(stream.read_text("ant")?),
            "field" => sense.fields.push(read_code::<_, Field>(stream, seq, "field")?),
            "misc" => sense.misc.push(read_code::<_, Misc>(stream, seq, "misc")?),
            "s_inf" => sense.notes.push(stream.read_text("s_inf")?),
            "lsource" => sense.loan_sources.push(decode_loan_source(stream, seq, attrs)?),
            "dial" => sense.dialects.push(read_code::<_, Dialect>(stream, seq, "dial")?),
            // Gloss attributes (xml:lang, g_type, g_gend) are not modelled.
            "gloss" => sense.glosses.push(stream.read_text("gloss")?),
            "example" => sense.examples.push(decode_example(stream, seq)?),
            other => return Err(unexpected_child(seq, "sense", other)),
        }
        Ok(())
    })?;

    Ok(sense)
}

fn decode_loan_source<R: BufRead>(
    stream: &mut XmlStream<'_, R>,
    seq: u64,
    attrs: &[(String, String)],
) -> Result<LoanSource> {
    let lang = attribute(attrs, "xml:lang")
        .unwrap_or(DEFAULT_SOURCE_LANG)
        .to_string();

    let kind = match attribute(attrs, "ls_type") {
        None | Some("full") => LoanSourceKind::Full,
        Some("part") => LoanSourceKind::Part,
        Some(other) => return Err(invalid_attribute(seq, "ls_type", other)),
    };

    let wasei = match attribute(attrs, "ls_wasei") {
        None => false,
        Some("y") => true,
        Some(other) => return Err(invalid_attribute(seq, "ls_wasei", other)),
    };

    let text = stream.read_text("lsource")?;
    Ok(LoanSource {
        lang,
        kind,
        wasei,
        text: (!text.is_empty()).then_some(text),
    })
}

/// Decodes an `<example>`, either structured (`ex_srce`, `ex_text`,
/// `ex_sent`) or plain text.
fn decode_example<R: BufRead>(stream: &mut XmlStream<'_, R>, seq: u64) -> Result<Example> {
    let mut example = Example::default();
    loop {
        match stream.next_significant()? {
            Node::Open { name, attrs } => match name.as_str() {
                "ex_srce" => {
                    let id = stream.read_text("ex_srce")?;
                    example.source = Some(ExampleSource {
                        kind: attribute(&attrs, "exsrc_type").map(str::to_string),
                        id,
                    });
                }
                "ex_text" => example.text = stream.read_text("ex_text")?,
                "ex_sent" => {
                    let text = stream.read_text("ex_sent")?;
                    example.sentences.push(ExampleSentence {
                        lang: attribute(&attrs, "xml:lang").map(str::to_string),
                        text,
                    });
                }
                other => return Err(unexpected_child(seq, "example", other)),
            },
            Node::Text(text) => example.text.push_str(&text),
            Node::Close(name) if name == "example" => return Ok(example),
            Node::Close(name) => {
                return Err(JmdictError::MalformedDocument(format!(
                    "Entry {}: unexpected </{}> inside <example>",
                    seq, name
                )));
            }
            Node::Eof => {
                return Err(JmdictError::MalformedDocument(
                    "Unexpected end of document inside <example>".to_string(),
                ));
            }
        }
    }
}

fn invalid_attribute(seq: u64, attribute: &'static str, value: &str) -> JmdictError {
    JmdictError::UnknownCode {
        entry: seq,
        field: attribute,
        token: value.to_string(),
    }
}
