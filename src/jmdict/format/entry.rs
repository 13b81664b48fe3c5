//! Decoding of `<entry>` and its kanji, reading and info groups.
//!
//! Entry layout (JMdict DTD):
//!
//! ```text
//! <!ELEMENT entry (ent_seq, k_ele*, r_ele+, info?, sense+)>
//! <!ELEMENT k_ele (keb, ke_inf*, ke_pri*)>
//! <!ELEMENT r_ele (reb, re_nokanji?, re_restr*, re_inf*, re_pri*)>
//! <!ELEMENT info (links*, bibl*, etym*, audit*)>
//! ```
//!
//! `ent_seq` must come first so every later error can name the entry.

use std::io::BufRead;

use log::trace;

use crate::jmdict::types::error::{JmdictError, Result};
use crate::jmdict::types::models::{
    Audit, Bibliography, Entry, EntryInfo, KanjiForm, Link, ReadingForm,
};
use crate::jmdict::types::priority::Priority;
use crate::jmdict::types::vocabulary::{Orthography, Vocabulary};

use super::sense;
use super::stream::{for_each_child, Node, XmlStream};

/// Decodes one entry whose `<entry>` start tag was just consumed.
pub fn decode_entry<R: BufRead>(stream: &mut XmlStream<'_, R>) -> Result<Entry> {
    let seq = match stream.next_significant()? {
        Node::Open { name, .. } if name == "ent_seq" => parse_seq(&stream.read_text("ent_seq")?)?,
        other => {
            return Err(JmdictError::MalformedDocument(format!(
                "<entry> must begin with <ent_seq>, found {:?}",
                other
            )));
        }
    };

    let mut kanji = Vec::new();
    let mut readings = Vec::new();
    let mut info: Option<EntryInfo> = None;
    let mut senses = Vec::new();

    for_each_child(stream, "entry", |stream, name, _attrs| {
        match name {
            "k_ele" => kanji.push(decode_kanji(stream, seq)?),
            "r_ele" => readings.push(decode_reading(stream, seq)?),
            "info" => {
                if info.is_some() {
                    return Err(JmdictError::MalformedDocument(format!(
                        "Entry {}: more than one <info>",
                        seq
                    )));
                }
                info = Some(decode_info(stream)?);
            }
            "sense" => senses.push(sense::decode_sense(stream, seq)?),
            other => return Err(unexpected_child(seq, "entry", other)),
        }
        Ok(())
    })?;

    if readings.is_empty() {
        return Err(JmdictError::MissingElement {
            entry: seq,
            element: "r_ele",
        });
    }
    if senses.is_empty() {
        return Err(JmdictError::MissingElement {
            entry: seq,
            element: "sense",
        });
    }

    trace!(
        "Decoded entry {}: {} kanji, {} readings, {} senses",
        seq,
        kanji.len(),
        readings.len(),
        senses.len()
    );

    Ok(Entry {
        seq,
        kanji,
        readings,
        info,
        senses,
    })
}

fn parse_seq(text: &str) -> Result<u64> {
    text.trim().parse().map_err(|_| {
        JmdictError::MalformedDocument(format!("Invalid <ent_seq> value '{}'", text))
    })
}

fn decode_kanji<R: BufRead>(stream: &mut XmlStream<'_, R>, seq: u64) -> Result<KanjiForm> {
    let mut text: Option<String> = None;
    let mut info = Vec::new();
    let mut priority = Vec::new();

    for_each_child(stream, "k_ele", |stream, name, _attrs| {
        match name {
            "keb" => set_once(&mut text, stream.read_text("keb")?, seq, "keb")?,
            "ke_inf" => info.push(read_code::<_, Orthography>(stream, seq, "ke_inf")?),
            "ke_pri" => priority.push(read_priority(stream, seq, "ke_pri")?),
            other => return Err(unexpected_child(seq, "k_ele", other)),
        }
        Ok(())
    })?;

    let text = text.ok_or(JmdictError::MissingElement {
        entry: seq,
        element: "keb",
    })?;
    Ok(KanjiForm {
        text,
        info,
        priority,
    })
}

fn decode_reading<R: BufRead>(stream: &mut XmlStream<'_, R>, seq: u64) -> Result<ReadingForm> {
    let mut text: Option<String> = None;
    let mut no_kanji = None;
    let mut restrictions = Vec::new();
    let mut info = Vec::new();
    let mut priority = Vec::new();

    for_each_child(stream, "r_ele", |stream, name, _attrs| {
        match name {
            "reb" => set_once(&mut text, stream.read_text("reb")?, seq, "reb")?,
            "re_nokanji" => {
                // Presence alone carries the meaning; the content is ignored.
                stream.skip_element("re_nokanji")?;
                no_kanji = Some(true);
            }
            "re_restr" => restrictions.push(stream.read_text("re_restr")?),
            "re_inf" => info.push(read_code::<_, Orthography>(stream, seq, "re_inf")?),
            "re_pri" => priority.push(read_priority(stream, seq, "re_pri")?),
            other => return Err(unexpected_child(seq, "r_ele", other)),
        }
        Ok(())
    })?;

    let text = text.ok_or(JmdictError::MissingElement {
        entry: seq,
        element: "reb",
    })?;
    Ok(ReadingForm {
        text,
        no_kanji,
        restrictions,
        info,
        priority,
    })
}

fn decode_info<R: BufRead>(stream: &mut XmlStream<'_, R>) -> Result<EntryInfo> {
    let mut info = EntryInfo::default();

    for_each_child(stream, "info", |stream, name, _attrs| {
        match name {
            "links" => {
                let mut link = Link::default();
                for_each_child(stream, "links", |stream, name, _attrs| {
                    match name {
                        "link_tag" => link.tag = stream.read_text("link_tag")?,
                        "link_desc" => link.description = stream.read_text("link_desc")?,
                        "link_uri" => link.uri = stream.read_text("link_uri")?,
                        other => return Err(unexpected_element("links", other)),
                    }
                    Ok(())
                })?;
                info.links.push(link);
            }
            "bibl" => {
                let mut bibl = Bibliography::default();
                for_each_child(stream, "bibl", |stream, name, _attrs| {
                    match name {
                        "bib_tag" => bibl.tag = Some(stream.read_text("bib_tag")?),
                        "bib_txt" => bibl.text = Some(stream.read_text("bib_txt")?),
                        other => return Err(unexpected_element("bibl", other)),
                    }
                    Ok(())
                })?;
                info.bibliography.push(bibl);
            }
            "etym" => info.etymology.push(stream.read_text("etym")?),
            "audit" => {
                let mut audit = Audit::default();
                for_each_child(stream, "audit", |stream, name, _attrs| {
                    match name {
                        "upd_date" => audit.update_date = stream.read_text("upd_date")?,
                        "upd_detl" => audit.update_detail = stream.read_text("upd_detl")?,
                        other => return Err(unexpected_element("audit", other)),
                    }
                    Ok(())
                })?;
                info.audit.push(audit);
            }
            other => return Err(unexpected_element("info", other)),
        }
        Ok(())
    })?;

    Ok(info)
}

/// Reads the text of `element` and validates it against vocabulary `V`.
pub(super) fn read_code<R: BufRead, V: Vocabulary>(
    stream: &mut XmlStream<'_, R>,
    seq: u64,
    element: &'static str,
) -> Result<V> {
    let token = stream.read_text(element)?;
    match V::from_code(&token) {
        Some(code) => Ok(code),
        None => Err(JmdictError::UnknownCode {
            entry: seq,
            field: element,
            token,
        }),
    }
}

/// Reads the text of `element` and splits it into a [`Priority`].
fn read_priority<R: BufRead>(
    stream: &mut XmlStream<'_, R>,
    seq: u64,
    element: &'static str,
) -> Result<Priority> {
    let raw = stream.read_text(element)?;
    Priority::parse(&raw).map_err(|e| JmdictError::MalformedPriority {
        entry: seq,
        field: element,
        raw: e.raw,
    })
}

fn set_once(slot: &mut Option<String>, value: String, seq: u64, element: &str) -> Result<()> {
    if slot.is_some() {
        return Err(JmdictError::MalformedDocument(format!(
            "Entry {}: more than one <{}>",
            seq, element
        )));
    }
    *slot = Some(value);
    Ok(())
}

pub(super) fn unexpected_child(seq: u64, parent: &str, child: &str) -> JmdictError {
    JmdictError::MalformedDocument(format!(
        "Entry {}: unexpected element <{}> inside <{}>",
        seq, child, parent
    ))
}

fn unexpected_element(parent: &str, child: &str) -> JmdictError {
    JmdictError::MalformedDocument(format!(
        "Unexpected element <{}> inside <{}>",
        child, parent
    ))
}
