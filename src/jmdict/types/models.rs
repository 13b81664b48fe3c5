//! The typed JMdict entry model.
//!
//! A [`Dictionary`] owns its entries outright; nothing in the model points
//! back into the source document or across entries. Cross references and
//! restrictions are kept as the literal strings the corpus uses.

use super::priority::Priority;
use super::vocabulary::{Dialect, Field, Misc, Orthography, PartOfSpeech};

/// The parsed document: every `<entry>` in document order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Dictionary {
    pub entries: Vec<Entry>,
}

impl Dictionary {
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Entry> {
        self.entries.iter()
    }

    /// Finds an entry by its sequence number.
    ///
    /// Linear scan; callers doing many lookups should build their own index.
    pub fn get(&self, seq: u64) -> Option<&Entry> {
        self.entries.iter().find(|entry| entry.seq == seq)
    }

    /// Returns every entry with a kanji or reading form exactly equal to `text`.
    pub fn find<'a>(&'a self, text: &'a str) -> impl Iterator<Item = &'a Entry> + 'a {
        self.entries.iter().filter(move |entry| entry.has_form(text))
    }
}

impl<'a> IntoIterator for &'a Dictionary {
    type Item = &'a Entry;
    type IntoIter = std::slice::Iter<'a, Entry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

impl IntoIterator for Dictionary {
    type Item = Entry;
    type IntoIter = std::vec::IntoIter<Entry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

/// One headword group.
///
/// After decoding, `readings` and `senses` are never empty.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Entry {
    /// Unique sequence number (`<ent_seq>`).
    pub seq: u64,
    pub kanji: Vec<KanjiForm>,
    pub readings: Vec<ReadingForm>,
    pub info: Option<EntryInfo>,
    pub senses: Vec<Sense>,
}

impl Entry {
    /// True if any kanji or reading form is written exactly as `text`.
    pub fn has_form(&self, text: &str) -> bool {
        self.kanji.iter().any(|k| k.text == text) || self.readings.iter().any(|r| r.text == text)
    }

    /// True if any form carries a priority marked common.
    pub fn is_common(&self) -> bool {
        self.kanji
            .iter()
            .flat_map(|k| k.priority.iter())
            .chain(self.readings.iter().flat_map(|r| r.priority.iter()))
            .any(Priority::is_common)
    }

    /// The parts of speech that apply to the sense at `index`.
    ///
    /// A sense with no `<pos>` of its own takes the list of the nearest
    /// preceding sense that has one. Returns an empty slice when no sense up
    /// to `index` has any, or when `index` is out of range.
    pub fn parts_of_speech_for(&self, index: usize) -> &[PartOfSpeech] {
        let Some(senses) = self.senses.get(..=index) else {
            return &[];
        };
        senses
            .iter()
            .rev()
            .map(|sense| sense.parts_of_speech.as_slice())
            .find(|pos| !pos.is_empty())
            .unwrap_or(&[])
    }
}

/// A written form containing at least one non-kana character (`<k_ele>`).
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct KanjiForm {
    pub text: String,
    pub info: Vec<Orthography>,
    pub priority: Vec<Priority>,
}

/// A kana reading (`<r_ele>`).
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ReadingForm {
    pub text: String,
    /// `Some(true)` when the reading is not a true reading of the kanji
    /// (`<re_nokanji>` present), `None` otherwise.
    pub no_kanji: Option<bool>,
    /// Kanji forms this reading is limited to. Empty means all of them.
    pub restrictions: Vec<String>,
    pub info: Vec<Orthography>,
    pub priority: Vec<Priority>,
}

impl ReadingForm {
    /// Whether this reading applies to the kanji form written `kanji`.
    pub fn applies_to(&self, kanji: &str) -> bool {
        if self.no_kanji == Some(true) {
            return false;
        }
        self.restrictions.is_empty() || self.restrictions.iter().any(|r| r == kanji)
    }
}

/// Bibliographic, link, etymology and audit metadata (`<info>`). Passed
/// through without interpretation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EntryInfo {
    pub links: Vec<Link>,
    pub bibliography: Vec<Bibliography>,
    pub etymology: Vec<String>,
    pub audit: Vec<Audit>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Link {
    pub tag: String,
    pub description: String,
    pub uri: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Bibliography {
    pub tag: Option<String>,
    pub text: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Audit {
    pub update_date: String,
    pub update_detail: String,
}

/// One meaning group (`<sense>`).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Sense {
    pub kanji_restrictions: Vec<String>,
    pub reading_restrictions: Vec<String>,
    /// Left empty when the source has no `<pos>`; see
    /// [`Entry::parts_of_speech_for`] for the inheritance rule.
    pub parts_of_speech: Vec<PartOfSpeech>,
    pub cross_references: Vec<String>,
    pub antonyms: Vec<String>,
    pub fields: Vec<Field>,
    pub misc: Vec<Misc>,
    pub notes: Vec<String>,
    pub loan_sources: Vec<LoanSource>,
    pub dialects: Vec<Dialect>,
    pub glosses: Vec<String>,
    pub examples: Vec<Example>,
}

/// Whether a loanword source covers the whole word or only part of it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum LoanSourceKind {
    #[default]
    Full,
    Part,
}

/// Source-language annotation of a loanword (`<lsource>`).
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LoanSource {
    /// ISO 639-2 language code; `eng` when the corpus omits it.
    pub lang: String,
    pub kind: LoanSourceKind,
    /// Constructed in Japanese from foreign words (waseieigo).
    pub wasei: bool,
    /// The source word or phrase, when given.
    pub text: Option<String>,
}

impl Default for LoanSource {
    fn default() -> Self {
        Self {
            lang: "eng".to_string(),
            kind: LoanSourceKind::Full,
            wasei: false,
            text: None,
        }
    }
}

/// A usage example attached to a sense (`<example>`).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Example {
    pub source: Option<ExampleSource>,
    /// The form of the headword as it appears in the sentence, or the whole
    /// example when the corpus gives it as plain text.
    pub text: String,
    pub sentences: Vec<ExampleSentence>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ExampleSource {
    pub kind: Option<String>,
    pub id: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ExampleSentence {
    pub lang: Option<String>,
    pub text: String,
}
