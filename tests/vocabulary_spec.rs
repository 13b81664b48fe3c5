use jmdict_reader::{
    describe_dialect, describe_field, describe_misc, describe_orthography,
    describe_part_of_speech, Dialect, Field, Misc, Orthography, PartOfSpeech, UnknownCodeError,
    Vocabulary,
};
use std::collections::HashSet;

fn assert_closed<V: Vocabulary + PartialEq + std::fmt::Debug>() {
    let mut seen = HashSet::new();
    for &value in V::ALL {
        let code = value.code();
        assert!(seen.insert(code), "duplicate {} code {}", V::FIELD, code);
        assert_eq!(V::from_code(code), Some(value), "{} code {} does not map back", V::FIELD, code);
        assert!(!value.description().is_empty(), "{} code {} has no description", V::FIELD, code);
    }
}

#[test]
fn every_vocabulary_is_one_to_one() {
    assert_closed::<PartOfSpeech>();
    assert_closed::<Field>();
    assert_closed::<Misc>();
    assert_closed::<Dialect>();
    assert_closed::<Orthography>();
}

#[test]
fn codes_are_case_sensitive() {
    assert_eq!(Orthography::from_code("ik"), Some(Orthography::IrregularKana));
    assert_eq!(Orthography::from_code("iK"), Some(Orthography::IrregularKanji));
    assert_eq!(Orthography::from_code("oK"), Some(Orthography::OutdatedKanji));
    assert_eq!(Orthography::from_code("ok"), Some(Orthography::OutdatedKana));
    assert_eq!(Field::from_code("Buddh"), Some(Field::Buddh));
    assert_eq!(Field::from_code("buddh"), None);
}

#[test]
fn unknown_tokens_are_errors() {
    let err = "noun".parse::<PartOfSpeech>().expect_err("noun is not a pos code");
    assert_eq!(
        err,
        UnknownCodeError {
            field: "part-of-speech",
            token: "noun".to_string()
        }
    );
    assert!("".parse::<Misc>().is_err());
    assert!("ksb".parse::<Field>().is_err());
    assert_eq!("ksb".parse::<Dialect>(), Ok(Dialect::KansaiBen));
}

#[test]
fn description_lookups() {
    assert_eq!(describe_part_of_speech("n"), Some("noun (common) (futsuumeishi)"));
    assert_eq!(describe_part_of_speech("v5k-s"), Some("Godan verb - Iku/Yuku special class"));
    assert_eq!(describe_field("comp"), Some("computing"));
    assert_eq!(describe_misc("uk"), Some("word usually written using kana alone"));
    assert_eq!(describe_misc("obsc"), Some("obscure term"));
    assert_eq!(describe_dialect("osb"), Some("Osaka-ben"));
    assert_eq!(describe_orthography("ateji"), Some("ateji (phonetic) reading"));
    assert_eq!(describe_orthography("uK"), Some("word usually written using kanji alone"));

    assert_eq!(describe_part_of_speech("comp"), None);
    assert_eq!(describe_field(""), None);
    assert_eq!(describe_dialect("Osaka-ben"), None);
}

#[test]
fn display_writes_the_code() {
    assert_eq!(PartOfSpeech::AdjNa.to_string(), "adj-na");
    assert_eq!(Misc::X.to_string(), "X");
    assert_eq!(Dialect::TsugaruBen.to_string(), "tsug");
    assert_eq!(Orthography::Gikun.to_string(), "gikun");
}
