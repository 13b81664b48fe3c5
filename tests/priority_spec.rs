use jmdict_reader::{Priority, PriorityCode, PriorityError};

fn parse(raw: &str) -> Priority {
    raw.parse()
        .unwrap_or_else(|e| panic!("expected {:?} to parse: {}", raw, e))
}

#[test]
fn ranked_tokens_split_into_code_and_rank() {
    let cases: &[(&str, PriorityCode, u8)] = &[
        ("news1", PriorityCode::News, 1),
        ("news2", PriorityCode::News, 2),
        ("ichi2", PriorityCode::Ichi, 2),
        ("gai1", PriorityCode::Gai, 1),
        ("spec2", PriorityCode::Spec, 2),
        ("nf01", PriorityCode::Nf, 1),
        ("nf23", PriorityCode::Nf, 23),
        ("nf48", PriorityCode::Nf, 48),
    ];
    for (raw, code, rank) in cases {
        let priority = parse(raw);
        assert_eq!(priority.code, *code, "code mismatch for {}", raw);
        assert_eq!(priority.rank, Some(*rank), "rank mismatch for {}", raw);
    }
}

#[test]
fn non_conforming_tokens_fail_instead_of_truncating() {
    for raw in ["newsX", "news1x", "nf", "nf0", "nf00", "nf100", "NEWS1", "news 1", " news1", "", "1news"] {
        let err = Priority::parse(raw).expect_err(raw);
        assert_eq!(err, PriorityError { raw: raw.to_string() });
    }
}

// Bare codes decode as rank-less. Real JMdict releases only ever carry a
// digit suffix, so this case is still to be confirmed against corpus samples.
#[test]
fn bare_codes_have_no_rank() {
    for (raw, code) in [
        ("news", PriorityCode::News),
        ("ichi", PriorityCode::Ichi),
        ("gai", PriorityCode::Gai),
        ("spec", PriorityCode::Spec),
    ] {
        assert_eq!(parse(raw), Priority { code, rank: None });
    }
}

#[test]
fn display_uses_corpus_spelling() {
    for raw in ["news1", "ichi2", "gai1", "spec2", "nf05", "nf23", "spec"] {
        assert_eq!(parse(raw).to_string(), raw);
    }
    assert_eq!(parse("nf5").to_string(), "nf05");
}

#[test]
fn common_marker_follows_edict_rules() {
    for raw in ["news1", "ichi1", "spec1", "spec2", "gai1"] {
        assert!(parse(raw).is_common(), "{} should be common", raw);
    }
    for raw in ["news2", "ichi2", "gai2", "nf01", "spec"] {
        assert!(!parse(raw).is_common(), "{} should not be common", raw);
    }
}

#[test]
fn nf_rank_maps_to_500_word_bucket() {
    assert_eq!(parse("nf01").frequency_bucket(), Some(1..=500));
    assert_eq!(parse("nf23").frequency_bucket(), Some(11001..=11500));
    assert_eq!(parse("news1").frequency_bucket(), None);
}
