use std::collections::HashMap;

use gosp_core::lang::conventions;
use gosp_core::lang::keywords::{self, KeywordCategory, KeywordId};
use gosp_core::lang::punctuation::{self, PunctuationCategory, PunctuationId};

#[test]
fn keywords_spellings_unique_and_resolvable() {
    let mut seen: HashMap<&'static str, KeywordId> = HashMap::new();

    for info in keywords::KEYWORDS {
        assert_eq!(
            keywords::from_str(info.canonical),
            Some(info.id),
            "keyword canonical spelling not resolvable: {}",
            info.canonical
        );
        assert_eq!(
            keywords::as_str(info.id),
            info.canonical,
            "keyword as_str mismatch for {:?}",
            info.id
        );

        if let Some(prev) = seen.insert(info.canonical, info.id) {
            panic!(
                "duplicate keyword spelling {:?}: {:?} and {:?}",
                info.canonical, prev, info.id
            );
        }
    }
}

#[test]
fn every_keyword_has_an_example() {
    for info in keywords::KEYWORDS {
        assert!(!info.examples.is_empty(), "keyword {:?} has no examples", info.id);
    }
}

#[test]
fn keyword_lookup_is_case_sensitive() {
    assert_eq!(keywords::from_str("define"), Some(KeywordId::Define));
    assert_eq!(keywords::from_str("Define"), None);
    assert_eq!(keywords::from_str("LET*"), None);
}

#[test]
fn quoting_forms_take_one_part() {
    for info in keywords::KEYWORDS {
        if info.category == KeywordCategory::Quoting {
            assert!(info.arity.accepts(1), "{} should accept one part", info.canonical);
            assert!(!info.arity.accepts(2), "{} should reject two parts", info.canonical);
        }
    }
}

#[test]
fn conventions_do_not_shadow_keywords() {
    for name in [conventions::CHAN_SEND, conventions::CHAN_RECV, conventions::SELECT_DEFAULT] {
        assert_eq!(keywords::from_str(name), None, "{name} must stay an ordinary identifier");
    }
}

#[test]
fn punctuation_spellings_unique_and_resolvable() {
    let mut seen: HashMap<&'static str, PunctuationId> = HashMap::new();

    for info in punctuation::PUNCTUATION {
        assert_eq!(punctuation::from_str(info.canonical), Some(info.id));
        assert_eq!(punctuation::as_str(info.id), info.canonical);
        if let Some(prev) = seen.insert(info.canonical, info.id) {
            panic!(
                "duplicate punctuation spelling {:?}: {:?} and {:?}",
                info.canonical, prev, info.id
            );
        }
    }
}

#[test]
fn abbreviations_expand_to_quoting_keywords() {
    for info in punctuation::PUNCTUATION {
        match info.category {
            PunctuationCategory::Abbreviation => {
                let form = info.expands_to.expect("abbreviation without expansion");
                assert_eq!(keywords::category(form), KeywordCategory::Quoting);
            }
            PunctuationCategory::Delimiter | PunctuationCategory::Marker => {
                assert_eq!(info.expands_to, None, "{} should not expand", info.canonical);
            }
        }
    }
}

#[test]
fn delimiters_pair_up() {
    assert_eq!(punctuation::closing(PunctuationId::LParen), Some(PunctuationId::RParen));
    assert_eq!(punctuation::closing(PunctuationId::LBracket), Some(PunctuationId::RBracket));
    assert_eq!(punctuation::closing(PunctuationId::Dot), None);
}
