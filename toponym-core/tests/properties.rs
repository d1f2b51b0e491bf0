use std::sync::Arc;

use toponym_core::analyzer::tokenizer::trim_last_token;
use toponym_core::filter::StreetTokensFilter;
use toponym_core::{
    build_key, canonicalize, contains_normalized, split, CanonicalForm, Delimiters, StreetIndex,
    SynonymDictionary,
};

const SAMPLES: &[&str] = &[
    "",
    "Main Street",
    "Straße",
    "CAFÉ",
    "Æble Œuvre",
    "Ørsteds Vej",
    "İstiklal Caddesi",
    "ĐƯỜNG Lê Lợi",
    "улица Ленина",
    "kv.№5",
    "##5",
    "# 12",
    "C#sharp",
    "ﬁeld ½ ℌ",
    "\u{0301}\u{0300}",
    "Ǆemal ǅ",
    "ΣΟΦΟΚΛΗΣ",
    "東京都",
];

fn filtered(dict: &SynonymDictionary, words: &[&str]) -> Vec<String> {
    let mut out = Vec::new();
    let mut filter =
        StreetTokensFilter::new(dict, |token: CanonicalForm, _: ()| out.push(token.to_string()));
    for word in words {
        filter.put(canonicalize(word), false, ());
    }
    drop(filter);
    out
}

#[test]
fn canonicalize_is_idempotent() {
    for s in SAMPLES {
        let once = canonicalize(s);
        let twice = canonicalize(&once.to_string());
        assert_eq!(once, twice, "not a fixed point for {s:?}");
    }
}

#[test]
fn case_and_accent_invariance() {
    assert_eq!(canonicalize("café"), canonicalize("CAFÉ"));
    assert_eq!(canonicalize("café"), canonicalize("cafe"));
}

#[test]
fn ligatures_expand() {
    assert_eq!(canonicalize("Æble"), canonicalize("aeble"));
    assert_eq!(canonicalize("Œuvre"), canonicalize("oeuvre"));
}

#[test]
fn house_number_markers() {
    assert_eq!(canonicalize("kv.№5"), canonicalize("kv. 5"));
    assert_eq!(canonicalize("C#sharp").to_string(), "c#sharp");
}

#[test]
fn dictionary_membership() {
    let dict = SynonymDictionary::builtin();
    assert!(dict.is_street_synonym(&canonicalize("street")));
    assert!(!dict.is_street_synonym(&canonicalize("streetx")));
    assert!(dict.is_street_synonym_prefix(&canonicalize("str")));
}

#[test]
fn filter_suppresses_single_synonym() {
    let dict = SynonymDictionary::builtin();
    assert_eq!(filtered(&dict, &["main", "street"]), vec!["main"]);
}

#[test]
fn filter_restores_on_second_synonym() {
    let dict = SynonymDictionary::builtin();
    assert_eq!(
        filtered(&dict, &["square", "garden", "square"]),
        vec!["square", "garden", "square"]
    );
}

#[test]
fn street_key_equivalence() {
    assert_eq!(build_key("St.-Petersburg"), build_key("St Petersburg"));
}

#[test]
fn trimming_last_token() {
    assert_eq!(trim_last_token("new york"), "new ");
    assert_eq!(trim_last_token(""), "");
}

#[test]
fn splitting_on_street_delimiters() {
    let parts = split("St.-Petersburg, Nevsky", &Delimiters::street());
    assert_eq!(parts.as_slice(), &["St", "Petersburg", "Nevsky"]);
}

#[test]
fn containment() {
    assert!(contains_normalized("Café del Mar", "CAFE"));
}

#[test]
fn one_dictionary_many_indexes() {
    let dict = Arc::new(SynonymDictionary::builtin());
    let handles: Vec<_> = ["Rue de Rivoli", "Champs-Élysées Avenue"]
        .into_iter()
        .map(|name| {
            let dict = Arc::clone(&dict);
            std::thread::spawn(move || {
                let mut index = StreetIndex::new(dict);
                index.add(name).expect("name has tokens");
                index.search("ri").len() + index.search("elysees").len()
            })
        })
        .collect();

    let hits: Vec<usize> = handles.into_iter().map(|h| h.join().unwrap()).collect();
    assert_eq!(hits, vec![1, 1]);
}
