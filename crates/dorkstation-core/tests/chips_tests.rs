use dorkstation_core::error::Error;
use dorkstation_core::types::{ChipKind, Suggestion, SuggestionAction};
use dorkstation_core::{apply_suggestion, ChipSequence};

fn kinds(seq: &ChipSequence) -> Vec<ChipKind> {
    seq.iter().map(|c| c.kind).collect()
}

#[test]
fn default_sequence_has_phrase_site_filetype() {
    let seq = ChipSequence::default();
    assert_eq!(kinds(&seq), vec![ChipKind::Phrase, ChipKind::Site, ChipKind::Filetype]);
    assert_eq!(seq.compose(), "\"{q}\"");
}

#[test]
fn ids_are_unique_across_removals() {
    let mut seq = ChipSequence::empty();
    let a = seq.add(ChipKind::Site);
    assert!(seq.remove(&a));
    let b = seq.add(ChipKind::Site);
    assert_ne!(a, b);
    assert!(!seq.remove(&a), "removing twice is a no-op");
}

#[test]
fn update_changes_only_the_target() {
    let mut seq = ChipSequence::default();
    let site = seq.iter().nth(1).map(|c| c.id.clone()).expect("site chip");
    assert!(seq.update(&site, ".gov"));
    assert!(!seq.update("nope", "x"));
    assert_eq!(seq.compose(), "\"{q}\" site:.gov");
}

#[test]
fn move_chip_takes_destination_slot() {
    let mut seq = ChipSequence::from_parts([(ChipKind::Site, "a"), (ChipKind::Site, "b"), (ChipKind::Site, "c")]);
    let ids: Vec<String> = seq.iter().map(|c| c.id.clone()).collect();
    assert!(seq.move_chip(&ids[2], &ids[0]));
    assert_eq!(seq.compose(), "site:c site:a site:b");
    assert!(seq.move_chip(&ids[2], &ids[1]));
    assert_eq!(seq.compose(), "site:a site:b site:c");
    assert!(seq.move_chip(&ids[2], &ids[1]));
    assert_eq!(seq.compose(), "site:a site:c site:b");
    assert!(!seq.move_chip(&ids[0], &ids[0]));
    assert!(!seq.move_chip(&ids[0], "missing"));
}

#[test]
fn reset_leaves_single_phrase() {
    let mut seq = ChipSequence::default();
    seq.add(ChipKind::Exclude);
    seq.reset();
    assert_eq!(kinds(&seq), vec![ChipKind::Phrase]);
}

#[test]
fn parse_specs_accepts_kind_equals_value() {
    let seq = ChipSequence::parse_specs(&["phrase=", "site=.gov", "or=a,b", "exclude=x"]).expect("specs");
    assert_eq!(seq.compose(), "\"{q}\" site:.gov (a OR b) -x");
    assert_eq!(ChipSequence::parse_specs(&["site"]), Err(Error::MalformedChipSpec("site".into())));
    assert_eq!(ChipSequence::parse_specs(&["where=x"]), Err(Error::UnknownChipKind("where".into())));
}

#[test]
fn wrap_fills_first_phrase_or_prepends_one() {
    let wrap = Suggestion { action: SuggestionAction::Wrap, reason: "" };

    let mut seq = ChipSequence::from_parts([(ChipKind::Site, "x.com"), (ChipKind::Phrase, ""), (ChipKind::Phrase, "")]);
    apply_suggestion(&mut seq, &wrap, "Jane Doe");
    assert_eq!(seq.compose(), "site:x.com \"Jane Doe\" \"{q}\"");

    let mut seq = ChipSequence::from_parts([(ChipKind::Site, "x.com")]);
    apply_suggestion(&mut seq, &wrap, "Jane Doe");
    assert_eq!(seq.compose(), "\"Jane Doe\" site:x.com");
}

#[test]
fn add_and_exclude_append_chips() {
    let mut seq = ChipSequence::from_parts([(ChipKind::Phrase, "")]);
    let add = Suggestion { action: SuggestionAction::Add { kind: ChipKind::Filetype, value: "pdf".into() }, reason: "" };
    let ex = Suggestion { action: SuggestionAction::Exclude { term: "pinterest.com".into() }, reason: "" };
    apply_suggestion(&mut seq, &add, "kw");
    apply_suggestion(&mut seq, &ex, "kw");
    assert_eq!(seq.compose(), "\"{q}\" filetype:pdf -pinterest.com");
}

#[test]
fn sequence_survives_json_round_trip_with_id_counter() {
    let mut seq = ChipSequence::default();
    seq.add(ChipKind::InUrl);
    let text = serde_json::to_string(&seq).expect("serialize");
    let mut back: ChipSequence = serde_json::from_str(&text).expect("deserialize");
    assert_eq!(back, seq);
    let fresh = back.add(ChipKind::Exclude);
    assert!(seq.get(&fresh).is_none(), "restored counter keeps minting new ids");
}
