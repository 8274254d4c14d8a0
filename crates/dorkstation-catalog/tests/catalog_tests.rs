use dorkstation_catalog::collections::CollectionItem;
use dorkstation_catalog::engine::{get_engine, is_known, to_search_url, ENGINES};
use dorkstation_catalog::pack::Pack;
use dorkstation_catalog::quiz::{Quiz, QUIZ_BANK};
use dorkstation_catalog::templates::{base_templates, filter_rows, preset_names, rows_for, TemplateRow};
use dorkstation_catalog::{AddOutcome, Category, Collections, Favorites, ToggleOutcome, View};
use dorkstation_core::config::ENGINE_KEYS;
use dorkstation_core::types::ChipKind;
use dorkstation_core::ChipSequence;

#[test]
fn rows_extend_base_with_selected_pack() {
    let favs = Favorites::default();
    let base = rows_for(View::Category(Category::Place), "None", &[], &favs);
    assert_eq!(base.len(), 5);
    let journalism = rows_for(View::Category(Category::Place), "Journalism", &[], &favs);
    assert_eq!(journalism.len(), 7);
    let unknown = rows_for(View::Category(Category::Place), "Nope", &[], &favs);
    assert_eq!(unknown, base);

    let community = vec![Pack {
        name: "Local".into(),
        place: vec![TemplateRow::new("Mine", "\"{q}\" mine", "")],
        ..Pack::default()
    }];
    let rows = rows_for(View::Category(Category::Place), "Local", &community, &favs);
    assert_eq!(rows.last().map(|r| r.label.as_str()), Some("Mine"));
    assert_eq!(preset_names(), vec!["Journalism", "Cybersecurity", "Academics"]);
}

#[test]
fn favorites_view_lists_saved_rows() {
    let mut favs = Favorites::default();
    favs.toggle(Category::Thing, "Manuals", "\"{q}\" manual");
    let rows = rows_for(View::Favorites, "None", &[], &favs);
    assert_eq!(rows, vec![TemplateRow::new("Manuals", "\"{q}\" manual", "Saved from Thing")]);
    assert_eq!("favorites".parse::<View>().expect("view"), View::Favorites);
    assert_eq!("place".parse::<View>().expect("view"), View::Category(Category::Place));
    assert!("Collections".parse::<View>().is_err());
}

#[test]
fn filter_and_render_rows() {
    let rows = filter_rows(base_templates(Category::Person), "pdf");
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].render("  Jane Doe "), "\"Jane Doe\" filetype:pdf");
    assert_eq!(filter_rows(base_templates(Category::Person), " ").len(), 5);
}

#[test]
fn toggle_adds_then_removes() {
    let mut favs = Favorites::default();
    assert_eq!(favs.toggle(Category::Person, "A", "t"), ToggleOutcome::Added);
    assert!(favs.contains("Person|A|t"));
    assert_eq!(favs.toggle(Category::Person, "A", "t"), ToggleOutcome::Removed);
    assert!(favs.is_empty());
}

#[test]
fn custom_favorite_is_labelled_after_phrase() {
    let mut favs = Favorites::default();
    let chips = ChipSequence::from_parts([(ChipKind::Phrase, ""), (ChipKind::Site, ".gov")]);
    assert_eq!(favs.add_custom(Category::Place, &chips), AddOutcome::Added);
    assert_eq!(favs.add_custom(Category::Place, &chips), AddOutcome::AlreadyPresent);
    let fav = &favs.as_slice()[0];
    assert_eq!(fav.label, "Custom (Visual): {q}");
    assert_eq!(fav.template, "\"{q}\" site:.gov");

    let named = ChipSequence::from_parts([(ChipKind::Phrase, "acme")]);
    favs.add_custom(Category::Thing, &named);
    assert_eq!(favs.as_slice()[1].label, "Custom (Visual): acme");
}

#[test]
fn merge_import_keeps_new_ids_only() {
    let mut favs = Favorites::default();
    favs.toggle(Category::Person, "A", "t");
    let text = r#"[
        {"id": "Person|A|t", "label": "A", "template": "t", "category": "Person"},
        {"id": "Place|B|u", "label": "B", "template": "u", "category": "Place"},
        {"id": "", "label": "C", "template": "v", "category": "Place"},
        {"id": "Thing|D|w", "label": "D", "template": "w", "category": "Galaxy"}
    ]"#;
    assert_eq!(favs.merge_import(text).expect("merge"), 1);
    assert_eq!(favs.len(), 2);
    assert!(favs.merge_import(r#"{"id": "x"}"#).is_err());
}

#[test]
fn collections_reject_duplicate_items() {
    let mut colls = Collections::default();
    let id = colls.create("Leads", "", 1_000).id.clone();
    assert!(id.starts_with("COLL_"));
    let other = colls.create("Leads", "", 1_000).id.clone();
    assert_ne!(id, other, "ids stay unique for identical name and time");

    let item = CollectionItem { label: "A".into(), template: "t".into(), category: Category::Person };
    assert_eq!(colls.add_item(&id, item.clone(), 2_000).expect("add"), AddOutcome::Added);
    assert_eq!(colls.add_item(&id, item.clone(), 3_000).expect("add"), AddOutcome::AlreadyPresent);
    assert_eq!(colls.get(&id).map(|c| c.updated_at), Some(2_000));
    assert!(colls.add_item("COLL_missing", item, 1).is_err());

    assert!(!colls.remove_item(&id, 5, 4_000));
    assert!(colls.remove_item(&id, 0, 4_000));
    assert!(colls.delete(&other));
    assert_eq!(colls.len(), 1);
}

#[test]
fn search_urls_encode_query_per_engine() {
    let url = to_search_url("google", "\"Jane Doe\" site:.gov").expect("url");
    assert_eq!(url, "https://www.google.com/search?q=%22Jane+Doe%22+site%3A.gov");
    let url = to_search_url("startpage", "a&b").expect("url");
    assert_eq!(url, "https://www.startpage.com/do/search?query=a%26b");
    assert_eq!(get_engine("unknown").label, "Google");
    assert!(is_known("brave"));
    assert!(!is_known("bing"));
}

#[test]
fn quiz_counts_first_answer_only_and_wraps() {
    let mut quiz = Quiz::default();
    assert_eq!(quiz.answer(1), Some(true));
    assert_eq!(quiz.answer(1), None);
    assert_eq!(quiz.correct, 1);
    quiz.next();
    assert_eq!(quiz.answer(9), None);
    assert_eq!(quiz.answer(0), Some(false));
    for _ in 0..QUIZ_BANK.len() - 1 {
        quiz.next();
    }
    assert_eq!(quiz.current, 0);
    assert_eq!(quiz.question().id, "q1");
}

#[test]
fn engine_table_matches_configurable_keys() {
    let keys: Vec<&str> = ENGINES.iter().map(|e| e.key).collect();
    assert_eq!(keys, ENGINE_KEYS);
    assert!(ENGINE_KEYS.iter().all(|k| is_known(k)));
    assert!(!is_known("bing"));
}
