use dorkstation_core::types::{Chip, ChipKind, Operator, SensitivityFlag, SubstitutionMap, SuggestionAction};
use dorkstation_core::{compose, detect_sensitive, explain_operators, render, suggest, variants, ChipSequence, MAX_SUGGESTIONS};

fn chips(parts: &[(ChipKind, &str)]) -> Vec<Chip> {
    parts.iter().enumerate().map(|(i, (k, v))| Chip::new(format!("t{}", i), *k, *v)).collect()
}

fn subs(pairs: &[(&str, &str)]) -> SubstitutionMap {
    pairs.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect()
}

#[test]
fn compose_empty_sequence_is_empty_string() {
    assert_eq!(compose(&[]), "");
}

#[test]
fn compose_empty_phrase_reserves_keyword_slot() {
    let c = chips(&[(ChipKind::Phrase, ""), (ChipKind::Site, "x.com")]);
    assert_eq!(compose(&c), "\"{q}\" site:x.com");
}

#[test]
fn compose_or_group_trims_and_drops_blank_terms() {
    assert_eq!(compose(&chips(&[(ChipKind::OrGroup, "a, b ,c")])), "(a OR b OR c)");
    assert_eq!(compose(&chips(&[(ChipKind::OrGroup, "")])), "");
    assert_eq!(compose(&chips(&[(ChipKind::OrGroup, " , ,")])), "");
}

#[test]
fn compose_exclude_prefixes_each_term_once() {
    assert_eq!(compose(&chips(&[(ChipKind::Exclude, "foo,-bar")])), "-foo -bar");
    assert_eq!(compose(&chips(&[(ChipKind::Exclude, " ")])), "");
}

#[test]
fn compose_keeps_order_and_repeated_prefixes() {
    let c = chips(&[
        (ChipKind::InTitle, "resume"),
        (ChipKind::Site, "a.com"),
        (ChipKind::Filetype, ""),
        (ChipKind::Site, "b.com"),
        (ChipKind::InUrl, " admin "),
        (ChipKind::Phrase, "jane  doe"),
    ]);
    assert_eq!(compose(&c), "intitle:resume site:a.com site:b.com inurl:admin \"jane doe\"");
}

#[test]
fn compose_all_empty_filters_yield_empty_string() {
    let c = chips(&[(ChipKind::Site, ""), (ChipKind::Filetype, "  "), (ChipKind::InTitle, "")]);
    assert_eq!(compose(&c), "");
}

#[test]
fn render_fills_named_placeholders_then_keyword() {
    let out = render("\"{q}\" site:{s}", &subs(&[("s", "gov")]), "jane doe");
    assert_eq!(out, "\"jane doe\" site:gov");
}

#[test]
fn render_prefers_nonblank_q_substitution_over_keyword() {
    let out = render("\"{q}\"", &subs(&[("q", "  override ")]), "keyword");
    assert_eq!(out, "\"override\"");
    let out = render("\"{q}\"", &subs(&[("q", "")]), " keyword ");
    assert_eq!(out, "\"keyword\"");
}

#[test]
fn render_missing_values_become_empty_and_whitespace_collapses() {
    let out = render("{q}   {date}  filetype:{filetype}", &subs(&[("date", ""), ("filetype", "pdf")]), "x");
    assert_eq!(out, "x filetype:pdf");
    // Placeholders without a map entry are left alone.
    assert_eq!(render("{location} {q}", &SubstitutionMap::new(), "x"), "{location} x");
}

#[test]
fn render_is_idempotent_once_placeholders_are_gone() {
    let map = subs(&[("s", "gov")]);
    let once = render("\"{q}\"  site:{s} ", &map, "Jane Doe");
    let twice = render(&once, &map, "Jane Doe");
    assert_eq!(once, twice);
}

#[test]
fn explain_reports_canonical_order_only_for_present_operators() {
    let ops: Vec<Operator> = explain_operators("\"a\" site:x filetype:pdf").into_iter().map(|f| f.operator).collect();
    assert_eq!(ops, vec![Operator::Quotes, Operator::Site, Operator::Filetype]);

    let ops: Vec<Operator> = explain_operators("(x OR y) -spam inurl:a INTITLE:b \"q\"").into_iter().map(|f| f.operator).collect();
    assert_eq!(
        ops,
        vec![Operator::Quotes, Operator::InTitle, Operator::InUrl, Operator::Or, Operator::Exclude, Operator::Parentheses]
    );
}

#[test]
fn explain_distinguishes_hyphenated_words_from_exclusion() {
    assert!(explain_operators("a-b").is_empty());
    assert_eq!(explain_operators("-b").len(), 1);
    assert!(explain_operators("word -123").is_empty());
}

#[test]
fn explain_or_must_be_a_standalone_uppercase_token() {
    assert!(explain_operators("ORegon for sale").is_empty());
    assert!(explain_operators("this or that").is_empty());
    assert_eq!(explain_operators("this OR that")[0].operator, Operator::Or);
}

#[test]
fn explain_reports_each_operator_once() {
    let findings = explain_operators("site:a site:b site:c");
    assert_eq!(findings.len(), 1);
    assert_eq!(findings[0].label, "site:");
}

#[test]
fn explain_needs_both_parentheses() {
    assert!(explain_operators("(unbalanced").is_empty());
    assert_eq!(explain_operators(")(")[0].operator, Operator::Parentheses);
}

#[test]
fn detect_sensitive_admin_and_credentials() {
    let flags = detect_sensitive("inurl:admin password");
    let labels: Vec<&str> = flags.iter().map(|f| f.label()).collect();
    assert_eq!(labels, vec!["admin/login paths", "credential terms"]);
}

#[test]
fn detect_sensitive_directory_listing_and_whole_words() {
    assert_eq!(detect_sensitive("intitle:\"Index Of\" mp3"), vec![SensitivityFlag::DirectoryListing]);
    assert_eq!(detect_sensitive("index.of /backup"), vec![SensitivityFlag::DirectoryListing]);
    assert!(detect_sensitive("passwords tokens inurl:administrator").is_empty());
    assert_eq!(detect_sensitive("INURL: Login"), vec![SensitivityFlag::AdminPaths]);
}

#[test]
fn suggest_device_keyword_proposes_pdf() {
    let s = suggest("Acme XR-200 Router", "");
    assert!(s.iter().any(|x| x.action == SuggestionAction::Add { kind: ChipKind::Filetype, value: "pdf".into() }));
    let s = suggest("Acme XR-200 Router", "\"{q}\" filetype:PDF");
    assert!(s.is_empty(), "already has a pdf filter and quotes: {:?}", s);
}

#[test]
fn suggest_institution_keyword_proposes_gov() {
    let s = suggest("City of Springfield", "");
    assert!(s.iter().any(|x| x.action == SuggestionAction::Add { kind: ChipKind::Site, value: ".gov".into() }));
    assert!(suggest("City of Springfield", "\"{q}\" site:.edu").is_empty());
}

#[test]
fn suggest_keeps_rule_priority_and_cap() {
    let s = suggest("city router design model", "");
    assert!(s.len() <= MAX_SUGGESTIONS);
    let labels: Vec<String> = s.iter().map(|x| x.label()).collect();
    assert_eq!(labels, vec!["+filetype:pdf", "+site:.gov", "Wrap in \"…\"", "-pinterest.com"]);
}

#[test]
fn suggest_single_word_without_intent_is_empty() {
    assert!(suggest("springfield", "").is_empty());
    assert!(suggest("", "").is_empty());
}

#[test]
fn end_to_end_compose_then_render() {
    let seq = ChipSequence::from_parts([(ChipKind::Phrase, ""), (ChipKind::Site, "gov")]);
    let out = render(&seq.compose(), &SubstitutionMap::new(), "Jane Doe");
    assert_eq!(out, "\"Jane Doe\" site:gov");
}

#[test]
fn variants_dedupe_and_cap() {
    assert!(variants("").is_empty());
    let v = variants("\"x\" site:.gov");
    assert_eq!(
        v,
        vec![
            "\"x\" site:.gov -site:pinterest.com".to_string(),
            "\"x\" site:.edu".to_string(),
            "\"x\" site:.gov filetype:pdf".to_string(),
            "intitle:(report OR resume) \"x\" site:.gov".to_string(),
        ]
    );
    // Without site:.gov the replacement is the query itself.
    let v = variants("x filetype:pdf intitle:y");
    assert_eq!(v, vec!["x filetype:pdf intitle:y -site:pinterest.com".to_string(), "x filetype:pdf intitle:y".to_string()]);
}
