use std::env;
use std::fs;
use std::time::{SystemTime, UNIX_EPOCH};

use tracing_subscriber::EnvFilter;

use dorkstation_catalog::engine::{self, get_engine, to_search_url};
use dorkstation_catalog::pack::{favorites_to_pack, import_packs, remove_pack, Pack};
use dorkstation_catalog::store::{keys, load_json, save_json, Preferences};
use dorkstation_catalog::templates::{filter_rows, preset_names, rows_for};
use dorkstation_catalog::{Category, Favorites, FileStore, ToggleOutcome, View};
use dorkstation_core::config::Config;
use dorkstation_core::{explain_operators, variants, ChipSequence, QuerySession};

const USAGE: &str = "Usage: dorkstation <command> [args...]

Commands:
  build <keyword> [kind=value ...] [--sub name=value ...] [--engine key] [--json]
  explain <text>
  variants <query>
  templates <Person|Place|Thing|Favorites> <keyword> [--pack name] [--filter text]
  url <engine> <query>
  pack <import <file> | export <name> [author] | list | remove <name>>
  fav <add <category> <label> <template> | list>";

fn parse_args() -> (String, Vec<String>) {
    let mut args: Vec<String> = env::args().collect();
    args.remove(0);
    if args.is_empty() { eprintln!("{}", USAGE); std::process::exit(1); }
    let cmd = args.remove(0);
    (cmd, args)
}

/// Split `--flag value` pairs (and bare `--json`) from positional args.
fn take_flags(args: Vec<String>) -> (Vec<String>, Vec<(String, String)>, bool) {
    let mut positional = Vec::new();
    let mut flags = Vec::new();
    let mut json = false;
    let mut it = args.into_iter();
    while let Some(arg) = it.next() {
        if arg == "--json" {
            json = true;
        } else if let Some(name) = arg.strip_prefix("--") {
            let value = it.next().unwrap_or_default();
            flags.push((name.to_string(), value));
        } else {
            positional.push(arg);
        }
    }
    (positional, flags, json)
}

fn flag<'a>(flags: &'a [(String, String)], name: &str) -> Option<&'a str> {
    flags.iter().find(|(n, _)| n == name).map(|(_, v)| v.as_str())
}

fn usage_exit(msg: &str) -> ! {
    eprintln!("{}", msg);
    std::process::exit(1)
}

fn now_ms() -> u64 {
    SystemTime::now().duration_since(UNIX_EPOCH).map(|d| d.as_millis() as u64).unwrap_or(0)
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .init();

    let config = Config::load().map_err(|e| { eprintln!("Error loading config: {}", e); e })?;
    let settings = config.settings()?;
    let store = FileStore::new(config.store_dir()?);
    let prefs: Preferences = load_json(&store, keys::PREFERENCES, Preferences {
        engine: settings.engine.default.clone(),
        ..Preferences::default()
    });
    if !engine::is_known(&prefs.engine) {
        tracing::warn!(engine = %prefs.engine, "unknown engine, falling back to Google");
    }

    let (cmd, args) = parse_args();
    match cmd.as_str() {
        "build" => {
            let (positional, flags, json) = take_flags(args);
            let Some((keyword, specs)) = positional.split_first() else { usage_exit("Usage: dorkstation build <keyword> [kind=value ...]") };
            let chips = if specs.is_empty() { ChipSequence::default() } else { ChipSequence::parse_specs(specs)? };
            let mut session = QuerySession::new(keyword.clone(), chips);
            session.substitutions = settings.substitutions.clone();
            for (_, value) in flags.iter().filter(|(n, _)| n == "sub") {
                let (k, v) = value.split_once('=').unwrap_or_else(|| usage_exit("--sub expects name=value"));
                session.substitutions.insert(k.to_string(), v.to_string());
                tracing::debug!(key = k, "substitution set");
            }
            let engine_key = flag(&flags, "engine").unwrap_or(&prefs.engine);
            let report = session.report();
            let url = if session.is_ready() && !report.rendered.is_empty() { Some(to_search_url(engine_key, &report.rendered)?) } else { None };
            save_json(&store, keys::BUILDER, &session)?;
            if json {
                let mut value = serde_json::to_value(&report)?;
                value["url"] = serde_json::to_value(&url)?;
                println!("{}", serde_json::to_string_pretty(&value)?);
                return Ok(());
            }
            println!("Template: {}", report.template);
            println!("Query:    {}", report.rendered);
            if let Some(url) = url { println!("Open in {}: {}", get_engine(engine_key).label, url); }
            for f in &report.findings { println!("  {:<16} {}", f.label, f.description); }
            if !report.flags.is_empty() {
                let labels: Vec<&str> = report.flags.iter().map(|f| f.label()).collect();
                println!("Heads-up: sensitive operators detected ({}). Use only for legitimate research.", labels.join(", "));
            }
            for s in &report.suggestions { println!("Suggestion {:<18} {}", s.label(), s.reason); }
        }
        "explain" => {
            let text = args.join(" ");
            let findings = explain_operators(&text);
            if findings.is_empty() { println!("No operators detected."); }
            for f in findings { println!("{:<16} {}", f.label, f.description); }
        }
        "variants" => {
            for v in variants(&args.join(" ")) { println!("{}", v); }
        }
        "templates" => {
            let (positional, flags, _) = take_flags(args);
            let view: View = positional.first().map(|s| s.parse()).transpose()?.unwrap_or(View::Category(Category::Person));
            let keyword = positional.get(1).cloned().unwrap_or_default();
            let favorites: Favorites = load_json(&store, keys::FAVORITES, Favorites::default());
            let community: Vec<Pack> = load_json(&store, keys::COMMUNITY_PACKS, Vec::new());
            let pack = flag(&flags, "pack").unwrap_or("None");
            let rows = filter_rows(rows_for(view, pack, &community, &favorites), flag(&flags, "filter").unwrap_or(""));
            for row in rows {
                let query = row.render(&keyword);
                println!("{}\n  {}\n  {}", row.label, query, row.hint);
                if !keyword.trim().is_empty() { println!("  {}", to_search_url(&prefs.engine, &query)?); }
            }
        }
        "url" => {
            let engine_key = args.first().cloned().unwrap_or_else(|| usage_exit("Usage: dorkstation url <engine> <query>"));
            println!("{}", to_search_url(&engine_key, &args[1..].join(" "))?);
        }
        "pack" => {
            let mut packs: Vec<Pack> = load_json(&store, keys::COMMUNITY_PACKS, Vec::new());
            match args.first().map(String::as_str) {
                Some("import") => {
                    let file = args.get(1).unwrap_or_else(|| usage_exit("Usage: dorkstation pack import <file>"));
                    let summary = import_packs(&mut packs, &fs::read_to_string(file)?)?;
                    for r in &summary.rejected { eprintln!("Skipped: {}", r); }
                    if summary.added.is_empty() { println!("No new valid packs found to import."); }
                    else { save_json(&store, keys::COMMUNITY_PACKS, &packs)?; println!("Imported {} new pack(s).", summary.added.len()); }
                }
                Some("export") => {
                    let name = args.get(1).cloned().unwrap_or_default();
                    let author = args.get(2).cloned().unwrap_or_default();
                    let favorites: Favorites = load_json(&store, keys::FAVORITES, Favorites::default());
                    if favorites.is_empty() { usage_exit("No favorites to export."); }
                    let pack = favorites_to_pack(favorites.as_slice(), &name, &author, now_ms());
                    let file = pack.export_file_name();
                    fs::write(&file, serde_json::to_string_pretty(&pack)?)?;
                    println!("Wrote {}", file);
                }
                Some("list") => {
                    for name in preset_names() { println!("{} (built-in)", name); }
                    for p in &packs { println!("{} by {}", p.name, if p.author.is_empty() { "Unknown" } else { p.author.as_str() }); }
                }
                Some("remove") => {
                    let name = args.get(1).unwrap_or_else(|| usage_exit("Usage: dorkstation pack remove <name>"));
                    if remove_pack(&mut packs, name) { save_json(&store, keys::COMMUNITY_PACKS, &packs)?; println!("Pack removed."); }
                    else { println!("No pack named {}", name); }
                }
                _ => usage_exit(USAGE),
            }
        }
        "fav" => {
            let mut favorites: Favorites = load_json(&store, keys::FAVORITES, Favorites::default());
            match args.first().map(String::as_str) {
                Some("add") if args.len() >= 4 => {
                    let category: Category = args[1].parse()?;
                    match favorites.toggle(category, &args[2], &args[3]) {
                        ToggleOutcome::Added => println!("Saved to favorites"),
                        ToggleOutcome::Removed => println!("Removed from favorites"),
                    }
                    save_json(&store, keys::FAVORITES, &favorites)?;
                }
                Some("list") => {
                    for f in favorites.iter() { println!("[{}] {}\n  {}", f.category, f.label, f.template); }
                }
                _ => usage_exit(USAGE),
            }
        }
        _ => { eprintln!("Unknown command: {}\n{}", cmd, USAGE); std::process::exit(1); }
    }
    Ok(())
}
