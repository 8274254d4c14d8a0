//! Built-in template catalog, preset packs and the row lists shown per view.

use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;
use std::str::FromStr;

use dorkstation_core::types::KEYWORD_KEY;

use crate::error::CatalogError;
use crate::favorites::Favorites;
use crate::pack::Pack;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Category {
    Person,
    Place,
    Thing,
}

impl Category {
    pub const ALL: [Category; 3] = [Category::Person, Category::Place, Category::Thing];

    pub fn as_str(self) -> &'static str {
        match self {
            Category::Person => "Person",
            Category::Place => "Place",
            Category::Thing => "Thing",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = CatalogError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Category::ALL
            .into_iter()
            .find(|c| c.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| CatalogError::NotFound(format!("category '{}'", s)))
    }
}

/// One ready-made query template.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TemplateRow {
    pub label: String,
    pub template: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub hint: String,
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

impl TemplateRow {
    pub fn new(label: impl Into<String>, template: impl Into<String>, hint: impl Into<String>) -> Self {
        Self { label: label.into(), template: template.into(), hint: hint.into() }
    }

    /// Template with `{q}` replaced by the trimmed keyword.
    pub fn render(&self, keyword: &str) -> String {
        render_row(&self.template, keyword)
    }

    fn matches(&self, needle: &str) -> bool {
        [&self.label, &self.template, &self.hint].iter().any(|s| s.to_lowercase().contains(needle))
    }
}

pub fn render_row(template: &str, keyword: &str) -> String {
    template.replace(&format!("{{{}}}", KEYWORD_KEY), keyword.trim())
}

/// What the template list is currently showing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum View {
    Category(Category),
    Favorites,
}

impl FromStr for View {
    type Err = CatalogError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.trim().eq_ignore_ascii_case("favorites") {
            return Ok(View::Favorites);
        }
        s.parse().map(View::Category)
    }
}

type StaticRow = (&'static str, &'static str, &'static str);

const PERSON: &[StaticRow] = &[
    ("Resumes / CVs", "intitle:resume OR intitle:cv \"{q}\" -job -jobs", "Looks for pages titled resume/CV mentioning the name; excludes job listings."),
    ("PDFs mentioning name", "\"{q}\" filetype:pdf", "Finds PDFs containing the exact phrase."),
    ("Profiles on sites (generic)", "\"{q}\" (site:about.me OR site:medium.com OR site:substack.com OR site:linktr.ee)", "Common personal/profile hubs."),
    ("Leaked credential mentions (defanged)", "\"{q}\" (\"password\" OR \"pass:\" OR \"api_key\" OR \"token\") -site:github.com", "Research-only; filters GitHub noise."),
    ("Images tagged with name", "\"{q}\" site:images.google.com", "Open Google Images for the phrase."),
];

const PLACE: &[StaticRow] = &[
    ("Official .gov references", "\"{q}\" site:.gov", "Results on government domains."),
    ("News coverage", "\"{q}\" site:news.google.com", "Open Google News."),
    ("Maps & reviews", "\"{q}\" (\"hours\" OR \"reviews\" OR \"address\")", "Surfaces maps/review info."),
    ("City/County docs (PDF)", "\"{q}\" filetype:pdf (site:.gov OR site:.us)", "Public planning/permits."),
    ("Images of place", "\"{q}\" site:images.google.com", "Open images."),
];

const THING: &[StaticRow] = &[
    ("Manuals / specs (PDF)", "\"{q}\" (manual OR datasheet OR spec) filetype:pdf", "Technical docs for devices."),
    ("Troubleshooting / support", "\"{q}\" (error OR issue OR troubleshooting OR support)", "Community fixes & KBs."),
    ("Vulnerabilities (info only)", "\"{q}\" (CVE OR vulnerability OR exploit) -site:exploit-db.com", "Research known issues."),
    ("Code samples / repos", "\"{q}\" (site:github.com OR site:gitlab.com OR site:bitbucket.org)", "Open-source references."),
    ("Images of thing", "\"{q}\" site:images.google.com", "Quick visual ID."),
];

struct PresetPack {
    name: &'static str,
    person: &'static [StaticRow],
    place: &'static [StaticRow],
    thing: &'static [StaticRow],
}

const PRESETS: &[PresetPack] = &[
    PresetPack {
        name: "Journalism",
        person: &[
            ("Press mentions (context terms)", "\"{q}\" (interview OR profile OR obituary OR biography)", "Contextual coverage terms."),
            ("Major outlets", "site:propublica.org \"{q}\" OR site:nytimes.com \"{q}\"", "Swap outlets as needed."),
        ],
        place: &[
            ("Budget/meeting agendas", "\"{q}\" (agenda OR minutes OR budget) filetype:pdf site:.gov", "City/county docs."),
            ("Public records portals", "\"{q}\" (FOIA OR public records) site:.gov", "Records policy/portals."),
        ],
        thing: &[("Consumer safety recalls", "\"{q}\" (recall OR safety notice)", "Recall chatter.")],
    },
    PresetPack {
        name: "Cybersecurity",
        person: &[(
            "Researcher writeups",
            "\"{q}\" (site:medium.com OR site:substack.com) (CVE OR exploit OR writeup)",
            "Find technical writeups.",
        )],
        place: &[("Breach reports", "\"{q}\" (breach OR ransomware OR \"incident report\")", "News/DFIR reports.")],
        thing: &[
            ("Official advisories", "\"{q}\" (site:cisa.gov OR site:nvd.nist.gov)", "Primary advisories."),
            ("Admin panels (safe research)", "\"{q}\" (inurl:admin OR intitle:\"login\") -site:github.com", "Do not access without auth."),
        ],
    },
    PresetPack {
        name: "Academics",
        person: &[("Scholar profiles", "\"{q}\" (site:scholar.google.com OR site:researchgate.net)", "Academic footprints.")],
        place: &[("Campus docs PDF", "\"{q}\" filetype:pdf site:.edu", "Syllabi, policies, plans.")],
        thing: &[("Papers & preprints", "\"{q}\" (site:arxiv.org OR site:acm.org OR site:ieeexplore.ieee.org)", "Scholarly sources.")],
    },
];

fn to_rows(rows: &[StaticRow]) -> Vec<TemplateRow> {
    rows.iter().map(|(l, t, h)| TemplateRow::new(*l, *t, *h)).collect()
}

pub fn base_templates(category: Category) -> Vec<TemplateRow> {
    match category {
        Category::Person => to_rows(PERSON),
        Category::Place => to_rows(PLACE),
        Category::Thing => to_rows(THING),
    }
}

pub fn preset_names() -> Vec<&'static str> {
    PRESETS.iter().map(|p| p.name).collect()
}

/// The built-in packs as regular [`Pack`] values.
pub fn preset_packs() -> Vec<Pack> {
    PRESETS
        .iter()
        .map(|p| Pack {
            name: p.name.to_string(),
            author: "Built-in".to_string(),
            person: to_rows(p.person),
            place: to_rows(p.place),
            thing: to_rows(p.thing),
            ..Pack::default()
        })
        .collect()
}

/// Rows for `view`: base rows extended by the selected preset or community
/// pack. `pack` of `"None"` or an unknown name means base rows only.
pub fn rows_for(view: View, pack: &str, community: &[Pack], favorites: &Favorites) -> Vec<TemplateRow> {
    let category = match view {
        View::Favorites => {
            return favorites
                .iter()
                .map(|f| TemplateRow::new(f.label.clone(), f.template.clone(), format!("Saved from {}", f.category)))
                .collect();
        }
        View::Category(c) => c,
    };
    let mut rows = base_templates(category);
    if pack == "None" {
        return rows;
    }
    let extra = match preset_packs().into_iter().find(|p| p.name == pack) {
        Some(preset) => preset.rows(category).to_vec(),
        None => community.iter().find(|p| p.name == pack).map(|p| p.rows(category).to_vec()).unwrap_or_default(),
    };
    rows.extend(extra);
    rows
}

/// Case-insensitive substring filter over label, template and hint.
pub fn filter_rows(rows: Vec<TemplateRow>, filter: &str) -> Vec<TemplateRow> {
    let needle = filter.trim().to_lowercase();
    if needle.is_empty() {
        return rows;
    }
    rows.into_iter().filter(|r| r.matches(&needle)).collect()
}
