//! Handover section headers.
//!
//! A header is a leading marker symbol plus a keyword. Keeping every
//! keyword stem in one table makes the section policy reviewable in one
//! place and keeps item lines (which use `-`, `•`, `>` bullets, never
//! marker symbols) from ever being mistaken for headers.

use crate::app::models::ExtraSections;

/// Marker symbols that can open a section header line
const MARKERS: &[char] = &[
    '\u{1F7E9}', // green square
    '\u{1F7E5}', // red square
    '\u{1F7E8}', // yellow square
    '\u{1F7E6}', // blue square
    '\u{1F7EA}', // purple square
    '\u{1F538}', // small orange diamond
    '\u{1F539}', // small blue diamond
    '\u{25FE}',  // black medium-small square
    '\u{25AA}',  // black small square
    '\u{25A0}',  // black square
];

/// One of the twelve auxiliary sections
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExtraKind {
    Proj25,
    Proj50,
    Proj100,
    Proj200,
    Phase,
    Wheels,
    Engines,
    Age,
    Tools,
    Fuel,
    Armament,
    Lessons,
}

impl ExtraKind {
    /// The list this section's lines accumulate into
    pub fn list_mut(self, extra: &mut ExtraSections) -> &mut Vec<String> {
        match self {
            ExtraKind::Proj25 => &mut extra.proj_25hr,
            ExtraKind::Proj50 => &mut extra.proj_50hr,
            ExtraKind::Proj100 => &mut extra.proj_100hr,
            ExtraKind::Proj200 => &mut extra.proj_200hr,
            ExtraKind::Phase => &mut extra.phase,
            ExtraKind::Wheels => &mut extra.wheels,
            ExtraKind::Engines => &mut extra.engines,
            ExtraKind::Age => &mut extra.age,
            ExtraKind::Tools => &mut extra.tools,
            ExtraKind::Fuel => &mut extra.fuel,
            ExtraKind::Armament => &mut extra.armament,
            ExtraKind::Lessons => &mut extra.lessons,
        }
    }
}

/// An open handover section
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Section {
    Completed,
    Outstanding,
    Extra(ExtraKind),
}

/// Header keyword stems, compared against the lowercased, space-stripped
/// header text by prefix. Stems rather than full phrases, so "Fuel" and
/// "Fuel Status" both classify, as do "Lessons Learned" and "Lessons
/// Learnt".
static HEADER_KEYS: &[(&str, Section)] = &[
    ("jobcompleted", Section::Completed),
    ("jobscompleted", Section::Completed),
    ("joboutstanding", Section::Outstanding),
    ("jobsoutstanding", Section::Outstanding),
    ("outstanding", Section::Outstanding),
    ("25hr", Section::Extra(ExtraKind::Proj25)),
    ("50hr", Section::Extra(ExtraKind::Proj50)),
    ("100hr", Section::Extra(ExtraKind::Proj100)),
    ("200hr", Section::Extra(ExtraKind::Proj200)),
    ("phase", Section::Extra(ExtraKind::Phase)),
    ("wheel", Section::Extra(ExtraKind::Wheels)),
    ("tyre", Section::Extra(ExtraKind::Wheels)),
    ("engine", Section::Extra(ExtraKind::Engines)),
    ("age", Section::Extra(ExtraKind::Age)),
    ("tool", Section::Extra(ExtraKind::Tools)),
    ("fuel", Section::Extra(ExtraKind::Fuel)),
    ("armament", Section::Extra(ExtraKind::Armament)),
    ("lessons", Section::Extra(ExtraKind::Lessons)),
];

/// Classify a line as a section header.
///
/// The line must start with a marker symbol; the keyword may follow any run
/// of further symbols or whitespace. Everything else - item bullets, code
/// lines, narrative - returns `None`.
pub fn classify_header(line: &str) -> Option<Section> {
    let trimmed = line.trim();
    let first = trimmed.chars().next()?;
    if !MARKERS.contains(&first) {
        return None;
    }

    let keyword: String = trimmed
        .trim_start_matches(|c: char| !c.is_alphanumeric())
        .to_lowercase()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join("");

    HEADER_KEYS
        .iter()
        .find(|(key, _)| keyword.starts_with(key))
        .map(|&(_, section)| section)
}
