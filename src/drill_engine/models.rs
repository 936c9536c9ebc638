use std::fmt;
use clap::ValueEnum;
use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Vocabulary records
// ---------------------------------------------------------------------------

/// Category token that marks a row as a noun for the noun-only modes.
pub const NOUN_CATEGORY: &str = "noun";

/// One vocabulary entry. Every field is optional; a missing CSV column or an
/// empty cell both load as `None`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    pub article: Option<String>,
    pub word: Option<String>,
    pub plural: Option<String>,
    pub translation: Option<String>,
    pub category: Option<String>,
}

impl Record {
    pub fn is_noun(&self) -> bool {
        self.category.as_deref() == Some(NOUN_CATEGORY)
    }

    /// Translation, or the empty string when absent.
    pub fn translation_str(&self) -> &str {
        self.translation.as_deref().unwrap_or("")
    }

    /// Category, or the empty string when absent.
    pub fn category_str(&self) -> &str {
        self.category.as_deref().unwrap_or("")
    }
}

/// Column names recognised by the loader, in canonical order.
pub const KNOWN_COLUMNS: [&str; 5] = ["article", "word", "plural", "translation", "category"];

/// Unified, read-only collection of records from every loaded source.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Table {
    /// Union of the header columns seen across sources, first-seen order.
    pub columns: Vec<String>,
    pub records: Vec<Record>,
}

impl Table {
    pub fn new(records: Vec<Record>) -> Self {
        Table {
            columns: KNOWN_COLUMNS.iter().map(|c| c.to_string()).collect(),
            records,
        }
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn has_column(&self, name: &str) -> bool {
        self.columns.iter().any(|c| c == name)
    }

    /// Rows whose category is exactly `"noun"`.
    pub fn nouns(&self) -> Vec<&Record> {
        self.records.iter().filter(|r| r.is_noun()).collect()
    }
}

// ---------------------------------------------------------------------------
// Modes
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum DrillMode {
    /// German word as prompt, translation as answer
    German,
    /// Translation as prompt, German word as answer
    Translated,
    /// Half german, half translated, shuffled together
    Both,
    /// Singular noun as prompt, plural as answer
    Plural,
    /// Noun without article as prompt, with article as answer
    Article,
    /// Print word and translation side by side without quizzing
    Train,
}

/// Whether the session blocks for input before revealing each answer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ModeKind {
    Test,
    Train,
}

impl DrillMode {
    pub const ALL: [DrillMode; 6] = [
        DrillMode::German,
        DrillMode::Translated,
        DrillMode::Both,
        DrillMode::Plural,
        DrillMode::Article,
        DrillMode::Train,
    ];

    pub fn name(self) -> &'static str {
        match self {
            DrillMode::German     => "german",
            DrillMode::Translated => "translated",
            DrillMode::Both       => "both",
            DrillMode::Plural     => "plural",
            DrillMode::Article    => "article",
            DrillMode::Train      => "train",
        }
    }

    pub fn kind(self) -> ModeKind {
        match self {
            DrillMode::Train => ModeKind::Train,
            _                => ModeKind::Test,
        }
    }

    /// Noun-only modes sample from `category == "noun"` rows.
    pub fn nouns_only(self) -> bool {
        matches!(self, DrillMode::Plural | DrillMode::Article)
    }
}

impl fmt::Display for DrillMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

// ---------------------------------------------------------------------------
// Request / output
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DrillRequest {
    pub mode: DrillMode,
    /// Rows to draw; `None` means the whole table.
    pub length: Option<usize>,
    pub show_category: bool,
    pub rng_seed: Option<u64>,
}

impl DrillRequest {
    /// Minimal request: whole table, categories shown, entropy seed.
    pub fn new(mode: DrillMode) -> Self {
        DrillRequest {
            mode,
            length: None,
            show_category: true,
            rng_seed: None,
        }
    }

    /// Requested length clamped to `available` rows.
    pub fn effective_length(&self, available: usize) -> usize {
        self.length.map_or(available, |n| n.min(available))
    }
}

/// One prompt / expected-answer unit, in display order.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Pair {
    pub prompt: String,
    pub expected: String,
}

impl Pair {
    pub fn new(prompt: impl Into<String>, expected: impl Into<String>) -> Self {
        Pair { prompt: prompt.into(), expected: expected.into() }
    }
}

impl fmt::Display for Pair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} -> {}", self.prompt, self.expected)
    }
}
