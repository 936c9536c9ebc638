//! Word rendering shared by every mode.
//!
//! Modes only decide *which* rows and *which* fields; the display strings for
//! a word (with or without its article, singular or plural) come from here.

use crate::drill_engine::models::Record;

/// Definite article used for every plural noun.
pub const PLURAL_ARTICLE: &str = "die";

fn non_empty(field: &Option<String>) -> Option<&str> {
    field.as_deref().filter(|s| !s.is_empty())
}

/// Render a record's word with its article.
///
/// Singular uses the record's own article when present; plural always uses
/// [`PLURAL_ARTICLE`] with the `plural` field. An absent or empty word renders
/// to `""` whatever the article.
pub fn render(record: &Record, use_plural: bool) -> String {
    let (article, word) = if use_plural {
        (PLURAL_ARTICLE, non_empty(&record.plural))
    } else {
        (non_empty(&record.article).unwrap_or(""), non_empty(&record.word))
    };
    match word {
        Some(word) => format!("{article} {word}").trim().to_string(),
        None => String::new(),
    }
}

/// Word without any article (empty when absent).
pub fn bare_word(record: &Record) -> String {
    record.word.clone().unwrap_or_default()
}

/// Prefix `text` with `[category]` when `show` is set.
pub fn tagged(record: &Record, text: &str, show: bool) -> String {
    if show {
        format!("[{}] {}", record.category_str(), text)
    } else {
        text.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rec(article: Option<&str>, word: Option<&str>, plural: Option<&str>) -> Record {
        Record {
            article: article.map(String::from),
            word: word.map(String::from),
            plural: plural.map(String::from),
            translation: Some("table".into()),
            category: Some("noun".into()),
        }
    }

    #[test]
    fn singular_uses_record_article() {
        assert_eq!(render(&rec(Some("der"), Some("Tisch"), None), false), "der Tisch");
    }

    #[test]
    fn missing_article_collapses_to_word() {
        assert_eq!(render(&rec(None, Some("laufen"), None), false), "laufen");
        assert_eq!(render(&rec(Some(""), Some("laufen"), None), false), "laufen");
    }

    #[test]
    fn empty_word_renders_nothing_even_with_article() {
        assert_eq!(render(&rec(Some("der"), None, None), false), "");
        assert_eq!(render(&rec(Some("der"), Some(""), None), false), "");
    }

    #[test]
    fn plural_always_uses_die() {
        assert_eq!(render(&rec(Some("der"), Some("Tisch"), Some("Tische")), true), "die Tische");
    }

    #[test]
    fn empty_plural_never_renders_lone_article() {
        assert_eq!(render(&rec(Some("die"), Some("Katze"), Some("")), true), "");
        assert_eq!(render(&rec(Some("die"), Some("Katze"), None), true), "");
    }

    #[test]
    fn tag_respects_show_flag() {
        let r = rec(Some("der"), Some("Tisch"), None);
        assert_eq!(tagged(&r, "x", true), "[noun] x");
        assert_eq!(tagged(&r, "x", false), "x");
    }
}
