use serde::{Deserialize, Serialize};

use super::values::Literal;

pub const ROW_FIELDS: usize = 10;
pub const DEFAULT_VIEW_COUNT: i64 = 100;

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Article {
    pub title: String,
    pub slug: String,
    pub content: String,
    pub excerpt: String,
    pub cover_image: String,
    pub category_id: String,
    pub author_id: String,
    pub status: String,
    pub view_count: i64,
    pub language: String
}

fn view_count(token: &str) -> i64 {
    if token.is_empty() || !token.bytes().all(|b| b.is_ascii_digit()) {
        return DEFAULT_VIEW_COUNT;
    }
    token.parse().unwrap_or(DEFAULT_VIEW_COUNT)
}

/// Maps a statement's literals onto an [`Article`] by position.
#[derive(Clone, Copy, Debug)]
pub struct RowBuilder {
    min_values: usize
}

impl Default for RowBuilder {
    fn default() -> Self {
        Self { min_values: ROW_FIELDS }
    }
}

impl RowBuilder {
    /// Thresholds below the field count are raised to it.
    pub fn with_min_values(min_values: usize) -> Self {
        Self { min_values: min_values.max(ROW_FIELDS) }
    }

    pub fn min_values(&self) -> usize {
        self.min_values
    }

    pub fn build(&self, literals: Vec<Literal>) -> Option<Article> {
        if literals.len() < self.min_values {
            return None;
        }

        let mut it = literals.into_iter().map(Literal::into_string);
        let mut next = || it.next().unwrap_or_default();

        Some(Article {
            title: next(),
            slug: next(),
            content: next(),
            excerpt: next(),
            cover_image: next(),
            category_id: next(),
            author_id: next(),
            status: next(),
            view_count: view_count(&next()),
            language: next()
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sqldump::{self, values};

    const FIX_IT: &str = "INSERT INTO articles (title, slug, content, excerpt, cover_image, category_id, author_id, status, view_count, language) VALUES ('Fix It', 'fix-it', 'Body text', 'Short excerpt', 'http://x/img.png', 'cat-1', 'auth-1', 'published', 42, 'en');";

    fn fix_it() -> Article {
        Article {
            title: "Fix It".into(),
            slug: "fix-it".into(),
            content: "Body text".into(),
            excerpt: "Short excerpt".into(),
            cover_image: "http://x/img.png".into(),
            category_id: "cat-1".into(),
            author_id: "auth-1".into(),
            status: "published".into(),
            view_count: 42,
            language: "en".into()
        }
    }

    #[test]
    fn builds_row_from_statement() {
        assert_eq!(sqldump::parse_row(FIX_IT, RowBuilder::default()), Some(fix_it()));
    }

    #[test]
    fn non_numeric_view_count_defaults() {
        let stmt = FIX_IT.replace(", 42,", ", 'abc',");
        let row = sqldump::parse_row(&stmt, RowBuilder::default()).unwrap();
        assert_eq!(row.view_count, DEFAULT_VIEW_COUNT);

        assert_eq!(view_count("abc"), 100);
        assert_eq!(view_count(""), 100);
        assert_eq!(view_count("-5"), 100);
        assert_eq!(view_count("99999999999999999999999"), 100);
        assert_eq!(view_count("007"), 7);
    }

    #[test]
    fn short_value_list_yields_no_row() {
        let lits = values::literals("'a', 'b', 'c'");
        assert_eq!(RowBuilder::default().build(lits), None);
    }

    #[test]
    fn threshold_of_eleven_rejects_ten_values() {
        let strict = RowBuilder::with_min_values(11);
        assert_eq!(strict.min_values(), 11);
        assert_eq!(sqldump::parse_row(FIX_IT, strict), None);

        let padded = FIX_IT.replace(", 'en');", ", 'en', 'extra');");
        assert_eq!(sqldump::parse_row(&padded, strict), Some(fix_it()));
    }

    #[test]
    fn threshold_never_drops_below_field_count() {
        assert_eq!(RowBuilder::with_min_values(3).min_values(), ROW_FIELDS);
    }

    #[test]
    fn serializes_with_field_names() {
        let json = serde_json::to_value(fix_it()).unwrap();
        assert_eq!(json["cover_image"], "http://x/img.png");
        assert_eq!(json["view_count"], 42);
    }
}
