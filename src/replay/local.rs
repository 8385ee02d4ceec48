use std::path::Path;
use anyhow::ensure;
use rusqlite::Connection;

use crate::sqldump::Article;

pub struct LocalSink {
    db: Connection,
    insert: String
}

impl LocalSink {
    pub fn open(path: &Path, table: &str) -> anyhow::Result<Self> {
        Self::new(Connection::open(path)?, table)
    }

    pub fn new(db: Connection, table: &str) -> anyhow::Result<Self> {
        ensure!(
            !table.is_empty() && table.chars().all(|c| c.is_ascii_alphanumeric() || c == '_'),
            "bad table name {table:?}"
        );

        db.execute_batch(&format!("
            CREATE TABLE IF NOT EXISTS {table}(
                id INTEGER PRIMARY KEY,
                title TEXT NOT NULL,
                slug TEXT NOT NULL UNIQUE,
                content TEXT NOT NULL,
                excerpt TEXT NOT NULL,
                cover_image TEXT NOT NULL,
                category_id TEXT NOT NULL,
                author_id TEXT NOT NULL,
                status TEXT NOT NULL,
                view_count INTEGER NOT NULL,
                language TEXT NOT NULL
            ) STRICT;
        "))?;

        let insert = format!("
            INSERT INTO {table}(title, slug, content, excerpt, cover_image, category_id, author_id, status, view_count, language)
            VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
        ");

        Ok(Self { db, insert })
    }
}

impl super::Sink for LocalSink {
    type Item = Article;

    async fn submit(&mut self, row: &Article) -> anyhow::Result<()> {
        let Article { title, slug, content, excerpt, cover_image, category_id, author_id, status, view_count, language } = row;
        self.db.prepare_cached(&self.insert)?.execute((
            title, slug, content, excerpt, cover_image, category_id, author_id, status, view_count, language
        ))?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::replay::{Replayer, Sink as _};
    use std::time::Duration;

    fn article(slug: &str, views: i64) -> Article {
        Article {
            title: format!("Title {slug}"),
            slug: slug.to_owned(),
            content: "Body".into(),
            excerpt: "Excerpt".into(),
            cover_image: "http://x/img.png".into(),
            category_id: "cat-1".into(),
            author_id: "auth-1".into(),
            status: "published".into(),
            view_count: views,
            language: "en".into()
        }
    }

    #[tokio::test]
    async fn inserts_rows_and_rejects_duplicate_slugs() {
        let mut sink = LocalSink::new(Connection::open_in_memory().unwrap(), "articles").unwrap();

        let rows = vec![(1, article("a", 1)), (2, article("b", 2)), (3, article("a", 3))];
        let report = Replayer::new(Duration::ZERO).replay(&mut sink, rows).await;

        assert_eq!(report.succeeded, 2);
        assert_eq!(report.failed_indices(), vec![3]);

        let (n, views): (u32, i64) = sink.db
            .query_row("SELECT COUNT(*), SUM(view_count) FROM articles", (), |row| row.try_into())
            .unwrap();
        assert_eq!((n, views), (2, 3));
    }

    #[tokio::test]
    async fn reopening_keeps_existing_table() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("articles.db");

        LocalSink::open(&path, "articles").unwrap().submit(&article("a", 1)).await.unwrap();
        let mut sink = LocalSink::open(&path, "articles").unwrap();
        assert!(sink.submit(&article("a", 1)).await.is_err());
        sink.submit(&article("b", 1)).await.unwrap();
    }

    #[test]
    fn refuses_odd_table_names() {
        assert!(LocalSink::new(Connection::open_in_memory().unwrap(), "articles; DROP").is_err());
    }
}
