use anyhow::bail;
use reqwest::{Client, RequestBuilder};

use crate::{config::BackendConfig, sqldump::Article};

/// Inserts parsed rows through the backend's table endpoint.
#[derive(Clone, Debug)]
pub struct RestSink {
    client: Client,
    config: BackendConfig,
    table: String
}

impl RestSink {
    pub fn new(client: Client, config: BackendConfig, table: String) -> Self {
        Self { client, config, table }
    }

    fn request(&self, row: &Article) -> RequestBuilder {
        self.client
            .post(self.config.endpoint(&format!("rest/v1/{}", self.table)))
            .header("apikey", &self.config.key)
            .bearer_auth(&self.config.key)
            .header("Prefer", "return=minimal")
            .json(row)
    }
}

impl super::Sink for RestSink {
    type Item = Article;

    async fn submit(&mut self, row: &Article) -> anyhow::Result<()> {
        let res = self.request(row).send().await?;
        let status = res.status();

        if !status.is_success() {
            bail!("HTTP {}: {}", status.as_u16(), res.text().await.unwrap_or_default());
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::Value;

    #[test]
    fn posts_row_as_json() {
        let sink = RestSink::new(Client::new(), BackendConfig::new("https://db.example", "k"), "articles".into());
        let row = Article {
            title: "Fix It".into(),
            slug: "fix-it".into(),
            content: "Body".into(),
            excerpt: String::new(),
            cover_image: String::new(),
            category_id: "cat-1".into(),
            author_id: "auth-1".into(),
            status: "published".into(),
            view_count: 100,
            language: "en".into()
        };
        let req = sink.request(&row).build().unwrap();

        assert_eq!(req.url().as_str(), "https://db.example/rest/v1/articles");
        assert_eq!(req.headers()["prefer"], "return=minimal");
        assert_eq!(req.headers()["authorization"], "Bearer k");

        let body: Value = serde_json::from_slice(req.body().and_then(|b| b.as_bytes()).unwrap()).unwrap();
        assert_eq!(body["slug"], "fix-it");
        assert_eq!(body["view_count"], 100);
    }
}
