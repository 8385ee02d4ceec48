use anyhow::bail;
use reqwest::{Client, RequestBuilder, StatusCode};
use serde_json::{Map, Value};

use crate::config::BackendConfig;

/// Server-side functions that execute a raw SQL string.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RpcFunction {
    ExecSql,
    ExecuteSql
}

impl RpcFunction {
    fn path(self) -> &'static str {
        match self {
            Self::ExecSql => "rest/v1/rpc/exec_sql",
            Self::ExecuteSql => "rest/v1/rpc/execute_sql"
        }
    }

    fn param(self) -> &'static str {
        match self {
            Self::ExecSql => "sql_query",
            Self::ExecuteSql => "query"
        }
    }

    fn accepts(self, status: StatusCode) -> bool {
        match self {
            Self::ExecSql => matches!(status.as_u16(), 200 | 201),
            Self::ExecuteSql => matches!(status.as_u16(), 200 | 201 | 204)
        }
    }
}

#[derive(Clone, Debug)]
pub struct RpcSink {
    client: Client,
    config: BackendConfig,
    function: RpcFunction
}

impl RpcSink {
    pub fn new(client: Client, config: BackendConfig, function: RpcFunction) -> Self {
        Self { client, config, function }
    }

    fn request(&self, sql: &str) -> RequestBuilder {
        let mut body = Map::new();
        body.insert(self.function.param().to_owned(), Value::from(sql));

        let req = self.client
            .post(self.config.endpoint(self.function.path()))
            .header("apikey", &self.config.key)
            .bearer_auth(&self.config.key)
            .json(&body);

        match self.function {
            RpcFunction::ExecuteSql => req.header("Prefer", "return=minimal"),
            RpcFunction::ExecSql => req
        }
    }
}

impl super::Sink for RpcSink {
    type Item = str;

    async fn submit(&mut self, sql: &str) -> anyhow::Result<()> {
        let res = self.request(sql).send().await?;
        let status = res.status();

        if !self.function.accepts(status) {
            bail!("HTTP {}: {}", status.as_u16(), res.text().await.unwrap_or_default());
        }

        Ok(())
    }
}
