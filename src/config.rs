use std::{collections::HashMap, path::{Path, PathBuf}};
use anyhow::Context as _;
use clap::Parser;

const URL_VAR: &str = "VITE_SUPABASE_URL";
const KEY_VAR: &str = "VITE_SUPABASE_ANON_KEY";

#[derive(Clone, Debug, clap::Args)]
pub struct BackendArgs {
    #[arg(long, env = URL_VAR, help = "Base URL of the backend")]
    url: Option<String>,
    #[arg(long, env = KEY_VAR, hide_env_values = true, help = "API key sent as apikey and bearer token")]
    key: Option<String>,
    #[arg(long, default_value = ".env", help = "dotenv file consulted for values not given otherwise")]
    env_file: PathBuf
}

#[derive(Parser)]
pub struct Args {
    #[command(flatten)]
    backend: BackendArgs
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BackendConfig {
    pub url: String,
    pub key: String
}

impl BackendConfig {
    pub fn new(url: impl Into<String>, key: impl Into<String>) -> Self {
        let url: String = url.into();
        Self { url: url.trim_end_matches('/').to_owned(), key: key.into() }
    }

    pub fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.url, path.trim_start_matches('/'))
    }
}

/// Entries of a dotenv file. A missing file has none.
fn read_env_file(path: &Path) -> Result<HashMap<String, String>, dotenvy::Error> {
    match dotenvy::from_path_iter(path) {
        Ok(iter) => iter.collect(),
        Err(e) if e.not_found() => Ok(HashMap::new()),
        Err(e) => Err(e)
    }
}

fn given(v: Option<&str>) -> Option<String> {
    v.map(str::trim).filter(|s| !s.is_empty()).map(str::to_owned)
}

impl BackendArgs {
    /// Flags and process environment first, then the dotenv file.
    pub fn resolve(&self) -> anyhow::Result<BackendConfig> {
        let mut file = read_env_file(&self.env_file)
            .with_context(|| format!("failed to read {}", self.env_file.display()))?;

        let url = given(self.url.as_deref()).or_else(|| given(file.remove(URL_VAR).as_deref()))
            .with_context(|| format!("no backend url configured (--url or {URL_VAR})"))?;
        let key = given(self.key.as_deref()).or_else(|| given(file.remove(KEY_VAR).as_deref()))
            .with_context(|| format!("no backend key configured (--key or {KEY_VAR})"))?;

        Ok(BackendConfig::new(url, key))
    }
}

fn mask(key: &str) -> String {
    let shown = key.chars().take(6).collect::<String>();
    if shown.len() == key.len() { "*".repeat(key.len()) } else { format!("{shown}…") }
}

pub fn run(args: Args) -> anyhow::Result<()> {
    let BackendConfig { url, key } = args.backend.resolve()?;
    println!("url = {url}");
    println!("key = {}", mask(&key));
    Ok(())
}
