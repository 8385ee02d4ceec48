mod local;
#[cfg(feature = "remote")]
mod rest;
#[cfg(feature = "remote")]
mod rpc;

use std::{borrow::{Borrow, Cow}, fs, path::PathBuf, time::Duration};
use anyhow::Context as _;
use clap::{Parser, ValueEnum};
use tracing::{info, warn};

use crate::sqldump::{self, row::ROW_FIELDS, Article, RowBuilder, SplitMode};

pub use local::LocalSink;
#[cfg(feature = "remote")]
pub use rest::RestSink;
#[cfg(feature = "remote")]
pub use rpc::{RpcFunction, RpcSink};

/// Something that accepts dump items one at a time.
pub trait Sink {
    type Item: ?Sized;

    async fn submit(&mut self, item: &Self::Item) -> anyhow::Result<()>;
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum Target {
    /// raw statements to the exec_sql RPC
    #[cfg(feature = "remote")]
    ExecSql,
    /// raw statements to the execute_sql RPC
    #[cfg(feature = "remote")]
    ExecuteSql,
    /// parsed rows to the REST table endpoint
    #[cfg(feature = "remote")]
    Rest,
    /// parsed rows into a local SQLite file
    Sqlite
}

impl Target {
    fn default_delay(self) -> Duration {
        Duration::from_millis(match self {
            #[cfg(feature = "remote")]
            Self::ExecSql => 200,
            #[cfg(feature = "remote")]
            Self::ExecuteSql | Self::Rest => 300,
            Self::Sqlite => 0
        })
    }
}

#[derive(Parser)]
pub struct Args {
    #[arg(help = "Path to the SQL dump")]
    dump: PathBuf,
    #[arg(long, value_enum)]
    target: Target,
    #[arg(long, help = "split statements by line instead of by terminator")]
    by_line: bool,
    #[arg(long, default_value_t = ROW_FIELDS, help = "values a statement needs to form a row")]
    min_values: usize,
    #[arg(long, help = "pause between submissions in milliseconds")]
    delay_ms: Option<u64>,
    #[arg(long, default_value = "articles", help = "table rows are written to")]
    table: String,
    #[arg(long, required_if_eq("target", "sqlite"), help = "Path to the SQLite file")]
    db: Option<PathBuf>,
    #[command(flatten)]
    backend: crate::config::BackendArgs,
    #[arg(from_global)]
    dry_run: bool
}

#[derive(Clone, Debug, Default)]
pub struct Report {
    pub total: usize,
    pub succeeded: usize,
    pub failed: Vec<(usize, String)>,
    pub skipped: Vec<usize>
}

impl Report {
    pub fn failed_indices(&self) -> Vec<usize> {
        self.failed.iter().map(|&(i, _)| i).collect()
    }

    fn print(&self) {
        let sep = "=".repeat(60);
        println!("{sep}");
        println!("submitted: {}", self.total);
        println!("succeeded: {}", self.succeeded);
        println!("failed:    {}", self.failed.len());
        if !self.skipped.is_empty() {
            println!("skipped:   {} (no row could be built)", self.skipped.len());
        }
        println!("{sep}");
        if !self.failed.is_empty() {
            println!("failed statements: {:?}", self.failed_indices());
        }
    }
}

fn truncate(s: &str, n: usize) -> Cow<'_, str> {
    match s.char_indices().nth(n) {
        Some((i, _)) => Cow::Owned(format!("{}…", &s[..i])),
        None => Cow::Borrowed(s)
    }
}

/// Submits items strictly in order with a fixed pause in between. Failures are
/// recorded and never retried.
#[derive(Clone, Copy, Debug)]
pub struct Replayer {
    delay: Duration
}

impl Replayer {
    pub fn new(delay: Duration) -> Self {
        Self { delay }
    }

    pub async fn replay<S, B>(&self, sink: &mut S, items: Vec<(usize, B)>) -> Report
    where
        S: Sink,
        B: Borrow<S::Item>
    {
        let mut report = Report { total: items.len(), ..Report::default() };
        let n = items.len();

        for (k, (index, item)) in items.into_iter().enumerate() {
            match sink.submit(item.borrow()).await {
                Ok(()) => {
                    report.succeeded += 1;
                    info!("[{}/{n}] statement {index} ok", k + 1);
                },
                Err(e) => {
                    let msg = format!("{e:#}");
                    warn!("[{}/{n}] statement {index} failed: {}", k + 1, truncate(&msg, 100));
                    report.failed.push((index, msg));
                }
            }

            if k + 1 < n && !self.delay.is_zero() {
                tokio::time::sleep(self.delay).await;
            }
        }

        report
    }
}

/// Rows of the statements that yield one, keyed by 1-based statement index,
/// along with the indices that yield none.
pub fn build_rows<S: AsRef<str>>(statements: &[S], builder: RowBuilder) -> (Vec<(usize, Article)>, Vec<usize>) {
    let mut rows = Vec::new();
    let mut skipped = Vec::new();

    for (i, stmt) in statements.iter().enumerate() {
        match sqldump::parse_row(stmt.as_ref(), builder) {
            Some(row) => rows.push((i + 1, row)),
            None => skipped.push(i + 1)
        }
    }

    (rows, skipped)
}

#[cfg(feature = "remote")]
fn client() -> anyhow::Result<reqwest::Client> {
    Ok(reqwest::Client::builder().timeout(Duration::from_secs(30)).build()?)
}

pub async fn run(args: Args) -> anyhow::Result<()> {
    let text = fs::read_to_string(&args.dump)
        .with_context(|| format!("failed to read {}", args.dump.display()))?;
    let statements = SplitMode::from_flag(args.by_line).split(&text);
    info!("found {} INSERT statements in {}", statements.len(), args.dump.display());

    let replayer = Replayer::new(args.delay_ms.map_or(args.target.default_delay(), Duration::from_millis));
    let builder = RowBuilder::with_min_values(args.min_values);

    let raw = || statements.iter().enumerate().map(|(i, s)| (i + 1, s.as_ref())).collect::<Vec<(usize, &str)>>();

    let report = match args.target {
        #[cfg(feature = "remote")]
        target @ (Target::ExecSql | Target::ExecuteSql) => {
            let items = raw();
            if args.dry_run {
                println!("would submit {} statements", items.len());
                return Ok(());
            }
            let function = if target == Target::ExecSql { RpcFunction::ExecSql } else { RpcFunction::ExecuteSql };
            let mut sink = RpcSink::new(client()?, args.backend.resolve()?, function);
            replayer.replay(&mut sink, items).await
        },
        #[cfg(feature = "remote")]
        Target::Rest => {
            let (rows, skipped) = build_rows(&statements, builder);
            if args.dry_run {
                println!("would submit {} rows ({} skipped)", rows.len(), skipped.len());
                return Ok(());
            }
            let mut sink = RestSink::new(client()?, args.backend.resolve()?, args.table);
            Report { skipped, ..replayer.replay(&mut sink, rows).await }
        },
        Target::Sqlite => {
            let (rows, skipped) = build_rows(&statements, builder);
            if args.dry_run {
                println!("would insert {} rows ({} skipped)", rows.len(), skipped.len());
                return Ok(());
            }
            let db = args.db.context("--db is required for the sqlite target")?;
            let mut sink = LocalSink::open(&db, &args.table)?;
            Report { skipped, ..replayer.replay(&mut sink, rows).await }
        }
    };

    for &i in &report.skipped {
        warn!("statement {i} skipped, no row could be built");
    }
    report.print();

    Ok(())
}
