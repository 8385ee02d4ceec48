use std::{fs, io::{self, BufWriter, Write}, path::PathBuf};
use anyhow::Context as _;
use clap::Parser;
use tracing::warn;

use crate::{replay::build_rows, sqldump::{row::ROW_FIELDS, RowBuilder, SplitMode}};

#[derive(Parser)]
pub struct Args {
    #[arg(help = "Path to the SQL dump")]
    dump: PathBuf,
    #[arg(long, help = "split statements by line instead of by terminator")]
    by_line: bool,
    #[arg(long, default_value_t = ROW_FIELDS, help = "values a statement needs to form a row")]
    min_values: usize
}

pub fn run(args: Args) -> anyhow::Result<()> {
    let text = fs::read_to_string(&args.dump)
        .with_context(|| format!("failed to read {}", args.dump.display()))?;
    let statements = SplitMode::from_flag(args.by_line).split(&text);
    let builder = RowBuilder::with_min_values(args.min_values);
    let (rows, skipped) = build_rows(&statements, builder);

    let mut out = BufWriter::new(io::stdout().lock());
    for (_, row) in &rows {
        serde_json::to_writer(&mut out, row)?;
        writeln!(out)?;
    }
    out.flush()?;

    for i in &skipped {
        warn!("statement {i} skipped, no row could be built");
    }
    eprintln!("{} rows from {} statements", rows.len(), statements.len());

    Ok(())
}
