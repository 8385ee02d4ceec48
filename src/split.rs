use std::{fs::{self, File}, io::{self, BufWriter, Write}, path::PathBuf};
use anyhow::Context as _;
use clap::Parser;
use tracing::info;

use crate::sqldump::SplitMode;

#[derive(Parser)]
pub struct Args {
    #[arg(help = "Path to the SQL dump")]
    dump: PathBuf,
    #[arg(long, help = "split statements by line instead of by terminator")]
    by_line: bool,
    #[arg(short, long, help = "write the statements to one annotated SQL file")]
    output: Option<PathBuf>,
    #[arg(from_global)]
    dry_run: bool
}

fn write_export<S: AsRef<str>>(mut out: impl Write, statements: &[S], generated: &str) -> io::Result<()> {
    writeln!(out, "-- {} INSERT INTO articles statements", statements.len())?;
    writeln!(out, "-- run this file in the database console, e.g. psql <database-url> -f <this file>")?;
    writeln!(out, "-- generated: {generated}")?;
    writeln!(out)?;

    for (i, stmt) in statements.iter().enumerate() {
        writeln!(out, "-- Article {}", i + 1)?;
        writeln!(out, "{}", stmt.as_ref())?;
        writeln!(out)?;
    }

    out.flush()
}

pub fn run(args: Args) -> anyhow::Result<()> {
    let text = fs::read_to_string(&args.dump)
        .with_context(|| format!("failed to read {}", args.dump.display()))?;
    let statements = SplitMode::from_flag(args.by_line).split(&text);

    println!("found {} INSERT statements", statements.len());

    let Some(path) = args.output else { return Ok(()) };
    if args.dry_run {
        println!("would write {}", path.display());
        return Ok(());
    }

    let generated = chrono::Local::now().format("%Y-%m-%d %H:%M:%S").to_string();
    let file = File::create(&path).with_context(|| format!("failed to create {}", path.display()))?;
    write_export(BufWriter::new(file), &statements, &generated)?;
    info!("wrote {} statements to {}", statements.len(), path.display());

    Ok(())
}
