use std::{fs, path::PathBuf};
use clap::Parser;
use once_cell::sync::Lazy;
use rayon::prelude::*;
use regex::Regex;
use tracing::warn;

use crate::files;

static HAN: Lazy<Regex> = Lazy::new(|| Regex::new(r"[\x{4e00}-\x{9fa5}]").unwrap());

#[derive(Parser)]
pub struct Args {
    #[arg(long, default_value = "src", help = "Directory of frontend sources")]
    dir: PathBuf,
    #[arg(long = "ext", default_values_t = ["ts".to_owned(), "tsx".to_owned()], help = "file extensions to scan")]
    exts: Vec<String>,
    #[arg(long, default_value_t = 10, help = "files to list")]
    max_files: usize,
    #[arg(long, default_value_t = 5, help = "lines to list per file")]
    max_lines: usize
}

pub fn has_chinese(text: &str) -> bool {
    HAN.is_match(text)
}

/// 1-based numbers and trimmed text of the lines containing ideographs.
pub fn chinese_lines(text: &str) -> Vec<(usize, &str)> {
    if !has_chinese(text) {
        return Vec::new();
    }
    text.split('\n')
        .enumerate()
        .filter(|(_, l)| has_chinese(l))
        .map(|(i, l)| (i + 1, l.trim()))
        .collect()
}

pub fn run(args: Args) -> anyhow::Result<()> {
    let files = files::collect(&args.dir, &args.exts)?;

    let found = files.par_iter()
        .filter_map(|path| {
            let text = fs::read_to_string(path)
                .inspect_err(|e| warn!("failed to read {}: {e}", path.display()))
                .ok()?;
            let lines = chinese_lines(&text).into_iter()
                .map(|(n, l)| (n, l.to_owned()))
                .collect::<Vec<_>>();
            (!lines.is_empty()).then_some((path, lines))
        })
        .collect::<Vec<_>>();

    if found.is_empty() {
        println!("no Chinese text left in {} files", files.len());
        return Ok(());
    }

    println!("{} files still contain Chinese:", found.len());
    for (path, lines) in found.iter().take(args.max_files) {
        println!("\nfile: {}", files::relative(path, &args.dir).display());
        for (n, line) in lines.iter().take(args.max_lines) {
            println!("  line {n}: {}", line.chars().take(100).collect::<String>());
        }
        if lines.len() > args.max_lines {
            println!("  ... {} more lines", lines.len() - args.max_lines);
        }
    }
    if found.len() > args.max_files {
        println!("\n... {} more files", found.len() - args.max_files);
    }

    Ok(())
}
