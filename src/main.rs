mod check;
mod config;
mod files;
mod replay;
mod rows;
mod split;
mod sqldump;
mod translate;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(about = "Maintenance tools for the CMS frontend and its article dumps")]
struct Args {
    #[arg(short = 'n', long, global = true, help = "don't write or submit anything")]
    dry_run: bool,
    #[command(subcommand)]
    command: Command
}

#[derive(Subcommand)]
enum Command {
    Config(config::Args),
    Split(split::Args),
    Rows(rows::Args),
    Replay(replay::Args),
    Translate(translate::Args),
    Check(check::Args)
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    use Command::*;
    match args.command {
        Config(margs) => config::run(margs),
        Split(margs) => split::run(margs),
        Rows(margs) => rows::run(margs),
        Replay(margs) => replay::run(margs).await,
        Translate(margs) => translate::run(margs),
        Check(margs) => check::run(margs)
    }
}
