//! 詰将棋の問題ファイルから KIF を書き出すバッチツール。
//!
//! # よく使うコマンド例
//!
//! - 問題を再生して KIF を標準出力へ:
//!   `cargo run -p kifu-cli --bin kifu -- render problem.toml`
//!
//! - 終了日時を固定してファイルに出力:
//!   `cargo run -p kifu-cli --bin kifu -- render problem.toml --ended-at "2024/01/01 00:00:00" --out tsume.kif`
//!
//! - 手順の合法性だけ確認:
//!   `cargo run -p kifu-cli --bin kifu -- check problem.toml`
//!
//! - 最終局面を JSON で確認:
//!   `cargo run -p kifu-cli --bin kifu -- state problem.toml`

mod config;
mod io;
mod problem;

use std::io::Write;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use chrono::NaiveDateTime;
use clap::{ArgAction, Args, Parser, Subcommand};
use kifu_core::generate_kif;
use kifu_core::kif::ENDED_AT_FORMAT;

use crate::config::Config;
use crate::problem::{Problem, Replay};

// ---------------- CLI ----------------

#[derive(Parser, Debug)]
#[command(name = "kifu", about = "Tsume-shogi problem replayer and KIF writer", version)]
struct Cli {
    /// Increase log verbosity (-v: info, -vv: debug). RUST_LOG takes precedence.
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    /// Config file (default: ./kifu.toml when present)
    #[arg(long, value_name = "FILE", global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Replay the problem and write KIF
    Render(RenderArgs),
    /// Replay the problem and report each applied move
    Check(ProblemArgs),
    /// Replay the problem and print the final position as JSON
    State(ProblemArgs),
}

#[derive(Args, Debug, Clone)]
struct ProblemArgs {
    /// Problem file (TOML), "-" for stdin
    #[arg(value_name = "PROBLEM")]
    problem: PathBuf,
}

#[derive(Args, Debug, Clone)]
struct RenderArgs {
    #[command(flatten)]
    input: ProblemArgs,

    /// Output path, "-" for stdout
    #[arg(long, value_name = "FILE", default_value = "-")]
    out: PathBuf,

    /// Header comment line (overrides the config)
    #[arg(long, value_name = "TEXT")]
    header: Option<String>,

    /// Fixed end timestamp, e.g. "2024/01/01 00:00:00"
    #[arg(long, value_name = "TIME", value_parser = parse_ended_at)]
    ended_at: Option<NaiveDateTime>,
}

fn parse_ended_at(s: &str) -> Result<NaiveDateTime, String> {
    NaiveDateTime::parse_from_str(s, ENDED_AT_FORMAT)
        .map_err(|e| format!("expected \"YYYY/MM/DD HH:MM:SS\": {e}"))
}

fn init_logger(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level))
        .target(env_logger::Target::Stderr)
        .init();
}

// ---------------- Commands ----------------

fn load_replay(path: &Path) -> Result<Replay> {
    let text = io::read_to_string(path)
        .with_context(|| format!("failed to read problem {}", path.display()))?;
    let problem = Problem::from_toml_str(&text)
        .with_context(|| format!("invalid problem file {}", path.display()))?;
    problem.replay()
}

fn cmd_render(args: &RenderArgs, config: &Config) -> Result<()> {
    let replay = load_replay(&args.input.problem)?;

    let mut opts = config.kif_options();
    if let Some(header) = &args.header {
        opts.header_comment = header.clone();
    }
    opts.ended_at = args.ended_at;

    let kif = generate_kif(&replay.start, &replay.position.moves, &opts);

    let mut w = io::open_writer(&args.out)
        .with_context(|| format!("failed to open {}", args.out.display()))?;
    w.write_all(kif.as_bytes())?;
    w.close()?;
    log::info!("wrote KIF ({} moves) to {}", replay.position.moves.len(), args.out.display());
    Ok(())
}

fn cmd_check(args: &ProblemArgs) -> Result<()> {
    let replay = load_replay(&args.problem)?;
    let mut side = replay.start.side_to_move;
    for (i, mv) in replay.position.moves.iter().enumerate() {
        println!("{:>3} {} {}", i + 1, side.label(), mv);
        side = side.opponent();
    }
    println!("ok: {} moves", replay.position.moves.len());
    Ok(())
}

fn cmd_state(args: &ProblemArgs) -> Result<()> {
    let replay = load_replay(&args.problem)?;
    let json = serde_json::to_string_pretty(&replay.position.snapshot())?;
    println!("{json}");
    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logger(cli.verbose);

    let config = Config::load(cli.config.as_deref())?;
    match &cli.command {
        Commands::Render(args) => cmd_render(args, &config),
        Commands::Check(args) => cmd_check(args),
        Commands::State(args) => cmd_state(args),
    }
}
