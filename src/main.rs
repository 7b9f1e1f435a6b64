//! Wordle Game - CLI
//!
//! Serves the session-based JSON API (default) or plays a game in the terminal.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::io;
use std::sync::Arc;
use wordle_game::{
    commands::run_play,
    config::{PlayArgs, ServeArgs},
    game::Game,
    server,
    session::SessionStore,
    telemetry,
    wordlists::{WordList, loader::load_from_file},
};

#[derive(Parser)]
#[command(
    name = "wordle_game",
    about = "Wordle rules engine with hard mode, hints and a session-based JSON API",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Server options, used when no subcommand is given
    #[command(flatten)]
    serve: ServeArgs,

    /// Word list: 'embedded' (default) or path to a file with one word per line
    #[arg(short = 'w', long, global = true, env = "WORDLE_WORDLIST", default_value = "embedded")]
    wordlist: String,

    /// Emit logs as JSON lines
    #[arg(long, global = true, env = "WORDLE_LOG_JSON")]
    log_json: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Serve the JSON API (default)
    Serve(ServeArgs),

    /// Play a game in the terminal
    Play(PlayArgs),
}

/// Load the word list named by the -w flag
fn load_wordlist(wordlist: &str) -> Result<WordList> {
    match wordlist {
        "embedded" => WordList::embedded().context("embedded word list is unusable"),
        path => load_from_file(path).with_context(|| format!("cannot use word list {path}")),
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    telemetry::init_tracing(cli.log_json);

    let words = Arc::new(load_wordlist(&cli.wordlist)?);
    tracing::info!(source = %cli.wordlist, words = words.len(), "word list loaded");

    match cli.command.unwrap_or(Commands::Serve(cli.serve)) {
        Commands::Serve(args) => run_serve_command(&args, words),
        Commands::Play(args) => run_play_command(&args, words),
    }
}

fn run_serve_command(args: &ServeArgs, words: Arc<WordList>) -> Result<()> {
    let store = SessionStore::new(words, args.rules.game_config());
    actix_web::rt::System::new()
        .block_on(server::run(args.server_config(), store))
        .context("server stopped with an error")
}

fn run_play_command(args: &PlayArgs, words: Arc<WordList>) -> Result<()> {
    let config = args.rules.game_config();
    let rng = args
        .seed
        .map_or_else(StdRng::from_os_rng, StdRng::seed_from_u64);

    let mut game = match &args.answer {
        Some(answer) => Game::with_answer(words, config, answer)
            .context("cannot start a game with that answer")?
            .with_rng(rng),
        None => Game::from_rng(words, config, rng),
    };

    let stdin = io::stdin();
    let mut stdout = io::stdout();
    run_play(&mut game, args.hard, stdin.lock(), &mut stdout)?;
    Ok(())
}
