//! Terminal game mode
//!
//! Line-based game loop: the player types guesses and commands, the game
//! answers with colored clues.

use crate::core::{Clue, GuessRecord, MAX_GUESSES, clues_to_emoji};
use crate::game::{Game, GameError, GameStatus};
use colored::Colorize;
use std::io::{self, BufRead, Write};

/// Run the interactive game until the player quits or input ends
///
/// Commands: `hint`, `answer` (reveal and forfeit), `new`, `quit`. Anything
/// else is taken as a guess; with `hard` set every guess is a hard-mode guess.
///
/// # Errors
///
/// Returns an error if reading input or writing output fails.
pub fn run_play<R: BufRead, W: Write>(
    game: &mut Game,
    hard: bool,
    input: R,
    output: &mut W,
) -> io::Result<()> {
    let mut lines = input.lines();

    writeln!(output, "\n{}", "═".repeat(60).bright_cyan())?;
    writeln!(output, "{}", "  W O R D L E".bright_green().bold())?;
    writeln!(output, "{}", "═".repeat(60).bright_cyan())?;
    writeln!(
        output,
        "Guess the 5-letter word in {MAX_GUESSES} tries{}.",
        if hard { " (hard mode)" } else { "" }
    )?;
    writeln!(output, "Commands: 'hint', 'answer', 'new', 'quit'\n")?;

    loop {
        write!(
            output,
            "Guess {} of {MAX_GUESSES}: ",
            game.guesses().len() + 1
        )?;
        output.flush()?;

        let Some(line) = lines.next().transpose()? else {
            writeln!(output)?;
            return Ok(());
        };

        match line.trim().to_lowercase().as_str() {
            "" => {}
            "quit" | "q" | "exit" => {
                writeln!(output, "\n👋 Thanks for playing!\n")?;
                return Ok(());
            }
            "hint" => match game.hint() {
                Ok(Some(letter)) => writeln!(output, "💡 The answer contains {letter}")?,
                Ok(None) => writeln!(output, "💡 No hint available, every letter is guessed")?,
                Err(e) => print_error(output, &e)?,
            },
            "answer" => {
                let answer = game.reveal_answer().clone();
                writeln!(output, "The answer is {}.", answer.text().bold())?;
                if !ask_play_again(game, &mut lines, output)? {
                    return Ok(());
                }
            }
            "new" => match game.reset() {
                Ok(()) => writeln!(output, "\n🔄 New game started!\n")?,
                Err(e) => print_error(output, &e)?,
            },
            word => {
                let result = if hard {
                    game.make_hard_guess(word).cloned()
                } else {
                    game.make_guess(word).cloned()
                };

                match result {
                    Ok(record) => {
                        writeln!(output, "  {}", render_record(&record))?;
                        if game.is_over() {
                            print_outcome(game, output)?;
                            if !ask_play_again(game, &mut lines, output)? {
                                return Ok(());
                            }
                        }
                    }
                    Err(e) => print_error(output, &e)?,
                }
            }
        }
    }
}

/// Letters on colored tiles followed by the emoji row
fn render_record(record: &GuessRecord) -> String {
    let tiles: String = record
        .letters()
        .map(|(_, letter, clue)| {
            let tile = format!(" {} ", letter as char);
            match clue {
                Clue::Green => tile.black().on_green().to_string(),
                Clue::Yellow => tile.black().on_yellow().to_string(),
                Clue::Grey => tile.white().on_bright_black().to_string(),
            }
        })
        .collect();

    format!("{tiles}  {}", clues_to_emoji(record.clues()))
}

fn print_outcome<W: Write>(game: &mut Game, output: &mut W) -> io::Result<()> {
    match game.status() {
        GameStatus::Won => {
            let turns = game.guesses().len();
            writeln!(
                output,
                "\n{}",
                format!(
                    "🎉 You won! You took {turns} {}.",
                    if turns == 1 { "guess" } else { "guesses" }
                )
                .bright_green()
                .bold()
            )?;
        }
        GameStatus::Lost => {
            let answer = game.reveal_answer().clone();
            writeln!(
                output,
                "\n{}",
                format!("You lost! The answer was: {answer}.").bright_red()
            )?;
        }
        GameStatus::Playing => {}
    }

    writeln!(output, "\n  Guess history:")?;
    for (i, record) in game.guesses().iter().enumerate() {
        writeln!(
            output,
            "    {}. {} {}",
            i + 1,
            record.word(),
            clues_to_emoji(record.clues())
        )?;
    }
    writeln!(output)
}

fn ask_play_again<I, W>(game: &mut Game, lines: &mut I, output: &mut W) -> io::Result<bool>
where
    I: Iterator<Item = io::Result<String>>,
    W: Write,
{
    write!(output, "Play again? (yes/no): ")?;
    output.flush()?;

    let again = lines
        .next()
        .transpose()?
        .is_some_and(|answer| matches!(answer.trim().to_lowercase().as_str(), "yes" | "y"));

    if !again {
        writeln!(output, "\n👋 Thanks for playing!\n")?;
        return Ok(false);
    }

    // The game is over here, so every reset policy allows this
    if let Err(e) = game.reset() {
        print_error(output, &e)?;
        return Ok(false);
    }
    writeln!(output, "\n🔄 New game started!\n")?;
    Ok(true)
}

fn print_error<W: Write>(output: &mut W, error: &GameError) -> io::Result<()> {
    writeln!(output, "{} {error}", "❌".red())
}
