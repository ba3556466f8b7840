//! Rotator Puzzle
//!
//! Prints, checks, and walks rotator puzzle states given on the command
//! line, e.g. `rotator actions "12345|1234 |12354"` or `rotator walk3`.

use std::io::{self, Write};
use std::process::ExitCode;

use clap::Parser;

use rotator::{Command, Notation, PuzzleState, Result, RotatorError, Walk, DEFAULT_STATE};

/// Inspects rotator puzzle states.
#[derive(Parser)]
#[command(name = "rotator")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// One of print, goal, actions or walk<i>.
    command: Option<String>,

    /// Puzzle state, rows separated by the separator character.
    state: Option<String>,

    /// Character separating rows in the state.
    #[arg(long, default_value_t = Notation::DEFAULT.separator)]
    separator: char,

    /// Character marking the blank tile.
    #[arg(long, default_value_t = Notation::DEFAULT.blank)]
    blank: char,
}

fn main() -> ExitCode {
    env_logger::init();

    let cli = Cli::parse();
    let mut stdout = io::stdout().lock();

    match run(&cli, &mut stdout) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            let _ = stdout.flush();
            eprintln!("{err}");
            ExitCode::FAILURE
        }
    }
}

/// Validates the arguments and runs one command, writing its output.
fn run(cli: &Cli, out: &mut impl Write) -> Result<()> {
    let name = cli.command.as_deref().ok_or(RotatorError::NoCommandGiven)?;
    let notation = Notation::new(cli.separator, cli.blank)?;
    let state = PuzzleState::parse(cli.state.as_deref().unwrap_or(DEFAULT_STATE), notation)?;
    let command: Command = name.parse()?;

    log::debug!("running {command:?} on {state}");
    match command {
        Command::Print => writeln!(out, "{state}")?,
        Command::Goal => run_goal(&state, out)?,
        Command::Actions => run_actions(&state, out)?,
        Command::Walk(action) => run_walk(state, action, out)?,
    }
    Ok(())
}

/// Prints `True` or `False`.
fn run_goal(state: &PuzzleState, out: &mut impl Write) -> Result<()> {
    let answer = if state.is_goal() { "True" } else { "False" };
    writeln!(out, "{answer}")?;
    Ok(())
}

/// Prints the legal moves, one per line, in index order.
fn run_actions(state: &PuzzleState, out: &mut impl Write) -> Result<()> {
    for action in state.actions() {
        writeln!(out, "{action}")?;
    }
    Ok(())
}

/// Prints every state of the walk, starting with the given one.
fn run_walk(state: PuzzleState, action: usize, out: &mut impl Write) -> Result<()> {
    let mut walk = Walk::new(state, action)?;
    for visited in walk.by_ref() {
        writeln!(out, "{visited}")?;
    }

    if let Some(summary) = walk.summary() {
        log::info!(
            "walk{action}: {} states, cycle of {} back to step {}",
            summary.steps,
            summary.cycle_len(),
            summary.revisited_step
        );
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run_args(args: &[&str]) -> Result<String> {
        let cli = Cli::try_parse_from(std::iter::once("rotator").chain(args.iter().copied()))
            .expect("arguments must parse");
        let mut out = Vec::new();
        run(&cli, &mut out)?;
        Ok(String::from_utf8(out).expect("output is utf-8"))
    }

    #[test]
    fn test_actions_snapshot() {
        insta::assert_snapshot!(run_args(&["actions"]).unwrap());
    }

    #[test]
    fn test_walk_snapshot() {
        let mut output = String::new();
        for action in 0..8 {
            let name = format!("walk{action}");
            output.push_str(&format!("{name}:\n"));
            output.push_str(&run_args(&[name.as_str()]).unwrap());
            output.push('\n');
        }
        insta::assert_snapshot!(output);
    }

    #[test]
    fn test_print_defaults_and_given_state() {
        assert_eq!(run_args(&["print"]).unwrap(), "12345|1234 |12354\n");
        assert_eq!(run_args(&["print", "ab|cd"]).unwrap(), "ab|cd\n");
    }

    #[test]
    fn test_goal() {
        assert_eq!(run_args(&["goal", "1 |11"]).unwrap(), "True\n");
        assert_eq!(run_args(&["goal", "12|21"]).unwrap(), "False\n");
        assert_eq!(run_args(&["goal"]).unwrap(), "False\n");
    }

    #[test]
    fn test_custom_notation() {
        let output = run_args(&["--separator", "/", "--blank", ".", "actions", "ab/c."]).unwrap();
        assert_eq!(output.lines().last(), Some("slide(1,0,1,1)"));
        assert!(matches!(
            run_args(&["--separator", "x", "--blank", "x", "print"]),
            Err(RotatorError::InvalidNotation('x'))
        ));
    }

    #[test]
    fn test_no_command() {
        assert!(matches!(run_args(&[]), Err(RotatorError::NoCommandGiven)));
    }

    #[test]
    fn test_state_validated_before_command() {
        assert!(matches!(
            run_args(&["jump", "1|2"]),
            Err(RotatorError::MalformedState { .. })
        ));
        assert!(matches!(
            run_args(&["jump"]),
            Err(RotatorError::UnrecognizedCommand(_))
        ));
    }

    #[test]
    fn test_walk_out_of_range_prints_nothing() {
        let cli = Cli::try_parse_from(["rotator", "walk8"]).unwrap();
        let mut out = Vec::new();
        let err = run(&cli, &mut out).unwrap_err();
        assert!(out.is_empty());
        assert_eq!(
            err.to_string(),
            "action number \"8\" is invalid, enter action number as index (0 - 7)."
        );
    }
}
