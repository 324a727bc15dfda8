//! Play command - interactive game against the agent

use std::io::{self, BufRead, Write};

use anyhow::{Context, Result};
use clap::Parser;

use crate::{
    adapters::MsgPackRepository,
    cli::{config::CommonArgs, output::render_board},
    ports::ValueTableRepository,
    session::{Session, TurnOutcome},
    tictactoe::{GameStatus, Player},
};

#[derive(Parser, Debug)]
#[command(about = "Play against the agent")]
pub struct PlayArgs {
    /// Start in training mode (the agent explores with probability ε)
    #[arg(long, default_value_t = false)]
    pub train: bool,

    /// Which token the agent controls (`x` or `o`)
    #[arg(long)]
    pub agent_player: Option<String>,
}

/// One line of user input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Move(usize),
    Save,
    ResetTable,
    NewGame,
    Train(bool),
    Help,
    Quit,
}

pub fn parse_command(line: &str) -> Option<Command> {
    let words: Vec<String> = line
        .split_whitespace()
        .map(|w| w.to_ascii_lowercase())
        .collect();
    match words.iter().map(String::as_str).collect::<Vec<_>>().as_slice() {
        [n] if n.parse::<usize>().is_ok() => n.parse().ok().map(Command::Move),
        ["save"] => Some(Command::Save),
        ["reset-table"] => Some(Command::ResetTable),
        ["new"] => Some(Command::NewGame),
        ["train", "on"] => Some(Command::Train(true)),
        ["train", "off"] => Some(Command::Train(false)),
        ["help"] | ["?"] => Some(Command::Help),
        ["quit"] | ["exit"] | ["q"] => Some(Command::Quit),
        _ => None,
    }
}

const HELP: &str = "Commands:
  0-8            place your mark in that cell
  new            start a new game
  save           write the value table to disk
  reset-table    forget everything the agent has learned
  train on|off   let the agent explore while playing
  quit           leave (unsaved learning is lost)";

pub fn execute(args: PlayArgs, common: &CommonArgs) -> Result<()> {
    let player = args
        .agent_player
        .as_deref()
        .map(str::parse::<Player>)
        .transpose()?;
    let config = common.agent_config(player)?;

    let mut session = Session::open(config, MsgPackRepository::new(), &common.table)
        .with_context(|| format!("Failed to load value table: {}", common.table.display()))?;
    session.set_train_mode(args.train);

    let stdin = io::stdin();
    let stdout = io::stdout();
    run(&mut session, stdin.lock(), stdout.lock())
}

/// Drive `session` from line-oriented input until `quit` or end of input
pub fn run<R, I, W>(session: &mut Session<R>, input: I, mut out: W) -> Result<()>
where
    R: ValueTableRepository,
    I: BufRead,
    W: Write,
{
    writeln!(
        out,
        "You are {} | agent is {} | training mode {}",
        session.human_player(),
        session.agent().player(),
        on_off(session.train_mode())
    )?;
    start_game(session, &mut out)?;

    for line in input.lines() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }
        match parse_command(&line) {
            None => writeln!(out, "Unrecognized input '{}'. Type 'help'.", line.trim())?,
            Some(Command::Quit) => break,
            Some(Command::Help) => writeln!(out, "{HELP}")?,
            Some(Command::Save) => match session.save() {
                Ok(()) => writeln!(
                    out,
                    "Value table saved to {}",
                    session.table_path().display()
                )?,
                Err(e) => writeln!(out, "Failed to save value table: {e}")?,
            },
            Some(Command::ResetTable) => {
                session.reset_table();
                writeln!(out, "Value table reset.")?;
            }
            Some(Command::NewGame) => start_game(session, &mut out)?,
            Some(Command::Train(on)) => {
                session.set_train_mode(on);
                writeln!(out, "Training mode {}", on_off(on))?;
            }
            Some(Command::Move(index)) => play_move(session, index, &mut out)?,
        }
    }

    Ok(())
}

fn start_game<R: ValueTableRepository, W: Write>(
    session: &mut Session<R>,
    out: &mut W,
) -> Result<()> {
    session.reset();
    if session.agent().player() == Player::X {
        let decision = session.agent_move()?;
        writeln!(out, "Agent plays {} ({})", decision.action, decision.strategy)?;
    }
    writeln!(out, "{}", render_board(&session.state()))?;
    Ok(())
}

fn play_move<R: ValueTableRepository, W: Write>(
    session: &mut Session<R>,
    index: usize,
    out: &mut W,
) -> Result<()> {
    if session.status().is_terminal() {
        writeln!(out, "Game over. Type 'new' to play again.")?;
        return Ok(());
    }

    match session.play_turn(index)? {
        TurnOutcome::Rejected => writeln!(out, "Cell {index} is not available.")?,
        TurnOutcome::Played { reply, status } => {
            if let Some(decision) = reply {
                writeln!(out, "Agent plays {} ({})", decision.action, decision.strategy)?;
            }
            writeln!(out, "{}", render_board(&session.state()))?;
            match status {
                GameStatus::Won(winner) if winner == session.human_player() => {
                    writeln!(out, "You win!")?
                }
                GameStatus::Won(_) => writeln!(out, "Agent wins!")?,
                GameStatus::Draw => writeln!(out, "Draw.")?,
                GameStatus::Empty | GameStatus::InProgress => {}
            }
        }
    }
    Ok(())
}

fn on_off(on: bool) -> &'static str {
    if on { "on" } else { "off" }
}
