//! Inspect command - look inside a saved value table

use anyhow::{Context, Result, anyhow};
use clap::Parser;

use crate::{
    adapters::MsgPackRepository,
    cli::{
        config::CommonArgs,
        output::{print_kv, print_section, render_board, render_values},
    },
    ports::ValueTableRepository,
    tictactoe::BoardState,
};

#[derive(Parser, Debug)]
#[command(about = "Show what the agent has learned")]
pub struct InspectArgs {
    /// Board to show values for, nine cells of `.`, `X`, `O` (e.g. "XX.O.....")
    pub board: Option<String>,

    /// List the N states with the highest stored value
    #[arg(long, default_value_t = 0)]
    pub top: usize,
}

pub fn execute(args: InspectArgs, common: &CommonArgs) -> Result<()> {
    let table = MsgPackRepository::new()
        .load(&common.table)
        .with_context(|| format!("Failed to load value table: {}", common.table.display()))?
        .ok_or_else(|| anyhow!("No value table at {}", common.table.display()))?;

    print_section("Value Table");
    print_kv("File", &common.table.display().to_string());
    print_kv("States", &table.len().to_string());

    if let Some(board) = &args.board {
        let state = BoardState::from_string(board)?;
        println!("\n{}\n", render_board(&state));
        match table.get(&state) {
            Some(values) => println!("{}", render_values(values)),
            None => println!("(state not seen yet, all values are 0)"),
        }
    }

    if args.top > 0 {
        let mut ranked: Vec<(BoardState, f64)> = table
            .iter()
            .map(|(state, values)| {
                let best = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);
                (*state, best)
            })
            .collect();
        ranked.sort_by(|a, b| b.1.total_cmp(&a.1));

        print_section(&format!("Top {} states", args.top.min(ranked.len())));
        for (state, best) in ranked.into_iter().take(args.top) {
            println!("  {}  {best:.4}", state.encode());
        }
    }

    Ok(())
}
