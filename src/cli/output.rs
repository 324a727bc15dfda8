//! Output formatting and progress bars for CLI

use indicatif::{ProgressBar, ProgressStyle};

use crate::{q_learning::ActionValues, tictactoe::BoardState};

/// Create a progress bar for training
pub fn create_training_progress(total_games: u64) -> ProgressBar {
    let pb = ProgressBar::new(total_games);
    if let Ok(style) = ProgressStyle::default_bar()
        .template("[{elapsed_precise}] {bar:40.cyan/blue} {pos}/{len} games ({msg})")
    {
        pb.set_style(style.progress_chars("=>-"));
    }
    pb
}

/// Print a section header
pub fn print_section(title: &str) {
    println!("\n{}", "=".repeat(40));
    println!("{title}");
    println!("{}", "=".repeat(40));
}

/// Print a key-value pair
pub fn print_kv(key: &str, value: &str) {
    println!("  {:20} {}", format!("{}:", key), value);
}

/// Render a board with cell numbers in the empty squares
///
/// ```text
///  X | 1 | 2
/// ---+---+---
///  3 | O | 5
/// ---+---+---
///  6 | 7 | 8
/// ```
pub fn render_board(state: &BoardState) -> String {
    let rows: Vec<String> = (0..3)
        .map(|row| {
            (0..3)
                .map(|col| {
                    let pos = row * 3 + col;
                    if state.is_empty(pos) {
                        format!(" {pos} ")
                    } else {
                        format!(" {} ", state.get(pos).to_char())
                    }
                })
                .collect::<Vec<_>>()
                .join("|")
        })
        .collect();
    rows.join("\n---+---+---\n")
}

/// Render the nine action values as a 3x3 grid
pub fn render_values(values: &ActionValues) -> String {
    values
        .chunks(3)
        .map(|row| {
            row.iter()
                .map(|v| format!("{v:>8.4}"))
                .collect::<Vec<_>>()
                .join(" ")
        })
        .collect::<Vec<_>>()
        .join("\n")
}
