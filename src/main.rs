//! AAC Board entry point
//!
//! Loads settings and the board file, then reads commands from stdin.

use std::io::{self, BufRead, Write};

use clap::Parser;

use aac_board::cli::Cli;
use aac_board::shell::{self, Command};
use aac_board::{Board, Settings};

fn main() -> io::Result<()> {
    env_logger::init();
    log::info!("AAC Board starting...");

    let cli = Cli::parse();
    let mut settings = Settings::load_or_init(&cli.settings);
    if let Some(board_file) = cli.board_file {
        settings.board_file = board_file;
    }

    let mut board = Board::load(&settings.board_file);
    log::info!("Board ready with {} categories", board.category_count());

    let stdin = io::stdin();
    let mut stdout = io::stdout().lock();
    writeln!(stdout, "type `help` for commands")?;
    for line in stdin.lock().lines() {
        let line = line?;
        let outcome = shell::execute(&mut board, Command::parse(&line), &settings);
        for text in &outcome.output {
            writeln!(stdout, "{}", text)?;
        }
        if outcome.quit {
            break;
        }
    }

    if settings.save_on_exit {
        board.save(&settings.board_file);
    }
    Ok(())
}
