//! Command-line arguments of the binary

use std::path::PathBuf;

use clap::Parser;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Board file to load and save. Overrides `board_file` from settings.
    pub board_file: Option<PathBuf>,

    /// Settings file. Created with defaults if it does not exist.
    #[arg(long, env = "AAC_BOARD_SETTINGS", default_value = "aac-settings.json")]
    pub settings: PathBuf,
}
