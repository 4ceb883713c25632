use std::path::PathBuf;

use clap::Parser;

#[derive(Parser)]
#[command(version, about)]
pub struct Cli {
    /// File containing the grammar and test strings (stdin if omitted)
    pub file: Option<PathBuf>
}
