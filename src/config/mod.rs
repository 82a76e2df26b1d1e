pub mod seed;

#[cfg(feature = "cli")]
use clap::Parser;

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Parser)]
#[command(name = "tome-rater")]
#[command(about = "In-memory catalog relating readers to books and ratings")]
pub struct CliConfig {
    #[arg(long, help = "TOML seed file describing books, users and readings")]
    pub seed: Option<std::path::PathBuf>,

    #[arg(long, default_value = "3", help = "How many most-read books to list")]
    pub top_n: usize,

    #[arg(long, help = "Render the report as JSON instead of text")]
    pub json: bool,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,
}
