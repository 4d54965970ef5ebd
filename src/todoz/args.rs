use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "todoz", version)]
#[command(about = "Interactive todo list kept in a plain-text file", long_about = None)]
pub struct Cli {
    /// Todos file (defaults to todos.txt in the working directory)
    #[arg(short, long)]
    pub file: Option<PathBuf>,

    /// Number of todos shown per page
    #[arg(short, long)]
    pub page_size: Option<usize>,

    /// Directory containing todoz.json
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Verbose output
    #[arg(short, long)]
    pub verbose: bool,
}
