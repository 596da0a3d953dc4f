use crate::commands::args::{BatchArgs, ConvertArgs, ExportArgs, ParseArgs};
use clap::{Parser, Subcommand};

// Top-level CLI parser. Per-command options live in commands::args.
#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "Parse network device CLI output and export it as JSON, CSV or Excel"
)]
pub struct Args {
    #[arg(
        long,
        global = true,
        value_name = "FILE",
        help = "Settings file (toml, yaml or json)"
    )]
    pub config: Option<String>,

    #[arg(
        short = 'v',
        long,
        global = true,
        help = "Print additional information to stderr"
    )]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Parse CLI output and print it as JSON
    Parse(ParseArgs),
    /// Flatten a JSON document into a table
    Export(ExportArgs),
    /// Parse CLI output and flatten it into a table
    Convert(ConvertArgs),
    /// Parse many CLI output files into a single table
    Batch(BatchArgs),
    /// List the registered flattening strategies
    Strategies,
}
