use clap::Args;

use crate::engine::args::EngineArgs;
use crate::input::args::InputArgs;
use crate::sink::args::OutputArgs;
use crate::table::args::FlattenArgs;

#[derive(Args, Debug, Clone)]
pub struct ParseArgs {
    #[command(flatten)]
    pub input: InputArgs,

    #[command(flatten)]
    pub engine: EngineArgs,

    #[arg(long, value_name = "FILE", help = "Save the JSON to a file instead of stdout")]
    pub outfile: Option<String>,

    #[arg(
        long,
        value_name = "N",
        default_value_t = 2,
        help = "Indentation for JSON output"
    )]
    pub indent: usize,
}

#[derive(Args, Debug, Clone)]
pub struct ExportArgs {
    #[command(flatten)]
    pub input: InputArgs,

    #[command(flatten)]
    pub engine: EngineArgs,

    #[command(flatten)]
    pub output: OutputArgs,

    #[command(flatten)]
    pub flatten: FlattenArgs,
}

#[derive(Args, Debug, Clone)]
pub struct ConvertArgs {
    #[command(flatten)]
    pub input: InputArgs,

    #[command(flatten)]
    pub engine: EngineArgs,

    #[command(flatten)]
    pub output: OutputArgs,

    #[command(flatten)]
    pub flatten: FlattenArgs,
}

#[derive(Args, Debug, Clone)]
pub struct BatchArgs {
    #[arg(
        short = 'i',
        long = "infile",
        required = true,
        value_name = "GLOB",
        help = "Text files containing CLI output (quote the pattern)"
    )]
    pub pattern: String,

    #[arg(
        short = 'o',
        long,
        required = true,
        value_name = "FILE",
        help = "Output file (.csv, .xls or .xlsx)"
    )]
    pub outfile: String,

    #[command(flatten)]
    pub engine: EngineArgs,

    #[command(flatten)]
    pub flatten: FlattenArgs,

    #[arg(long, help = "Print a summary of the processed files")]
    pub stats: bool,
}
