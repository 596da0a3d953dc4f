use clap::Args;

#[derive(Args, Debug, Clone, Default)]
pub struct OutputArgs {
    #[arg(
        long,
        value_name = "FILE",
        help = "Output file; the extension selects the format (.csv, .xls, .xlsx). Default: stdout"
    )]
    pub outfile: Option<String>,
}
