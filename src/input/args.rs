use clap::Args;

#[derive(Args, Debug, Clone)]
pub struct InputArgs {
    #[arg(
        long,
        required = true,
        value_name = "FILE",
        help = "Input file (use '-' for stdin)"
    )]
    pub infile: String,
}
