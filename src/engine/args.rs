use clap::Args;

#[derive(Args, Debug, Clone, Default)]
pub struct EngineArgs {
    #[arg(
        long,
        value_name = "OS",
        help = "Network OS which originated the output (default from config)"
    )]
    pub os: Option<String>,

    #[arg(
        long,
        value_name = "COMMAND",
        help = "Parser to use (default: inferred from the filename)"
    )]
    pub parser: Option<String>,
}
