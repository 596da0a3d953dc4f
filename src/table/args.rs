use clap::Args;

#[derive(Args, Debug, Clone, Default)]
pub struct FlattenArgs {
    #[arg(
        long,
        help = "Emit rows for every sibling subtree instead of only the first branch of each level"
    )]
    pub all_branches: bool,
}
