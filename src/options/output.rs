use clap::Parser;

#[derive(Debug, Clone, Copy, Default, Parser)]
pub struct OutputOpts {
    /// Output result as JSON
    #[arg(long = "json", global = true)]
    pub json: bool,
}
