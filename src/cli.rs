use camino::Utf8PathBuf;
use clap::Parser;

/// Top-level CLI. Every flag is optional; a bare invocation provisions the
/// built-in layout under its built-in base path.
#[derive(Parser, Debug)]
#[command(
    name = "layoutkit",
    version,
    about = "Create a fixed directory layout under a base path"
)]
pub struct Cli {
    /// Provision under this directory instead of the layout's base path.
    #[arg(short = 'C', long = "base")]
    pub base: Option<Utf8PathBuf>,
    /// Print the target directories without creating anything.
    #[arg(long = "list")]
    pub list: bool,
    #[arg(short = 'v', long = "verbose", action = clap::ArgAction::Count)]
    pub verbose: u8,
}

/// Helper entry point so `main` can stay minimal.
pub fn parse() -> Cli {
    Cli::parse()
}
