mod cli;
mod layout;
mod logging;
mod provision;
mod runner;
mod util;

fn main() -> anyhow::Result<()> {
    let app = cli::parse();
    logging::init(app.verbose);
    runner::run(app)
}
