use clap::Parser;

use flagnames::cli::{write_args, Cli};
use flagnames::logging::init_tracing;

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let settings = cli.settings()?;
    init_tracing(settings.trace);

    let resolution = settings.resolve(&cli.args);
    for warning in &resolution.warnings {
        tracing::warn!("{}", warning);
    }

    let stdout = std::io::stdout();
    write_args(&mut stdout.lock(), &resolution.args, settings.format)?;
    Ok(())
}
