mod cli;

use std::fs::File;
use std::io::{self, BufWriter, Write};

use anyhow::Context;
use clap::Parser;
use spacetime_observer::renderer::uniform_log::UniformLog;
use spacetime_observer::run::run;

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let cli = cli::Cli::parse();
    let config = cli.load_config()?;
    let options = cli.run_options();

    match &cli.output {
        Some(path) => {
            let file = File::create(path)
                .with_context(|| format!("failed to create {}", path.display()))?;
            let mut stage = UniformLog::new(BufWriter::new(file));
            run(&config, &options, &mut stage)?;
            stage
                .into_inner()
                .flush()
                .with_context(|| format!("failed to write {}", path.display()))?;
        }
        None => {
            let mut stage = UniformLog::new(io::stdout().lock());
            run(&config, &options, &mut stage)?;
            stage.into_inner().flush()?;
        }
    }
    Ok(())
}
