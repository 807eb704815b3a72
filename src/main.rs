use anyhow::Context;
use bumpsync::domain::ports::ConfigProvider;
use bumpsync::utils::{logger, validation::Validate};
use bumpsync::{BumpEngine, CliConfig, FileConfig, LogNotifier, Synchronizer};
use clap::Parser;

fn main() -> anyhow::Result<()> {
    let cli = CliConfig::parse();

    logger::init_cli_logger(cli.verbose);

    tracing::info!("Starting bumpsync");
    if cli.verbose {
        tracing::debug!("CLI config: {:?}", cli);
    }

    let json = cli.json;
    match cli.config.clone() {
        Some(config_path) => {
            let config = FileConfig::from_file(&config_path)
                .with_context(|| format!("failed to load {}", config_path))?;
            run(config, json)
        }
        None => run(cli, json),
    }
}

fn run<C>(config: C, json: bool) -> anyhow::Result<()>
where
    C: ConfigProvider + Validate,
{
    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        eprintln!("❌ {}", e);
        std::process::exit(1);
    }

    let engine = BumpEngine::new(Synchronizer::new(config, LogNotifier));

    match engine.run() {
        Ok(Some(outcome)) => {
            if json {
                println!("{}", serde_json::to_string_pretty(&outcome)?);
            } else if outcome.dry_run {
                println!(
                    "Dry run: {} -> {} (nothing written)",
                    outcome.previous, outcome.next
                );
            } else {
                println!("✅ Version bumped: {} -> {}", outcome.previous, outcome.next);
            }
        }
        Ok(None) => {
            println!("Nothing to do.");
        }
        Err(e) => {
            tracing::error!("❌ Version bump failed: {}", e);
            eprintln!("❌ {}", e);
            std::process::exit(1);
        }
    }

    Ok(())
}
