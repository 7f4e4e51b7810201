//*** START FILE: src/main.rs ***//
use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;

use my_cat_grammar::config::{load_config_from_file, Config};
use my_cat_grammar::{run_grammar_generation, OutputTarget};

const DEFAULT_CONFIG: &str = "my_cat.toml";

#[derive(Parser)]
#[command(name = "my-cat-grammar")]
#[command(about = "Generates the Tracery grammar for @my_cat_ebooks", long_about = None)]
#[command(version)]
struct Cli {
    /// TOML config file. Built-in defaults are used if the default file is absent.
    #[arg(short, long, default_value = DEFAULT_CONFIG)]
    config: PathBuf,

    /// Output file, or `-` for stdout. Overrides `output` from the config.
    #[arg(short, long)]
    output: Option<String>,

    /// Debug logging
    #[arg(short, long)]
    verbose: bool,

    /// Only log warnings and errors
    #[arg(short, long, conflicts_with = "verbose")]
    quiet: bool,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let mut builder = env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"));
    if cli.quiet {
        builder.filter_level(log::LevelFilter::Warn);
    } else if cli.verbose {
        builder.filter_level(log::LevelFilter::Debug);
    }
    builder.target(env_logger::Target::Stderr).init();

    let config = if cli.config.as_os_str() == DEFAULT_CONFIG && !cli.config.exists() {
        log::info!("No {} found, using built-in defaults", DEFAULT_CONFIG);
        Config::default()
    } else {
        load_config_from_file(&cli.config)
            .with_context(|| format!("loading config {}", cli.config.display()))?
    };

    let target = match cli.output.as_deref() {
        Some(arg) => OutputTarget::from_arg(arg),
        None => OutputTarget::from_config(&config),
    };

    run_grammar_generation(&config, &target).context("grammar generation failed")?;
    Ok(())
}
//*** END FILE: src/main.rs ***//
