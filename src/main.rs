use anyhow::{bail, Context, Result};
use clap::Parser;
use serde::Serialize;
use svelte_scoped_preprocess::args::{Cli, Commands, PreflightsArgs, ScanArgs};
use svelte_scoped_preprocess::{
    check_for_apply, create_generator, global_preflights, has_theme_fn, ApplyVariables, ConfigSource,
    TailwindGeneratorFactory,
};
use tokio::io::{self, AsyncReadExt, AsyncWriteExt};
use tracing_subscriber::EnvFilter;

/// JSON report printed by the scan command
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct ScanReport {
    has_apply: bool,
    has_theme_fn: bool,
    apply_variables: Vec<String>,
    change_needed: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let default_level = if cli.verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)))
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        Commands::Preflights(args) => handle_preflights(args).await,
        Commands::Scan(args) => handle_scan(args).await,
    }
}

async fn handle_preflights(args: PreflightsArgs) -> Result<()> {
    if let Err(message) = args.validate() {
        bail!(message);
    }

    let cwd = std::env::current_dir().context("Failed to read current directory")?;
    let source = args.config.clone().map(ConfigSource::Path).unwrap_or_default();
    let uno = create_generator(&cwd, &source, &TailwindGeneratorFactory)
        .await
        .context("Failed to create generator")?;

    let css = global_preflights(uno.as_ref(), !args.no_preflights, args.safelist)
        .await
        .context("Failed to generate preflight CSS")?;

    write_stdout(&css).await
}

async fn handle_scan(args: ScanArgs) -> Result<()> {
    let content = match &args.file {
        Some(path) => tokio::fs::read_to_string(path)
            .await
            .with_context(|| format!("Failed to read {}", path.display()))?,
        None => {
            let mut input = String::new();
            io::stdin()
                .read_to_string(&mut input)
                .await
                .context("Failed to read from stdin")?;
            input
        }
    };

    let variables = if args.no_apply_variables {
        Some(ApplyVariables::Disabled)
    } else if !args.apply_variables.is_empty() {
        Some(ApplyVariables::Names(args.apply_variables.clone()))
    } else {
        None
    };

    let apply = check_for_apply(&content, variables.as_ref());
    let has_theme_fn = has_theme_fn(&content);
    let report = ScanReport {
        change_needed: args.preflights || args.safelist || apply.has_apply || has_theme_fn,
        has_apply: apply.has_apply,
        has_theme_fn,
        apply_variables: apply.apply_variables,
    };

    let json = serde_json::to_string_pretty(&report)?;
    write_stdout(&format!("{}\n", json)).await
}

async fn write_stdout(content: &str) -> Result<()> {
    let mut stdout = io::stdout();
    stdout
        .write_all(content.as_bytes())
        .await
        .context("Failed to write to stdout")?;
    stdout.flush().await.context("Failed to flush stdout")?;
    Ok(())
}
