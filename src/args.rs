use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Utility-class preprocessor CLI - inspects and generates component style fragments
#[derive(Parser, Debug)]
#[command(name = "svelte-scoped-preprocess")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Verbose output
    #[arg(short = 'v', long = "verbose", global = true, default_value_t = false)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Print the global preflight/safelist CSS a `<style uno:preflights>` block would receive
    Preflights(PreflightsArgs),
    /// Report whether a style block needs the generator
    Scan(ScanArgs),
}

/// Arguments for the preflights command
#[derive(Parser, Debug, Clone)]
pub struct PreflightsArgs {
    /// Configuration file path (YAML or JSON)
    #[arg(
        short = 'c',
        long = "config",
        value_name = "PATH",
        env = "UNO_CONFIG",
        help = "Generator config file; discovered in the current directory when omitted"
    )]
    pub config: Option<PathBuf>,

    /// Include the configured safelist
    #[arg(long = "safelist", default_value_t = false)]
    pub safelist: bool,

    /// Leave out preflight rules
    #[arg(long = "no-preflights", default_value_t = false)]
    pub no_preflights: bool,
}

/// Arguments for the scan command
#[derive(Parser, Debug, Clone)]
pub struct ScanArgs {
    /// Style block to scan; stdin when omitted
    #[arg(value_name = "FILE")]
    pub file: Option<PathBuf>,

    /// Treat the block as carrying `uno:preflights`
    #[arg(long = "preflights", default_value_t = false)]
    pub preflights: bool,

    /// Treat the block as carrying `uno:safelist`
    #[arg(long = "safelist", default_value_t = false)]
    pub safelist: bool,

    /// Custom property acting as an apply directive (repeatable)
    #[arg(long = "apply-variable", value_name = "NAME", num_args = 1, allow_hyphen_values = true)]
    pub apply_variables: Vec<String>,

    /// Only recognize the `@apply` at-rule
    #[arg(long = "no-apply-variables", default_value_t = false, conflicts_with = "apply_variables")]
    pub no_apply_variables: bool,
}

impl PreflightsArgs {
    /// Validate that the arguments are consistent
    pub fn validate(&self) -> Result<(), String> {
        if self.no_preflights && !self.safelist {
            return Err("Nothing to generate: --no-preflights requires --safelist".to_string());
        }
        Ok(())
    }
}
