mod commands;
mod report;

use anyhow::Result;
use clap::{Args, Parser, Subcommand};

#[derive(Parser)]
#[command(name = "codesift")]
#[command(about = "Codesift - compare candidate selection strategies over cached pools", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Args, Clone)]
struct SandboxArgs {
    /// Interpreter used to run candidate programs
    #[arg(long, default_value = "python3")]
    interpreter: String,

    /// Wall-clock limit per sandbox call, in milliseconds
    #[arg(long, default_value = "2000")]
    timeout_ms: u64,

    /// Bounded worker-pool width for sandbox calls (1 = sequential)
    #[arg(long, default_value = "1")]
    parallelism: usize,
}

#[derive(Subcommand)]
enum Commands {
    /// Run both selection strategies over a candidates cache and compare them
    Run {
        /// Path to the candidates cache (JSON)
        #[arg(short, long, default_value = "data/candidates_cache.json")]
        cache: String,

        /// Append the canonical solution to each pool before selecting,
        /// to validate that the selectors never prune the truth
        #[arg(long, action = clap::ArgAction::Set, default_value_t = true)]
        inject_canonical: bool,

        #[command(flatten)]
        sandbox: SandboxArgs,
    },

    /// Rank cached test inputs by how evenly they split each candidate pool
    RankTests {
        /// Path to the candidates cache (JSON)
        #[arg(short, long, default_value = "data/candidates_cache.json")]
        cache: String,

        #[command(flatten)]
        sandbox: SandboxArgs,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_target(false)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Run {
            cache,
            inject_canonical,
            sandbox,
        } => {
            commands::run(&cache, inject_canonical, &sandbox.into_config()).await?;
        }
        Commands::RankTests { cache, sandbox } => {
            commands::rank_tests(&cache, &sandbox.into_config()).await?;
        }
    }

    Ok(())
}

impl SandboxArgs {
    fn into_config(self) -> codesift_common::config::SandboxConfig {
        codesift_common::config::SandboxConfig {
            interpreter: self.interpreter,
            timeout_ms: self.timeout_ms,
            parallelism: self.parallelism,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse_inject_canonical(args: &[&str]) -> bool {
        let cli = Cli::try_parse_from(args).expect("arguments should parse");
        match cli.command {
            Commands::Run {
                inject_canonical, ..
            } => inject_canonical,
            Commands::RankTests { .. } => panic!("expected the run command"),
        }
    }

    #[test]
    fn inject_canonical_defaults_to_true() {
        assert!(parse_inject_canonical(&["codesift", "run"]));
    }

    #[test]
    fn inject_canonical_can_be_disabled() {
        assert!(!parse_inject_canonical(&[
            "codesift",
            "run",
            "--inject-canonical",
            "false"
        ]));
        assert!(!parse_inject_canonical(&[
            "codesift",
            "run",
            "--inject-canonical=false"
        ]));
    }

    #[test]
    fn inject_canonical_accepts_explicit_true() {
        assert!(parse_inject_canonical(&[
            "codesift",
            "run",
            "--inject-canonical",
            "true"
        ]));
    }
}
