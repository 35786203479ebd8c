//! # errchain CLI
//!
//! Runs requests through the two-stage pipeline and prints what the
//! top-level handler makes of each failure.
//!
//! Usage:
//!   errchain [demo]
//!   errchain run --config <FILE> --query <ID>
//!   errchain sentinels
//!
//! Examples:
//!   errchain
//!   errchain run --config missing.json --query 123
//!   errchain --json run -c valid.json -Q notfound_db
//!   ERRCHAIN_LOG=debug errchain demo

use anyhow::Context;
use clap::{Parser, Subcommand};
use errchain_error::sentinel;
use errchain_pipeline::{process_request, Diagnosis, PipelineError, Recovery, SCENARIOS};
use tracing::debug;

#[derive(Parser)]
#[command(name = "errchain")]
#[command(author, version, about = "errchain - layered errors you can still see through")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Show the chain node by node
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Quiet mode - only print the final line of each request
    #[arg(short, long, global = true)]
    quiet: bool,

    /// Print a JSON diagnosis instead of text
    #[arg(long, global = true)]
    json: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the five fixed scenarios (default)
    Demo,
    /// Run a single request
    Run {
        /// Config file to load in the first stage
        #[arg(short, long, env = "ERRCHAIN_CONFIG")]
        config: String,

        /// Query identifier for the data stage
        #[arg(short = 'Q', long, env = "ERRCHAIN_QUERY")]
        query: String,
    },
    /// List the sentinel conditions
    Sentinels,
}

#[derive(Clone, Copy)]
struct Output {
    verbose: bool,
    quiet: bool,
    json: bool,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.quiet, cli.verbose)?;

    let out = Output {
        verbose: cli.verbose,
        quiet: cli.quiet,
        json: cli.json,
    };

    match cli.command.unwrap_or(Commands::Demo) {
        Commands::Demo => {
            for scenario in &SCENARIOS {
                debug!(scenario = scenario.name, "running scenario");
                handle(scenario.resource, scenario.query, out)?;
            }
        }
        Commands::Run { config, query } => {
            if !handle(&config, &query, out)? {
                std::process::exit(1);
            }
        }
        Commands::Sentinels => {
            for s in sentinel::ALL {
                println!("{:<18} {}", s.name(), s.message());
            }
        }
    }

    Ok(())
}

fn init_tracing(quiet: bool, verbose: bool) -> anyhow::Result<()> {
    let level = if quiet {
        "error"
    } else if verbose {
        "debug"
    } else {
        "info"
    };

    let filter = tracing_subscriber::EnvFilter::try_from_env("ERRCHAIN_LOG")
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|error| anyhow::anyhow!("failed to initialize tracing subscriber: {error}"))?;

    Ok(())
}

/// Run one request and print its outcome. Returns whether it succeeded.
fn handle(resource: &str, query: &str, out: Output) -> anyhow::Result<bool> {
    let result = process_request(resource, query);

    if out.json {
        let value = match &result {
            Ok(data) => serde_json::json!({
                "resource": resource,
                "query": query,
                "data": data,
            }),
            Err(err) => serde_json::json!({
                "resource": resource,
                "query": query,
                "diagnosis": Diagnosis::of(err),
            }),
        };
        let text = serde_json::to_string_pretty(&value).context("failed to encode diagnosis")?;
        println!("{}", text);
    } else {
        print!("{}", render(resource, query, &result, out));
    }

    Ok(result.is_ok())
}

fn render(resource: &str, query: &str, result: &Result<String, PipelineError>, out: Output) -> String {
    let mut text = String::new();

    if !out.quiet {
        text.push_str(&format!(
            "\n--- Processing request with config '{}' and data query '{}' ---\n",
            resource, query
        ));
    }

    match result {
        Ok(data) => {
            text.push_str(&format!("Successfully processed request. Data: {}\n", data));
        }
        Err(err) => {
            let diagnosis = Diagnosis::of(err);
            if !out.quiet {
                text.push_str(&format!("{}\n", diagnosis.headline));
                if diagnosis.recovery != Recovery::None {
                    text.push_str(&format!("  Suggested recovery: {}\n", diagnosis.recovery));
                }
            }
            if out.verbose {
                for (depth, node) in diagnosis.chain.nodes.iter().enumerate() {
                    text.push_str(&format!("  [{}] {:<8} {}\n", depth, node.kind, node.message));
                }
            }
            text.push_str(&format!("Main Error Handler: {}\n", diagnosis.rendered));
        }
    }

    text
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    const PLAIN: Output = Output {
        verbose: false,
        quiet: false,
        json: false,
    };

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_run() {
        let cli = Cli::parse_from(["errchain", "run", "-c", "missing.json", "-Q", "123"]);
        match cli.command {
            Some(Commands::Run { config, query }) => {
                assert_eq!(config, "missing.json");
                assert_eq!(query, "123");
            }
            _ => panic!("expected run command"),
        }
    }

    #[test]
    fn test_parse_global_json_before_run() {
        let cli = Cli::parse_from(["errchain", "--json", "run", "-c", "valid.json", "-Q", "notfound_db"]);
        assert!(cli.json);
        match cli.command {
            Some(Commands::Run { config, query }) => {
                assert_eq!(config, "valid.json");
                assert_eq!(query, "notfound_db");
            }
            _ => panic!("expected run command"),
        }

        // -q is the global quiet flag, not the query
        assert!(Cli::try_parse_from(["errchain", "run", "-c", "valid.json", "-q", "notfound_db"]).is_err());
    }

    #[test]
    fn test_render_failure() {
        let result = process_request("missing.json", "123");
        let text = render("missing.json", "123", &result, PLAIN);

        assert!(text.contains("--- Processing request with config 'missing.json' and data query '123' ---"));
        assert!(text.contains("Suggested recovery: attempt fallback"));
        assert!(text.ends_with(
            "Main Error Handler: failed during config stage: config error during 'open file' \
             for file 'missing.json': failed to open: file does not exist\n"
        ));
    }

    #[test]
    fn test_render_success() {
        let result = process_request("valid.json", "123");
        let text = render("valid.json", "123", &result, PLAIN);
        assert!(text.ends_with("Successfully processed request. Data: Sample Data\n"));
    }

    #[test]
    fn test_render_verbose_lists_chain() {
        let result = process_request("valid.json", "custom_resource_err");
        let out = Output { verbose: true, ..PLAIN };
        let text = render("valid.json", "custom_resource_err", &result, out);
        assert!(text.contains("[2] Sentinel resource not found"));
    }

    #[test]
    fn test_render_quiet() {
        let result = process_request("invalid.json", "123");
        let out = Output { quiet: true, ..PLAIN };
        let text = render("invalid.json", "123", &result, out);
        assert_eq!(
            text,
            "Main Error Handler: failed during config stage: config error during 'parse content' \
             for file 'invalid.json': invalid JSON structure\n"
        );
    }
}
