use anyhow::{Context, Result};
use clap::Parser;
use std::path::PathBuf;
use std::process::ExitCode;

mod checks;
mod config;
mod console;
mod env_file;
mod registry;
mod report;

use config::VerifierConfig;
use registry::Registry;
use report::{CheckStatus, Summary};

#[derive(Parser, Debug)]
#[command(
    name = "dapp-doctor",
    version,
    about = "Self-check for a Foundry + Next.js Web3 DApp workspace",
    after_help = "Checks, in order:\n  1. compiled contract artifacts (foundry-demo/out)\n  2. exported ABIs (web3-dapp/public/abis)\n  3. environment configuration (web3-dapp/.env.local)\n  extra: front-end dependencies (advisory only)\n  4. dev-server health probe (informative only)\n\nExit code is 0 when checks 1-3 have no failures, 1 otherwise."
)]
struct Cli {
    /// Project root containing foundry-demo/ and web3-dapp/
    #[arg(long, value_name = "DIR", default_value = ".")]
    root: PathBuf,
}

fn main() -> ExitCode {
    init_tracing();
    let cli = Cli::parse();
    match run(&cli) {
        Ok(summary) => ExitCode::from(summary.exit_code()),
        Err(err) => {
            eprintln!("dapp-doctor failed: {err:#}");
            ExitCode::FAILURE
        }
    }
}

fn init_tracing() {
    use tracing_subscriber::EnvFilter;
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();
}

fn run(cli: &Cli) -> Result<Summary> {
    // The catalog is static data; a shape violation is a configuration
    // error, surfaced before any check runs.
    let registry = Registry::builtin();
    registry.validate().context("built-in contract registry")?;
    tracing::debug!(
        contracts = registry.contracts().len(),
        networks = registry.networks().len(),
        "registry loaded"
    );
    if let Some(network) = registry.network("sepolia") {
        tracing::debug!(chain_id = network.chain_id, "default network");
    }
    if let Some(counter) = registry.contract("Counter") {
        tracing::debug!(
            address = %counter.address,
            functions = counter.interface.len(),
            "demo contract"
        );
    }

    let config = VerifierConfig::for_root(&cli.root);
    console::blank();
    console::info("dapp-doctor - Web3 DApp project self-check");
    console::info(&format!(
        "project root: {}",
        config.project_root.display()
    ));

    let artifact_outcomes = checks::artifacts::run(&config);
    let abi_outcomes = checks::abis::run(&config);
    let env_outcomes = checks::envcfg::run(&config);
    let dep_outcomes = checks::deps::run(&config);
    let probe_outcome = checks::server::run(&config);

    // Only checks 1-3 drive the counters and exit code; the dependency
    // check is advisory and the probe is informative.
    let summary = Summary::fold(
        artifact_outcomes
            .iter()
            .chain(&abi_outcomes)
            .chain(&env_outcomes),
    );
    let advisory_issues = dep_outcomes
        .iter()
        .filter(|o| o.status != CheckStatus::Pass)
        .count();
    tracing::debug!(advisory_issues, probe = ?probe_outcome, "uncounted check results");

    report::print_summary(&summary);
    if summary.failed > 0 {
        report::print_fix_suggestions();
    }
    console::blank();

    Ok(summary)
}
