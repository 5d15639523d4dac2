//! Informative check: dev-server liveness probe.
//!
//! One HTTP GET against the loopback health endpoint, bounded by a timeout.
//! A server that is down or slow during setup is expected, so every probe
//! outcome maps to pass or warn, never fail, and the run's exit code is
//! unaffected. Timeouts are reported distinctly from refused connections so
//! the log does not conflate the two.

use crate::config::{ProbeConfig, VerifierConfig};
use crate::console;
use serde::Deserialize;
use ureq::Agent;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ProbeOutcome {
    /// Health endpoint responded with `{"ok": true}`.
    Healthy { version: Option<String> },
    /// The server responded, but with an error status, an unparsable body,
    /// or `ok: false`.
    Unhealthy { detail: String },
    /// No response within the timeout; the in-flight request is aborted.
    TimedOut,
    /// Connection refused or otherwise failed outright.
    Unreachable { detail: String },
}

#[derive(Deserialize)]
struct HealthBody {
    #[serde(default)]
    ok: bool,
    version: Option<String>,
}

/// Issue the single health request. Never blocks past the configured
/// timeout: the agent's global timeout covers connect, send, and read.
pub fn probe(config: &ProbeConfig) -> ProbeOutcome {
    let agent: Agent = Agent::config_builder()
        .timeout_global(Some(config.timeout))
        .build()
        .new_agent();
    let url = config.url();
    tracing::debug!(%url, timeout_ms = config.timeout.as_millis() as u64, "probing dev server");

    match agent.get(&url).call() {
        Ok(mut response) => match response.body_mut().read_json::<HealthBody>() {
            Ok(body) if body.ok => ProbeOutcome::Healthy {
                version: body.version,
            },
            Ok(_) => ProbeOutcome::Unhealthy {
                detail: "health endpoint reports ok=false".to_string(),
            },
            Err(_) => ProbeOutcome::Unhealthy {
                detail: "health response is not valid health JSON".to_string(),
            },
        },
        Err(ureq::Error::StatusCode(code)) => ProbeOutcome::Unhealthy {
            detail: format!("health endpoint returned HTTP {code}"),
        },
        Err(ureq::Error::Timeout(_)) => ProbeOutcome::TimedOut,
        Err(err) => ProbeOutcome::Unreachable {
            detail: err.to_string(),
        },
    }
}

pub fn run(config: &VerifierConfig) -> ProbeOutcome {
    console::section("check 4: dev server (optional)");

    let outcome = probe(&config.probe);
    let url = config.probe.url();
    match &outcome {
        ProbeOutcome::Healthy { version } => {
            console::success(&format!("dev server is responding at {url}"));
            console::success(&format!(
                "server version: {}",
                version.as_deref().unwrap_or("N/A")
            ));
        }
        ProbeOutcome::Unhealthy { detail } => {
            console::warning(&format!("dev server responded abnormally: {detail}"));
        }
        ProbeOutcome::TimedOut => {
            console::warning(&format!(
                "dev server did not respond within {:?}",
                config.probe.timeout
            ));
            console::info("start it with: cd web3-dapp && npm run dev");
        }
        ProbeOutcome::Unreachable { detail } => {
            console::warning(&format!("dev server is not running ({detail})"));
            console::info("start it with: cd web3-dapp && npm run dev");
        }
    }
    outcome
}
