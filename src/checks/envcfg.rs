//! Check 3: required environment variables in `.env.local`.

use crate::config::VerifierConfig;
use crate::console;
use crate::env_file::{classify_var, parse_env_file, VarState};
use crate::report::{CheckOutcome, CheckStatus};
use std::fs;

pub fn run(config: &VerifierConfig) -> Vec<CheckOutcome> {
    console::section("check 3: environment configuration");

    let env_path = config.env_file_path();
    let rel = config.display_path(&env_path);

    if !env_path.is_file() {
        console::failure(&format!("{rel} does not exist"));
        console::blank();
        console::warning("suggested fix:");
        console::info("cp web3-dapp/.env.local.example web3-dapp/.env.local");
        console::info("then edit .env.local and fill in real values");
        return vec![CheckOutcome::gate_failure(format!("{rel} does not exist"))];
    }
    console::success(&format!("{rel} exists"));

    // An unreadable file degrades to an empty one: every required key is
    // then reported as missing rather than aborting the check.
    let text = match fs::read_to_string(&env_path) {
        Ok(text) => text,
        Err(err) => {
            tracing::warn!(path = %env_path.display(), error = %err, "env file unreadable");
            String::new()
        }
    };
    let vars = parse_env_file(&text);

    let mut outcomes = Vec::new();
    let mut missing = Vec::new();
    let mut unconfigured = Vec::new();
    for key in &config.required_env_vars {
        let outcome = match classify_var(&vars, key) {
            VarState::Missing => {
                console::failure(&format!("missing {key}"));
                missing.push(key.clone());
                CheckOutcome::item(CheckStatus::Fail, format!("missing {key}"))
            }
            VarState::Placeholder => {
                console::warning(&format!("{key} has no real value yet"));
                unconfigured.push(key.clone());
                CheckOutcome::item(CheckStatus::Warn, format!("{key} has no real value yet"))
            }
            VarState::Set => {
                console::success(&format!("{key} is configured"));
                CheckOutcome::item(CheckStatus::Pass, format!("{key} is configured"))
            }
        };
        outcomes.push(outcome);
    }

    if !missing.is_empty() || !unconfigured.is_empty() {
        console::blank();
        console::warning("suggested fix:");
        if !missing.is_empty() {
            console::info("add these variables to .env.local:");
            for key in &missing {
                println!("  {key}=");
            }
        }
        if !unconfigured.is_empty() {
            console::info("fill in real values for:");
            for key in &unconfigured {
                println!("  {key} - {}", value_hint(key));
            }
        }
    }

    outcomes
}

fn value_hint(key: &str) -> &'static str {
    if key == "NEXT_PUBLIC_WALLETCONNECT_PROJECT_ID" {
        "get a project id at https://cloud.walletconnect.com"
    } else if key.contains("RPC_URL") {
        "use an endpoint from https://infura.io or https://alchemy.com"
    } else if key.contains("ADDRESS") {
        "fill in the contract address after deployment"
    } else {
        "set a real value"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::report::Summary;

    fn config_with_env(contents: &str) -> (tempfile::TempDir, VerifierConfig) {
        let temp = tempfile::tempdir().expect("temp dir");
        let config = VerifierConfig::for_root(temp.path());
        let env_path = config.env_file_path();
        fs::create_dir_all(env_path.parent().expect("env parent")).expect("create web dir");
        fs::write(env_path, contents).expect("write env file");
        (temp, config)
    }

    fn full_env() -> String {
        crate::config::REQUIRED_ENV_VARS
            .iter()
            .enumerate()
            .map(|(i, key)| format!("{key}=real-value-{i}\n"))
            .collect()
    }

    #[test]
    fn missing_env_file_is_a_single_failure() {
        let temp = tempfile::tempdir().expect("temp dir");
        let config = VerifierConfig::for_root(temp.path());

        let outcomes = run(&config);
        assert_eq!(outcomes.len(), 1);
        let summary = Summary::fold(&outcomes);
        assert_eq!(summary.total, 0);
        assert_eq!(summary.failed, 1);
    }

    #[test]
    fn every_configured_key_passes() {
        let (_temp, config) = config_with_env(&full_env());

        let summary = Summary::fold(&run(&config));
        assert_eq!(summary.total, config.required_env_vars.len());
        assert_eq!(summary.passed, config.required_env_vars.len());
        assert_eq!(summary.failed, 0);
        assert_eq!(summary.warnings, 0);
    }

    #[test]
    fn absent_keys_fail_and_are_listed_as_missing() {
        let (_temp, config) = config_with_env("NEXT_PUBLIC_SWAP_ADDRESS=0xabc\n");

        let outcomes = run(&config);
        let missing = outcomes
            .iter()
            .filter(|o| o.status == CheckStatus::Fail)
            .count();
        assert_eq!(missing, config.required_env_vars.len() - 1);
        assert!(outcomes
            .iter()
            .any(|o| o.message == "missing NEXT_PUBLIC_FARM_ADDRESS"));
    }

    #[test]
    fn placeholder_values_warn_not_pass() {
        let mut env = full_env();
        env.push_str("NEXT_PUBLIC_WALLETCONNECT_PROJECT_ID=your_project_id\n");
        env.push_str("NEXT_PUBLIC_RPC_URL_SEPOLIA=https://sepolia.infura.io/v3/...\n");
        env.push_str("NEXT_PUBLIC_FARM_ADDRESS=\n");
        let (_temp, config) = config_with_env(&env);

        let summary = Summary::fold(&run(&config));
        assert_eq!(summary.warnings, 3);
        assert_eq!(summary.failed, 0);
        assert_eq!(summary.passed, config.required_env_vars.len() - 3);
    }
}
