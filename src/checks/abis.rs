//! Check 2: exported ABI files under the front-end public assets directory.
//!
//! Each expected file has a three-way outcome: fail when missing or not
//! valid JSON, warn when the JSON parses but carries no `abi` array, pass
//! otherwise.

use crate::config::VerifierConfig;
use crate::console;
use crate::report::{CheckOutcome, CheckStatus};
use serde_json::Value;
use std::fs;
use std::path::Path;

pub fn run(config: &VerifierConfig) -> Vec<CheckOutcome> {
    console::section("check 2: ABI export to the front-end");

    let abis_dir = config.abis_dir();
    let dir_display = config.display_path(&abis_dir);

    if !abis_dir.is_dir() {
        console::failure(&format!("{dir_display} directory does not exist"));
        console::blank();
        console::warning("suggested fix:");
        console::info("mkdir -p web3-dapp/public/abis");
        console::info("cd web3-dapp && npm run export-abis");
        return vec![CheckOutcome::gate_failure(format!(
            "{dir_display} directory does not exist"
        ))];
    }
    console::success(&format!("{dir_display} directory exists"));

    let mut outcomes = Vec::new();
    for contract in &config.contracts {
        let path = config.abi_path(contract);
        let rel = config.display_path(&path);
        let outcome = inspect_abi_file(&path, &rel);
        match outcome.status {
            CheckStatus::Pass => console::success(&outcome.message),
            CheckStatus::Fail => console::failure(&outcome.message),
            CheckStatus::Warn => console::warning(&outcome.message),
        }
        outcomes.push(outcome);
    }

    if outcomes.iter().any(|o| o.status == CheckStatus::Fail) {
        console::blank();
        console::warning("suggested fix:");
        console::info("cd web3-dapp && npm run export-abis");
        console::info(
            "or copy by hand: cp foundry-demo/out/Contract.sol/Contract.json web3-dapp/public/abis/",
        );
    }

    outcomes
}

fn inspect_abi_file(path: &Path, rel: &str) -> CheckOutcome {
    let content = match fs::read_to_string(path) {
        Ok(content) => content,
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
            return CheckOutcome::item(CheckStatus::Fail, format!("missing {rel}"));
        }
        Err(err) => {
            return CheckOutcome::item(CheckStatus::Fail, format!("{rel} - unreadable: {err}"));
        }
    };

    let json: Value = match serde_json::from_str(&content) {
        Ok(json) => json,
        Err(_) => {
            return CheckOutcome::item(CheckStatus::Fail, format!("{rel} - JSON parse failed"));
        }
    };

    if json.get("abi").is_some_and(Value::is_array) {
        CheckOutcome::item(CheckStatus::Pass, format!("{rel} - well formed"))
    } else {
        CheckOutcome::item(
            CheckStatus::Warn,
            format!("{rel} - unexpected shape (no abi array)"),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::report::Summary;

    fn config_with_abis_dir() -> (tempfile::TempDir, VerifierConfig) {
        let temp = tempfile::tempdir().expect("temp dir");
        let config = VerifierConfig::for_root(temp.path());
        fs::create_dir_all(config.abis_dir()).expect("create abis dir");
        (temp, config)
    }

    #[test]
    fn missing_abis_dir_is_a_single_failure() {
        let temp = tempfile::tempdir().expect("temp dir");
        let config = VerifierConfig::for_root(temp.path());

        let outcomes = run(&config);
        assert_eq!(outcomes.len(), 1);
        let summary = Summary::fold(&outcomes);
        assert_eq!(summary.total, 0);
        assert_eq!(summary.failed, 1);
    }

    #[test]
    fn well_formed_abi_passes() {
        let (_temp, config) = config_with_abis_dir();
        fs::write(config.abi_path("Swap"), r#"{"abi": []}"#).expect("write abi");

        let outcomes = run(&config);
        let swap = outcomes
            .iter()
            .find(|o| o.message.contains("Swap.json"))
            .expect("swap outcome");
        assert_eq!(swap.status, CheckStatus::Pass);
    }

    #[test]
    fn json_without_abi_array_warns_not_fails() {
        let (_temp, config) = config_with_abis_dir();
        fs::write(config.abi_path("Farm"), r#"{"bytecode": "0x"}"#).expect("write file");
        fs::write(config.abi_path("Swap"), r#"{"abi": "not-an-array"}"#).expect("write file");

        let outcomes = run(&config);
        for name in ["Farm.json", "Swap.json"] {
            let outcome = outcomes
                .iter()
                .find(|o| o.message.contains(name))
                .expect("outcome");
            assert_eq!(outcome.status, CheckStatus::Warn, "{name}");
        }
    }

    #[test]
    fn unparsable_json_fails() {
        let (_temp, config) = config_with_abis_dir();
        fs::write(config.abi_path("TokenA"), "{ not json").expect("write file");

        let outcomes = run(&config);
        let outcome = outcomes
            .iter()
            .find(|o| o.message.contains("TokenA.json"))
            .expect("outcome");
        assert_eq!(outcome.status, CheckStatus::Fail);
        assert!(outcome.message.contains("JSON parse failed"));
    }

    #[test]
    fn missing_files_fail_individually_once_dir_exists() {
        let (_temp, config) = config_with_abis_dir();

        let outcomes = run(&config);
        assert_eq!(outcomes.len(), config.contracts.len());
        let summary = Summary::fold(&outcomes);
        assert_eq!(summary.failed, config.contracts.len());
        assert_eq!(summary.total, config.contracts.len());
    }
}
