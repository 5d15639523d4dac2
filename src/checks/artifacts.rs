//! Check 1: compiled contract artifacts under the Foundry build output root.

use crate::config::VerifierConfig;
use crate::console;
use crate::report::{CheckOutcome, CheckStatus};

pub fn run(config: &VerifierConfig) -> Vec<CheckOutcome> {
    console::section("check 1: compiled contract artifacts");

    let out_dir = config.build_out_dir();
    let out_display = config.display_path(&out_dir);

    // A missing build root is one failure for the whole check; individual
    // artifact paths are not probed.
    if !out_dir.is_dir() {
        console::failure(&format!("{out_display} directory does not exist"));
        console::failure("compile the contracts first: cd foundry-demo && forge build");
        return vec![CheckOutcome::gate_failure(format!(
            "{out_display} directory does not exist"
        ))];
    }
    console::success(&format!("{out_display} directory exists"));

    let mut outcomes = Vec::new();
    for contract in &config.contracts {
        let artifact = config.artifact_path(contract);
        let rel = config.display_path(&artifact);
        let outcome = if artifact.is_file() {
            console::success(&format!("found {rel}"));
            CheckOutcome::item(CheckStatus::Pass, format!("found {rel}"))
        } else {
            console::failure(&format!("missing {rel}"));
            CheckOutcome::item(CheckStatus::Fail, format!("missing {rel}"))
        };
        outcomes.push(outcome);
    }

    if outcomes.iter().any(|o| o.status == CheckStatus::Fail) {
        console::blank();
        console::warning("suggested fix:");
        console::info("cd foundry-demo && forge build");
    }

    outcomes
}
