//! Advisory check: front-end dependency installation.
//!
//! Reported on the console but deliberately excluded from the pass/fail
//! counters so a half-installed environment is not penalized during setup.
//! The outcomes are still returned for diagnostics.

use crate::config::VerifierConfig;
use crate::console;
use crate::report::{CheckOutcome, CheckStatus};

pub fn run(config: &VerifierConfig) -> Vec<CheckOutcome> {
    console::section("extra check: front-end dependencies (advisory)");

    let manifest = config.package_manifest_path();
    let manifest_rel = config.display_path(&manifest);
    if !manifest.is_file() {
        console::failure(&format!("{manifest_rel} does not exist"));
        return vec![CheckOutcome::gate_failure(format!(
            "{manifest_rel} does not exist"
        ))];
    }
    console::success(&format!("{manifest_rel} exists"));

    let node_modules = config.node_modules_dir();
    let node_modules_rel = config.display_path(&node_modules);
    if !node_modules.is_dir() {
        console::warning(&format!(
            "{node_modules_rel} does not exist, dependencies not installed"
        ));
        console::blank();
        console::info("suggested fix: cd web3-dapp && npm install");
        return vec![CheckOutcome::item(
            CheckStatus::Warn,
            format!("{node_modules_rel} does not exist"),
        )];
    }
    console::success(&format!("{node_modules_rel} exists"));

    let mut outcomes = Vec::new();
    for package in &config.critical_packages {
        let outcome = if config.package_dir(package).is_dir() {
            console::success(&format!("package {package} is installed"));
            CheckOutcome::item(CheckStatus::Pass, format!("package {package} is installed"))
        } else {
            console::warning(&format!("package {package} is missing"));
            CheckOutcome::item(CheckStatus::Warn, format!("package {package} is missing"))
        };
        outcomes.push(outcome);
    }

    if outcomes.iter().any(|o| o.status != CheckStatus::Pass) {
        console::blank();
        console::info("suggested fix: cd web3-dapp && npm install");
    }

    outcomes
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn missing_manifest_short_circuits() {
        let temp = tempfile::tempdir().expect("temp dir");
        let config = VerifierConfig::for_root(temp.path());

        let outcomes = run(&config);
        assert_eq!(outcomes.len(), 1);
        assert_eq!(outcomes[0].status, CheckStatus::Fail);
    }

    #[test]
    fn missing_node_modules_warns() {
        let temp = tempfile::tempdir().expect("temp dir");
        let config = VerifierConfig::for_root(temp.path());
        let manifest = config.package_manifest_path();
        fs::create_dir_all(manifest.parent().expect("web dir")).expect("create web dir");
        fs::write(manifest, "{}").expect("write manifest");

        let outcomes = run(&config);
        assert_eq!(outcomes.len(), 1);
        assert_eq!(outcomes[0].status, CheckStatus::Warn);
        assert!(outcomes[0].message.contains("node_modules"));
    }

    #[test]
    fn reports_each_critical_package() {
        let temp = tempfile::tempdir().expect("temp dir");
        let config = VerifierConfig::for_root(temp.path());
        let manifest = config.package_manifest_path();
        fs::create_dir_all(manifest.parent().expect("web dir")).expect("create web dir");
        fs::write(manifest, "{}").expect("write manifest");
        fs::create_dir_all(config.package_dir("react")).expect("install react");
        fs::create_dir_all(config.package_dir("@rainbow-me/rainbowkit"))
            .expect("install rainbowkit");

        let outcomes = run(&config);
        assert_eq!(outcomes.len(), config.critical_packages.len());
        let installed = outcomes
            .iter()
            .filter(|o| o.status == CheckStatus::Pass)
            .count();
        assert_eq!(installed, 2);
    }
}
