//! Verifier configuration: the project layout conventions and the expected
//! contract/env/package lists, resolved against a configurable project root.

use std::path::{Path, PathBuf};
use std::time::Duration;

/// Contracts whose build artifacts and exported ABIs are expected.
pub const EXPECTED_CONTRACTS: &[&str] = &[
    "RewardToken",
    "TokenA",
    "TokenB",
    "Swap",
    "Farm",
    "LaunchPad",
];

/// Environment variables the front-end requires in `.env.local`.
pub const REQUIRED_ENV_VARS: &[&str] = &[
    "NEXT_PUBLIC_WALLETCONNECT_PROJECT_ID",
    "NEXT_PUBLIC_RPC_URL_SEPOLIA",
    "NEXT_PUBLIC_REWARD_TOKEN_ADDRESS",
    "NEXT_PUBLIC_TKA_ADDRESS",
    "NEXT_PUBLIC_TKB_ADDRESS",
    "NEXT_PUBLIC_SWAP_ADDRESS",
    "NEXT_PUBLIC_FARM_ADDRESS",
    "NEXT_PUBLIC_LAUNCHPAD_ADDRESS",
];

/// Packages whose installed directories mark a usable `npm install`.
pub const CRITICAL_PACKAGES: &[&str] = &[
    "next",
    "react",
    "wagmi",
    "viem",
    "@rainbow-me/rainbowkit",
    "echarts",
];

/// Dev-server health probe target.
#[derive(Clone, Debug)]
pub struct ProbeConfig {
    pub host: String,
    pub port: u16,
    pub path: String,
    pub timeout: Duration,
}

impl ProbeConfig {
    pub fn url(&self) -> String {
        format!("http://{}:{}{}", self.host, self.port, self.path)
    }
}

impl Default for ProbeConfig {
    fn default() -> Self {
        ProbeConfig {
            host: "127.0.0.1".to_string(),
            port: 3000,
            path: "/api/health".to_string(),
            timeout: Duration::from_secs(3),
        }
    }
}

/// Full verifier configuration for one run.
#[derive(Clone, Debug)]
pub struct VerifierConfig {
    pub project_root: PathBuf,
    pub foundry_dir: String,
    pub web_dir: String,
    pub contracts: Vec<String>,
    pub required_env_vars: Vec<String>,
    pub critical_packages: Vec<String>,
    pub probe: ProbeConfig,
}

impl VerifierConfig {
    pub fn for_root(project_root: impl Into<PathBuf>) -> Self {
        VerifierConfig {
            project_root: project_root.into(),
            foundry_dir: "foundry-demo".to_string(),
            web_dir: "web3-dapp".to_string(),
            contracts: EXPECTED_CONTRACTS.iter().map(|s| s.to_string()).collect(),
            required_env_vars: REQUIRED_ENV_VARS.iter().map(|s| s.to_string()).collect(),
            critical_packages: CRITICAL_PACKAGES.iter().map(|s| s.to_string()).collect(),
            probe: ProbeConfig::default(),
        }
    }

    fn foundry_root(&self) -> PathBuf {
        self.project_root.join(&self.foundry_dir)
    }

    fn web_root(&self) -> PathBuf {
        self.project_root.join(&self.web_dir)
    }

    /// Foundry build output root (`foundry-demo/out`).
    pub fn build_out_dir(&self) -> PathBuf {
        self.foundry_root().join("out")
    }

    /// Compiled artifact path for one contract
    /// (`foundry-demo/out/{Name}.sol/{Name}.json`).
    pub fn artifact_path(&self, contract: &str) -> PathBuf {
        self.build_out_dir()
            .join(format!("{contract}.sol"))
            .join(format!("{contract}.json"))
    }

    /// Exported-ABI directory (`web3-dapp/public/abis`).
    pub fn abis_dir(&self) -> PathBuf {
        self.web_root().join("public").join("abis")
    }

    /// Exported ABI path for one contract (`web3-dapp/public/abis/{Name}.json`).
    pub fn abi_path(&self, contract: &str) -> PathBuf {
        self.abis_dir().join(format!("{contract}.json"))
    }

    /// Front-end environment file (`web3-dapp/.env.local`).
    pub fn env_file_path(&self) -> PathBuf {
        self.web_root().join(".env.local")
    }

    /// Front-end package manifest (`web3-dapp/package.json`).
    pub fn package_manifest_path(&self) -> PathBuf {
        self.web_root().join("package.json")
    }

    /// Installed-dependency root (`web3-dapp/node_modules`).
    pub fn node_modules_dir(&self) -> PathBuf {
        self.web_root().join("node_modules")
    }

    /// Installation marker directory for one package. Scoped names like
    /// `@rainbow-me/rainbowkit` map to nested directories.
    pub fn package_dir(&self, package: &str) -> PathBuf {
        let mut dir = self.node_modules_dir();
        for part in package.split('/') {
            dir = dir.join(part);
        }
        dir
    }

    /// Render a path relative to the project root for display.
    pub fn display_path(&self, path: &Path) -> String {
        match path.strip_prefix(&self.project_root) {
            Ok(relative) => relative.display().to_string(),
            Err(_) => path.display().to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn paths_follow_project_layout() {
        let config = VerifierConfig::for_root("/proj");
        assert_eq!(
            config.artifact_path("Swap"),
            PathBuf::from("/proj/foundry-demo/out/Swap.sol/Swap.json")
        );
        assert_eq!(
            config.abi_path("Farm"),
            PathBuf::from("/proj/web3-dapp/public/abis/Farm.json")
        );
        assert_eq!(
            config.env_file_path(),
            PathBuf::from("/proj/web3-dapp/.env.local")
        );
    }

    #[test]
    fn scoped_packages_map_to_nested_directories() {
        let config = VerifierConfig::for_root("/proj");
        assert_eq!(
            config.package_dir("@rainbow-me/rainbowkit"),
            PathBuf::from("/proj/web3-dapp/node_modules/@rainbow-me/rainbowkit")
        );
        assert_eq!(
            config.package_dir("react"),
            PathBuf::from("/proj/web3-dapp/node_modules/react")
        );
    }

    #[test]
    fn display_path_strips_the_root() {
        let config = VerifierConfig::for_root("/proj");
        assert_eq!(
            config.display_path(&config.build_out_dir()),
            "foundry-demo/out"
        );
    }

    #[test]
    fn probe_url_targets_the_loopback_health_endpoint() {
        let probe = ProbeConfig::default();
        assert_eq!(probe.url(), "http://127.0.0.1:3000/api/health");
    }
}
