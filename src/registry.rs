//! Static contract and network catalog consumed by the front-end.
//!
//! The registry is pure data built once at process start: logical contract
//! names mapped to deployed addresses and ABIs, and logical network names
//! mapped to chain metadata. It performs no I/O and is never mutated after
//! construction. Shape invariants (address format, unique names and chain
//! ids, non-empty RPC lists) are not enforced by the types themselves;
//! callers run [`Registry::validate`] at startup so a malformed catalog is
//! surfaced as a configuration error instead of a broken runtime.

use anyhow::{bail, Result};
use regex::Regex;
use serde::Serialize;

/// State-mutability class of a contract function.
// All four ABI classes are part of the schema; the built-in catalog only
// happens to contain view and nonpayable functions.
#[allow(dead_code)]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Mutability {
    View,
    NonPayable,
    Payable,
    Pure,
}

/// One function input or output slot.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Parameter {
    pub name: String,
    #[serde(rename = "type")]
    pub ty: String,
}

/// One entry in a contract's ABI. Names may repeat (overloads); callers that
/// need to resolve a call target key by `(name, input types)`, not name alone.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct FunctionSignature {
    pub name: String,
    pub inputs: Vec<Parameter>,
    pub outputs: Vec<Parameter>,
    #[serde(rename = "stateMutability")]
    pub mutability: Mutability,
}

/// A deployed contract: logical name, address, and callable interface.
#[derive(Clone, Debug, Serialize)]
pub struct ContractDescriptor {
    pub name: String,
    pub address: String,
    pub interface: Vec<FunctionSignature>,
}

#[derive(Clone, Debug, Serialize)]
pub struct NativeCurrency {
    pub name: String,
    pub symbol: String,
    pub decimals: u8,
}

/// Chain metadata for wallet/provider configuration.
#[derive(Clone, Debug, Serialize)]
pub struct NetworkDescriptor {
    pub name: String,
    pub chain_id: u64,
    pub display_name: String,
    pub native_currency: NativeCurrency,
    pub rpc_endpoints: Vec<String>,
    pub explorer_url: String,
}

/// The full read-only catalog.
#[derive(Clone, Debug)]
pub struct Registry {
    contracts: Vec<ContractDescriptor>,
    networks: Vec<NetworkDescriptor>,
}

impl Registry {
    pub fn new(contracts: Vec<ContractDescriptor>, networks: Vec<NetworkDescriptor>) -> Self {
        Registry {
            contracts,
            networks,
        }
    }

    /// The catalog shipped with the teaching project: the demo contracts on
    /// Sepolia plus the Sepolia chain metadata.
    pub fn builtin() -> Self {
        Registry::new(builtin_contracts(), vec![sepolia()])
    }

    pub fn contract(&self, name: &str) -> Option<&ContractDescriptor> {
        self.contracts.iter().find(|c| c.name == name)
    }

    pub fn network(&self, name: &str) -> Option<&NetworkDescriptor> {
        self.networks.iter().find(|n| n.name == name)
    }

    pub fn contracts(&self) -> &[ContractDescriptor] {
        &self.contracts
    }

    pub fn networks(&self) -> &[NetworkDescriptor] {
        &self.networks
    }

    /// Check the catalog's shape invariants and report every violation.
    pub fn validate(&self) -> Result<()> {
        let address_re =
            Regex::new("^0x[0-9a-fA-F]{40}$").expect("regex for contract addresses");
        let mut violations = Vec::new();

        for contract in &self.contracts {
            if !address_re.is_match(&contract.address) {
                violations.push(format!(
                    "contract {}: address {:?} is not a 20-byte hex address",
                    contract.name, contract.address
                ));
            }
        }
        for (index, contract) in self.contracts.iter().enumerate() {
            if self.contracts[..index]
                .iter()
                .any(|other| other.name == contract.name)
            {
                violations.push(format!("duplicate contract name {:?}", contract.name));
            }
        }

        for network in &self.networks {
            if network.chain_id == 0 {
                violations.push(format!("network {}: chain id must be positive", network.name));
            }
            if !network.rpc_endpoints.iter().any(|url| !url.is_empty()) {
                violations.push(format!(
                    "network {}: needs at least one non-empty RPC endpoint",
                    network.name
                ));
            }
        }
        for (index, network) in self.networks.iter().enumerate() {
            if self.networks[..index]
                .iter()
                .any(|other| other.chain_id == network.chain_id)
            {
                violations.push(format!("duplicate chain id {}", network.chain_id));
            }
        }

        if violations.is_empty() {
            Ok(())
        } else {
            bail!("registry is malformed: {}", violations.join("; "))
        }
    }
}

fn param(name: &str, ty: &str) -> Parameter {
    Parameter {
        name: name.to_string(),
        ty: ty.to_string(),
    }
}

fn func(
    name: &str,
    inputs: Vec<Parameter>,
    outputs: Vec<Parameter>,
    mutability: Mutability,
) -> FunctionSignature {
    FunctionSignature {
        name: name.to_string(),
        inputs,
        outputs,
        mutability,
    }
}

fn builtin_contracts() -> Vec<ContractDescriptor> {
    vec![
        ContractDescriptor {
            name: "Counter".to_string(),
            address: "0x431306040c181E768C4301a7bfD4fC6a770E833F".to_string(),
            interface: vec![
                func("increment", vec![], vec![], Mutability::NonPayable),
                func(
                    "number",
                    vec![],
                    vec![param("", "uint256")],
                    Mutability::View,
                ),
                func(
                    "setNumber",
                    vec![param("newNumber", "uint256")],
                    vec![],
                    Mutability::NonPayable,
                ),
            ],
        },
        ContractDescriptor {
            name: "Erc20Token".to_string(),
            address: "0xa7d726B7F1085F943056C2fB91abE0204eC6d6DA".to_string(),
            interface: vec![
                func("name", vec![], vec![param("", "string")], Mutability::View),
                func("symbol", vec![], vec![param("", "string")], Mutability::View),
                func(
                    "totalSupply",
                    vec![],
                    vec![param("", "uint256")],
                    Mutability::View,
                ),
                func(
                    "balanceOf",
                    vec![param("account", "address")],
                    vec![param("", "uint256")],
                    Mutability::View,
                ),
                func("owner", vec![], vec![param("", "address")], Mutability::View),
                func(
                    "mintedByAddress",
                    vec![param("", "address")],
                    vec![param("", "uint256")],
                    Mutability::View,
                ),
                func(
                    "MAX_MINT_PER_ADDRESS",
                    vec![],
                    vec![param("", "uint256")],
                    Mutability::View,
                ),
                func(
                    "mint",
                    vec![param("amount", "uint256")],
                    vec![],
                    Mutability::NonPayable,
                ),
                func(
                    "remainingMintAmount",
                    vec![param("account", "address")],
                    vec![param("", "uint256")],
                    Mutability::View,
                ),
            ],
        },
    ]
}

fn sepolia() -> NetworkDescriptor {
    NetworkDescriptor {
        name: "sepolia".to_string(),
        chain_id: 11_155_111,
        display_name: "Sepolia".to_string(),
        native_currency: NativeCurrency {
            name: "Ether".to_string(),
            symbol: "ETH".to_string(),
            decimals: 18,
        },
        rpc_endpoints: vec!["https://rpc.sepolia.org".to_string()],
        explorer_url: "https://sepolia.etherscan.io".to_string(),
    }
}
