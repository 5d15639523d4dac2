//! The ordered check battery.
//!
//! Each check runs exactly once per invocation, recovers its own failures
//! locally, and prints its section of the report as it goes. Checks 1-3
//! (artifacts, ABIs, env) return counted outcomes that drive the exit code;
//! the dependency check is advisory and the dev-server probe is purely
//! informative.

pub mod abis;
pub mod artifacts;
pub mod deps;
pub mod envcfg;
pub mod server;
