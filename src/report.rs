//! Check outcomes and the aggregated run summary.
//!
//! Every check returns structured [`CheckOutcome`]s; the orchestrator folds
//! them into a [`Summary`] instead of checks mutating shared counters. An
//! outcome is either a counted per-item result (one expected file, one env
//! key) or a check-level gate failure (a whole directory missing), which
//! raises the failure count without inflating the item total.

use crate::console;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CheckStatus {
    Pass,
    Fail,
    Warn,
}

#[derive(Clone, Debug)]
pub struct CheckOutcome {
    pub status: CheckStatus,
    pub message: String,
    counted: bool,
}

impl CheckOutcome {
    /// A per-item result that counts toward the item total.
    pub fn item(status: CheckStatus, message: impl Into<String>) -> Self {
        CheckOutcome {
            status,
            message: message.into(),
            counted: true,
        }
    }

    /// A whole-check failure (e.g. the build output root is absent). Counts
    /// as one failure but does not add to the item total, so an empty
    /// project reports one failure per broken check rather than one per
    /// expected file it never looked at.
    pub fn gate_failure(message: impl Into<String>) -> Self {
        CheckOutcome {
            status: CheckStatus::Fail,
            message: message.into(),
            counted: false,
        }
    }
}

/// Run-scoped counters, finalized once after all checks complete.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Summary {
    pub total: usize,
    pub passed: usize,
    pub failed: usize,
    pub warnings: usize,
}

impl Summary {
    pub fn absorb(&mut self, outcome: &CheckOutcome) {
        if outcome.counted {
            self.total += 1;
        }
        match outcome.status {
            CheckStatus::Pass => self.passed += 1,
            CheckStatus::Fail => self.failed += 1,
            CheckStatus::Warn => self.warnings += 1,
        }
    }

    pub fn fold<'a, I>(outcomes: I) -> Summary
    where
        I: IntoIterator<Item = &'a CheckOutcome>,
    {
        let mut summary = Summary::default();
        for outcome in outcomes {
            summary.absorb(outcome);
        }
        summary
    }

    pub fn pass_rate(&self) -> f64 {
        if self.total == 0 {
            0.0
        } else {
            self.passed as f64 / self.total as f64
        }
    }

    pub fn exit_code(&self) -> u8 {
        if self.failed == 0 {
            0
        } else {
            1
        }
    }
}

/// Print the human-readable run summary.
pub fn print_summary(summary: &Summary) {
    console::section("summary");
    console::blank();
    println!("checked items: {}", summary.total);
    console::success(&format!("passed: {}", summary.passed));
    console::failure(&format!("failed: {}", summary.failed));
    console::warning(&format!("warnings: {}", summary.warnings));
    console::blank();

    let rate = summary.pass_rate() * 100.0;
    if summary.failed == 0 {
        console::success(&format!("all checks passed ({rate:.1}%)"));
        console::blank();
        console::info("the project is ready for development or deployment");
    } else {
        console::warning(&format!(
            "{} problem(s) to fix (pass rate: {rate:.1}%)",
            summary.failed
        ));
    }
}

/// Ordered remediation steps, printed whenever the run has failures.
pub fn print_fix_suggestions() {
    console::section("suggested fixes");
    console::blank();
    console::info("run these steps in order to repair the setup:");
    console::blank();

    println!("1. compile the contracts:");
    println!("   cd foundry-demo && forge build");
    println!();
    println!("2. export the ABIs to the front-end:");
    println!("   cd web3-dapp && npm run export-abis");
    println!();
    println!("3. configure the environment:");
    println!("   cp web3-dapp/.env.local.example web3-dapp/.env.local");
    println!("   # then edit .env.local and fill in real values");
    println!();
    println!("4. install front-end dependencies:");
    println!("   cd web3-dapp && npm install");
    println!();
    println!("5. start the dev server:");
    println!("   cd web3-dapp && npm run dev");
    println!();
    println!("6. open the app:");
    println!("   http://localhost:3000");
    println!();
}
