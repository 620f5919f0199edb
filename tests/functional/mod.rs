//! Functional test harness for Poxdex
//!
//! This module provides a test context and a safety gate for running
//! functional tests against a live PoxBase API. Tests are opt-in via
//! the `functional-tests` feature.
//!
//! # Usage
//!
//! ```bash
//! # Against a local API
//! POXDEX_API_URL=http://localhost:8000/api \
//!     cargo test --features functional-tests --test functional
//!
//! # Against the public API (requires explicit confirmation)
//! POXDEX_FUNCTIONAL_TESTS_CONFIRM=yes \
//!     cargo test --features functional-tests --test functional
//! ```

use std::env;
use std::path::PathBuf;
use std::process::Command;

#[allow(unused_imports)]
use assert_cmd::prelude::*;

pub mod error_tests;
pub mod read_tests;

// ============================================================================
// Test Configuration
// ============================================================================

/// Public API base URL (requires explicit confirmation)
const PUBLIC_API_URL: &str = "https://poxbase.net/api";

/// Warning banner for public API usage
const PUBLIC_API_WARNING: &str = r#"
╔══════════════════════════════════════════════════════════════════╗
║  ⚠️  PUBLIC API WARNING                                           ║
║                                                                   ║
║  You are about to run functional tests against:                   ║
║    https://poxbase.net/api (PUBLIC)                               ║
║                                                                   ║
║  The API is read-only, but a full test run issues dozens of       ║
║  requests. Point POXDEX_API_URL at a local instance, or set       ║
║  POXDEX_FUNCTIONAL_TESTS_CONFIRM=yes to proceed.                  ║
╚══════════════════════════════════════════════════════════════════╝
"#;

// ============================================================================
// FunctionalTestContext
// ============================================================================

/// Context for functional tests providing command execution and the
/// public-API confirmation gate.
///
/// The context respects the following environment variables:
/// - `POXDEX_API_URL` - API to test against (defaults to the public API)
/// - `POXDEX_FUNCTIONAL_TESTS_CONFIRM=yes` - Required for the public API
pub struct FunctionalTestContext {
    /// Resolved API base URL
    pub api_url: String,
    /// Path to the poxdex binary
    pub binary_path: PathBuf,
}

impl FunctionalTestContext {
    /// Create a new test context with the public-API gate applied.
    pub fn new() -> Self {
        let api_url = env::var("POXDEX_API_URL").unwrap_or_else(|_| PUBLIC_API_URL.to_string());

        if api_url == PUBLIC_API_URL {
            Self::require_public_api_confirmation();
        }

        Self {
            api_url,
            binary_path: assert_cmd::cargo::cargo_bin!("poxdex").to_path_buf(),
        }
    }

    /// Panic with the warning banner if confirmation is not set.
    fn require_public_api_confirmation() {
        if env::var("POXDEX_FUNCTIONAL_TESTS_CONFIRM").as_deref() != Ok("yes") {
            eprintln!("{}", PUBLIC_API_WARNING);
            panic!(
                "Public API confirmation required. Set POXDEX_FUNCTIONAL_TESTS_CONFIRM=yes to proceed."
            );
        }
    }

    /// Build a Command with the API URL applied.
    ///
    /// This does NOT execute the command - use `run()` for that.
    pub fn command(&self, args: &[&str]) -> Command {
        let mut cmd = Command::new(&self.binary_path);
        cmd.env("POXDEX_API_URL", &self.api_url)
            .env_remove("POXDEX_FORMAT")
            .env_remove("POXDEX_CONFIG")
            .env_remove("POXDEX_DEBUG");
        cmd.args(args);
        cmd
    }

    /// Execute command and return an assertion object for chaining.
    pub fn run(&self, args: &[&str]) -> assert_cmd::assert::Assert {
        self.command(args).assert()
    }

    /// Execute command and expect success, returning stdout as String.
    ///
    /// Panics if the command fails (non-zero exit code).
    pub fn run_success(&self, args: &[&str]) -> String {
        let output = self
            .command(args)
            .output()
            .expect("Failed to execute command");

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            panic!(
                "Command failed: poxdex {}\nstderr: {}",
                args.join(" "),
                stderr
            );
        }

        String::from_utf8_lossy(&output.stdout).to_string()
    }

    /// Execute command and expect failure, returning stderr as String.
    ///
    /// Panics if the command succeeds.
    pub fn run_failure(&self, args: &[&str]) -> String {
        let output = self
            .command(args)
            .output()
            .expect("Failed to execute command");

        if output.status.success() {
            panic!("Command unexpectedly succeeded: poxdex {}", args.join(" "));
        }

        String::from_utf8_lossy(&output.stderr).to_string()
    }
}

impl Default for FunctionalTestContext {
    fn default() -> Self {
        Self::new()
    }
}
