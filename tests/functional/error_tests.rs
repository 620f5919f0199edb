//! Error scenario functional tests for Poxdex
//!
//! These tests verify that Poxdex returns appropriate, actionable error
//! messages when operations fail. Good error messages help users understand
//! what went wrong and how to fix it.

use predicates::prelude::*;

use super::FunctionalTestContext;

// ============================================================================
// Nonexistent Rune Errors
// ============================================================================

#[test]
#[cfg_attr(not(feature = "functional-tests"), ignore)]
fn test_nonexistent_champ_returns_not_found() {
    let ctx = FunctionalTestContext::new();

    // Use an id far beyond the rune index
    ctx.run(&["champ", "get", "999999"])
        .failure()
        .stderr(predicate::str::contains("Champion 999999").or(predicate::str::contains("not found")));
}

#[test]
#[cfg_attr(not(feature = "functional-tests"), ignore)]
fn test_nonexistent_spell_returns_not_found() {
    let ctx = FunctionalTestContext::new();

    ctx.run(&["spell", "get", "999999"])
        .failure()
        .stderr(predicate::str::contains("Spell 999999").or(predicate::str::contains("not found")));
}

#[test]
#[cfg_attr(not(feature = "functional-tests"), ignore)]
fn test_nonexistent_ability_returns_not_found() {
    let ctx = FunctionalTestContext::new();

    ctx.run(&["ability", "get", "999999"]).failure().stderr(
        predicate::str::contains("Ability group 999999").or(predicate::str::contains("not found")),
    );
}

// ============================================================================
// Invalid Rank Selection
// ============================================================================

#[test]
#[cfg_attr(not(feature = "functional-tests"), ignore)]
fn test_rank_zero_rejected() {
    let ctx = FunctionalTestContext::new();

    // Ranks are one-based
    let stderr = ctx.run_failure(&["champ", "get", "1", "--rank1", "0"]);
    assert!(stderr.contains("between 1 and"), "stderr: {stderr}");
}

#[test]
#[cfg_attr(not(feature = "functional-tests"), ignore)]
fn test_rank_out_of_range_rejected() {
    let ctx = FunctionalTestContext::new();

    ctx.run(&["champ", "get", "1", "--rank2", "9"])
        .failure()
        .stderr(predicate::str::contains("between 1 and"));
}

// ============================================================================
// Missing Required Arguments
// ============================================================================

#[test]
#[cfg_attr(not(feature = "functional-tests"), ignore)]
fn test_champ_get_missing_id_shows_help() {
    let ctx = FunctionalTestContext::new();

    // Missing required argument should show usage
    ctx.run(&["champ", "get"]).failure().stderr(
        predicate::str::contains("Usage")
            .or(predicate::str::contains("required"))
            .or(predicate::str::contains("argument")),
    );
}

#[test]
#[cfg_attr(not(feature = "functional-tests"), ignore)]
fn test_search_missing_query_shows_help() {
    let ctx = FunctionalTestContext::new();

    ctx.run(&["search"]).failure().stderr(
        predicate::str::contains("Usage")
            .or(predicate::str::contains("required"))
            .or(predicate::str::contains("argument")),
    );
}

// ============================================================================
// Invalid Flag Values
// ============================================================================

#[test]
#[cfg_attr(not(feature = "functional-tests"), ignore)]
fn test_unknown_format_rejected() {
    let ctx = FunctionalTestContext::new();

    ctx.run(&["champ", "get", "1", "--format", "sideways"])
        .failure()
        .stderr(predicate::str::contains("invalid value").or(predicate::str::contains("--format")));
}

#[test]
#[cfg_attr(not(feature = "functional-tests"), ignore)]
fn test_non_numeric_id_rejected() {
    let ctx = FunctionalTestContext::new();

    ctx.run(&["champ", "get", "khan"])
        .failure()
        .stderr(predicate::str::contains("invalid value").or(predicate::str::contains("<ID>")));
}
