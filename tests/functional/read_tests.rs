//! Read functional tests for Poxdex
//!
//! These tests verify that commands work correctly against the real API.
//! The API is read-only, so every test here is safe to run against any
//! environment, including the public one.

use predicates::prelude::*;

use super::FunctionalTestContext;

// ============================================================================
// Status Command
// ============================================================================

#[test]
#[cfg_attr(not(feature = "functional-tests"), ignore)]
fn test_status_shows_config() {
    let ctx = FunctionalTestContext::new();

    ctx.run(&["status"])
        .success()
        .stdout(predicate::str::contains("Poxdex Status"));
}

#[test]
#[cfg_attr(not(feature = "functional-tests"), ignore)]
fn test_status_reports_api_reachability() {
    let ctx = FunctionalTestContext::new();

    ctx.run(&["status"])
        .success()
        .stdout(predicate::str::contains("API"));
}

// NOTE: there is no test_status_json_format because the status command
// does not support --format json - it always outputs human-readable text

// ============================================================================
// Version Command
// ============================================================================

#[test]
#[cfg_attr(not(feature = "functional-tests"), ignore)]
fn test_version_prints_number() {
    let ctx = FunctionalTestContext::new();

    ctx.run(&["version"])
        .success()
        .stdout(predicate::str::contains("poxdex version"));
}

// ============================================================================
// Faction Commands
// ============================================================================

#[test]
#[cfg_attr(not(feature = "functional-tests"), ignore)]
fn test_faction_list_shows_wheel() {
    let ctx = FunctionalTestContext::new();

    // The faction wheel is static, so this works even when the API is down
    ctx.run(&["faction", "list"])
        .success()
        .stdout(predicate::str::contains("Savage Tundra"))
        .stdout(predicate::str::contains("Forsaken Wastes"));
}

#[test]
#[cfg_attr(not(feature = "functional-tests"), ignore)]
fn test_faction_list_json_format() {
    let ctx = FunctionalTestContext::new();

    ctx.run(&["faction", "list", "--format", "json"])
        .success()
        .stdout(predicate::str::contains("\"data\""))
        .stdout(predicate::str::contains("\"meta\""));
}

// ============================================================================
// Expansion Commands
// ============================================================================

#[test]
#[cfg_attr(not(feature = "functional-tests"), ignore)]
fn test_expansion_list_returns_sets() {
    let ctx = FunctionalTestContext::new();

    let stdout = ctx.run_success(&["expansion", "list"]);
    assert!(!stdout.trim().is_empty(), "expansion list was empty");
}

#[test]
#[cfg_attr(not(feature = "functional-tests"), ignore)]
fn test_expansion_list_json_format() {
    let ctx = FunctionalTestContext::new();

    ctx.run(&["expansion", "list", "--format", "json"])
        .success()
        .stdout(predicate::str::contains("\"data\""))
        .stdout(predicate::str::contains("\"meta\""));
}

// ============================================================================
// Rune Commands
// ============================================================================

#[test]
#[cfg_attr(not(feature = "functional-tests"), ignore)]
fn test_champ_get_renders_rune() {
    let ctx = FunctionalTestContext::new();

    // Every champion front face carries the nora cost
    ctx.run(&["champ", "get", "1"])
        .success()
        .stdout(predicate::str::contains("Nora"));
}

#[test]
#[cfg_attr(not(feature = "functional-tests"), ignore)]
fn test_champ_get_back_face() {
    let ctx = FunctionalTestContext::new();

    ctx.run(&["champ", "get", "1", "--flip"])
        .success()
        .stdout(predicate::str::contains("Deck Limit"));
}

#[test]
#[cfg_attr(not(feature = "functional-tests"), ignore)]
fn test_champ_get_json_format() {
    let ctx = FunctionalTestContext::new();

    ctx.run(&["champ", "get", "1", "--format", "json"])
        .success()
        .stdout(predicate::str::contains("\"data\""))
        .stdout(predicate::str::contains("\"meta\""));
}

#[test]
#[cfg_attr(not(feature = "functional-tests"), ignore)]
fn test_spell_get_renders_rune() {
    let ctx = FunctionalTestContext::new();

    ctx.run(&["spell", "get", "1"])
        .success()
        .stdout(predicate::str::contains("Nora"));
}

#[test]
#[cfg_attr(not(feature = "functional-tests"), ignore)]
fn test_equip_get_renders_rune() {
    let ctx = FunctionalTestContext::new();

    ctx.run(&["equip", "get", "1"]).success();
}

#[test]
#[cfg_attr(not(feature = "functional-tests"), ignore)]
fn test_relic_get_renders_rune() {
    let ctx = FunctionalTestContext::new();

    ctx.run(&["relic", "get", "1"]).success();
}

// ============================================================================
// Ability Commands
// ============================================================================

#[test]
#[cfg_attr(not(feature = "functional-tests"), ignore)]
fn test_ability_get_lists_ranks() {
    let ctx = FunctionalTestContext::new();

    ctx.run(&["ability", "get", "1"])
        .success()
        .stdout(predicate::str::contains("Ability >"));
}

// ============================================================================
// Search Commands
// ============================================================================

#[test]
#[cfg_attr(not(feature = "functional-tests"), ignore)]
fn test_search_finds_runes() {
    let ctx = FunctionalTestContext::new();

    ctx.run(&["search", "elf"])
        .success()
        .stdout(predicate::str::contains("No results found.").not());
}

#[test]
#[cfg_attr(not(feature = "functional-tests"), ignore)]
fn test_search_respects_limit() {
    let ctx = FunctionalTestContext::new();

    ctx.run(&["search", "elf", "--limit", "1"]).success();
}

#[test]
#[cfg_attr(not(feature = "functional-tests"), ignore)]
fn test_search_json_format() {
    let ctx = FunctionalTestContext::new();

    ctx.run(&["search", "elf", "--format", "json"])
        .success()
        .stdout(predicate::str::contains("\"data\""))
        .stdout(predicate::str::contains("\"meta\""));
}
