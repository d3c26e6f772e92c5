//! Integration tests for the em CLI commands.
#![allow(deprecated)] // Command::cargo_bin – macro replacement not yet stable

use std::fs;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn emix() -> Command {
    Command::cargo_bin("emix").unwrap()
}

/// Write a config file into a fresh temp dir and return both.
fn config_file(json: &str) -> (TempDir, String) {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("mixer.json");
    fs::write(&path, json).unwrap();
    let path = path.to_str().unwrap().to_string();
    (dir, path)
}

// ---------------------------------------------------------------------------
// mix
// ---------------------------------------------------------------------------

#[test]
fn mix_curated_pair() {
    emix()
        .args(["mix", "🔥", "🌊"])
        .assert()
        .success()
        .stdout(predicate::str::contains("🔥 + 🌊 → 🌪️").and(predicate::str::contains("(recipe)")));
}

#[test]
fn mix_is_order_independent() {
    emix()
        .args(["mix", "🌊", "🔥"])
        .assert()
        .success()
        .stdout(predicate::str::contains("→ 🌪️"));
}

#[test]
fn mix_by_catalog_number() {
    // 6 = 🌙, 7 = ☀️
    emix()
        .args(["mix", "6", "7"])
        .assert()
        .success()
        .stdout(predicate::str::contains("🌙 + ☀️ → 🌈"));
}

#[test]
fn mix_uncurated_pair_is_surprise() {
    emix()
        .args(["mix", "🌊", "⚡"])
        .assert()
        .success()
        .stdout(predicate::str::contains("→ 🎇").and(predicate::str::contains("(surprise)")));
}

#[test]
fn mix_unknown_emoji_fails() {
    emix()
        .args(["mix", "🔥", "🪐"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("not in the catalog"));
}

// ---------------------------------------------------------------------------
// catalog / recipes / grid
// ---------------------------------------------------------------------------

#[test]
fn catalog_lists_numbered_emojis() {
    emix()
        .arg("catalog")
        .assert()
        .success()
        .stdout(
            predicate::str::contains(" 1  🔥")
                .and(predicate::str::contains("10  🍩")),
        );
}

#[test]
fn recipes_table() {
    emix()
        .arg("recipes")
        .assert()
        .success()
        .stdout(
            predicate::str::contains("Result")
                .and(predicate::str::contains("🌈"))
                .and(predicate::str::contains("12 recipes")),
        );
}

#[test]
fn grid_marks_curated_cells() {
    // 12 recipes, each appearing in both orders.
    emix()
        .arg("grid")
        .assert()
        .success()
        .stdout(
            predicate::str::contains("🌪️*")
                .and(predicate::str::contains("curated (24 of 100 cells)")),
        );
}

// ---------------------------------------------------------------------------
// check / config
// ---------------------------------------------------------------------------

#[test]
fn check_default_config() {
    emix()
        .arg("check")
        .assert()
        .success()
        .stdout(
            predicate::str::contains("All checks passed")
                .and(predicate::str::contains("10 emojis, 12 recipes, 6 surprises, 350 ms")),
        );
}

#[test]
fn check_custom_config() {
    let (_dir, path) = config_file(
        r#"{
            "catalog": ["🔥", "💎"],
            "recipes": [],
            "surprise_pool": ["💫", "🌀"],
            "mix_delay_ms": 10
        }"#,
    );
    emix()
        .args(["check", "--config", &path])
        .assert()
        .success()
        .stdout(predicate::str::contains("2 emojis, 0 recipes, 2 surprises, 10 ms"));
}

#[test]
fn custom_config_fallback_example() {
    let (_dir, path) = config_file(
        r#"{
            "catalog": ["🔥", "💎"],
            "recipes": [],
            "surprise_pool": ["💫", "🌀"]
        }"#,
    );
    emix()
        .args(["mix", "🔥", "💎", "--config", &path])
        .assert()
        .success()
        .stdout(predicate::str::contains("→ 🌀"));
}

#[test]
fn duplicate_recipe_prevents_startup() {
    let (_dir, path) = config_file(
        r#"{
            "recipes": [
                { "left": "🔥", "right": "🌊", "result": "🌪️" },
                { "left": "🌊", "right": "🔥", "result": "♨️" }
            ]
        }"#,
    );
    emix()
        .args(["check", "--config", &path])
        .assert()
        .failure()
        .stderr(predicate::str::contains("duplicate recipe"));
}

#[test]
fn empty_surprise_pool_prevents_startup() {
    let (_dir, path) = config_file(r#"{ "surprise_pool": [] }"#);
    emix()
        .args(["mix", "🔥", "🌊", "--config", &path])
        .assert()
        .failure()
        .stderr(predicate::str::contains("surprise pool must contain at least one token"));
}

#[test]
fn missing_config_file() {
    emix()
        .args(["check", "--config", "/no/such/mixer.json"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("failed to read config"));
}

#[test]
fn delay_override() {
    emix()
        .args(["check", "--delay-ms", "0"])
        .assert()
        .success()
        .stdout(predicate::str::contains("0 ms mix delay"));
}

// ---------------------------------------------------------------------------
// host handshake
// ---------------------------------------------------------------------------

#[test]
fn ready_signal_sent_once() {
    emix()
        .arg("catalog")
        .env("RUST_LOG", "info")
        .assert()
        .success()
        .stderr(predicate::str::contains("emix ready").count(1));
}

// ---------------------------------------------------------------------------
// play
// ---------------------------------------------------------------------------

#[test]
fn play_reveals_remix() {
    emix()
        .args(["play", "--delay-ms", "0"])
        .write_stdin("left 🔥\nright 🌊\nremix\nwait\nquit\n")
        .assert()
        .success()
        .stdout(
            predicate::str::contains("Left: 🔥")
                .and(predicate::str::contains("Right: 🌊"))
                .and(predicate::str::contains("Your remix: 🔥 + 🌊 → 🌪️"))
                .and(predicate::str::contains("Goodbye!")),
        );
}

#[test]
fn play_remix_without_picks_is_ignored() {
    emix()
        .arg("play")
        .write_stdin("remix\nwait\nstatus\nquit\n")
        .assert()
        .success()
        .stdout(
            predicate::str::contains("Nothing is mixing.")
                .and(predicate::str::contains("Choose two emojis to get started.")),
        );
}

#[test]
fn play_status_after_reveal() {
    emix()
        .args(["play", "--delay-ms", "1"])
        .write_stdin("l 8\nr 14\nr 10\nremix\nwait\nstatus\n")
        .assert()
        .success()
        .stdout(
            predicate::str::contains("not in the catalog")
                .and(predicate::str::contains("🎵 + 🍩 → 🎂"))
                .and(predicate::str::contains("(revealed)")),
        );
}

#[test]
fn play_cancel() {
    emix()
        .args(["play", "--delay-ms", "60000"])
        .write_stdin("left 1\nright 2\nremix\ncancel\nwait\nquit\n")
        .assert()
        .success()
        .stdout(
            predicate::str::contains("Remix cancelled.")
                .and(predicate::str::contains("Nothing is mixing."))
                .and(predicate::str::contains("Your remix").not()),
        );
}

#[test]
fn play_status_while_mixing() {
    emix()
        .args(["play", "--delay-ms", "60000"])
        .write_stdin("left 1\nright 2\nremix\nstatus\nquit\n")
        .assert()
        .success()
        .stdout(
            predicate::str::contains("(mixing)")
                .and(predicate::str::contains("Mixing: 🔥 + 🌊"))
                .and(predicate::str::contains("Remixing your combo..."))
                .and(predicate::str::contains("(remix cancelled)")),
        );
}

#[test]
fn play_unknown_command() {
    emix()
        .arg("play")
        .write_stdin("dance\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("unknown command: dance"));
}
