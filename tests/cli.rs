//! End-to-end tests for the offline CLI commands

use assert_cmd::Command;
use predicates::prelude::*;
use std::io::Write;

fn eventide() -> Command {
    Command::cargo_bin("eventide").unwrap()
}

#[test]
fn segment_renders_cards_from_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(
        file,
        "## Theme\nRustic outdoor wedding with string lights\n## Decor\n- Mason jar centerpieces\n- Wildflower arrangements"
    )
    .unwrap();

    eventide()
        .arg("segment")
        .arg(file.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("┌─ Theme"))
        .stdout(predicate::str::contains("Mason jar centerpieces"))
        .stdout(predicate::str::contains("Wildflower arrangements"));
}

#[test]
fn segment_reads_stdin_and_emits_json() {
    eventide()
        .args(["segment", "--json"])
        .write_stdin("Venue: a restored barn\n\nCatering: barbecue")
        .assert()
        .success()
        .stdout(predicate::str::contains("\"category\": \"Venue\""))
        .stdout(predicate::str::contains("\"text\": \"barbecue\""));
}

#[test]
fn segment_empty_input_reports_no_suggestions() {
    eventide()
        .arg("segment")
        .write_stdin("")
        .assert()
        .success()
        .stdout(predicate::str::contains("No suggestions found"));
}

#[test]
fn vendors_lists_matches_within_budget() {
    eventide()
        .args(["vendors", "--kind", "wedding", "--budget", "2000"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Wild Thyme Catering"));
}

#[test]
fn invite_prints_message_for_guest() {
    eventide()
        .args([
            "invite", "--name", "Dana turns 40", "--kind", "birthday", "--date", "2027-03-14",
            "--venue", "The Garden Room", "--guest", "Riley", "--email", "riley@example.com",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("To: Riley <riley@example.com>"))
        .stdout(predicate::str::contains("Dana turns 40"))
        .stdout(predicate::str::contains("March 14, 2027"));
}

#[test]
fn invite_rejects_bad_date() {
    eventide()
        .args([
            "invite", "--name", "X", "--kind", "other", "--date", "tomorrow", "--guest", "A",
            "--email", "a@example.com",
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid date"));
}

#[test]
fn pay_accepts_valid_card() {
    eventide()
        .args(["pay", "--amount", "150.50", "--last4", "4242"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Payment accepted"))
        .stdout(predicate::str::contains("$150.50"));
}

#[test]
fn pay_declines_test_card() {
    eventide()
        .args(["pay", "--amount", "150.50", "--last4", "0002"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("declined"));
}

#[test]
fn pay_rejects_malformed_last4() {
    eventide()
        .args(["pay", "--amount", "10", "--last4", "12ab"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid last4"));
}
