use crate::harness::TestContext;
use predicates::prelude::*;

#[test]
fn prompt_reports_first_missing_field() {
    let ctx = TestContext::new();

    ctx.cli()
        .args(["prompt", "--no-input", "--nickname", "Maverick", "--hobbies", "Chess"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Error: 'Country of Origin' is required"));
}

#[test]
fn whitespace_only_field_counts_as_missing() {
    let ctx = TestContext::new();

    ctx.cli_with_profile_except("prompt", "--fun-fact")
        .args(["--fun-fact", "   ", "--no-input"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("'Fun Fact or Unique Detail' is required"));
}

#[test]
fn missing_fields_fail_without_terminal() {
    let ctx = TestContext::new();

    // No --no-input: stdin is not a terminal, so nothing is prompted.
    ctx.cli()
        .arg("prompt")
        .assert()
        .failure()
        .stderr(predicate::str::contains("'Name (Fun Alias or Nickname)' is required"));
}
