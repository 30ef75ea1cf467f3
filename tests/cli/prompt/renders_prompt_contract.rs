use crate::harness::TestContext;
use predicates::prelude::*;

#[test]
fn prompt_prints_filled_template() {
    let ctx = TestContext::new();

    ctx.cli_with_profile("prompt")
        .assert()
        .success()
        .stdout(predicate::str::starts_with(
            "Using the following details, draft a 'Tell Me About Yourself' introduction:",
        ))
        .stdout(predicate::str::contains("Name (Fun Alias): Maverick"))
        .stdout(predicate::str::contains("Job Role (What's your hustle?): Software Engineer"))
        .stdout(predicate::str::contains("Tone: Friendly"))
        .stdout(predicate::str::contains("reflects a friendly tone."));
}

#[test]
fn prompt_short_alias_works_without_api_key() {
    let ctx = TestContext::new();

    ctx.cli_with_profile("p").assert().success().stdout(predicate::str::contains("Tone: Friendly"));
}

#[test]
fn prompt_rejects_unknown_tone() {
    let ctx = TestContext::new();

    ctx.cli()
        .args(["prompt", "--no-input", "--tone", "grumpy"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid tone 'grumpy'"));
}
