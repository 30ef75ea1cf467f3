use crate::harness::TestContext;
use predicates::prelude::*;

#[test]
fn save_writes_to_configured_directory() {
    let ctx = TestContext::new();
    ctx.write_config("[output]\ndirectory = \"intros\"\n");

    ctx.cli_with_profile("generate")
        .args(["--offline", "--save"])
        .assert()
        .success()
        .stdout(predicate::str::contains("✅ Saved introduction to"))
        .stdout(predicate::str::contains("introduction-maverick.txt"));

    let saved = ctx.read_file("intros/introduction-maverick.txt");
    assert!(saved.starts_with("Hi there, I'm Maverick!"));
    assert!(saved.ends_with("genuine.\n"));
}

#[test]
fn output_refuses_to_overwrite_without_force() {
    let ctx = TestContext::new();
    ctx.write_file("me.txt", "keep me");

    ctx.cli_with_profile("generate")
        .args(["--offline", "--output", "me.txt"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("already exists"));

    assert_eq!(ctx.read_file("me.txt"), "keep me");

    ctx.cli_with_profile("generate")
        .args(["--offline", "--output", "me.txt", "--force"])
        .assert()
        .success();

    assert!(ctx.read_file("me.txt").starts_with("Hi there, I'm Maverick!"));
}

#[test]
fn output_conflicts_with_save() {
    let ctx = TestContext::new();

    ctx.cli_with_profile("generate")
        .args(["--offline", "--output", "me.txt", "--save"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("cannot be used with"));
}
