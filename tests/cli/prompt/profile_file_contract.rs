use crate::harness::TestContext;
use predicates::prelude::*;

const PROFILE: &str = r#"nickname: Captain Code
country: Japan
job_role: Data Scientist
hobbies: Bouldering
fun_fact: I have visited every prefecture
catchphrase: "Onward!"
tone: laid-back
"#;

#[test]
fn prompt_reads_profile_file() {
    let ctx = TestContext::new();
    ctx.write_file("me.yml", PROFILE);

    ctx.cli()
        .args(["prompt", "--no-input", "--profile", "me.yml"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Name (Fun Alias): Captain Code"))
        .stdout(predicate::str::contains("Tone: Laid-back"));
}

#[test]
fn flags_override_profile_file() {
    let ctx = TestContext::new();
    ctx.write_file("me.yml", PROFILE);

    ctx.cli()
        .args(["prompt", "--no-input", "--profile", "me.yml", "--country", "Canada", "-t", "charming"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Country of Origin: Canada"))
        .stdout(predicate::str::contains("Tone: Charming"));
}

#[test]
fn malformed_profile_file_is_reported() {
    let ctx = TestContext::new();
    ctx.write_file("me.yml", "nickname: [unterminated\n");

    ctx.cli()
        .args(["prompt", "--no-input", "--profile", "me.yml"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to parse profile file"));
}
