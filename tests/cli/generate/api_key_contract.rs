use crate::harness::TestContext;
use predicates::prelude::*;

#[test]
fn generate_requires_api_key() {
    let ctx = TestContext::new();

    ctx.cli_with_profile("generate")
        .assert()
        .failure()
        .stderr(predicate::str::contains(
            "Google API Key not found in environment variables. Please set GOOGLE_API_KEY.",
        ));
}

#[test]
fn show_prompt_prints_prompt_even_without_api_key() {
    let ctx = TestContext::new();

    ctx.cli_with_profile("generate")
        .arg("--show-prompt")
        .assert()
        .failure()
        .stdout(predicate::str::contains("## Detailed Prompt"))
        .stdout(predicate::str::contains("Name (Fun Alias): Maverick"))
        .stdout(predicate::str::contains("## Generated Introduction").not())
        .stderr(predicate::str::contains("Please set GOOGLE_API_KEY."));
}

#[test]
fn api_key_variable_is_configurable() {
    let ctx = TestContext::new();
    ctx.write_config("[model]\napi_key_env = \"TMAY_TEST_KEY\"\n");

    ctx.cli_with_profile("generate")
        .env_remove("TMAY_TEST_KEY")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Please set TMAY_TEST_KEY."));
}

#[test]
fn validation_fails_before_api_key_check() {
    let ctx = TestContext::new();

    ctx.cli()
        .args(["generate", "--no-input", "--nickname", "Maverick"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("'Country of Origin' is required"))
        .stderr(predicate::str::contains("GOOGLE_API_KEY").not());
}

#[test]
fn invalid_config_is_reported() {
    let ctx = TestContext::new();
    ctx.write_config("[model]\ntemperature = 9.0\n");

    ctx.cli_with_profile("generate")
        .env("GOOGLE_API_KEY", "test-key")
        .assert()
        .failure()
        .stderr(predicate::str::contains("temperature must be between 0.0 and 2.0"));
}

#[test]
fn explicit_config_must_exist() {
    let ctx = TestContext::new();

    ctx.cli_with_profile("generate")
        .args(["--offline", "--config", "nope.toml"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Config file not found"));
}
