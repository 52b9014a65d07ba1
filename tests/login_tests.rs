use predicates::prelude::PredicateBooleanExt;
use predicates::str::contains;

mod common;
use common::pin;

#[test]
fn test_login_echoes_values_with_masked_password() {
    pin()
        .args(["login", "--username", "maria", "--password", "correct-horse"])
        .assert()
        .success()
        .stdout(contains("You submitted the following values:"))
        .stdout(contains("\"username\": \"maria\""))
        .stdout(contains("correct-horse").not());
}

#[test]
fn test_login_reports_both_fields() {
    pin()
        .args(["login", "--username", "m", "--password", "short"])
        .assert()
        .failure()
        .stderr(contains("Username must be at least 2 characters."))
        .stderr(contains("Password must be at least 8 characters."));
}
