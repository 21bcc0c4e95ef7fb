use assert_cmd::Command;
use predicates::prelude::*;

fn arith() -> Command {
    Command::cargo_bin("arith").unwrap()
}

#[test]
fn demo_expressions_by_default() {
    arith()
        .assert()
        .success()
        .stdout("((123)+(45*6)+(78)) = 471\n((((123)+(45))*6)+(78)) = 1086\n");
}

#[test]
fn show_value() {
    arith()
        .args(&["--show", "value", "1+2", "2*(3+4)"])
        .assert()
        .success()
        .stdout("3\n14\n");
}

#[test]
fn show_tree() {
    arith()
        .args(&["--show", "tree", "2*3+4"])
        .assert()
        .success()
        .stdout("((2*3)+(4))\n");
}

#[test]
fn bare_zero_is_rejected() {
    arith()
        .arg("0")
        .assert()
        .failure()
        .stderr(predicate::str::contains("failed to parse expression 1 '0'"));
}

#[test]
fn trailing_input_is_rejected() {
    arith()
        .args(&["1+2", "12ab"])
        .assert()
        .failure()
        .stdout("((1)+(2)) = 3\n")
        .stderr(predicate::str::contains("unconsumed input: 'ab'"));
}

#[test]
fn trailing_input_allowed() {
    arith()
        .args(&["--allow-trailing", "12ab"])
        .assert()
        .success()
        .stdout("((12)) = 12\n  unconsumed: 'ab'\n");
}

#[test]
fn overflow_is_reported() {
    arith()
        .arg("9223372036854775807*2")
        .assert()
        .failure()
        .stderr(predicate::str::contains("overflows i64"));
}
