//! Tests for the `maybe-laws` binary: exit status and stream contents.

use std::process::{Command, Output};

use rstest::rstest;

const EXPECTED_OUTPUT: &str = "\
Functor Law #1 (Identity): fmap id = id
Functor Law #2 (Composition): fmap (f . g) = fmap f . fmap g
Applicative Functor Law #1 (Identity): pure id <*> x = x
Applicative Functor Law #2 (Homomorphism): pure f <*> pure x = pure (f x)
Applicative Functor Law #3 (Interchange): u <*> pure y = pure ($ y) <*> u
Applicative Functor Law #4 (Composition): f <*> (g <*> x) = pure (.) <*> f <*> g <*> x
Applicative Functor Law #5: pure f <*> x = fmap f x
Monad law #1 (Left Identity): return x >>= f = f x
Monad law #2 (Right Identity): m >>= return = m
Monad law #3 (Associativity): (m >>= f) >>= g = m >>= (\\x -> f x >>= g)

26 assertions succeeded
";

fn run_with(variables: &[(&str, &str)]) -> Output {
    let mut command = Command::new(env!("CARGO_BIN_EXE_maybe-laws"));
    command
        .env_remove("RUST_LOG")
        .env_remove("MAYBE_LAWS_LOG")
        .env_remove("MAYBE_LAWS_SCENARIO_TRACE");
    for (key, value) in variables {
        command.env(key, value);
    }
    command.output().expect("failed to run the maybe-laws binary")
}

#[rstest]
#[case::default_configuration(&[])]
#[case::scenario_trace(&[("MAYBE_LAWS_SCENARIO_TRACE", "1"), ("MAYBE_LAWS_LOG", "info")])]
#[case::verbose_rust_log(&[("RUST_LOG", "trace")])]
fn successful_run_prints_only_the_report(#[case] variables: &[(&str, &str)]) {
    let output = run_with(variables);

    assert!(output.status.success(), "exit status: {}", output.status);
    assert_eq!(String::from_utf8(output.stdout).unwrap(), EXPECTED_OUTPUT);
}

#[rstest]
#[case::bad_trace_flag("MAYBE_LAWS_SCENARIO_TRACE", "yes")]
#[case::bad_fallback_filter("MAYBE_LAWS_LOG", "maybe_laws=loud")]
#[case::bad_rust_log("RUST_LOG", "maybe_laws=loud")]
fn invalid_configuration_fails_before_any_law(#[case] key: &str, #[case] value: &str) {
    let output = run_with(&[(key, value)]);

    assert!(!output.status.success());
    assert!(output.stdout.is_empty());
    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(stderr.contains(key), "stderr: {stderr}");
}

#[rstest]
fn invalid_configuration_is_reported_with_tracing_off() {
    let output = run_with(&[("RUST_LOG", "off"), ("MAYBE_LAWS_SCENARIO_TRACE", "maybe")]);

    assert!(!output.status.success());
    assert!(!output.stderr.is_empty());
}
