//! Integration tests for tag-based recovery and Either folding

use eddy::prelude::*;

#[derive(Debug, Clone, PartialEq)]
enum ProgramError {
    Foo,
    Bar,
    Baz,
}

impl Tagged for ProgramError {
    fn tag(&self) -> &'static str {
        match self {
            ProgramError::Foo => "FooError",
            ProgramError::Bar => "BarError",
            ProgramError::Baz => "BazError",
        }
    }
}

/// Fails with the given error, or succeeds with "some result" for `None`.
fn program(outcome: Option<ProgramError>) -> BoxedEffect<String, ProgramError, ()> {
    match outcome {
        Some(error) => fail(error).boxed(),
        None => pure("some result".to_string()).boxed(),
    }
}

#[tokio::test]
async fn test_catch_tag_chain_recovers_known_tags() {
    for (error, expected) in [
        (ProgramError::Foo, "Recovering from FooError"),
        (ProgramError::Bar, "Recovering from BarError"),
    ] {
        let recovered = program(Some(error))
            .catch_tag("FooError", |_| pure("Recovering from FooError".to_string()))
            .catch_tag("BarError", |_| pure("Recovering from BarError".to_string()));

        assert_eq!(recovered.run_standalone().await, Ok(expected.to_string()));
    }
}

#[tokio::test]
async fn test_catch_tag_chain_keeps_unknown_tags() {
    let recovered = program(Some(ProgramError::Baz))
        .catch_tag("FooError", |_| pure("foo".to_string()))
        .catch_tag("BarError", |_| pure("bar".to_string()));

    let error = recovered.run_standalone().await.unwrap_err();
    assert_eq!(error.tag(), "BazError");
}

#[tokio::test]
async fn test_catch_tag_handler_can_fail_again() {
    let recovered = program(Some(ProgramError::Foo))
        .catch_tag("FooError", |_| fail(ProgramError::Bar))
        .catch_tag("BarError", |_| pure("second handler".to_string()));

    assert_eq!(
        recovered.run_standalone().await,
        Ok("second handler".to_string())
    );
}

#[tokio::test]
async fn test_either_fold_matches_catch_tag() {
    for error in [ProgramError::Foo, ProgramError::Bar] {
        let via_either = program(Some(error.clone()))
            .either()
            .map(|outcome| {
                outcome.fold(
                    |error| format!("Recovering from {}", error.tag()),
                    |value| value,
                )
            })
            .run_standalone()
            .await
            .unwrap();

        let via_catch = program(Some(error))
            .catch_tag("FooError", |_| pure("Recovering from FooError".to_string()))
            .catch_tag("BarError", |_| pure("Recovering from BarError".to_string()))
            .run_standalone()
            .await
            .unwrap();

        assert_eq!(via_either, via_catch);
    }
}

#[tokio::test]
async fn test_either_on_success_is_right() {
    let outcome = program(None).either().run_standalone().await.unwrap();

    assert!(outcome.is_right());
    assert_eq!(outcome.into_right(), Some("some result".to_string()));
}
