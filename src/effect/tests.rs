//! Tests for effect constructors and combinators.

use std::convert::Infallible;
use std::sync::atomic::{AtomicU32, Ordering};
use std::sync::Arc;
use std::time::Duration;

use crate::effect::prelude::*;
use crate::either::Either;
use crate::tagged::Tagged;

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

// Constructors
#[tokio::test]
async fn test_pure_returns_value() {
    let effect = pure::<_, String, ()>(42);
    assert_eq!(effect.run_standalone().await, Ok(42));
}

#[tokio::test]
async fn test_fail_returns_error() {
    let effect = fail::<i32, _, ()>("error".to_string());
    assert_eq!(effect.run_standalone().await, Err("error".to_string()));
}

#[tokio::test]
async fn test_from_result_passes_through() {
    assert_eq!(
        from_result::<_, String, ()>(Ok(1)).run_standalone().await,
        Ok(1)
    );
    assert_eq!(
        from_result::<i32, _, ()>(Err("no".to_string()))
            .run_standalone()
            .await,
        Err("no".to_string())
    );
}

#[tokio::test]
async fn test_from_fn_reads_environment() {
    #[derive(Clone)]
    struct Env {
        value: i32,
    }

    let effect = from_fn(|env: &Env| Ok::<_, String>(env.value * 2));
    assert_eq!(effect.execute(&Env { value: 21 }).await, Ok(42));
}

#[tokio::test]
async fn test_sync_is_deferred_until_run() {
    let calls = Arc::new(AtomicU32::new(0));
    let counter = calls.clone();

    let effect = sync::<_, String, ()>(move || counter.fetch_add(1, Ordering::SeqCst));
    assert_eq!(calls.load(Ordering::SeqCst), 0);

    assert_eq!(effect.run_standalone().await, Ok(0));
    assert_eq!(calls.load(Ordering::SeqCst), 1);
}

#[tokio::test(start_paused = true)]
async fn test_sleep_suspends_for_duration() {
    let start = tokio::time::Instant::now();
    sleep::<String, ()>(Duration::from_secs(2))
        .run_standalone()
        .await
        .unwrap();
    assert_eq!(start.elapsed(), Duration::from_secs(2));
}

// Map / MapErr
#[tokio::test]
async fn test_map_transforms_value() {
    let effect = pure::<_, String, ()>(21).map(|x| x * 2);
    assert_eq!(effect.run_standalone().await, Ok(42));
}

#[tokio::test]
async fn test_map_on_failure_doesnt_execute() {
    let effect = fail::<i32, _, ()>("error".to_string()).map(|x| x * 2);
    assert_eq!(effect.run_standalone().await, Err("error".to_string()));
}

#[tokio::test]
async fn test_map_err_transforms_error() {
    let effect = fail::<i32, _, ()>("error").map_err(|e: &str| format!("wrapped: {}", e));
    assert_eq!(
        effect.run_standalone().await,
        Err("wrapped: error".to_string())
    );
}

// AndThen / OrElse
#[tokio::test]
async fn test_and_then_chains_effects() {
    let effect = pure::<_, String, ()>(21).and_then(|x| pure(x * 2));
    assert_eq!(effect.run_standalone().await, Ok(42));
}

#[tokio::test]
async fn test_and_then_short_circuits() {
    let calls = Arc::new(AtomicU32::new(0));
    let counter = calls.clone();

    let effect = fail::<i32, _, ()>("error".to_string()).and_then(move |x| {
        counter.fetch_add(1, Ordering::SeqCst);
        pure(x * 2)
    });

    assert_eq!(effect.run_standalone().await, Err("error".to_string()));
    assert_eq!(calls.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn test_or_else_recovers() {
    let effect = fail::<i32, _, ()>("error").or_else(|_| pure::<_, String, ()>(42));
    assert_eq!(effect.run_standalone().await, Ok(42));
}

#[tokio::test]
async fn test_or_else_preserves_success() {
    let effect = pure::<_, &str, ()>(1).or_else(|_| pure::<_, String, ()>(42));
    assert_eq!(effect.run_standalone().await, Ok(1));
}

// Tap
#[tokio::test]
async fn test_tap_keeps_value() {
    let seen = Arc::new(AtomicU32::new(0));
    let sink = seen.clone();

    let effect = pure::<_, String, ()>(7u32).tap(move |v| {
        sink.store(*v, Ordering::SeqCst);
        pure(())
    });

    assert_eq!(effect.run_standalone().await, Ok(7));
    assert_eq!(seen.load(Ordering::SeqCst), 7);
}

#[tokio::test]
async fn test_tap_failure_fails_effect() {
    let effect = pure::<_, String, ()>(7).tap(|_| fail::<(), _, ()>("tap".to_string()));
    assert_eq!(effect.run_standalone().await, Err("tap".to_string()));
}

// CatchTag
#[tokio::test]
async fn test_catch_tag_recovers_matching_tag() {
    let effect = fail::<String, _, ()>(ProgramError::Foo)
        .catch_tag("FooError", |_| pure("Recovering from FooError".to_string()));

    assert_eq!(
        effect.run_standalone().await,
        Ok("Recovering from FooError".to_string())
    );
}

#[tokio::test]
async fn test_catch_tag_propagates_other_tags() {
    let effect = fail::<String, _, ()>(ProgramError::Baz)
        .catch_tag("FooError", |_| pure("foo".to_string()))
        .catch_tag("BarError", |_| pure("bar".to_string()));

    assert_eq!(effect.run_standalone().await, Err(ProgramError::Baz));
}

#[tokio::test]
async fn test_chained_catch_tags_handle_each_tag() {
    for (error, expected) in [
        (ProgramError::Foo, "Recovering from FooError"),
        (ProgramError::Bar, "Recovering from BarError"),
    ] {
        let effect = fail::<String, _, ()>(error)
            .catch_tag("FooError", |_| pure("Recovering from FooError".to_string()))
            .catch_tag("BarError", |_| pure("Recovering from BarError".to_string()));

        assert_eq!(effect.run_standalone().await, Ok(expected.to_string()));
    }
}

#[tokio::test]
async fn test_catch_tag_ignores_success() {
    let effect = pure::<_, ProgramError, ()>("fine".to_string())
        .catch_tag("FooError", |_| pure("foo".to_string()));

    assert_eq!(effect.run_standalone().await, Ok("fine".to_string()));
}

// Either
#[tokio::test]
async fn test_either_moves_failure_to_left() {
    let outcome = fail::<String, _, ()>(ProgramError::Bar)
        .either()
        .run_standalone()
        .await;

    assert_eq!(outcome, Ok::<_, Infallible>(Either::Left(ProgramError::Bar)));
}

#[tokio::test]
async fn test_either_fold_recovers_with_tag() {
    let recovered = fail::<String, _, ()>(ProgramError::Foo)
        .either()
        .map(|outcome| {
            outcome.fold(
                |error| format!("Recovering from {}", error.tag()),
                |value| value,
            )
        });

    assert_eq!(
        recovered.run_standalone().await,
        Ok("Recovering from FooError".to_string())
    );
}

// Boxing
#[tokio::test]
async fn test_boxed_effects_in_collection() {
    let effects: Vec<BoxedEffect<i32, String, ()>> = vec![
        pure(1).boxed(),
        pure(2).map(|x| x * 2).boxed(),
        fail::<i32, _, ()>("skip".to_string())
            .or_else(|_| pure(3))
            .boxed(),
    ];

    let mut total = 0;
    for effect in effects {
        total += effect.run_standalone().await.unwrap();
    }
    assert_eq!(total, 8);
}

fn countdown(n: i32) -> BoxedEffect<i32, String, ()> {
    if n <= 0 {
        pure(0).boxed()
    } else {
        pure(n)
            .and_then(move |x| countdown(x - 1).map(move |sum| x + sum))
            .boxed()
    }
}

#[tokio::test]
async fn test_recursive_boxed_effect() {
    assert_eq!(countdown(4).run_standalone().await, Ok(10));
}
