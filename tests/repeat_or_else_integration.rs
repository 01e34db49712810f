//! Integration tests for repeat_or_else and repeat

use eddy::assert_trace;
use eddy::prelude::*;
use eddy::testing::TraceLog;
use std::sync::atomic::{AtomicU32, Ordering};
use std::sync::Arc;
use std::time::Duration;
use tokio::time::Instant;

#[derive(Debug, Clone, PartialEq)]
enum JobError {
    Failure,
    Offline(String),
}

/// Succeeds while `count <= 1`, fails afterwards.
fn flaky_job(trace: TraceLog) -> impl FnMut() -> BoxedEffect<&'static str, JobError, ()> + Send {
    let count = Arc::new(AtomicU32::new(0));
    move || {
        let count = count.clone();
        let trace = trace.clone();
        from_fn(move |_: &()| {
            if count.load(Ordering::SeqCst) > 1 {
                trace.record("failure");
                Err(JobError::Failure)
            } else {
                count.fetch_add(1, Ordering::SeqCst);
                trace.record("success");
                Ok("yay!")
            }
        })
        .boxed()
    }
}

#[tokio::test(start_paused = true)]
async fn test_documented_scenario() {
    let trace = TraceLog::new();
    let fallback_trace = trace.clone();

    let program = repeat_or_else(
        flaky_job(trace.clone()),
        Schedule::recurs(2).add_delay(Duration::from_millis(100)),
        move |outcome| {
            sync::<_, JobError, ()>(move || {
                fallback_trace.record("orElse");
                i64::from(outcome.successes()) - 1
            })
        },
    );

    let start = Instant::now();
    let repetitions = program.run_standalone().await;

    assert_eq!(repetitions, Ok(1));
    assert_trace!(trace, ["success", "success", "failure", "orElse"]);
    // Two sleeps: after the first and the second success.
    assert_eq!(start.elapsed(), Duration::from_millis(200));
}

#[tokio::test(start_paused = true)]
async fn test_fallback_receives_the_failure() {
    let program = repeat_or_else(
        flaky_job(TraceLog::new()),
        Schedule::recurs(5),
        |outcome: RepeatOutcome<&str, JobError>| {
            pure::<_, JobError, ()>((outcome.is_failure(), outcome.into_error()))
        },
    );

    assert_eq!(
        program.run_standalone().await,
        Ok((true, Some(JobError::Failure)))
    );
}

#[tokio::test(start_paused = true)]
async fn test_larger_budget_does_not_change_outcome() {
    for budget in [2, 3, 10] {
        let trace = TraceLog::new();
        let program = repeat_or_else(
            flaky_job(trace.clone()),
            Schedule::recurs(budget),
            |outcome| pure::<_, JobError, ()>(outcome.successes()),
        );

        assert_eq!(program.run_standalone().await, Ok(2));
        assert_trace!(trace, ["success", "success", "failure"]);
    }
}

#[tokio::test(start_paused = true)]
async fn test_smaller_budget_exhausts() {
    let trace = TraceLog::new();
    let program = repeat_or_else(
        flaky_job(trace.clone()),
        Schedule::recurs(1),
        |outcome| pure::<_, JobError, ()>(outcome),
    );

    let outcome = program.run_standalone().await.unwrap();
    assert_eq!(
        outcome,
        RepeatOutcome::Exhausted {
            last: "yay!",
            successes: 2
        }
    );
    assert_trace!(trace, ["success", "success"]);
}

#[tokio::test(start_paused = true)]
async fn test_zero_recurrences_runs_once() {
    let runs = Arc::new(AtomicU32::new(0));
    let counter = runs.clone();

    let program = repeat_or_else(
        move || {
            counter.fetch_add(1, Ordering::SeqCst);
            pure::<_, JobError, ()>(())
        },
        Schedule::recurs(0),
        |outcome| pure::<_, JobError, ()>(outcome.is_exhausted()),
    );

    assert_eq!(program.run_standalone().await, Ok(true));
    assert_eq!(runs.load(Ordering::SeqCst), 1);
}

#[tokio::test(start_paused = true)]
async fn test_environment_reaches_action_and_fallback() {
    #[derive(Clone)]
    struct Env {
        host: String,
    }

    let program = repeat_or_else(
        || from_fn(|env: &Env| Err::<(), _>(JobError::Offline(env.host.clone()))),
        Schedule::recurs(3),
        |outcome| {
            from_fn(move |env: &Env| {
                Ok::<_, JobError>(format!("{} after {:?}", env.host, outcome.into_error()))
            })
        },
    );

    let env = Env {
        host: "db-1".to_string(),
    };
    assert_eq!(
        program.execute(&env).await,
        Ok("db-1 after Some(Offline(\"db-1\"))".to_string())
    );
}

#[tokio::test(start_paused = true)]
async fn test_exponential_schedule_delays() {
    let program = repeat_or_else(
        || pure::<_, JobError, ()>(()),
        Schedule::exponential(Duration::from_millis(10)).with_max_recurrences(3),
        |outcome| pure::<_, JobError, ()>(outcome.successes()),
    );

    let start = Instant::now();
    assert_eq!(program.run_standalone().await, Ok(4));
    // 10 + 20 + 40
    assert_eq!(start.elapsed(), Duration::from_millis(70));
}

#[tokio::test(start_paused = true)]
async fn test_repeat_without_fallback() {
    let ok = repeat(|| pure::<_, JobError, ()>(1), Schedule::recurs(2))
        .run_standalone()
        .await
        .unwrap();
    assert_eq!(ok.successes, 3);
    assert_eq!(ok.into_value(), 1);

    let failure = repeat(flaky_job(TraceLog::new()), Schedule::recurs(4))
        .run_standalone()
        .await
        .unwrap_err();
    assert_eq!(failure.successes, 2);
    assert_eq!(failure.into_error(), JobError::Failure);
}

#[tokio::test(start_paused = true)]
async fn test_programs_can_run_concurrently() {
    let first = repeat_or_else(
        flaky_job(TraceLog::new()),
        Schedule::recurs(2).add_delay(Duration::from_millis(100)),
        |outcome| pure::<_, JobError, ()>(outcome.successes()),
    );
    let second = repeat_or_else(
        flaky_job(TraceLog::new()),
        Schedule::recurs(2).add_delay(Duration::from_millis(100)),
        |outcome| pure::<_, JobError, ()>(outcome.successes()),
    );

    let start = Instant::now();
    let (a, b) = tokio::join!(first.run_standalone(), second.run_standalone());

    assert_eq!(a, Ok(2));
    assert_eq!(b, Ok(2));
    assert_eq!(start.elapsed(), Duration::from_millis(200));
}

#[tokio::test(start_paused = true)]
async fn test_program_can_be_spawned() {
    let program = repeat_or_else(
        flaky_job(TraceLog::new()),
        Schedule::recurs(2),
        |outcome| pure::<_, JobError, ()>(outcome.successes()),
    );

    let handle = tokio::spawn(async move { program.run(&()).await });
    assert_eq!(handle.await.unwrap(), Ok(2));
}
