//! Repeat With Fallback Example
//!
//! Repeats an action on a schedule and hands the outcome to a fallback:
//! - The action succeeds twice, then fails
//! - The schedule allows two repetitions, 100ms apart
//! - The fallback turns the success count into a repetition count

use std::sync::atomic::{AtomicU32, Ordering};
use std::sync::Arc;
use std::time::Duration;

use eddy::prelude::*;

#[tokio::main]
async fn main() {
    let count = Arc::new(AtomicU32::new(0));

    let action = move || {
        let count = count.clone();
        from_fn(move |_: &()| {
            if count.load(Ordering::SeqCst) > 1 {
                println!("failure");
                Err("Failure")
            } else {
                count.fetch_add(1, Ordering::SeqCst);
                println!("success");
                Ok("yay!")
            }
        })
    };

    let policy = Schedule::recurs(2).add_delay(Duration::from_millis(100));

    let program = repeat_or_else(action, policy, |outcome| {
        sync::<_, &str, ()>(move || {
            println!("orElse");
            i64::from(outcome.successes()) - 1
        })
    });

    match program.run_standalone().await {
        Ok(repetitions) => println!("repetitions: {}", repetitions),
        Err(error) => println!("error: {}", error),
    }
}
