//! Either Example
//!
//! Moves an effect's error into its success channel and folds both sides
//! into one value.

use eddy::prelude::*;

#[derive(Debug)]
enum ProgramError {
    Foo,
    Bar,
}

impl Tagged for ProgramError {
    fn tag(&self) -> &'static str {
        match self {
            ProgramError::Foo => "FooError",
            ProgramError::Bar => "BarError",
        }
    }
}

#[tokio::main]
async fn main() {
    for error in [ProgramError::Foo, ProgramError::Bar] {
        let recovered = fail::<String, _, ()>(error).either().map(|outcome| {
            outcome.fold(
                |error| format!("Recovering from {}", error.tag()),
                |value| value,
            )
        });

        // Either's error type is Infallible
        if let Ok(message) = recovered.run_standalone().await {
            println!("{}", message);
        }
    }
}
