//! Tagged Recovery Example
//!
//! Recovers from specific errors by tag, leaving the rest to propagate.

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

fn program(fail_with: ProgramError) -> BoxedEffect<String, ProgramError, ()> {
    fail(fail_with).boxed()
}

#[tokio::main]
async fn main() {
    for error in [ProgramError::Foo, ProgramError::Bar] {
        let recovered = program(error)
            .catch_tag("FooError", |_| pure("Recovering from FooError".to_string()))
            .catch_tag("BarError", |_| pure("Recovering from BarError".to_string()));

        match recovered.run_standalone().await {
            Ok(message) => println!("{}", message),
            Err(error) => println!("unhandled: {:?}", error),
        }
    }
}
