//! Chunk Example
//!
//! Concatenates two non-empty chunks of different element types.

use eddy::{Either, NonEmptyChunk};

fn main() {
    let numbers = NonEmptyChunk::make(Either::<i32, &str>::Left(1), vec![Either::Left(2)]);
    let letters = NonEmptyChunk::make(Either::Right("a"), vec![Either::Right("b")]);

    let all = numbers.append_all(letters);
    println!("{:?}", all.into_chunk());
}
