//! Integration tests for Chunk and NonEmptyChunk

use eddy::{Chunk, Either, NonEmptyChunk};

#[test]
fn test_append_all_mixed_element_types() {
    let numbers = NonEmptyChunk::make(Either::<i32, &str>::Left(1), vec![Either::Left(2)]);
    let letters = NonEmptyChunk::make(Either::Right("a"), vec![Either::Right("b")]);

    let all = numbers.clone().append_all(letters.clone());

    assert_eq!(all.len(), numbers.len() + letters.len());
    assert_eq!(
        format!("{:?}", all.into_chunk()),
        r#"Chunk { values: [Left(1), Left(2), Right("a"), Right("b")] }"#
    );
}

#[test]
fn test_chunk_append_is_associative() {
    let a = Chunk::from_vec(vec![1]);
    let b = Chunk::from_vec(vec![2, 3]);
    let c = Chunk::from_vec(vec![4]);

    assert_eq!(a.append_all(&b).append_all(&c), a.append_all(&b.append_all(&c)));
}

#[test]
fn test_collect_results_into_chunk() {
    let results: Chunk<Either<String, i32>> = vec![Ok(1), Err("bad".to_string()), Ok(3)]
        .into_iter()
        .map(Either::from)
        .collect();

    let rights: Vec<i32> = results
        .iter()
        .filter_map(|e| e.as_ref().into_right().copied())
        .collect();
    assert_eq!(rights, vec![1, 3]);
    assert_eq!(results.get(1), Some(&Either::Left("bad".to_string())));
}

#[cfg(feature = "serde")]
#[test]
fn test_chunk_of_either_round_trips_through_json() {
    let chunk = NonEmptyChunk::make(Either::<i32, String>::Left(1), vec![Either::Right("a".into())])
        .into_chunk();

    let json = serde_json::to_string(&chunk).unwrap();
    assert_eq!(json, r#"[{"Left":1},{"Right":"a"}]"#);

    let back: Chunk<Either<i32, String>> = serde_json::from_str(&json).unwrap();
    assert_eq!(back, chunk);
}
