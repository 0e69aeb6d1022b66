use codelet_embeddings::{Embeddings, FakeEmbeddings};

fn dot(a: &[f32], b: &[f32]) -> f32 {
    a.iter().zip(b).map(|(x, y)| x * y).sum()
}

#[tokio::test]
async fn vectors_have_the_requested_size() {
    let embeddings = FakeEmbeddings::new(8);
    assert_eq!(embeddings.dimensions(), 8);
    assert_eq!(embeddings.embed_query("print('hi')").await.unwrap().len(), 8);
    assert_eq!(
        FakeEmbeddings::default().dimensions(),
        FakeEmbeddings::DEFAULT_DIMENSIONS
    );
}

#[tokio::test]
async fn same_text_same_vector() {
    let embeddings = FakeEmbeddings::default();
    let v1 = embeddings.embed_query("for i in range(10):").await.unwrap();
    let v2 = embeddings.embed_query("for i in range(10):").await.unwrap();
    assert_eq!(v1, v2);
}

#[tokio::test]
async fn documents_match_queries() {
    let embeddings = FakeEmbeddings::default();
    let batch = embeddings
        .embed_documents(&["hello", "world"])
        .await
        .unwrap();
    assert_eq!(batch.len(), 2);
    assert_eq!(batch[1], embeddings.embed_query("world").await.unwrap());
}

#[tokio::test]
async fn vectors_are_unit_length() {
    let vector = FakeEmbeddings::default()
        .embed_query("hello world")
        .await
        .unwrap();
    assert!((dot(&vector, &vector) - 1.0).abs() < 1e-5);
}

#[tokio::test]
async fn character_order_does_not_matter() {
    let embeddings = FakeEmbeddings::default();
    let a = embeddings.embed_query("abc").await.unwrap();
    let b = embeddings.embed_query("cab").await.unwrap();
    assert_eq!(a, b);
}

#[tokio::test]
async fn disjoint_buckets_are_orthogonal() {
    let embeddings = FakeEmbeddings::new(16);
    let a = embeddings.embed_query("aaaa").await.unwrap();
    let b = embeddings.embed_query("bbbb").await.unwrap();
    assert_eq!(dot(&a, &b), 0.0);
}

#[tokio::test]
async fn empty_text_and_zero_dimensions_do_not_panic() {
    let embeddings = FakeEmbeddings::new(4);
    assert_eq!(embeddings.embed_query("").await.unwrap(), vec![0.0; 4]);

    let empty = FakeEmbeddings::new(0);
    assert!(empty.embed_query("text").await.unwrap().is_empty());
}
