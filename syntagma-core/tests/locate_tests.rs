//! Preposition lookback and the deprecated chunk lookup

#![allow(deprecated)]

use syntagma_core::*;

/// "Which river flows through 3 countries?"
fn river_doc() -> Document {
    Document::builder()
        .token("Which", "WDT", "det")
        .token("river", "NN", "nsubj")
        .token("flows", "VBZ", "ROOT")
        .token("through", "IN", "prep")
        .token("3", "CD", "nummod")
        .token("countries", "NNS", "pobj")
        .no_trailing_space()
        .token("?", ".", "punct")
        .sentence(0, 7)
        .chunk(0, 2, 1)
        .chunk(4, 6, 5)
        .build()
        .unwrap()
}

#[test]
fn preposition_found_immediately_before_chunk() {
    let doc = river_doc();
    let sentence = doc.sentences()[0];
    let chunk = doc.chunks()[1]; // "3 countries"

    let preposition = preceding_preposition(&doc, sentence, &chunk).unwrap();
    assert_eq!(preposition.text(), "through");
    assert_eq!(preposition.index(), 3);
}

#[test]
fn chunk_at_document_start_has_no_preposition() {
    let doc = river_doc();
    let sentence = doc.sentences()[0];
    let chunk = doc.chunks()[0]; // "Which river"

    assert!(preceding_preposition(&doc, sentence, &chunk).is_none());
}

#[test]
fn lookback_is_a_single_token_only() {
    // "put the key in the old box": the chunk "old box" is preceded by
    // "the", so the earlier "in" must not be picked up.
    let doc = Document::builder()
        .token("put", "VB", "ROOT")
        .token("the", "DT", "det")
        .token("key", "NN", "dobj")
        .token("in", "IN", "prep")
        .token("the", "DT", "det")
        .token("old", "JJ", "amod")
        .token("box", "NN", "pobj")
        .sentence(0, 7)
        .chunk(5, 7, 6)
        .build()
        .unwrap();
    let sentence = doc.sentences()[0];
    let chunk = doc.chunks()[0];

    assert!(preceding_preposition(&doc, sentence, &chunk).is_none());
}

#[test]
fn lookback_outside_sentence_range_finds_nothing() {
    let doc = river_doc();
    // A short sentence view combined with a chunk far to its right
    let sentence = Span::new(0, 2);
    let chunk = Chunk::new(Span::new(4, 6), 5);

    assert!(preceding_preposition(&doc, sentence, &chunk).is_none());
}

fn three_chunks() -> Vec<Chunk> {
    vec![
        Chunk::new(Span::new(0, 2), 1),
        Chunk::new(Span::new(3, 5), 4),
        Chunk::new(Span::new(6, 8), 7),
    ]
}

#[test]
fn previous_chunk_returns_the_left_neighbour() {
    let chunks = three_chunks();
    let previous = previous_chunk(&chunks, &chunks[1]).unwrap();
    assert_eq!(previous, Some(&chunks[0]));
}

#[test]
fn first_chunk_has_no_predecessor() {
    let chunks = three_chunks();
    assert_eq!(previous_chunk(&chunks, &chunks[0]).unwrap(), None);
}

#[test]
fn absent_chunk_is_a_hard_failure() {
    let chunks = three_chunks();
    let stranger = Chunk::new(Span::new(9, 11), 10);
    assert_eq!(previous_chunk(&chunks, &stranger).unwrap_err(), CoreError::ChunkNotFound);
}

#[test]
fn lookup_uses_value_equality() {
    let chunks = three_chunks();
    // A structurally equal copy, not the same allocation
    let copy = Chunk::new(Span::new(6, 8), 7);
    let previous = previous_chunk(&chunks, &copy).unwrap();
    assert_eq!(previous, Some(&chunks[1]));
}
