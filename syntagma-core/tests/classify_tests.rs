//! Classifier behavior over realistic tagged fixtures

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

/// "Who knows why whose dog bit which man", one token per WH class
fn wh_doc() -> Document {
    Document::builder()
        .token("Who", "WP", "nsubj")
        .token("knows", "VBZ", "ROOT")
        .token("why", "WRB", "advmod")
        .token("whose", "WP$", "poss")
        .token("dog", "NN", "nsubj")
        .token("bit", "VBD", "ccomp")
        .token("which", "WDT", "det")
        .token("man", "NN", "dobj")
        .sentence(0, 8)
        .build()
        .unwrap()
}

fn texts<'d>(tokens: &[&'d Token]) -> Vec<&'d str> {
    tokens.iter().map(|token| token.text()).collect()
}

#[test]
fn cardinals_match_exactly() {
    let doc = river_doc();
    let found = cardinals(doc.tokens());
    assert_eq!(texts(&found), vec!["3"]);
    assert_eq!(found[0].index(), 4);
}

#[test]
fn cardinals_of_a_span_view() {
    let doc = river_doc();
    // The "3 countries" chunk
    let found = cardinals(doc.span_tokens(Span::new(4, 6)));
    assert_eq!(texts(&found), vec!["3"]);
    // The "Which river" chunk holds none
    assert!(cardinals(doc.span_tokens(Span::new(0, 2))).is_empty());
}

#[test]
fn wh_subclasses_are_disjoint() {
    let doc = wh_doc();
    assert_eq!(texts(&wh_adverbs(doc.tokens())), vec!["why"]);
    assert_eq!(texts(&wh_determiners(doc.tokens())), vec!["which"]);
    assert_eq!(texts(&wh_pronouns(doc.tokens())), vec!["Who", "whose"]);
}

#[test]
fn wh_words_union_in_original_order() {
    let doc = wh_doc();
    let union = wh_words(doc.tokens());
    assert_eq!(texts(&union), vec!["Who", "why", "whose", "which"]);

    // Equal to the three subclasses combined, without duplicates
    let mut combined: Vec<usize> = wh_adverbs(doc.tokens())
        .into_iter()
        .chain(wh_determiners(doc.tokens()))
        .chain(wh_pronouns(doc.tokens()))
        .map(|token| token.index())
        .collect();
    combined.sort_unstable();
    let union_indices: Vec<usize> = union.iter().map(|token| token.index()).collect();
    assert_eq!(union_indices, combined);
}

#[test]
fn wh_words_empty_when_none_match() {
    let doc = Document::builder()
        .token("Rivers", "NNS", "nsubj")
        .token("flow", "VBP", "ROOT")
        .build()
        .unwrap();
    assert!(wh_words(doc.tokens()).is_empty());
}

#[test]
fn nouns_without_filters_take_every_noun_tag() {
    let doc = river_doc();
    let chunk = Chunk::new(Span::new(0, 7), 1);
    let found = nouns(&doc, &chunk, &[]);
    let found_texts: Vec<&str> = found.iter().map(|noun| noun.token.text()).collect();
    assert_eq!(found_texts, vec!["river", "countries"]);
}

#[test]
fn nouns_with_dependency_filter() {
    let doc = river_doc();
    let chunk = Chunk::new(Span::new(0, 7), 1);

    let subjects = nouns(&doc, &chunk, &["nsubj"]);
    assert_eq!(subjects.len(), 1);
    assert_eq!(subjects[0].token.text(), "river");
    assert_eq!(subjects[0].dep.code(), "nsubj");

    let either = nouns(&doc, &chunk, &["nsubj", "pobj"]);
    assert_eq!(either.len(), 2);

    assert!(nouns(&doc, &chunk, &["dobj"]).is_empty());
}

#[test]
fn noun_root_flag_compares_surface_text() {
    // "river delta river": the root is the second "river", but the first
    // one spells the same, so both carry the flag.
    let doc = Document::builder()
        .token("river", "NN", "compound")
        .token("delta", "NN", "compound")
        .token("river", "NN", "pobj")
        .chunk(0, 3, 2)
        .build()
        .unwrap();
    let chunk = doc.chunks()[0];

    let found = nouns(&doc, &chunk, &[]);
    assert_eq!(found.len(), 3);
    assert!(found[0].is_root, "same-text token is flagged as root");
    assert!(!found[1].is_root);
    assert!(found[2].is_root, "the actual root is flagged");
}

#[test]
fn nouns_of_unresolvable_chunk_are_empty() {
    let doc = river_doc();
    let stale = Chunk { span: Span::new(10, 12), root: 11 };
    assert!(nouns(&doc, &stale, &[]).is_empty());
}

mod properties {
    use super::*;
    use proptest::prelude::*;

    const POOL: [&str; 10] = [
        "CD", "WRB", "WDT", "WP", "WP$", "NN", "NNS", "VBZ", "JJ", "IN",
    ];

    fn doc_from_codes(codes: &[usize]) -> Document {
        let mut builder = Document::builder();
        for (position, &code) in codes.iter().enumerate() {
            builder = builder.token(format!("t{position}"), POOL[code], "dep");
        }
        builder.build().unwrap()
    }

    proptest! {
        #[test]
        fn classifiers_select_exactly_the_matching_tags(codes in prop::collection::vec(0usize..POOL.len(), 0..40)) {
            let doc = doc_from_codes(&codes);

            let expect = |wanted: &[&str]| -> Vec<usize> {
                codes
                    .iter()
                    .enumerate()
                    .filter(|(_, &code)| wanted.contains(&POOL[code]))
                    .map(|(index, _)| index)
                    .collect()
            };
            let indices = |found: Vec<&Token>| -> Vec<usize> {
                found.iter().map(|token| token.index()).collect()
            };

            prop_assert_eq!(indices(cardinals(doc.tokens())), expect(&["CD"]));
            prop_assert_eq!(indices(wh_adverbs(doc.tokens())), expect(&["WRB"]));
            prop_assert_eq!(indices(wh_determiners(doc.tokens())), expect(&["WDT"]));
            prop_assert_eq!(indices(wh_pronouns(doc.tokens())), expect(&["WP", "WP$"]));
            prop_assert_eq!(indices(wh_words(doc.tokens())), expect(&["WRB", "WDT", "WP", "WP$"]));
        }
    }
}
