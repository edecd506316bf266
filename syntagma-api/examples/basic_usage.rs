//! Basic usage example for the analyzer facade

use syntagma_api::{Analyzer, Config, Document, Tagger, TaggerError};

/// A stand-in engine with one canned parse; real integrations wrap an
/// actual POS tagger and dependency parser here.
struct DemoTagger;

impl Tagger for DemoTagger {
    fn tag_text(&self, _text: &str) -> Result<Document, TaggerError> {
        Document::builder()
            .token("Which", "WDT", "det")
            .token("museum", "NN", "nsubj")
            .token("in", "IN", "prep")
            .token("New", "NNP", "compound")
            .token("York", "NNP", "pobj")
            .token("holds", "VBZ", "ROOT")
            .token("3", "CD", "nummod")
            .token("Vermeers", "NNPS", "dobj")
            .no_trailing_space()
            .token("?", ".", "punct")
            .sentence(0, 9)
            .chunk(0, 2, 1)
            .chunk(3, 5, 4)
            .chunk(6, 8, 7)
            .entity(3, 5, "GPE")
            .build()
            .map_err(|e| TaggerError::new(e.to_string()))
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Method 1: Simplest usage with the default configuration
    println!("=== Method 1: Default Analyzer ===");
    let analyzer = Analyzer::new(DemoTagger);
    let analysis = analyzer.analyze("Which museum in New York holds 3 Vermeers?")?;

    for sentence in &analysis.sentences {
        for wh in &sentence.wh_words {
            println!("  WH-word: {} ({})", wh.text, wh.tag);
        }
        for cardinal in &sentence.cardinals {
            println!("  Cardinal: {}", cardinal.text);
        }
        for chunk in &sentence.chunks {
            for noun in &chunk.nouns {
                println!("  Noun: {} (root: {})", noun.token.text, noun.is_root);
            }
            if let Some(preposition) = &chunk.preposition {
                println!("  Governed by: {}", preposition.text);
            }
        }
    }

    // Method 2: Custom configuration
    println!("\n=== Method 2: Subject Nouns Only, No Merging ===");
    let config = Config::builder()
        .merge_entities(false)
        .noun_dependency("nsubj")
        .build()?;
    let analyzer = Analyzer::with_config(DemoTagger, config);
    let analysis = analyzer.analyze("Which museum in New York holds 3 Vermeers?")?;

    let subjects: usize = analysis
        .sentences
        .iter()
        .flat_map(|sentence| &sentence.chunks)
        .map(|chunk| chunk.nouns.len())
        .sum();
    println!("Found {subjects} subject noun(s)");

    // Method 3: A tagger for a different tag inventory
    println!("\n=== Method 3: Custom Tag Scheme ===");
    let config = Config::builder()
        .scheme_toml(r#"preposition = "case""#)?
        .build()?;
    println!("Preposition relation: {}", config.scheme.preposition);

    Ok(())
}
