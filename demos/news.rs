//! Check a news article against a rule file written with Russian operators.
//!
//! ```text
//! cargo run --example news
//! RUST_LOG=topicmatch=debug cargo run --example news
//! ```

use serde::Deserialize;
use topicmatch::{Keywords, ParseOptions, RuleBook, RuleChecker};
use tracing_subscriber::EnvFilter;

#[derive(Debug, Deserialize)]
struct Document {
    #[serde(default)]
    text: String,
}

/// Stand-in for a morphological analyzer: maps the inflected forms in the
/// sample article to their dictionary forms.
fn lemma(word: &str) -> String {
    match word {
        "центре" => "центр",
        "екатеринбурга" => "екатеринбург",
        "города" => "город",
        "проекте" => "проект",
        "жители" => "житель",
        "открыли" => "открыть",
        other => other,
    }
    .to_owned()
}

fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(true)
        .finish();
    let _ = tracing::subscriber::set_global_default(subscriber);
}

fn main() {
    init_logging();

    let raw = std::fs::read_to_string("demos/news_sample.json").expect("failed to read article");
    let document: Document = serde_json::from_str(&raw).expect("article is not valid JSON");

    let options = ParseOptions::new().keywords(Keywords::russian());
    let book = RuleBook::from_file("demos/rules.txt", &options).expect("failed to load rules");
    println!("{book}");

    let checker = RuleChecker::with_options(lemma, options);
    for report in book.evaluate(&checker, &document.text) {
        println!("{report}");
    }
}
