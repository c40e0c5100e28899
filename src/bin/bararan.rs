//! Bararan CLI binary.
//!
//! A terminal presenter over the lookup core: search the word collection,
//! open a word's detail view by id or textual key, or audit a seeded store
//! for pre-translation-schema records. Talks to the configured content
//! store, or to the embedded seed corpus with `--seeded`.

use std::process;
use std::sync::Arc;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use bararan::aggregate::{preview, COMPACT_GROUP_LIMIT, LIST_PREVIEW_LIMIT};
use bararan::i18n::translate;
use bararan::word::WordEntry;
use bararan::{
    seed, Config, ContentStore, HttpStore, LexiconError, Lexicon, Locale, MemoryStore,
    NeighborSummary, SchemaVariant, SearchHit, WordDetail,
};

/// Bararan - bilingual word-relation lookup
#[derive(Parser, Debug)]
#[command(name = "bararan")]
#[command(about = "Bilingual word-relation lookup over a headless content store")]
#[command(version = env!("CARGO_PKG_VERSION"))]
struct BararanArgs {
    /// Content-store base URL (overrides API_BASE_URL)
    #[arg(long)]
    base_url: Option<String>,

    /// Use the embedded seed corpus instead of a live store
    #[arg(long)]
    seeded: bool,

    /// Interface locale (en, hy; overrides BARARAN_LOCALE)
    #[arg(long)]
    locale: Option<Locale>,

    /// Search the early lexeme schema instead of the translation schema
    #[arg(long)]
    lexical: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Search words by substring
    Search {
        /// The query string
        query: String,
    },
    /// Show a word's detail view by numeric id or textual key
    Word {
        /// Numeric id or original/Armenian word
        identifier: String,
    },
    /// List records that predate the translation schema (seeded store only)
    Audit,
}

fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();
}

fn render_neighbors(summary: &NeighborSummary, locale: Locale, compact: bool) {
    match summary {
        NeighborSummary::Typed(groups) => {
            if groups.is_empty() {
                return;
            }
            println!("  {}:", translate("word.relations", locale));
            for group in groups {
                let limit = if compact {
                    COMPACT_GROUP_LIMIT
                } else {
                    group.neighbors.len()
                };
                let truncated = preview(&group.neighbors, limit);
                let mut line = String::new();
                for neighbor in truncated.shown {
                    if !line.is_empty() {
                        line.push_str(", ");
                    }
                    line.push_str(&neighbor.label);
                    if let Some(weight) = neighbor.weight {
                        line.push_str(&format!(" ({weight})"));
                    }
                }
                if truncated.more > 0 {
                    line.push_str(&format!(", +{} more", truncated.more));
                }
                println!("    {}: {line}", group.relation_type);
            }
        }
        NeighborSummary::Linked(neighbors) => {
            if neighbors.is_empty() {
                return;
            }
            let limit = if compact {
                LIST_PREVIEW_LIMIT
            } else {
                neighbors.len()
            };
            let truncated = preview(neighbors, limit);
            let mut line = String::new();
            for neighbor in truncated.shown {
                if !line.is_empty() {
                    line.push_str(", ");
                }
                line.push_str(&neighbor.label);
            }
            if truncated.more > 0 {
                line.push_str(&format!(", +{} more", truncated.more));
            }
            println!("  {}: {line}", translate("word.connections", locale));
        }
    }
}

fn render_hit(hit: &SearchHit, locale: Locale) {
    println!("[{}] {}", hit.word.id, hit.word.display_label());
    match &hit.word.entry {
        WordEntry::Lexeme(entry) => {
            if let Some(language) = &entry.language {
                println!("  {}: {}", translate("word.language", locale), language.name);
            }
            if let Some(pos) = &entry.part_of_speech {
                println!("  {pos}");
            }
        }
        WordEntry::Translation(entry) => {
            println!("  {}", entry.original_word);
            if let Some(book) = &entry.book {
                println!("  {}: {}", translate("word.book", locale), book.title);
            }
            if let Some(author) = &entry.author {
                println!("  {}: {}", translate("word.author", locale), author.name);
            }
            if let Some(translator) = &entry.translator {
                println!(
                    "  {}: {}",
                    translate("word.translator", locale),
                    translator.name
                );
            }
        }
    }
    render_neighbors(&hit.neighbors, locale, true);
}

fn render_detail(detail: &WordDetail, locale: Locale) {
    println!("{}", detail.word.display_label());
    match &detail.word.entry {
        WordEntry::Lexeme(entry) => {
            if let Some(language) = &entry.language {
                println!("{}: {}", translate("word.language", locale), language.name);
            }
            if let Some(pos) = &entry.part_of_speech {
                println!("{pos}");
            }
            let annotations = [
                ("Lemma Part", &entry.lemma_part),
                ("Affix", &entry.affix),
                ("Affix Number", &entry.affix_number),
                ("Affix Type", &entry.affix_type),
                ("Root", &entry.root),
                ("Root Number", &entry.root_number),
                ("Stem", &entry.stem),
                ("Ordinal", &entry.ordinal),
            ];
            for (label, value) in annotations {
                if let Some(value) = value {
                    println!("{label}: {value}");
                }
            }
            if let Some(notes) = &entry.notes {
                println!("{}: {notes}", translate("word.notes", locale));
            }
        }
        WordEntry::Translation(entry) => {
            println!("{}", entry.original_word);
            if let Some(language) = &entry.original_language {
                println!("{}: {language}", translate("word.language", locale));
            }
            if let Some(sentence) = &entry.original_example_sentence {
                println!("  \"{sentence}\"");
            }
            if let Some(sentence) = &entry.armenian_example_sentence {
                println!("  \"{sentence}\"");
            }
        }
    }
    render_neighbors(&detail.neighbors, locale, false);
    for word in &detail.expanded {
        let line = match &word.entry {
            WordEntry::Translation(entry) => format!(
                "  [{}] {} / {}",
                word.id,
                entry.original_word,
                entry.armenian_word.as_deref().unwrap_or("")
            ),
            WordEntry::Lexeme(entry) => format!("  [{}] {}", word.id, entry.lemma),
        };
        println!("{line}");
    }
}

async fn run(args: BararanArgs) -> Result<(), LexiconError> {
    let mut config = Config::from_env();
    if let Some(base_url) = args.base_url {
        config.base_url = base_url;
    }
    let locale = args.locale.unwrap_or(config.locale);
    let schema = if args.lexical {
        SchemaVariant::Lexical
    } else {
        SchemaVariant::Translation
    };

    let seeded_store = if args.seeded {
        let store = MemoryStore::new();
        seed::seed_all(&store)?;
        Some(Arc::new(store))
    } else {
        None
    };
    let store: Arc<dyn ContentStore> = if let Some(store) = &seeded_store {
        store.clone()
    } else {
        Arc::new(HttpStore::from_config(&config)?)
    };
    let lexicon = Lexicon::new(store, schema);

    match args.command {
        Command::Search { query } => {
            let hits = lexicon.search(&query).await?;
            if hits.is_empty() {
                println!(
                    "{}",
                    translate("search.no_results", locale).replace("{query}", query.trim())
                );
                return Ok(());
            }
            for hit in &hits {
                render_hit(hit, locale);
            }
        }
        Command::Word { identifier } => {
            let detail = lexicon.lookup(&identifier).await?;
            render_detail(&detail, locale);
        }
        Command::Audit => {
            let Some(store) = &seeded_store else {
                eprintln!("audit requires --seeded (the live store is not audited from here)");
                process::exit(2);
            };
            let legacy = store.legacy_records()?;
            println!("{} record(s) predate the translation schema", legacy.len());
            for word in &legacy {
                println!("  [{}] {}", word.id, word.display_label());
            }
        }
    }
    Ok(())
}

#[tokio::main]
async fn main() {
    init_tracing();
    let args = BararanArgs::parse();

    if let Err(e) = run(args).await {
        let locale = Config::from_env().locale;
        if e.is_not_found() {
            eprintln!("{}", translate("word.not_found", locale));
        } else {
            eprintln!("Error: {e}");
        }
        process::exit(1);
    }
}
