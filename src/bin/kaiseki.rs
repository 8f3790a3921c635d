//! The `kaiseki` command-line front end: `analyze`/`vocab` (sentence-level
//! views over pre-tokenized morpheme input), `deep` (single-word analysis),
//! `conjugate` (forward generation), and `build-index` (force a dictionary
//! reload and report statistics).
//!
//! Mirrors the teacher's `jpv` CLI crate's shape: one `clap::Parser` `Args`
//! (here a `Subcommand` enum), `tracing_subscriber::EnvFilter` set up in
//! `main`, `anyhow` at the process boundary only — the library crate itself
//! never depends on it.
//!
//! This binary ships no morphological tokenizer of its own ([`kaiseki::morpheme::Segmenter`]
//! is an external-collaborator boundary a real analyzer plugs into), so
//! `analyze`/`vocab` read already-segmented morphemes from a simple
//! tab-separated line format rather than raw Japanese text.

use std::fs;
use std::io::{self, Read};
use std::path::PathBuf;

use anyhow::{anyhow, Context, Result};
use clap::{Parser, Subcommand};
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

use kaiseki::conjugate::auxiliary::Auxiliary;
use kaiseki::conjugate::Conjugation;
use kaiseki::dirs::Dirs;
use kaiseki::kana;
use kaiseki::morpheme::{OwnedMorpheme, PosTags};
use kaiseki::pipeline::hint::RegularPastTenseInflector;
use kaiseki::pipeline::views::{self, ViewKind};
use kaiseki::reporter::TracingReporter;
use kaiseki::Services;

#[derive(Parser)]
#[command(name = "kaiseki", about = "A Japanese morphological analysis kernel for language learners")]
struct Args {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Run the full view over pre-tokenized morphemes.
    Analyze {
        /// Tab-separated morpheme file: surface, dictionary form, reading,
        /// main POS tag, sub1 POS tag. Reads stdin if omitted.
        #[arg(long)]
        morphemes: Option<PathBuf>,
    },
    /// Run the vocabulary view over pre-tokenized morphemes.
    Vocab {
        #[arg(long)]
        morphemes: Option<PathBuf>,
    },
    /// Deep single-word analysis: every depth-3 deconjugation hypothesis.
    Deep {
        /// The conjugated surface form.
        surface: String,
        /// The candidate dictionary form.
        dictionary_form: String,
    },
    /// Forward-conjugate a dictionary form through an auxiliary chain to a
    /// terminal conjugation.
    Conjugate {
        /// The dictionary form (e.g. 食べる, 高い).
        dictionary_form: String,
        /// Terminal conjugation: negative, conjunctive, dictionary,
        /// conditional, imperative, volitional, te, ta, tara, tari, zu, nu.
        conjugation: String,
        /// Auxiliary chain, applied in order (e.g. rerurareru nai for
        /// "couldn't ~"). Leave empty for a bare conjugation.
        auxiliaries: Vec<String>,
        /// Force ichidan conjugation instead of the godan default.
        #[arg(long)]
        ichidan: bool,
    },
    /// Force a (re)load of the dictionary index and report statistics.
    BuildIndex {
        /// Explicit path to a jmdict-simplified JSON or JSON.GZ dump. When
        /// omitted, the usual conventional-path search applies.
        path: Option<PathBuf>,
    },
}

fn parse_conjugation(name: &str) -> Result<Conjugation> {
    Ok(match name.to_ascii_lowercase().as_str() {
        "negative" => Conjugation::Negative,
        "conjunctive" => Conjugation::Conjunctive,
        "dictionary" => Conjugation::Dictionary,
        "conditional" => Conjugation::Conditional,
        "imperative" => Conjugation::Imperative,
        "volitional" => Conjugation::Volitional,
        "te" => Conjugation::Te,
        "ta" => Conjugation::Ta,
        "tara" => Conjugation::Tara,
        "tari" => Conjugation::Tari,
        "zu" => Conjugation::Zu,
        "nu" => Conjugation::Nu,
        other => return Err(anyhow!("unknown conjugation `{other}`")),
    })
}

fn parse_auxiliary(name: &str) -> Result<Auxiliary> {
    Ok(match name.to_ascii_lowercase().as_str() {
        "potential" => Auxiliary::Potential,
        "masu" => Auxiliary::Masu,
        "nai" => Auxiliary::Nai,
        "tai" => Auxiliary::Tai,
        "tagaru" => Auxiliary::Tagaru,
        "hoshii" => Auxiliary::Hoshii,
        "rashii" => Auxiliary::Rashii,
        "soudahearsay" => Auxiliary::SoudaHearsay,
        "soudaconjecture" => Auxiliary::SoudaConjecture,
        "serusaseru" => Auxiliary::SeruSaseru,
        "shortenedcausative" => Auxiliary::ShortenedCausative,
        "rerurareru" => Auxiliary::ReruRareru,
        "causativepassive" => Auxiliary::CausativePassive,
        "shortenedcausativepassive" => Auxiliary::ShortenedCausativePassive,
        "ageru" => Auxiliary::Ageru,
        "sashiageru" => Auxiliary::Sashiageru,
        "yaru" => Auxiliary::Yaru,
        "morau" => Auxiliary::Morau,
        "itadaku" => Auxiliary::Itadaku,
        "kureru" => Auxiliary::Kureru,
        "kudasaru" => Auxiliary::Kudasaru,
        "nasai" => Auxiliary::Nasai,
        "teiru" => Auxiliary::TeIru,
        "tearu" => Auxiliary::TeAru,
        "miru" => Auxiliary::Miru,
        "iku" => Auxiliary::Iku,
        "kuru" => Auxiliary::Kuru,
        "oku" => Auxiliary::Oku,
        "shimau" => Auxiliary::Shimau,
        "teoru" => Auxiliary::TeOru,
        "sugiru" => Auxiliary::Sugiru,
        "yasui" => Auxiliary::Yasui,
        "nikui" => Auxiliary::Nikui,
        "hajimeru" => Auxiliary::Hajimeru,
        "owaru" => Auxiliary::Owaru,
        "tsuzukeru" => Auxiliary::Tsuzukeru,
        "dasu" => Auxiliary::Dasu,
        "garu" => Auxiliary::Garu,
        "souappearance" => Auxiliary::SouAppearance,
        other => return Err(anyhow!("unknown auxiliary `{other}`")),
    })
}

/// Parse the tab-separated morpheme format: one morpheme per line,
/// `surface\tdictionary_form\treading\tmain_pos\tsub1_pos`.
fn parse_morphemes(text: &str) -> Vec<OwnedMorpheme> {
    text.lines()
        .filter(|line| !line.trim().is_empty())
        .map(|line| {
            let mut fields = line.split('\t');
            let surface = fields.next().unwrap_or_default().to_string();
            let dictionary_form = fields.next().unwrap_or(&surface).to_string();
            let reading = fields.next().unwrap_or_default().to_string();
            let main = fields.next().unwrap_or_default().to_string();
            let sub1 = fields.next().unwrap_or_default().to_string();
            OwnedMorpheme { surface, dictionary_form, reading, pos: PosTags::new([main, sub1]) }
        })
        .collect()
}

fn read_morphemes_input(path: &Option<PathBuf>) -> Result<Vec<OwnedMorpheme>> {
    let text = match path {
        Some(path) => fs::read_to_string(path).with_context(|| anyhow!("reading {}", path.display()))?,
        None => {
            let mut buf = String::new();
            io::stdin().read_to_string(&mut buf)?;
            buf
        }
    };
    Ok(parse_morphemes(&text))
}

fn print_tokens(tokens: &[kaiseki::pipeline::token::Token]) {
    for token in tokens {
        print!("{} [{}] ({})", token.surface, token.reading, token.pos);
        if let Some(meaning) = &token.meaning {
            print!(" — {meaning}");
        }
        println!();
        if !token.tags.is_empty() {
            println!("  tags: {}", token.tags.join(", "));
        }
        if let Some(info) = &token.conjugation {
            println!("  {} ({})", info.summary, info.translation_hint);
        }
    }
}

fn main() -> Result<()> {
    let filter = EnvFilter::builder().from_env_lossy();
    tracing_subscriber::fmt().with_env_filter(filter).finish().try_init().ok();

    let args = Args::try_parse()?;

    match args.command {
        Command::Analyze { morphemes } => {
            let morphemes = read_morphemes_input(&morphemes)?;
            let dirs = Dirs::open()?;
            let services = Services::build(&dirs, &TracingReporter)?;
            let tokens = kaiseki::pipeline::analyze(&services, &morphemes, ViewKind::Full, &RegularPastTenseInflector);
            print_tokens(&tokens);
        }
        Command::Vocab { morphemes } => {
            let morphemes = read_morphemes_input(&morphemes)?;
            let dirs = Dirs::open()?;
            let services = Services::build(&dirs, &TracingReporter)?;
            let tokens = kaiseki::pipeline::analyze(&services, &morphemes, ViewKind::Vocabulary, &RegularPastTenseInflector);
            print_tokens(&tokens);
        }
        Command::Deep { surface, dictionary_form } => {
            let dirs = Dirs::open()?;
            let services = Services::build(&dirs, &TracingReporter)?;
            match views::deep_analyze(&services, &surface, &dictionary_form, &RegularPastTenseInflector) {
                Some(token) => print_tokens(&[token]),
                None => println!("no deconjugation chain found for {surface} <- {dictionary_form}"),
            }
        }
        Command::Conjugate { dictionary_form, conjugation, auxiliaries, ichidan } => {
            let conjugation = parse_conjugation(&conjugation)?;
            let auxiliaries = auxiliaries.iter().map(|a| parse_auxiliary(a)).collect::<Result<Vec<_>>>()?;
            let ichidan = ichidan || kana::looks_ichidan(&dictionary_form);
            let results = views::forward_conjugate(&dictionary_form, &auxiliaries, conjugation, ichidan)
                .map_err(|err| anyhow!("{err}"))?;
            for result in results {
                println!("{result}");
            }
        }
        Command::BuildIndex { path } => {
            let dirs = Dirs::open()?;
            if let Some(path) = path {
                let dump: kaiseki::dictionary::schema::Dump =
                    serde_json::from_str(&fs::read_to_string(&path).with_context(|| anyhow!("reading {}", path.display()))?)?;
                let dictionary = kaiseki::dictionary::Dictionary::from_word_dump(dump);
                println!("loaded {} word entries from {}", dictionary.word_count(), path.display());
            } else {
                let services = Services::build(&dirs, &TracingReporter)?;
                println!("{} word entries, {} name entries, {} phrases", services.dictionary.word_count(), services.dictionary.name_count(), services.phrases.len());
            }
        }
    }

    Ok(())
}
