use std::io::{self, BufRead};
use std::path::PathBuf;

use anyhow::Context;
use gumdrop::Options;
use serde::Serialize;

use yazim::checker::{CheckerConfig, NgramSpellChecker, SpellChecker};
use yazim::lexicon::FlatLexicon;
use yazim::ngram::BigramTable;
use yazim::resources::CheckerResources;
use yazim::sentence::Sentence;

#[derive(Debug, Options)]
struct Args {
    #[options(help = "print help message")]
    help: bool,

    #[options(
        help = "directory with lexicon.txt, misspellings.txt, unigrams.txt, bigrams.txt, merged_words.txt and split_words.txt"
    )]
    resources: Option<PathBuf>,

    #[options(help = "probability acceptance threshold (default 0)")]
    threshold: Option<f64>,

    #[options(help = "score raw surface forms instead of morphological roots")]
    surface: bool,

    #[options(no_short, help = "disable the de/da and question-suffix splits")]
    no_suffix_splits: bool,

    #[options(help = "domain tag selecting alternate resource files")]
    domain: Option<String>,

    #[options(help = "emit JSON records instead of plain text")]
    json: bool,
}

trait OutputWriter {
    fn write_sentence(&mut self, input: &str, output: &str);
    fn finish(&mut self) -> anyhow::Result<()>;
}

struct StdoutWriter;

impl OutputWriter for StdoutWriter {
    fn write_sentence(&mut self, _input: &str, output: &str) {
        println!("{}", output);
    }

    fn finish(&mut self) -> anyhow::Result<()> {
        Ok(())
    }
}

#[derive(Serialize)]
struct Correction {
    input: String,
    output: String,
}

#[derive(Default)]
struct JsonWriter {
    results: Vec<Correction>,
}

impl OutputWriter for JsonWriter {
    fn write_sentence(&mut self, input: &str, output: &str) {
        self.results.push(Correction {
            input: input.to_owned(),
            output: output.to_owned(),
        });
    }

    fn finish(&mut self) -> anyhow::Result<()> {
        println!("{}", serde_json::to_string_pretty(&self.results)?);
        Ok(())
    }
}

fn main() -> anyhow::Result<()> {
    pretty_env_logger::init();
    let args = Args::parse_args_default_or_exit();

    let dir = args
        .resources
        .context("--resources <dir> is required; see --help")?;

    let mut config = CheckerConfig::default();
    if let Some(threshold) = args.threshold {
        config.threshold = threshold;
    }
    if args.surface {
        config.root_ngram = false;
    }
    if args.no_suffix_splits {
        config.suffix_splits = false;
    }
    config.domain = args.domain.map(Into::into);

    let lexicon = FlatLexicon::from_dir(&dir).context("loading lexicon")?;
    let model = BigramTable::from_dir(&dir).context("loading bigram model")?;
    let resources = CheckerResources::from_dir(&dir, config.domain.as_deref())
        .context("loading correction tables")?;
    let checker = NgramSpellChecker::new(lexicon, model, resources, config);

    let mut writer: Box<dyn OutputWriter> = if args.json {
        Box::new(JsonWriter::default())
    } else {
        Box::new(StdoutWriter)
    };

    for line in io::stdin().lock().lines() {
        let line = line.context("reading stdin")?;
        let corrected = checker.spell_check(&Sentence::from_line(&line));
        writer.write_sentence(&line, &corrected.to_string());
    }

    writer.finish()
}
