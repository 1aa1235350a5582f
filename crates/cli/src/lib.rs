use std::fs::File;
use std::io::{BufReader, Write};
use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::Parser;

use spellsweep_core::{normalize, Checker, Lexicon, SuggestMode, Suggester};

mod checkers;
pub use checkers::{JsonChecker, TextChecker};

#[macro_export]
macro_rules! info_1 {
    ($($arg:tt)*) => ({
        use colored::*;

        println!("{} {}", "::".bold().blue(), format!($($arg)*));
    })
}

#[macro_export]
macro_rules! info_2 {
    ($($arg:tt)*) => ({
        use colored::*;

        println!("{} {}", "=>".bold().blue(), format!($($arg)*));
    })
}

#[macro_export]
macro_rules! info_3 {
    ($($arg:tt)*) => ({
        use colored::*;

        println!("{} {}", "*".bold().blue(), format!($($arg)*));
    })
}

#[macro_export]
macro_rules! print_error {
    ($($arg:tt)*) => ({
        use colored::*;

        eprintln!("{} {}", "Error:".red(), format!($($arg)*));
    })
}

#[derive(Debug, PartialEq, Eq, clap::ValueEnum, Clone, Copy, Default)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

impl OutputFormat {
    fn is_text(&self) -> bool {
        matches!(self, OutputFormat::Text)
    }
}

#[derive(Parser)]
#[clap(version)]
pub struct Opts {
    #[clap(long, help = "Path to the lexicon, one or more words per line")]
    lexicon: PathBuf,

    #[clap(long, value_enum, short = 'o', help = "Output format")]
    output_format: Option<OutputFormat>,

    #[clap(subcommand)]
    action: Action,
}

#[derive(clap::Subcommand)]
enum Action {
    #[clap(about = "Check files for spelling errors")]
    Check(CheckOpts),
    #[clap(about = "Suggest replacements for the given error")]
    Suggest(SuggestOpts),
}

#[derive(clap::Args)]
struct CheckOpts {
    #[clap(long, help = "List each suggestion at most once")]
    unique: bool,

    #[clap(
        long,
        help = "Write the report to the given file instead of stdout"
    )]
    report_path: Option<PathBuf>,

    #[clap(help = "List of files to check")]
    paths: Vec<PathBuf>,
}

#[derive(clap::Args)]
struct SuggestOpts {
    #[clap(long, help = "List each suggestion at most once")]
    unique: bool,

    word: String,
}

pub fn run(opts: Opts) -> Result<()> {
    let lexicon = Lexicon::load(&opts.lexicon)?;
    let output_format = opts.output_format.unwrap_or_default();
    match &opts.action {
        Action::Check(check_opts) => check(lexicon, check_opts, output_format),
        Action::Suggest(suggest_opts) => suggest(lexicon, suggest_opts),
    }
}

fn suggester_for(unique: bool) -> Suggester {
    match unique {
        true => Suggester::with_mode(SuggestMode::Unique),
        false => Suggester::new(),
    }
}

fn check(lexicon: Lexicon, opts: &CheckOpts, output_format: OutputFormat) -> Result<()> {
    if opts.paths.is_empty() {
        bail!("No path given - nothing to do");
    }
    let suggester = suggester_for(opts.unique);
    match output_format {
        OutputFormat::Text => {
            let sink: Box<dyn Write> = match &opts.report_path {
                Some(path) => Box::new(File::create(path).with_context(|| {
                    format!("Could not open '{}' for writing", path.display())
                })?),
                None => Box::new(std::io::stdout()),
            };
            let mut checker = TextChecker::new(lexicon, suggester, sink);
            check_with(&mut checker, &opts.paths, output_format)
        }
        OutputFormat::Json => {
            let mut checker = JsonChecker::new(lexicon, suggester);
            check_with(&mut checker, &opts.paths, output_format)
        }
    }
}

fn check_with<C: Checker>(
    checker: &mut C,
    paths: &[PathBuf],
    output_format: OutputFormat,
) -> Result<()> {
    let mut checked = 0;
    for path in paths {
        let source = File::open(path)
            .with_context(|| format!("Could not open '{}' for reading", path.display()))?;
        let reader = BufReader::new(source);
        checker.process(reader, &path.display().to_string())?;
        checked += 1;
    }

    if output_format.is_text() {
        info_3!("Checked {checked} files");
    }

    checker.success()
}

fn suggest(lexicon: Lexicon, opts: &SuggestOpts) -> Result<()> {
    let word = normalize(&opts.word);
    if word.is_empty() {
        return Ok(());
    }

    let suggester = suggester_for(opts.unique);
    for suggestion in suggester.suggest(&lexicon, &word) {
        println!("{suggestion}");
    }

    Ok(())
}
