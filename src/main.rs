mod debug_report;

use catena::{
    chapter_groups_verbose, verse_commentaries_verbose, ChapterRequest, CommentaryRecord, Mode, SourceError,
    VerseRequest, VerseRow, VerseTextSource,
};
use serde::Deserialize;
use std::io::{self, IsTerminal};

fn main() {
    let config = match parse_args() {
        Ok(config) => config,
        Err(err) => {
            eprintln!("{err}");
            std::process::exit(2);
        }
    };

    let fixture = match load_fixture(&config.input) {
        Ok(fixture) => fixture,
        Err(err) => {
            eprintln!("error: {err}");
            std::process::exit(1);
        }
    };

    let source = FixtureSource { rows: fixture.verses };

    match config.verse {
        Some(verse) => {
            let mut request = VerseRequest::new(verse);
            request.mode = config.mode;
            let (views, metrics) = verse_commentaries_verbose(&fixture.records, &request);
            debug_report::print_verse(verse, &views, &metrics, config.color);
        }
        None => {
            let mut request = ChapterRequest::new(fixture.book.clone(), fixture.chapter);
            request.mode = config.mode;
            request.preferred_version = config.preferred_version;
            match chapter_groups_verbose(&fixture.records, &request, &source) {
                Ok((groups, metrics)) => {
                    debug_report::print_chapter(&fixture.book, fixture.chapter, &groups, &metrics, config.color)
                }
                Err(err) => {
                    eprintln!("error: {err}");
                    std::process::exit(1);
                }
            }
        }
    }
}

/// A chapter's worth of input data, as dumped by the fetch layer.
#[derive(Debug, Deserialize)]
struct Fixture {
    book: String,
    chapter: u32,
    records: Vec<CommentaryRecord>,
    #[serde(default)]
    verses: Vec<VerseRow>,
}

struct FixtureSource {
    rows: Vec<VerseRow>,
}

impl VerseTextSource for FixtureSource {
    fn verses_for(&self, _book: &str, _chapter: u32, verses: &[u32]) -> Result<Vec<VerseRow>, SourceError> {
        Ok(self.rows.iter().filter(|row| verses.contains(&row.verse_number)).cloned().collect())
    }
}

fn load_fixture(path: &str) -> Result<Fixture, String> {
    let raw = std::fs::read_to_string(path).map_err(|e| format!("cannot read {path}: {e}"))?;
    serde_json::from_str(&raw).map_err(|e| format!("cannot parse {path}: {e}"))
}

struct CliConfig {
    input: String,
    verse: Option<u32>,
    mode: Mode,
    preferred_version: Option<String>,
    color: bool,
}

fn parse_args() -> Result<CliConfig, String> {
    let mut input: Option<String> = None;
    let mut verse: Option<u32> = None;
    let mut mode = Mode::default();
    let mut preferred_version: Option<String> = None;
    let mut color = io::stdout().is_terminal();
    let mut args = std::env::args().skip(1);

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "-h" | "--help" => {
                print_help();
                std::process::exit(0);
            }
            "-V" | "--version" => {
                println!("catena {}", env!("CARGO_PKG_VERSION"));
                std::process::exit(0);
            }
            "--color" => color = true,
            "--no-color" => color = false,
            "--verse" => {
                let value = args.next().ok_or_else(|| "error: --verse expects a number".to_string())?;
                verse = Some(value.parse().map_err(|_| format!("error: invalid verse number {value:?}"))?);
            }
            "--mode" => {
                let value = args.next().ok_or_else(|| "error: --mode expects a value".to_string())?;
                mode = parse_mode(&value)?;
            }
            "--prefer" => {
                let value = args.next().ok_or_else(|| "error: --prefer expects an abbreviation".to_string())?;
                preferred_version = Some(value);
            }
            "--input" | "-i" => {
                let value = args.next().ok_or_else(|| "error: --input expects a path".to_string())?;
                if input.is_some() {
                    return Err("error: input provided multiple times".to_string());
                }
                input = Some(value);
            }
            other if !other.starts_with('-') && input.is_none() => input = Some(other.to_string()),
            other => return Err(format!("error: unrecognized argument {other:?}")),
        }
    }

    let input = input.ok_or_else(|| "error: no input fixture given (try --help)".to_string())?;
    Ok(CliConfig { input, verse, mode, preferred_version, color })
}

fn parse_mode(value: &str) -> Result<Mode, String> {
    match value.to_ascii_lowercase().as_str() {
        "original" => Ok(Mode::Original),
        "modern" => Ok(Mode::Modern),
        "combined" => Ok(Mode::Combined),
        other => Err(format!("error: unknown mode {other:?} (original|modern|combined)")),
    }
}

fn print_help() {
    println!(
        "catena — inspect commentary reconciliation and grouping

USAGE:
    catena [OPTIONS] <fixture.json>

ARGS:
    <fixture.json>      JSON dump: {{book, chapter, records, verses}}

OPTIONS:
    -i, --input <path>  Fixture path (alternative to the positional arg)
        --verse <n>     Run the single-verse path for verse n
        --mode <m>      original | modern | combined (default: combined)
        --prefer <abbr> Preferred scripture version abbreviation (e.g. KJV)
        --color         Force ANSI colors on
        --no-color      Force ANSI colors off
    -h, --help          Show this help
    -V, --version       Show version"
    );
}
