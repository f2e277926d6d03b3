//! `chordsheet` - render, dump and list chord sheets.
//!
//! Usage:
//!   `chordsheet [--tokens | --json] [--max-content N] <file>...`
//!   `chordsheet <dir> [--search <query>]`
//!
//! With no path, the library directory from `CHORDSHEET_LIBRARY` (or
//! `~/Documents/Chord Sheets`) is listed.

use std::io::Write;
use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use chordsheet::catalog::{validate_content, SearchQuery};
use chordsheet::config::Config;
use chordsheet::constants::library::MAX_SEARCH_RESULTS;
use chordsheet::library::{SheetEntry, SheetLibrary};
use chordsheet::lyrics::{parse_content, render_chord_sheet};

const USAGE: &str =
    "Usage: chordsheet [--tokens | --json] [--max-content N] [--search QUERY] [--version] [PATH]...";

/// How parsed sheets are printed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum OutputFormat {
    Render,
    Tokens,
    Json,
}

#[derive(Debug, PartialEq, Eq)]
struct Args {
    format: OutputFormat,
    max_content: Option<usize>,
    search: Option<String>,
    paths: Vec<PathBuf>,
    help: bool,
    version: bool,
}

fn parse_args(args: impl IntoIterator<Item = String>) -> Result<Args> {
    let mut parsed = Args {
        format: OutputFormat::Render,
        max_content: None,
        search: None,
        paths: Vec::new(),
        help: false,
        version: false,
    };

    let mut args = args.into_iter();
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "-h" | "--help" => parsed.help = true,
            "-V" | "--version" => parsed.version = true,
            "--tokens" => parsed.format = OutputFormat::Tokens,
            "--json" => parsed.format = OutputFormat::Json,
            "--max-content" => {
                let value = args.next().context("--max-content needs a value")?;
                let max = value
                    .parse::<usize>()
                    .with_context(|| format!("--max-content expects a number, got {value:?}"))?;
                parsed.max_content = Some(max);
            }
            "--search" => {
                parsed.search = Some(args.next().context("--search needs a query")?);
            }
            flag if flag.starts_with("--") => bail!("Unknown option {flag}\n{USAGE}"),
            path => parsed.paths.push(PathBuf::from(path)),
        }
    }

    Ok(parsed)
}

fn main() {
    if let Err(err) = run() {
        eprintln!("Error: {err:#}");
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let args = parse_args(std::env::args().skip(1))?;
    if args.help {
        println!("{USAGE}");
        return Ok(());
    }

    if args.version {
        println!("{}", version_line());
        return Ok(());
    }

    let config = Config::load()?;
    let max_content = args.max_content.unwrap_or(config.max_content_length);

    let paths = if args.paths.is_empty() {
        let Some(library) = config.library_path.clone() else {
            bail!("No path given and no library found; set CHORDSHEET_LIBRARY\n{USAGE}");
        };
        vec![library]
    } else {
        args.paths.clone()
    };

    for path in &paths {
        check_target(path.is_dir(), &args)?;
    }

    let show_headers = paths.len() > 1;
    for path in &paths {
        if show_headers {
            println!("== {} ==", path.display());
        }
        if path.is_dir() {
            list_library(&mut std::io::stdout().lock(), path, args.search.as_deref())?;
        } else {
            print_sheet(path, args.format, max_content)?;
        }
    }

    Ok(())
}

/// Package name and version; needs no configuration.
fn version_line() -> String {
    format!("{} {}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"))
}

/// Reject flags that do not apply to the kind of path given.
fn check_target(is_dir: bool, args: &Args) -> Result<()> {
    if is_dir && args.format != OutputFormat::Render {
        bail!("--tokens and --json apply to sheet files, not directories\n{USAGE}");
    }
    if !is_dir && args.search.is_some() {
        bail!("--search applies to library directories, not sheet files\n{USAGE}");
    }
    Ok(())
}

fn print_sheet(path: &Path, format: OutputFormat, max_content: usize) -> Result<()> {
    let content = fs_err::read_to_string(path)?;
    validate_content(&content, max_content).with_context(|| path.display().to_string())?;
    let parsed = parse_content(&content);

    match format {
        OutputFormat::Render => {
            let rendered = render_chord_sheet(&parsed);
            if rendered.ends_with('\n') {
                print!("{rendered}");
            } else {
                println!("{rendered}");
            }
        }
        OutputFormat::Tokens => {
            for token in &parsed {
                println!("{token}");
            }
        }
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&parsed)?),
    }

    Ok(())
}

fn list_library(out: &mut impl Write, dir: &Path, search: Option<&str>) -> Result<()> {
    let library = SheetLibrary::scan(dir)?;

    let entries: Vec<&SheetEntry> = match search {
        Some(raw) => {
            let query = SearchQuery::new(raw)?;
            library.search(query.as_str(), MAX_SEARCH_RESULTS)
        }
        None => library.entries().iter().collect(),
    };

    for entry in entries {
        let artist = entry.artist.as_deref().map(|a| format!(" - {a}")).unwrap_or_default();
        writeln!(out, "{}{artist} ({} chords)", entry.title, entry.parsed.chords().count())?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    #![allow(clippy::expect_used, clippy::unwrap_used, clippy::panic)]

    use super::*;

    fn args(list: &[&str]) -> Result<Args> {
        parse_args(list.iter().map(|s| (*s).to_string()))
    }

    #[test]
    fn test_defaults_to_render() {
        let parsed = args(&["song.txt"]).unwrap();
        assert_eq!(parsed.format, OutputFormat::Render);
        assert_eq!(parsed.paths, vec![PathBuf::from("song.txt")]);
        assert_eq!(parsed.max_content, None);
        assert!(!parsed.help && !parsed.version);
    }

    #[test]
    fn test_flags() {
        let parsed = args(&["--json", "--max-content", "50", "a.txt", "b.cho"]).unwrap();
        assert_eq!(parsed.format, OutputFormat::Json);
        assert_eq!(parsed.max_content, Some(50));
        assert_eq!(parsed.paths.len(), 2);

        let parsed = args(&["--tokens", "--search", "grace", "sheets"]).unwrap();
        assert_eq!(parsed.format, OutputFormat::Tokens);
        assert_eq!(parsed.search.as_deref(), Some("grace"));
    }

    #[test]
    fn test_bad_arguments() {
        assert!(args(&["--max-content"]).is_err());
        assert!(args(&["--max-content", "many"]).is_err());
        assert!(args(&["--bogus"]).is_err());
    }

    fn sample_library() -> tempfile::TempDir {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("Traditional - Amazing Grace.txt"), "[G]Amazing [C]grace").unwrap();
        std::fs::write(dir.path().join("Be Thou My Vision.cho"), "[D]Be thou my vision").unwrap();
        dir
    }

    fn listing(dir: &Path, search: Option<&str>) -> Result<String> {
        let mut out = Vec::new();
        list_library(&mut out, dir, search)?;
        Ok(String::from_utf8(out).unwrap())
    }

    #[test]
    fn test_list_library_shows_every_entry() {
        let dir = sample_library();
        assert_eq!(
            listing(dir.path(), None).unwrap(),
            "Amazing Grace - Traditional (2 chords)\nBe Thou My Vision (1 chords)\n"
        );
    }

    #[test]
    fn test_list_library_filters_by_search() {
        let dir = sample_library();
        assert_eq!(
            listing(dir.path(), Some(" vision ")).unwrap(),
            "Be Thou My Vision (1 chords)\n"
        );
        assert_eq!(listing(dir.path(), Some("zzzz")).unwrap(), "");
    }

    #[test]
    fn test_list_library_rejects_blank_search() {
        let dir = sample_library();
        let err = listing(dir.path(), Some("  ")).unwrap_err();
        assert!(format!("{err:#}").contains("Please enter a search term."));
    }

    #[test]
    fn test_version_comes_from_package_metadata() {
        let parsed = args(&["--version"]).unwrap();
        assert!(parsed.version);
        assert!(parsed.paths.is_empty());
        assert_eq!(version_line(), format!("chordsheet {}", env!("CARGO_PKG_VERSION")));
    }

    #[test]
    fn test_flags_must_match_path_kind() {
        let render = args(&["x"]).unwrap();
        assert!(check_target(true, &render).is_ok());
        assert!(check_target(false, &render).is_ok());

        let json = args(&["--json", "x"]).unwrap();
        assert!(check_target(true, &json).is_err());
        assert!(check_target(false, &json).is_ok());

        let search = args(&["--search", "grace", "x"]).unwrap();
        assert!(check_target(true, &search).is_ok());
        let err = check_target(false, &search).unwrap_err();
        assert!(err.to_string().contains("--search applies to library directories"));
    }

    #[test]
    fn test_print_sheet_rejects_oversized_content() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("long.txt");
        std::fs::write(&path, "[C]la la la").unwrap();
        let err = print_sheet(&path, OutputFormat::Tokens, 3).unwrap_err();
        assert!(format!("{err:#}").contains("Content must be 3 characters or less"));
    }
}
