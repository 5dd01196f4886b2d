//! Command-line argument parsing
//!
//! Flags mirror the config file; anything given here wins over it.

use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::{Path, PathBuf};

use clap::{ArgAction, Parser};

use crate::config::ViewerConfig;
use crate::error::ViewerError;
use crate::table::SessionOptions;

/// View delimiter-separated text as a scrollable table
#[derive(Parser, Debug)]
#[command(name = "tabless", version, about = "View delimiter-separated text as a table")]
pub struct CliArgs {
    /// File to view; `-` or nothing reads standard input
    #[arg(value_name = "FILE")]
    pub file: Option<PathBuf>,

    /// Column delimiter (`\t` is accepted for a tab)
    #[arg(short = 'd', value_name = "DELIM")]
    pub delimiter: Option<String>,

    /// Draw borders (`-b=false` to turn them off)
    #[arg(
        short = 'b',
        value_name = "BOOL",
        num_args = 0..=1,
        require_equals = true,
        default_missing_value = "true",
        action = ArgAction::Set
    )]
    pub borders: Option<bool>,

    /// Number of fixed header columns
    #[arg(short = 'c', value_name = "N")]
    pub fixed_cols: Option<usize>,

    /// Number of fixed header rows
    #[arg(short = 'r', value_name = "N")]
    pub fixed_rows: Option<usize>,

    /// Extra screens of rows to read ahead of the viewport
    #[arg(short = 'a', value_name = "PAGES")]
    pub read_ahead: Option<usize>,
}

/// Where rows come from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputSource {
    Stdin,
    File(PathBuf),
}

/// Configuration derived from CLI arguments and the config file
#[derive(Debug, Clone)]
pub struct StartupConfig {
    pub input: InputSource,
    pub session: SessionOptions,
    pub borders: bool,
    pub read_ahead_pages: usize,
}

impl CliArgs {
    /// Whether to print usage instead of starting
    ///
    /// Reading an interactive terminal as table data is never what was meant.
    pub fn wants_usage(&self, stdin_is_terminal: bool) -> bool {
        self.file.is_none() && stdin_is_terminal
    }

    /// Merge the parsed flags over `defaults`
    pub fn into_config(self, defaults: ViewerConfig) -> Result<StartupConfig, ViewerError> {
        let delimiter = unescape_delimiter(self.delimiter.as_deref().unwrap_or(&defaults.delimiter));
        if delimiter.is_empty() {
            return Err(ViewerError::EmptyDelimiter);
        }

        let input = match self.file {
            Some(path) if path.as_path() != Path::new("-") => InputSource::File(path),
            _ => InputSource::Stdin,
        };

        Ok(StartupConfig {
            input,
            session: SessionOptions {
                delimiter,
                fixed_rows: self.fixed_rows.unwrap_or(defaults.fixed_rows),
                fixed_cols: self.fixed_cols.unwrap_or(defaults.fixed_cols),
            },
            borders: self.borders.unwrap_or(defaults.borders),
            read_ahead_pages: self.read_ahead.unwrap_or(defaults.read_ahead_pages),
        })
    }
}

impl InputSource {
    /// Open the input for the scanner
    ///
    /// Dropping the returned reader closes the underlying descriptor, so a
    /// producer piping into us sees the pipe close once the scan ends or is
    /// cancelled.
    pub fn open(&self) -> Result<Box<dyn BufRead + Send>, ViewerError> {
        match self {
            InputSource::Stdin => Ok(stdin_reader()),
            InputSource::File(path) => {
                let file = File::open(path).map_err(|source| ViewerError::OpenInput {
                    path: path.clone(),
                    source,
                })?;
                Ok(Box::new(BufReader::new(file)))
            }
        }
    }
}

/// Piped stdin is read through a `File` that owns descriptor 0; `Stdin`
/// would never close it
#[cfg(unix)]
fn stdin_reader() -> Box<dyn BufRead + Send> {
    use std::io::IsTerminal;
    use std::os::fd::{AsRawFd, FromRawFd, OwnedFd};

    let stdin = io::stdin();
    if stdin.is_terminal() {
        // Shared with the keyboard reader; leave it open
        return Box::new(BufReader::new(stdin));
    }
    // SAFETY: descriptor 0 is open, and nothing else in the process reads
    // or closes it once the scanner owns it. Keys come from the controlling
    // terminal when stdin is not one.
    let fd = unsafe { OwnedFd::from_raw_fd(stdin.as_raw_fd()) };
    Box::new(BufReader::new(File::from(fd)))
}

#[cfg(not(unix))]
fn stdin_reader() -> Box<dyn BufRead + Send> {
    Box::new(BufReader::new(io::stdin()))
}

/// Shells make a literal tab awkward to type, so accept `\t`
fn unescape_delimiter(raw: &str) -> String {
    raw.replace("\\t", "\t")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> StartupConfig {
        let mut argv = vec!["tabless"];
        argv.extend_from_slice(args);
        CliArgs::parse_from(argv)
            .into_config(ViewerConfig::default())
            .unwrap()
    }

    #[test]
    fn test_defaults() {
        let config = parse(&[]);
        assert_eq!(config.input, InputSource::Stdin);
        assert_eq!(config.session.delimiter, "\t");
        assert_eq!(config.session.fixed_rows, 1);
        assert_eq!(config.session.fixed_cols, 0);
        assert!(config.borders);
        assert_eq!(config.read_ahead_pages, 1);
    }

    #[test]
    fn test_dash_is_stdin() {
        assert_eq!(parse(&["-"]).input, InputSource::Stdin);
        assert_eq!(
            parse(&["data.tsv"]).input,
            InputSource::File(PathBuf::from("data.tsv"))
        );
    }

    #[test]
    fn test_flags_override() {
        let config = parse(&["-d", ",", "-b=false", "-c", "2", "-r", "0", "-a", "3", "x.csv"]);
        assert_eq!(config.session.delimiter, ",");
        assert!(!config.borders);
        assert_eq!(config.session.fixed_cols, 2);
        assert_eq!(config.session.fixed_rows, 0);
        assert_eq!(config.read_ahead_pages, 3);
        assert_eq!(config.input, InputSource::File(PathBuf::from("x.csv")));
    }

    #[test]
    fn test_bare_border_flag_means_true() {
        let args = CliArgs::parse_from(["tabless", "-b", "file.tsv"]);
        assert_eq!(args.borders, Some(true));
        assert_eq!(args.file, Some(PathBuf::from("file.tsv")));
    }

    #[test]
    fn test_escaped_tab_delimiter() {
        assert_eq!(parse(&["-d", "\\t"]).session.delimiter, "\t");
        assert_eq!(parse(&["-d", "::"]).session.delimiter, "::");
    }

    #[test]
    fn test_empty_delimiter_is_rejected() {
        let args = CliArgs::parse_from(["tabless", "-d", ""]);
        assert!(matches!(
            args.into_config(ViewerConfig::default()),
            Err(ViewerError::EmptyDelimiter)
        ));
    }

    #[test]
    fn test_config_file_values_used_when_flag_absent() {
        let defaults = ViewerConfig {
            delimiter: "|".to_string(),
            borders: false,
            fixed_rows: 2,
            fixed_cols: 1,
            read_ahead_pages: 0,
        };
        let config = CliArgs::parse_from(["tabless", "-r", "5"])
            .into_config(defaults)
            .unwrap();
        assert_eq!(config.session.delimiter, "|");
        assert!(!config.borders);
        assert_eq!(config.session.fixed_rows, 5);
        assert_eq!(config.session.fixed_cols, 1);
        assert_eq!(config.read_ahead_pages, 0);
    }

    #[test]
    fn test_open_missing_file() {
        let source = InputSource::File(PathBuf::from("/definitely/not/here.tsv"));
        match source.open() {
            Err(ViewerError::OpenInput { path, .. }) => {
                assert_eq!(path, PathBuf::from("/definitely/not/here.tsv"))
            }
            Err(other) => panic!("unexpected error: {other}"),
            Ok(_) => panic!("opened a missing file"),
        }
    }

    #[test]
    fn test_open_file_reads_lines() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        std::io::Write::write_all(&mut file, b"a\tb\n").unwrap();
        let mut reader = InputSource::File(file.path().to_path_buf()).open().unwrap();
        let mut line = String::new();
        reader.read_line(&mut line).unwrap();
        assert_eq!(line, "a\tb\n");
    }

    #[test]
    fn test_usage_only_for_interactive_stdin() {
        let bare = CliArgs::parse_from(["tabless"]);
        assert!(bare.wants_usage(true));
        assert!(!bare.wants_usage(false));
        let dash = CliArgs::parse_from(["tabless", "-"]);
        assert!(!dash.wants_usage(true));
    }
}
