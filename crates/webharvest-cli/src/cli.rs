use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

/// Browser engine (CLI wrapper for the library's backend names).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum BrowserKind {
    Chrome,
    #[default]
    Firefox,
}

impl BrowserKind {
    pub fn name(self) -> &'static str {
        match self {
            BrowserKind::Chrome => "chrome",
            BrowserKind::Firefox => "firefox",
        }
    }
}

#[derive(Parser, Debug)]
#[command(name = "harvest")]
#[command(about = "Scraping helpers over a WebDriver browser session")]
#[command(version)]
pub struct Cli {
    /// Increase console verbosity (-v debug)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Browser engine to drive
    #[arg(short, long, global = true, value_enum, default_value = "firefox")]
    pub browser: BrowserKind,

    /// Keep the browser window visible instead of running headless
    #[arg(long, global = true)]
    pub headed: bool,

    /// WebDriver endpoint to connect through
    #[arg(long, global = true, value_name = "URL", default_value = webharvest::DEFAULT_WEBDRIVER_URL)]
    pub webdriver_url: String,

    /// Name of the log file written in the working directory
    #[arg(long, global = true, value_name = "NAME", default_value = "webharvest.log")]
    pub log_file: String,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Extract every HTML table on a page
    Tables {
        url: String,
        /// Write the first table as CSV here instead of printing
        #[arg(long, value_name = "PATH")]
        out: Option<PathBuf>,
    },
    /// Evaluate a JavaScript expression on a page and print the value as JSON
    Eval {
        url: String,
        expression: String,
        /// Write the value as a JSON file instead of printing
        #[arg(long, value_name = "PATH")]
        out: Option<PathBuf>,
    },
    /// Download a file over HTTP(S)
    Download { url: String, dest: PathBuf },
    /// Print the SHA-256 digest of a file
    Checksum { path: PathBuf },
    /// Run a command (whitespace-split, no shell) and print its output
    Run { command: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_tables_with_globals() {
        let cli = Cli::try_parse_from([
            "harvest",
            "--browser",
            "chrome",
            "--headed",
            "tables",
            "https://example.com",
        ])
        .unwrap();
        assert_eq!(cli.browser, BrowserKind::Chrome);
        assert!(cli.headed);
        assert!(matches!(cli.command, Command::Tables { ref url, out: None } if url == "https://example.com"));
    }

    #[test]
    fn defaults_to_headless_firefox() {
        let cli = Cli::try_parse_from(["harvest", "checksum", "file.bin"]).unwrap();
        assert_eq!(cli.browser, BrowserKind::Firefox);
        assert!(!cli.headed);
        assert_eq!(cli.webdriver_url, webharvest::DEFAULT_WEBDRIVER_URL);
    }

    #[test]
    fn eval_takes_expression_and_out() {
        let cli = Cli::try_parse_from([
            "harvest",
            "eval",
            "https://example.com",
            "window.__data",
            "--out",
            "dump.json",
        ])
        .unwrap();
        match cli.command {
            Command::Eval { expression, out, .. } => {
                assert_eq!(expression, "window.__data");
                assert_eq!(out.unwrap(), PathBuf::from("dump.json"));
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }
}
