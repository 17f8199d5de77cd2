//! WebDriver session facade with scraping helpers.
//!
//! The entry point is [`Session`]: pick a browser backend by name (unknown
//! names fall back to Firefox with a warning), toggle headless mode, then
//! [`Session::open`] a live [`SessionHandle`] against a local WebDriver
//! endpoint. Around the session sit stateless helpers: HTML table
//! extraction, JSON/CSV persistence, file download, checksum computation,
//! and shell-command execution.
//!
//! Logging is configured explicitly through [`LogConfig`] and
//! [`configure_logging`]; nothing here mutates global state behind the
//! caller's back.

pub mod backend;
pub mod checksum;
pub mod download;
pub mod error;
pub mod logging;
pub mod persist;
pub mod session;
pub mod shell;
pub mod tables;

pub use backend::Backend;
pub use checksum::compute_checksum;
pub use download::download_file;
pub use error::{HarvestError, Result};
pub use logging::{configure_logging, LogConfig, Severity};
pub use persist::{
    ensure_path_exists, load_csv, load_json, save_csv, save_json, CsvOptions,
};
pub use session::{Session, SessionHandle, DEFAULT_WEBDRIVER_URL};
pub use shell::run_shell_command;
pub use tables::{extract_tables, Table};
