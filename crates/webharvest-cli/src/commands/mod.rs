mod checksum;
mod download;
mod eval;
mod run;
mod tables;

use anyhow::Result;
use tracing::warn;
use webharvest::Session;

use crate::cli::{Cli, Command};

pub async fn dispatch(cli: Cli) -> Result<()> {
    let mut session = Session::new(cli.browser.name()).with_webdriver_url(&cli.webdriver_url);
    session.set_headless(!cli.headed);

    match cli.command {
        Command::Tables { url, out } => tables::execute(&session, &url, out.as_deref()).await,
        Command::Eval {
            url,
            expression,
            out,
        } => eval::execute(&session, &url, &expression, out.as_deref()).await,
        Command::Download { url, dest } => download::execute(&url, &dest).await,
        Command::Checksum { path } => checksum::execute(&path),
        Command::Run { command } => run::execute(&command).await,
    }
}

/// The command's own outcome wins; a close failure on top of it is logged,
/// not propagated.
fn finish<T>(result: webharvest::Result<T>, close: webharvest::Result<()>) -> Result<T> {
    if let Err(err) = close {
        warn!(error = %err, "could not close browser session");
    }
    Ok(result?)
}
