use anyhow::{bail, Result};
use webharvest::run_shell_command;

pub async fn execute(command: &str) -> Result<()> {
    match run_shell_command(command).await {
        Some(stdout) => {
            print!("{stdout}");
            Ok(())
        }
        None => bail!("command did not run: {command}"),
    }
}
