use std::path::Path;

use anyhow::Result;
use tracing::{debug, info};
use webharvest::{save_json, Session};

pub async fn execute(
    session: &Session,
    url: &str,
    expression: &str,
    out: Option<&Path>,
) -> Result<()> {
    info!(%url, browser = %session.backend(), "evaluating expression");
    debug!(%expression, "expression");

    let handle = session.open().await?;
    let result = async {
        handle.goto(url).await?;
        handle.eval_json(expression).await
    }
    .await;
    let value = super::finish(result, handle.close().await)?;

    match out {
        Some(path) => {
            save_json(&value, path)?;
            println!("wrote {}", path.display());
        }
        None => println!("{}", serde_json::to_string_pretty(&value)?),
    }
    Ok(())
}
