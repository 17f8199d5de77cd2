use std::path::Path;

use anyhow::Result;
use tracing::info;
use webharvest::{save_csv, CsvOptions, Session};

pub async fn execute(session: &Session, url: &str, out: Option<&Path>) -> Result<()> {
    info!(%url, browser = %session.backend(), "extracting tables");

    let handle = session.open().await?;
    let result = async {
        handle.goto(url).await?;
        handle.extract_tables().await
    }
    .await;
    let tables = super::finish(result, handle.close().await)?;

    if tables.is_empty() {
        println!("no tables found");
        return Ok(());
    }

    match out {
        Some(path) => {
            if tables.len() > 1 {
                info!(count = tables.len(), "multiple tables found, writing the first");
            }
            save_csv(&tables[0], path, &CsvOptions::default())?;
            println!("wrote {} rows to {}", tables[0].rows.len(), path.display());
        }
        None => {
            for (i, table) in tables.iter().enumerate() {
                println!("# table {i}");
                if !table.headers.is_empty() {
                    println!("{}", table.headers.join("\t"));
                }
                for row in &table.rows {
                    println!("{}", row.join("\t"));
                }
            }
        }
    }
    Ok(())
}
