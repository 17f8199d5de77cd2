use std::path::Path;

use anyhow::{bail, Result};
use webharvest::download_file;

pub async fn execute(url: &str, dest: &Path) -> Result<()> {
    if !download_file(url, dest).await {
        bail!("download failed: {url}");
    }
    println!("wrote {}", dest.display());
    Ok(())
}
