//! HTTP file download.

use std::fs;
use std::io::Write;
use std::path::Path;

use tracing::{error, info};

use crate::error::Result;
use crate::persist::ensure_path_exists;

/// Fetch `url` and write the body at `dest`, creating parent directories.
///
/// Returns `true` on success. Any transport or IO failure is logged at
/// error severity and yields `false`; this never propagates to the caller.
pub async fn download_file(url: &str, dest: impl AsRef<Path>) -> bool {
    let dest = dest.as_ref();
    match fetch_to_file(url, dest).await {
        Ok(bytes) => {
            info!(%url, bytes, dest = %dest.display(), "downloaded file");
            true
        }
        Err(e) => {
            error!(%url, dest = %dest.display(), error = %e, "download failed");
            false
        }
    }
}

async fn fetch_to_file(url: &str, dest: &Path) -> Result<u64> {
    if let Some(parent) = dest.parent() {
        if !parent.as_os_str().is_empty() {
            ensure_path_exists(parent)?;
        }
    }
    let mut response = reqwest::get(url).await?.error_for_status()?;
    // Chunked writes keep memory flat however large the payload is.
    let mut file = fs::File::create(dest)?;
    let mut written = 0u64;
    while let Some(chunk) = response.chunk().await? {
        file.write_all(&chunk)?;
        written += chunk.len() as u64;
    }
    Ok(written)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn writes_body_to_destination() {
        use std::io::Read;
        use std::net::TcpListener;

        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        let addr = listener.local_addr().unwrap();
        let server = std::thread::spawn(move || {
            let (mut stream, _) = listener.accept().unwrap();
            let mut buf = [0u8; 1024];
            let _ = stream.read(&mut buf);
            stream
                .write_all(
                    b"HTTP/1.1 200 OK\r\nContent-Length: 11\r\nConnection: close\r\n\r\nhello bytes",
                )
                .unwrap();
        });

        let dir = tempfile::tempdir().unwrap();
        let dest = dir.path().join("nested").join("out.txt");
        let ok = download_file(&format!("http://{addr}/file"), &dest).await;
        server.join().unwrap();
        assert!(ok);
        assert_eq!(fs::read(&dest).unwrap(), b"hello bytes");
    }

    #[tokio::test]
    async fn unreachable_host_returns_false() {
        let dir = tempfile::tempdir().unwrap();
        let dest = dir.path().join("out.bin");
        // Port 1 on loopback refuses immediately.
        let ok = download_file("http://127.0.0.1:1/file", &dest).await;
        assert!(!ok);
        assert!(!dest.exists());
    }

    #[tokio::test]
    async fn invalid_url_returns_false() {
        let dir = tempfile::tempdir().unwrap();
        let ok = download_file("not a url", dir.path().join("out.bin")).await;
        assert!(!ok);
    }
}
