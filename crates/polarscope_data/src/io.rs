//! Loading review tables from files and URLs.

use std::io::Read;
use std::path::Path;

use crate::error::{DataError, Result};
use crate::table::{parse_table, RowTable};

/// Read a review table from a local CSV file.
pub fn read_table<P: AsRef<Path>>(path: P) -> Result<RowTable> {
    let path = path.as_ref();
    tracing::debug!("Reading review table from {}", path.display());
    let text = std::fs::read_to_string(path)?;
    parse_table(&text)
}

/// Fetch a review table over HTTP.
///
/// A single GET is issued. Any transport error or non-200 status fails the
/// load; there is no retry and no partial table.
pub fn fetch_table(url: &str) -> Result<RowTable> {
    tracing::debug!("Fetching review table from {}", url);

    let response = ureq::get(url)
        .call()
        .map_err(|e| DataError::Download(format!("Failed to download {}: {}", url, e)))?;

    if response.status() != 200 {
        return Err(DataError::Download(format!(
            "HTTP {} for {}",
            response.status(),
            url
        )));
    }

    let mut text = String::new();
    response
        .into_reader()
        .read_to_string(&mut text)
        .map_err(|e| DataError::Download(format!("Failed to read body of {}: {}", url, e)))?;

    parse_table(&text)
}

/// Load a review table from a path or an `http(s)://` URL.
pub fn load_table(source: &str) -> Result<RowTable> {
    if is_url(source) {
        fetch_table(source)
    } else {
        read_table(source)
    }
}

fn is_url(source: &str) -> bool {
    source.starts_with("http://") || source.starts_with("https://")
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use std::net::TcpListener;

    #[test]
    fn test_is_url() {
        assert!(is_url("https://example.org/reviews.csv"));
        assert!(is_url("http://localhost:8000/reviews.csv"));
        assert!(!is_url("reviews.csv"));
        assert!(!is_url("/data/http/reviews.csv"));
    }

    #[test]
    fn test_read_table_roundtrip() {
        let path = std::env::temp_dir().join(format!(
            "polarscope_read_table_{}.csv",
            std::process::id()
        ));
        std::fs::write(&path, "text,polarity,m_sentiment_code\nok,2,2\nno,1,2\n").unwrap();

        let table = load_table(path.to_str().unwrap()).unwrap();
        assert_eq!(table.len(), 2);

        let _ = std::fs::remove_file(&path);
    }

    #[test]
    fn test_read_table_missing_file() {
        let result = read_table("/definitely/not/here/reviews.csv");
        assert!(matches!(result, Err(DataError::IoError(_))));
    }

    #[test]
    fn test_fetch_table_connection_refused() {
        // Bind to learn a free port, then close it so nothing is listening.
        let port = TcpListener::bind("127.0.0.1:0")
            .unwrap()
            .local_addr()
            .unwrap()
            .port();
        let result = fetch_table(&format!("http://127.0.0.1:{}/reviews.csv", port));
        assert!(matches!(result, Err(DataError::Download(_))));
    }

    #[test]
    fn test_fetch_table_http_error_status() {
        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        let port = listener.local_addr().unwrap().port();
        let server = std::thread::spawn(move || {
            let (mut stream, _) = listener.accept().unwrap();
            let mut buf = [0u8; 1024];
            let _ = stream.read(&mut buf);
            stream
                .write_all(b"HTTP/1.1 404 Not Found\r\nContent-Length: 0\r\nConnection: close\r\n\r\n")
                .unwrap();
        });

        let result = fetch_table(&format!("http://127.0.0.1:{}/reviews.csv", port));
        assert!(matches!(result, Err(DataError::Download(_))));
        server.join().unwrap();
    }
}
