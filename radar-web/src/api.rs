use async_trait::async_trait;
use radar_ui::Artist;
use serde::Deserialize;
use serde_json::Value;
use std::collections::HashSet;
use thiserror::Error;
use tracing::{debug, warn};

use crate::config::ApiConfig;

/// Errors from fetching or decoding the artist list
#[derive(Error, Debug)]
pub enum ApiError {
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),
    #[error("Parse error: {0}")]
    Decode(#[from] serde_json::Error),
    #[error("Unexpected response shape: {0}")]
    Shape(String),
}

/// Artist record as served by `/api/artists`
#[derive(Deserialize, Debug)]
struct ArtistRecord {
    artist_id: WireId,
    name: String,
}

/// Backends hand out ids as strings or bare numbers
#[derive(Deserialize, Debug)]
#[serde(untagged)]
enum WireId {
    Text(String),
    Number(serde_json::Number),
}

impl WireId {
    fn into_string(self) -> String {
        match self {
            WireId::Text(s) => s,
            WireId::Number(n) => number_to_id(&n),
        }
    }
}

/// Render a numeric id the way a browser would print it: integral floats
/// drop their fraction (`7.0` -> `7`, `1e3` -> `1000`).
fn number_to_id(n: &serde_json::Number) -> String {
    if n.is_i64() || n.is_u64() {
        return n.to_string();
    }
    match n.as_f64() {
        Some(f) if f.is_finite() && f.fract() == 0.0 && f.abs() < 1e21 => format!("{f:.0}"),
        _ => n.to_string(),
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

/// Decode an `/api/artists` response body.
///
/// The body must be a JSON array or the whole load fails. Inside the array,
/// records without a usable `artist_id` or `name` are skipped, as are
/// records repeating an id already seen. Order is preserved.
pub fn parse_artists(body: &[u8]) -> Result<Vec<Artist>, ApiError> {
    let value: Value = serde_json::from_slice(body)?;

    let items = match value {
        Value::Array(items) => items,
        other => {
            return Err(ApiError::Shape(format!(
                "expected an array, got {}",
                json_kind(&other)
            )))
        }
    };

    let mut seen = HashSet::with_capacity(items.len());
    let mut artists = Vec::with_capacity(items.len());

    for (index, item) in items.into_iter().enumerate() {
        let record: ArtistRecord = match serde_json::from_value(item) {
            Ok(record) => record,
            Err(e) => {
                warn!("Skipping artist record {index}: {e}");
                continue;
            }
        };

        let id = record.artist_id.into_string();
        if !seen.insert(id.clone()) {
            warn!("Skipping artist record {index}: duplicate artist_id {id}");
            continue;
        }

        artists.push(Artist {
            id,
            name: record.name,
        });
    }

    Ok(artists)
}

/// Where the dashboard gets its artists from
#[async_trait(?Send)]
pub trait ArtistSource {
    async fn fetch_artists(&self) -> Result<Vec<Artist>, ApiError>;
}

/// Artist source backed by the HTTP API
#[derive(Clone, Debug)]
pub struct HttpArtistSource {
    client: reqwest::Client,
    url: String,
}

impl HttpArtistSource {
    pub fn new(config: &ApiConfig) -> Self {
        Self {
            client: reqwest::Client::new(),
            url: config.artists_url(),
        }
    }

    pub fn url(&self) -> &str {
        &self.url
    }
}

#[async_trait(?Send)]
impl ArtistSource for HttpArtistSource {
    /// Fetch the artist list.
    ///
    /// The status code is not checked; whatever body comes back goes
    /// through the parser, which rejects anything that isn't an array.
    async fn fetch_artists(&self) -> Result<Vec<Artist>, ApiError> {
        debug!("GET {}", self.url);
        let resp = self.client.get(&self.url).send().await?;
        debug!("{} responded {}", self.url, resp.status());
        let body = resp.bytes().await?;
        parse_artists(&body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_string_ids_in_order() {
        let body = br#"[{"artist_id":"a1","name":"Alice"},{"artist_id":"a2","name":"Bob"}]"#;
        let artists = parse_artists(body).unwrap();
        assert_eq!(
            artists,
            vec![Artist::new("a1", "Alice"), Artist::new("a2", "Bob")]
        );
    }

    #[test]
    fn numeric_ids_are_stringified() {
        let body = br#"[{"artist_id":7,"name":"Seven"}]"#;
        let artists = parse_artists(body).unwrap();
        assert_eq!(artists, vec![Artist::new("7", "Seven")]);
    }

    #[test]
    fn integral_float_ids_drop_fraction() {
        let body = br#"[
            {"artist_id":7.0,"name":"Seven"},
            {"artist_id":1e3,"name":"Thousand"},
            {"artist_id":-2.0,"name":"Minus Two"},
            {"artist_id":1.5,"name":"One And A Half"}
        ]"#;
        let ids: Vec<String> = parse_artists(body)
            .unwrap()
            .into_iter()
            .map(|a| a.id)
            .collect();
        assert_eq!(ids, vec!["7", "1000", "-2", "1.5"]);
    }

    #[test]
    fn extra_fields_are_ignored() {
        let body = br#"[{"artist_id":"a1","name":"Alice","genre":"pop","followers":10}]"#;
        assert_eq!(parse_artists(body).unwrap().len(), 1);
    }

    #[test]
    fn empty_array_is_ok() {
        assert!(parse_artists(b"[]").unwrap().is_empty());
    }

    #[test]
    fn invalid_json_is_decode_error() {
        let err = parse_artists(b"<html>502 Bad Gateway</html>").unwrap_err();
        assert!(matches!(err, ApiError::Decode(_)));
    }

    #[test]
    fn non_array_is_shape_error() {
        let err = parse_artists(br#"{"detail":"Internal Server Error"}"#).unwrap_err();
        match err {
            ApiError::Shape(msg) => assert!(msg.contains("an object")),
            other => panic!("expected shape error, got {other:?}"),
        }
    }

    #[test]
    fn incomplete_records_are_dropped() {
        let body = br#"[
            {"artist_id":"a1","name":"Alice"},
            {"name":"No Id"},
            {"artist_id":"a3"},
            {"artist_id":null,"name":"Null Id"},
            {"artist_id":["x"],"name":"List Id"},
            "not an object",
            {"artist_id":"a2","name":"Bob"}
        ]"#;
        let artists = parse_artists(body).unwrap();
        assert_eq!(
            artists,
            vec![Artist::new("a1", "Alice"), Artist::new("a2", "Bob")]
        );
    }

    #[test]
    fn duplicate_ids_keep_first() {
        let body = br#"[
            {"artist_id":"a1","name":"Alice"},
            {"artist_id":"a1","name":"Alice Again"},
            {"artist_id":1,"name":"One"},
            {"artist_id":"1","name":"One As Text"}
        ]"#;
        let artists = parse_artists(body).unwrap();
        assert_eq!(
            artists,
            vec![Artist::new("a1", "Alice"), Artist::new("1", "One")]
        );
    }

    #[test]
    fn source_uses_configured_url() {
        let source = HttpArtistSource::new(&ApiConfig::new("http://localhost:8000/"));
        assert_eq!(source.url(), "http://localhost:8000/api/artists");
    }

    /// Serve a single canned HTTP response, returning the base URL and the
    /// request line the server saw.
    async fn serve_once(
        status: &'static str,
        body: &'static str,
    ) -> (String, tokio::sync::oneshot::Receiver<String>) {
        use tokio::io::{AsyncReadExt, AsyncWriteExt};

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        let (seen_tx, seen_rx) = tokio::sync::oneshot::channel();

        tokio::spawn(async move {
            let (mut socket, _) = listener.accept().await.unwrap();
            let mut buf = vec![0u8; 4096];
            let n = socket.read(&mut buf).await.unwrap();
            let request = String::from_utf8_lossy(&buf[..n]);
            let request_line = request.lines().next().unwrap_or_default().to_string();
            let _ = seen_tx.send(request_line);

            let response = format!(
                "HTTP/1.1 {status}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
                body.len()
            );
            socket.write_all(response.as_bytes()).await.unwrap();
            let _ = socket.shutdown().await;
        });

        (format!("http://{addr}"), seen_rx)
    }

    #[tokio::test]
    async fn fetch_requests_artist_endpoint() {
        let (base, seen) = serve_once("200 OK", r#"[{"artist_id":"a1","name":"Alice"}]"#).await;
        let source = HttpArtistSource::new(&ApiConfig::new(base));

        let artists = source.fetch_artists().await.unwrap();

        assert_eq!(artists, vec![Artist::new("a1", "Alice")]);
        assert_eq!(seen.await.unwrap(), "GET /api/artists HTTP/1.1");
    }

    #[tokio::test]
    async fn error_status_body_is_still_parsed() {
        let (base, _seen) = serve_once(
            "500 Internal Server Error",
            r#"[{"artist_id":"a1","name":"Alice"}]"#,
        )
        .await;
        let source = HttpArtistSource::new(&ApiConfig::new(base));

        let artists = source.fetch_artists().await.unwrap();

        assert_eq!(artists, vec![Artist::new("a1", "Alice")]);
    }

    #[tokio::test]
    async fn error_status_with_non_json_body_is_decode_error() {
        let (base, _seen) = serve_once("502 Bad Gateway", "<html>Bad Gateway</html>").await;
        let source = HttpArtistSource::new(&ApiConfig::new(base));

        let err = source.fetch_artists().await.unwrap_err();

        assert!(matches!(err, ApiError::Decode(_)));
    }

    #[tokio::test]
    async fn unreachable_backend_is_network_error() {
        // Bind then drop to get a port nothing is listening on.
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);
        let source = HttpArtistSource::new(&ApiConfig::new(format!("http://{addr}")));

        let err = source.fetch_artists().await.unwrap_err();

        assert!(matches!(err, ApiError::Network(_)));
    }
}
