use reqwest::blocking::{Client, RequestBuilder};
use std::time::Duration;

use crate::types::{Category, CategoryPayload};

const TIMEOUT_SECS: u64 = 10;

/// Blocking client for the category collection. Cheap to clone; clones share
/// the underlying connection pool.
#[derive(Clone)]
pub struct StoreClient {
    client: Client,
    base_url: String,
}

impl StoreClient {
    pub fn new(base_url: String) -> Self {
        let client = Client::builder()
            .timeout(Duration::from_secs(TIMEOUT_SECS))
            .build()
            .expect("failed to build reqwest client");
        // Tolerate a configured base with a trailing slash
        let base_url = base_url.trim_end_matches('/').to_string();
        Self { client, base_url }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Fetch every category. Sends Cache-Control: no-cache so intermediate
    /// caches cannot serve an outdated list.
    pub fn list(&self) -> Result<Vec<Category>, String> {
        let url = format!("{}/category", self.base_url);
        let body = send_checked(
            self.client
                .get(&url)
                .header("Accept", "application/json")
                .header("Cache-Control", "no-cache"),
        )?;
        serde_json::from_str(&body).map_err(|e| format!("Failed to parse category list: {}", e))
    }

    /// Create a category. The store assigns the id.
    pub fn create(&self, payload: &CategoryPayload) -> Result<(), String> {
        let url = format!("{}/category", self.base_url);
        send_checked(self.client.post(&url).json(payload)).map(|_| ())
    }

    /// Replace the name and order of the category with the given id.
    pub fn update(&self, id: &str, payload: &CategoryPayload) -> Result<(), String> {
        let url = format!("{}/category/{}", self.base_url, id);
        send_checked(self.client.put(&url).json(payload)).map(|_| ())
    }

    /// Delete the category with the given id.
    pub fn delete(&self, id: &str) -> Result<(), String> {
        let url = format!("{}/category/{}", self.base_url, id);
        send_checked(self.client.delete(&url)).map(|_| ())
    }
}

/// Send the request and check the response status: 2xx yields the body,
/// anything else a descriptive error.
fn send_checked(request: RequestBuilder) -> Result<String, String> {
    let resp = request.send().map_err(|e| format!("Request failed: {}", e))?;
    let status = resp.status().as_u16();
    let body = resp.text().map_err(|e| format!("Failed to read response: {}", e))?;

    match status {
        200..=299 => Ok(body),
        404 => Err(format!("Not found (404): {}", truncate(&body, 200))),
        _ => Err(format!("HTTP {} error: {}", status, truncate(&body, 200))),
    }
}

fn truncate(s: &str, max: usize) -> &str {
    if s.len() <= max {
        return s;
    }
    let mut end = max;
    while !s.is_char_boundary(end) {
        end -= 1;
    }
    &s[..end]
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::{Read, Write};
    use std::net::TcpListener;
    use std::thread;

    /// Serve exactly one request on an ephemeral port. Returns the base URL
    /// to point the client at and a handle yielding the raw request text.
    fn serve_once(status: &'static str, body: &'static str) -> (String, thread::JoinHandle<String>) {
        let listener = TcpListener::bind("127.0.0.1:0").expect("bind fixture listener");
        let addr = listener.local_addr().expect("fixture addr");

        let handle = thread::spawn(move || {
            let (mut stream, _) = listener.accept().expect("accept connection");
            let mut raw = Vec::new();
            let mut buf = [0u8; 8192];
            loop {
                let n = stream.read(&mut buf).expect("read request");
                if n == 0 {
                    break;
                }
                raw.extend_from_slice(&buf[..n]);
                if request_complete(&raw) {
                    break;
                }
            }
            let response = format!(
                "HTTP/1.1 {}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
                status,
                body.len(),
                body
            );
            stream.write_all(response.as_bytes()).expect("write response");
            String::from_utf8_lossy(&raw).into_owned()
        });

        (format!("http://{}", addr), handle)
    }

    /// Headers ended and any Content-Length worth of body has arrived.
    fn request_complete(raw: &[u8]) -> bool {
        let text = String::from_utf8_lossy(raw);
        let Some(head_end) = text.find("\r\n\r\n") else {
            return false;
        };
        let body_len = text[..head_end]
            .lines()
            .filter_map(|line| {
                let (name, value) = line.split_once(':')?;
                if name.eq_ignore_ascii_case("content-length") { value.trim().parse::<usize>().ok() } else { None }
            })
            .next()
            .unwrap_or(0);
        raw.len() >= head_end + 4 + body_len
    }

    /// Split a raw request into (lowercased head, body as sent).
    fn split_request(raw: &str) -> (String, String) {
        match raw.split_once("\r\n\r\n") {
            Some((head, body)) => (head.to_ascii_lowercase(), body.to_string()),
            None => (raw.to_ascii_lowercase(), String::new()),
        }
    }

    #[test]
    fn list_fetches_and_parses_rows() {
        let (base, handle) = serve_once("200 OK", r#"[{"_id":"a1","name":"Shoes","order":3},{"_id":"b2","name":"Hats"}]"#);
        let client = StoreClient::new(base);

        let rows = client.list().expect("list should succeed");
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].id, "a1");
        assert_eq!(rows[1].order, None);

        let (head, _) = split_request(&handle.join().unwrap());
        assert!(head.starts_with("get /category http/1.1"), "request line was: {}", head.lines().next().unwrap_or(""));
        assert!(head.contains("cache-control: no-cache"));
    }

    #[test]
    fn trailing_slash_base_joins_cleanly() {
        let (base, handle) = serve_once("200 OK", "[]");
        let client = StoreClient::new(format!("{}/", base));

        client.list().expect("list should succeed");

        let (head, _) = split_request(&handle.join().unwrap());
        assert!(head.starts_with("get /category http/1.1"));
    }

    #[test]
    fn create_posts_payload_json() {
        let (base, handle) = serve_once("201 Created", "{}");
        let client = StoreClient::new(base);
        let payload = CategoryPayload { name: "Shoes".to_string(), order: 3 };

        client.create(&payload).expect("create should succeed");

        let (head, body) = split_request(&handle.join().unwrap());
        assert!(head.starts_with("post /category http/1.1"));
        assert!(head.contains("content-type: application/json"));
        let sent: serde_json::Value = serde_json::from_str(&body).expect("body should be json");
        assert_eq!(sent, serde_json::json!({"name": "Shoes", "order": 3}));
    }

    #[test]
    fn update_puts_to_id_path() {
        let (base, handle) = serve_once("200 OK", "{}");
        let client = StoreClient::new(base);
        let payload = CategoryPayload { name: "Boots".to_string(), order: 7 };

        client.update("a1", &payload).expect("update should succeed");

        let (head, body) = split_request(&handle.join().unwrap());
        assert!(head.starts_with("put /category/a1 http/1.1"));
        let sent: serde_json::Value = serde_json::from_str(&body).expect("body should be json");
        assert_eq!(sent, serde_json::json!({"name": "Boots", "order": 7}));
    }

    #[test]
    fn delete_targets_id_path() {
        let (base, handle) = serve_once("200 OK", "{}");
        let client = StoreClient::new(base);

        client.delete("b2").expect("delete should succeed");

        let (head, _) = split_request(&handle.join().unwrap());
        assert!(head.starts_with("delete /category/b2 http/1.1"));
    }

    #[test]
    fn server_error_maps_to_descriptive_err() {
        let (base, handle) = serve_once("500 Internal Server Error", r#"{"error":"boom"}"#);
        let client = StoreClient::new(base);

        let err = client.list().expect_err("500 must not be silent");
        assert!(err.contains("HTTP 500"), "got: {}", err);
        assert!(err.contains("boom"));
        handle.join().unwrap();
    }

    #[test]
    fn missing_record_maps_to_not_found() {
        let (base, handle) = serve_once("404 Not Found", r#"{"error":"no such category"}"#);
        let client = StoreClient::new(base);

        let err = client.delete("gone").expect_err("404 must not be silent");
        assert!(err.contains("Not found (404)"), "got: {}", err);
        handle.join().unwrap();
    }

    #[test]
    fn malformed_list_body_is_an_error() {
        let (base, handle) = serve_once("200 OK", "not json at all");
        let client = StoreClient::new(base);

        let err = client.list().expect_err("garbage body must not parse");
        assert!(err.contains("Failed to parse category list"), "got: {}", err);
        handle.join().unwrap();
    }

    #[test]
    fn truncate_respects_char_boundaries() {
        assert_eq!(truncate("short", 200), "short");
        // 'é' is two bytes; cutting at byte 1 would split it
        let s = "é".repeat(10);
        let cut = truncate(&s, 3);
        assert_eq!(cut, "é");
        assert!(cut.len() <= 3);
    }
}
