//! In-process HTTP stub standing in for the api host.

use std::sync::{Arc, Mutex};
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::{TcpListener, TcpStream};

const NOT_FOUND_BODY: &str = r#"{"status":{"message":"Not Found","status_code":404}}"#;

#[derive(Debug, Clone)]
pub struct Route {
    path: String,
    query: Option<String>,
    status: u16,
    body: String,
}

impl Route {
    pub fn json(path: &str, body: &str) -> Self {
        Self {
            path: path.to_string(),
            query: None,
            status: 200,
            body: body.to_string(),
        }
    }
    /// Only match when the query string contains `query`
    pub fn with_query(mut self, query: &str) -> Self {
        self.query = Some(query.to_string());
        self
    }
    pub fn with_status(mut self, status: u16) -> Self {
        self.status = status;
        self
    }
    fn matches(&self, target: &str) -> bool {
        let (path, query) = target.split_once('?').unwrap_or((target, ""));
        path == self.path
            && self
                .query
                .as_deref()
                .map_or(true, |wanted| query.split('&').any(|pair| pair == wanted))
    }
}

pub struct StubServer {
    pub host: String,
    requests: Arc<Mutex<Vec<String>>>,
}

impl StubServer {
    /// Request targets (path and query) received so far
    pub fn requests(&self) -> Vec<String> {
        self.requests.lock().unwrap().clone()
    }
}

/// Serve `routes` on an ephemeral local port. Routes are tried in order,
/// anything unmatched gets a 404 with the service's error body.
pub async fn serve(routes: Vec<Route>) -> StubServer {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let host = format!("http://{}", listener.local_addr().unwrap());
    let requests = Arc::new(Mutex::new(Vec::new()));

    let routes = Arc::new(routes);
    let seen = requests.clone();
    tokio::spawn(async move {
        while let Ok((socket, _)) = listener.accept().await {
            let routes = routes.clone();
            let seen = seen.clone();
            tokio::spawn(async move {
                handle(socket, &routes, &seen).await;
            });
        }
    });

    StubServer { host, requests }
}

async fn handle(mut socket: TcpStream, routes: &[Route], seen: &Mutex<Vec<String>>) {
    let mut buf = Vec::new();
    let mut chunk = [0u8; 1024];
    loop {
        let n = socket.read(&mut chunk).await.unwrap_or(0);
        if n == 0 {
            break;
        }
        buf.extend_from_slice(&chunk[..n]);
        if buf.windows(4).any(|w| w == b"\r\n\r\n") {
            break;
        }
    }

    let head = String::from_utf8_lossy(&buf);
    let target = head.split_whitespace().nth(1).unwrap_or("/").to_string();
    seen.lock().unwrap().push(target.clone());

    let (status, body) = routes
        .iter()
        .find(|route| route.matches(&target))
        .map(|route| (route.status, route.body.as_str()))
        .unwrap_or((404, NOT_FOUND_BODY));

    let response = format!(
        "HTTP/1.1 {} {}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
        status,
        reason(status),
        body.len(),
        body
    );
    let _ = socket.write_all(response.as_bytes()).await;
    let _ = socket.shutdown().await;
}

fn reason(status: u16) -> &'static str {
    match status {
        200 => "OK",
        401 => "Unauthorized",
        404 => "Not Found",
        429 => "Too Many Requests",
        500 => "Internal Server Error",
        _ => "Unknown",
    }
}
