//! Shared test utilities: a local stand-in for the product database

#![allow(dead_code)]

use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::thread;

use foodscan::config::DatabaseSettings;
use foodscan::product::OpenFoodFactsClient;
use tiny_http::{Header, Response, Server};

/// A canned HTTP reply
#[derive(Clone)]
pub struct Reply {
    pub status: u16,
    pub body: String,
}

impl Reply {
    pub fn json(body: serde_json::Value) -> Self {
        Self {
            status: 200,
            body: body.to_string(),
        }
    }

    pub fn raw(status: u16, body: &str) -> Self {
        Self {
            status,
            body: body.to_string(),
        }
    }
}

/// Serves `/api/v0/product/{barcode}.json` from a route table; unknown
/// barcodes get the database's "not found" body
pub struct ProductServer {
    server: Arc<Server>,
    base_url: String,
    hits: Arc<AtomicUsize>,
    user_agents: Arc<Mutex<Vec<String>>>,
    handle: Option<thread::JoinHandle<()>>,
}

impl ProductServer {
    pub fn start(routes: Vec<(&str, Reply)>) -> Self {
        let server = Arc::new(Server::http("127.0.0.1:0").expect("Failed to bind test server"));
        let port = server
            .server_addr()
            .to_ip()
            .expect("Test server is not on IP")
            .port();

        let routes: HashMap<String, Reply> = routes
            .into_iter()
            .map(|(barcode, reply)| (format!("/api/v0/product/{barcode}.json"), reply))
            .collect();

        let hits = Arc::new(AtomicUsize::new(0));
        let user_agents = Arc::new(Mutex::new(Vec::new()));

        let handle = {
            let server = Arc::clone(&server);
            let hits = Arc::clone(&hits);
            let user_agents = Arc::clone(&user_agents);
            thread::spawn(move || {
                for request in server.incoming_requests() {
                    hits.fetch_add(1, Ordering::SeqCst);
                    if let Some(agent) = request
                        .headers()
                        .iter()
                        .find(|h| h.field.equiv("User-Agent"))
                    {
                        user_agents
                            .lock()
                            .expect("user agent lock")
                            .push(agent.value.as_str().to_string());
                    }

                    let reply = routes.get(request.url()).cloned().unwrap_or_else(|| {
                        Reply::json(serde_json::json!({
                            "status": 0,
                            "status_verbose": "product not found"
                        }))
                    });

                    let content_type =
                        Header::from_bytes(&b"Content-Type"[..], &b"application/json"[..])
                            .expect("static header");
                    let response = Response::from_string(reply.body)
                        .with_status_code(reply.status)
                        .with_header(content_type);
                    let _ = request.respond(response);
                }
            })
        };

        Self {
            server,
            base_url: format!("http://127.0.0.1:{port}"),
            hits,
            user_agents,
            handle: Some(handle),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn hits(&self) -> usize {
        self.hits.load(Ordering::SeqCst)
    }

    pub fn user_agents(&self) -> Vec<String> {
        self.user_agents.lock().expect("user agent lock").clone()
    }

    pub fn client(&self) -> OpenFoodFactsClient {
        client_for(&self.base_url)
    }
}

impl Drop for ProductServer {
    fn drop(&mut self) {
        self.server.unblock();
        if let Some(handle) = self.handle.take() {
            let _ = handle.join();
        }
    }
}

pub fn client_for(base_url: &str) -> OpenFoodFactsClient {
    OpenFoodFactsClient::new(&DatabaseSettings {
        base_url: base_url.to_string(),
        user_agent: "foodscan-tests/1.0".to_string(),
        request_timeout_secs: 5,
    })
}

/// A base URL nothing listens on
pub fn unreachable_base_url() -> String {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").expect("Failed to bind");
    let port = listener.local_addr().expect("local addr").port();
    drop(listener);
    format!("http://127.0.0.1:{port}")
}

pub fn found(product: serde_json::Value) -> Reply {
    Reply::json(serde_json::json!({
        "status": 1,
        "status_verbose": "product found",
        "product": product
    }))
}
