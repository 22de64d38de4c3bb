//! Common test utilities shared by the integration tests.

#![allow(dead_code)]

use std::sync::{Arc, Mutex};

use lockhaven_client::{ApiClient, Config, MemoryTokenStore, Navigator};

/// Build an `ApiClient` pointed at a mock server, backed by the given store.
pub fn client_for(server_uri: &str, store: Arc<MemoryTokenStore>) -> ApiClient {
    let config = Config::builder()
        .api_url(server_uri)
        .build()
        .expect("mock server uri is a valid base url");
    ApiClient::new(config, store).expect("client builds")
}

/// Navigator that records every redirect it is asked to perform.
#[derive(Default)]
pub struct RecordingNavigator {
    visited: Mutex<Vec<String>>,
}

impl RecordingNavigator {
    pub fn visited(&self) -> Vec<String> {
        self.visited.lock().unwrap().clone()
    }
}

impl Navigator for RecordingNavigator {
    fn redirect(&self, path: &str) {
        self.visited.lock().unwrap().push(path.to_string());
    }
}
