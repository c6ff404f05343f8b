//! Test utilities for code that talks to the platform
//!
//! This module is only compiled when testing or with the `test-helpers` feature.

use std::collections::{HashMap, VecDeque};
use std::sync::Mutex;

use acctui_core::prelude::*;

use crate::transport::{HttpRequest, HttpResponse, HttpTransport};

#[derive(Debug, Clone)]
enum Scripted {
    Response(HttpResponse),
    Failure(String),
}

/// In-memory transport that records every request and replays scripted
/// responses.
///
/// Responses scripted for a specific path are used first, then the shared
/// queue. With nothing scripted, every request gets `204 No Content`.
#[derive(Debug, Default)]
pub struct FakeTransport {
    requests: Mutex<Vec<HttpRequest>>,
    queue: Mutex<VecDeque<Scripted>>,
    by_path: Mutex<HashMap<String, VecDeque<Scripted>>>,
}

impl FakeTransport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push_response(&self, response: HttpResponse) {
        self.queue
            .lock()
            .unwrap()
            .push_back(Scripted::Response(response));
    }

    pub fn push_failure(&self, message: impl Into<String>) {
        self.queue
            .lock()
            .unwrap()
            .push_back(Scripted::Failure(message.into()));
    }

    pub fn push_response_for(&self, path: impl Into<String>, response: HttpResponse) {
        self.by_path
            .lock()
            .unwrap()
            .entry(path.into())
            .or_default()
            .push_back(Scripted::Response(response));
    }

    /// Every request sent so far, in order
    pub fn requests(&self) -> Vec<HttpRequest> {
        self.requests.lock().unwrap().clone()
    }

    fn next_for(&self, path: &str) -> Option<Scripted> {
        if let Some(scripted) = self
            .by_path
            .lock()
            .unwrap()
            .get_mut(path)
            .and_then(|q| q.pop_front())
        {
            return Some(scripted);
        }
        self.queue.lock().unwrap().pop_front()
    }
}

impl HttpTransport for FakeTransport {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse> {
        let scripted = self.next_for(&request.path);
        self.requests.lock().unwrap().push(request);
        match scripted {
            Some(Scripted::Response(response)) => Ok(response),
            Some(Scripted::Failure(message)) => Err(Error::http(message)),
            None => Ok(HttpResponse::no_content()),
        }
    }
}
