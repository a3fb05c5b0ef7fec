//! In-process REST backend for integration tests.
//!
//! Binds `127.0.0.1:0`, answers from per-route reply queues (the last reply
//! repeats), and records every request it sees.

#![allow(dead_code)]

use std::collections::{HashMap, VecDeque};
use std::io::Read as _;
use std::net::SocketAddr;
use std::sync::{Arc, Mutex};
use std::thread::JoinHandle;
use std::time::Duration;

use pref_api::App;
use pref_auth::{MemoryStore, SessionStore};
use pref_config::{PrefsConfig, SessionBackend};
use pref_core::{Role, Session};

#[derive(Debug, Clone)]
pub struct Recorded {
    pub method: String,
    pub path: String,
    pub authorization: Option<String>,
    pub body: String,
}

#[derive(Debug, Clone)]
pub struct Reply {
    status: u16,
    body: String,
    json: bool,
    delay: Option<Duration>,
}

impl Reply {
    pub fn json(status: u16, value: &serde_json::Value) -> Self {
        Self {
            status,
            body: value.to_string(),
            json: true,
            delay: None,
        }
    }

    pub fn text(status: u16, body: &str) -> Self {
        Self {
            status,
            body: body.to_string(),
            json: false,
            delay: None,
        }
    }

    pub fn empty(status: u16) -> Self {
        Self::text(status, "")
    }

    pub fn delayed(mut self, delay: Duration) -> Self {
        self.delay = Some(delay);
        self
    }
}

type Routes = HashMap<(String, String), VecDeque<Reply>>;

pub struct MockBackend {
    addr: SocketAddr,
    server: Arc<tiny_http::Server>,
    routes: Arc<Mutex<Routes>>,
    requests: Arc<Mutex<Vec<Recorded>>>,
    handle: Option<JoinHandle<()>>,
}

impl MockBackend {
    pub fn start() -> Self {
        let server = Arc::new(tiny_http::Server::http("127.0.0.1:0").expect("bind mock backend"));
        let addr = server
            .server_addr()
            .to_ip()
            .expect("mock backend listens on TCP");
        let routes: Arc<Mutex<Routes>> = Arc::default();
        let requests: Arc<Mutex<Vec<Recorded>>> = Arc::default();

        let handle = {
            let server = Arc::clone(&server);
            let routes = Arc::clone(&routes);
            let requests = Arc::clone(&requests);
            std::thread::spawn(move || {
                while let Ok(request) = server.recv() {
                    let routes = Arc::clone(&routes);
                    let requests = Arc::clone(&requests);
                    std::thread::spawn(move || serve(request, &routes, &requests));
                }
            })
        };

        Self {
            addr,
            server,
            routes,
            requests,
            handle: Some(handle),
        }
    }

    pub fn base_url(&self) -> String {
        format!("http://{}", self.addr)
    }

    /// Queue `reply` for `method path` (path includes the `/api` prefix).
    pub fn on(&self, method: &str, path: &str, reply: Reply) -> &Self {
        self.routes
            .lock()
            .unwrap()
            .entry((method.to_string(), path.to_string()))
            .or_default()
            .push_back(reply);
        self
    }

    pub fn requests(&self) -> Vec<Recorded> {
        self.requests.lock().unwrap().clone()
    }

    pub fn count(&self, method: &str, path: &str) -> usize {
        self.requests()
            .iter()
            .filter(|r| r.method == method && r.path == path)
            .count()
    }

    pub fn last(&self, method: &str, path: &str) -> Option<Recorded> {
        self.requests()
            .into_iter()
            .rev()
            .find(|r| r.method == method && r.path == path)
    }
}

impl Drop for MockBackend {
    fn drop(&mut self) {
        self.server.unblock();
        if let Some(handle) = self.handle.take() {
            let _ = handle.join();
        }
    }
}

fn serve(mut request: tiny_http::Request, routes: &Mutex<Routes>, requests: &Mutex<Vec<Recorded>>) {
    let mut body = String::new();
    let _ = request.as_reader().read_to_string(&mut body);
    let method = request.method().to_string();
    let path = request.url().split('?').next().unwrap_or_default().to_string();
    let authorization = request
        .headers()
        .iter()
        .find(|h| h.field.equiv("Authorization"))
        .map(|h| h.value.as_str().to_string());

    requests.lock().unwrap().push(Recorded {
        method: method.clone(),
        path: path.clone(),
        authorization,
        body,
    });

    let reply = {
        let mut routes = routes.lock().unwrap();
        routes.get_mut(&(method, path)).and_then(|queue| {
            if queue.len() > 1 {
                queue.pop_front()
            } else {
                queue.front().cloned()
            }
        })
    };
    let reply = reply.unwrap_or_else(|| Reply::empty(404));

    if let Some(delay) = reply.delay {
        std::thread::sleep(delay);
    }

    let mut response = tiny_http::Response::from_string(reply.body).with_status_code(reply.status);
    if reply.json {
        response = response.with_header(
            tiny_http::Header::from_bytes(&b"Content-Type"[..], &b"application/json"[..])
                .expect("static header"),
        );
    }
    let _ = request.respond(response);
}

/// An `App` pointed at `backend`, with an in-memory credential store.
pub fn app_for(backend: &MockBackend) -> App {
    app_with_store(backend, MemoryStore::new())
}

pub fn app_with_store(backend: &MockBackend, store: MemoryStore) -> App {
    let mut config = PrefsConfig::default();
    config.api.base_url = backend.base_url();
    config.api.no_proxy = true;
    config.api.timeout_secs = 5;
    config.session.backend = SessionBackend::Memory;
    App::new(config, SessionStore::new(Box::new(store))).expect("app")
}

pub fn sign_in(app: &App, role: Role) {
    app.session()
        .establish(Session::new("test-token", "alice", role))
        .expect("establish session");
}

pub fn student_json(id: i64, name: &str) -> serde_json::Value {
    serde_json::json!({
        "id": id,
        "code": format!("S{id:03}"),
        "name": name,
        "email": format!("{}@uaic.ro", name.to_lowercase()),
        "year": 2
    })
}

pub fn preference_json(id: i64, student_id: i64, course_id: i64, rank: i32) -> serde_json::Value {
    serde_json::json!({
        "id": id,
        "studentId": student_id,
        "studentName": format!("Student {student_id}"),
        "studentCode": format!("S{student_id:03}"),
        "courseId": course_id,
        "courseName": format!("Course {course_id}"),
        "courseCode": format!("C{course_id:02}"),
        "packName": null,
        "rankOrder": rank
    })
}
