//! In-process stub of the Coparent API built on `tiny_http`.
//!
//! The handler closure sees every request (method, path, headers, body) and
//! returns a status plus JSON body. Requests are recorded for assertions.

#![allow(dead_code)]

use std::sync::{Arc, Mutex};
use std::thread::JoinHandle;

use cp_client::ApiClient;
use cp_core::entities::User;
use cp_core::enums::Role;
use cp_session::{Session, SessionStore};

#[derive(Debug, Clone)]
pub struct Recorded {
    pub method: String,
    pub path: String,
    pub authorization: Option<String>,
    pub content_type: Option<String>,
    pub body: String,
}

impl Recorded {
    pub fn json(&self) -> serde_json::Value {
        serde_json::from_str(&self.body).expect("request body should be JSON")
    }
}

pub struct Reply {
    pub status: u16,
    pub body: String,
}

impl Reply {
    pub fn json(status: u16, body: &serde_json::Value) -> Self {
        Self {
            status,
            body: body.to_string(),
        }
    }

    pub fn text(status: u16, body: &str) -> Self {
        Self {
            status,
            body: body.to_string(),
        }
    }
}

pub struct StubServer {
    server: Arc<tiny_http::Server>,
    worker: Option<JoinHandle<()>>,
    requests: Arc<Mutex<Vec<Recorded>>>,
    pub base_url: String,
}

impl StubServer {
    pub fn start<F>(handler: F) -> Self
    where
        F: Fn(&Recorded) -> Reply + Send + 'static,
    {
        let server = Arc::new(tiny_http::Server::http("127.0.0.1:0").expect("bind stub server"));
        let port = server
            .server_addr()
            .to_ip()
            .map(|addr| addr.port())
            .expect("stub server port");
        let requests = Arc::new(Mutex::new(Vec::new()));

        let worker = {
            let server = Arc::clone(&server);
            let requests = Arc::clone(&requests);
            std::thread::spawn(move || {
                for mut request in server.incoming_requests() {
                    let header = |name: &str| {
                        request
                            .headers()
                            .iter()
                            .find(|h| h.field.as_str().as_str().eq_ignore_ascii_case(name))
                            .map(|h| h.value.to_string())
                    };
                    let authorization = header("Authorization");
                    let content_type = header("Content-Type");

                    let mut body = String::new();
                    let _ = request.as_reader().read_to_string(&mut body);

                    let path = request
                        .url()
                        .strip_prefix("/api")
                        .unwrap_or(request.url())
                        .to_string();
                    let recorded = Recorded {
                        method: request.method().as_str().to_uppercase(),
                        path,
                        authorization,
                        content_type,
                        body,
                    };

                    let reply = handler(&recorded);
                    requests.lock().expect("requests lock").push(recorded);

                    let response = tiny_http::Response::from_string(reply.body)
                        .with_status_code(reply.status)
                        .with_header(
                            tiny_http::Header::from_bytes("Content-Type", "application/json")
                                .expect("header"),
                        );
                    let _ = request.respond(response);
                }
            })
        };

        Self {
            server,
            worker: Some(worker),
            requests,
            base_url: format!("http://127.0.0.1:{port}/api"),
        }
    }

    pub fn requests(&self) -> Vec<Recorded> {
        self.requests.lock().expect("requests lock").clone()
    }

    pub fn client(&self, session: Arc<SessionStore>) -> ApiClient {
        ApiClient::new(self.base_url.clone(), session)
    }
}

impl Drop for StubServer {
    fn drop(&mut self) {
        self.server.unblock();
        if let Some(worker) = self.worker.take() {
            let _ = worker.join();
        }
    }
}

pub fn user(id: &str, email: &str) -> User {
    User {
        id: id.into(),
        full_name: "Dana Brooks".into(),
        email: email.into(),
        role: Role::Parent,
    }
}

pub fn logged_in(id: &str, email: &str) -> Arc<SessionStore> {
    let store = SessionStore::in_memory();
    store
        .save(&Session {
            token: format!("token-{id}"),
            user: user(id, email),
        })
        .expect("save session");
    Arc::new(store)
}

pub fn anonymous() -> Arc<SessionStore> {
    Arc::new(SessionStore::in_memory())
}

pub fn user_json(id: &str, email: &str) -> serde_json::Value {
    serde_json::json!({"id": id, "full_name": "Dana Brooks", "email": email, "role": "parent"})
}

pub fn plan_json(id: &str, title: &str) -> serde_json::Value {
    serde_json::json!({
        "id": id,
        "title": title,
        "status": "active",
        "created_by": "u-1",
        "created_at": "2025-08-20T10:00:00.000Z"
    })
}

pub fn invite_json(id: &str, plan_id: &str, email: &str, status: &str) -> serde_json::Value {
    serde_json::json!({
        "id": id,
        "plan_id": plan_id,
        "email": email,
        "status": status,
        "created_at": "2025-08-21T10:00:00.000Z"
    })
}
