//! throwaway control server for tests, answers `/list` and `/{device}/{on|off}`

use std::net::TcpListener;
use std::sync::{mpsc, Arc, Mutex};
use std::thread;
use std::time::Duration;

use actix_web::dev::ServerHandle;
use actix_web::http::StatusCode;
use actix_web::{web, App, HttpRequest, HttpResponse, HttpServer};
use serde_json::Value;

#[derive(Clone, Default)]
pub struct MockBehaviour {
    pub list_status: u16,
    pub list_body: String,
    pub command_status: u16,
    pub expected_secret: Option<String>,
    pub delay: Duration,
}

impl MockBehaviour {
    pub fn listing(list_status: u16, list_body: &str) -> Self {
        MockBehaviour {
            list_status,
            list_body: list_body.to_string(),
            command_status: 200,
            ..Default::default()
        }
    }

    pub fn with_secret(mut self, secret: &str) -> Self {
        self.expected_secret = Some(secret.to_string());
        self
    }

    pub fn with_command_status(mut self, status: u16) -> Self {
        self.command_status = status;
        self
    }

    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }
}

#[derive(Default)]
struct Recorded {
    secrets: Vec<String>,
    commands: Vec<String>,
}

struct MockState {
    behaviour: MockBehaviour,
    recorded: Arc<Mutex<Recorded>>,
}

pub struct MockServer {
    pub address: String,
    handle: ServerHandle,
    recorded: Arc<Mutex<Recorded>>,
}

impl MockServer {
    /// secrets received by `/list`, in arrival order
    pub fn list_secrets(&self) -> Vec<String> {
        self.recorded.lock().unwrap().secrets.clone()
    }

    /// paths of received on/off commands, in arrival order
    pub fn commands(&self) -> Vec<String> {
        self.recorded.lock().unwrap().commands.clone()
    }

    pub async fn stop(self) {
        self.handle.stop(false).await;
    }
}

fn respond(status: u16, body: String) -> HttpResponse {
    HttpResponse::build(StatusCode::from_u16(status).unwrap())
        .content_type("application/json")
        .body(body)
}

async fn list(state: web::Data<MockState>, body: web::Bytes) -> HttpResponse {
    if !state.behaviour.delay.is_zero() {
        tokio::time::sleep(state.behaviour.delay).await;
    }
    let secret = serde_json::from_slice::<Value>(&body)
        .ok()
        .and_then(|v| v["secret"].as_str().map(str::to_string))
        .unwrap_or_default();
    state.recorded.lock().unwrap().secrets.push(secret.clone());

    if let Some(expected) = &state.behaviour.expected_secret {
        if expected != &secret {
            return respond(401, String::new());
        }
    }
    respond(state.behaviour.list_status, state.behaviour.list_body.clone())
}

async fn command(state: web::Data<MockState>, req: HttpRequest) -> HttpResponse {
    if !state.behaviour.delay.is_zero() {
        tokio::time::sleep(state.behaviour.delay).await;
    }
    state.recorded.lock().unwrap().commands.push(req.path().to_string());
    HttpResponse::build(StatusCode::from_u16(state.behaviour.command_status).unwrap())
        .content_type("text/plain")
        .body("ok")
}

/// start a server on a random local port
/// the server runs on its own actix system thread, independent of the test runtime
pub async fn start(behaviour: MockBehaviour) -> MockServer {
    let recorded = Arc::new(Mutex::new(Recorded::default()));
    let state = web::Data::new(MockState {
        behaviour,
        recorded: recorded.clone(),
    });

    let (tx, rx) = mpsc::channel();
    thread::spawn(move || {
        actix_web::rt::System::new().block_on(async move {
            let server = HttpServer::new(move || {
                App::new()
                    .app_data(state.clone())
                    .route("/list", web::post().to(list))
                    .route("/{device}/{action}", web::get().to(command))
            })
            .workers(1)
            .disable_signals()
            .bind(("127.0.0.1", 0))
            .expect("bind mock server");

            let address = server.addrs()[0];
            let server = server.run();
            tx.send((address, server.handle())).expect("report mock server address");
            let _ = server.await;
        })
    });
    let (address, handle) = rx.recv().expect("mock server started");

    MockServer {
        address: format!("http://{}", address),
        handle,
        recorded,
    }
}

/// address of a local port nobody listens on
pub fn unused_address() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").expect("bind free port");
    let port = listener.local_addr().expect("local addr").port();
    drop(listener);
    format!("http://127.0.0.1:{}", port)
}
