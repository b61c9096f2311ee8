use axum::body::Bytes;
use axum::extract::State;
use axum::http::{header, Method, StatusCode, Uri};
use axum::response::IntoResponse;
use axum::Router;
use mqx::http::client::HttpClient;
use serde_json::Value;
use std::net::SocketAddr;
use std::sync::{Arc, Mutex};
use tokio::net::TcpListener;
use tokio::task::JoinHandle;

/// A request as received by the stub broker.
#[derive(Debug, Clone, PartialEq)]
pub struct RecordedRequest {
    pub method: Method,
    pub path: String,
    pub query: Option<String>,
    pub body: Option<Value>,
}

#[derive(Debug)]
struct StubState {
    requests: Mutex<Vec<RecordedRequest>>,
    response: Mutex<(StatusCode, String)>,
}

/// In-process stand-in for the broker management API.
///
/// Every request is recorded and answered with the currently configured response,
/// `200 {}` until changed.
pub struct TestServer {
    address: SocketAddr,
    state: Arc<StubState>,
    handle: JoinHandle<()>,
}

impl TestServer {
    pub async fn start() -> Self {
        let state = Arc::new(StubState {
            requests: Mutex::new(Vec::new()),
            response: Mutex::new((StatusCode::OK, "{}".to_string())),
        });
        let app = Router::new().fallback(record).with_state(state.clone());
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let address = listener.local_addr().unwrap();
        let handle = tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        Self {
            address,
            state,
            handle,
        }
    }

    pub fn client(&self) -> HttpClient {
        HttpClient::new(&format!("http://{}", self.address)).unwrap()
    }

    pub fn respond_with(&self, status: StatusCode, body: Value) {
        self.respond_with_raw(status, &body.to_string());
    }

    pub fn respond_with_raw(&self, status: StatusCode, body: &str) {
        *self.state.response.lock().unwrap() = (status, body.to_string());
    }

    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.state.requests.lock().unwrap().clone()
    }

    pub fn last_request(&self) -> RecordedRequest {
        self.requests().pop().expect("no request was received")
    }
}

impl Drop for TestServer {
    fn drop(&mut self) {
        self.handle.abort();
    }
}

async fn record(
    State(state): State<Arc<StubState>>,
    method: Method,
    uri: Uri,
    body: Bytes,
) -> impl IntoResponse {
    let body = match body.is_empty() {
        true => None,
        false => serde_json::from_slice(&body).ok(),
    };
    state.requests.lock().unwrap().push(RecordedRequest {
        method,
        path: uri.path().to_string(),
        query: uri.query().map(str::to_string),
        body,
    });

    let (status, body) = state.response.lock().unwrap().clone();
    (status, [(header::CONTENT_TYPE, "application/json")], body)
}
