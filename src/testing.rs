//! Local HTTP stub standing in for the legal chat backend in tests.

use axum::extract::State;
use axum::http::{header, StatusCode, Uri};
use axum::response::IntoResponse;
use axum::Router;
use tokio::net::TcpListener;
use tokio::sync::mpsc;

#[derive(Debug)]
pub struct RecordedRequest {
    pub path: String,
    pub body: String,
}

pub struct StubServer {
    pub url: String,
    /// Requests in arrival order.
    pub requests: mpsc::UnboundedReceiver<RecordedRequest>,
}

#[derive(Clone)]
struct StubState {
    status: StatusCode,
    body: String,
    tx: mpsc::UnboundedSender<RecordedRequest>,
}

async fn respond(State(state): State<StubState>, uri: Uri, body: String) -> impl IntoResponse {
    let _ = state.tx.send(RecordedRequest {
        path: uri.path().to_string(),
        body,
    });
    (
        state.status,
        [(header::CONTENT_TYPE, "application/json")],
        state.body.clone(),
    )
}

/// Serve `status` + `body` on every path until the test ends.
/// `url` points at the chat endpoint.
pub async fn spawn_stub(status: u16, body: &str) -> StubServer {
    let (tx, rx) = mpsc::unbounded_channel();
    let state = StubState {
        status: StatusCode::from_u16(status).unwrap(),
        body: body.to_string(),
        tx,
    };
    let app = Router::new().fallback(respond).with_state(state);

    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        let _ = axum::serve(listener, app).await;
    });

    StubServer {
        url: format!("http://{}/api/chat", addr),
        requests: rx,
    }
}

/// A URL on a port nobody is listening on.
pub fn unreachable_url() -> String {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let port = listener.local_addr().unwrap().port();
    drop(listener);
    format!("http://127.0.0.1:{}/api/chat", port)
}
