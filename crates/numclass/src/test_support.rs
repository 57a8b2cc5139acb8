//! Local stand-ins for the external services the shell talks to.

use axum::{extract::Path, routing::get, Router};

/// Serve `router` on an ephemeral localhost port and return its base URL
pub async fn spawn_stub(router: Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind stub listener");
    let addr = listener.local_addr().expect("stub local addr");

    tokio::spawn(async move {
        axum::serve(listener, router).await.expect("stub server");
    });

    format!("http://{addr}")
}

/// Base URL of a port nothing listens on
pub async fn closed_port_url() -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind throwaway listener");
    let addr = listener.local_addr().expect("throwaway local addr");
    drop(listener);

    format!("http://{addr}")
}

/// Trivia service answering `/{n}/math` with a plain text fact
pub fn fact_stub() -> Router {
    Router::new().route(
        "/{n}/math",
        get(|Path(n): Path<String>| async move { format!("{n} is a number with a fact.") }),
    )
}
