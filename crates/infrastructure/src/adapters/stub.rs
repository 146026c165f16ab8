//! Loopback HTTP server standing in for an upstream API in tests.

use axum::Router;
use tokio::net::TcpListener;

/// Serves `router` on an ephemeral port and returns its base URL.
pub(crate) async fn serve(router: Router) -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let address = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });
    format!("http://{address}")
}
