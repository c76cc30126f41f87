use std::env;
use std::net::SocketAddr;

use dotenvy::dotenv;

use school_activities::store::ActivityStore;
use school_activities::web;

#[tokio::main]
async fn main() {
    dotenv().ok();

    tracing_subscriber::fmt::init();

    let store = ActivityStore::with_seed();
    let app = web::app(store);

    let host = env::var("HOST").unwrap_or_else(|_| "127.0.0.1".to_string());
    let port: u16 = env::var("PORT")
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(8000);
    let addr: SocketAddr = format!("{}:{}", host, port)
        .parse()
        .expect("invalid HOST/PORT");

    let listener = match tokio::net::TcpListener::bind(addr).await {
        Ok(l) => l,
        Err(e) => {
            tracing::warn!(%addr, "bind failed ({}), trying port {}", e, port + 1);
            let fallback: SocketAddr = format!("{}:{}", host, port + 1)
                .parse()
                .expect("invalid fallback address");
            tokio::net::TcpListener::bind(fallback)
                .await
                .expect("could not bind fallback port")
        }
    };

    let bound_addr = listener.local_addr().expect("listener has no local addr");
    tracing::info!(
        build_id = env!("SCHOOL_ACTIVITIES_BUILD_ID"),
        "listening on http://{}",
        bound_addr
    );

    axum::serve(listener, app).await.expect("server error");
}
