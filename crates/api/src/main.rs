#[tokio::main]
async fn main() {
    mercato_observability::init();

    let addr = std::env::var("MERCATO_ADDR").unwrap_or_else(|_| "0.0.0.0:8080".to_string());
    let public_url = std::env::var("MERCATO_PUBLIC_URL")
        .ok()
        .and_then(|raw| match url::Url::parse(&raw) {
            Ok(url) => Some(url),
            Err(e) => {
                tracing::warn!("ignoring invalid MERCATO_PUBLIC_URL: {e}");
                None
            }
        });

    let app = mercato_api::app::build_app(public_url);

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .unwrap_or_else(|e| panic!("failed to bind {addr}: {e}"));

    tracing::info!("listening on {}", listener.local_addr().unwrap());

    axum::serve(listener, app).await.unwrap();
}
