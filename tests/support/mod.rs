// Shared bootstrapping for integration tests: a fake identification service and
// relay instances pointed at it.
use axum::{
    Json, Router,
    http::{HeaderMap, StatusCode},
    routing::post,
};
use plant_identify_server::Config;
use serde_json::{Value, json};
use std::{
    future::Future,
    net::SocketAddr,
    sync::OnceLock,
    time::Duration,
};

pub const TEST_API_KEY: &str = "test-api-key";

// Fake upstream shared by every test in this binary.
static FAKE_UPSTREAM: OnceLock<SocketAddr> = OnceLock::new();

// Bind synchronously so the socket already accepts connections when we return,
// then serve from a dedicated thread that outlives individual test runtimes.
fn spawn_on_thread<F, Fut>(serve: F) -> SocketAddr
where
    F: FnOnce(tokio::net::TcpListener) -> Fut + Send + 'static,
    Fut: Future<Output = ()>,
{
    let listener = std::net::TcpListener::bind("127.0.0.1:0").expect("bind ephemeral test port");
    listener
        .set_nonblocking(true)
        .expect("set listener non-blocking");
    let addr = listener.local_addr().expect("get local addr");

    std::thread::spawn(move || {
        let runtime = tokio::runtime::Runtime::new().expect("test runtime");
        runtime.block_on(async move {
            let listener =
                tokio::net::TcpListener::from_std(listener).expect("adopt std listener");
            serve(listener).await;
        });
    });

    addr
}

// Base URL of the fake identification service.
pub fn fake_upstream() -> SocketAddr {
    *FAKE_UPSTREAM.get_or_init(|| {
        spawn_on_thread(|listener| async move {
            let app = Router::new()
                .route("/identify", post(fake_identify))
                .route("/malformed", post(|| async { "definitely not json" }));
            axum::serve(listener, app).await.expect("fake upstream failed");
        })
    })
}

// Start a relay that forwards to `api_url` and return its base URL.
pub fn spawn_relay(api_url: String) -> String {
    let config = Config {
        api_url,
        api_key: TEST_API_KEY.to_string(),
        port: 0,
        upstream_timeout: Duration::from_secs(5),
        body_limit_bytes: 50 * 1024 * 1024,
    };

    let addr = spawn_on_thread(move |listener| async move {
        plant_identify_server::run(listener, config)
            .await
            .expect("relay failed");
    });

    format!("http://{addr}")
}

// An address nothing is listening on.
pub fn closed_address() -> SocketAddr {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").expect("bind ephemeral test port");
    listener.local_addr().expect("get local addr")
}

// Echoes the forwarded image back as the plant name so tests can see exactly
// what the relay sent without sharing state between tests.
async fn fake_identify(headers: HeaderMap, Json(body): Json<Value>) -> (StatusCode, Json<Value>) {
    let key = headers.get("api-key").and_then(|value| value.to_str().ok());
    if key != Some(TEST_API_KEY) {
        return (
            StatusCode::UNAUTHORIZED,
            Json(json!({ "error": "invalid api key" })),
        );
    }

    let requested_watering = body["plant_details"]
        .as_array()
        .is_some_and(|details| details.iter().any(|detail| detail == "watering"));
    if body["plant_language"] != "en" || !requested_watering {
        return (
            StatusCode::BAD_REQUEST,
            Json(json!({ "error": "unexpected request shape" })),
        );
    }

    let image = body["images"][0].as_str().unwrap_or_default();
    (
        StatusCode::OK,
        Json(json!({
            "suggestions": [{
                "probability": 0.8765,
                "plant_name": image,
                "plant_details": {
                    "common_names": ["Swiss cheese plant"],
                    "propagation_methods": ["seed", "cutting"],
                    "taxonomy": { "genus": "Monstera" }
                },
                "similar_images": [{ "id": "img-1", "similarity": 0.7 }]
            }],
            "health_assessment": {
                "diseases": [{
                    "name": "leaf spot",
                    "probability": 0.5,
                    "treatment": ["prune", "isolate"]
                }]
            }
        })),
    )
}
