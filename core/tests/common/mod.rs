//! Shared setup for the integration tests: a mock fake store on a random
//! port and a client pointed at it.

use fakestore_core::StoreClient;
use tracing_subscriber::EnvFilter;

/// Start the mock server on a random port and return its base URL.
///
/// The server runs on its own current-thread runtime in a background thread
/// and lives until the test process exits.
pub fn spawn_server() -> String {
    let std_listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = std_listener.local_addr().unwrap();
    std_listener.set_nonblocking(true).unwrap();

    std::thread::spawn(move || {
        let rt = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
            .unwrap();
        rt.block_on(async {
            let listener = tokio::net::TcpListener::from_std(std_listener).unwrap();
            mock_server::run(listener).await
        })
        .unwrap();
    });

    format!("http://{addr}")
}

pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_test_writer()
        .try_init();
}

pub fn client() -> StoreClient {
    init_tracing();
    StoreClient::new(&spawn_server()).log_bodies(true)
}
