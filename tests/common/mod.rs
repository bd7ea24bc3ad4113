use crl_bundler::{config::Config, server::Server};

/// Reads a PEM fixture from `test_data/crl`
#[allow(dead_code)]
pub fn fixture(name: &str) -> String {
    std::fs::read_to_string(format!("test_data/crl/{name}")).expect("Failed to read fixture")
}

// Helper function to spawn a test server on a random port
#[allow(dead_code)]
pub async fn spawn_server() -> String {
    let config = {
        let mut config = Config::load().unwrap();
        config.server.host = "localhost".to_string();
        // Use a random OS port
        config.server.port = 0;
        config
    };

    let server = Server::new(&config.server).await.unwrap();

    let port = server.port().unwrap();
    tokio::spawn(async move {
        server.run().await.expect("failed to run server");
    });

    format!("http://{}:{}", config.server.host, port)
}
