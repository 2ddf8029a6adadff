use ip_country_server::{
    domain::geo::service::GeoService,
    server::{Server, ServerConfig},
};

// Helper function to spawn a test server on a random port
pub async fn spawn_server() -> String {
    let server_config = ServerConfig {
        host: "127.0.0.1",
        port: 0,
    };

    let server = Server::new(GeoService::new(), server_config.clone())
        .await
        .unwrap();

    let port = server.port().unwrap();
    tokio::spawn(async move {
        server.run().await.expect("failed to run server");
    });

    format!("http://{}:{}", server_config.host, port)
}
