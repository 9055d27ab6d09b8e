//! Server startup
//!
//! Turns a loaded configuration into a running HTTP server.

use crate::config::Config;
use crate::server::server::HttpServer;
use crate::utils::error::Result;
use tracing::info;

/// Start the server with an already loaded configuration
pub async fn run_server(config: Config) -> Result<()> {
    info!("Starting userbench v{}", crate::VERSION);

    let server = HttpServer::new(&config).await?;
    info!("Server starting at: http://{}", config.server().address());
    info!("API Endpoints:");
    info!("   GET    /health - Health check");
    info!("   GET    /version - Build information");
    info!("   POST   /users - Create user");
    info!("   GET    /users - List users");
    info!("   GET    /users/{{id}} - Fetch user");
    info!("   PUT    /users/{{id}} - Rename user");
    info!("   DELETE /users/{{id}} - Delete user");
    info!("   DELETE /users/clear - Delete all users");
    info!("   POST   /users/bulk-insert - Concurrent bulk insert");
    info!("   POST   /system-tuning/ram - Allocate memory");
    info!("   POST   /system-tuning/cpu - Saturate CPU");

    server.start().await
}
