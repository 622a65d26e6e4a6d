use tokio::net::TcpListener;

use mdserve::logger::Logger;
use mdserve::{app, Config, ServerError};

/// Requests are handled one at a time on a single-threaded runtime
#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<(), ServerError> {
    if let Err(e) = Logger::init() {
        eprintln!("Logger already initialised: {}", e);
    }

    let config = Config::from_env();
    let app = app(&config)?;

    let addr = config.socket_addr();
    let listener = TcpListener::bind(addr).await?;
    log::info!("Listening on {}", addr);
    println!("✓ Server started at http://localhost:{}", config.port);
    println!("✓ Serving markdown files from: {}", config.root.display());
    println!("✓ Press Ctrl+C to stop the server");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    println!("\n✓ Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        log::error!("Failed to listen for Ctrl+C: {}", e);
        std::future::pending::<()>().await;
    }
}
