use seating_server::{Server, ServerState, print_banner, setup_environment};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // 1. Environment (.env, logging) and configuration
    let config = setup_environment();

    if !config.is_production() {
        print_banner();
    }
    tracing::info!(
        "Seating server v{} starting (env: {})",
        env!("CARGO_PKG_VERSION"),
        config.environment
    );

    // 2. State backed by the in-memory store
    let state = ServerState::in_memory(config.clone());

    // 3. Serve until ctrl-c
    let server = Server::with_state(config, state);
    if let Err(e) = server.run().await {
        tracing::error!("Server error: {}", e);
        return Err(e.into());
    }

    Ok(())
}
