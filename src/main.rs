mod config;
mod routes;
mod services;
mod state;

use rand::SeedableRng;
use rand::rngs::StdRng;

use crate::config::ServerConfig;
use crate::services::leaderboard::Leaderboard;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt::init();

    let config = ServerConfig::from_env();

    let mut board = Leaderboard::new();
    let mut rng = match config.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    };
    services::seed::seed_leaderboard(&mut board, config.seed_users, &mut rng);
    if board.is_empty() {
        tracing::warn!("leaderboard started with no users");
    }

    let state = state::AppState::new(board, config.paging);

    // Spawn background rating simulation.
    let _simulation = services::simulation::spawn_simulation_task(state.clone(), config.simulate_interval);

    let app = routes::app(state);
    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{}", config.port))
        .await
        .expect("failed to bind");

    tracing::info!(port = config.port, users = config.seed_users, "leaderboard listening");
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .expect("server failed");
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::warn!(error = %e, "failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    tracing::info!("shutdown requested");
}
