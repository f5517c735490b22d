use cwapp::WebAppExt;
use cwmotion::MotionSpec;
use cwserver::{LoggingOptions, Server, init_logging};
use cwthumbs::ThumbsExt;
use cwvote::VoteExt;
use cwworld::WorldExt;
use std::collections::HashSet;
use tracing::info;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // ========== PHASE 1 : Infrastructure ==========

    init_logging(LoggingOptions::default());

    let mut server = Server::new_configured();

    // Route d'information de l'application
    server
        .add_route("/info", || async {
            serde_json::json!({"name": "CoverWorld", "version": "0.1.0"})
        })
        .await;

    // Constantes de mouvement servies à l'interface
    server
        .add_route("/api/motion", || async { MotionSpec::default() })
        .await;

    // ========== PHASE 2 : Métier ==========

    // Catalogue, placement et routes du monde
    info!("🖼️ Building the cover world...");
    let world_state = server.init_world_configured().await?;
    info!(
        "✅ {} cover(s) placed in a {}x{} world",
        world_state.layout.covers.len(),
        world_state.layout.width,
        world_state.layout.height
    );

    // API de vote, limitée aux couvertures du catalogue
    info!("🗳️ Initializing the vote API...");
    let valid_ids: HashSet<String> = world_state
        .layout
        .covers
        .iter()
        .map(|c| c.id.clone())
        .collect();
    if let Err(e) = server.init_vote_configured(valid_ids).await {
        tracing::warn!("⚠️ Failed to initialize the vote API: {}", e);
    }

    // API de couleur moyenne (halo de l'item actif)
    info!("🎨 Initializing the color API...");
    server.init_color_configured().await?;

    // Interface embarquée
    server.add_webapp().await;

    // ========== PHASE 3 : Démarrage ==========

    let server_info = server.info();
    info!(
        "✅ CoverWorld ready at {}:{}",
        server_info.base_url, server_info.http_port
    );

    server.start().await;
    server.wait().await;

    Ok(())
}
