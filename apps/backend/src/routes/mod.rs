use actix_web::web;

pub mod characters;
pub mod games;
pub mod health;

/// Configure application routes for tests and non-HttpServer contexts.
///
/// In production, `main.rs` wires these under the same paths with the CORS
/// and logging middleware around them; tests register the same paths
/// directly so endpoint behavior can be exercised as-is.
pub fn configure(cfg: &mut web::ServiceConfig) {
    // Health check routes: /health
    cfg.service(web::scope("/health").configure(health::configure_routes));

    // Games routes: /api/v1/games/**
    cfg.service(web::scope("/api/v1/games").configure(games::configure_routes));

    // Characters routes: /api/v1/characters/**
    cfg.service(web::scope("/api/v1/characters").configure(characters::configure_routes));
}
