// Route exports
pub mod network;

use actix_web::web;

pub use network::AppState;

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1")
            .configure(network::configure),
    );
}
