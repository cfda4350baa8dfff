// Route exports
pub mod dentists;

use actix_web::web;

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.configure(dentists::configure);
}
