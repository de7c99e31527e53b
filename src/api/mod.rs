#[macro_use]
mod macros;

mod assets;
mod choose;
mod error;
mod health;
mod location;
mod templates;
mod toc;


use actix_web::web;

pub use error::APIError;

pub fn configure(cfg: &mut web::ServiceConfig) {
    assets::configure(cfg);
    choose::configure(cfg);
    health::configure(cfg);
    location::configure(cfg);
    toc::configure(cfg);
}
