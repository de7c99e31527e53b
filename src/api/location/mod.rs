use actix_web::web;

mod create_location;

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(create_location::create_location_v1);
}
