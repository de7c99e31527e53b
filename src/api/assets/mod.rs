use actix_web::{get, web, HttpResponse, Responder};

static STYLESHEET: &str = include_str!("./style.css");

#[get("/static/style.css")]
pub async fn get_stylesheet() -> impl Responder {
    HttpResponse::Ok()
        .content_type("text/css; charset=utf-8")
        .insert_header(("Cache-Control", "public, max-age=3600"))
        .body(STYLESHEET)
}

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(get_stylesheet);
}
