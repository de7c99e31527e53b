use actix_web::web;

mod choose_wiki_page;

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(choose_wiki_page::show_form)
        .service(choose_wiki_page::submit_form);
}
