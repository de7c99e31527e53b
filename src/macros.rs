/// Renders an askama template as a `text/html` response.
macro_rules! html_responder {
    ($name:ty) => {
        impl actix_web::Responder for $name {
            type Body = actix_web::body::BoxBody;

            fn respond_to(self, _req: &actix_web::HttpRequest) -> actix_web::HttpResponse<Self::Body> {
                match askama::Template::render(&self) {
                    Ok(body) => actix_web::HttpResponse::Ok()
                        .content_type("text/html; charset=utf-8")
                        .body(body),
                    Err(err) => actix_web::ResponseError::error_response(
                        &$crate::api::APIError::from(err),
                    ),
                }
            }
        }
    };
}
