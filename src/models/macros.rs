macro_rules! actor_message {
    ($name:ident($($arg:ident: $arg_type:ty),*) -> $res:ty | $err:ty) => {
        #[derive(Debug, Clone)]
        pub struct $name {
            $(pub $arg: $arg_type),*
        }

        impl actix::prelude::Message for $name {
            type Result = Result<$res, $err>;
        }
    };

    ($name:ident($($arg:ident: $arg_type:ty),*) -> $res:ty) => {
        actor_message!($name($($arg: $arg_type),*) -> $res | $crate::api::APIError);
    };
}

macro_rules! json_responder {
    ($name:ty) => {
        impl actix_web::Responder for $name {
            type Body = actix_web::body::BoxBody;

            fn respond_to(self, _req: &actix_web::HttpRequest) -> actix_web::HttpResponse<Self::Body> {
                actix_web::HttpResponse::Ok()
                    .content_type("application/json; charset=utf-8")
                    .json(&self)
            }
        }
    };
}
