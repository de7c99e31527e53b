use actix::{Message, ResponseFuture};
use actix_service::{forward_ready, Service, Transform};
use actix_web::dev::{ServiceRequest, ServiceResponse};
use futures::future::LocalBoxFuture;
use std::future::{ready, Future, Ready};
use tracing::{field, info_span, Instrument, Span};

/// Wraps every request in a span recording its method, target and response status.
pub struct TracingLogger;

impl<S, B> Transform<S, ServiceRequest> for TracingLogger
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = actix_web::Error>,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = actix_web::Error;
    type Transform = TracingLoggerMiddleware<S>;
    type InitError = ();
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(TracingLoggerMiddleware { service }))
    }
}

pub struct TracingLoggerMiddleware<S> {
    service: S,
}

impl<S, B> Service<ServiceRequest> for TracingLoggerMiddleware<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = actix_web::Error>,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = actix_web::Error;
    type Future = LocalBoxFuture<'static, Result<Self::Response, Self::Error>>;

    forward_ready!(service);

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let span = info_span!(
            "http.request",
            otel.kind = "server",
            http.method = %req.method(),
            http.target = %req.uri(),
            http.status_code = field::Empty
        );

        let fut = span.in_scope(|| self.service.call(req));
        let recorder = span.clone();

        Box::pin(
            async move {
                let result = fut.await;
                match &result {
                    Ok(response) => {
                        recorder.record("http.status_code", response.status().as_u16());
                    }
                    Err(err) => {
                        let status = err.as_response_error().status_code();
                        recorder.record("http.status_code", status.as_u16());
                        tracing::error!({ exception.message = %err }, "The request failed");
                    }
                }
                result
            }
            .instrument(span),
        )
    }
}

/// An actor message carrying the span of the code which sent it.
pub struct TraceMessage<M: Message> {
    pub span: Span,
    pub message: M,
}

impl<M: Message> Message for TraceMessage<M> {
    type Result = M::Result;
}

pub trait TraceMessageExt: Message + Sized {
    fn trace(self) -> TraceMessage<Self> {
        TraceMessage {
            span: Span::current(),
            message: self,
        }
    }
}

impl<M: Message> TraceMessageExt for M {}

/// Boxes an actor's reply future so that it keeps running in the current span
/// after `handle()` has returned.
pub fn in_current_span<F>(fut: F) -> ResponseFuture<F::Output>
where
    F: Future + 'static,
{
    Box::pin(fut.instrument(Span::current()))
}

/// Implements the handler for `TraceMessage<$msg>` by running the plain
/// `$msg` handler inside the sender's span.
#[macro_export]
macro_rules! trace_handler {
    ($actor:ty, $msg:ty, $res:ty) => {
        impl actix::Handler<$crate::telemetry::TraceMessage<$msg>> for $actor {
            type Result = $res;

            fn handle(
                &mut self,
                msg: $crate::telemetry::TraceMessage<$msg>,
                ctx: &mut Self::Context,
            ) -> Self::Result {
                let _enter = msg.span.enter();
                <Self as actix::Handler<$msg>>::handle(self, msg.message, ctx)
            }
        }
    };
}
