use super::handler;
use crate::server::*;
use std::convert::Infallible;
use std::sync::Arc;
use warp::Filter;

const MAX_FORM_BYTES: u64 = 16 * 1024;

pub fn routes(
    server: Arc<Server>,
) -> impl Filter<Extract = (impl warp::Reply,), Error = warp::Rejection> + Clone {
    // Paths are matched before methods so an unknown path stays a 404.
    let index = warp::path::end()
        .and(warp::get())
        .and(with(server.templates.clone()))
        .and_then(handler::show_form);

    let submit = warp::path::end()
        .and(warp::post())
        .and(warp::body::content_length_limit(MAX_FORM_BYTES))
        .and(warp::body::form())
        .and(with(server.signup_service.clone()))
        .and(with(server.templates.clone()))
        .and_then(handler::submit_form);

    let success = warp::path("success")
        .and(warp::path::end())
        .and(warp::get())
        .map(handler::success);

    // The segment arrives still percent-encoded; `greet` decodes it.
    let greet = warp::path!("name" / String)
        .and(warp::get())
        .and(with(server.templates.clone()))
        .and_then(handler::greet);

    index.or(submit).or(success).or(greet)
}

fn with<ServiceType>(
    service: Arc<ServiceType>,
) -> impl Filter<Extract = (Arc<ServiceType>,), Error = Infallible> + Clone
where
    ServiceType: Send + Sync + ?Sized,
{
    warp::any().map(move || service.clone())
}
