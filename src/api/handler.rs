use super::error::*;
use crate::application_port::{SignupInput, SignupOutcome, SignupService};
use crate::domain_model::PasswordRule;
use percent_encoding::percent_decode_str;
use serde::Deserialize;
use std::sync::Arc;
use tera::{Context, Tera};
use warp::http::Uri;
use warp::{Reply, reject};

pub const SUCCESS_MESSAGE: &str = "Sign Up Successful!";
pub const NAME_TAKEN_MESSAGE: &str = "Name is already registered";

#[derive(Debug, Deserialize)]
pub struct SignupForm {
    pub name: String,
    pub password: String,
}

fn render(
    templates: &Tera,
    name: &str,
    ctx: &Context,
) -> Result<warp::reply::Response, warp::Rejection> {
    let html = templates
        .render(name, ctx)
        .map_err(|e| ApiError::internal(format!("template {name}: {e}")))
        .map_err(reject::custom)?;
    Ok(warp::reply::html(html).into_response())
}

fn index_context(error: Option<&str>, broken: &[PasswordRule]) -> Context {
    let messages: Vec<&str> = broken.iter().map(|rule| rule.message()).collect();
    let mut ctx = Context::new();
    ctx.insert("error", &error);
    ctx.insert("errors", &messages);
    ctx
}

pub async fn show_form(templates: Arc<Tera>) -> Result<warp::reply::Response, warp::Rejection> {
    render(&templates, "index.html", &index_context(None, &[]))
}

pub async fn submit_form(
    form: SignupForm,
    signup_service: Arc<dyn SignupService>,
    templates: Arc<Tera>,
) -> Result<warp::reply::Response, warp::Rejection> {
    let input = SignupInput {
        username: form.name,
        password: form.password,
    };
    let outcome = signup_service
        .register(input)
        .await
        .map_err(ApiError::from)
        .map_err(reject::custom)?;

    match outcome {
        SignupOutcome::AlreadyRegistered => render(
            &templates,
            "index.html",
            &index_context(Some(NAME_TAKEN_MESSAGE), &[]),
        ),
        SignupOutcome::ValidationFailed(broken) => {
            render(&templates, "index.html", &index_context(None, &broken))
        }
        SignupOutcome::Success => {
            Ok(warp::redirect::found(Uri::from_static("/success")).into_response())
        }
    }
}

pub fn success() -> impl Reply {
    warp::reply::html(SUCCESS_MESSAGE)
}

pub async fn greet(
    raw_name: String,
    templates: Arc<Tera>,
) -> Result<warp::reply::Response, warp::Rejection> {
    let name = percent_decode_str(&raw_name)
        .decode_utf8()
        .map_err(|_| reject::custom(ApiError::InvalidPath))?;

    let mut ctx = Context::new();
    ctx.insert("name", &name);
    render(&templates, "greet.html", &ctx)
}
