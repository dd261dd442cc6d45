pub mod export;
pub mod player;
pub mod roster;

use crate::config::Config;
use crate::gamelog::GamelogError;
use derive_more::Display;
use rocket::fairing::AdHoc;
use rocket::http::{Header, Method, Status};
use rocket::request::{FromRequest, Outcome, Request};
use rocket::response::{self, Responder};
use rocket::serde::json::Json;
use rocket::{catch, get};
use serde::Serialize;
use std::io::Cursor;

type ResponseResult<T> = Result<T, ApiError>;

#[derive(Debug, Serialize)]
pub struct Detail {
    detail: String,
}

impl Detail {
    fn new(detail: impl ToString) -> Json<Detail> {
        Json(Detail {
            detail: detail.to_string(),
        })
    }
}

#[derive(Debug, Display)]
pub enum ApiError {
    #[display(fmt = "{}", _0)]
    BadRequest(String),
    #[display(fmt = "{}", _0)]
    NotFound(String),
    #[display(fmt = "{}", _0)]
    Unprocessable(GamelogError),
    #[display(fmt = "upstream feed failed: {:#}", _0)]
    Upstream(anyhow::Error),
}

impl ApiError {
    fn status(&self) -> Status {
        match self {
            ApiError::BadRequest(_) => Status::BadRequest,
            ApiError::NotFound(_) => Status::NotFound,
            ApiError::Unprocessable(_) => Status::UnprocessableEntity,
            ApiError::Upstream(_) => Status::BadGateway,
        }
    }
}

impl From<GamelogError> for ApiError {
    fn from(err: GamelogError) -> ApiError {
        match err {
            GamelogError::UnsupportedSport(_) => ApiError::BadRequest(err.to_string()),
            GamelogError::SchemaResolutionFailure { .. } => ApiError::Unprocessable(err),
            GamelogError::MalformedDocument(_) => ApiError::Upstream(err.into()),
        }
    }
}

impl From<anyhow::Error> for ApiError {
    fn from(err: anyhow::Error) -> ApiError {
        ApiError::Upstream(err)
    }
}

impl<'r> Responder<'r, 'static> for ApiError {
    fn respond_to(self, req: &'r Request<'_>) -> response::Result<'static> {
        let status = self.status();
        if status.code >= 500 {
            log::error!("{} {}: {}", req.method(), req.uri(), self);
        }
        (status, Detail::new(self)).respond_to(req)
    }
}

/// Passes when no key is configured, or when `X-API-Key` matches the configured one.
pub struct ApiKey;

#[rocket::async_trait]
impl<'r> FromRequest<'r> for ApiKey {
    type Error = ();

    async fn from_request(req: &'r Request<'_>) -> Outcome<ApiKey, ()> {
        let expected = match req.rocket().state::<Config>() {
            Some(config) => config.api_key.as_deref(),
            None => return Outcome::Error((Status::InternalServerError, ())),
        };
        match expected {
            None => Outcome::Success(ApiKey),
            Some(key) if req.headers().get_one("X-API-Key") == Some(key) => {
                Outcome::Success(ApiKey)
            }
            Some(_) => Outcome::Error((Status::Unauthorized, ())),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct Health {
    status: &'static str,
    version: &'static str,
}

#[get("/")]
pub fn index() -> Json<Health> {
    Json(Health {
        status: "OK",
        version: env!("CARGO_PKG_VERSION"),
    })
}

#[catch(401)]
pub fn unauthorized() -> Json<Detail> {
    Detail::new("missing or invalid API key")
}

#[catch(404)]
pub fn not_found(req: &Request<'_>) -> Json<Detail> {
    Detail::new(format_args!("no route for {}", req.uri()))
}

pub fn cors() -> AdHoc {
    AdHoc::on_response("CORS", |req, res| {
        Box::pin(async move {
            let config = match req.rocket().state::<Config>() {
                Some(config) => config,
                None => return,
            };
            let origin = match config.allowed_origin(req.headers().get_one("Origin")) {
                Some(origin) => origin.to_owned(),
                None => return,
            };
            res.set_header(Header::new("Access-Control-Allow-Origin", origin));
            res.set_header(Header::new("Vary", "Origin"));

            // nothing is mounted for OPTIONS, so preflights arrive here as 404s
            if req.method() == Method::Options {
                res.set_status(Status::NoContent);
                res.remove_header("Content-Type");
                let empty = "";
                res.set_sized_body(empty.len(), Cursor::new(empty));
                res.set_header(Header::new("Access-Control-Allow-Methods", "GET, OPTIONS"));
                res.set_header(Header::new(
                    "Access-Control-Allow-Headers",
                    "Content-Type, X-API-Key",
                ));
            }
        })
    })
}

#[cfg(test)]
mod tests {
    use super::ApiError;
    use crate::gamelog::GamelogError;
    use rocket::http::Status;

    #[test]
    fn statuses() {
        let cases = [
            (GamelogError::UnsupportedSport("mlb".into()), Status::BadRequest),
            (
                GamelogError::SchemaResolutionFailure {
                    missing: vec!["PTS"],
                },
                Status::UnprocessableEntity,
            ),
            (GamelogError::MalformedDocument("labels"), Status::BadGateway),
        ];
        for (err, status) in cases {
            assert_eq!(ApiError::from(err).status(), status);
        }
        assert_eq!(
            ApiError::from(anyhow::anyhow!("timed out")).to_string(),
            "upstream feed failed: timed out"
        );
    }
}
