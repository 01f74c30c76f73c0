use actix_web::dev::Payload;
use actix_web::{FromRequest, HttpRequest};

use crate::domain::record_id::RecordId;
use crate::error::AppError;
use crate::errors::ErrorCode;

/// Game ID extracted from the route path parameter.
///
/// Only the token shape is validated here (400 on a malformed id); whether
/// the id resolves to a stored record stays a per-handler concern so each
/// operation can answer 404 with its own wording.
#[derive(Debug, Clone)]
pub struct GameId(pub RecordId);

impl FromRequest for GameId {
    type Error = AppError;
    type Future = std::future::Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _: &mut Payload) -> Self::Future {
        let result = match req.match_info().get("game_id") {
            Some(raw) => RecordId::parse(raw).map(GameId).ok_or_else(|| {
                AppError::bad_request(ErrorCode::InvalidGameId, "Invalid GameID format")
            }),
            None => Err(AppError::bad_request(
                ErrorCode::InvalidGameId,
                "Missing game_id parameter",
            )),
        };

        std::future::ready(result)
    }
}
