use axum::extract::FromRequest;

use crate::error::ApiError;

/// JSON body extractor whose rejections are answered with the error envelope.
#[derive(Debug, FromRequest)]
#[from_request(via(axum::Json), rejection(ApiError))]
pub struct Json<T>(pub T);
