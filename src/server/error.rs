use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;
use tracing::error;

use crate::error::RecipeFinderError;

#[derive(Error, Debug)]
pub enum ApiError {
    #[error("Ingredients parameter is required")]
    MissingIngredients,

    #[error("Recipe not found")]
    RecipeNotFound,

    #[error("Internal error: {0}")]
    Internal(String),
}

impl From<recipe_finder_common::Error> for ApiError {
    fn from(err: recipe_finder_common::Error) -> Self {
        match err {
            recipe_finder_common::Error::EmptyPantry => ApiError::MissingIngredients,
            other => ApiError::Internal(other.to_string()),
        }
    }
}

impl From<RecipeFinderError> for ApiError {
    fn from(err: RecipeFinderError) -> Self {
        match err {
            RecipeFinderError::RecipeNotFound(_) => ApiError::RecipeNotFound,
            RecipeFinderError::Common(inner) => inner.into(),
            other => ApiError::Internal(other.to_string()),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match self {
            ApiError::MissingIngredients => StatusCode::BAD_REQUEST,
            ApiError::RecipeNotFound => StatusCode::NOT_FOUND,
            ApiError::Internal(ref msg) => {
                error!("Request failed: {msg}");
                StatusCode::INTERNAL_SERVER_ERROR
            }
        };

        (status, Json(json!({ "message": self.to_string() }))).into_response()
    }
}
