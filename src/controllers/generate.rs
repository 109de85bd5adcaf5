use axum::{extract::State, Json};
use std::sync::Arc;

use crate::{
    domain::generation::{
        GenerateRequest, GenerateResponse, GenerationService, GenerationServiceApi,
    },
    error::{AppError, AppResult},
};

pub struct GenerateController {
    generation_service: Arc<GenerationService>,
}

impl GenerateController {
    pub fn new(generation_service: Arc<GenerationService>) -> Self {
        Self { generation_service }
    }

    /// POST /api/generate - Draft three reply versions for a received email
    pub async fn generate(
        State(controller): State<Arc<GenerateController>>,
        Json(request): Json<GenerateRequest>,
    ) -> AppResult<Json<GenerateResponse>> {
        let response = controller
            .generation_service
            .generate(request)
            .await
            .map_err(|e| AppError::from(e))?;

        Ok(Json(response))
    }
}
