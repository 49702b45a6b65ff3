// Copyright 2025 Kirky.X
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use axum::{
    extract::{Extension, Json},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use std::sync::Arc;
use tracing::{error, warn};

use crate::{
    application::dto::{convert_request::ConvertRequestDto, convert_response::ConvertResponseDto},
    domain::services::ConversionOrchestrator,
    presentation::errors::AppError,
};

/// 批量转换处理器
///
/// 校验请求后交给编排器执行，所有任务到达终态后按原有线上契约
/// 收敛结果：至少一项成功返回200和成功子集，全部失败返回500和通用消息
pub async fn convert_to_video(
    Extension(orchestrator): Extension<Arc<ConversionOrchestrator>>,
    Json(payload): Json<ConvertRequestDto>,
) -> Result<Response, AppError> {
    let request = match payload.into_request() {
        Some(request) => request,
        None => {
            warn!("Missing required fields in conversion request");
            return Ok((
                StatusCode::BAD_REQUEST,
                Json(serde_json::json!({
                    "error": "Missing required fields: model, imageUrls, promptText"
                })),
            )
                .into_response());
        }
    };

    let batch = orchestrator.convert(request).await?;

    if batch.succeeded() {
        Ok((StatusCode::OK, Json(ConvertResponseDto::from(&batch))).into_response())
    } else {
        error!(
            "All {} video conversions failed, no valid results to return",
            batch.total_requested()
        );
        Ok((
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(serde_json::json!({
                "error": "No videos were successfully generated."
            })),
        )
            .into_response())
    }
}
