// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use axum::{
    routing::{get, post},
    Extension, Router,
};
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::domain::services::ConversionOrchestrator;
use crate::infrastructure::nft::NftIndexer;
use crate::presentation::handlers::{convert_handler, nft_handler};

/// 创建应用路由
///
/// # 参数
///
/// * `orchestrator` - 批量转换编排器
/// * `indexer` - NFT索引客户端
///
/// # 返回值
///
/// 返回配置好的路由
pub fn routes(orchestrator: Arc<ConversionOrchestrator>, indexer: Arc<dyn NftIndexer>) -> Router {
    Router::new()
        .route("/", get(root))
        .route("/health", get(health_check))
        .route("/version", get(version))
        .route("/convert-to-video", post(convert_handler::convert_to_video))
        .route("/fetch-nfts", post(nft_handler::fetch_nfts))
        .layer(Extension(orchestrator))
        .layer(Extension(indexer))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
}

/// 根端点，基础存活探测
pub async fn root() -> &'static str {
    "reelrs server is running!"
}

/// 健康检查端点
///
/// # 返回值
///
/// 返回"OK"字符串
pub async fn health_check() -> &'static str {
    "OK"
}

/// 版本信息端点
///
/// # 返回值
///
/// 返回应用版本号
pub async fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
