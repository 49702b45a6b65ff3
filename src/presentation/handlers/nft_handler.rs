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
use tracing::error;

use crate::{
    application::dto::{nft_request::FetchNftsRequestDto, nft_response::FetchNftsResponseDto},
    infrastructure::nft::NftIndexer,
};

/// NFT查询处理器
///
/// 对索引服务的只读透传：按钱包地址返回可展示的NFT列表
pub async fn fetch_nfts(
    Extension(indexer): Extension<Arc<dyn NftIndexer>>,
    Json(payload): Json<FetchNftsRequestDto>,
) -> Response {
    let wallet_address = match payload.wallet_address {
        Some(addr) if !addr.trim().is_empty() => addr,
        _ => {
            return (
                StatusCode::BAD_REQUEST,
                Json(serde_json::json!({
                    "error": "walletAddress is required"
                })),
            )
                .into_response();
        }
    };

    match indexer.fetch_nfts(&wallet_address).await {
        Ok(nfts) => (StatusCode::OK, Json(FetchNftsResponseDto { nfts })).into_response(),
        Err(e) => {
            error!("Error fetching NFTs for {}: {}", wallet_address, e);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(serde_json::json!({
                    "error": e.to_string()
                })),
            )
                .into_response()
        }
    }
}
