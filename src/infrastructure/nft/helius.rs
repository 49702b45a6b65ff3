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

use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use serde_json::{json, Value};
use tracing::{debug, info};

use crate::config::settings::HeliusSettings;
use crate::domain::models::Nft;
use crate::infrastructure::nft::indexer::{IndexerError, NftIndexer};

/// 单页查询的代币账户数量上限
const TOKEN_ACCOUNT_PAGE_LIMIT: u32 = 100;

#[derive(Debug, Deserialize)]
struct RpcEnvelope<T> {
    result: Option<T>,
    error: Option<Value>,
}

#[derive(Debug, Deserialize)]
struct TokenAccountsResult {
    #[serde(default)]
    token_accounts: Vec<TokenAccount>,
}

#[derive(Debug, Deserialize)]
struct TokenAccount {
    mint: String,
}

#[derive(Debug, Deserialize)]
struct Asset {
    id: String,
    content: Option<AssetContent>,
}

#[derive(Debug, Deserialize)]
struct AssetContent {
    metadata: Option<AssetMetadata>,
    #[serde(default)]
    files: Vec<AssetFile>,
}

#[derive(Debug, Deserialize)]
struct AssetMetadata {
    name: Option<String>,
}

#[derive(Debug, Deserialize)]
struct AssetFile {
    cdn_uri: Option<String>,
}

/// Helius索引服务客户端
///
/// 通过JSON-RPC查询钱包的代币账户，再批量解析资产元数据。
///
/// # 配置
///
/// 通过 `helius` 配置段（或 `REELRS__HELIUS__*` 环境变量）提供：
/// - `api_key` - API密钥（以查询参数传递）
/// - `base_url` - RPC端点基础URL
pub struct HeliusClient {
    client: Client,
    api_key: String,
    base_url: String,
}

impl HeliusClient {
    /// 创建新的Helius客户端实例
    pub fn new(settings: &HeliusSettings) -> Self {
        Self::with_base_url(settings.base_url.clone(), settings.api_key.clone())
    }

    /// 使用显式基础URL创建客户端（测试中指向模拟服务器）
    pub fn with_base_url(base_url: String, api_key: String) -> Self {
        Self {
            client: Client::new(),
            api_key,
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    async fn rpc_call<T: serde::de::DeserializeOwned>(
        &self,
        method: &str,
        params: Value,
    ) -> Result<T, IndexerError> {
        let url = format!("{}/?api-key={}", self.base_url, self.api_key);
        let response = self
            .client
            .post(&url)
            .json(&json!({
                "jsonrpc": "2.0",
                "id": "reelrs",
                "method": method,
                "params": params,
            }))
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let body = response.text().await.unwrap_or_default();
            return Err(IndexerError::Rpc { status, body });
        }

        let envelope: RpcEnvelope<T> = response
            .json()
            .await
            .map_err(|e| IndexerError::InvalidResponse(e.to_string()))?;

        if let Some(error) = envelope.error {
            return Err(IndexerError::InvalidResponse(error.to_string()));
        }

        envelope
            .result
            .ok_or_else(|| IndexerError::InvalidResponse(format!("{} returned no result", method)))
    }
}

#[async_trait]
impl NftIndexer for HeliusClient {
    async fn fetch_nfts(&self, wallet_address: &str) -> Result<Vec<Nft>, IndexerError> {
        info!("Fetching NFTs for wallet: {}", wallet_address);

        let accounts: TokenAccountsResult = self
            .rpc_call(
                "getTokenAccounts",
                json!({
                    "page": 1,
                    "limit": TOKEN_ACCOUNT_PAGE_LIMIT,
                    "displayOptions": { "showZeroBalance": false },
                    "owner": wallet_address,
                }),
            )
            .await?;

        if accounts.token_accounts.is_empty() {
            debug!("No token accounts found for wallet: {}", wallet_address);
            return Ok(Vec::new());
        }

        let mints: Vec<String> = accounts
            .token_accounts
            .into_iter()
            .map(|t| t.mint)
            .collect();

        let assets: Vec<Asset> = self
            .rpc_call("getAssetBatch", json!({ "ids": mints }))
            .await?;

        let nfts: Vec<Nft> = assets
            .into_iter()
            .filter_map(|asset| {
                let content = asset.content?;
                // 空字符串与缺失同样视为无可用图片
                let image_uri = content
                    .files
                    .iter()
                    .find_map(|f| f.cdn_uri.clone().filter(|u| !u.is_empty()))?;
                let name = content
                    .metadata
                    .and_then(|m| m.name)
                    .unwrap_or_else(|| format!("NFT {}", asset.id));
                Some(Nft {
                    name,
                    image_uri,
                    mint: asset.id,
                })
            })
            .collect();

        info!("Fetched {} NFTs for wallet: {}", nfts.len(), wallet_address);
        Ok(nfts)
    }
}
