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
use thiserror::Error;

use crate::domain::models::Nft;

/// 索引客户端错误类型
#[derive(Error, Debug)]
pub enum IndexerError {
    /// 传输层失败
    #[error("Request failed: {0}")]
    Transport(#[from] reqwest::Error),
    /// RPC调用被拒绝
    #[error("RPC rejected: {status} - {body}")]
    Rpc { status: u16, body: String },
    /// 响应格式不符合预期
    #[error("Unexpected response: {0}")]
    InvalidResponse(String),
}

/// NFT索引特质
///
/// 封装对外部链上索引服务的只读查询：按钱包地址列出可展示的NFT。
#[async_trait]
pub trait NftIndexer: Send + Sync {
    /// 查询钱包地址拥有的NFT
    ///
    /// 没有可用图片的资产不会出现在结果中；空钱包返回空列表而非错误
    async fn fetch_nfts(&self, wallet_address: &str) -> Result<Vec<Nft>, IndexerError>;
}
