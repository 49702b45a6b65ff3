// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use serde::{Deserialize, Serialize};

/// NFT实体
///
/// 表示钱包地址拥有的一个NFT及其展示所需的元数据。
/// 没有可用图片的资产在索引层即被过滤掉。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Nft {
    /// NFT名称，元数据缺失时回退为 "NFT <mint>"
    pub name: String,
    /// 图片的CDN地址
    pub image_uri: String,
    /// 铸造地址，NFT的链上唯一标识
    pub mint: String,
}
