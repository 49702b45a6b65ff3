// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 视频生成服务集成
pub mod generation;

/// NFT索引服务集成
pub mod nft;
