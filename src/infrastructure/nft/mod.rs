// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

pub mod helius;
pub mod indexer;

pub use helius::HeliusClient;
pub use indexer::{IndexerError, NftIndexer};
