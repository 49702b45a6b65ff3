// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

pub mod convert_request;
pub mod convert_response;
pub mod nft_request;
pub mod nft_response;
