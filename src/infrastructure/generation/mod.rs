// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

pub mod client;
pub mod runway;

pub use client::{GenerationClient, GenerationError};
pub use runway::RunwayClient;
