// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

pub mod job;
pub mod nft;

pub use job::{BatchResult, JobHandle, JobOutcome, JobStatus, TaskState};
pub use nft::Nft;
