// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 工具模块
///
/// 提供轮询策略和遥测初始化等通用功能
pub mod poll_policy;
pub mod telemetry;

pub use poll_policy::PollPolicy;
