// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use std::time::Duration;

/// 轮询策略配置
///
/// 控制单个生成任务的状态轮询节奏和预算。
/// 远程服务不保证任务会在有限时间内结束，因此必须设置轮询次数上限。
#[derive(Debug, Clone)]
pub struct PollPolicy {
    /// 两次状态查询之间的固定间隔
    pub interval: Duration,
    /// 最大轮询次数，超出后任务视为超时失败
    pub max_attempts: u32,
}

impl Default for PollPolicy {
    fn default() -> Self {
        Self {
            // 远程生成API的约定轮询间隔为5秒
            interval: Duration::from_secs(5),
            max_attempts: 120,
        }
    }
}

impl PollPolicy {
    /// 创建标准轮询策略（5秒间隔，10分钟预算）
    pub fn standard() -> Self {
        Self::default()
    }

    /// 根据配置值创建轮询策略
    pub fn new(interval_secs: u64, max_attempts: u32) -> Self {
        Self {
            interval: Duration::from_secs(interval_secs),
            max_attempts,
        }
    }

    /// 创建快速轮询策略（更短的间隔，适合测试）
    pub fn fast() -> Self {
        Self {
            interval: Duration::from_millis(10),
            max_attempts: 10,
        }
    }

    /// 判断预算是否已耗尽
    ///
    /// # 参数
    ///
    /// * `attempt` - 已完成的轮询次数
    pub fn exhausted(&self, attempt: u32) -> bool {
        attempt >= self.max_attempts
    }

    /// 轮询预算对应的总等待时长
    pub fn budget(&self) -> Duration {
        self.interval * self.max_attempts
    }
}
