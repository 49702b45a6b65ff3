// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// 生成任务句柄
///
/// 任务提交成功后由远程服务分配，创建后不可变。
/// 每个句柄在其生命周期内由唯一一个轮询任务独占持有。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JobHandle {
    /// 远程服务分配的任务标识符（不透明字符串）
    pub task_id: String,
    /// 对应的输入图片URL
    pub source_url: String,
}

/// 远程任务状态枚举
///
/// 表示生成任务在远程服务中的当前阶段。
/// 状态转换遵循以下流程：
/// Pending/Throttled → Running → Succeeded/Failed
/// Succeeded 和 Failed 为终态，到达后不再发生转换。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TaskState {
    /// 已接收，尚未开始处理
    #[default]
    Pending,
    /// 被远程服务限流，等待调度
    Throttled,
    /// 处理中
    Running,
    /// 已成功，输出可用
    Succeeded,
    /// 已失败
    Failed,
}

impl TaskState {
    /// 判断状态是否为终态
    pub fn is_terminal(&self) -> bool {
        matches!(self, TaskState::Succeeded | TaskState::Failed)
    }
}

impl fmt::Display for TaskState {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            TaskState::Pending => write!(f, "PENDING"),
            TaskState::Throttled => write!(f, "THROTTLED"),
            TaskState::Running => write!(f, "RUNNING"),
            TaskState::Succeeded => write!(f, "SUCCEEDED"),
            TaskState::Failed => write!(f, "FAILED"),
        }
    }
}

impl FromStr for TaskState {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "PENDING" => Ok(TaskState::Pending),
            "THROTTLED" => Ok(TaskState::Throttled),
            "RUNNING" => Ok(TaskState::Running),
            "SUCCEEDED" => Ok(TaskState::Succeeded),
            "FAILED" => Ok(TaskState::Failed),
            _ => Err(()),
        }
    }
}

/// 一次状态查询的观测结果
#[derive(Debug, Clone, PartialEq)]
pub struct JobStatus {
    /// 任务标识符
    pub task_id: String,
    /// 当前状态
    pub state: TaskState,
    /// 进度百分比（0-100，仅处理中可用）
    pub progress: Option<f32>,
    /// 输出URL列表（仅成功后可用）
    pub output: Vec<String>,
    /// 失败原因（仅失败后可用）
    pub failure: Option<String>,
}

impl JobStatus {
    /// 判断任务是否已到达终态
    pub fn is_terminal(&self) -> bool {
        self.state.is_terminal()
    }
}

/// 单项转换结果
///
/// 带标签的成功/失败变体会原样传递到批次边界，
/// 失败原因在核心层不会被丢弃。
#[derive(Debug, Clone, PartialEq)]
pub enum JobOutcome {
    /// 转换成功
    Success {
        /// 任务标识符
        task_id: String,
        /// 生成的视频URL
        video_url: String,
    },
    /// 转换失败（提交失败、查询失败、远程失败或超时）
    Failure {
        /// 对应的输入图片URL
        source_url: String,
        /// 失败原因
        reason: String,
    },
}

impl JobOutcome {
    pub fn is_success(&self) -> bool {
        matches!(self, JobOutcome::Success { .. })
    }
}

/// 批次聚合结果
///
/// 所有任务到达终态后一次性构造，此后不可变。
/// 编排器是聚合缓冲区的唯一写入者。
#[derive(Debug, Clone)]
pub struct BatchResult {
    outcomes: Vec<JobOutcome>,
    total_requested: usize,
}

impl BatchResult {
    pub fn new(outcomes: Vec<JobOutcome>, total_requested: usize) -> Self {
        Self {
            outcomes,
            total_requested,
        }
    }

    /// 所有单项结果（含失败项）
    pub fn outcomes(&self) -> &[JobOutcome] {
        &self.outcomes
    }

    /// 成功项迭代器
    pub fn successes(&self) -> impl Iterator<Item = &JobOutcome> {
        self.outcomes.iter().filter(|o| o.is_success())
    }

    /// 成功项数量
    pub fn success_count(&self) -> usize {
        self.successes().count()
    }

    /// 批次整体是否成功（至少一项成功）
    pub fn succeeded(&self) -> bool {
        self.outcomes.iter().any(|o| o.is_success())
    }

    /// 请求的任务总数
    pub fn total_requested(&self) -> usize {
        self.total_requested
    }
}
