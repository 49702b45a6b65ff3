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

use config::builder::DefaultState;
use config::{Config, ConfigBuilder, ConfigError, Environment, File};
use serde::Deserialize;

/// 应用程序配置设置
///
/// 包含服务器、视频生成API和NFT索引API的所有配置项
#[derive(Debug, Deserialize)]
pub struct Settings {
    /// 服务器配置
    pub server: ServerSettings,
    /// 视频生成API配置
    pub runway: RunwaySettings,
    /// NFT索引API配置
    pub helius: HeliusSettings,
}

/// 服务器配置设置
#[derive(Debug, Deserialize)]
pub struct ServerSettings {
    /// 服务器监听主机地址
    pub host: String,
    /// 服务器监听端口
    pub port: u16,
}

/// 视频生成API配置设置
#[derive(Debug, Deserialize)]
pub struct RunwaySettings {
    /// API密钥
    pub api_key: String,
    /// API基础URL
    pub base_url: String,
    /// API版本号
    pub api_version: String,
    /// 状态轮询间隔（秒）
    pub poll_interval_secs: u64,
    /// 单任务最大轮询次数
    pub max_poll_attempts: u32,
    /// 同时在途任务数上限
    pub max_concurrency: usize,
}

/// NFT索引API配置设置
#[derive(Debug, Deserialize)]
pub struct HeliusSettings {
    /// API密钥
    pub api_key: String,
    /// RPC端点基础URL
    pub base_url: String,
}

impl Settings {
    /// 创建新的配置实例
    ///
    /// 从环境变量加载配置，支持默认值
    ///
    /// # Returns
    ///
    /// * `Ok(Settings)` - 成功加载的配置
    /// * `Err(ConfigError)` - 配置加载失败
    pub fn new() -> Result<Self, ConfigError> {
        let env = std::env::var("APP_ENVIRONMENT").unwrap_or_else(|_| "default".to_string());
        let builder = Self::defaults()?
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name(&format!("config/{}", env)).required(false))
            .add_source(Environment::with_prefix("REELRS").separator("__"));

        builder.build()?.try_deserialize()
    }

    /// 程序内置的默认配置，不含文件和环境变量来源
    fn defaults() -> Result<ConfigBuilder<DefaultState>, ConfigError> {
        Config::builder()
            // Start with default settings
            .set_default("server.host", "0.0.0.0")?
            .set_default("server.port", 3000)?
            // Default generation API settings
            .set_default("runway.api_key", "")?
            .set_default("runway.base_url", "https://api.dev.runwayml.com")?
            .set_default("runway.api_version", "2024-11-06")?
            .set_default("runway.poll_interval_secs", 5)?
            .set_default("runway.max_poll_attempts", 120)?
            .set_default("runway.max_concurrency", 5)?
            // Default indexer API settings
            .set_default("helius.api_key", "")?
            .set_default("helius.base_url", "https://mainnet.helius-rpc.com")
    }
}
