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

use serde::{Deserialize, Serialize};

use crate::domain::services::ConversionRequest;

/// 批量转换请求数据传输对象
///
/// 所有字段在线格式中均为可选，缺失字段由处理器以400拒绝，
/// 而不是交给框架的反序列化拒绝机制
#[derive(Debug, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ConvertRequestDto {
    /// 生成模型标识符
    pub model: Option<String>,
    /// 输入图片URL列表
    pub image_urls: Option<Vec<String>>,
    /// 提示词
    pub prompt_text: Option<String>,
}

impl ConvertRequestDto {
    /// 检查所有必填字段是否存在，并转换为领域请求
    pub fn into_request(self) -> Option<ConversionRequest> {
        match (self.model, self.image_urls, self.prompt_text) {
            (Some(model), Some(image_urls), Some(prompt_text)) => Some(ConversionRequest {
                model,
                image_urls,
                prompt_text,
            }),
            _ => None,
        }
    }
}
