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

use reelrs::config::settings::Settings;
use reelrs::domain::services::ConversionOrchestrator;
use reelrs::infrastructure::generation::{GenerationClient, RunwayClient};
use reelrs::infrastructure::nft::{HeliusClient, NftIndexer};
use reelrs::presentation::routes;
use reelrs::utils::telemetry;
use reelrs::utils::PollPolicy;
use std::sync::Arc;
use tokio::net::TcpListener;
use tracing::info;

/// 主函数
///
/// 应用程序入口点，负责初始化所有组件并启动服务
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // 1. Initialize logging
    telemetry::init_telemetry();
    info!("Starting reelrs...");

    // 2. Load configuration
    let settings = Arc::new(Settings::new()?);
    info!("Configuration loaded");

    // 3. Initialize remote API clients
    let generation_client: Arc<dyn GenerationClient> =
        Arc::new(RunwayClient::new(&settings.runway));
    let indexer: Arc<dyn NftIndexer> = Arc::new(HeliusClient::new(&settings.helius));
    info!("Remote API clients initialized");

    // 4. Initialize the conversion orchestrator
    let policy = PollPolicy::new(
        settings.runway.poll_interval_secs,
        settings.runway.max_poll_attempts,
    );
    let orchestrator = Arc::new(ConversionOrchestrator::new(
        generation_client,
        policy,
        settings.runway.max_concurrency,
    ));

    // 5. Start HTTP server
    let app = routes::routes(orchestrator, indexer);

    let addr = format!("{}:{}", settings.server.host, settings.server.port);
    let listener = TcpListener::bind(&addr).await?;
    info!("Server listening on {}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}
