//! Demonstration entry-point: renders one user's feed and a synthetic feed.
//!
//! Collaborators are the in-memory fixtures unless `FEED_BASE_URL` (or
//! `--base-url`) points at a JSON user source, in which case the HTTP adapters
//! are used. Models are written to stdout as JSON.

use std::env;
use std::sync::Arc;

use color_eyre::eyre::{Context, Result, eyre};
use ortho_config::OrthoConfig;
use serde::Serialize;
use tokio::runtime::Builder;
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, fmt};

use feed::config::FeedSettings;
use feed::domain::ports::{
    FixtureNetworkClient, FixtureUserSource, NetworkClient, UserSource,
};
use feed::domain::{FeedRepository, FeedService, UiModel};
use feed::outbound::http::{HttpNetworkClient, HttpUserSource};

const PING_PATH: &str = "/";

/// Both models rendered by one demo run.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct DemoOutput {
    user_feed: UiModel,
    synthetic_feed: UiModel,
}

fn main() -> Result<()> {
    color_eyre::install()?;
    let settings = FeedSettings::load_from_iter(env::args_os())
        .map_err(|err| eyre!("failed to load feed settings: {err}"))?;
    if settings.enable_logging() {
        init_tracing();
    }

    let runtime = Builder::new_current_thread()
        .enable_all()
        .build()
        .wrap_err("failed to build demo runtime")?;
    runtime.block_on(run(settings))
}

fn init_tracing() {
    if let Err(e) = fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .json()
        .try_init()
    {
        warn!(error = %e, "tracing init failed");
    }
}

async fn run(settings: FeedSettings) -> Result<()> {
    match settings.base_url().wrap_err("invalid feed settings")? {
        Some(base) => {
            info!(base_url = %base, "using HTTP collaborators");
            let source = HttpUserSource::new(base.clone(), settings.timeout())
                .wrap_err("failed to build user source")?;
            let network = HttpNetworkClient::new(base, settings.timeout())
                .wrap_err("failed to build network client")?;
            let service = build_service(source, network, &settings);
            if let Err(e) = service.ping(PING_PATH).await {
                warn!(error = %e, "user source ping failed");
            }
            render(&service, &settings).await
        }
        None => {
            info!("using fixture collaborators");
            let service = build_service(
                FixtureUserSource::default(),
                FixtureNetworkClient::default(),
                &settings,
            );
            render(&service, &settings).await
        }
    }
}

fn build_service<S, N>(source: S, network: N, settings: &FeedSettings) -> FeedService<S, N> {
    let repository = FeedRepository::with_page_size(Arc::new(source), settings.page_size());
    FeedService::new(repository, Arc::new(network))
        .with_remote_activity(settings.remote_activity())
}

async fn render<S, N>(service: &FeedService<S, N>, settings: &FeedSettings) -> Result<()>
where
    S: UserSource,
    N: NetworkClient,
{
    let user_id = settings.demo_user_id();
    let user_feed = UiModel::from_result(service.build_ui_for_user(user_id).await);
    if let Some(message) = user_feed.error() {
        warn!(user_id, error = message, "user feed failed");
    }
    let output = DemoOutput {
        user_feed,
        synthetic_feed: service.demo_complex_flow(settings.demo_users()),
    };

    let json = serde_json::to_string_pretty(&output).wrap_err("failed to serialise models")?;
    println!("{json}");
    Ok(())
}
