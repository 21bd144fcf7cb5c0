pub mod api;
pub mod config;
pub mod identity;
pub mod logging;
pub mod profile;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let _ = dotenvy::dotenv();

    logging::init_logging("github-profile");

    let config = config::Config::from_env()?;
    tracing::info!(
        bind_addr = %config.bind_addr,
        github_api_url = %config.github_api_url,
        "starting github-profile"
    );

    api::server::start_server(config).await
}
