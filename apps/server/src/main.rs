use anyhow::Context;
use roster::domain::config::ApiConfig;
use roster::kernel::config::load_config;
use roster_server::{Server, init_logger};

#[roster_runtime::main(high_performance)]
async fn main() -> anyhow::Result<()> {
    let cfg: ApiConfig = load_config(None::<&str>).context("Critical: Configuration is malformed")?;

    let _log = init_logger(env!("CARGO_PKG_NAME"), &cfg.log)?;

    Server::builder().config(cfg).build()?.run().await
}
