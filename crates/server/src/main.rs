use std::{error::Error, net::SocketAddr};

use axum::serve::serve;
use clap::Parser;
use tokio::net::TcpListener;
use tracing::{info, level_filters::LevelFilter};

use crate::{
    service::service,
    state::{persistence::InMemoryPersistence, Store},
};

mod service;
mod state;

#[derive(Debug, Parser)]
#[clap(name = "taskboard-server", about = "REST backend for the taskboard task tracker")]
struct Opt {
    /// Address the HTTP API listens on.
    #[clap(long, default_value = "[::1]:8080")]
    listen_address: SocketAddr,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::builder()
                .with_default_directive(LevelFilter::INFO.into())
                .from_env_lossy(),
        )
        .init();

    let opt = Opt::parse();

    let store = Store::new(InMemoryPersistence::new());

    let listener = TcpListener::bind(opt.listen_address).await?;
    info!(address = %listener.local_addr()?, "serving");
    serve(
        listener,
        service(store).into_make_service_with_connect_info::<SocketAddr>(),
    )
    .await?;

    Ok(())
}
