use anyhow::Context;
use tokio::net::TcpListener;
use tracing::info;

use crate::config::{Config, ServeRoot};
use crate::http::connection::Connection;

pub async fn run(cfg: &Config) -> anyhow::Result<()> {
    let listener = TcpListener::bind(&cfg.listen_addr)
        .await
        .with_context(|| format!("binding {}", cfg.listen_addr))?;
    info!("Listening on {}", cfg.listen_addr);
    info!("Serving files from {}", cfg.directory);

    serve(listener, cfg.directory.clone()).await
}

/// Accepts connections forever, one task per connection.
pub async fn serve(listener: TcpListener, root: ServeRoot) -> anyhow::Result<()> {
    loop {
        let (socket, peer) = listener.accept().await.context("accepting connection")?;
        info!("Accepted connection from {}", peer);

        let root = root.clone();
        tokio::spawn(async move {
            let mut conn = Connection::new(socket, root);
            if let Err(e) = conn.run().await {
                tracing::error!("Connection error from {}: {:#}", peer, e);
            }
        });
    }
}
