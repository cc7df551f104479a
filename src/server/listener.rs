use anyhow::Context;
use std::net::SocketAddr;
use tokio::net::TcpListener;
use tracing::info;

use crate::config::Config;
use crate::http::connection::Connection;

/// The listening socket plus the settings handed to every connection.
#[derive(Debug)]
pub struct Server {
    listener: TcpListener,
    config: Config,
}

impl Server {
    /// Binds the listening socket. Fails fast (e.g. port already in use)
    /// so the process can exit non-zero before serving anything.
    pub async fn bind(config: Config) -> anyhow::Result<Self> {
        let listener = TcpListener::bind(&config.listen_addr)
            .await
            .with_context(|| format!("failed to bind {}", config.listen_addr))?;
        info!("Listening on {}", listener.local_addr()?);

        Ok(Self { listener, config })
    }

    /// The actual bound address; differs from the configured one when
    /// binding port 0.
    pub fn local_addr(&self) -> anyhow::Result<SocketAddr> {
        Ok(self.listener.local_addr()?)
    }

    /// Accept loop. Each connection runs in its own task; a failed
    /// connection is logged and never affects the others.
    pub async fn serve(self) -> anyhow::Result<()> {
        loop {
            let (socket, peer) = self.listener.accept().await?;
            info!("Accepted connection from {}", peer);

            // Timed chunks should hit the wire immediately, not sit in
            // the Nagle buffer.
            socket.set_nodelay(true).ok();

            let config = self.config.clone();
            tokio::spawn(async move {
                let mut conn = Connection::new(socket, config);
                if let Err(e) = conn.run().await {
                    tracing::error!("Connection error from {}: {}", peer, e);
                }
            });
        }
    }
}
