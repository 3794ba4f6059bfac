//! HTTP server
//!
//! Accept loop and per-connection dispatch into the handler router. Uses
//! hyper's low-level http1 server with one spawned task per connection.

use std::sync::Arc;
use hyper::server::conn::http1;
use hyper::service::service_fn;
use hyper_util::rt::TokioIo;
use tokio::net::TcpListener;
use tokio::sync::watch;
use tracing::{error, info};

use crate::handlers::{self, AppContext};
use crate::middleware::RequestLogger;
use crate::utils::errors::Result;

/// Run the HTTP server until the shutdown signal flips
pub async fn start_server(
    ctx: Arc<AppContext>,
    logger: Arc<RequestLogger>,
    mut shutdown: watch::Receiver<bool>,
) -> Result<()> {
    let addr = format!("{}:{}", ctx.settings.server.host, ctx.settings.server.port);
    let listener = TcpListener::bind(&addr).await?;

    info!(addr = %addr, "HTTP server started");

    loop {
        tokio::select! {
            result = listener.accept() => {
                match result {
                    Ok((stream, peer)) => {
                        let io = TokioIo::new(stream);
                        let ctx = ctx.clone();
                        let logger = logger.clone();

                        tokio::spawn(async move {
                            let service = service_fn(move |req| {
                                let ctx = ctx.clone();
                                let logger = logger.clone();
                                async move {
                                    let span = logger.start(req.method().as_str(), req.uri().path());
                                    let response = handlers::route(req, ctx).await;
                                    if let Some(span) = span {
                                        span.complete(response.status().as_u16());
                                    }
                                    Ok::<_, std::convert::Infallible>(response)
                                }
                            });

                            if let Err(e) = http1::Builder::new()
                                .serve_connection(io, service)
                                .await
                            {
                                error!(peer = %peer, error = %e, "HTTP connection error");
                            }
                        });
                    }
                    Err(e) => {
                        error!(error = %e, "Failed to accept connection");
                    }
                }
            }
            _ = shutdown.changed() => {
                if *shutdown.borrow() {
                    info!("HTTP server shutting down");
                    return Ok(());
                }
            }
        }
    }
}
