//! Liveness and readiness probes on a dedicated listener.
//!
//! Kept off the API router so orchestrator probes keep answering even if
//! the API listener is saturated or not yet bound.

use anyhow::Result;
use http_body_util::Full;
use hyper::body::Bytes;
use hyper::server::conn::http1;
use hyper::service::service_fn;
use hyper::{Method, Request, Response, StatusCode};
use hyper_util::rt::TokioIo;
use std::convert::Infallible;
use std::net::SocketAddr;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use tokio::net::TcpListener;
use tokio::sync::oneshot;
use tracing::{debug, info};

/// Readiness flag shared between the API server and the probe listener
#[derive(Clone, Default)]
pub struct ProbeServer {
    ready: Arc<AtomicBool>,
}

impl ProbeServer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_ready(&self, ready: bool) {
        self.ready.store(ready, Ordering::SeqCst);
    }

    pub fn is_ready(&self) -> bool {
        self.ready.load(Ordering::SeqCst)
    }

    /// Accept probe connections until the task is dropped.
    ///
    /// `bound_tx` fires once the listener is bound.
    pub async fn serve(&self, port: u16, bound_tx: oneshot::Sender<()>) -> Result<()> {
        let addr = SocketAddr::from(([0, 0, 0, 0], port));
        let listener = TcpListener::bind(addr).await?;

        info!(port = port, "Probe server listening");
        let _ = bound_tx.send(());

        loop {
            let (stream, remote_addr) = listener.accept().await?;
            let io = TokioIo::new(stream);
            let probes = self.clone();

            tokio::spawn(async move {
                let service = service_fn(move |req| {
                    let probes = probes.clone();
                    async move { Ok::<_, Infallible>(probes.respond(&req)) }
                });

                if let Err(err) = http1::Builder::new().serve_connection(io, service).await {
                    debug!(
                        error = %err,
                        remote_addr = %remote_addr,
                        "Probe connection error"
                    );
                }
            });
        }
    }

    fn respond<B>(&self, req: &Request<B>) -> Response<Full<Bytes>> {
        match (req.method(), req.uri().path()) {
            (&Method::GET, "/healthz") => plain(StatusCode::OK, "ok"),
            (&Method::GET, "/readyz") if self.is_ready() => plain(StatusCode::OK, "ok"),
            (&Method::GET, "/readyz") => plain(StatusCode::SERVICE_UNAVAILABLE, "not ready"),
            _ => plain(StatusCode::NOT_FOUND, "not found"),
        }
    }
}

fn plain(status: StatusCode, body: &'static str) -> Response<Full<Bytes>> {
    let mut response = Response::new(Full::new(Bytes::from_static(body.as_bytes())));
    *response.status_mut() = status;
    response.headers_mut().insert(
        hyper::header::CONTENT_TYPE,
        hyper::header::HeaderValue::from_static("text/plain"),
    );
    response
}

#[cfg(test)]
mod tests {
    use super::*;

    fn get(path: &str) -> Request<()> {
        Request::builder()
            .method(Method::GET)
            .uri(path)
            .body(())
            .unwrap()
    }

    #[test]
    fn test_liveness_always_ok() {
        let probes = ProbeServer::new();
        assert_eq!(probes.respond(&get("/healthz")).status(), StatusCode::OK);
    }

    #[test]
    fn test_readiness_follows_flag() {
        let probes = ProbeServer::new();
        assert_eq!(
            probes.respond(&get("/readyz")).status(),
            StatusCode::SERVICE_UNAVAILABLE
        );

        probes.set_ready(true);
        assert!(probes.is_ready());
        assert_eq!(probes.respond(&get("/readyz")).status(), StatusCode::OK);
    }

    #[test]
    fn test_unknown_path() {
        let probes = ProbeServer::new();
        assert_eq!(probes.respond(&get("/metrics")).status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn test_clones_share_readiness() {
        let probes = ProbeServer::new();
        let clone = probes.clone();
        clone.set_ready(true);
        assert!(probes.is_ready());
    }
}
