use crate::core::sequence::Sequence;
use crate::engine::config::ServiceConfig;
use std::future::Future;
use std::time::Duration;
use thiserror::Error;
use tracing::{debug, info};

/// Public ESMFold endpoint; accepts a raw sequence as the POST body and answers with PDB text.
pub const ESMFOLD_ENDPOINT: &str = "https://api.esmatlas.com/foldSequence/v1/pdb/";

#[derive(Debug, Error)]
pub enum ProviderError {
    #[error("service answered with HTTP {status}: {body}")]
    Status { status: u16, body: String },
    #[error("request timed out after {0:?}")]
    Timeout(Duration),
    #[error("request failed: {0}")]
    Transport(#[source] reqwest::Error),
    #[error("offline mode: no cached structure and network access is disabled")]
    Offline,
}

/// Something that can fold a sequence into a structure payload.
///
/// The payload is returned as raw bytes so that it can be cached verbatim before
/// it is parsed.
pub trait PredictionProvider {
    fn fold(
        &self,
        sequence: &Sequence,
    ) -> impl Future<Output = Result<Vec<u8>, ProviderError>> + Send;
}

/// HTTP client for an ESMFold-compatible structure prediction endpoint.
#[derive(Debug, Clone)]
pub struct EsmFoldProvider {
    client: reqwest::Client,
    endpoint: String,
    timeout: Duration,
}

impl EsmFoldProvider {
    pub fn new(config: &ServiceConfig) -> Result<Self, ProviderError> {
        let client = reqwest::Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(ProviderError::Transport)?;
        debug!(
            "Prediction client targets {} with a {:?} timeout",
            &config.endpoint, config.timeout
        );
        Ok(Self {
            client,
            endpoint: config.endpoint.clone(),
            timeout: config.timeout,
        })
    }

    fn classify(&self, error: reqwest::Error) -> ProviderError {
        if error.is_timeout() {
            ProviderError::Timeout(self.timeout)
        } else {
            ProviderError::Transport(error)
        }
    }
}

impl PredictionProvider for EsmFoldProvider {
    async fn fold(&self, sequence: &Sequence) -> Result<Vec<u8>, ProviderError> {
        info!(
            "Requesting structure for a {}-residue sequence from {}",
            sequence.len(),
            &self.endpoint
        );
        let response = self
            .client
            .post(&self.endpoint)
            .body(sequence.as_str().to_owned())
            .send()
            .await
            .map_err(|e| self.classify(e))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(ProviderError::Status {
                status: status.as_u16(),
                body: body.trim().to_string(),
            });
        }

        let bytes = response.bytes().await.map_err(|e| self.classify(e))?;
        debug!("Received {} bytes from prediction service", bytes.len());
        Ok(bytes.to_vec())
    }
}

/// A provider that never reaches the network; every request fails with [`ProviderError::Offline`].
#[derive(Debug, Default, Clone, Copy)]
pub struct OfflineProvider;

impl PredictionProvider for OfflineProvider {
    async fn fold(&self, _sequence: &Sequence) -> Result<Vec<u8>, ProviderError> {
        Err(ProviderError::Offline)
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::core::sequence::encode;
    use tokio::io::{AsyncReadExt, AsyncWriteExt};
    use tokio::net::{TcpListener, TcpStream};
    use tokio::task::JoinHandle;

    /// What a one-shot test server saw on the wire.
    pub(crate) struct CapturedRequest {
        pub(crate) head: String,
        pub(crate) body: Vec<u8>,
    }

    fn content_length(head: &str) -> usize {
        head.lines()
            .filter_map(|line| line.split_once(':'))
            .find(|(name, _)| name.trim().eq_ignore_ascii_case("content-length"))
            .and_then(|(_, value)| value.trim().parse().ok())
            .unwrap_or(0)
    }

    async fn read_request(socket: &mut TcpStream) -> CapturedRequest {
        let mut buf = Vec::new();
        let mut chunk = [0u8; 1024];
        loop {
            let n = socket.read(&mut chunk).await.unwrap();
            assert!(n > 0, "connection closed before the request was complete");
            buf.extend_from_slice(&chunk[..n]);

            if let Some(end) = buf.windows(4).position(|w| w == b"\r\n\r\n") {
                let head = String::from_utf8_lossy(&buf[..end]).into_owned();
                let body_start = end + 4;
                let body_end = body_start + content_length(&head);
                if buf.len() >= body_end {
                    return CapturedRequest {
                        head,
                        body: buf[body_start..body_end].to_vec(),
                    };
                }
            }
        }
    }

    /// Answers exactly one request with `status` and `body`, then closes the connection.
    pub(crate) async fn serve_once(
        status: &'static str,
        body: &'static [u8],
    ) -> (String, JoinHandle<CapturedRequest>) {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        let handle = tokio::spawn(async move {
            let (mut socket, _) = listener.accept().await.unwrap();
            let request = read_request(&mut socket).await;
            let head = format!(
                "HTTP/1.1 {}\r\ncontent-length: {}\r\nconnection: close\r\n\r\n",
                status,
                body.len()
            );
            socket.write_all(head.as_bytes()).await.unwrap();
            socket.write_all(body).await.unwrap();
            socket.shutdown().await.unwrap();
            request
        });
        (format!("http://{}/fold", addr), handle)
    }

    /// Accepts one request and never answers it.
    pub(crate) async fn serve_nothing() -> String {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            let (mut socket, _) = listener.accept().await.unwrap();
            let _request = read_request(&mut socket).await;
            tokio::time::sleep(Duration::from_secs(30)).await;
            drop(socket);
        });
        format!("http://{}/fold", addr)
    }

    pub(crate) fn provider_for(endpoint: String, timeout: Duration) -> EsmFoldProvider {
        EsmFoldProvider::new(&ServiceConfig { endpoint, timeout }).unwrap()
    }

    #[tokio::test]
    async fn offline_provider_always_fails() {
        let seq = encode("HAL", 1).unwrap();
        assert!(matches!(
            OfflineProvider.fold(&seq).await,
            Err(ProviderError::Offline)
        ));
    }

    #[tokio::test]
    async fn posts_the_raw_sequence_and_returns_the_body_verbatim() {
        const PAYLOAD: &[u8] = b"PARENT N/A\r\nATOM  \x00\xff\nEND\n";
        let (endpoint, server) = serve_once("200 OK", PAYLOAD).await;
        let provider = provider_for(endpoint, Duration::from_secs(5));
        let seq = encode("Linus Pauling", 3).unwrap();

        let bytes = provider.fold(&seq).await.unwrap();
        let request = server.await.unwrap();

        assert_eq!(bytes, PAYLOAD);
        assert!(request.head.starts_with("POST /fold HTTP/1.1"), "{}", request.head);
        assert_eq!(request.body, seq.as_str().as_bytes());
        assert_eq!(request.body, b"LINSPALINGLINSPALINGLINSPALING");
    }

    #[tokio::test]
    async fn non_success_status_carries_code_and_trimmed_body() {
        let (endpoint, server) = serve_once("503 Service Unavailable", b"  busy\n").await;
        let provider = provider_for(endpoint, Duration::from_secs(5));
        let seq = encode("HAL", 2).unwrap();

        let err = provider.fold(&seq).await.unwrap_err();
        server.await.unwrap();

        match err {
            ProviderError::Status { status, body } => {
                assert_eq!(status, 503);
                assert_eq!(body, "busy");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[tokio::test]
    async fn silent_server_times_out() {
        let endpoint = serve_nothing().await;
        let timeout = Duration::from_millis(300);
        let provider = provider_for(endpoint, timeout);
        let seq = encode("HAL", 1).unwrap();

        let err = provider.fold(&seq).await.unwrap_err();
        assert!(matches!(err, ProviderError::Timeout(t) if t == timeout), "{err:?}");
        assert_eq!(err.to_string(), "request timed out after 300ms");
    }

    #[tokio::test]
    async fn unreachable_endpoint_is_a_transport_error() {
        let provider = provider_for("http://127.0.0.1:9/fold".to_string(), Duration::from_secs(5));
        let seq = encode("HAL", 1).unwrap();

        let err = provider.fold(&seq).await.unwrap_err();
        assert!(matches!(
            err,
            ProviderError::Transport(_) | ProviderError::Timeout(_)
        ));
    }

    #[test]
    fn status_error_mentions_code_and_body() {
        let err = ProviderError::Status {
            status: 503,
            body: "overloaded".to_string(),
        };
        assert_eq!(err.to_string(), "service answered with HTTP 503: overloaded");
    }
}
