//! [`FetchResponse`] for `reqwest` responses.

use super::FetchResponse;
use crate::error::{MiddlewareError, MiddlewareResult};
use async_trait::async_trait;
use reqwest::header::HeaderMap;
use reqwest::{Response, StatusCode, Url};
use tracing::debug;

#[async_trait]
impl FetchResponse for Response {
    type Headers = HeaderMap;

    fn status(&self) -> StatusCode {
        Response::status(self)
    }

    fn headers(&self) -> &HeaderMap {
        Response::headers(self)
    }

    fn url(&self) -> Option<&Url> {
        Some(Response::url(self))
    }

    async fn read_text(self) -> MiddlewareResult<String> {
        let url = Response::url(&self).clone();
        Response::text(self).await.map_err(|err| {
            debug!(url = %url, error = %err, "Body read failed");
            MiddlewareError::from(err)
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::response::HeaderLookup;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[tokio::test]
    async fn test_reqwest_response_metadata() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/foo"))
            .respond_with(
                ResponseTemplate::new(202)
                    .insert_header("X-Request-Id", "abc")
                    .set_body_string("hello"),
            )
            .mount(&server)
            .await;

        let url = format!("{}/foo", server.uri());
        let response = reqwest::get(&url).await.unwrap();

        assert_eq!(FetchResponse::status(&response), StatusCode::ACCEPTED);
        assert_eq!(
            FetchResponse::headers(&response).get_header("x-request-id"),
            Some("abc")
        );
        assert_eq!(FetchResponse::url(&response).map(Url::as_str), Some(url.as_str()));
        assert_eq!(response.read_text().await.unwrap(), "hello");
    }

    /// Serve one response that promises more body bytes than it sends.
    async fn truncated_body_server() -> String {
        use tokio::io::{AsyncReadExt, AsyncWriteExt};
        use tokio::net::TcpListener;

        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();

        tokio::spawn(async move {
            let (mut socket, _) = listener.accept().await.unwrap();
            let mut buf = [0u8; 1024];
            let _ = socket.read(&mut buf).await;
            socket
                .write_all(b"HTTP/1.1 200 OK\r\ncontent-length: 64\r\n\r\n{\"partial\":")
                .await
                .unwrap();
            socket.shutdown().await.unwrap();
        });

        format!("http://{addr}/truncated")
    }

    #[tokio::test]
    async fn test_truncated_body_is_stream_read() {
        let url = truncated_body_server().await;
        let response = reqwest::get(&url).await.unwrap();
        assert_eq!(FetchResponse::status(&response), StatusCode::OK);

        let err = response.read_text().await.unwrap_err();

        assert!(matches!(err, MiddlewareError::StreamRead(_)));
        assert!(err.is_stream_read());
        assert!(!err.is_malformed_json());
        assert_eq!(err.status(), None);
    }

    #[tokio::test]
    async fn test_parse_json_propagates_transport_failure() {
        let url = truncated_body_server().await;
        let response = reqwest::get(&url).await.unwrap();

        let err = crate::parse_json(response).await.unwrap_err();

        match err {
            MiddlewareError::StreamRead(source) => assert!(source.is_body() || source.is_decode()),
            other => panic!("unexpected error: {other:?}"),
        }
    }
}
