//! Container removal against a mock transport
//!
//! The transport either injects a canned error or checks the outgoing
//! request and answers `200 OK` only if it has the expected shape.

mod common;

use assert_matches::assert_matches;
use common::{expect_absent, mismatch, mock_client};
use engine_client::transport::{HttpResponse, MockTransport, TransportError, error_mock};
use engine_client::{Client, ContainerRemoveOptions, Error};
use pretty_assertions::assert_eq;
use rstest::rstest;

#[tokio::test]
async fn test_container_remove_error() {
    let transport = MockTransport::new(error_mock(500, "Server error"));
    let client = mock_client(transport.clone());

    let err = client
        .containers()
        .remove(ContainerRemoveOptions::default())
        .await
        .expect_err("expected a Server Error");

    assert_eq!(err.to_string(), "Error response from daemon: Server error");
    assert_matches!(err, Error::Daemon { status: 500, .. });
    assert_eq!(transport.calls(), 1);
}

#[tokio::test]
async fn test_container_remove() {
    let expected_url = "/containers/container_id";
    let transport = MockTransport::new(move |req| {
        if !req.path().starts_with(expected_url) {
            return mismatch(format!("Expected URL '{expected_url}', got '{}'", req.url));
        }
        let volume = req.query_param("v").unwrap_or_default();
        if volume != "1" {
            return mismatch(format!(
                "v (volume) not set in URL query properly. Expected '1', got {volume}"
            ));
        }
        let force = req.query_param("force").unwrap_or_default();
        if force != "1" {
            return mismatch(format!(
                "force not set in URL query properly. Expected '1', got {force}"
            ));
        }
        expect_absent(req, "link")?;
        Ok(HttpResponse::with_status(200, ""))
    });
    let client = mock_client(transport.clone());

    client
        .containers()
        .remove(ContainerRemoveOptions {
            container_id: "container_id".to_string(),
            remove_volumes: true,
            force: true,
        })
        .await
        .unwrap();

    assert_eq!(transport.calls(), 1);
}

#[rstest]
#[case(false, false, None, None)]
#[case(true, false, Some("1"), None)]
#[case(false, true, None, Some("1"))]
#[case(true, true, Some("1"), Some("1"))]
#[tokio::test]
async fn test_container_remove_query_flags(
    #[case] remove_volumes: bool,
    #[case] force: bool,
    #[case] expected_v: Option<&'static str>,
    #[case] expected_force: Option<&'static str>,
) {
    let transport = MockTransport::new(move |req| {
        assert_eq!(req.query_param("v").as_deref(), expected_v);
        assert_eq!(req.query_param("force").as_deref(), expected_force);
        assert_eq!(req.query_param("link"), None);
        if !remove_volumes && !force {
            assert_eq!(req.url.query(), None);
        }
        Ok(HttpResponse::ok())
    });

    mock_client(transport)
        .containers()
        .remove(
            ContainerRemoveOptions::new("container_id")
                .remove_volumes(remove_volumes)
                .force(force),
        )
        .await
        .unwrap();
}

#[tokio::test]
async fn test_container_remove_with_pinned_api_version() {
    let transport = MockTransport::new(|req| {
        assert_eq!(req.path(), "/v1.24/containers/container_id");
        Ok(HttpResponse::ok())
    });
    let client = Client::builder()
        .api_version("1.24")
        .transport(transport)
        .build()
        .unwrap();

    client
        .containers()
        .remove(ContainerRemoveOptions::new("container_id"))
        .await
        .unwrap();
}

#[tokio::test]
async fn test_container_remove_json_error_body() {
    let client = mock_client(MockTransport::new(error_mock(
        404,
        r#"{"message":"No such container: container_id"}"#,
    )));

    let err = client
        .containers()
        .remove(ContainerRemoveOptions::new("container_id"))
        .await
        .unwrap_err();

    assert_eq!(
        err.to_string(),
        "Error response from daemon: No such container: container_id"
    );
    assert!(err.is_not_found());
}

#[tokio::test]
async fn test_container_remove_empty_error_body() {
    let client = mock_client(MockTransport::new(error_mock(404, "")));

    let err = client
        .containers()
        .remove(ContainerRemoveOptions::new("container_id"))
        .await
        .unwrap_err();

    assert_matches!(err, Error::EmptyErrorResponse { status: 404, .. });
    assert!(err.to_string().contains("Not Found"));
    assert!(err.to_string().contains("/containers/container_id"));
}

#[tokio::test]
async fn test_container_remove_transport_error_is_propagated_unchanged() {
    let client = mock_client(MockTransport::new(|_| {
        Err(TransportError::Connection("connection refused".to_string()))
    }));

    let err = client
        .containers()
        .remove(ContainerRemoveOptions::new("container_id"))
        .await
        .unwrap_err();

    assert_eq!(err.to_string(), "Connection error: connection refused");
    assert_matches!(err, Error::Transport(TransportError::Connection(_)));
    assert!(err.is_connection_failed());
}

#[tokio::test]
async fn test_container_remove_success_ignores_body() {
    let client = mock_client(MockTransport::new(|_| {
        Ok(HttpResponse::with_status(204, "anything"))
    }));

    let result = client
        .containers()
        .remove(ContainerRemoveOptions::new("container_id"))
        .await;

    assert!(result.is_ok());
}
