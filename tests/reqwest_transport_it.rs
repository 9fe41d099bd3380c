#![cfg(feature = "reqwest")]

mod common;

// std
use std::sync::Arc;
// crates.io
use app_jwt_transport::{
	error::RoundTripError,
	http::{ReqwestTransport, RoundTripper},
	transport::{AppsTransport, DEFAULT_ACCEPT},
};
use http::StatusCode;
use httpmock::prelude::*;
// self
use common::*;

fn app() -> AppsTransport<ReqwestTransport> {
	AppsTransport::from_pem(Arc::new(ReqwestTransport::default()), 12345, RSA_PKCS1)
		.expect("RSA fixture should build a transport.")
}

#[tokio::test]
async fn reqwest_transport_sends_decorated_request() {
	let server = MockServer::start_async().await;
	let mock = server
		.mock_async(|when, then| {
			when.method(GET)
				.path("/app")
				.header("accept", DEFAULT_ACCEPT)
				.header_exists("authorization");
			then.status(200)
				.header("content-type", "application/json")
				.body("{\"id\":12345,\"slug\":\"demo-app\"}");
		})
		.await;
	let response = app()
		.round_trip(get(&server.url("/app")))
		.await
		.expect("Mock server should answer.");

	mock.assert_async().await;

	assert_eq!(response.status(), StatusCode::OK);
	assert_eq!(
		response.headers().get("content-type").and_then(|value| value.to_str().ok()),
		Some("application/json")
	);
	assert_eq!(response.body(), b"{\"id\":12345,\"slug\":\"demo-app\"}");
}

#[tokio::test]
async fn error_statuses_pass_through_uninspected() {
	let server = MockServer::start_async().await;
	let mock = server
		.mock_async(|when, then| {
			when.method(GET).path("/app");
			then.status(401).body("{\"message\":\"A JSON web token could not be decoded\"}");
		})
		.await;
	let response = app()
		.round_trip(get(&server.url("/app")))
		.await
		.expect("HTTP error statuses are responses, not transport errors.");

	mock.assert_calls_async(1).await;

	assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn connection_failures_surface_as_transport_errors() {
	let err = app()
		.round_trip(get("http://127.0.0.1:1/app"))
		.await
		.expect_err("Nothing listens on port 1.");

	assert!(matches!(err, RoundTripError::Transport(ref inner) if inner.is_connect()));
}
