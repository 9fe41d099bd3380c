//! Calls `GET /app` as a GitHub App.
//!
//! ```sh
//! APP_ID=12345 APP_PRIVATE_KEY=app.private-key.pem cargo run --example app_request
//! ```
//!
//! One [`ReqwestTransport`] is shared behind an `Arc`; every [`AppsTransport`] built on top of
//! it reuses the same connection pool.

// std
use std::{env, sync::Arc};
// crates.io
use color_eyre::{Result, eyre::WrapErr};
// self
use app_jwt_transport::{
	http::{HttpRequest, ReqwestTransport, RoundTripper},
	transport::AppsTransport,
};

#[tokio::main]
async fn main() -> Result<()> {
	color_eyre::install()?;

	let app_id = env::var("APP_ID").wrap_err("APP_ID must be set")?.parse()?;
	let key_path = env::var("APP_PRIVATE_KEY").wrap_err("APP_PRIVATE_KEY must be set")?;
	let shared = Arc::new(ReqwestTransport::default());
	let app = AppsTransport::from_key_file(shared, app_id, key_path)?;
	let mut request = HttpRequest::new(Vec::new());

	*request.uri_mut() = app.endpoint("app")?.as_str().parse()?;
	request.headers_mut().insert("user-agent", "app-jwt-transport-demo".parse()?);

	let response = app.round_trip(request).await?;

	println!("GET /app -> {}", response.status());
	println!("{}", String::from_utf8_lossy(response.body()));

	Ok(())
}
