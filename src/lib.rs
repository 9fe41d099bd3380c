//! Mint short-lived app JWTs per request and attach them to any HTTP transport through a
//! drop-in decorator.
//!
//! ```no_run
//! # async fn demo() -> Result<(), Box<dyn std::error::Error>> {
//! use std::sync::Arc;
//!
//! use app_jwt_transport::{
//! 	http::{HttpRequest, ReqwestTransport, RoundTripper},
//! 	transport::AppsTransport,
//! };
//!
//! let shared = Arc::new(ReqwestTransport::default());
//! let app = AppsTransport::from_key_file(shared, 12345, "app.private-key.pem")?;
//! let mut request = HttpRequest::new(Vec::new());
//!
//! *request.uri_mut() = app.endpoint("app")?.as_str().parse()?;
//!
//! let response = app.round_trip(request).await?;
//!
//! println!("{}", response.status());
//! # Ok(())
//! # }
//! ```

#![deny(clippy::all, missing_docs, unused_crate_dependencies)]

pub mod auth;
pub mod config;
pub mod error;
pub mod http;
pub mod obs;
pub mod transport;

mod _prelude {
	pub use std::{
		error::Error as StdError,
		fmt::{Debug, Display, Formatter, Result as FmtResult},
		future::Future,
		pin::Pin,
		sync::Arc,
	};

	#[cfg(feature = "reqwest")]
	pub use reqwest::{Client as ReqwestClient, Error as ReqwestError};
	pub use serde::{Deserialize, Serialize};
	pub use thiserror::Error as ThisError;
	pub use time::{Duration, OffsetDateTime};
	pub use url::Url;

	pub use crate::error::Result;
}

pub use jsonwebtoken;
#[cfg(feature = "reqwest")] pub use reqwest;
pub use url;
#[cfg(test)] use {base64 as _, color_eyre as _, httpmock as _, parking_lot as _};
