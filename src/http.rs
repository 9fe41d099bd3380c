//! Transport primitives shared by inner transports and the token-minting decorator.
//!
//! [`RoundTripper`] is the only capability the crate depends on: execute one request and
//! yield the response or a transport-specific error. Inner transports implement it, and so
//! does [`AppsTransport`](crate::transport::AppsTransport), which lets decorators stack in
//! any order (for example a retrying transport wrapped by, or wrapping, the minting one).

// self
use crate::_prelude::*;

/// Request type accepted by every [`RoundTripper`].
pub type HttpRequest = ::http::Request<Vec<u8>>;
/// Response type produced by every [`RoundTripper`].
pub type HttpResponse = ::http::Response<Vec<u8>>;
/// Boxed future returned by [`RoundTripper::round_trip`].
pub type RoundTripFuture<'a, E> =
	Pin<Box<dyn Future<Output = Result<HttpResponse, E>> + 'a + Send>>;

/// Executes a single HTTP request.
///
/// Implementations must be `Send + Sync + 'static` so one instance can be shared (usually
/// behind an `Arc`) by many decorators and in-flight requests. Concurrency discipline
/// (connection pooling, limits) belongs to the implementation.
pub trait RoundTripper
where
	Self: 'static + Send + Sync,
{
	/// Concrete error emitted by the transport.
	type Error: 'static + Send + Sync + StdError;

	/// Sends `request` and resolves to the response.
	fn round_trip(&self, request: HttpRequest) -> RoundTripFuture<'_, Self::Error>;
}
impl<T> RoundTripper for Arc<T>
where
	T: ?Sized + RoundTripper,
{
	type Error = T::Error;

	fn round_trip(&self, request: HttpRequest) -> RoundTripFuture<'_, Self::Error> {
		(**self).round_trip(request)
	}
}

/// [`RoundTripper`] backed by a [`ReqwestClient`].
///
/// Clone it freely; clones share the client's connection pool.
#[cfg(feature = "reqwest")]
#[derive(Clone, Debug, Default)]
pub struct ReqwestTransport(pub ReqwestClient);
#[cfg(feature = "reqwest")]
impl ReqwestTransport {
	/// Wraps an existing reqwest [`ReqwestClient`].
	pub fn with_client(client: ReqwestClient) -> Self {
		Self(client)
	}
}
#[cfg(feature = "reqwest")]
impl AsRef<ReqwestClient> for ReqwestTransport {
	fn as_ref(&self) -> &ReqwestClient {
		&self.0
	}
}
#[cfg(feature = "reqwest")]
impl RoundTripper for ReqwestTransport {
	type Error = ReqwestError;

	fn round_trip(&self, request: HttpRequest) -> RoundTripFuture<'_, Self::Error> {
		let client = self.0.clone();

		Box::pin(async move {
			let response = client.execute(request.try_into()?).await?;
			let status = response.status();
			let version = response.version();
			let headers = response.headers().to_owned();
			let mut response_new = HttpResponse::new(response.bytes().await?.to_vec());

			*response_new.status_mut() = status;
			*response_new.version_mut() = version;
			*response_new.headers_mut() = headers;

			Ok(response_new)
		})
	}
}
