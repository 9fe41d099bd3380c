//! Token-minting transport that authenticates outbound requests as an app.
//!
//! [`AppsTransport`] wraps any [`RoundTripper`] and implements the same trait. Each call
//! builds a fresh [`AppClaims`] set, signs it with the configured [`SigningKey`], sets
//! `Authorization: Bearer <jwt>`, appends the API media type to `Accept`, and hands the
//! request to the inner transport. Nothing is cached between calls and the inner
//! transport's response or error is returned as-is.
//!
//! Share one inner transport (via `Arc`) across many `AppsTransport` values so they reuse
//! the same connection pool.

// std
use std::path::Path;
// crates.io
use ::http::header::{ACCEPT, AUTHORIZATION, HeaderValue};
use jsonwebtoken::{Algorithm, EncodingKey};
// self
use crate::{
	_prelude::*,
	auth::{AppClaims, BearerToken, RsaKey, SigningKey},
	error::{KeyError, RoundTripError, SigningError},
	http::{HttpRequest, RoundTripFuture, RoundTripper},
	obs::{self, MintOutcome, MintSpan},
};

/// API root used unless overridden with [`AppsTransport::with_base_url`].
pub const DEFAULT_BASE_URL: &str = "https://api.github.com/";
/// Media type appended to the `Accept` header of every request.
pub const DEFAULT_ACCEPT: &str = "application/vnd.github.v3+json";

/// Decorator that authenticates every request as the configured app.
///
/// `C` is the auxiliary client handed to callers for calls that must not carry the app
/// JWT (or need extra behavior such as retries). It defaults to the shared inner transport.
pub struct AppsTransport<T, C = Arc<T>>
where
	T: ?Sized + RoundTripper,
{
	inner: Arc<T>,
	client: C,
	key: SigningKey,
	app_id: i64,
	base_url: String,
	accept: HeaderValue,
}
impl<T> AppsTransport<T>
where
	T: ?Sized + RoundTripper,
{
	/// Loads a PEM-encoded RSA private key from `path` and signs with RS256.
	pub fn from_key_file(
		inner: Arc<T>,
		app_id: i64,
		path: impl AsRef<Path>,
	) -> Result<Self, KeyError> {
		Ok(Self::from_signing_key(inner, app_id, SigningKey::from_rsa_pem_file(path)?))
	}

	/// Parses PEM-encoded RSA private key bytes and signs with RS256.
	pub fn from_pem(inner: Arc<T>, app_id: i64, pem: &[u8]) -> Result<Self, KeyError> {
		Ok(Self::from_signing_key(inner, app_id, SigningKey::from_rsa_pem(pem)?))
	}

	/// Uses an already-parsed RSA key with RS256.
	pub fn from_private_key(inner: Arc<T>, app_id: i64, key: RsaKey) -> Self {
		Self::from_signing_key(inner, app_id, SigningKey::rsa(key))
	}

	/// Uses `key` with an explicit `algorithm`, proven compatible by a trial signature.
	pub fn with_signing_key(
		inner: Arc<T>,
		app_id: i64,
		key: EncodingKey,
		algorithm: Algorithm,
	) -> Result<Self, KeyError> {
		Ok(Self::from_signing_key(inner, app_id, SigningKey::with_algorithm(key, algorithm)?))
	}

	/// Uses a prepared [`SigningKey`].
	pub fn from_signing_key(inner: Arc<T>, app_id: i64, key: SigningKey) -> Self {
		Self {
			client: Arc::clone(&inner),
			inner,
			key,
			app_id,
			base_url: DEFAULT_BASE_URL.into(),
			accept: HeaderValue::from_static(DEFAULT_ACCEPT),
		}
	}
}
impl<T, C> AppsTransport<T, C>
where
	T: ?Sized + RoundTripper,
{
	/// Replaces the auxiliary client.
	pub fn with_client<C2>(self, client: C2) -> AppsTransport<T, C2> {
		let Self { inner, key, app_id, base_url, accept, .. } = self;

		AppsTransport { inner, client, key, app_id, base_url, accept }
	}

	/// Overrides the API root.
	pub fn with_base_url(mut self, base_url: Url) -> Self {
		self.base_url = base_url.into();

		self
	}

	/// Overrides the media type appended to `Accept`.
	pub fn with_accept(mut self, accept: HeaderValue) -> Self {
		self.accept = accept;

		self
	}

	/// Returns the app id embedded as `iss`.
	pub fn app_id(&self) -> i64 {
		self.app_id
	}

	/// Returns the signing algorithm.
	pub fn algorithm(&self) -> Algorithm {
		self.key.algorithm()
	}

	/// Returns the API root.
	pub fn base_url(&self) -> &str {
		&self.base_url
	}

	/// Resolves `path` against the API root.
	pub fn endpoint(&self, path: &str) -> Result<Url, url::ParseError> {
		Url::parse(&self.base_url)?.join(path)
	}

	/// Returns the media type appended to `Accept`.
	pub fn accept(&self) -> &HeaderValue {
		&self.accept
	}

	/// Returns the auxiliary client.
	pub fn client(&self) -> &C {
		&self.client
	}

	/// Returns the wrapped transport.
	pub fn inner(&self) -> &Arc<T> {
		&self.inner
	}

	/// Mints a token valid from now.
	pub fn mint(&self) -> Result<BearerToken, SigningError> {
		self.mint_at(OffsetDateTime::now_utc())
	}

	/// Mints a token as if the current instant were `now`.
	pub fn mint_at(&self, now: OffsetDateTime) -> Result<BearerToken, SigningError> {
		self.key.sign(&AppClaims::at(self.app_id, now))
	}

	/// Attaches a freshly minted token and the API media type to `request`.
	///
	/// `Authorization` is replaced; `Accept` is appended to. On error the request is left
	/// untouched.
	pub fn authorize<E>(&self, request: &mut HttpRequest) -> Result<(), RoundTripError<E>>
	where
		E: 'static + StdError,
	{
		let span = MintSpan::new(self.app_id, "authorize");
		let _guard = span.entered();

		obs::record_mint_outcome(MintOutcome::Attempt);

		let value = self
			.mint()
			.map_err(RoundTripError::from)
			.and_then(|token| token.header_value().map_err(RoundTripError::InvalidHeader));

		match value {
			Ok(value) => {
				let headers = request.headers_mut();

				headers.insert(AUTHORIZATION, value);
				headers.append(ACCEPT, self.accept.clone());
				obs::record_mint_outcome(MintOutcome::Success);

				Ok(())
			},
			Err(e) => {
				obs::trace_mint_failure(&e);
				obs::record_mint_outcome(MintOutcome::Failure);

				Err(e)
			},
		}
	}
}
impl<T, C> RoundTripper for AppsTransport<T, C>
where
	T: ?Sized + RoundTripper,
	C: 'static + Send + Sync,
{
	type Error = RoundTripError<T::Error>;

	fn round_trip(&self, mut request: HttpRequest) -> RoundTripFuture<'_, Self::Error> {
		let span = MintSpan::new(self.app_id, "round_trip");

		Box::pin(span.instrument(async move {
			self.authorize::<T::Error>(&mut request)?;

			self.inner.round_trip(request).await.map_err(RoundTripError::Transport)
		}))
	}
}
impl<T, C> Clone for AppsTransport<T, C>
where
	T: ?Sized + RoundTripper,
	C: Clone,
{
	fn clone(&self) -> Self {
		Self {
			inner: Arc::clone(&self.inner),
			client: self.client.clone(),
			key: self.key.clone(),
			app_id: self.app_id,
			base_url: self.base_url.clone(),
			accept: self.accept.clone(),
		}
	}
}
impl<T, C> Debug for AppsTransport<T, C>
where
	T: ?Sized + RoundTripper,
{
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.debug_struct("AppsTransport")
			.field("app_id", &self.app_id)
			.field("key", &self.key)
			.field("base_url", &self.base_url)
			.field("accept", &self.accept)
			.finish_non_exhaustive()
	}
}
