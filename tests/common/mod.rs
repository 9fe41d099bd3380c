#![allow(dead_code)]

// std
use std::{
	error::Error as StdError,
	fmt::{Display, Formatter, Result as FmtResult},
	sync::Arc,
};
// crates.io
use app_jwt_transport::{
	http::{HttpRequest, HttpResponse, RoundTripFuture, RoundTripper},
	jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Validation},
};
use http::{HeaderMap, StatusCode, Uri};
use parking_lot::Mutex;

pub const RSA_PKCS1: &[u8] = include_bytes!("../fixtures/rsa_pkcs1.pem");
pub const RSA_PKCS8: &[u8] = include_bytes!("../fixtures/rsa_pkcs8.pem");
pub const RSA_PUBLIC: &[u8] = include_bytes!("../fixtures/rsa_public.pem");
pub const EC_P256: &[u8] = include_bytes!("../fixtures/ec_p256_pkcs8.pem");
pub const EC_P256_PUBLIC: &[u8] = include_bytes!("../fixtures/ec_p256_public.pem");

pub fn fixture_path(name: &str) -> String {
	format!("{}/tests/fixtures/{name}", env!("CARGO_MANIFEST_DIR"))
}

pub fn rsa_decoding_key() -> DecodingKey {
	DecodingKey::from_rsa_pem(RSA_PUBLIC).expect("RSA public fixture should parse.")
}

pub fn ec_encoding_key() -> EncodingKey {
	EncodingKey::from_ec_pem(EC_P256).expect("EC private fixture should parse.")
}

pub fn ec_decoding_key() -> DecodingKey {
	DecodingKey::from_ec_pem(EC_P256_PUBLIC).expect("EC public fixture should parse.")
}

/// Validation that checks the signature and `exp` presence but not the clock.
pub fn signature_only(algorithm: Algorithm) -> Validation {
	let mut validation = Validation::new(algorithm);

	validation.validate_exp = false;
	validation.set_required_spec_claims(&["exp", "iss"]);

	validation
}

pub fn get(uri: &str) -> HttpRequest {
	let mut request = HttpRequest::new(Vec::new());

	*request.uri_mut() = uri.parse().expect("Test URI should parse.");

	request
}

#[derive(Clone, Debug)]
pub struct Seen {
	pub uri: Uri,
	pub headers: HeaderMap,
}

/// Records every request and answers `204 No Content`.
#[derive(Default)]
pub struct RecordingTransport {
	seen: Mutex<Vec<Seen>>,
}
impl RecordingTransport {
	pub fn seen(&self) -> Vec<Seen> {
		self.seen.lock().clone()
	}

	pub fn calls(&self) -> usize {
		self.seen.lock().len()
	}
}
impl RoundTripper for RecordingTransport {
	type Error = FakeTransportError;

	fn round_trip(&self, request: HttpRequest) -> RoundTripFuture<'_, Self::Error> {
		self.seen
			.lock()
			.push(Seen { uri: request.uri().clone(), headers: request.headers().clone() });

		Box::pin(async {
			let mut response = HttpResponse::new(Vec::new());

			*response.status_mut() = StatusCode::NO_CONTENT;

			Ok(response)
		})
	}
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum FakeTransportError {
	Refused { code: u16 },
}
impl Display for FakeTransportError {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		match self {
			Self::Refused { code } => write!(f, "Connection refused ({code})."),
		}
	}
}
impl StdError for FakeTransportError {}

/// Counts calls and always fails with the configured error.
pub struct FailingTransport {
	pub error: FakeTransportError,
	pub calls: Mutex<usize>,
}
impl FailingTransport {
	pub fn new(error: FakeTransportError) -> Self {
		Self { error, calls: Mutex::new(0) }
	}
}
impl RoundTripper for FailingTransport {
	type Error = FakeTransportError;

	fn round_trip(&self, _request: HttpRequest) -> RoundTripFuture<'_, Self::Error> {
		*self.calls.lock() += 1;

		let error = self.error.clone();

		Box::pin(async move { Err(error) })
	}
}

/// Generic pass-through decorator used to prove the minting transport stacks both ways.
pub struct Tagging<T> {
	pub inner: Arc<T>,
	pub tag: &'static str,
}
impl<T> RoundTripper for Tagging<T>
where
	T: RoundTripper,
{
	type Error = T::Error;

	fn round_trip(&self, mut request: HttpRequest) -> RoundTripFuture<'_, Self::Error> {
		let value = self.tag.parse().expect("Tag should be a valid header value.");

		request.headers_mut().append("x-tag", value);

		self.inner.round_trip(request)
	}
}
