//! Crate-level error types shared by key loading, signing, configuration, and transports.

// std
use std::path::PathBuf;
// crates.io
use ::http::header::InvalidHeaderValue;
use jsonwebtoken::{Algorithm, errors::Error as JwtError};
// self
use crate::_prelude::*;

/// Crate-wide result type alias returning [`Error`] by default.
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Canonical error exposed by construction and configuration APIs.
#[derive(Debug, ThisError)]
pub enum Error {
	/// Key material could not be loaded or does not fit the algorithm.
	#[error(transparent)]
	Key(#[from] KeyError),
	/// Token signing failed.
	#[error(transparent)]
	Signing(#[from] SigningError),
	/// Configuration document problem.
	#[error(transparent)]
	Config(#[from] ConfigError),
}

/// Failures raised while turning key material into a signing configuration.
///
/// All variants are fatal to construction; no transport is returned.
#[derive(Debug, ThisError)]
pub enum KeyError {
	/// Key file could not be read.
	#[error("Private key could not be read from `{}`.", path.display())]
	Read {
		/// Path that was requested.
		path: PathBuf,
		/// Underlying I/O failure.
		#[source]
		source: std::io::Error,
	},
	/// Bytes are not a valid private key in the expected encoding.
	#[error("Private key could not be parsed.")]
	Parse {
		/// Underlying parsing failure.
		#[source]
		source: JwtError,
	},
	/// Trial signature with the requested algorithm failed.
	#[error("Private key cannot sign with {algorithm:?}.")]
	Incompatible {
		/// Algorithm that was requested.
		algorithm: Algorithm,
		/// Underlying signing failure.
		#[source]
		source: JwtError,
	},
}

/// Request-time signing failure; the request is not sent.
#[derive(Debug, ThisError)]
#[error("App JWT could not be signed.")]
pub struct SigningError {
	#[source]
	source: JwtError,
}
impl SigningError {
	pub(crate) fn new(source: JwtError) -> Self {
		Self { source }
	}

	/// Returns the signing primitive's failure.
	pub fn cause(&self) -> &JwtError {
		&self.source
	}
}

/// Failure surfaced by a decorated round trip.
///
/// `Transport` carries the inner transport's error exactly as it was returned.
#[derive(Debug, ThisError)]
pub enum RoundTripError<E>
where
	E: 'static + StdError,
{
	/// Token minting failed before the request was dispatched.
	#[error(transparent)]
	Signing(#[from] SigningError),
	/// Minted token could not be encoded as a header value.
	///
	/// Compact JWTs are base64url ASCII, so signing through [`SigningKey`] never yields this;
	/// it stays distinct from [`Signing`](Self::Signing) because no signature failed.
	///
	/// [`SigningKey`]: crate::auth::SigningKey
	#[error("Authorization header value is invalid.")]
	InvalidHeader(#[source] InvalidHeaderValue),
	/// Inner transport failure.
	#[error(transparent)]
	Transport(E),
}
impl<E> RoundTripError<E>
where
	E: 'static + StdError,
{
	/// Returns the inner transport error, if that is what failed.
	pub fn into_transport(self) -> Option<E> {
		match self {
			Self::Transport(e) => Some(e),
			_ => None,
		}
	}
}

/// Configuration document failures.
#[derive(Debug, ThisError)]
pub enum ConfigError {
	/// Document is not valid JSON for [`AppConfig`](crate::config::AppConfig).
	#[error("App configuration is malformed.")]
	Parse {
		/// Structured parsing failure including the offending path.
		#[source]
		source: serde_path_to_error::Error<serde_json::Error>,
	},
	/// Neither an inline key nor a key path was provided.
	#[error("App configuration must set `private_key` or `private_key_path`.")]
	MissingPrivateKey,
	/// Both an inline key and a key path were provided.
	#[error("App configuration must not set both `private_key` and `private_key_path`.")]
	ConflictingPrivateKey,
	/// Accept media type is not a valid header value.
	#[error("Accept value `{value}` is not a valid header value.")]
	InvalidAccept {
		/// Rejected value.
		value: String,
		/// Underlying header validation failure.
		#[source]
		source: InvalidHeaderValue,
	},
}
