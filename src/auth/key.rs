//! Signing keys paired with the algorithm they sign with.
//!
//! A [`SigningKey`] is immutable once built and is shared read-only by every in-flight
//! request. Every way of building one proves the key signs with its algorithm through a
//! trial signature, so a broken key never reaches request time.

// std
use std::path::Path;
// crates.io
use jsonwebtoken::{Algorithm, EncodingKey, Header};
// self
use crate::{
	_prelude::*,
	auth::BearerToken,
	error::{KeyError, SigningError},
};

/// Algorithm used when the caller only supplies an RSA private key.
pub const DEFAULT_ALGORITHM: Algorithm = Algorithm::RS256;

/// RSA private key that has already produced a [`DEFAULT_ALGORITHM`] signature.
///
/// Only constructible from key material that parses and signs, which keeps
/// [`SigningKey::rsa`] infallible.
#[derive(Clone)]
pub struct RsaKey(EncodingKey);
impl RsaKey {
	/// Parses a PEM-encoded RSA private key (PKCS#1 or PKCS#8).
	pub fn from_pem(pem: &[u8]) -> Result<Self, KeyError> {
		let key = EncodingKey::from_rsa_pem(pem).map_err(|source| KeyError::Parse { source })?;

		Self::checked(key)
	}

	/// Parses a DER-encoded PKCS#1 RSA private key.
	pub fn from_der(der: &[u8]) -> Result<Self, KeyError> {
		Self::checked(EncodingKey::from_rsa_der(der))
	}

	fn checked(key: EncodingKey) -> Result<Self, KeyError> {
		trial_sign(&key, DEFAULT_ALGORITHM).map_err(|source| KeyError::Parse { source })?;

		Ok(Self(key))
	}
}
impl Debug for RsaKey {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.debug_tuple("RsaKey").field(&"<redacted>").finish()
	}
}

/// Private key plus the algorithm used to sign app JWTs.
#[derive(Clone)]
pub struct SigningKey {
	key: EncodingKey,
	algorithm: Algorithm,
}
impl SigningKey {
	/// Pairs a checked RSA key with [`DEFAULT_ALGORITHM`].
	pub fn rsa(key: RsaKey) -> Self {
		Self { key: key.0, algorithm: DEFAULT_ALGORITHM }
	}

	/// Parses a PEM-encoded RSA private key (PKCS#1 or PKCS#8).
	pub fn from_rsa_pem(pem: &[u8]) -> Result<Self, KeyError> {
		RsaKey::from_pem(pem).map(Self::rsa)
	}

	/// Reads and parses a PEM-encoded RSA private key from `path`.
	pub fn from_rsa_pem_file(path: impl AsRef<Path>) -> Result<Self, KeyError> {
		let path = path.as_ref();
		let pem = std::fs::read(path)
			.map_err(|source| KeyError::Read { path: path.to_path_buf(), source })?;

		Self::from_rsa_pem(&pem)
	}

	/// Pairs an arbitrary key with `algorithm` after a trial signature succeeds.
	pub fn with_algorithm(key: EncodingKey, algorithm: Algorithm) -> Result<Self, KeyError> {
		trial_sign(&key, algorithm)
			.map_err(|source| KeyError::Incompatible { algorithm, source })?;

		Ok(Self { key, algorithm })
	}

	/// Pairs `key` with `algorithm` without a trial signature.
	#[cfg(test)]
	pub(crate) fn unchecked(key: EncodingKey, algorithm: Algorithm) -> Self {
		Self { key, algorithm }
	}

	/// Returns the configured algorithm.
	pub fn algorithm(&self) -> Algorithm {
		self.algorithm
	}

	/// Signs `claims` into a compact JWT.
	pub fn sign<C>(&self, claims: &C) -> Result<BearerToken, SigningError>
	where
		C: Serialize,
	{
		jsonwebtoken::encode(&Header::new(self.algorithm), claims, &self.key)
			.map(BearerToken::new)
			.map_err(SigningError::new)
	}
}
impl Debug for SigningKey {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.debug_struct("SigningKey")
			.field("key", &"<redacted>")
			.field("algorithm", &self.algorithm)
			.finish()
	}
}

fn trial_sign(key: &EncodingKey, algorithm: Algorithm) -> jsonwebtoken::errors::Result<String> {
	jsonwebtoken::encode(&Header::new(algorithm), &serde_json::Map::new(), key)
}
