//! Serializable app configuration that builds an [`AppsTransport`].
//!
//! Services usually keep the app id and key location next to their other settings; this
//! document is the bridge from those settings to a ready transport:
//!
//! ```json
//! { "app_id": 12345, "private_key_path": "/etc/app/key.pem" }
//! ```

// std
use std::path::PathBuf;
// crates.io
use ::http::header::HeaderValue;
// self
use crate::{
	_prelude::*,
	auth::SigningKey,
	error::ConfigError,
	http::RoundTripper,
	transport::AppsTransport,
};

/// App identity and key source.
///
/// Exactly one of `private_key` (inline PEM) and `private_key_path` must be set.
#[derive(Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AppConfig {
	/// Numeric app id embedded as the token issuer.
	pub app_id: i64,
	/// Path to a PEM-encoded RSA private key.
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub private_key_path: Option<PathBuf>,
	/// Inline PEM-encoded RSA private key.
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub private_key: Option<String>,
	/// API root override.
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub base_url: Option<Url>,
	/// Accept media type override.
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub accept: Option<String>,
}
impl AppConfig {
	/// Creates a configuration for `app_id` with no key source yet.
	pub fn new(app_id: i64) -> Self {
		Self { app_id, ..Default::default() }
	}

	/// Parses a JSON document, reporting the offending field path on failure.
	pub fn from_json_str(document: &str) -> Result<Self, ConfigError> {
		let de = &mut serde_json::Deserializer::from_str(document);

		serde_path_to_error::deserialize(de).map_err(|source| ConfigError::Parse { source })
	}

	/// Loads the key and builds a transport over `inner`.
	pub fn build<T>(&self, inner: Arc<T>) -> Result<AppsTransport<T>>
	where
		T: ?Sized + RoundTripper,
	{
		let key = match (&self.private_key, &self.private_key_path) {
			(Some(pem), None) => SigningKey::from_rsa_pem(pem.as_bytes())?,
			(None, Some(path)) => SigningKey::from_rsa_pem_file(path)?,
			(Some(_), Some(_)) => return Err(ConfigError::ConflictingPrivateKey.into()),
			(None, None) => return Err(ConfigError::MissingPrivateKey.into()),
		};
		let mut transport = AppsTransport::from_signing_key(inner, self.app_id, key);

		if let Some(base_url) = &self.base_url {
			transport = transport.with_base_url(base_url.clone());
		}
		if let Some(accept) = &self.accept {
			let value = HeaderValue::try_from(accept.as_str()).map_err(|source| {
				ConfigError::InvalidAccept { value: accept.clone(), source }
			})?;

			transport = transport.with_accept(value);
		}

		Ok(transport)
	}
}
impl Debug for AppConfig {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.debug_struct("AppConfig")
			.field("app_id", &self.app_id)
			.field("private_key_path", &self.private_key_path)
			.field("private_key", &self.private_key.as_ref().map(|_| "<redacted>"))
			.field("base_url", &self.base_url)
			.field("accept", &self.accept)
			.finish()
	}
}

#[cfg(test)]
mod tests {
	// self
	use super::*;

	#[test]
	fn json_documents_parse_with_defaults() {
		let config =
			AppConfig::from_json_str(r#"{"app_id":12345,"private_key_path":"/etc/app/key.pem"}"#)
				.expect("Minimal configuration should parse.");

		assert_eq!(config.app_id, 12345);
		assert_eq!(config.private_key_path, Some(PathBuf::from("/etc/app/key.pem")));
		assert!(config.private_key.is_none());
		assert!(config.base_url.is_none());
	}

	#[test]
	fn parse_errors_report_field_path() {
		let err = AppConfig::from_json_str(r#"{"app_id":"not-a-number"}"#)
			.expect_err("A string app id must be rejected.");

		match err {
			ConfigError::Parse { source } => assert_eq!(source.path().to_string(), "app_id"),
			other => panic!("Unexpected error variant: {other:?}."),
		}
		assert!(AppConfig::from_json_str(r#"{"app_id":1,"extra":true}"#).is_err());
	}

	#[test]
	fn debug_redacts_inline_key() {
		let config = AppConfig { private_key: Some("-----BEGIN".into()), ..AppConfig::new(9) };
		let rendered = format!("{config:?}");

		assert!(rendered.contains("<redacted>"));
		assert!(!rendered.contains("BEGIN"));
	}
}
