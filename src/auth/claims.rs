//! Identity assertion assembled fresh for every outbound request.

// self
use crate::_prelude::*;

/// Backdating applied to `iat` so verifiers with a slower clock still accept the token.
pub const CLOCK_SKEW: Duration = Duration::seconds(30);
/// Lifetime of a minted token, measured from its backdated `iat`.
pub const TOKEN_TTL: Duration = Duration::minutes(2);

/// Claim set signed into every app JWT.
///
/// Timestamps serialize as integer Unix seconds; verifiers reject fractional values.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppClaims {
	/// Backdated issue instant, whole seconds.
	#[serde(rename = "iat", with = "time::serde::timestamp")]
	pub issued_at: OffsetDateTime,
	/// Expiry instant, always `issued_at + TOKEN_TTL`.
	#[serde(rename = "exp", with = "time::serde::timestamp")]
	pub expires_at: OffsetDateTime,
	/// Application id as a decimal string.
	#[serde(rename = "iss")]
	pub issuer: String,
}
impl AppClaims {
	/// Builds the claim set for `app_id` as observed at `now`.
	pub fn at(app_id: i64, now: OffsetDateTime) -> Self {
		let backdated = now - CLOCK_SKEW;
		let issued_at = backdated - Duration::nanoseconds(backdated.nanosecond().into());

		Self { issued_at, expires_at: issued_at + TOKEN_TTL, issuer: app_id.to_string() }
	}

	/// Builds the claim set for `app_id` using the current UTC instant.
	pub fn now(app_id: i64) -> Self {
		Self::at(app_id, OffsetDateTime::now_utc())
	}

	/// Returns the span between `iat` and `exp`.
	pub fn validity(&self) -> Duration {
		self.expires_at - self.issued_at
	}
}
