//! Optional observability helpers for token minting.
//!
//! # Feature Flags
//!
//! - Enable `tracing` to emit spans named `app_jwt_transport.mint` with the `app_id` and `stage`
//!   (call site) fields, plus a debug event when signing fails.
//! - Enable `metrics` to increment the `app_jwt_transport_mint_total` counter for every
//!   attempt/success/failure, labeled by `outcome`.

mod metrics;
mod tracing;

pub use metrics::*;
pub use tracing::*;

// self
use crate::_prelude::*;

/// Outcome labels recorded for each mint.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum MintOutcome {
	/// A token is about to be signed.
	Attempt,
	/// Token signed and attached.
	Success,
	/// Signing or header encoding failed; nothing was sent.
	Failure,
}
impl MintOutcome {
	/// Returns a stable label suitable for span or metric fields.
	pub const fn as_str(self) -> &'static str {
		match self {
			MintOutcome::Attempt => "attempt",
			MintOutcome::Success => "success",
			MintOutcome::Failure => "failure",
		}
	}
}
impl Display for MintOutcome {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.write_str(self.as_str())
	}
}
