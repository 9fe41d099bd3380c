// self
use crate::obs::MintOutcome;

/// Records a mint outcome via the global metrics recorder (when enabled).
pub fn record_mint_outcome(outcome: MintOutcome) {
	#[cfg(feature = "metrics")]
	{
		metrics::counter!("app_jwt_transport_mint_total", "outcome" => outcome.as_str())
			.increment(1);
	}

	#[cfg(not(feature = "metrics"))]
	{
		let _ = outcome;
	}
}
