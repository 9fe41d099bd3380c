// self
use crate::_prelude::*;

/// Type alias that resolves to an instrumented future when tracing is enabled.
#[cfg(feature = "tracing")]
pub type InstrumentedMint<F> = tracing::instrument::Instrumented<F>;
/// Passthrough future type when tracing is disabled.
#[cfg(not(feature = "tracing"))]
pub type InstrumentedMint<F> = F;

/// A span builder used around token minting and delegation.
#[derive(Clone, Debug)]
pub struct MintSpan {
	#[cfg(feature = "tracing")]
	span: tracing::Span,
}
impl MintSpan {
	/// Creates a new span tagged with the app id + stage.
	pub fn new(app_id: i64, stage: &'static str) -> Self {
		#[cfg(feature = "tracing")]
		{
			let span = tracing::debug_span!("app_jwt_transport.mint", app_id, stage);

			Self { span }
		}
		#[cfg(not(feature = "tracing"))]
		{
			let _ = (app_id, stage);

			Self {}
		}
	}

	/// Enters the span for synchronous sections.
	pub fn entered(&self) -> MintSpanGuard<'_> {
		#[cfg(feature = "tracing")]
		{
			MintSpanGuard { guard: self.span.enter() }
		}
		#[cfg(not(feature = "tracing"))]
		{
			MintSpanGuard { _span: std::marker::PhantomData }
		}
	}

	/// Instruments an async block without holding a guard across `.await` points.
	pub fn instrument<Fut>(&self, fut: Fut) -> InstrumentedMint<Fut>
	where
		Fut: Future,
	{
		#[cfg(feature = "tracing")]
		{
			use tracing::Instrument;

			fut.instrument(self.span.clone())
		}
		#[cfg(not(feature = "tracing"))]
		{
			fut
		}
	}
}

/// RAII guard returned by [`MintSpan::entered`].
pub struct MintSpanGuard<'a> {
	#[cfg(feature = "tracing")]
	#[allow(dead_code)]
	guard: tracing::span::Entered<'a>,
	#[cfg(not(feature = "tracing"))]
	_span: std::marker::PhantomData<&'a MintSpan>,
}
impl Debug for MintSpanGuard<'_> {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.write_str("MintSpanGuard(..)")
	}
}

/// Emits a debug event describing a signing failure (when enabled).
pub fn trace_mint_failure(err: &dyn StdError) {
	#[cfg(feature = "tracing")]
	{
		tracing::debug!(error = %err, "app JWT could not be minted");
	}
	#[cfg(not(feature = "tracing"))]
	{
		let _ = err;
	}
}
