//! Shared utilities for use cases.
//!
//! Contains the bounded provider call used by every generation step.

use crate::ports::conversation_logger::ConversationLogger;
use crate::ports::progress::ProgressNotifier;
use crate::ports::response_provider::ProviderError;
use std::future::Future;
use std::time::Duration;

/// Collaborators a generation step needs, borrowed for one discussion run.
pub(crate) struct TurnContext<'a, P: ?Sized> {
    pub provider: &'a P,
    pub progress: &'a dyn ProgressNotifier,
    pub logger: &'a dyn ConversationLogger,
    pub timeout: Option<Duration>,
    pub discussion_id: &'a str,
}

/// Await a provider call, bounded by `timeout`.
///
/// A call that does not finish in time is `Unavailable`; a reply that is
/// blank after trimming is `Rejected`.
pub(crate) async fn bounded_call<F>(
    timeout: Option<Duration>,
    call: F,
) -> Result<String, ProviderError>
where
    F: Future<Output = Result<String, ProviderError>>,
{
    let result = match timeout {
        Some(limit) => match tokio::time::timeout(limit, call).await {
            Ok(result) => result,
            Err(_) => Err(ProviderError::Unavailable(format!(
                "no reply within {}ms",
                limit.as_millis()
            ))),
        },
        None => call.await,
    };

    let text = result?;
    let text = text.trim();
    if text.is_empty() {
        return Err(ProviderError::Rejected("empty reply".to_string()));
    }
    Ok(text.to_string())
}
