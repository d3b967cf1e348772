use std::future::Future;

use crate::error::{Result, VpicError};

/// Run `op` until it finishes or `cancel` resolves, whichever comes first.
///
/// On cancellation `op` is dropped, which aborts its in-flight request, and
/// [`VpicError::Cancelled`] is returned. A result that is already available
/// takes priority over a simultaneous cancel.
pub async fn until_cancelled<T, F, C>(op: F, cancel: C) -> Result<T>
where
    F: Future<Output = Result<T>>,
    C: Future<Output = ()>,
{
    tokio::select! {
        biased;
        res = op => res,
        _ = cancel => {
            tracing::debug!("operation cancelled by caller");
            Err(VpicError::Cancelled)
        }
    }
}
