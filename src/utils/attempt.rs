// Single-shot wrapper for remote calls that have a local substitute.
// No retries: a failed call is logged and reported as None.

use std::fmt::Display;
use std::future::Future;
use tracing::warn;

/// Await `call`; on error log it against `operation` and return `None`.
pub async fn attempt<T, E, F>(operation: &str, call: F) -> Option<T>
where
    E: Display,
    F: Future<Output = Result<T, E>>,
{
    match call.await {
        Ok(value) => Some(value),
        Err(e) => {
            warn!("{} failed, continuing without it: {}", operation, e);
            None
        },
    }
}

/// [`attempt`], substituting `T::default()` on failure.
pub async fn attempt_or_default<T, E, F>(operation: &str, call: F) -> T
where
    T: Default,
    E: Display,
    F: Future<Output = Result<T, E>>,
{
    attempt(operation, call).await.unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_attempt_passes_success_through() {
        let value = attempt("ok call", async { Ok::<_, String>(5) }).await;
        assert_eq!(value, Some(5));
    }

    #[tokio::test]
    async fn test_attempt_absorbs_errors() {
        let value: Option<u8> = attempt("failing call", async { Err("boom") }).await;
        assert_eq!(value, None);
    }

    #[tokio::test]
    async fn test_attempt_or_default() {
        let value: Vec<String> =
            attempt_or_default("failing list", async { Err::<Vec<String>, _>("down") }).await;
        assert!(value.is_empty());

        let value = attempt_or_default("ok flag", async { Ok::<_, String>(true) }).await;
        assert!(value);
    }
}
