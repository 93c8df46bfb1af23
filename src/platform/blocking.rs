use tokio::task::JoinError;

/// Run CPU-bound work on the blocking pool so request handlers do not stall
/// the reactor.
pub async fn run_blocking<F, T>(f: F) -> Result<T, JoinError>
where
    F: FnOnce() -> T + Send + 'static,
    T: Send + 'static,
{
    tokio::task::spawn_blocking(f).await
}
