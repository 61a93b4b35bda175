use std::future::Future;

use crate::Outcome;

/// Await a fallible computation and capture how it settled.
///
/// `Ok` becomes a successful [`Outcome`] and `Err` a failed one. The returned
/// future's output is the outcome itself, so awaiting it never yields an error:
/// callers branch on the outcome instead of propagating with `?`.
///
/// `pending` is awaited exactly once. Nothing is spawned and no timeout is
/// applied; wrap the computation before lifting it if it needs either.
///
/// ```
/// # #[tokio::main(flavor = "current_thread")]
/// # async fn main() {
/// let result = outcome::lift(async { Err::<u32, _>("goodbye") }).await;
/// assert!(result.is_failure());
/// assert_eq!(result.with_default(0), 0);
/// # }
/// ```
pub async fn lift<Fut, F, S>(pending: Fut) -> Outcome<F, S>
where
    Fut: Future<Output = Result<S, F>>,
{
    let outcome = Outcome::from(pending.await);
    log::trace!(
        "lifted computation settled as a {}",
        if outcome.is_success() { "success" } else { "failure" }
    );
    outcome
}
