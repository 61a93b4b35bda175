use crate::InvalidAccess;

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(::serde::Serialize, ::serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
enum Either<F, S> {
    Failure(F),
    Success(S),
}

/// The settled state of a computation: either a failure `F` or a success `S`.
///
/// The type parameters are ordered failure-first. Neither is required to be an
/// error type, any value can be carried on either side.
///
/// Build one with [`Outcome::failure`], [`Outcome::success`], from a
/// [`Result`], or by awaiting [`lift`](crate::lift).
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(::serde::Serialize, ::serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct Outcome<F, S> {
    either: Either<F, S>,
}

impl<F, S> Outcome<F, S> {
    /// Construct an outcome in the failed state
    pub const fn failure(value: F) -> Self {
        Self {
            either: Either::Failure(value),
        }
    }

    /// Construct an outcome in the successful state
    pub const fn success(value: S) -> Self {
        Self {
            either: Either::Success(value),
        }
    }

    /// Await `pending` and capture how it settled.
    ///
    /// See [`lift`](crate::lift).
    pub async fn lift<Fut>(pending: Fut) -> Self
    where
        Fut: std::future::Future<Output = Result<S, F>>,
    {
        crate::lift(pending).await
    }

    /// Whether the computation succeeded
    pub const fn is_success(&self) -> bool {
        matches!(self.either, Either::Success(..))
    }

    /// Whether the computation failed
    pub const fn is_failure(&self) -> bool {
        matches!(self.either, Either::Failure(..))
    }

    /// The success payload, or [`InvalidAccess::NotSuccess`] if this outcome failed
    pub fn success_value(self) -> Result<S, InvalidAccess> {
        match self.either {
            Either::Success(value) => Ok(value),
            Either::Failure(..) => Err(InvalidAccess::NotSuccess),
        }
    }

    /// The failure payload, or [`InvalidAccess::NotFailure`] if this outcome succeeded
    pub fn failure_value(self) -> Result<F, InvalidAccess> {
        match self.either {
            Either::Failure(value) => Ok(value),
            Either::Success(..) => Err(InvalidAccess::NotFailure),
        }
    }

    /// The success payload, or `fallback` if this outcome failed.
    ///
    /// The failure payload is dropped without being looked at.
    pub fn with_default(self, fallback: S) -> S {
        match self.either {
            Either::Success(value) => value,
            Either::Failure(..) => fallback,
        }
    }

    /// The success payload, or `recover` applied to the failure payload
    pub fn apply_default(self, recover: impl FnOnce(F) -> S) -> S {
        match self.either {
            Either::Success(value) => value,
            Either::Failure(value) => recover(value),
        }
    }

    /// Apply exactly one of the two callbacks, depending on the variant
    pub fn fold<R>(self, on_failure: impl FnOnce(F) -> R, on_success: impl FnOnce(S) -> R) -> R {
        match self.either {
            Either::Failure(value) => on_failure(value),
            Either::Success(value) => on_success(value),
        }
    }

    /// Transform the success payload. A failure passes through untouched and
    /// `transform` is not called.
    pub fn map<S2>(self, transform: impl FnOnce(S) -> S2) -> Outcome<F, S2> {
        match self.either {
            Either::Success(value) => Outcome::success(transform(value)),
            Either::Failure(value) => Outcome::failure(value),
        }
    }

    /// Transform the failure payload. A success passes through untouched and
    /// `transform` is not called.
    pub fn map_error<F2>(self, transform: impl FnOnce(F) -> F2) -> Outcome<F2, S> {
        match self.either {
            Either::Failure(value) => Outcome::failure(transform(value)),
            Either::Success(value) => Outcome::success(value),
        }
    }

    /// Borrow both payloads, leaving this outcome in place
    pub const fn as_ref(&self) -> Outcome<&F, &S> {
        let either = match &self.either {
            Either::Failure(value) => Either::Failure(value),
            Either::Success(value) => Either::Success(value),
        };
        Outcome { either }
    }

    /// Convert into a [`Result`], success as `Ok` and failure as `Err`
    pub fn into_result(self) -> Result<S, F> {
        self.into()
    }
}

impl<F, S> From<Result<S, F>> for Outcome<F, S> {
    fn from(result: Result<S, F>) -> Self {
        match result {
            Ok(value) => Self::success(value),
            Err(value) => Self::failure(value),
        }
    }
}

impl<F, S> From<Outcome<F, S>> for Result<S, F> {
    fn from(outcome: Outcome<F, S>) -> Self {
        match outcome.either {
            Either::Success(value) => Ok(value),
            Either::Failure(value) => Err(value),
        }
    }
}
