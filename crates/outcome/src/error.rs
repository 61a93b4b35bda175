/// Returned when a payload is read from the wrong variant of an [`Outcome`](crate::Outcome)
#[non_exhaustive]
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum InvalidAccess {
    /// The success payload was requested from a failed outcome
    NotSuccess,
    /// The failure payload was requested from a successful outcome
    NotFailure,
}

impl std::fmt::Display for InvalidAccess {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let err = match self {
            Self::NotSuccess => "not a successful result",
            Self::NotFailure => "not a failed result",
        };
        f.write_str(err)
    }
}

impl std::error::Error for InvalidAccess {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_access_messages() {
        for (err, expected) in [
            (InvalidAccess::NotSuccess, "not a successful result"),
            (InvalidAccess::NotFailure, "not a failed result"),
        ] {
            assert_eq!(err.to_string(), expected)
        }
    }

    #[test]
    fn invalid_access_into_anyhow() {
        let err = anyhow::Error::from(InvalidAccess::NotFailure);
        assert_eq!(
            err.downcast_ref::<InvalidAccess>(),
            Some(&InvalidAccess::NotFailure)
        );
    }
}
