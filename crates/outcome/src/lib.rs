//! A success-or-failure value for the settled state of a fallible computation.
//!
//! ```
//! # #[tokio::main(flavor = "current_thread")]
//! # async fn main() {
//! use outcome::lift;
//!
//! let result = lift(async { Ok::<_, std::io::Error>("hello") }).await;
//! let output = result
//!     .map(|s| s.to_uppercase())
//!     .with_default(String::from("n/a"));
//! assert_eq!(output, "HELLO");
//! # }
//! ```

mod outcome;
pub use outcome::Outcome;

mod error;
pub use error::InvalidAccess;

mod lift;
pub use lift::lift;
