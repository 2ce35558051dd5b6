pub mod error;
pub mod form;
pub mod time_value;
pub mod types;

#[cfg(feature = "borrow")]
pub mod borrow;

#[cfg(feature = "invest")]
pub mod invest;

pub use error::FinWizError;
pub use types::*;

/// Standard result type for all FinWiz calculations
pub type FinWizResult<T> = Result<T, FinWizError>;
