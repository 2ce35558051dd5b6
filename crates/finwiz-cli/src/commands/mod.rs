pub mod borrow;
pub mod invest;
