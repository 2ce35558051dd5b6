pub mod amortization;
pub mod offers;
