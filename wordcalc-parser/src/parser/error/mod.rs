pub mod kind;

pub use wordcalc_error::Error;
