//! View state for the certification screens, kept free of any rendering so it can
//! be unit tested natively.

pub mod form;
pub mod list;
pub mod suggestions;
pub mod wizard;
