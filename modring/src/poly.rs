//! Polynomial representations over `Z/mZ`.

pub mod univariate;

pub use univariate::UnivariatePolynomial;
