//! Track candidates assembled from the kept triplets.
//!
//! A chain starts at every kept triplet on the innermost layer and grows by
//! one layer whenever a later kept triplet begins with the chain's trailing
//! doublet. Each chain becomes an [`Xplet`] and may be fitted with a straight
//! line in both projections; the fit reports chi-squared with
//! `nx + ny - 4` degrees of freedom and the matching p-value.

mod assembler;
mod fit;
mod options;
mod xplet;

pub use assembler::XpletAssembler;
pub use fit::{fit_line, LinearFit};
pub use options::FitOptions;
pub use xplet::Xplet;

#[cfg(test)]
mod tests;
