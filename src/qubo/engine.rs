use super::model::{QuadraticTerm, QuboModel};
use super::options::QuboOptions;
use crate::error::{RecoError, Result};
use crate::graph::{ConflictGraph, SENTINEL_WEIGHT};
use crate::triplets::Triplet;
use log::debug;

/// Turns triplet qualities and graph weights into QUBO coefficients.
#[derive(Clone, Debug)]
pub struct QuboCoefficientEngine {
    options: QuboOptions,
}

impl QuboCoefficientEngine {
    pub fn new(options: QuboOptions) -> Result<Self> {
        options.validate()?;
        Ok(Self { options })
    }

    pub fn options(&self) -> &QuboOptions {
        &self.options
    }

    /// `a_i = -f * quality_i` and `b_ij = f * w_ij` for every retained edge,
    /// with `f` the rescale factor. Fails when a triplet has no quality or
    /// the graph does not cover the triplet list.
    pub fn assemble(&self, triplets: &[Triplet], graph: &ConflictGraph) -> Result<QuboModel> {
        if graph.len() != triplets.len() {
            return Err(RecoError::MissingCoefficient {
                index: graph.len().min(triplets.len()),
                reason: "interaction graph does not cover every triplet",
            });
        }
        let mut qualities = Vec::with_capacity(triplets.len());
        for (index, t) in triplets.iter().enumerate() {
            match t.quality {
                Some(q) if q.is_finite() => qualities.push(q),
                Some(_) => {
                    return Err(RecoError::MissingCoefficient {
                        index,
                        reason: "quality is not finite",
                    })
                }
                None => {
                    return Err(RecoError::MissingCoefficient {
                        index,
                        reason: "quality not assigned",
                    })
                }
            }
        }

        if let Some(range) = self.options.quality_range {
            min_max_rescale(&mut qualities, range);
        }

        let mut terms: Vec<QuadraticTerm> = graph
            .edges()
            .map(|e| QuadraticTerm {
                i: e.i,
                j: e.j,
                weight: e.weight,
            })
            .collect();
        if let Some(range) = self.options.interaction_range {
            let mut compatible: Vec<f64> = terms
                .iter()
                .filter(|t| t.weight <= 0.0)
                .map(|t| t.weight)
                .collect();
            min_max_rescale(&mut compatible, range);
            for (term, w) in terms.iter_mut().filter(|t| t.weight <= 0.0).zip(compatible) {
                term.weight = w;
            }
        }

        let f = self.options.rescale_factor;
        let linear: Vec<f64> = qualities.iter().map(|q| -f * q).collect();
        for term in &mut terms {
            term.weight *= f;
        }
        let model = QuboModel::from_terms(linear, terms)?.with_sentinel_value(f * SENTINEL_WEIGHT);
        debug!(
            "QuboCoefficientEngine: {} linear, {} quadratic terms (factor {})",
            model.len(),
            model.terms().len(),
            f
        );
        Ok(model)
    }
}

/// Maps `values` linearly onto `[a, b]`. A constant sample maps to the
/// midpoint.
fn min_max_rescale(values: &mut [f64], [a, b]: [f64; 2]) {
    let Some(min) = values.iter().copied().reduce(f64::min) else {
        return;
    };
    let max = values.iter().copied().fold(min, f64::max);
    let span = max - min;
    for v in values.iter_mut() {
        *v = if span > 0.0 {
            a + (*v - min) * (b - a) / span
        } else {
            0.5 * (a + b)
        };
    }
}
