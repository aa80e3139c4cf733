use crate::error::{RecoError, Result};
use serde::Serialize;

/// Quadratic coefficient `weight * x_i * x_j` with `i < j`.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct QuadraticTerm {
    pub i: usize,
    pub j: usize,
    pub weight: f64,
}

/// Linear plus sparse quadratic energy
/// `E(x) = sum_i a_i x_i + sum_{i<j} b_ij x_i x_j` over binary `x`.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct QuboModel {
    linear: Vec<f64>,
    terms: Vec<QuadraticTerm>,
    #[serde(skip)]
    adjacency: Vec<Vec<(usize, f64)>>,
    #[serde(skip)]
    sentinel_value: f64,
}

impl QuboModel {
    /// Builds a model from raw coefficients. Terms are normalised to `i < j`,
    /// duplicates are summed and self-terms are folded into the linear part.
    pub fn from_terms(linear: Vec<f64>, terms: Vec<QuadraticTerm>) -> Result<Self> {
        let n = linear.len();
        let mut linear = linear;
        let mut normalized: Vec<QuadraticTerm> = Vec::with_capacity(terms.len());
        for term in terms {
            if term.i >= n || term.j >= n {
                return Err(RecoError::MissingCoefficient {
                    index: term.i.max(term.j),
                    reason: "quadratic term references an unknown triplet",
                });
            }
            if term.i == term.j {
                // x_i * x_i == x_i for binary variables.
                linear[term.i] += term.weight;
                continue;
            }
            normalized.push(QuadraticTerm {
                i: term.i.min(term.j),
                j: term.i.max(term.j),
                weight: term.weight,
            });
        }
        normalized.sort_by_key(|t| (t.i, t.j));
        let mut merged: Vec<QuadraticTerm> = Vec::with_capacity(normalized.len());
        for term in normalized {
            match merged.last_mut() {
                Some(last) if last.i == term.i && last.j == term.j => last.weight += term.weight,
                _ => merged.push(term),
            }
        }

        let mut adjacency = vec![Vec::new(); n];
        for t in &merged {
            adjacency[t.i].push((t.j, t.weight));
            adjacency[t.j].push((t.i, t.weight));
        }
        Ok(Self {
            linear,
            terms: merged,
            adjacency,
            sentinel_value: f64::INFINITY,
        })
    }

    /// Marks quadratic terms at or above `value` as sentinel terms in the
    /// summary.
    pub fn with_sentinel_value(mut self, value: f64) -> Self {
        self.sentinel_value = value;
        self
    }

    pub fn len(&self) -> usize {
        self.linear.len()
    }

    pub fn is_empty(&self) -> bool {
        self.linear.is_empty()
    }

    pub fn linear(&self) -> &[f64] {
        &self.linear
    }

    pub fn terms(&self) -> &[QuadraticTerm] {
        &self.terms
    }

    /// Quadratic partners of `i` as `(j, b_ij)`.
    pub fn neighbors(&self, i: usize) -> &[(usize, f64)] {
        self.adjacency.get(i).map_or(&[], |n| n.as_slice())
    }

    /// Energy of a selection. Indices beyond `selection` count as unselected.
    pub fn energy(&self, selection: &[bool]) -> f64 {
        let on = |i: usize| selection.get(i).copied().unwrap_or(false);
        let linear: f64 = self
            .linear
            .iter()
            .enumerate()
            .filter(|(i, _)| on(*i))
            .map(|(_, a)| a)
            .sum();
        let quadratic: f64 = self
            .terms
            .iter()
            .filter(|t| on(t.i) && on(t.j))
            .map(|t| t.weight)
            .sum();
        linear + quadratic
    }

    /// Energy change of flipping bit `i` with all other bits fixed:
    /// `(1 - 2 x_i) * (a_i + sum_j b_ij x_j)`.
    pub fn flip_delta(&self, i: usize, selection: &[bool]) -> f64 {
        let field = self.linear[i]
            + self
                .neighbors(i)
                .iter()
                .filter(|(j, _)| selection.get(*j).copied().unwrap_or(false))
                .map(|(_, w)| w)
                .sum::<f64>();
        if selection.get(i).copied().unwrap_or(false) {
            -field
        } else {
            field
        }
    }

    pub fn summary(&self) -> CoefficientSummary {
        let quadratic: Vec<f64> = self.terms.iter().map(|t| t.weight).collect();
        CoefficientSummary {
            linear: TermStats::from_values(&self.linear),
            quadratic: TermStats::from_values(&quadratic),
            sentinel_terms: quadratic
                .iter()
                .filter(|&&w| w >= self.sentinel_value)
                .count(),
        }
    }
}

/// Sign counts and range of one coefficient family.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TermStats {
    pub count: usize,
    pub positive: usize,
    pub negative: usize,
    pub zero: usize,
    pub min: Option<f64>,
    pub max: Option<f64>,
    pub mean: Option<f64>,
}

impl TermStats {
    pub fn from_values(values: &[f64]) -> Self {
        let mut stats = TermStats {
            count: values.len(),
            ..TermStats::default()
        };
        for &v in values {
            if v > 0.0 {
                stats.positive += 1;
            } else if v < 0.0 {
                stats.negative += 1;
            } else {
                stats.zero += 1;
            }
            stats.min = Some(stats.min.map_or(v, |m| m.min(v)));
            stats.max = Some(stats.max.map_or(v, |m| m.max(v)));
        }
        if !values.is_empty() {
            stats.mean = Some(values.iter().sum::<f64>() / values.len() as f64);
        }
        stats
    }
}

/// Distribution of the assembled coefficients, for external reporting.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CoefficientSummary {
    pub linear: TermStats,
    pub quadratic: TermStats,
    pub sentinel_terms: usize,
}
