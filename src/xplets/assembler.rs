use super::fit::fit_line;
use super::options::FitOptions;
use super::xplet::Xplet;
use crate::triplets::Triplet;
use crate::types::Hit;
use log::{debug, warn};

/// Chains kept triplets into xplets. Chains start on layer 0, the innermost
/// layer of the segment index.
#[derive(Clone, Debug, Default)]
pub struct XpletAssembler {
    fit: FitOptions,
}

impl XpletAssembler {
    pub fn new(fit: FitOptions) -> Self {
        Self { fit }
    }

    /// Builds one xplet per kept triplet on the innermost layer. Kept
    /// triplets are ordered by the z of their leading hit (ties by index);
    /// each chain is extended by the first later triplet whose leading
    /// doublet is the chain's trailing doublet.
    pub fn assemble(&self, hits: &[Hit], triplets: &[Triplet], selection: &[bool]) -> Vec<Xplet> {
        let mut kept: Vec<usize> = selection
            .iter()
            .enumerate()
            .filter(|&(i, &on)| on && i < triplets.len())
            .map(|(i, _)| i)
            .collect();
        kept.sort_by(|&a, &b| {
            let za = hits[triplets[a].hits[0]].z();
            let zb = hits[triplets[b].hits[0]].z();
            za.total_cmp(&zb).then(a.cmp(&b))
        });

        let mut xplets = Vec::new();
        for (pos, &start) in kept.iter().enumerate() {
            if triplets[start].layer != 0 {
                continue;
            }
            let mut chain = vec![start];
            let mut trailing = triplets[start].trailing_doublet();
            for &next in &kept[pos + 1..] {
                if triplets[next].leading_doublet() == trailing {
                    chain.push(next);
                    trailing = triplets[next].trailing_doublet();
                }
            }
            xplets.push(self.materialize(hits, triplets, &chain));
        }
        debug!(
            "XpletAssembler: {} xplets from {} kept triplets",
            xplets.len(),
            kept.len()
        );
        xplets
    }

    fn materialize(&self, hits: &[Hit], triplets: &[Triplet], chain: &[usize]) -> Xplet {
        let mut hit_indices: Vec<usize> = triplets[chain[0]].hits.to_vec();
        for &t in &chain[1..] {
            hit_indices.push(triplets[t].hits[2]);
        }
        let positions: Vec<[f64; 3]> = hit_indices
            .iter()
            .map(|&h| [hits[h].x(), hits[h].y(), hits[h].z()])
            .collect();
        let triplet_ids = chain.iter().map(|&t| triplets[t].id).collect();

        let fit = if self.fit.enabled {
            match fit_line(&positions, &self.fit) {
                Ok(fit) => Some(fit),
                Err(err) => {
                    warn!("xplet starting at {}: {err}; fit skipped", triplets[chain[0]].id);
                    None
                }
            }
        } else {
            None
        };

        Xplet {
            triplet_ids,
            hit_ids: hit_indices.iter().map(|&h| hits[h].id).collect(),
            particle_ids: hit_indices.iter().map(|&h| hits[h].particle_id).collect(),
            energies: hit_indices.iter().map(|&h| hits[h].particle_energy).collect(),
            positions,
            fit,
        }
    }
}
