/*
nanodesign, data structures for structural DNA designs.
    Copyright (C) 2021  Nicolas Levy <nicolaspierrelevy@gmail.com> and Nicolas Schabanel <nicolas.schabanel@ens-lyon.fr>

    This program is free software: you can redistribute it and/or modify
    it under the terms of the GNU General Public License as published by
    the Free Software Foundation, either version 3 of the License, or
    (at your option) any later version.

    This program is distributed in the hope that it will be useful,
    but WITHOUT ANY WARRANTY; without even the implied warranty of
    MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
    GNU General Public License for more details.

    You should have received a copy of the GNU General Public License
    along with this program.  If not, see <https://www.gnu.org/licenses/>.
*/

use super::energy_model::{NearestNeighbor, SolutionConditions};
use super::sequence::{complement, is_valid_symbol};
use super::{Design, DesignError, Domain, Helices, Nucl, Parameters, Strands};
use ahash::AHashMap;
use std::collections::BTreeMap;

/// Symbol of the bases whose sequence is not known.
pub const UNKNOWN_BASE: char = 'N';

/// A nucleotide of a strand.
#[derive(Debug, Clone, PartialEq)]
pub struct Base {
    /// Identifier of the base, unique in its structure.
    pub id: usize,
    /// Location of the base on its helix.
    pub nucl: Nucl,
    /// Identifier of the strand that contains the base.
    pub strand: usize,
    /// One letter symbol of the base.
    pub seq: char,
    /// Identifier of the base paired with self, if any.
    pub across: Option<usize>,
}

impl Base {
    pub fn new(id: usize, nucl: Nucl, strand: usize, seq: char) -> Self {
        Self {
            id,
            nucl,
            strand,
            seq,
            across: None,
        }
    }
}

/// The bases of a design, with their pairing.
///
/// Domains are computed from a `DnaStructure` and borrow it.
pub struct DnaStructure {
    parameters: Parameters,
    energy_model: NearestNeighbor,
    helices: Helices,
    strands: Strands,
    /// All the bases, indexed by their identifier.
    bases: Vec<Base>,
    /// The bases of each strand, from 5' to 3'.
    strand_bases: BTreeMap<usize, Vec<usize>>,
    /// The index of each base in its strand.
    strand_index: Vec<usize>,
    nucl_to_base: AHashMap<Nucl, usize>,
}

impl DnaStructure {
    pub fn new(design: &Design) -> Result<Self, DesignError> {
        let parameters = design.parameters();
        let mut helices = design.helices.clone();
        for h in helices.values_mut() {
            h.set_parameters(parameters);
        }

        let mut bases = Vec::new();
        let mut symbols: Vec<Option<char>> = Vec::new();
        let mut strand_bases = BTreeMap::new();
        let mut strand_index = Vec::new();
        let mut nucl_to_base = AHashMap::new();

        for (s_id, strand) in design.strands.iter() {
            let strand_sequence: Vec<char> = strand
                .sequence
                .as_ref()
                .map(|s| s.chars().collect())
                .unwrap_or_default();
            let mut ids = Vec::with_capacity(strand.length());
            for interval in strand.domains.iter() {
                if helices.get(&interval.helix).is_none() {
                    return Err(DesignError::MissingHelix {
                        strand: *s_id,
                        helix: interval.helix,
                    });
                }
                let interval_sequence: Option<Vec<char>> =
                    interval.sequence.as_ref().map(|s| s.chars().collect());
                for (i, nucl) in interval.iter().enumerate() {
                    let symbol = interval_sequence
                        .as_ref()
                        .and_then(|seq| seq.get(i))
                        .or_else(|| strand_sequence.get(ids.len()))
                        .cloned();
                    if let Some(symbol) = symbol.filter(|c| !is_valid_symbol(*c)) {
                        return Err(DesignError::InvalidSymbol {
                            strand: *s_id,
                            symbol,
                        });
                    }
                    let id = bases.len();
                    if nucl_to_base.insert(nucl, id).is_some() {
                        return Err(DesignError::DuplicateNucl(nucl));
                    }
                    strand_index.push(ids.len());
                    ids.push(id);
                    symbols.push(symbol);
                    bases.push(Base::new(id, nucl, *s_id, UNKNOWN_BASE));
                }
            }
            strand_bases.insert(*s_id, ids);
        }

        for base in bases.iter_mut() {
            base.across = nucl_to_base.get(&base.nucl.compl()).cloned();
        }

        // Bases without a sequence take the complement of their partner's symbol
        let mut nb_unknown = 0;
        for id in 0..bases.len() {
            let symbol = symbols[id].or_else(|| {
                bases[id]
                    .across
                    .and_then(|across| symbols[across])
                    .map(complement)
            });
            if let Some(symbol) = symbol {
                bases[id].seq = symbol;
            } else {
                nb_unknown += 1;
            }
        }
        log::info!(
            "Built structure with {} bases, {} of which have an unknown sequence",
            bases.len(),
            nb_unknown
        );

        Ok(Self {
            parameters,
            energy_model: NearestNeighbor::new(design.energy_conditions()),
            helices,
            strands: design.strands.clone(),
            bases,
            strand_bases,
            strand_index,
            nucl_to_base,
        })
    }

    pub fn parameters(&self) -> &Parameters {
        &self.parameters
    }

    pub fn conditions(&self) -> &SolutionConditions {
        self.energy_model.conditions()
    }

    /// The energy model in the conditions of the design.
    pub fn energy_model(&self) -> &NearestNeighbor {
        &self.energy_model
    }

    pub fn helices(&self) -> &Helices {
        &self.helices
    }

    pub fn strands(&self) -> &Strands {
        &self.strands
    }

    pub fn bases(&self) -> &[Base] {
        &self.bases
    }

    pub fn base(&self, id: usize) -> Option<&Base> {
        self.bases.get(id)
    }

    pub fn base_at(&self, nucl: &Nucl) -> Option<&Base> {
        self.nucl_to_base.get(nucl).and_then(|id| self.base(*id))
    }

    pub fn paired_base(&self, base: &Base) -> Option<&Base> {
        base.across.and_then(|id| self.base(id))
    }

    /// The bases of a strand, from 5' to 3'.
    pub fn strand_bases(&self, strand_id: usize) -> Vec<&Base> {
        self.strand_bases
            .get(&strand_id)
            .map(|ids| ids.iter().map(|id| &self.bases[*id]).collect())
            .unwrap_or_default()
    }

    /// True iff `next` is the 3' neighbour of `prev` in their strand.
    fn follows_in_strand(&self, prev: usize, next: usize) -> bool {
        let (p, n) = (&self.bases[prev], &self.bases[next]);
        if p.strand != n.strand {
            return false;
        }
        let (i_prev, i_next) = (self.strand_index[prev], self.strand_index[next]);
        if i_next == i_prev + 1 {
            return true;
        }
        let cyclic = self.strands.get(&p.strand).map(|s| s.cyclic).unwrap_or(false);
        let len = self.strand_bases.get(&p.strand).map(|b| b.len()).unwrap_or(0);
        cyclic && i_next == 0 && i_prev + 1 == len
    }

    /// True iff `next`, the 3' neighbour of `prev` in its strand, is in the same domain as
    /// `prev`.
    fn continues_domain(&self, prev: usize, next: usize) -> bool {
        let (p, n) = (&self.bases[prev], &self.bases[next]);
        if p.nucl.prime3() != n.nucl {
            // cross-over
            return false;
        }
        match (p.across, n.across) {
            (None, None) => true,
            // The partners run in the opposite direction
            (Some(p_across), Some(n_across)) => self.follows_in_strand(n_across, p_across),
            _ => false,
        }
    }

    /// Split the strands into domains and pair them.
    ///
    /// Domains are numbered strand by strand, from 5' to 3'.
    pub fn domains(&self) -> Vec<Domain<'_>> {
        let mut runs: Vec<(usize, Vec<usize>)> = Vec::new();
        for (s_id, ids) in self.strand_bases.iter() {
            let mut current: Vec<usize> = Vec::new();
            for id in ids.iter() {
                if let Some(prev) = current.last() {
                    if !self.continues_domain(*prev, *id) {
                        runs.push((*s_id, std::mem::take(&mut current)));
                    }
                }
                current.push(*id);
            }
            if !current.is_empty() {
                runs.push((*s_id, current));
            }
        }

        let mut base_domain = vec![0; self.bases.len()];
        for (d_id, (_, ids)) in runs.iter().enumerate() {
            for id in ids.iter() {
                base_domain[*id] = d_id;
            }
        }

        let mut ret = Vec::with_capacity(runs.len());
        for (d_id, (s_id, ids)) in runs.into_iter().enumerate() {
            let first = &self.bases[ids[0]];
            let h_id = first.nucl.helix;
            let helix = if let Some(helix) = self.helices.get(&h_id) {
                helix
            } else {
                log::error!("Domain {} is on missing helix {}", d_id, h_id);
                continue;
            };
            let strand = self.strands.get(&s_id).map(|s| (s_id, s));
            let mut domain = Domain::new(
                d_id,
                (h_id, helix),
                strand,
                ids.iter().map(|id| &self.bases[*id]).collect(),
            );
            if let Some(across) = first.across {
                domain.set_connection(self.bases[across].strand, base_domain[across]);
            }
            ret.push(domain);
        }
        log::debug!("Split {} strands into {} domains", self.strands.len(), ret.len());
        ret
    }
}
