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
//! DNA domains.
//!
//! A domain is a contiguous sequence of bases within a strand. Domains are bounded by single to
//! double (or double to single) strand transitions, crossovers between helices or strand
//! termination.

use super::energy_model::{convert_temperature_k_to_c, energy_model, EnergyModel};
use super::sequence::{is_ambiguous, reverse_complement};
use super::utils::Color;
use super::{Base, Helix, Nucl, Strand};
use std::fmt;
use ultraviolet::Vec3;

/// Melting temperature reported for a domain that is not paired.
pub const UNPAIRED_MELTING_TEMPERATURE: f64 = -500.0;
/// Melting temperature reported for a domain whose sequence contains an `N`.
pub const AMBIGUOUS_MELTING_TEMPERATURE: f64 = -501.0;

/// Color of a domain that has neither its own color nor a strand.
pub const DEFAULT_DOMAIN_COLOR: Color = [0.5, 0.5, 0.5];

/// The melting temperature of a domain.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum MeltingTemperature {
    /// Temperature in degrees Celsius
    Computed(f64),
    /// The domain has no partner to hybridize with.
    Unpaired,
    /// The sequence of the domain contains ambiguous bases.
    AmbiguousSequence,
}

impl MeltingTemperature {
    /// The temperature in degrees Celsius, or a nonphysical value when no temperature could be
    /// computed.
    pub fn as_celsius_or_sentinel(&self) -> f64 {
        match self {
            Self::Computed(t) => *t,
            Self::Unpaired => UNPAIRED_MELTING_TEMPERATURE,
            Self::AmbiguousSequence => AMBIGUOUS_MELTING_TEMPERATURE,
        }
    }

    pub fn celsius(&self) -> Option<f64> {
        if let Self::Computed(t) = self {
            Some(*t)
        } else {
            None
        }
    }
}

impl fmt::Display for MeltingTemperature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Computed(t) => write!(f, "{:.2} °C", t),
            Self::Unpaired => write!(f, "unpaired"),
            Self::AmbiguousSequence => write!(f, "ambiguous"),
        }
    }
}

/// A domain of a strand.
///
/// The domain borrows its helix, its strand and its bases from the structure that contains
/// them.
#[derive(Clone)]
pub struct Domain<'a> {
    /// Identifier of the domain, unique in its structure.
    pub id: usize,
    helix_id: usize,
    helix: &'a Helix,
    strand_id: Option<usize>,
    strand: Option<&'a Strand>,
    base_list: Vec<&'a Base>,
    /// The sequence of the bases, computed when the domain is created.
    sequence: String,
    /// The strand of the paired domain
    pub connected_strand: Option<usize>,
    /// The paired domain
    pub connected_domain: Option<usize>,
    color: Option<Color>,
}

impl<'a> Domain<'a> {
    /// Create a new domain. `bases` must be given from 5' to 3' and must all be on `helix`.
    pub fn new(
        id: usize,
        helix: (usize, &'a Helix),
        strand: Option<(usize, &'a Strand)>,
        bases: Vec<&'a Base>,
    ) -> Self {
        let sequence = bases.iter().map(|b| b.seq).collect();
        Self {
            id,
            helix_id: helix.0,
            helix: helix.1,
            strand_id: strand.map(|s| s.0),
            strand: strand.map(|s| s.1),
            base_list: bases,
            sequence,
            connected_strand: None,
            connected_domain: None,
            color: None,
        }
    }

    pub fn helix(&self) -> &'a Helix {
        self.helix
    }

    pub fn helix_id(&self) -> usize {
        self.helix_id
    }

    pub fn strand(&self) -> Option<&'a Strand> {
        self.strand
    }

    pub fn strand_id(&self) -> Option<usize> {
        self.strand_id
    }

    pub fn base_list(&self) -> &[&'a Base] {
        &self.base_list
    }

    pub fn sequence(&self) -> &str {
        &self.sequence
    }

    pub fn len(&self) -> usize {
        self.base_list.len()
    }

    pub fn is_empty(&self) -> bool {
        self.base_list.is_empty()
    }

    pub fn prime5(&self) -> Option<Nucl> {
        self.base_list.first().map(|b| b.nucl)
    }

    pub fn prime3(&self) -> Option<Nucl> {
        self.base_list.last().map(|b| b.nucl)
    }

    pub fn is_paired(&self) -> bool {
        self.connected_domain.is_some()
    }

    pub fn set_connection(&mut self, strand: usize, domain: usize) {
        self.connected_strand = Some(strand);
        self.connected_domain = Some(domain);
    }

    pub fn clear_connection(&mut self) {
        self.connected_strand = None;
        self.connected_domain = None;
    }

    /// The paired domain with `-1` meaning that there is none.
    pub fn connected_domain_code(&self) -> isize {
        self.connected_domain.map(|d| d as isize).unwrap_or(-1)
    }

    /// The strand of the paired domain with `-1` meaning that there is none.
    pub fn connected_strand_code(&self) -> isize {
        self.connected_strand.map(|s| s as isize).unwrap_or(-1)
    }

    /// The color of the domain. If the domain was not given a color, this is the color of its
    /// strand.
    pub fn color(&self) -> Color {
        self.color
            .or_else(|| self.strand.map(|s| s.rgb_color()))
            .unwrap_or(DEFAULT_DOMAIN_COLOR)
    }

    /// Set the color of the domain. The color of the strand is not modified.
    pub fn set_color(&mut self, color: Color) {
        self.color = Some(color)
    }

    /// Forget the color of the domain, so that the color of the strand is used.
    pub fn reset_color(&mut self) {
        self.color = None
    }

    /// The coordinates of the helix axis at the first and at the last base of the domain.
    ///
    /// Panics if the domain has no base.
    pub fn get_end_points(&self) -> (Vec3, Vec3) {
        let base1 = self.base_list[0];
        let base2 = self.base_list[self.base_list.len() - 1];
        let point1 = self.helix.helix_axis_coords(base1.nucl.position);
        let point2 = self.helix.helix_axis_coords(base2.nucl.position);
        (point1, point2)
    }

    /// The melting temperature of the domain computed with `model`.
    pub fn hybridization<M: EnergyModel + ?Sized>(&self, model: &M) -> MeltingTemperature {
        if self.connected_domain.is_none() {
            return MeltingTemperature::Unpaired;
        }
        if is_ambiguous(&self.sequence) {
            return MeltingTemperature::AmbiguousSequence;
        }
        let (_, _, enthalpy, entropy) =
            model.stack_energy(&self.sequence, &reverse_complement(&self.sequence));
        let melting_temp_k = model.melting_temperature(enthalpy, entropy);
        MeltingTemperature::Computed(convert_temperature_k_to_c(melting_temp_k))
    }

    /// The melting temperature in degrees Celsius computed with `model`, `-500.` if the domain
    /// is not paired and `-501.` if its sequence contains ambiguous bases.
    pub fn melting_temperature_with<M: EnergyModel + ?Sized>(&self, model: &M) -> f64 {
        self.hybridization(model).as_celsius_or_sentinel()
    }

    /// The melting temperature in degrees Celsius in the default conditions, `-500.` if the
    /// domain is not paired and `-501.` if its sequence contains ambiguous bases.
    pub fn melting_temperature(&self) -> f64 {
        self.melting_temperature_with(energy_model())
    }
}

impl<'a> fmt::Display for Domain<'a> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (self.prime5(), self.prime3()) {
            (Some(first), Some(last)) if first.forward => {
                write!(f, "[H{}: {} -> {}]", self.helix_id, first.position, last.position)
            }
            (Some(first), Some(last)) => {
                write!(f, "[H{}: {} <- {}]", self.helix_id, last.position, first.position)
            }
            _ => write!(f, "[H{}: empty]", self.helix_id),
        }
    }
}

impl<'a> fmt::Debug for Domain<'a> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Domain {} {} {}", self.id, self, self.sequence)
    }
}
