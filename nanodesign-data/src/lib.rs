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
//! This crate defines the data of a DNA nanostructure design.
//!
//! A `Design` is the serialized description of helices and strands. It is turned into a
//! `DnaStructure` that owns the individual bases, and from which the `Domain`s of each strand
//! are computed. Domains expose their geometry and their hybridization melting temperature.
use std::path::Path;

#[macro_use]
extern crate serde_derive;
extern crate serde;
pub use ultraviolet;

mod strands;
pub use strands::*;
mod helices;
pub use helices::*;

mod parameters;
pub use parameters::*;

pub mod energy_model;
use energy_model::SolutionConditions;
pub mod sequence;

mod domain;
pub use domain::*;
mod structure;
pub use structure::*;

pub mod utils;

#[cfg(test)]
mod tests;

/// The `nanodesign` Design structure.
#[derive(Serialize, Deserialize, Clone, Default)]
pub struct Design {
    /// The collection of all helices used in this design. Helices have a
    /// position and an orientation in 3D.
    pub helices: Helices,
    /// The strands of the design.
    pub strands: Strands,
    /// Parameters of DNA geometry. This can be skipped (in JSON), or
    /// set to `None` in Rust, in which case a default set of
    /// parameters from the literature is used.
    #[serde(
        skip_serializing_if = "Option::is_none",
        default,
        rename(serialize = "dna_parameters"),
        alias = "dna_parameters"
    )]
    pub parameters: Option<Parameters>,

    /// The conditions in which hybridization energies are computed. When absent, the
    /// conditions of the unified nearest-neighbor parameters are used.
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub energy_conditions: Option<SolutionConditions>,
}

impl Design {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_json_str(json: &str) -> Result<Self, DesignError> {
        let design: Self = serde_json::from_str(json)?;
        log::debug!(
            "Read design with {} helices and {} strands",
            design.helices.len(),
            design.strands.len()
        );
        Ok(design)
    }

    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self, DesignError> {
        let json = std::fs::read_to_string(path.as_ref())?;
        log::info!("Loading design from {}", path.as_ref().to_string_lossy());
        Self::from_json_str(&json)
    }

    /// The geometric parameters of the design, or the default ones if none were given.
    pub fn parameters(&self) -> Parameters {
        self.parameters.unwrap_or_default()
    }

    /// The hybridization conditions of the design, or the default ones if none were given.
    pub fn energy_conditions(&self) -> SolutionConditions {
        self.energy_conditions.unwrap_or_default()
    }
}

/// An error that occured while reading a design or while building its structure.
#[derive(Debug)]
pub enum DesignError {
    IOError(std::io::Error),
    Json(serde_json::Error),
    /// A strand goes through an helix that is not in the design.
    MissingHelix { strand: usize, helix: usize },
    /// Two bases are at the same location.
    DuplicateNucl(Nucl),
    /// A sequence contains a symbol that cannot be paired.
    InvalidSymbol { strand: usize, symbol: char },
}

impl From<std::io::Error> for DesignError {
    fn from(e: std::io::Error) -> Self {
        Self::IOError(e)
    }
}

impl From<serde_json::Error> for DesignError {
    fn from(e: serde_json::Error) -> Self {
        Self::Json(e)
    }
}

impl std::fmt::Display for DesignError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::IOError(e) => write!(f, "Could not read design: {}", e),
            Self::Json(e) => write!(f, "Could not parse design: {}", e),
            Self::MissingHelix { strand, helix } => {
                write!(f, "Strand {} uses helix {} which does not exist", strand, helix)
            }
            Self::DuplicateNucl(nucl) => write!(f, "Nucleotide {} is used twice", nucl),
            Self::InvalidSymbol { strand, symbol } => {
                write!(f, "Strand {} has invalid base {:?}", strand, symbol)
            }
        }
    }
}

impl std::error::Error for DesignError {}

/// The location of a nucleotide: a position on one of the two strands of an helix.
#[derive(Serialize, Deserialize, Clone, Copy, Eq, PartialEq, Hash, Debug)]
pub struct Nucl {
    pub helix: usize,
    pub position: isize,
    pub forward: bool,
}

impl std::cmp::PartialOrd for Nucl {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl std::cmp::Ord for Nucl {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        if self.helix != other.helix {
            self.helix.cmp(&other.helix)
        } else if self.forward != other.forward {
            self.forward.cmp(&other.forward)
        } else if self.forward {
            self.position.cmp(&other.position)
        } else {
            self.position.cmp(&other.position).reverse()
        }
    }
}

impl Nucl {
    pub fn new(helix: usize, position: isize, forward: bool) -> Self {
        Self {
            helix,
            position,
            forward,
        }
    }

    /// The 3' neighbour of self on the same helix.
    pub fn prime3(&self) -> Self {
        Self {
            position: if self.forward {
                self.position + 1
            } else {
                self.position - 1
            },
            ..*self
        }
    }

    /// The nucleotide facing self on the other strand of the helix.
    pub fn compl(&self) -> Self {
        Self {
            forward: !self.forward,
            ..*self
        }
    }
}

impl std::fmt::Display for Nucl {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {}, {})", self.helix, self.position, self.forward)
    }
}
