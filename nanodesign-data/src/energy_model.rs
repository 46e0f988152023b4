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
//! Nearest-neighbor thermodynamics of DNA duplexes.
//!
//! Energies are in kcal/mol, entropies in cal/(K·mol) and temperatures in Kelvin unless stated
//! otherwise.

use ahash::AHashMap;
use std::sync::LazyLock;

/// Gas constant in cal/(K·mol)
pub const GAS_CONSTANT: f64 = 1.9872;

const ZERO_CELSIUS: f64 = 273.15;

/// The result of a stacking energy computation.
///
/// `(free_energy, mean_stack_free_energy, enthalpy, entropy)` where `free_energy` is the
/// free energy of the duplex at the temperature of the model and `mean_stack_free_energy` the
/// average free energy of one nearest-neighbor stack at that temperature.
pub type StackEnergy = (f64, f64, f64, f64);

/// A thermodynamic model of DNA hybridization.
pub trait EnergyModel {
    /// The energy of the duplex formed by `seq` and `comp_seq`. Both sequences are read from
    /// their 5' end, so that base `i` of `seq` faces base `len - 1 - i` of `comp_seq`.
    fn stack_energy(&self, seq: &str, comp_seq: &str) -> StackEnergy;

    /// The temperature at which half of the duplexes with the given enthalpy and entropy are
    /// dissociated.
    fn melting_temperature(&self, enthalpy: f64, entropy: f64) -> f64;
}

pub fn convert_temperature_k_to_c(temperature: f64) -> f64 {
    temperature - ZERO_CELSIUS
}

pub fn convert_temperature_c_to_k(temperature: f64) -> f64 {
    temperature + ZERO_CELSIUS
}

/// The solution in which hybridization happens.
#[derive(Copy, Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct SolutionConditions {
    /// Temperature at which free energies are evaluated, in Kelvin.
    pub temperature: f64,
    /// Concentration of monovalent cations, in mol/L.
    pub sodium: f64,
    /// Total concentration of strands, in mol/L.
    pub strand_concentration: f64,
}

impl SolutionConditions {
    /// The standard conditions of the unified nearest-neighbor parameters.
    pub const DEFAULT: SolutionConditions = SolutionConditions {
        temperature: 310.15,
        sodium: 1.0,
        strand_concentration: 1e-6,
    };

    pub fn formated_string(&self) -> String {
        use std::fmt::Write;
        let mut ret = String::new();
        writeln!(
            &mut ret,
            "  Temperature: {:.2} °C",
            convert_temperature_k_to_c(self.temperature)
        )
        .unwrap_or_default();
        writeln!(&mut ret, "  [Na+]: {:.3} M", self.sodium).unwrap_or_default();
        writeln!(
            &mut ret,
            "  Strand concentration: {:.2e} M",
            self.strand_concentration
        )
        .unwrap_or_default();
        ret
    }
}

impl Default for SolutionConditions {
    fn default() -> Self {
        Self::DEFAULT
    }
}

type BpEnergy = AHashMap<Vec<u8>, (f64, f64)>;

const INIT: (f64, f64) = (0.2, -5.7);
const TERMINAL_AT: (f64, f64) = (2.2, 6.9);
const SYMMETRY: (f64, f64) = (0.0, -1.4);

/// Watson-Crick nearest-neighbor stacks (enthalpy, entropy).
///
/// The Thermodynamics of DNA Structural Motifs
/// SantaLucia and Hicks, 2004
static RAW_NN: [(&[u8], (f64, f64)); 10] = [
    (b"AA/TT", (-7.6, -21.3)),
    (b"AT/TA", (-7.2, -20.4)),
    (b"TA/AT", (-7.2, -21.3)),
    (b"CA/GT", (-8.5, -22.7)),
    (b"GT/CA", (-8.4, -22.4)),
    (b"CT/GA", (-7.8, -21.0)),
    (b"GA/CT", (-8.2, -22.2)),
    (b"CG/GC", (-10.6, -27.2)),
    (b"GC/CG", (-9.8, -24.4)),
    (b"GG/CC", (-8.0, -19.9)),
];

fn nn() -> BpEnergy {
    let mut nn = BpEnergy::default();
    for (s, v) in RAW_NN.iter() {
        nn.insert(s.to_vec(), *v);
        // The same stack read from the other strand
        nn.insert(s.iter().copied().rev().collect(), *v);
    }
    nn
}

fn complement(b: u8) -> u8 {
    match b {
        b'A' => b'T',
        b'T' => b'A',
        b'G' => b'C',
        b'C' => b'G',
        b => b,
    }
}

fn is_at_pair(top: u8, bottom: u8) -> bool {
    matches!((top, bottom), (b'A', b'T') | (b'T', b'A'))
}

/// The nearest-neighbor model with the unified parameters of SantaLucia and Hicks.
pub struct NearestNeighbor {
    conditions: SolutionConditions,
    nn: BpEnergy,
}

impl NearestNeighbor {
    pub fn new(conditions: SolutionConditions) -> Self {
        Self {
            conditions,
            nn: nn(),
        }
    }

    pub fn conditions(&self) -> &SolutionConditions {
        &self.conditions
    }

    /// Entropy correction for the concentration of monovalent cations, for a duplex of
    /// `nb_pairs` base pairs.
    fn salt_correction(&self, nb_pairs: usize) -> f64 {
        if nb_pairs < 2 {
            0.
        } else {
            0.368 * (nb_pairs - 1) as f64 * self.conditions.sodium.ln()
        }
    }
}

impl Default for NearestNeighbor {
    fn default() -> Self {
        Self::new(SolutionConditions::DEFAULT)
    }
}

impl EnergyModel for NearestNeighbor {
    fn stack_energy(&self, seq: &str, comp_seq: &str) -> StackEnergy {
        let top: Vec<u8> = seq.bytes().map(|b| b.to_ascii_uppercase()).collect();
        // bottom[i] is the base facing top[i], so bottom is read from 3' to 5'
        let bottom: Vec<u8> = comp_seq
            .bytes()
            .rev()
            .map(|b| b.to_ascii_uppercase())
            .collect();
        if top.len() != bottom.len() {
            log::warn!(
                "Stacking sequences of different lengths {} and {}",
                top.len(),
                bottom.len()
            );
        }
        let nb_pairs = top.len().min(bottom.len());
        if nb_pairs == 0 {
            return (0., 0., 0., 0.);
        }

        let temperature = self.conditions.temperature;
        let free_energy = |(dh, ds): (f64, f64)| dh - temperature * ds / 1000.;

        let mut enthalpy = INIT.0;
        let mut entropy = INIT.1;
        let mut stacks_free_energy = 0.;
        let mut nb_stacks = 0;
        for i in 0..(nb_pairs - 1) {
            let key = [top[i], top[i + 1], b'/', bottom[i], bottom[i + 1]];
            if let Some(stack) = self.nn.get(&key[..]) {
                enthalpy += stack.0;
                entropy += stack.1;
                stacks_free_energy += free_energy(*stack);
                nb_stacks += 1;
            } else {
                log::warn!(
                    "No nearest-neighbor parameters for {}",
                    String::from_utf8_lossy(&key)
                );
            }
        }

        // a single pair is both the first and the last terminal pair
        let mut terminals = vec![0];
        if nb_pairs > 1 {
            terminals.push(nb_pairs - 1);
        }
        for i in terminals {
            if is_at_pair(top[i], bottom[i]) {
                enthalpy += TERMINAL_AT.0;
                entropy += TERMINAL_AT.1;
            }
        }

        let self_complementary = top.len() == bottom.len()
            && (0..nb_pairs).all(|i| top[i] == complement(top[nb_pairs - 1 - i]));
        if self_complementary {
            enthalpy += SYMMETRY.0;
            entropy += SYMMETRY.1;
        }

        entropy += self.salt_correction(nb_pairs);

        let mean_stack_free_energy = if nb_stacks > 0 {
            stacks_free_energy / nb_stacks as f64
        } else {
            0.
        };
        log::debug!(
            "{}/{}: dH = {:.2} kcal/mol, dS = {:.2} cal/(K.mol)",
            seq,
            comp_seq,
            enthalpy,
            entropy
        );
        (
            free_energy((enthalpy, entropy)),
            mean_stack_free_energy,
            enthalpy,
            entropy,
        )
    }

    fn melting_temperature(&self, enthalpy: f64, entropy: f64) -> f64 {
        1000. * enthalpy
            / (entropy + GAS_CONSTANT * (self.conditions.strand_concentration / 4.).ln())
    }
}

/// The model shared by all domains, in the default conditions.
pub fn energy_model() -> &'static NearestNeighbor {
    static ENERGY_MODEL: LazyLock<NearestNeighbor> = LazyLock::new(NearestNeighbor::default);
    &ENERGY_MODEL
}
