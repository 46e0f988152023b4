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

use super::{utils::*, Parameters};
use std::collections::BTreeMap;
use ultraviolet::{Rotor3, Vec3};

/// A structure maping helices identifier to `Helix` objects
#[derive(Default, Serialize, Deserialize, Clone)]
pub struct Helices(pub(super) BTreeMap<usize, Helix>);

impl Helices {
    // Collection methods
    // ===========================================================================
    pub fn get(&self, id: &usize) -> Option<&Helix> {
        self.0.get(id)
    }

    pub fn insert(&mut self, id: usize, helix: Helix) -> Option<Helix> {
        self.0.insert(id, helix)
    }

    pub fn values_mut(&mut self) -> impl Iterator<Item = &mut Helix> {
        self.0.values_mut()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
    // ===========================================================================
}

/// A DNA helix. All bases of all strands must be on a helix.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Helix {
    /// Position of the origin of the helix axis.
    #[serde(default = "Vec3::zero")]
    pub position: Vec3,

    /// Orientation of the helix
    #[serde(default = "Rotor3::identity")]
    pub orientation: Rotor3,

    /// Index of the nucleotide at the origin of the helix.
    #[serde(default, skip_serializing_if = "isize_is_zero")]
    pub initial_nt_index: isize,

    /// The geometric parameters used to read coordinates on this helix. They are given by the
    /// structure that owns the helix.
    #[serde(skip, default)]
    parameters: Parameters,
}

impl Helix {
    pub fn new(origin: Vec3, orientation: Rotor3) -> Self {
        Self {
            position: origin,
            orientation,
            initial_nt_index: 0,
            parameters: Parameters::DEFAULT,
        }
    }

    pub fn set_parameters(&mut self, parameters: Parameters) {
        self.parameters = parameters
    }

    /// 3D position of the point of the axis facing the nucleotides at position `n`.
    pub fn axis_position(&self, p: &Parameters, n: isize) -> Vec3 {
        let n = n + self.initial_nt_index;
        let mut ret = Vec3::new(n as f32 * p.z_step, 0., 0.);

        ret = self.rotate_point(ret);
        ret += self.position;
        ret
    }

    /// The coordinates of the helix axis at position `n`, read with the parameters of the
    /// structure owning the helix.
    pub fn helix_axis_coords(&self, n: isize) -> Vec3 {
        self.axis_position(&self.parameters, n)
    }

    pub fn rotate_point(&self, ret: Vec3) -> Vec3 {
        ret.rotated_by(self.orientation)
    }
}
