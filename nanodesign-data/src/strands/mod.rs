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

use super::utils::{is_false, unpack_color, Color};
use super::Nucl;
use std::borrow::Cow;
use std::collections::BTreeMap;
mod formating;

/// A collection of strands, that maps strand identifier to strands.
#[derive(Serialize, Deserialize, Clone, Default)]
pub struct Strands(pub(super) BTreeMap<usize, Strand>);

impl Strands {
    // Collection methods
    //============================================================================================
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn get(&self, id: &usize) -> Option<&Strand> {
        self.0.get(id)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&usize, &Strand)> {
        self.0.iter()
    }

    /// Add `strand` under the smallest identifier greater than all existing ones and return that
    /// identifier.
    pub fn push(&mut self, strand: Strand) -> usize {
        let id = self.0.keys().max().map(|m| m + 1).unwrap_or(0);
        self.0.insert(id, strand);
        id
    }
    //============================================================================================
}

/// A DNA strand. Strands are represented as sequences of helix intervals.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Strand {
    /// The (ordered) vector of intervals, where each interval is a
    /// directed interval of a helix.
    pub domains: Vec<HelixInterval>,
    /// The sequence of this strand, if any. If the sequence is longer
    /// than specified by the domains, a prefix is assumed. Can be
    /// skipped in the serialisation.
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub sequence: Option<Cow<'static, str>>,
    /// Is this sequence cyclic? Can be skipped (and defaults to
    /// `false`) in the serialization.
    #[serde(skip_serializing_if = "is_false", default)]
    pub cyclic: bool,
    /// Colour of this strand, packed as `0xRRGGBB`.
    #[serde(default)]
    pub color: u32,
    /// A name of the strand, used in reports. If the name is `None`, the strand is refered to by
    /// its identifier.
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub name: Option<Cow<'static, str>>,
}

impl Strand {
    /// The number of nucleotides of the strand.
    pub fn length(&self) -> usize {
        self.domains.iter().map(|d| d.length()).sum()
    }

    /// The color of the strand as RGB channels.
    pub fn rgb_color(&self) -> Color {
        unpack_color(self.color)
    }
}

#[derive(Default, Clone, Serialize, Deserialize)]
pub struct HelixInterval {
    /// Index of the helix in the array of helices. Indices start at
    /// 0.
    pub helix: usize,
    /// Position of the leftmost base of this interval along the helix
    /// (this might be the first or last base of the interval, depending
    /// on the `orientation` parameter below).
    pub start: isize,
    /// Position of the first base after the forwardmost base of the
    /// interval, along the helix. Intervals must always be such that
    /// `interval.start < interval.end`.
    pub end: isize,
    /// If true, the "5' to 3'" direction of this interval runs in the
    /// same direction as the helix, i.e. "to the forward" along the
    /// axis of the helix. Else, the 5' to 3' runs to the left along
    /// the axis.
    pub forward: bool,
    /// In addition to the strand-level sequence, individual intervals
    /// may have sequences too. They take precedence over the strand sequence.
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub sequence: Option<Cow<'static, str>>,
}

impl HelixInterval {
    pub fn length(&self) -> usize {
        (self.end - self.start).max(0) as usize
    }

    /// The nucleotides of the interval, from 5' to 3'.
    pub fn iter(&self) -> impl Iterator<Item = Nucl> + '_ {
        (0..self.length() as isize).map(move |i| {
            let position = if self.forward {
                self.start + i
            } else {
                self.end - 1 - i
            };
            Nucl {
                helix: self.helix,
                position,
                forward: self.forward,
            }
        })
    }
}
