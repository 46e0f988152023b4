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

/// An RGB color, each channel in [0, 1].
pub type Color = [f32; 3];

/// Convert a color packed as `0xRRGGBB` into its three channels.
pub fn unpack_color(color: u32) -> Color {
    let channel = |shift: u32| ((color >> shift) & 0xFF) as f32 / 255.;
    [channel(16), channel(8), channel(0)]
}

// Serialization utils
//===========================================================================
pub(super) fn isize_is_zero(x: &isize) -> bool {
    *x == 0
}

pub(super) fn is_false(x: &bool) -> bool {
    !*x
}
//===========================================================================
