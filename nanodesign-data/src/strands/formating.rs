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

use super::*;

use std::borrow::Cow;
use std::fmt;

impl Strand {
    /// The name under which the strand appears in reports.
    pub fn display_name(&self, id: usize) -> Cow<'static, str> {
        self.name
            .clone()
            .unwrap_or_else(|| Cow::Owned(format!("Strand {}", id)))
    }
}

impl fmt::Display for HelixInterval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.forward {
            write!(f, "[H{}: {} -> {}]", self.helix, self.start, self.end - 1)
        } else {
            write!(f, "[H{}: {} <- {}]", self.helix, self.start, self.end - 1)
        }
    }
}

impl fmt::Debug for HelixInterval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self)
    }
}
