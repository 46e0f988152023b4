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
//! Operations on nucleotide sequences.
//!
//! Sequences are strings over `A`, `T`, `G`, `C` and the ambiguous base `N`, in upper or lower
//! case.

/// The Watson-Crick complement of a base. The case of the base is preserved.
///
/// Symbols that are not bases are returned unchanged.
pub fn complement(c: char) -> char {
    match c {
        'A' => 'T',
        'T' => 'A',
        'G' => 'C',
        'C' => 'G',
        'N' => 'N',
        'a' => 't',
        't' => 'a',
        'g' => 'c',
        'c' => 'g',
        'n' => 'n',
        c => c,
    }
}

/// The sequence of the strand that hybridizes with `seq`, read from its 5' end.
pub fn reverse_complement(seq: &str) -> String {
    seq.chars().rev().map(complement).collect()
}

/// True iff `c` is one of the symbols that can appear in a sequence.
pub fn is_valid_symbol(c: char) -> bool {
    matches!(
        c,
        'A' | 'T' | 'G' | 'C' | 'N' | 'a' | 't' | 'g' | 'c' | 'n'
    )
}

/// True iff `seq` contains an ambiguous base.
pub fn is_ambiguous(seq: &str) -> bool {
    seq.contains(|c| c == 'N' || c == 'n')
}
