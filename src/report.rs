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

use nanodesign_data::{DnaStructure, Domain};
use std::fmt::Write;

const HEADER: &str = "domain\tstrand\tinterval\tlength\tsequence\tpaired with\tmelting temperature";

fn domain_line(structure: &DnaStructure, domain: &Domain) -> String {
    let strand = domain
        .strand_id()
        .and_then(|id| structure.strands().get(&id).map(|s| s.display_name(id)))
        .unwrap_or_default();
    let partner = domain
        .connected_domain
        .map(|d| d.to_string())
        .unwrap_or_else(|| String::from("-"));
    format!(
        "{}\t{}\t{}\t{}\t{}\t{}\t{}",
        domain.id,
        strand,
        domain,
        domain.len(),
        domain.sequence(),
        partner,
        domain.hybridization(structure.energy_model())
    )
}

/// One line per domain of `structure`, preceded by a header.
pub fn domain_report(structure: &DnaStructure) -> String {
    let mut ret = String::new();
    writeln!(&mut ret, "{}", HEADER).unwrap_or_default();
    for domain in structure.domains().iter() {
        writeln!(&mut ret, "{}", domain_line(structure, domain)).unwrap_or_default();
    }
    ret
}
