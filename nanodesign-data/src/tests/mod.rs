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
use ultraviolet::{Rotor3, Vec3};

fn interval(helix: usize, start: isize, end: isize, forward: bool) -> HelixInterval {
    HelixInterval {
        helix,
        start,
        end,
        forward,
        sequence: None,
    }
}

fn strand(domains: Vec<HelixInterval>, sequence: Option<&'static str>) -> Strand {
    Strand {
        domains,
        sequence: sequence.map(|s| s.into()),
        ..Default::default()
    }
}

fn design_with_helices(nb_helices: usize) -> Design {
    let mut design = Design::new();
    for h_id in 0..nb_helices {
        design.helices.insert(
            h_id,
            Helix::new(
                Vec3::new(0., 3. * h_id as f32, 0.),
                Rotor3::identity(),
            ),
        );
    }
    design
}

fn assert_good_domains<S: std::ops::Deref<Target = str>>(domains: &[Domain], objective: S) {
    use regex::Regex;
    let re = Regex::new(r#"\[[^\]]*\]"#).unwrap();
    let formated: String = domains.iter().map(|d| format!("{} ", d)).collect();
    let left: Vec<_> = re.find_iter(&formated).map(|m| m.as_str()).collect();
    let right: Vec<_> = re.find_iter(&objective).map(|m| m.as_str()).collect();
    assert_eq!(left, right);
}

fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

fn assert_close(a: f64, b: f64) {
    assert!((a - b).abs() < 1e-9, "{} != {}", a, b);
}

#[test]
fn complementary_strands_form_one_duplex() {
    init_logger();
    let mut design = design_with_helices(1);
    design
        .strands
        .push(strand(vec![interval(0, 0, 8, true)], Some("ATGCATGC")));
    design
        .strands
        .push(strand(vec![interval(0, 0, 8, false)], None));
    let structure = DnaStructure::new(&design).unwrap();
    let domains = structure.domains();

    assert_eq!(domains.len(), 2);
    assert_good_domains(&domains, "[H0: 0 -> 7] [H0: 0 <- 7]");
    assert_eq!(domains[0].sequence(), "ATGCATGC");
    assert_eq!(domains[1].sequence(), "GCATGCAT");
    assert_eq!(domains[0].connected_strand, Some(1));
    assert_eq!(domains[0].connected_domain, Some(1));
    assert_eq!(domains[1].connected_strand, Some(0));
    assert_eq!(domains[1].connected_domain, Some(0));

    let tm = domains[0].melting_temperature();
    assert!(tm > -500.0 && tm.is_finite());
    assert_close(tm, domains[1].melting_temperature());
}

#[test]
fn single_stranded_overhang_is_a_domain() {
    let mut design = design_with_helices(1);
    design
        .strands
        .push(strand(vec![interval(0, 0, 12, true)], None));
    design
        .strands
        .push(strand(vec![interval(0, 0, 8, false)], Some("AAAACCCC")));
    let structure = DnaStructure::new(&design).unwrap();
    let domains = structure.domains();

    assert_good_domains(&domains, "[H0: 0 -> 7] [H0: 8 -> 11] [H0: 0 <- 7]");
    assert_eq!(domains[0].sequence(), "GGGGTTTT");
    assert_eq!(domains[1].sequence(), "NNNN");
    assert_eq!(domains[0].connected_domain, Some(2));
    assert_eq!(domains[2].connected_domain, Some(0));
    assert!(!domains[1].is_paired());
    assert_eq!(domains[1].melting_temperature(), -500.0);
    assert!(domains[0].melting_temperature() > -500.0);
}

#[test]
fn paired_bases_without_sequence_are_ambiguous() {
    let mut design = design_with_helices(1);
    design
        .strands
        .push(strand(vec![interval(0, 0, 8, true)], None));
    design
        .strands
        .push(strand(vec![interval(0, 0, 8, false)], None));
    let structure = DnaStructure::new(&design).unwrap();
    let domains = structure.domains();
    assert!(domains[0].is_paired());
    assert_eq!(domains[0].sequence(), "NNNNNNNN");
    assert_eq!(domains[0].melting_temperature(), -501.0);
    assert_eq!(
        domains[0].hybridization(structure.energy_model()),
        MeltingTemperature::AmbiguousSequence
    );
}

#[test]
fn crossovers_split_domains() {
    let mut design = design_with_helices(2);
    design.strands.push(strand(
        vec![interval(0, 0, 8, true), interval(1, 0, 8, false)],
        Some("AAAAAAAACCCCCCCC"),
    ));
    design
        .strands
        .push(strand(vec![interval(0, 0, 8, false)], None));
    design
        .strands
        .push(strand(vec![interval(1, 0, 8, true)], None));
    let structure = DnaStructure::new(&design).unwrap();
    let domains = structure.domains();

    assert_good_domains(
        &domains,
        "[H0: 0 -> 7] [H1: 0 <- 7] [H0: 0 <- 7] [H1: 0 -> 7]",
    );
    assert_eq!(domains[0].connected_domain, Some(2));
    assert_eq!(domains[1].connected_domain, Some(3));
    assert_eq!(domains[1].connected_strand, Some(2));
    assert_eq!(domains[2].sequence(), "TTTTTTTT");
    assert_eq!(domains[3].sequence(), "GGGGGGGG");
}

#[test]
fn nick_on_the_partner_splits_domains() {
    let mut design = design_with_helices(1);
    design
        .strands
        .push(strand(vec![interval(0, 0, 16, true)], Some("ATGCATGCATGCATGC")));
    design
        .strands
        .push(strand(vec![interval(0, 8, 16, false)], None));
    design
        .strands
        .push(strand(vec![interval(0, 0, 8, false)], None));
    let structure = DnaStructure::new(&design).unwrap();
    let domains = structure.domains();

    assert_good_domains(
        &domains,
        "[H0: 0 -> 7] [H0: 8 -> 15] [H0: 8 <- 15] [H0: 0 <- 7]",
    );
    assert_eq!(domains[0].connected_domain, Some(3));
    assert_eq!(domains[0].connected_strand, Some(2));
    assert_eq!(domains[1].connected_domain, Some(2));
    assert_eq!(domains[2].connected_domain, Some(1));
    assert_eq!(domains[3].connected_domain, Some(0));
}

#[test]
fn crossover_of_the_partner_splits_domains() {
    let mut design = design_with_helices(2);
    design
        .strands
        .push(strand(vec![interval(0, 0, 16, true)], Some("ATGCATGCATGCATGC")));
    design.strands.push(strand(
        vec![
            interval(0, 8, 16, false),
            interval(1, 0, 8, true),
            interval(0, 0, 8, false),
        ],
        None,
    ));
    let structure = DnaStructure::new(&design).unwrap();
    let domains = structure.domains();

    assert_good_domains(
        &domains,
        "[H0: 0 -> 7] [H0: 8 -> 15] [H0: 8 <- 15] [H1: 0 -> 7] [H0: 0 <- 7]",
    );
    assert_eq!(domains[0].connected_strand, Some(1));
    assert_eq!(domains[0].connected_domain, Some(4));
    assert_eq!(domains[1].connected_strand, Some(1));
    assert_eq!(domains[1].connected_domain, Some(2));
    assert_eq!(domains[2].connected_domain, Some(1));
    assert_eq!(domains[4].connected_domain, Some(0));
    assert!(!domains[3].is_paired());
    assert_eq!(domains[3].melting_temperature(), -500.0);
    assert_eq!(domains[4].sequence(), "GCATGCAT");
}

#[test]
fn cyclic_partner_continues_across_its_ends() {
    for cyclic in [true, false] {
        let mut design = design_with_helices(1);
        design
            .strands
            .push(strand(vec![interval(0, 0, 8, true)], Some("ATGCATGC")));
        let mut partner = strand(vec![interval(0, 0, 4, false), interval(0, 4, 8, false)], None);
        partner.cyclic = cyclic;
        design.strands.push(partner);
        let structure = DnaStructure::new(&design).unwrap();
        let domains = structure.domains();

        if cyclic {
            assert_good_domains(&domains, "[H0: 0 -> 7] [H0: 0 <- 3] [H0: 4 <- 7]");
            assert_eq!(domains[0].connected_domain, Some(1));
            assert_eq!(domains[1].connected_domain, Some(0));
            assert_eq!(domains[2].connected_domain, Some(0));
        } else {
            assert_good_domains(
                &domains,
                "[H0: 0 -> 3] [H0: 4 -> 7] [H0: 0 <- 3] [H0: 4 <- 7]",
            );
            assert_eq!(domains[0].connected_domain, Some(2));
            assert_eq!(domains[1].connected_domain, Some(3));
        }
    }
}

#[test]
fn interval_sequence_takes_precedence() {
    let mut design = design_with_helices(1);
    let mut first = interval(0, 0, 4, true);
    first.sequence = Some("GGGG".into());
    design.strands.push(strand(
        vec![first, interval(0, 4, 8, true)],
        Some("AAAATTTT"),
    ));
    let structure = DnaStructure::new(&design).unwrap();
    let bases: String = structure.strand_bases(0).iter().map(|b| b.seq).collect();
    assert_eq!(bases, "GGGGTTTT");
    // an unpaired strand is a single domain even if it is made of several intervals
    let domains = structure.domains();
    assert_eq!(domains.len(), 1);
    assert_eq!(domains[0].sequence(), "GGGGTTTT");
}

#[test]
fn short_sequences_leave_unknown_bases() {
    let mut design = design_with_helices(1);
    design
        .strands
        .push(strand(vec![interval(0, 0, 6, true)], Some("ATG")));
    let structure = DnaStructure::new(&design).unwrap();
    let bases: String = structure.strand_bases(0).iter().map(|b| b.seq).collect();
    assert_eq!(bases, "ATGNNN");
}

#[test]
fn end_points_from_structure() {
    let mut design = design_with_helices(2);
    design.strands.push(strand(
        vec![interval(0, 2, 10, true), interval(1, 2, 10, false)],
        None,
    ));
    let structure = DnaStructure::new(&design).unwrap();
    let domains = structure.domains();
    let h1 = structure.helices().get(&1).unwrap();
    let (p1, p2) = domains[1].get_end_points();
    assert_eq!(p1, h1.helix_axis_coords(9));
    assert_eq!(p2, h1.helix_axis_coords(2));
    assert!((p1 - p2).mag() > 0.);
}

#[test]
fn domain_color_falls_back_to_strand() {
    let mut design = design_with_helices(1);
    let mut s = strand(vec![interval(0, 0, 4, true)], None);
    s.color = 0x0000FF;
    design.strands.push(s);
    let structure = DnaStructure::new(&design).unwrap();
    let mut domains = structure.domains();
    assert_eq!(domains[0].color(), [0., 0., 1.]);
    domains[0].set_color([0.2, 0.2, 0.2]);
    assert_eq!(domains[0].color(), [0.2, 0.2, 0.2]);
    assert_eq!(structure.strands().get(&0).unwrap().rgb_color(), [0., 0., 1.]);
}

#[test]
fn pairing_of_bases() {
    let mut design = design_with_helices(1);
    design
        .strands
        .push(strand(vec![interval(0, 0, 4, true)], Some("ATGC")));
    design
        .strands
        .push(strand(vec![interval(0, 2, 6, false)], None));
    let structure = DnaStructure::new(&design).unwrap();
    let base = structure.base_at(&Nucl::new(0, 3, true)).unwrap();
    let paired = structure.paired_base(base).unwrap();
    assert_eq!(paired.nucl, Nucl::new(0, 3, false));
    assert_eq!(paired.seq, 'G');
    let lonely = structure.base_at(&Nucl::new(0, 0, true)).unwrap();
    assert!(structure.paired_base(lonely).is_none());
}

#[test]
fn missing_helix_is_an_error() {
    let mut design = design_with_helices(1);
    design
        .strands
        .push(strand(vec![interval(3, 0, 4, true)], None));
    match DnaStructure::new(&design) {
        Err(DesignError::MissingHelix { strand: 0, helix: 3 }) => (),
        _ => panic!("expected a missing helix"),
    }
}

#[test]
fn duplicate_nucl_is_an_error() {
    let mut design = design_with_helices(1);
    design
        .strands
        .push(strand(vec![interval(0, 0, 4, true)], None));
    design
        .strands
        .push(strand(vec![interval(0, 3, 6, true)], None));
    match DnaStructure::new(&design) {
        Err(DesignError::DuplicateNucl(nucl)) => assert_eq!(nucl, Nucl::new(0, 3, true)),
        _ => panic!("expected a duplicate nucleotide"),
    }
}

#[test]
fn invalid_symbol_is_an_error() {
    let mut design = design_with_helices(1);
    design
        .strands
        .push(strand(vec![interval(0, 0, 4, true)], Some("ATUC")));
    match DnaStructure::new(&design) {
        Err(DesignError::InvalidSymbol { symbol: 'U', .. }) => (),
        _ => panic!("expected an invalid symbol"),
    }
}

#[test]
fn read_design_from_json() {
    init_logger();
    let input = r##"{
  "helices": {"0": {}, "1": {"initial_nt_index": 2}},
  "strands": {
    "0": {
      "domains": [
        {"helix": 0, "start": 0, "end": 10, "forward": true},
        {"helix": 1, "start": 0, "end": 10, "forward": false}
      ],
      "sequence": "GATTACAGATGCATGCATGC",
      "color": 16711680
    },
    "1": {"domains": [{"helix": 0, "start": 0, "end": 10, "forward": false}]},
    "2": {"domains": [{"helix": 1, "start": 0, "end": 10, "forward": true}], "name": "staple"}
  },
  "energy_conditions": {"temperature": 300.0, "sodium": 0.5, "strand_concentration": 1e-7}
}"##;
    let design = Design::from_json_str(input).expect("Failed to parse design");
    assert_eq!(design.helices.len(), 2);
    assert_eq!(design.strands.len(), 3);
    assert_eq!(design.energy_conditions().sodium, 0.5);

    let structure = DnaStructure::new(&design).unwrap();
    assert_eq!(structure.conditions().temperature, 300.0);
    let domains = structure.domains();
    assert_eq!(domains.len(), 4);
    assert_eq!(domains[0].sequence(), "GATTACAGAT");
    assert_eq!(domains[2].sequence(), "ATCTGTAATC");
    assert_eq!(domains[0].color(), [1., 0., 0.]);
    assert_eq!(
        design.strands.get(&2).unwrap().display_name(2),
        "staple"
    );
    for d in domains.iter() {
        assert!(d.is_paired());
        let tm = d.hybridization(structure.energy_model());
        assert!(tm.celsius().is_some(), "{:?}", d);
    }
}

#[test]
fn bad_json_is_an_error() {
    match Design::from_json_str("{\"helices\": 3}") {
        Err(DesignError::Json(_)) => (),
        _ => panic!("expected a json error"),
    }
}
