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
//! Print the domains of a design together with their melting temperatures.
//!
//! Usage: `nanodesign <design.json>`

use std::env;
use std::path::PathBuf;

use nanodesign_data::{Design, DesignError, DnaStructure};

mod report;

fn main() {
    pretty_env_logger::init();

    let args: Vec<String> = env::args().collect();
    let path = if let Some(path) = args.get(1) {
        PathBuf::from(path)
    } else {
        eprintln!("Usage: {} <design.json>", program_name(&args));
        std::process::exit(2);
    };

    if let Err(e) = run(&path) {
        log::error!("{}", e);
        std::process::exit(1);
    }
}

fn program_name(args: &[String]) -> &str {
    args.first().map(String::as_str).unwrap_or("nanodesign")
}

fn run(path: &PathBuf) -> Result<(), DesignError> {
    let design = Design::from_path(path)?;
    let structure = DnaStructure::new(&design)?;
    log::info!("Geometry:\n{}", structure.parameters().formated_string());
    log::info!("Conditions:\n{}", structure.conditions().formated_string());
    print!("{}", report::domain_report(&structure));
    Ok(())
}
