/*
 * Housing Registry
 * Copyright (c)  2022. Sam Ralph
 *
 * This file is part of Housing Registry.
 *
 * Housing Registry is free software: you can redistribute it and/or modify
 * it under the terms of the GNU General Public License as published by
 * the Free Software Foundation, version 3 of the License.
 *
 * Housing Registry is distributed in the hope that it will be useful,
 * but WITHOUT ANY WARRANTY; without even the implied warranty of
 * MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
 * GNU General Public License for more details.
 *
 * You should have received a copy of the GNU General Public License
 * along with Housing Registry.  If not, see <https://www.gnu.org/licenses/>.
 *
 */

extern crate log;

pub mod config;
pub mod error;
pub mod manager;
pub mod models;

pub use error::{HousingError, HousingResult};
pub use manager::HousingManager;
pub use models::{Premises, PremisesDetails, PremisesHandle, PremisesType, Resident};

/// Builds the registry used by the demo
///
/// Returns the registry along with the handles of everything that was registered,
/// so the caller can keep modifying them after registration
pub fn sample_registry() -> (HousingManager, Vec<PremisesHandle>) {
    let mut apartment = Premises::apartment(3, 80.5, "123 Main St", 1, 2, 101);
    apartment.add_resident(Resident::new("John Doe", 30, 'M'));
    apartment.add_resident(Resident::new("Jane Smith", 28, 'F'));

    let mut house = Premises::private_house(5, 120.0, "456 Elm St", 50.0);
    house.add_resident(Resident::new("Alice Brown", 45, 'F'));

    let mut cottage = Premises::cottage(4, 65.5, "789 Pine Ln", 2, 6);
    cottage.add_resident(Resident::new("Carl Green", 52, 'M'));

    let hotel = Premises::hotel(12, 2500.0, "1 Beach Ave", 150, 320.0, 85.5);

    let handles: Vec<PremisesHandle> = vec![
        apartment.shared(),
        house.shared(),
        cottage.shared(),
        hotel.shared(),
    ];
    let mut manager = HousingManager::new();
    for premises in &handles {
        manager.add_premises(premises.clone());
    }
    (manager, handles)
}
