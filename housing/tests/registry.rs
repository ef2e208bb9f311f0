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

use std::rc::Rc;

use housing::{HousingManager, Premises, PremisesType, Resident};

const APARTMENT_BLOCK: &str = "Apartment [Address: 123 Main St, Area: 80.5, Rooms: 3, Entrance: 1, Floor: 2, Apartment: 101]
Residents:
Name: John Doe, Age: 30, Gender: M
Name: Jane Smith, Age: 28, Gender: F
";

const HOUSE_BLOCK: &str = "Private House [Address: 456 Elm St, Area: 120, Rooms: 5, Yard Area: 50]
Residents:
Name: Alice Brown, Age: 45, Gender: F
";

fn build_registry() -> HousingManager {
    let apartment = Premises::apartment(3, 80.5, "123 Main St", 1, 2, 101).shared();
    apartment
        .borrow_mut()
        .add_resident(Resident::new("John Doe", 30, 'M'));
    apartment
        .borrow_mut()
        .add_resident(Resident::new("Jane Smith", 28, 'F'));

    let house = Premises::private_house(5, 120.0, "456 Elm St", 50.0).shared();
    house
        .borrow_mut()
        .add_resident(Resident::new("Alice Brown", 45, 'F'));

    let mut manager = HousingManager::new();
    manager.add_premises(Rc::clone(&apartment));
    manager.add_premises(house);
    manager
}

fn render_all(manager: &HousingManager) -> String {
    let mut output = Vec::new();
    manager.display_all(&mut output).unwrap();
    String::from_utf8(output).unwrap()
}

#[test]
fn display_then_remove() {
    let mut manager = build_registry();
    assert_eq!(
        render_all(&manager),
        format!("{}\n{}\n", APARTMENT_BLOCK, HOUSE_BLOCK)
    );

    manager.remove_premises("123 Main St");
    assert_eq!(render_all(&manager), format!("{}\n", HOUSE_BLOCK));
}

#[test]
fn no_hotels_renders_nothing() {
    let manager = build_registry();
    let mut output = Vec::new();
    manager
        .display_by_type(PremisesType::Hotel, &mut output)
        .unwrap();
    assert!(output.is_empty());
}

#[test]
fn filter_by_type() {
    let manager = build_registry();
    let mut output = Vec::new();
    manager
        .display_by_type(PremisesType::PrivateHouse, &mut output)
        .unwrap();
    assert_eq!(String::from_utf8(output).unwrap(), format!("{}\n", HOUSE_BLOCK));
}

#[test]
fn sample_registry_holds_every_type() {
    let (manager, handles) = housing::sample_registry();
    assert_eq!(manager.len(), handles.len());
    for (_, count) in manager.count_by_type() {
        assert_eq!(count, 1);
    }
    for handle in &handles {
        assert_eq!(Rc::strong_count(handle), 2);
    }
}
