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

use std::cell::RefCell;
use std::fmt::{Display, Formatter};
use std::rc::Rc;
use std::str::FromStr;

use enum_map::Enum;
use log::trace;
use serde::{Deserialize, Serialize};
use strum_macros::EnumIter;

use crate::error::HousingError;
use crate::models::measurement::Measurement;
use crate::models::resident::Resident;

/// A premises shared between the registry and any other holder
pub type PremisesHandle = Rc<RefCell<Premises>>;

/// The kind of a premises, used for filtering and counting
#[derive(Copy, Clone, Debug, Hash, Eq, PartialEq, Serialize, Deserialize, Enum, EnumIter)]
#[serde(rename_all = "snake_case")]
pub enum PremisesType {
    Apartment,
    PrivateHouse,
    Cottage,
    Hotel,
}

impl PremisesType {
    /// The label used at the start of a rendered premises
    pub fn label(&self) -> &'static str {
        match self {
            PremisesType::Apartment => "Apartment",
            PremisesType::PrivateHouse => "Private House",
            PremisesType::Cottage => "Cottage",
            PremisesType::Hotel => "Hotel",
        }
    }
}

impl Display for PremisesType {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl FromStr for PremisesType {
    type Err = HousingError;

    /// Parses the snake case tag, e.g. `private_house`
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        serde_plain::from_str(s.trim()).map_err(|_| HousingError::UnknownPremisesType {
            value: s.to_string(),
        })
    }
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Apartment {
    entrance_number: i32,
    floor: i32,
    apartment_number: i32,
}

impl Apartment {
    pub fn new(entrance_number: i32, floor: i32, apartment_number: i32) -> Self {
        Apartment {
            entrance_number,
            floor,
            apartment_number,
        }
    }
    pub fn entrance_number(&self) -> i32 {
        self.entrance_number
    }
    pub fn set_entrance_number(&mut self, entrance_number: i32) {
        self.entrance_number = entrance_number;
    }
    pub fn floor(&self) -> i32 {
        self.floor
    }
    pub fn set_floor(&mut self, floor: i32) {
        self.floor = floor;
    }
    pub fn apartment_number(&self) -> i32 {
        self.apartment_number
    }
    pub fn set_apartment_number(&mut self, apartment_number: i32) {
        self.apartment_number = apartment_number;
    }
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct PrivateHouse {
    yard_area: f64,
}

impl PrivateHouse {
    pub fn new(yard_area: f64) -> Self {
        PrivateHouse { yard_area }
    }
    pub fn yard_area(&self) -> f64 {
        self.yard_area
    }
    pub fn set_yard_area(&mut self, yard_area: f64) {
        self.yard_area = yard_area;
    }
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Cottage {
    bathroom_count: i32,
    sleeping_places: i32,
}

impl Cottage {
    pub fn new(bathroom_count: i32, sleeping_places: i32) -> Self {
        Cottage {
            bathroom_count,
            sleeping_places,
        }
    }
    pub fn bathroom_count(&self) -> i32 {
        self.bathroom_count
    }
    pub fn set_bathroom_count(&mut self, bathroom_count: i32) {
        self.bathroom_count = bathroom_count;
    }
    pub fn sleeping_places(&self) -> i32 {
        self.sleeping_places
    }
    pub fn set_sleeping_places(&mut self, sleeping_places: i32) {
        self.sleeping_places = sleeping_places;
    }
}

/// A hotel tracks its guest rooms separately to the room count of the building itself
///
/// The rendered `Rooms:` value of a hotel is the guest room count
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Hotel {
    guest_room_count: i32,
    max_room_price: f64,
    min_room_price: f64,
}

impl Hotel {
    pub fn new(guest_room_count: i32, max_room_price: f64, min_room_price: f64) -> Self {
        Hotel {
            guest_room_count,
            max_room_price,
            min_room_price,
        }
    }
    pub fn guest_room_count(&self) -> i32 {
        self.guest_room_count
    }
    pub fn set_guest_room_count(&mut self, guest_room_count: i32) {
        self.guest_room_count = guest_room_count;
    }
    pub fn max_room_price(&self) -> f64 {
        self.max_room_price
    }
    pub fn set_max_room_price(&mut self, max_room_price: f64) {
        self.max_room_price = max_room_price;
    }
    pub fn min_room_price(&self) -> f64 {
        self.min_room_price
    }
    pub fn set_min_room_price(&mut self, min_room_price: f64) {
        self.min_room_price = min_room_price;
    }
}

/// The fields specific to each kind of premises
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum PremisesDetails {
    Apartment(Apartment),
    PrivateHouse(PrivateHouse),
    Cottage(Cottage),
    Hotel(Hotel),
}

impl PremisesDetails {
    pub fn premises_type(&self) -> PremisesType {
        match self {
            PremisesDetails::Apartment(_) => PremisesType::Apartment,
            PremisesDetails::PrivateHouse(_) => PremisesType::PrivateHouse,
            PremisesDetails::Cottage(_) => PremisesType::Cottage,
            PremisesDetails::Hotel(_) => PremisesType::Hotel,
        }
    }
}

/// A registered unit of property, and the residents that live there
///
/// Setters perform no validation, negative areas and room counts are stored as given
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Premises {
    room_count: i32,
    area: f64,
    /// Used by the registry as the key for removal, but is not required to be unique
    address: String,
    /// In the order they were added
    residents: Vec<Resident>,
    details: PremisesDetails,
}

impl Premises {
    pub fn new<S: Into<String>>(
        room_count: i32,
        area: f64,
        address: S,
        details: PremisesDetails,
    ) -> Premises {
        Premises {
            room_count,
            area,
            address: address.into(),
            residents: Vec::new(),
            details,
        }
    }

    pub fn apartment<S: Into<String>>(
        room_count: i32,
        area: f64,
        address: S,
        entrance_number: i32,
        floor: i32,
        apartment_number: i32,
    ) -> Premises {
        Premises::new(
            room_count,
            area,
            address,
            PremisesDetails::Apartment(Apartment::new(entrance_number, floor, apartment_number)),
        )
    }

    pub fn private_house<S: Into<String>>(
        room_count: i32,
        area: f64,
        address: S,
        yard_area: f64,
    ) -> Premises {
        Premises::new(
            room_count,
            area,
            address,
            PremisesDetails::PrivateHouse(PrivateHouse::new(yard_area)),
        )
    }

    pub fn cottage<S: Into<String>>(
        room_count: i32,
        area: f64,
        address: S,
        bathroom_count: i32,
        sleeping_places: i32,
    ) -> Premises {
        Premises::new(
            room_count,
            area,
            address,
            PremisesDetails::Cottage(Cottage::new(bathroom_count, sleeping_places)),
        )
    }

    pub fn hotel<S: Into<String>>(
        room_count: i32,
        area: f64,
        address: S,
        guest_room_count: i32,
        max_room_price: f64,
        min_room_price: f64,
    ) -> Premises {
        Premises::new(
            room_count,
            area,
            address,
            PremisesDetails::Hotel(Hotel::new(guest_room_count, max_room_price, min_room_price)),
        )
    }

    /// Wraps this premises in a handle that can be given to the registry
    pub fn shared(self) -> PremisesHandle {
        Rc::new(RefCell::new(self))
    }

    pub fn room_count(&self) -> i32 {
        self.room_count
    }
    pub fn set_room_count(&mut self, room_count: i32) {
        self.room_count = room_count;
    }

    pub fn area(&self) -> f64 {
        self.area
    }
    pub fn set_area(&mut self, area: f64) {
        self.area = area;
    }

    pub fn address(&self) -> &str {
        &self.address
    }
    pub fn set_address<S: Into<String>>(&mut self, address: S) {
        self.address = address.into();
    }

    pub fn premises_type(&self) -> PremisesType {
        self.details.premises_type()
    }
    pub fn details(&self) -> &PremisesDetails {
        &self.details
    }
    pub fn details_mut(&mut self) -> &mut PremisesDetails {
        &mut self.details
    }

    pub fn residents(&self) -> &[Resident] {
        &self.residents
    }
    pub fn add_resident(&mut self, resident: Resident) {
        trace!("Adding {} to {}", resident.name(), self.address);
        self.residents.push(resident);
    }
    /// Removes every resident with exactly this name, does nothing if there are none
    pub fn remove_resident(&mut self, name: &str) {
        self.residents.retain(|resident| resident.name() != name);
    }
    pub fn is_occupied(&self) -> bool {
        !self.residents.is_empty()
    }

    /// Writes the rendered premises to the given sink
    pub fn display_info(&self, sink: &mut dyn std::io::Write) -> std::io::Result<()> {
        write!(sink, "{}", self)
    }

    /// The room count shown when rendering
    fn displayed_room_count(&self) -> i32 {
        match &self.details {
            PremisesDetails::Hotel(hotel) => hotel.guest_room_count,
            _ => self.room_count,
        }
    }
}

impl Display for Premises {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} [Address: {}, Area: {}, Rooms: {}",
            self.premises_type(),
            self.address,
            Measurement(self.area),
            self.displayed_room_count()
        )?;
        match &self.details {
            PremisesDetails::Apartment(apartment) => write!(
                f,
                ", Entrance: {}, Floor: {}, Apartment: {}",
                apartment.entrance_number, apartment.floor, apartment.apartment_number
            )?,
            PremisesDetails::PrivateHouse(house) => {
                write!(f, ", Yard Area: {}", Measurement(house.yard_area))?
            }
            PremisesDetails::Cottage(cottage) => write!(
                f,
                ", Bathrooms: {}, Sleeping Places: {}",
                cottage.bathroom_count, cottage.sleeping_places
            )?,
            PremisesDetails::Hotel(hotel) => write!(
                f,
                ", Max Price: {}, Min Price: {}",
                Measurement(hotel.max_room_price),
                Measurement(hotel.min_room_price)
            )?,
        }
        writeln!(f, "]")?;
        writeln!(f, "Residents:")?;
        for resident in &self.residents {
            writeln!(f, "{}", resident)?;
        }
        Ok(())
    }
}
