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

use std::fmt::{Display, Formatter};

use serde::Serialize;

/// This is used to represent a single person living at a premises
///
/// Residents have no identity beyond their name, so several residents may share one
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Resident {
    name: String,
    age: u32,
    /// Single character code, such as 'M' or 'F'
    gender: char,
}

impl Resident {
    pub fn new<S: Into<String>>(name: S, age: u32, gender: char) -> Resident {
        Resident {
            name: name.into(),
            age,
            gender,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }
    pub fn set_name<S: Into<String>>(&mut self, name: S) {
        self.name = name.into();
    }

    pub fn age(&self) -> u32 {
        self.age
    }
    pub fn set_age(&mut self, age: u32) {
        self.age = age;
    }

    pub fn gender(&self) -> char {
        self.gender
    }
    pub fn set_gender(&mut self, gender: char) {
        self.gender = gender;
    }
}

impl Display for Resident {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Name: {}, Age: {}, Gender: {}",
            self.name, self.age, self.gender
        )
    }
}

#[cfg(test)]
mod tests {
    use crate::models::resident::Resident;

    #[test]
    fn setters_round_trip() {
        let mut resident = Resident::new("John Doe", 30, 'M');
        resident.set_name("Jane Smith");
        resident.set_age(28);
        resident.set_gender('F');
        assert_eq!(resident.name(), "Jane Smith");
        assert_eq!(resident.age(), 28);
        assert_eq!(resident.gender(), 'F');
    }

    #[test]
    fn setters_accept_anything() {
        let mut resident = Resident::new("Somebody", 1, 'X');
        resident.set_name("");
        resident.set_age(0);
        assert_eq!(resident.name(), "");
        assert_eq!(resident.age(), 0);
        assert_eq!(resident.to_string(), "Name: , Age: 0, Gender: X");
    }

    #[test]
    fn renders_fixed_field_order() {
        let resident = Resident::new("Alice Brown", 45, 'F');
        assert_eq!(resident.to_string(), "Name: Alice Brown, Age: 45, Gender: F");
    }
}
