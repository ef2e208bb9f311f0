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

use std::io::Write;

use enum_map::EnumMap;
use log::{debug, trace};

use crate::error::{HousingError, HousingResult};
use crate::models::premises::{PremisesHandle, PremisesType};

/// The registry of all premises
///
/// Premises are held by shared handle, so a premises removed from the registry lives on
/// for as long as the caller keeps its own handle.
/// Addresses are not checked for uniqueness when premises are added.
#[derive(Debug, Default)]
pub struct HousingManager {
    /// In the order they were added
    premises: Vec<PremisesHandle>,
}

impl HousingManager {
    pub fn new() -> HousingManager {
        HousingManager::default()
    }

    pub fn add_premises(&mut self, premises: PremisesHandle) {
        match premises.try_borrow() {
            Ok(registered) => debug!(
                "Registering {} at {}",
                registered.premises_type(),
                registered.address()
            ),
            Err(_) => debug!("Registering premises that is currently being modified"),
        }
        self.premises.push(premises);
    }

    /// Removes every premises with exactly this address, does nothing if there are none
    ///
    /// # Panics
    /// If any registered premises is mutably borrowed through another handle
    pub fn remove_premises(&mut self, address: &str) {
        let previous_count = self.premises.len();
        self.premises
            .retain(|premises| premises.borrow().address() != address);
        let removed = previous_count - self.premises.len();
        if removed == 0 {
            debug!("No premises registered at '{}', nothing removed", address);
        } else {
            debug!("Removed {} premises at '{}'", removed, address);
        }
    }

    pub fn len(&self) -> usize {
        self.premises.len()
    }

    pub fn is_empty(&self) -> bool {
        self.premises.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &PremisesHandle> {
        self.premises.iter()
    }

    /// Returns every premises registered at exactly this address
    ///
    /// # Panics
    /// If any registered premises is mutably borrowed through another handle
    pub fn find_by_address(&self, address: &str) -> Vec<PremisesHandle> {
        self.premises
            .iter()
            .filter(|premises| premises.borrow().address() == address)
            .cloned()
            .collect()
    }

    /// # Panics
    /// If any registered premises is mutably borrowed through another handle
    pub fn count_by_type(&self) -> EnumMap<PremisesType, usize> {
        let mut counts = EnumMap::default();
        for premises in &self.premises {
            counts[premises.borrow().premises_type()] += 1;
        }
        counts
    }

    /// # Panics
    /// If any registered premises is mutably borrowed through another handle
    pub fn total_residents(&self) -> usize {
        self.premises
            .iter()
            .map(|premises| premises.borrow().residents().len())
            .sum()
    }

    /// Renders every premises in order, each followed by a blank line
    ///
    /// Fails with `HousingError::PremisesInUse` if a premises is mutably borrowed elsewhere
    pub fn display_all(&self, sink: &mut dyn Write) -> HousingResult<()> {
        self.display_matching(sink, |_| true)
    }

    /// Renders only the premises of the given type, each followed by a blank line
    ///
    /// Writes nothing if no premises of that type are registered
    pub fn display_by_type(
        &self,
        premises_type: PremisesType,
        sink: &mut dyn Write,
    ) -> HousingResult<()> {
        self.display_matching(sink, |candidate| candidate == premises_type)
    }

    fn display_matching<F: Fn(PremisesType) -> bool>(
        &self,
        sink: &mut dyn Write,
        filter: F,
    ) -> HousingResult<()> {
        for (position, premises) in self.premises.iter().enumerate() {
            let premises = premises
                .try_borrow()
                .map_err(|_| HousingError::PremisesInUse { position })?;
            if !filter(premises.premises_type()) {
                continue;
            }
            trace!("Rendering {} at {}", premises.premises_type(), premises.address());
            premises
                .display_info(sink)
                .and_then(|_| writeln!(sink))
                .map_err(|e| {
                    HousingError::output(format!("Rendering premises at {}", premises.address()), e)
                })?;
        }
        Ok(())
    }

    /// Writes the number of premises of each type, and the total number of residents
    pub fn display_summary(&self, sink: &mut dyn Write) -> HousingResult<()> {
        for (premises_type, count) in self.count_by_type() {
            writeln!(sink, "{}: {}", premises_type, count)?;
        }
        writeln!(sink, "Residents: {}", self.total_residents())?;
        Ok(())
    }

    /// Writes every premises, with its residents, as a JSON array
    ///
    /// Fails with `HousingError::Serialization` if a premises is mutably borrowed elsewhere
    pub fn export_json(&self, sink: &mut dyn Write) -> HousingResult<()> {
        serde_json::to_writer_pretty(&mut *sink, &self.premises)?;
        writeln!(sink)?;
        Ok(())
    }
}
