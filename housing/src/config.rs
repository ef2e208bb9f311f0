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

/// Printed before the registry is rendered for the first time
pub const ALL_PREMISES_HEADING: &str = "All Premises:";
/// Printed after the selected premises have been removed
pub const AFTER_REMOVAL_HEADING: &str = "After Removing Premises:";

/// The address removed between the two renders, if none is given
pub const DEFAULT_REMOVAL_ADDRESS: &str = "123 Main St";

/// Environment variable that selects the display mode, if not given as an argument
pub const MODE_ENV: &str = "HOUSING_MODE";
/// Environment variable that selects the premises type, if not given as an argument
pub const PREMISES_TYPE_ENV: &str = "HOUSING_TYPE";
