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

use std::fmt::{Debug, Display, Formatter};
use std::fs::File;
use std::io::{BufWriter, Write};

use anyhow::Context;
use log::{debug, info};

use housing::config::{AFTER_REMOVAL_HEADING, ALL_PREMISES_HEADING, PREMISES_TYPE_ENV};
use housing::HousingManager;

use crate::arguments::{Arguments, DisplayMode};
use crate::execute_modes::RuntimeError::MissingArguments;

pub enum RuntimeError {
    MissingArguments(String),
}

impl Debug for RuntimeError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            RuntimeError::MissingArguments(err) => {
                write!(f, "Missing Arguments: {}", err)
            }
        }
    }
}

impl Display for RuntimeError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self)
    }
}

impl std::error::Error for RuntimeError {}

/// Renders the registry in the selected mode
pub fn display(
    manager: &HousingManager,
    arguments: &Arguments,
    sink: &mut dyn Write,
) -> anyhow::Result<()> {
    match arguments.mode {
        DisplayMode::All => manager.display_all(sink)?,
        DisplayMode::ByType => {
            let premises_type = arguments
                .premises_type
                .ok_or_else(|| {
                    MissingArguments(format!(
                        "a premises type is required, set '--type' or {}",
                        PREMISES_TYPE_ENV
                    ))
                })
                .context("Mode: displaying premises by type")?;
            debug!("Displaying premises of type {}", premises_type);
            manager.display_by_type(premises_type, sink)?
        }
        DisplayMode::Summary => manager.display_summary(sink)?,
        DisplayMode::Json => manager.export_json(sink)?,
    }
    Ok(())
}

/// Builds the sample registry, displays it, removes the selected address and displays it again
pub fn run_demo(arguments: &Arguments, sink: &mut dyn Write) -> anyhow::Result<()> {
    let (mut manager, _handles) = housing::sample_registry();
    info!("Registered {} premises", manager.len());

    writeln!(sink, "{}", ALL_PREMISES_HEADING)?;
    display(&manager, arguments, sink).context("Displaying all premises")?;

    info!("Removing premises at '{}'", arguments.removal_address);
    manager.remove_premises(&arguments.removal_address);

    writeln!(sink, "\n{}", AFTER_REMOVAL_HEADING)?;
    display(&manager, arguments, sink).context("Displaying remaining premises")?;
    sink.flush()?;
    Ok(())
}

pub fn execute(arguments: Arguments) -> anyhow::Result<()> {
    match &arguments.output_file {
        Some(filename) => {
            info!("Writing output to {}", filename);
            let file = File::create(filename)
                .context(format!("Failed to create output file '{}'", filename))?;
            let mut writer = BufWriter::new(file);
            run_demo(&arguments, &mut writer)
        }
        None => {
            let stdout = std::io::stdout();
            let mut handle = stdout.lock();
            run_demo(&arguments, &mut handle)
        }
    }
}
