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

use std::str::FromStr;

use anyhow::Context;
use clap::{App, Arg, ArgMatches};
use log::warn;
use serde::{Deserialize, Serialize};

use housing::config::{DEFAULT_REMOVAL_ADDRESS, MODE_ENV, PREMISES_TYPE_ENV};
use housing::PremisesType;

pub fn build_app() -> App<'static, 'static> {
    App::new("Housing Registry")
        .version("1.0")
        .author("Sam Ralph <sr1474@york.ac.uk>")
        .about("Registers premises and their residents, and displays them")
        .usage("run <mode> [--type=<type>] [--remove=<address>] [--output=<file>]
            \n    There are several modes available to choose from:\
            \n        all       ->      Displays every registered premises\
            \n        by_type   ->      Displays only premises of the given type (requires '--type')\
            \n        summary   ->      Displays the number of premises of each type\
            \n        json      ->      Exports the registry as JSON\
            \n    The mode is run once, then again after removing the premises at the given address")
        .arg(
            Arg::with_name("mode")
                .help("Specifies how the registry is displayed")
                .takes_value(true))
        .arg(
            Arg::with_name("type")
                .long("type")
                .help("The premises type to display (apartment, private_house, cottage, hotel)")
                .require_equals(true)
                .takes_value(true))
        .arg(
            Arg::with_name("remove")
                .long("remove")
                .help("The address of the premises to remove between displays")
                .require_equals(true)
                .takes_value(true))
        .arg(
            Arg::with_name("output")
                .short("o")
                .long("output")
                .help("Write to the given file instead of stdout")
                .require_equals(true)
                .takes_value(true))
}

#[derive(Debug, PartialEq)]
pub struct Arguments {
    pub mode: DisplayMode,
    pub premises_type: Option<PremisesType>,
    pub removal_address: String,
    pub output_file: Option<String>,
}

#[derive(Copy, Clone, Debug, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DisplayMode {
    All,
    ByType,
    Summary,
    Json,
}

impl Arguments {
    pub fn load_from_arguments() -> anyhow::Result<Arguments> {
        let matches = build_app().get_matches();
        Arguments::from_matches(&matches, |key| std::env::var(key).ok())
    }

    /// Reads the parsed arguments, falling back to the environment for the mode and premises type
    pub fn from_matches<F: Fn(&str) -> Option<String>>(
        matches: &ArgMatches,
        env: F,
    ) -> anyhow::Result<Arguments> {
        let mut arguments = Arguments::default();

        if let Some(mode) = matches.value_of("mode") {
            arguments.mode = serde_plain::from_str(mode)
                .context(format!("Unknown mode '{}'! Use --help for a list of valid modes", mode))?;
        } else if let Some(mode) = env(MODE_ENV) {
            match serde_plain::from_str(&mode) {
                Ok(mode) => arguments.mode = mode,
                Err(e) => {
                    warn!("Failed to parse {} with value: '{}' and error {}. Using default value of: {:?}", MODE_ENV, mode, e, arguments.mode)
                }
            }
        }

        if let Some(premises_type) = matches.value_of("type") {
            arguments.premises_type = Some(
                PremisesType::from_str(premises_type).context("Invalid value for '--type'")?,
            );
        } else if let Some(premises_type) = env(PREMISES_TYPE_ENV) {
            match PremisesType::from_str(&premises_type) {
                Ok(premises_type) => arguments.premises_type = Some(premises_type),
                Err(e) => {
                    warn!("Ignoring {}: {}", PREMISES_TYPE_ENV, e)
                }
            }
        }

        if let Some(address) = matches.value_of("remove") {
            arguments.removal_address = address.to_string();
        }
        if let Some(output_file) = matches.value_of("output") {
            arguments.output_file = Some(output_file.to_string());
        }
        Ok(arguments)
    }
}

impl Default for Arguments {
    fn default() -> Self {
        Arguments {
            mode: DisplayMode::All,
            premises_type: None,
            removal_address: DEFAULT_REMOVAL_ADDRESS.to_string(),
            output_file: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use housing::PremisesType;

    use crate::arguments::{build_app, Arguments, DisplayMode};

    fn parse(args: &[&str], env: &[(&str, &str)]) -> anyhow::Result<Arguments> {
        let mut full = vec!["run"];
        full.extend_from_slice(args);
        let matches = build_app().get_matches_from_safe(full)?;
        Arguments::from_matches(&matches, |key| {
            env.iter()
                .find(|(name, _)| *name == key)
                .map(|(_, value)| value.to_string())
        })
    }

    #[test]
    fn defaults() {
        let arguments = parse(&[], &[]).unwrap();
        assert_eq!(arguments, Arguments::default());
        assert_eq!(arguments.removal_address, "123 Main St");
    }

    #[test]
    fn by_type_with_type() {
        let arguments = parse(&["by_type", "--type=private_house", "--remove=456 Elm St"], &[]).unwrap();
        assert_eq!(arguments.mode, DisplayMode::ByType);
        assert_eq!(arguments.premises_type, Some(PremisesType::PrivateHouse));
        assert_eq!(arguments.removal_address, "456 Elm St");
    }

    #[test]
    fn unknown_mode_is_an_error() {
        assert!(parse(&["everything"], &[]).is_err());
        assert!(parse(&["all", "--type=castle"], &[]).is_err());
    }

    #[test]
    fn environment_fallbacks() {
        let arguments = parse(&[], &[("HOUSING_MODE", "summary"), ("HOUSING_TYPE", "hotel")]).unwrap();
        assert_eq!(arguments.mode, DisplayMode::Summary);
        assert_eq!(arguments.premises_type, Some(PremisesType::Hotel));

        // Arguments take priority, and bad environment values are ignored
        let arguments = parse(&["json"], &[("HOUSING_MODE", "summary"), ("HOUSING_TYPE", "castle")]).unwrap();
        assert_eq!(arguments.mode, DisplayMode::Json);
        assert_eq!(arguments.premises_type, None);
    }
}
