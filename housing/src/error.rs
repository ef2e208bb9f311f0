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

pub type HousingResult<T> = Result<T, HousingError>;

pub enum HousingError {
    /// Writing the rendered text to the output sink failed
    Output {
        context: String,
        source: std::io::Error,
    },
    Serialization {
        context: String,
        source: serde_json::Error,
    },
    /// A registered premises is mutably borrowed through another handle
    PremisesInUse {
        position: usize,
    },
    /// A premises type tag could not be parsed
    UnknownPremisesType {
        value: String,
    },
}

impl HousingError {
    pub fn output<T: Display>(context: T, source: std::io::Error) -> HousingError {
        HousingError::Output {
            context: context.to_string(),
            source,
        }
    }
}

impl Debug for HousingError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            HousingError::Output { context, source } => {
                write!(f, "Failed to write output: {}\n{}", context, source)
            }
            HousingError::Serialization { context, source } => {
                write!(f, "Failed to serialize: {}\n{}", context, source)
            }
            HousingError::PremisesInUse { position } => {
                write!(
                    f,
                    "Premises at position {} is being modified elsewhere, so cannot be read",
                    position
                )
            }
            HousingError::UnknownPremisesType { value } => {
                write!(
                    f,
                    "Unknown premises type ({}), expected one of: apartment, private_house, cottage, hotel",
                    value
                )
            }
        }
    }
}

impl Display for HousingError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "Error: {:?}", self)
    }
}

impl From<std::io::Error> for HousingError {
    fn from(e: std::io::Error) -> Self {
        HousingError::Output {
            context: String::from("Output sink rejected write"),
            source: e,
        }
    }
}

impl From<serde_json::Error> for HousingError {
    fn from(e: serde_json::Error) -> Self {
        HousingError::Serialization {
            context: String::from("Failed to encode registry as JSON"),
            source: e,
        }
    }
}

impl std::error::Error for HousingError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            HousingError::Output { source, .. } => Some(source),
            HousingError::Serialization { source, .. } => Some(source),
            HousingError::PremisesInUse { .. } => None,
            HousingError::UnknownPremisesType { .. } => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use std::error::Error;

    use crate::error::HousingError;

    #[test]
    fn io_errors_keep_their_source() {
        let error: HousingError =
            std::io::Error::new(std::io::ErrorKind::BrokenPipe, "closed").into();
        assert!(error.source().is_some());
        assert!(error.to_string().contains("closed"));
    }

    #[test]
    fn unknown_type_lists_valid_tags() {
        let error = HousingError::UnknownPremisesType {
            value: "castle".to_string(),
        };
        let message = error.to_string();
        assert!(message.contains("castle"));
        assert!(message.contains("private_house"));
        assert!(error.source().is_none());
    }
}
