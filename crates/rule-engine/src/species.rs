//! Animal species accepted by the diagnosis form

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Species name that is not on the form's list
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Unknown species: {0}")]
pub struct UnknownSpecies(pub String);

/// Animal species
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Species {
    Cow,
    Dog,
    Cat,
    Horse,
    Pig,
    Goat,
    Sheep,
    Chicken,
    Duck,
    Rabbit,
    Other,
}

impl Species {
    /// Every species, in the order the form lists them
    pub const ALL: [Species; 11] = [
        Species::Cow,
        Species::Dog,
        Species::Cat,
        Species::Horse,
        Species::Pig,
        Species::Goat,
        Species::Sheep,
        Species::Chicken,
        Species::Duck,
        Species::Rabbit,
        Species::Other,
    ];

    /// Display name
    pub fn as_str(&self) -> &'static str {
        match self {
            Species::Cow => "Cow",
            Species::Dog => "Dog",
            Species::Cat => "Cat",
            Species::Horse => "Horse",
            Species::Pig => "Pig",
            Species::Goat => "Goat",
            Species::Sheep => "Sheep",
            Species::Chicken => "Chicken",
            Species::Duck => "Duck",
            Species::Rabbit => "Rabbit",
            Species::Other => "Other",
        }
    }
}

impl fmt::Display for Species {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Species {
    type Err = UnknownSpecies;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Species::ALL
            .iter()
            .copied()
            .find(|species| species.as_str().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| UnknownSpecies(wanted.to_string()))
    }
}
