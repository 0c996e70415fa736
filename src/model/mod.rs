// src/model/mod.rs

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::validation::ValidationError;

/// How often a maintenance task recurs.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum Frequency {
    ThreeMonths,
    SixMonths,
    TwelveMonths,
}

impl Frequency {
    pub const ALL: [Frequency; 3] = [
        Frequency::ThreeMonths,
        Frequency::SixMonths,
        Frequency::TwelveMonths,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Frequency::ThreeMonths => "3 months",
            Frequency::SixMonths => "6 months",
            Frequency::TwelveMonths => "12 months",
        }
    }
}

impl fmt::Display for Frequency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Frequency {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Frequency::ALL
            .into_iter()
            .find(|freq| freq.as_str() == s)
            .ok_or_else(|| ValidationError::InvalidEnumValue {
                field: "Frequency",
                value: s.to_string(),
            })
    }
}

impl TryFrom<String> for Frequency {
    type Error = ValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Frequency> for String {
    fn from(freq: Frequency) -> Self {
        freq.as_str().to_string()
    }
}

/// Nature of the maintenance work.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum MaintenanceType {
    /// Predictive maintenance
    Pdm,
    /// Corrective maintenance
    Cm,
    /// Preventive maintenance
    Pvm,
    /// Failure finding
    Ff,
}

impl MaintenanceType {
    pub const ALL: [MaintenanceType; 4] = [
        MaintenanceType::Pdm,
        MaintenanceType::Cm,
        MaintenanceType::Pvm,
        MaintenanceType::Ff,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            MaintenanceType::Pdm => "PDM",
            MaintenanceType::Cm => "CM",
            MaintenanceType::Pvm => "PVM",
            MaintenanceType::Ff => "FF",
        }
    }
}

impl fmt::Display for MaintenanceType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for MaintenanceType {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        MaintenanceType::ALL
            .into_iter()
            .find(|kind| kind.as_str() == s)
            .ok_or_else(|| ValidationError::InvalidEnumValue {
                field: "Type",
                value: s.to_string(),
            })
    }
}

impl TryFrom<String> for MaintenanceType {
    type Error = ValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<MaintenanceType> for String {
    fn from(kind: MaintenanceType) -> Self {
        kind.as_str().to_string()
    }
}

/// A proposed maintenance task awaiting classification.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Action {
    #[serde(rename = "ID")]
    pub id: String,
    #[serde(rename = "Name")]
    pub name: String,
    #[serde(rename = "Frequency")]
    pub frequency: Frequency,
    #[serde(rename = "Type")]
    pub maintenance_type: MaintenanceType,
}

impl Action {
    pub fn new(
        id: &str,
        name: &str,
        frequency: Frequency,
        maintenance_type: MaintenanceType,
    ) -> Self {
        Self {
            id: id.to_string(),
            name: name.to_string(),
            frequency,
            maintenance_type,
        }
    }
}

/// An existing scheduled maintenance definition that may already cover an action.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MaintenancePlan {
    #[serde(rename = "ID")]
    pub id: String,
    #[serde(rename = "Description")]
    pub description: String,
    #[serde(rename = "Frequency")]
    pub frequency: Frequency,
    #[serde(rename = "Type")]
    pub maintenance_type: MaintenanceType,
}

impl MaintenancePlan {
    pub fn new(
        id: &str,
        description: &str,
        frequency: Frequency,
        maintenance_type: MaintenanceType,
    ) -> Self {
        Self {
            id: id.to_string(),
            description: description.to_string(),
            frequency,
            maintenance_type,
        }
    }
}
