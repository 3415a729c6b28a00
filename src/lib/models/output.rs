use chrono::{DateTime, Utc};
use ndarray::Array1;
use serde_derive::{Deserialize, Serialize};
use strum_macros::{Display, EnumIter, EnumString};

use crate::constants::NODATAVAL;

/// Codes and indices of one cell (or one station) for one day.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct OutputElement {
    /// Fine Fuel Moisture Code
    pub ffmc: f64,
    /// Duff Moisture Code
    pub dmc: f64,
    /// Drought Code
    pub dc: f64,
    /// Initial Spread Index
    pub isi: f64,
    /// Build Up Index
    pub bui: f64,
    /// Fire Weather Index
    pub fwi: f64,

    // ----------------- INPUTS ---------------//
    /// Input temperature in celsius
    pub temperature: f64,
    /// Input rain in mm
    pub rain: f64,
    /// Input relative humidity in %
    pub humidity: f64,
    /// Input wind speed in km/h
    pub wind_speed: f64,
}

impl Default for OutputElement {
    fn default() -> Self {
        Self {
            ffmc: NODATAVAL,
            dmc: NODATAVAL,
            dc: NODATAVAL,
            isi: NODATAVAL,
            bui: NODATAVAL,
            fwi: NODATAVAL,
            temperature: NODATAVAL,
            rain: NODATAVAL,
            humidity: NODATAVAL,
            wind_speed: NODATAVAL,
        }
    }
}

#[allow(clippy::upper_case_acronyms)]
#[derive(Debug, PartialEq, Eq, Hash, Copy, Clone, EnumString, EnumIter, Display)]
#[strum(serialize_all = "lowercase")]
pub enum OutputVariableName {
    /// Fine Fuel Moisture Code
    FFMC,
    /// Duff Moisture Code
    DMC,
    /// Drought Code
    DC,
    /// Initial Spread Index
    ISI,
    /// Build Up Index
    BUI,
    /// Fire Weather Index
    FWI,
}

/// Codes and indices of every cell of a grid at a given time.
#[derive(Debug, Clone)]
pub struct Output {
    pub time: DateTime<Utc>,
    pub ffmc: Array1<f64>,
    pub dmc: Array1<f64>,
    pub dc: Array1<f64>,
    pub isi: Array1<f64>,
    pub bui: Array1<f64>,
    pub fwi: Array1<f64>,
}

impl Output {
    pub fn get(&self, variable: OutputVariableName) -> &Array1<f64> {
        match variable {
            OutputVariableName::FFMC => &self.ffmc,
            OutputVariableName::DMC => &self.dmc,
            OutputVariableName::DC => &self.dc,
            OutputVariableName::ISI => &self.isi,
            OutputVariableName::BUI => &self.bui,
            OutputVariableName::FWI => &self.fwi,
        }
    }

    pub fn len(&self) -> usize {
        self.ffmc.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
