use chrono::{DateTime, Datelike, Utc};
use ndarray::Array1;
use serde_derive::{Deserialize, Serialize};

use crate::constants::NODATAVAL;

/// InputElement represents a single weather observation.
/// Units are the ones the equations expect, no conversion is applied.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct InputElement {
    /// air temperature [°C]
    pub temperature: f64,
    /// relative humidity [%]
    pub humidity: f64,
    /// wind speed [km/h]
    pub wind_speed: f64,
    /// rain [mm]
    pub rain: f64,
}

impl Default for InputElement {
    fn default() -> Self {
        Self {
            temperature: NODATAVAL,
            humidity: NODATAVAL,
            wind_speed: NODATAVAL,
            rain: NODATAVAL,
        }
    }
}

/// Weather of every cell of a grid at a given time.
#[derive(Debug, Clone)]
pub struct Input {
    pub time: DateTime<Utc>,
    pub temperature: Array1<f64>,
    pub humidity: Array1<f64>,
    pub wind_speed: Array1<f64>,
    pub rain: Array1<f64>,
}

impl Input {
    pub fn new(time: DateTime<Utc>, data: &[InputElement]) -> Self {
        Self {
            time,
            temperature: data.iter().map(|i| i.temperature).collect(),
            humidity: data.iter().map(|i| i.humidity).collect(),
            wind_speed: data.iter().map(|i| i.wind_speed).collect(),
            rain: data.iter().map(|i| i.rain).collect(),
        }
    }

    /// One-based month of the observation time.
    pub fn month(&self) -> u32 {
        self.time.month()
    }

    pub fn len(&self) -> usize {
        self.temperature.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
