use chrono::{DateTime, Utc};
use ndarray::Array1;
use serde_derive::{Deserialize, Serialize};

use super::{config::FWIModelConfig, constants::*};
use crate::{
    error::DomainError,
    models::{
        input::Input,
        output::{Output, OutputElement},
    },
};

// CELLS PROPERTIES
/// Per-cell coordinates of a grid.
#[derive(Debug)]
pub struct FWIProperties {
    /// Longitudes, not used by the equations; kept so callers can write
    /// outputs alongside the coordinates of each cell.
    pub lons: Array1<f64>,
    /// Latitudes, select the DMC and DC day-length tables.
    pub lats: Array1<f64>,
}

impl FWIProperties {
    pub fn new(lons: Vec<f64>, lats: Vec<f64>) -> Self {
        Self {
            lons: Array1::from_vec(lons),
            lats: Array1::from_vec(lats),
        }
    }

    pub fn len(&self) -> usize {
        self.lats.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

// WARM STATE
/// Yesterday's moisture codes, the only state carried from one day to the next.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DailyCodes {
    pub ffmc: f64,
    pub dmc: f64,
    pub dc: f64,
}

impl Default for DailyCodes {
    fn default() -> Self {
        DailyCodes {
            ffmc: FFMC_INIT,
            dmc: DMC_INIT,
            dc: DC_INIT,
        }
    }
}

impl From<&OutputElement> for DailyCodes {
    fn from(output: &OutputElement) -> Self {
        DailyCodes {
            ffmc: output.ffmc,
            dmc: output.dmc,
            dc: output.dc,
        }
    }
}

// STATE
#[derive(Debug)]
pub struct FWIState {
    pub time: DateTime<Utc>,
    pub ffmc: Array1<f64>,
    pub dmc: Array1<f64>,
    pub dc: Array1<f64>,
    config: FWIModelConfig,
}

impl FWIState {
    /// Create a new state.
    pub fn new(warm_state: &[DailyCodes], time: &DateTime<Utc>, config: FWIModelConfig) -> FWIState {
        FWIState {
            time: *time,
            ffmc: warm_state.iter().map(|w| w.ffmc).collect(),
            dmc: warm_state.iter().map(|w| w.dmc).collect(),
            dc: warm_state.iter().map(|w| w.dc).collect(),
            config,
        }
    }

    pub fn len(&self) -> usize {
        self.ffmc.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn config(&self) -> &FWIModelConfig {
        &self.config
    }

    pub fn warm_state(&self) -> Vec<DailyCodes> {
        self.ffmc
            .iter()
            .zip(self.dmc.iter())
            .zip(self.dc.iter())
            .map(|((&ffmc, &dmc), &dc)| DailyCodes { ffmc, dmc, dc })
            .collect()
    }

    /// Advance the codes of every cell by one day.
    /// On error the state is left untouched.
    pub fn update(&mut self, props: &FWIProperties, input: &Input) -> Result<(), DomainError> {
        let mon = input.month();
        log::debug!(
            "Updating {} cells to {}",
            self.len(),
            input.time.format("%Y-%m-%d")
        );

        let ffmc = self.config.ffmc_arr(
            self.ffmc.view(),
            input.temperature.view(),
            input.humidity.view(),
            input.wind_speed.view(),
            input.rain.view(),
        )?;
        let dmc = self.config.dmc_arr(
            self.dmc.view(),
            input.temperature.view(),
            input.humidity.view(),
            input.rain.view(),
            props.lats.view(),
            mon,
        )?;
        let dc = self.config.dc_arr(
            self.dc.view(),
            input.temperature.view(),
            input.humidity.view(),
            input.rain.view(),
            props.lats.view(),
            mon,
        )?;

        self.time = input.time;
        self.ffmc = ffmc;
        self.dmc = dmc;
        self.dc = dc;
        Ok(())
    }

    /// Indices of the current codes with the wind of `input`.
    pub fn output(&self, input: &Input) -> Result<Output, DomainError> {
        let isi = self.config.isi_arr(self.ffmc.view(), input.wind_speed.view())?;
        let bui = self.config.bui_arr(self.dmc.view(), self.dc.view())?;
        let fwi = self.config.fwi_arr(isi.view(), bui.view())?;

        Ok(Output {
            time: self.time,
            ffmc: self.ffmc.clone(),
            dmc: self.dmc.clone(),
            dc: self.dc.clone(),
            isi,
            bui,
            fwi,
        })
    }
}
