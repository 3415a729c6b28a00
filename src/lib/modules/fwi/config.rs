use ndarray::{Array, ArrayView, Dimension};
use serde_derive::{Deserialize, Serialize};
use strum_macros::{Display, EnumString};

use super::{arrays, constants::*, functions};
use crate::error::DomainError;

/// Selects the temperature floor applied before the DMC and DC drying terms.
#[derive(
    Debug, Default, Clone, Copy, PartialEq, Eq, Hash, EnumString, Display, Serialize, Deserialize,
)]
#[strum(serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum ModelVersion {
    /// Floors only an exact `1.1` (DMC) or `2.8` (DC) temperature, reproducing
    /// the reference tables.
    #[default]
    Legacy,
    /// Floors every temperature below `-1.1` (DMC) or `-2.8` (DC).
    Clamped,
}

impl ModelVersion {
    pub fn dmc_temperature(self, temp: f64) -> f64 {
        match self {
            ModelVersion::Legacy if temp == DMC_LEGACY_TEMP => -DMC_T2,
            ModelVersion::Clamped if temp < -DMC_T2 => -DMC_T2,
            _ => temp,
        }
    }

    pub fn dc_temperature(self, temp: f64) -> f64 {
        match self {
            ModelVersion::Legacy if temp == DC_LEGACY_TEMP => -DC_T2,
            ModelVersion::Clamped if temp < -DC_T2 => -DC_T2,
            _ => temp,
        }
    }
}

/// configuration structure for model config
/// stores the model version and the options shared by every call
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FWIModelConfig {
    pub model_version: ModelVersion,
    /// use the latitude band day-length tables for DMC and DC
    pub lat_adjust: bool,
    /// FCFDG (1992) wind function for ISI above 40 km/h
    pub fbp_mod: bool,
}

impl Default for FWIModelConfig {
    fn default() -> Self {
        Self {
            model_version: ModelVersion::Legacy,
            lat_adjust: true,
            fbp_mod: false,
        }
    }
}

impl FWIModelConfig {
    /// Unknown version strings fall back to `legacy`.
    pub fn new(model_version_str: &str) -> Self {
        let model_version = match model_version_str.parse::<ModelVersion>() {
            Ok(version) => version,
            Err(_) => {
                log::warn!("Unknown model version {model_version_str}, using legacy");
                ModelVersion::Legacy
            }
        };
        log::info!("Model version: {}", model_version);
        FWIModelConfig {
            model_version,
            ..FWIModelConfig::default()
        }
    }

    pub fn with_lat_adjust(mut self, lat_adjust: bool) -> Self {
        self.lat_adjust = lat_adjust;
        self
    }

    pub fn with_fbp_mod(mut self, fbp_mod: bool) -> Self {
        self.fbp_mod = fbp_mod;
        self
    }

    pub fn ffmc(
        &self,
        ffmc_yda: f64,
        temperature: f64,
        humidity: f64,
        wind_speed: f64,
        rain: f64,
    ) -> Result<f64, DomainError> {
        functions::ffmc(ffmc_yda, temperature, humidity, wind_speed, rain)
    }

    pub fn dmc(
        &self,
        dmc_yda: f64,
        temperature: f64,
        humidity: f64,
        rain: f64,
        lat: f64,
        mon: u32,
    ) -> Result<f64, DomainError> {
        functions::dmc_for_version(
            dmc_yda,
            temperature,
            humidity,
            rain,
            lat,
            mon,
            self.lat_adjust,
            self.model_version,
        )
    }

    pub fn dc(
        &self,
        dc_yda: f64,
        temperature: f64,
        humidity: f64,
        rain: f64,
        lat: f64,
        mon: u32,
    ) -> Result<f64, DomainError> {
        functions::dc_for_version(
            dc_yda,
            temperature,
            humidity,
            rain,
            lat,
            mon,
            self.lat_adjust,
            self.model_version,
        )
    }

    pub fn isi(&self, ffmc: f64, wind_speed: f64) -> Result<f64, DomainError> {
        functions::isi(ffmc, wind_speed, self.fbp_mod)
    }

    pub fn bui(&self, dmc: f64, dc: f64) -> Result<f64, DomainError> {
        functions::bui(dmc, dc)
    }

    pub fn fwi(&self, isi: f64, bui: f64) -> Result<f64, DomainError> {
        functions::fwi(isi, bui)
    }

    pub fn ffmc_arr<D: Dimension>(
        &self,
        ffmc_yda: ArrayView<f64, D>,
        temperature: ArrayView<f64, D>,
        humidity: ArrayView<f64, D>,
        wind_speed: ArrayView<f64, D>,
        rain: ArrayView<f64, D>,
    ) -> Result<Array<f64, D>, DomainError> {
        arrays::ffmc_arr(ffmc_yda, temperature, humidity, wind_speed, rain)
    }

    #[allow(clippy::too_many_arguments)]
    pub fn dmc_arr<D: Dimension>(
        &self,
        dmc_yda: ArrayView<f64, D>,
        temperature: ArrayView<f64, D>,
        humidity: ArrayView<f64, D>,
        rain: ArrayView<f64, D>,
        lat: ArrayView<f64, D>,
        mon: u32,
    ) -> Result<Array<f64, D>, DomainError> {
        arrays::dmc_arr_for_version(
            dmc_yda,
            temperature,
            humidity,
            rain,
            lat,
            mon,
            self.lat_adjust,
            self.model_version,
        )
    }

    #[allow(clippy::too_many_arguments)]
    pub fn dc_arr<D: Dimension>(
        &self,
        dc_yda: ArrayView<f64, D>,
        temperature: ArrayView<f64, D>,
        humidity: ArrayView<f64, D>,
        rain: ArrayView<f64, D>,
        lat: ArrayView<f64, D>,
        mon: u32,
    ) -> Result<Array<f64, D>, DomainError> {
        arrays::dc_arr_for_version(
            dc_yda,
            temperature,
            humidity,
            rain,
            lat,
            mon,
            self.lat_adjust,
            self.model_version,
        )
    }

    pub fn isi_arr<D: Dimension>(
        &self,
        ffmc: ArrayView<f64, D>,
        wind_speed: ArrayView<f64, D>,
    ) -> Result<Array<f64, D>, DomainError> {
        arrays::isi_arr(ffmc, wind_speed, self.fbp_mod)
    }

    pub fn bui_arr<D: Dimension>(
        &self,
        dmc: ArrayView<f64, D>,
        dc: ArrayView<f64, D>,
    ) -> Result<Array<f64, D>, DomainError> {
        arrays::bui_arr(dmc, dc)
    }

    pub fn fwi_arr<D: Dimension>(
        &self,
        isi: ArrayView<f64, D>,
        bui: ArrayView<f64, D>,
    ) -> Result<Array<f64, D>, DomainError> {
        arrays::fwi_arr(isi, bui)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn model_version_parses_lowercase_names() {
        assert_eq!("legacy".parse::<ModelVersion>(), Ok(ModelVersion::Legacy));
        assert_eq!("clamped".parse::<ModelVersion>(), Ok(ModelVersion::Clamped));
        assert_eq!(ModelVersion::Clamped.to_string(), "clamped");
    }

    #[test]
    fn unknown_version_falls_back_to_legacy() {
        let config = FWIModelConfig::new("v2099");
        assert_eq!(config.model_version, ModelVersion::Legacy);
        assert!(config.lat_adjust);
        assert!(!config.fbp_mod);
    }

    #[test]
    fn temperature_floors() {
        assert_eq!(ModelVersion::Legacy.dmc_temperature(1.1), -1.1);
        assert_eq!(ModelVersion::Legacy.dmc_temperature(-5.0), -5.0);
        assert_eq!(ModelVersion::Clamped.dmc_temperature(-5.0), -1.1);
        assert_eq!(ModelVersion::Clamped.dmc_temperature(1.1), 1.1);
        assert_eq!(ModelVersion::Legacy.dc_temperature(2.8), -2.8);
        assert_eq!(ModelVersion::Clamped.dc_temperature(-10.0), -2.8);
    }

    #[test]
    fn config_deserializes_with_defaults() {
        let config: FWIModelConfig =
            serde_json::from_str(r#"{"model_version": "clamped", "fbp_mod": true}"#)
                .expect("valid config");
        assert_eq!(config.model_version, ModelVersion::Clamped);
        assert!(config.lat_adjust);
        assert!(config.fbp_mod);
    }

    #[test]
    fn config_dispatches_options() {
        let config = FWIModelConfig::default().with_fbp_mod(true);
        let standard = FWIModelConfig::default();
        assert!(config.isi(90.0, 50.0).expect("valid") < standard.isi(90.0, 50.0).expect("valid"));

        let flat = FWIModelConfig::default().with_lat_adjust(false);
        assert_eq!(
            flat.dmc(10.0, 20.0, 40.0, 0.0, -45.0, 7),
            functions::dmc(10.0, 20.0, 40.0, 0.0, -45.0, 7, false)
        );
    }
}
