//! Hourly Fine Fuel Moisture Code (Van Wagner 1977, as updated by the
//! Canadian Forest Service to agree with the daily FFMC).
//!
//! The drying and wetting rates are hour-native and moisture relaxes
//! continuously over the time step `t0`, so sub-hourly steps are possible.
//! Weather is assumed constant over the step; steps much longer than an hour
//! are not recommended.
use log::debug;
use ndarray::{Array, ArrayView, Dimension, Zip};

use crate::{
    error::{broadcast_to, check, check_all, DomainError},
    modules::fwi::{
        constants::*,
        functions::{emc_drying, emc_wetting, log_rate, moisture_rain_effect},
    },
};

/// Moisture/FFMC conversion with the exact `250 * 59.5 / 101` multiplier.
pub const HFFMC_COEFFICIENT: f64 = FFMC_MAX_MOISTURE * FFMC_S2 / FFMC_MAX;
/// Hourly log rate temperature factor
pub const HFFMC_B6: f64 = 0.0579;
/// Default FFMC of the previous step
pub const HFFMC_INIT: f64 = FFMC_INIT;
/// Default time step [h]
pub const HFFMC_TIME_STEP: f64 = 1.0;

pub(crate) fn hffmc_kernel(temp: f64, hum: f64, w_speed: f64, rain: f64, fo: f64, t0: f64) -> f64 {
    // Eq. 1
    let moisture = HFFMC_COEFFICIENT * (FFMC_MAX - fo) / (FFMC_S2 + fo);
    // Eqs. 3a and 3b of Van Wagner & Pickett (1985), no canopy interception
    let mut wet = moisture_rain_effect(moisture, rain);
    if wet > FFMC_MAX_MOISTURE {
        wet = FFMC_MAX_MOISTURE;
    }
    let moisture = if rain > 0.0 { wet } else { moisture };

    let temp_effect = HFFMC_B6 * f64::exp(FFMC_B7 * temp);
    // Eqs. 2a, 3a, 3b and Eq. 8 of Van Wagner & Pickett (1985)
    let emc_dry = emc_drying(hum, temp);
    let k_dry = log_rate(hum / 100.0, w_speed) * temp_effect;
    let moisture_dry = emc_dry + (moisture - emc_dry) * f64::powf(10.0, -k_dry * t0);
    // Eqs. 2b, 7a, 4b
    let emc_wet = emc_wetting(hum, temp);
    let k_wet = log_rate((100.0 - hum) / 100.0, w_speed) * temp_effect;
    let moisture_wet = emc_wet - (emc_wet - moisture) * f64::powf(10.0, -k_wet * t0);

    let moisture_new = if moisture > emc_dry {
        moisture_dry
    } else if moisture >= emc_wet {
        moisture
    } else {
        moisture_wet
    };
    // Eq. 6
    let ffmc = FFMC_S2 * (FFMC_MAX_MOISTURE - moisture_new) / (HFFMC_COEFFICIENT + moisture_new);
    if ffmc < 0.0 {
        0.0
    } else {
        ffmc
    }
}

/// Hourly FFMC after `t0` hours of constant weather.
///
/// * `temp` - temperature [°C]
/// * `rh` - relative humidity [%]
/// * `ws` - wind speed [km/h]
/// * `prec` - rain over the step [mm]
/// * `fo` - FFMC of the previous step, [`HFFMC_INIT`] when unknown
/// * `t0` - time step [h], usually [`HFFMC_TIME_STEP`]
pub fn hffmc(temp: f64, rh: f64, ws: f64, prec: f64, fo: f64, t0: f64) -> Result<f64, DomainError> {
    check("rh", rh, &(0.0..=RH_MAX))?;
    check("prec", prec, &(0.0..))?;
    check("ws", ws, &(0.0..))?;
    check("fo", fo, &(0.0..=FFMC_MAX))?;
    check("t0", t0, &(0.0..))?;
    Ok(hffmc_kernel(temp, rh, ws, prec, fo, t0))
}

pub fn hffmc_arr<D: Dimension>(
    temp: ArrayView<f64, D>,
    rh: ArrayView<f64, D>,
    ws: ArrayView<f64, D>,
    prec: ArrayView<f64, D>,
    fo: ArrayView<f64, D>,
    t0: f64,
) -> Result<Array<f64, D>, DomainError> {
    check_all("rh", &rh, &(0.0..=RH_MAX))?;
    check_all("prec", &prec, &(0.0..))?;
    check_all("ws", &ws, &(0.0..))?;
    check_all("fo", &fo, &(0.0..=FFMC_MAX))?;
    check("t0", t0, &(0.0..))?;

    let dim = temp.raw_dim();
    let rh = broadcast_to("rh", &rh, &dim)?;
    let ws = broadcast_to("ws", &ws, &dim)?;
    let prec = broadcast_to("prec", &prec, &dim)?;
    let fo = broadcast_to("fo", &fo, &dim)?;

    debug!("Hourly FFMC on {} cells, step {t0} h", temp.len());
    Ok(Zip::from(&temp)
        .and(&rh)
        .and(&ws)
        .and(&prec)
        .and(&fo)
        .par_map_collect(|&t, &h, &w, &r, &f| hffmc_kernel(t, h, w, r, f, t0)))
}
