use super::{
    config::{FWIModelConfig, ModelVersion},
    constants::*,
    models::DailyCodes,
};
use crate::{
    error::{check, DomainError},
    models::{input::InputElement, output::OutputElement},
};

// MONTH AND LATITUDE BANDS
/// Zero-based table index of a one-based month.
pub fn month_index(mon: u32) -> Result<usize, DomainError> {
    if (1..=12).contains(&mon) {
        Ok((mon - 1) as usize)
    } else {
        Err(DomainError::InvalidMonth { value: mon })
    }
}

/// Effective day length `L_e` for the DMC drying rate.
pub fn dmc_day_length(lat: f64, month: usize, lat_adjust: bool) -> f64 {
    if !lat_adjust || lat > 30.0 {
        DMC_DAY_LENGTH_46N[month]
    } else if lat > 10.0 {
        DMC_DAY_LENGTH_20N[month]
    } else if lat > -10.0 {
        DMC_EQUATOR_DAY_LENGTH
    } else if lat > -30.0 {
        DMC_DAY_LENGTH_20S[month]
    } else {
        DMC_DAY_LENGTH_40S[month]
    }
}

/// Day length factor `L_f` for the DC potential evapotranspiration.
pub fn dc_day_length(lat: f64, month: usize, lat_adjust: bool) -> f64 {
    if !lat_adjust || lat > 20.0 {
        DC_DAY_LENGTH_20N[month]
    } else if lat > -20.0 {
        DC_EQUATOR_DAY_LENGTH
    } else {
        DC_DAY_LENGTH_20S[month]
    }
}

// FFMC MODULE
pub fn from_ffmc_to_moisture(ffmc: f64) -> f64 {
    FFMC_COEFFICIENT * (FFMC_MAX - ffmc) / (FFMC_S2 + ffmc)
}

pub fn from_moisture_to_ffmc(moisture: f64) -> f64 {
    FFMC_S2 * (FFMC_MAX_MOISTURE - moisture) / (FFMC_COEFFICIENT + moisture)
}

/// Eqs. 3a and 3b, `rain_eff` is the rain left after canopy interception
pub fn moisture_rain_effect(moisture: f64, rain_eff: f64) -> f64 {
    let absorbed = FFMC_R1
        * rain_eff
        * f64::exp(-100.0 / (251.0 - moisture))
        * (1.0 - f64::exp(-FFMC_R2 / rain_eff));
    // sovra-saturation conditions
    let excess = FFMC_R3 * (moisture - FFMC_NORMAL_COND) * (moisture - FFMC_NORMAL_COND) * rain_eff.sqrt();
    let wet_excess = moisture + excess + absorbed;
    let wet = moisture + absorbed;
    if moisture > FFMC_NORMAL_COND {
        wet_excess
    } else {
        wet
    }
}

/// Eq. 4, equilibrium moisture content from drying
pub fn emc_drying(hum: f64, temp: f64) -> f64 {
    FFMC_A1D * hum.powf(FFMC_A2D)
        + FFMC_A3D * f64::exp((hum - 100.0) / 10.0)
        + FFMC_A4 * (21.1 - temp) * (1.0 - 1.0 / f64::exp(hum * FFMC_A5))
}

/// Eq. 5, equilibrium moisture content from wetting
pub fn emc_wetting(hum: f64, temp: f64) -> f64 {
    FFMC_A1W * hum.powf(FFMC_A2W)
        + FFMC_A3W * f64::exp((hum - 100.0) / 10.0)
        + FFMC_A4 * (21.1 - temp) * (1.0 - 1.0 / f64::exp(hum * FFMC_A5))
}

/// Eqs. 6a and 7a, log rate at the normal temperature of 21.1 °C.
/// `ratio` is `rh/100` for drying and `(100-rh)/100` for wetting.
pub fn log_rate(ratio: f64, w_speed: f64) -> f64 {
    FFMC_B1 * (1.0 - ratio.powf(FFMC_B2)) + FFMC_B3 * w_speed.sqrt() * (1.0 - ratio.powf(FFMC_B4))
}

pub(crate) fn ffmc_kernel(ffmc_yda: f64, temp: f64, hum: f64, w_speed: f64, rain: f64) -> f64 {
    // Eq. 1
    let moisture = from_ffmc_to_moisture(ffmc_yda);
    // Eq. 2, loss in the overhead canopy
    let rain_eff = if rain > FFMC_MIN_RAIN {
        rain - FFMC_MIN_RAIN
    } else {
        rain
    };
    let wet = moisture_rain_effect(moisture, rain_eff);
    let mut moisture = if rain > FFMC_MIN_RAIN { wet } else { moisture };
    // pine litter saturates at 250 percent
    if moisture > FFMC_MAX_MOISTURE {
        moisture = FFMC_MAX_MOISTURE;
    }

    let emc_dry = emc_drying(hum, temp);
    let emc_wet = emc_wetting(hum, temp);
    // Eqs. 6b and 7b
    let temp_effect = FFMC_B6 * f64::exp(FFMC_B7 * temp);
    // Eq. 8, below both equilibria the litter takes up moisture
    let k_wet = log_rate((100.0 - hum) / 100.0, w_speed) * temp_effect;
    let moisture_wet = emc_wet - (emc_wet - moisture) / f64::powf(10.0, k_wet);
    // Eq. 9, above the drying equilibrium the litter loses moisture
    let k_dry = log_rate(hum / 100.0, w_speed) * temp_effect;
    let moisture_dry = emc_dry + (moisture - emc_dry) / f64::powf(10.0, k_dry);

    let moisture_new = if moisture > emc_dry {
        moisture_dry
    } else if moisture < emc_wet {
        moisture_wet
    } else {
        moisture
    };
    // Eq. 10
    from_moisture_to_ffmc(moisture_new).clamp(0.0, FFMC_MAX)
}

/// Fine Fuel Moisture Code from yesterday's FFMC and today's noon weather.
///
/// * `ffmc_yda` - FFMC of the previous day, in [0, 101]
/// * `temp` - temperature [°C]
/// * `rh` - relative humidity [%]
/// * `ws` - wind speed [km/h]
/// * `prec` - 24 h precipitation [mm]
pub fn ffmc(ffmc_yda: f64, temp: f64, rh: f64, ws: f64, prec: f64) -> Result<f64, DomainError> {
    check("ffmc_yda", ffmc_yda, &(0.0..=FFMC_MAX))?;
    check("rh", rh, &(0.0..=RH_MAX))?;
    check("prec", prec, &(0.0..))?;
    check("ws", ws, &(0.0..))?;
    Ok(ffmc_kernel(ffmc_yda, temp, rh, ws, prec))
}

// DMC MODULE
pub fn dmc_rain_effect(dmc: f64, rain: f64) -> f64 {
    // Eq. 11, net rain amount
    let re = DMC_R1 * rain - DMC_R2;
    // Alteration to Eq. 12
    let m0 = DMC_R9 + DMC_R10 / f64::exp(DMC_R11 * dmc);
    // Eqs. 13a, 13b, 13c
    let b_low = 100.0 / (DMC_R3 + DMC_R4 * dmc);
    let b_mid = DMC_R5 - DMC_R6 * f64::ln(dmc);
    let b_high = DMC_R7 * f64::ln(dmc) - DMC_R8;
    let b = if dmc <= DMC_A1 {
        b_low
    } else if dmc <= DMC_A2 {
        b_mid
    } else {
        b_high
    };
    // Eq. 14, moisture content after rain
    let mr = m0 + 1000.0 * re / (DMC_R12 + b * re);
    // Alteration to Eq. 15
    DMC_R13 * (DMC_R14 - f64::ln(mr - DMC_R9))
}

/// `temp` has already been through the temperature floor of the model version.
pub(crate) fn dmc_kernel(dmc_yda: f64, temp: f64, hum: f64, rain: f64, l_e: f64) -> f64 {
    // Eq. 16, log drying rate
    let rk = DMC_T1 * (temp + DMC_T2) * (100.0 - hum) * l_e * DMC_T3;
    let dmc_rain = dmc_rain_effect(dmc_yda, rain);
    let mut pr = if rain <= DMC_MIN_RAIN { dmc_yda } else { dmc_rain };
    if pr < 0.0 {
        pr = 0.0;
    }
    let dmc_new = pr + rk;
    if dmc_new < 0.0 {
        0.0
    } else {
        dmc_new
    }
}

/// Duff Moisture Code, with the legacy temperature floor.
///
/// `mon` is the month in 1..=12; `lat_adjust` selects the latitude band
/// day-length table instead of the 46N Canadian standard.
pub fn dmc(
    dmc_yda: f64,
    temp: f64,
    rh: f64,
    prec: f64,
    lat: f64,
    mon: u32,
    lat_adjust: bool,
) -> Result<f64, DomainError> {
    dmc_for_version(dmc_yda, temp, rh, prec, lat, mon, lat_adjust, ModelVersion::Legacy)
}

#[allow(clippy::too_many_arguments)]
pub fn dmc_for_version(
    dmc_yda: f64,
    temp: f64,
    rh: f64,
    prec: f64,
    lat: f64,
    mon: u32,
    lat_adjust: bool,
    version: ModelVersion,
) -> Result<f64, DomainError> {
    let month = month_index(mon)?;
    check("dmc_yda", dmc_yda, &(0.0..))?;
    check("rh", rh, &(0.0..=RH_MAX))?;
    check("prec", prec, &(0.0..))?;
    check("lat", lat, &(-LAT_MAX..=LAT_MAX))?;
    let l_e = dmc_day_length(lat, month, lat_adjust);
    Ok(dmc_kernel(dmc_yda, version.dmc_temperature(temp), rh, prec, l_e))
}

// DC MODULE
pub fn dc_rain_effect(dc: f64, rain: f64) -> f64 {
    // Eq. 18, effective rainfall
    let rd = DC_R1 * rain - DC_R2;
    // Eq. 19
    let q0 = DC_R3 * f64::exp(-dc / DC_R4);
    // Alteration to Eq. 21
    let dc_new = dc - DC_R4 * f64::ln(1.0 + DC_R5 * rd / q0);
    if dc_new < 0.0 {
        0.0
    } else {
        dc_new
    }
}

pub(crate) fn dc_kernel(dc_yda: f64, temp: f64, rain: f64, l_f: f64) -> f64 {
    // Eq. 22, potential evapotranspiration, no negative winter values
    let mut pe = (DC_T1 * (temp + DC_T2) + l_f) / 2.0;
    if pe < 0.0 {
        pe = 0.0;
    }
    let dc_rain = dc_rain_effect(dc_yda, rain);
    let dr = if rain <= DC_MIN_RAIN { dc_yda } else { dc_rain };
    // Alteration to Eq. 23
    let dc_new = dr + pe;
    if dc_new < 0.0 {
        0.0
    } else {
        dc_new
    }
}

/// Drought Code, with the legacy temperature floor.
///
/// `rh` does not enter the equations but is validated like every other input.
pub fn dc(
    dc_yda: f64,
    temp: f64,
    rh: f64,
    prec: f64,
    lat: f64,
    mon: u32,
    lat_adjust: bool,
) -> Result<f64, DomainError> {
    dc_for_version(dc_yda, temp, rh, prec, lat, mon, lat_adjust, ModelVersion::Legacy)
}

#[allow(clippy::too_many_arguments)]
pub fn dc_for_version(
    dc_yda: f64,
    temp: f64,
    rh: f64,
    prec: f64,
    lat: f64,
    mon: u32,
    lat_adjust: bool,
    version: ModelVersion,
) -> Result<f64, DomainError> {
    let month = month_index(mon)?;
    check("dc_yda", dc_yda, &(0.0..))?;
    check("rh", rh, &(0.0..=RH_MAX))?;
    check("prec", prec, &(0.0..))?;
    check("lat", lat, &(-LAT_MAX..=LAT_MAX))?;
    let l_f = dc_day_length(lat, month, lat_adjust);
    Ok(dc_kernel(dc_yda, version.dc_temperature(temp), prec, l_f))
}

// ISI MODULE
pub(crate) fn isi_kernel(ffmc: f64, w_speed: f64, fbp_mod: bool) -> f64 {
    let moisture = from_ffmc_to_moisture(ffmc);
    // Eq. 24, or Eq. 53a of FCFDG (1992) at the extreme end
    let fw_std = f64::exp(ISI_A0 * w_speed);
    let fw_fbp = ISI_FBP_A1 * (1.0 - f64::exp(ISI_FBP_A2 * (w_speed - ISI_FBP_A3)));
    let fw = if fbp_mod && w_speed >= ISI_FBP_MIN_WIND {
        fw_fbp
    } else {
        fw_std
    };
    // Eq. 25
    let ff = ISI_A1 * f64::exp(ISI_A2 * moisture) * (1.0 + moisture.powf(ISI_A3) / ISI_A4);
    // Eq. 26
    ISI_A5 * fw * ff
}

/// Initial Spread Index from today's FFMC and wind speed [km/h].
pub fn isi(ffmc: f64, ws: f64, fbp_mod: bool) -> Result<f64, DomainError> {
    check("ffmc", ffmc, &(0.0..=FFMC_MAX))?;
    check("ws", ws, &(0.0..))?;
    Ok(isi_kernel(ffmc, ws, fbp_mod))
}

// BUI MODULE
pub(crate) fn bui_kernel(dmc: f64, dc: f64) -> f64 {
    // Eq. 27a, a zero denominator yields 0
    let den = dmc + BUI_A1 * dc;
    let bui1 = if den == 0.0 {
        0.0
    } else {
        BUI_A2 * dc * dmc / den
    };
    // Eq. 27b
    let p = if dmc == 0.0 { 0.0 } else { (dmc - bui1) / dmc };
    let cc = BUI_A3 + f64::powf(BUI_A4 * dmc, BUI_A5);
    let mut bui0 = dmc - cc * p;
    if bui0 < 0.0 {
        bui0 = 0.0;
    }
    if bui1 < dmc {
        bui0
    } else {
        bui1
    }
}

/// Buildup Index from today's DMC and DC.
pub fn bui(dmc: f64, dc: f64) -> Result<f64, DomainError> {
    check("dmc", dmc, &(0.0..))?;
    check("dc", dc, &(0.0..))?;
    Ok(bui_kernel(dmc, dc))
}

// FWI MODULE
pub(crate) fn fwi_kernel(isi: f64, bui: f64) -> f64 {
    // Eqs. 28b, 28a, 29
    let bb_high = 0.1 * isi * (1000.0 / (FWI_A4 + FWI_A5 / f64::exp(FWI_A6 * bui)));
    let bb_low = 0.1 * isi * (FWI_A1 * f64::powf(bui, FWI_A2) + FWI_A3);
    let bb = if bui > FWI_BUI_SPLIT { bb_high } else { bb_low };
    // Eqs. 30b, 30a
    let fwi_log = f64::exp(FWI_A7 * f64::powf(FWI_A8 * f64::ln(bb), FWI_A9));
    if bb <= 1.0 {
        bb
    } else {
        fwi_log
    }
}

/// Fire Weather Index from today's ISI and BUI.
pub fn fwi(isi: f64, bui: f64) -> Result<f64, DomainError> {
    check("isi", isi, &(0.0..))?;
    check("bui", bui, &(0.0..))?;
    Ok(fwi_kernel(isi, bui))
}

// DAILY CHAIN
/// Advance yesterday's codes by one day of weather and derive today's indices.
pub fn compute_daily(
    codes: &DailyCodes,
    input: &InputElement,
    lat: f64,
    mon: u32,
    config: &FWIModelConfig,
) -> Result<OutputElement, DomainError> {
    let temperature = input.temperature;
    let humidity = input.humidity;
    let wind_speed = input.wind_speed;
    let rain = input.rain;

    let ffmc = config.ffmc(codes.ffmc, temperature, humidity, wind_speed, rain)?;
    let dmc = config.dmc(codes.dmc, temperature, humidity, rain, lat, mon)?;
    let dc = config.dc(codes.dc, temperature, humidity, rain, lat, mon)?;

    let isi = config.isi(ffmc, wind_speed)?;
    let bui = config.bui(dmc, dc)?;
    let fwi = config.fwi(isi, bui)?;

    Ok(OutputElement {
        ffmc,
        dmc,
        dc,
        isi,
        bui,
        fwi,
        temperature,
        rain,
        humidity,
        wind_speed,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn ffmc_reference_day() {
        // Van Wagner & Pickett (1985), first day of the worked example
        let value = ffmc(85.0, 17.0, 42.0, 25.0, 0.0).expect("valid inputs");
        assert_relative_eq!(value, 87.69298009277445, max_relative = 1e-9);
        assert_eq!((value * 10.0).round() / 10.0, 87.7);
    }

    #[test]
    fn ffmc_rain_regimes() {
        // moisture above 150 takes the supersaturation term
        assert_relative_eq!(
            ffmc(30.0, 15.0, 80.0, 10.0, 12.0).expect("valid"),
            29.75313177701652,
            max_relative = 1e-9
        );
        assert_relative_eq!(
            ffmc(86.0, 15.0, 80.0, 10.0, 3.0).expect("valid"),
            60.60626879431078,
            max_relative = 1e-9
        );
    }

    #[test]
    fn ffmc_saturated_boundary_stays_in_range() {
        let value = ffmc(0.0, 20.0, 100.0, 0.0, 0.0).expect("boundary inputs are valid");
        assert!((0.0..=FFMC_MAX).contains(&value));
    }

    #[test]
    fn ffmc_between_equilibria_keeps_moisture() {
        // moisture 18.95 lies between ew 18.30 and ed 20.15 at 20 °C, 80 %
        let value = ffmc(82.6985559566787, 20.0, 80.0, 10.0, 0.0).expect("valid");
        assert_relative_eq!(value, 82.7455028590415, max_relative = 1e-9);
        let moisture = from_ffmc_to_moisture(82.6985559566787);
        assert!(emc_wetting(80.0, 20.0) <= moisture && moisture <= emc_drying(80.0, 20.0));
        assert_relative_eq!(value, from_moisture_to_ffmc(moisture), max_relative = 1e-12);
    }

    #[test]
    fn ffmc_from_101_only_dries() {
        let value = ffmc(101.0, 20.0, 30.0, 10.0, 0.0).expect("valid");
        assert_relative_eq!(value, 95.27184601690361, max_relative = 1e-9);
    }

    #[test]
    fn ffmc_rejects_out_of_domain() {
        assert_eq!(
            ffmc(-1.0, 20.0, 50.0, 10.0, 0.0),
            Err(DomainError::OutOfRange {
                field: "ffmc_yda",
                value: -1.0
            })
        );
        assert!(ffmc(80.0, 20.0, 101.0, 10.0, 0.0).is_err());
        assert!(ffmc(80.0, 20.0, 50.0, -0.1, 0.0).is_err());
        assert!(ffmc(80.0, 20.0, 50.0, 10.0, -2.0).is_err());
        assert!(ffmc(80.0, 20.0, f64::NAN, 10.0, 0.0).is_err());
    }

    #[test]
    fn dmc_reference_day() {
        let value = dmc(6.0, 17.0, 42.0, 0.0, 46.0, 4, true).expect("valid");
        assert_relative_eq!(value, 8.545051136, max_relative = 1e-9);
    }

    #[test]
    fn dmc_rain_coefficient_regimes() {
        let expected = [
            (20.0, 11.543143215131385),
            (50.0, 27.367689062907488),
            (90.0, 48.78502341748497),
        ];
        for (dmc_yda, value) in expected {
            let result = dmc(dmc_yda, 15.0, 60.0, 10.0, 46.0, 6, true).expect("valid");
            assert_relative_eq!(result, value, max_relative = 1e-9);
        }
    }

    #[test]
    fn dmc_latitude_bands() {
        let expected = [
            (45.0, 12.97327696),
            (20.0, 12.42178204),
            (0.0, 12.1580236),
            (-20.0, 11.89426516),
            (-45.0, 11.5585726),
        ];
        for (lat, value) in expected {
            let result = dmc(10.0, 20.0, 40.0, 0.0, lat, 7, true).expect("valid");
            assert_relative_eq!(result, value, max_relative = 1e-9);
        }
        // without adjustment every latitude uses the 46N table
        let north = dmc(10.0, 20.0, 40.0, 0.0, 45.0, 7, false).expect("valid");
        let south = dmc(10.0, 20.0, 40.0, 0.0, -45.0, 7, false).expect("valid");
        assert_eq!(north, south);
    }

    #[test]
    fn dmc_band_edges_are_half_open() {
        assert_eq!(dmc_day_length(30.0, 0, true), DMC_DAY_LENGTH_20N[0]);
        assert_eq!(dmc_day_length(30.0001, 0, true), DMC_DAY_LENGTH_46N[0]);
        assert_eq!(dmc_day_length(10.0, 0, true), DMC_EQUATOR_DAY_LENGTH);
        assert_eq!(dmc_day_length(-10.0, 0, true), DMC_DAY_LENGTH_20S[0]);
        assert_eq!(dmc_day_length(-30.0, 0, true), DMC_DAY_LENGTH_40S[0]);
        assert_eq!(dmc_day_length(-90.0, 0, true), DMC_DAY_LENGTH_40S[0]);
        assert_eq!(dc_day_length(20.0, 6, true), DC_EQUATOR_DAY_LENGTH);
        assert_eq!(dc_day_length(-20.0, 6, true), DC_DAY_LENGTH_20S[6]);
    }

    #[test]
    fn dmc_legacy_and_clamped_floors() {
        // the legacy floor only triggers on exactly 1.1 °C
        let legacy = dmc(10.0, 1.1, 50.0, 0.0, 46.0, 5, true).expect("valid");
        assert_relative_eq!(legacy, 10.0);
        let cold = dmc(10.0, -5.0, 50.0, 0.0, 46.0, 5, true).expect("valid");
        assert_relative_eq!(cold, 9.4866313, max_relative = 1e-9);
        let clamped =
            dmc_for_version(10.0, -5.0, 50.0, 0.0, 46.0, 5, true, ModelVersion::Clamped)
                .expect("valid");
        assert_relative_eq!(clamped, 10.0);
    }

    #[test]
    fn dmc_rejects_out_of_domain() {
        assert_eq!(
            dmc(5.0, 20.0, 150.0, 0.0, 50.0, 13, true),
            Err(DomainError::InvalidMonth { value: 13 })
        );
        assert!(dmc(5.0, 20.0, 50.0, 0.0, 50.0, 0, true).is_err());
        assert!(dmc(-1.0, 20.0, 50.0, 0.0, 50.0, 6, true).is_err());
        assert!(dmc(5.0, 20.0, 50.0, -1.0, 50.0, 6, true).is_err());
        assert!(dmc(5.0, 20.0, 50.0, 0.0, 91.0, 6, true).is_err());
    }

    #[test]
    fn dc_reference_day() {
        let value = dc(15.0, 17.0, 42.0, 0.0, 46.0, 4, true).expect("valid");
        assert_relative_eq!(value, 19.014, max_relative = 1e-9);
    }

    #[test]
    fn dc_latitude_and_rain() {
        let expected = [(45.0, 107.304), (0.0, 104.804), (-45.0, 103.304)];
        for (lat, value) in expected {
            let result = dc(100.0, 20.0, 40.0, 0.0, lat, 7, true).expect("valid");
            assert_relative_eq!(result, value, max_relative = 1e-9);
        }
        let rained = dc(100.0, 20.0, 40.0, 10.0, 45.0, 7, true).expect("valid");
        assert_relative_eq!(rained, 89.91830561423521, max_relative = 1e-9);
        // the southern table is read with the same month index as the northern one
        let december = dc(100.0, 20.0, 40.0, 0.0, -45.0, 12, true).expect("valid");
        assert_relative_eq!(december, 100.0 + (0.36 * 22.8 + 5.8) / 2.0, max_relative = 1e-12);
    }

    #[test]
    fn dc_legacy_floor() {
        let legacy = dc(100.0, 2.8, 50.0, 0.0, 46.0, 5, true).expect("valid");
        assert_relative_eq!(legacy, 101.9, max_relative = 1e-12);
        let clamped =
            dc_for_version(100.0, 2.8, 50.0, 0.0, 46.0, 5, true, ModelVersion::Clamped)
                .expect("valid");
        assert_relative_eq!(clamped, 100.0 + (0.36 * 5.6 + 3.8) / 2.0, max_relative = 1e-12);
    }

    #[test]
    fn isi_fbp_modification() {
        assert_relative_eq!(
            isi(90.0, 50.0, false).expect("valid"),
            53.257904101994384,
            max_relative = 1e-9
        );
        assert_relative_eq!(
            isi(90.0, 50.0, true).expect("valid"),
            42.939496923966175,
            max_relative = 1e-9
        );
        // below 40 km/h the flag has no effect
        assert_eq!(isi(90.0, 20.0, true), isi(90.0, 20.0, false));
    }

    #[test]
    fn isi_rejects_out_of_domain() {
        assert!(matches!(
            isi(102.0, 10.0, false),
            Err(DomainError::OutOfRange { field: "ffmc", .. })
        ));
        assert!(isi(85.0, -1.0, false).is_err());
    }

    #[test]
    fn bui_degenerate_and_corrective_branches() {
        assert_eq!(bui(0.0, 0.0), Ok(0.0));
        assert_eq!(bui(0.0, 10.0), Ok(0.0));
        assert_relative_eq!(bui(10.0, 0.0).expect("valid"), 9.055069083320817, max_relative = 1e-9);
        assert_relative_eq!(bui(50.0, 300.0).expect("valid"), 70.58823529411765, max_relative = 1e-9);
        assert_relative_eq!(bui(100.0, 50.0).expect("valid"), 98.5536628558512, max_relative = 1e-9);
        assert!(bui(-1.0, 5.0).is_err());
        assert!(bui(5.0, -1.0).is_err());
    }

    #[test]
    fn fwi_branches() {
        assert_relative_eq!(fwi(0.5, 5.0).expect("valid"), 0.2150829725573162, max_relative = 1e-9);
        assert_relative_eq!(fwi(10.0, 50.0).expect("valid"), 22.24063091290998, max_relative = 1e-9);
        assert_relative_eq!(fwi(10.0, 100.0).expect("valid"), 31.498861566714048, max_relative = 1e-9);
        assert_eq!(fwi(0.0, 0.0), Ok(0.0));
        assert!(fwi(-0.1, 5.0).is_err());
        assert!(fwi(1.0, -5.0).is_err());
    }

    #[test]
    fn compute_daily_reference_day() {
        let config = FWIModelConfig::default();
        let weather = InputElement {
            temperature: 17.0,
            humidity: 42.0,
            wind_speed: 25.0,
            rain: 0.0,
        };
        let out = compute_daily(&DailyCodes::default(), &weather, 46.0, 4, &config)
            .expect("valid inputs");
        let rounded = |v: f64| (v * 10.0).round() / 10.0;
        assert_eq!(rounded(out.ffmc), 87.7);
        assert_eq!(rounded(out.dmc), 8.5);
        assert_eq!(rounded(out.dc), 19.0);
        assert_eq!(rounded(out.isi), 10.9);
        assert_eq!(rounded(out.bui), 8.5);
        assert_eq!(rounded(out.fwi), 10.1);
    }
}
