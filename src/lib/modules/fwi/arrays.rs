//! Element-wise evaluation of the FWI System on N-dimensional grids.
//!
//! Every input is validated over the whole array before any cell is
//! evaluated, so a single invalid cell rejects the call. The shape of the
//! first argument (yesterday's code, or today's code for the indices) is the
//! shape of the call; every other array must be equal to it or broadcastable
//! to it. Cells share the per-element equations of the scalar functions and
//! are evaluated in parallel.
use log::debug;
use ndarray::{Array, ArrayView, Dimension, Zip};

use super::{
    config::ModelVersion,
    constants::*,
    functions::{
        bui_kernel, dc_day_length, dc_kernel, dmc_day_length, dmc_kernel, ffmc_kernel, fwi_kernel,
        isi_kernel, month_index,
    },
};
use crate::error::{broadcast_to, check_all, DomainError};

pub fn ffmc_arr<D: Dimension>(
    ffmc_yda: ArrayView<f64, D>,
    temp: ArrayView<f64, D>,
    rh: ArrayView<f64, D>,
    ws: ArrayView<f64, D>,
    prec: ArrayView<f64, D>,
) -> Result<Array<f64, D>, DomainError> {
    check_all("ffmc_yda", &ffmc_yda, &(0.0..=FFMC_MAX))?;
    check_all("rh", &rh, &(0.0..=RH_MAX))?;
    check_all("prec", &prec, &(0.0..))?;
    check_all("ws", &ws, &(0.0..))?;

    let dim = ffmc_yda.raw_dim();
    let temp = broadcast_to("temp", &temp, &dim)?;
    let rh = broadcast_to("rh", &rh, &dim)?;
    let ws = broadcast_to("ws", &ws, &dim)?;
    let prec = broadcast_to("prec", &prec, &dim)?;

    debug!("FFMC on {} cells", ffmc_yda.len());
    Ok(Zip::from(&ffmc_yda)
        .and(&temp)
        .and(&rh)
        .and(&ws)
        .and(&prec)
        .par_map_collect(|&ffmc, &t, &h, &w, &r| ffmc_kernel(ffmc, t, h, w, r)))
}

/// Array DMC with the legacy temperature floor, `mon` in 1..=12.
pub fn dmc_arr<D: Dimension>(
    dmc_yda: ArrayView<f64, D>,
    temp: ArrayView<f64, D>,
    rh: ArrayView<f64, D>,
    prec: ArrayView<f64, D>,
    lat: ArrayView<f64, D>,
    mon: u32,
    lat_adjust: bool,
) -> Result<Array<f64, D>, DomainError> {
    dmc_arr_for_version(dmc_yda, temp, rh, prec, lat, mon, lat_adjust, ModelVersion::Legacy)
}

#[allow(clippy::too_many_arguments)]
pub fn dmc_arr_for_version<D: Dimension>(
    dmc_yda: ArrayView<f64, D>,
    temp: ArrayView<f64, D>,
    rh: ArrayView<f64, D>,
    prec: ArrayView<f64, D>,
    lat: ArrayView<f64, D>,
    mon: u32,
    lat_adjust: bool,
    version: ModelVersion,
) -> Result<Array<f64, D>, DomainError> {
    let month = month_index(mon)?;
    check_all("dmc_yda", &dmc_yda, &(0.0..))?;
    check_all("rh", &rh, &(0.0..=RH_MAX))?;
    check_all("prec", &prec, &(0.0..))?;
    check_all("lat", &lat, &(-LAT_MAX..=LAT_MAX))?;

    let dim = dmc_yda.raw_dim();
    let temp = broadcast_to("temp", &temp, &dim)?;
    let rh = broadcast_to("rh", &rh, &dim)?;
    let prec = broadcast_to("prec", &prec, &dim)?;
    let lat = broadcast_to("lat", &lat, &dim)?;

    debug!("DMC on {} cells, month {mon}", dmc_yda.len());
    Ok(Zip::from(&dmc_yda)
        .and(&temp)
        .and(&rh)
        .and(&prec)
        .and(&lat)
        .par_map_collect(|&dmc, &t, &h, &r, &lat| {
            let l_e = dmc_day_length(lat, month, lat_adjust);
            dmc_kernel(dmc, version.dmc_temperature(t), h, r, l_e)
        }))
}

/// Array DC with the legacy temperature floor, `mon` in 1..=12.
pub fn dc_arr<D: Dimension>(
    dc_yda: ArrayView<f64, D>,
    temp: ArrayView<f64, D>,
    rh: ArrayView<f64, D>,
    prec: ArrayView<f64, D>,
    lat: ArrayView<f64, D>,
    mon: u32,
    lat_adjust: bool,
) -> Result<Array<f64, D>, DomainError> {
    dc_arr_for_version(dc_yda, temp, rh, prec, lat, mon, lat_adjust, ModelVersion::Legacy)
}

#[allow(clippy::too_many_arguments)]
pub fn dc_arr_for_version<D: Dimension>(
    dc_yda: ArrayView<f64, D>,
    temp: ArrayView<f64, D>,
    rh: ArrayView<f64, D>,
    prec: ArrayView<f64, D>,
    lat: ArrayView<f64, D>,
    mon: u32,
    lat_adjust: bool,
    version: ModelVersion,
) -> Result<Array<f64, D>, DomainError> {
    let month = month_index(mon)?;
    check_all("dc_yda", &dc_yda, &(0.0..))?;
    check_all("rh", &rh, &(0.0..=RH_MAX))?;
    check_all("prec", &prec, &(0.0..))?;
    check_all("lat", &lat, &(-LAT_MAX..=LAT_MAX))?;

    let dim = dc_yda.raw_dim();
    let temp = broadcast_to("temp", &temp, &dim)?;
    // humidity only takes part in validation
    broadcast_to("rh", &rh, &dim)?;
    let prec = broadcast_to("prec", &prec, &dim)?;
    let lat = broadcast_to("lat", &lat, &dim)?;

    debug!("DC on {} cells, month {mon}", dc_yda.len());
    Ok(Zip::from(&dc_yda)
        .and(&temp)
        .and(&prec)
        .and(&lat)
        .par_map_collect(|&dc, &t, &r, &lat| {
            let l_f = dc_day_length(lat, month, lat_adjust);
            dc_kernel(dc, version.dc_temperature(t), r, l_f)
        }))
}

pub fn isi_arr<D: Dimension>(
    ffmc: ArrayView<f64, D>,
    ws: ArrayView<f64, D>,
    fbp_mod: bool,
) -> Result<Array<f64, D>, DomainError> {
    check_all("ffmc", &ffmc, &(0.0..=FFMC_MAX))?;
    check_all("ws", &ws, &(0.0..))?;

    let ws = broadcast_to("ws", &ws, &ffmc.raw_dim())?;

    debug!("ISI on {} cells", ffmc.len());
    Ok(Zip::from(&ffmc)
        .and(&ws)
        .par_map_collect(|&ffmc, &w| isi_kernel(ffmc, w, fbp_mod)))
}

/// Raster Buildup Index; a zero `dmc + 0.4 dc` denominator yields 0 in any cell.
pub fn bui_arr<D: Dimension>(
    dmc: ArrayView<f64, D>,
    dc: ArrayView<f64, D>,
) -> Result<Array<f64, D>, DomainError> {
    check_all("dmc", &dmc, &(0.0..))?;
    check_all("dc", &dc, &(0.0..))?;

    let dc = broadcast_to("dc", &dc, &dmc.raw_dim())?;

    debug!("BUI on {} cells", dmc.len());
    Ok(Zip::from(&dmc).and(&dc).par_map_collect(|&p, &d| bui_kernel(p, d)))
}

pub fn fwi_arr<D: Dimension>(
    isi: ArrayView<f64, D>,
    bui: ArrayView<f64, D>,
) -> Result<Array<f64, D>, DomainError> {
    check_all("isi", &isi, &(0.0..))?;
    check_all("bui", &bui, &(0.0..))?;

    let bui = broadcast_to("bui", &bui, &isi.raw_dim())?;

    debug!("FWI on {} cells", isi.len());
    Ok(Zip::from(&isi).and(&bui).par_map_collect(|&r, &u| fwi_kernel(r, u)))
}
