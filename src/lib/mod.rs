//! Canadian Forest Fire Weather Index (FWI) System.
//!
//! Fine Fuel Moisture Code, Duff Moisture Code, Drought Code, Initial Spread
//! Index, Buildup Index and Fire Weather Index, evaluated either on a single
//! observation or element-wise on N-dimensional grids, plus the hourly FFMC.
//!
//! Equations follow Van Wagner & Pickett (1985), *Equations and FORTRAN
//! program for the Canadian Forest Fire Weather Index System*, Forestry
//! Technical Report 33, and Van Wagner (1987), Forestry Technical Report 35.
pub mod constants;
pub mod error;
pub mod models;
pub mod modules;

pub use error::DomainError;
pub use models::input::{Input, InputElement};
pub use models::output::{Output, OutputElement, OutputVariableName};
pub use modules::fwi::arrays::{bui_arr, dc_arr, dmc_arr, ffmc_arr, fwi_arr, isi_arr};
pub use modules::fwi::config::{FWIModelConfig, ModelVersion};
pub use modules::fwi::functions::{bui, compute_daily, dc, dmc, ffmc, fwi, isi};
pub use modules::fwi::models::{DailyCodes, FWIProperties, FWIState};
pub use modules::hffmc::functions::{hffmc, hffmc_arr};
