// Standard spring start-up values
pub const FFMC_INIT: f64 = 85.0;
pub const DMC_INIT: f64 = 6.0;
pub const DC_INIT: f64 = 15.0;

// VALID DOMAINS
pub const FFMC_MAX: f64 = 101.0;
pub const RH_MAX: f64 = 100.0;
pub const LAT_MAX: f64 = 90.0;

// FFMC CONSTANTS
// daily moisture/FFMC conversion, Eq. 1 and Eq. 10
pub const FFMC_COEFFICIENT: f64 = 147.2;
pub const FFMC_S2: f64 = 59.5;
pub const FFMC_MAX_MOISTURE: f64 = 250.0;
// Rain phase constants
pub const FFMC_MIN_RAIN: f64 = 0.5; // canopy interception (mm)
pub const FFMC_NORMAL_COND: f64 = 150.0;
pub const FFMC_R1: f64 = 42.5;
pub const FFMC_R2: f64 = 6.93;
pub const FFMC_R3: f64 = 0.0015;
// Equilibrium moisture constants
pub const FFMC_A1D: f64 = 0.942;
pub const FFMC_A2D: f64 = 0.679;
pub const FFMC_A3D: f64 = 11.0;
pub const FFMC_A1W: f64 = 0.618;
pub const FFMC_A2W: f64 = 0.753;
pub const FFMC_A3W: f64 = 10.0;
pub const FFMC_A4: f64 = 0.18;
pub const FFMC_A5: f64 = 0.115;
// Log drying/wetting rate constants
pub const FFMC_B1: f64 = 0.424;
pub const FFMC_B2: f64 = 1.7;
pub const FFMC_B3: f64 = 0.0694;
pub const FFMC_B4: f64 = 8.0;
pub const FFMC_B6: f64 = 0.581;
pub const FFMC_B7: f64 = 0.0365;

// DMC CONSTANTS
// rain effect
pub const DMC_MIN_RAIN: f64 = 1.5;
pub const DMC_A1: f64 = 33.0;
pub const DMC_A2: f64 = 65.0;
pub const DMC_R1: f64 = 0.92;
pub const DMC_R2: f64 = 1.27;
pub const DMC_R3: f64 = 0.5;
pub const DMC_R4: f64 = 0.3;
pub const DMC_R5: f64 = 14.0;
pub const DMC_R6: f64 = 1.3;
pub const DMC_R7: f64 = 6.2;
pub const DMC_R8: f64 = 17.2;
pub const DMC_R9: f64 = 20.0;
pub const DMC_R10: f64 = 280.0;
pub const DMC_R11: f64 = 0.023;
pub const DMC_R12: f64 = 48.77;
pub const DMC_R13: f64 = 43.43;
pub const DMC_R14: f64 = 5.6348;
// temperature effect
pub const DMC_T1: f64 = 1.894;
pub const DMC_T2: f64 = 1.1;
pub const DMC_T3: f64 = 1e-04;
pub const DMC_LEGACY_TEMP: f64 = 1.1;
pub const DMC_EQUATOR_DAY_LENGTH: f64 = 9.0;

// DC CONSTANTS
// rain effect
pub const DC_MIN_RAIN: f64 = 2.8;
pub const DC_R1: f64 = 0.83;
pub const DC_R2: f64 = 1.27;
pub const DC_R3: f64 = 800.0;
pub const DC_R4: f64 = 400.0;
pub const DC_R5: f64 = 3.937;
// temperature effect
pub const DC_T1: f64 = 0.36;
pub const DC_T2: f64 = 2.8;
pub const DC_LEGACY_TEMP: f64 = 2.8;
pub const DC_EQUATOR_DAY_LENGTH: f64 = 1.4;

// ISI CONSTANTS
pub const ISI_A0: f64 = 0.05039;
pub const ISI_A1: f64 = 91.9;
pub const ISI_A2: f64 = -0.1386;
pub const ISI_A3: f64 = 5.31;
pub const ISI_A4: f64 = 49300000.0;
pub const ISI_A5: f64 = 0.208;
// FBP modification, Eq. 53a in FCFDG (1992)
pub const ISI_FBP_MIN_WIND: f64 = 40.0;
pub const ISI_FBP_A1: f64 = 12.0;
pub const ISI_FBP_A2: f64 = -0.0818;
pub const ISI_FBP_A3: f64 = 28.0;

// BUI CONSTANTS
pub const BUI_A1: f64 = 0.4;
pub const BUI_A2: f64 = 0.8;
pub const BUI_A3: f64 = 0.92;
pub const BUI_A4: f64 = 0.0114;
pub const BUI_A5: f64 = 1.7;

// FWI CONSTANTS
pub const FWI_BUI_SPLIT: f64 = 80.0;
pub const FWI_A1: f64 = 0.626;
pub const FWI_A2: f64 = 0.809;
pub const FWI_A3: f64 = 2.0;
pub const FWI_A4: f64 = 25.0;
pub const FWI_A5: f64 = 108.64;
pub const FWI_A6: f64 = 0.023;
pub const FWI_A7: f64 = 2.72;
pub const FWI_A8: f64 = 0.434;
pub const FWI_A9: f64 = 0.647;

// DAY LENGTH TABLES, indexed by zero-based month
/// DMC effective day length, 46N: Canadian standard, latitude > 30N (Van Wagner 1987)
pub const DMC_DAY_LENGTH_46N: [f64; 12] = [
    6.5, 7.5, 9.0, 12.8, 13.9, 13.9, 12.4, 10.9, 9.4, 8.0, 7.0, 6.0,
];
/// 20N: 30 >= latitude > 10
pub const DMC_DAY_LENGTH_20N: [f64; 12] = [
    7.9, 8.4, 8.9, 9.5, 9.9, 10.2, 10.1, 9.7, 9.1, 8.6, 8.1, 7.8,
];
/// 20S: -10 >= latitude > -30
pub const DMC_DAY_LENGTH_20S: [f64; 12] = [
    10.1, 9.6, 9.1, 8.5, 8.1, 7.8, 7.9, 8.3, 8.9, 9.4, 9.9, 10.2,
];
/// 40S: -30 >= latitude >= -90
pub const DMC_DAY_LENGTH_40S: [f64; 12] = [
    11.5, 10.5, 9.2, 7.9, 6.8, 6.2, 6.5, 7.4, 8.7, 10.0, 11.2, 11.8,
];

/// DC day length factor, north of 20N
pub const DC_DAY_LENGTH_20N: [f64; 12] = [
    -1.6, -1.6, -1.6, 0.9, 3.8, 5.8, 6.4, 5.0, 2.4, 0.4, -1.6, -1.6,
];
/// South of 20S
pub const DC_DAY_LENGTH_20S: [f64; 12] = [
    6.4, 5.0, 2.4, 0.4, -1.6, -1.6, -1.6, -1.6, -1.6, 0.9, 3.8, 5.8,
];
