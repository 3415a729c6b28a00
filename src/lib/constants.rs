/// Fill value for missing weather or index values outside the core computations.
pub const NODATAVAL: f64 = -9999.0;
