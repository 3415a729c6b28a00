pub mod fwi;
pub mod hffmc;
