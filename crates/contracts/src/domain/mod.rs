pub mod metal_rate;
pub mod metals;
pub mod purity;
