// Domain layer: probe models and ports. No HTTP or CLI types here.

pub mod model;
pub mod ports;
