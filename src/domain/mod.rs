// Domain layer: request models and ports. No HTTP here.

pub mod model;
pub mod ports;
