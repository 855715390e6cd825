// Domain layer: models and ports. No HTTP or device specifics here.

pub mod model;
pub mod ports;
