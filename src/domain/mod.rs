// Domain layer: the date value and the ports it depends on.

pub mod model;
pub mod ports;
