// Domain layer: wire models and service ports. No transport code here.

pub mod model;
pub mod ports;
