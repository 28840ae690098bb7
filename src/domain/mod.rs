// Domain layer: request/response models and ports. No AWS types in here.

pub mod model;
pub mod ports;
