// Domain layer: match model and the storage port. No I/O.

pub mod model;
pub mod ports;
