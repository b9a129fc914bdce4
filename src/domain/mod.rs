// Domain layer: models, connection lifecycle, and ports (interfaces).
// No dependencies on adapters or config.

pub mod connection;
pub mod model;
pub mod ports;
