// Domain layer: form and blog models plus the ports the adapters implement.

pub mod model;
pub mod ports;
