// Domain layer: records, documents and the ports the converter is built on.

pub mod model;
pub mod ports;
