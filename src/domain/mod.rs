// Domain layer: value types, compliance rules and outbound ports. No I/O here.

pub mod model;
pub mod ports;
pub mod rules;
