// Domain layer: city records, view selections and the ports the shell plugs into.

pub mod model;
pub mod ports;
