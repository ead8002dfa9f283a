// Domain layer: core models and ports (interfaces). No external dependencies
// beyond serde and the async-trait seam.

pub mod model;
pub mod ports;
