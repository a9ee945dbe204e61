pub mod coercion;
pub mod entities;
pub mod helpers;
pub mod normalizer;
pub mod ports;
pub mod prompt;
pub mod raw;
pub mod services;
pub mod value_objects;

pub use entities::*;
pub use ports::*;
pub use value_objects::*;
