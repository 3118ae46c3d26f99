pub mod entities;
pub mod ports;
pub mod simulation;
pub mod value_objects;
