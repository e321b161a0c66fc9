pub mod drag;
pub mod gravity;
pub mod mach;
pub mod orbital;
pub mod physics_errors;
pub mod reynolds;
pub mod thrust;

pub use physics_errors::PhysicsErrors;
