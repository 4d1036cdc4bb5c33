pub mod capability;
pub mod contact;
pub mod counter;
pub mod cursor;
pub mod navbar;
pub mod particle_field;
pub mod reveal;
pub mod scheduler;
pub mod typewriter;
