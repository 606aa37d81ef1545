pub mod advisor;
pub mod discipline;
pub mod model;

pub use discipline::{Discipline, DisciplineKind, SimError};
pub use model::{ProcessDescriptor, Ticks};
