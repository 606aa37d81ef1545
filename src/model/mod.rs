pub mod process;

pub use process::{ProcessDescriptor, Ticks};
