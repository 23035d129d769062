pub mod certifications;
pub mod sheet;
