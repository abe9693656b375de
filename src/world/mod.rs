//! Population persistence and generation

pub mod generator;
pub mod loader;
pub mod record;

pub use generator::PopulationGenerator;
pub use loader::{load_file, load_population, save_file, save_population, LoadReport};
pub use record::{format_record, parse_record};
