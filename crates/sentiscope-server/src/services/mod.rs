pub mod prediction;
pub mod records;
