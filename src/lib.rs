pub mod config;
pub mod engine_types;
pub mod primality;
pub mod partition;
pub mod number_source;
pub mod seq_engine;
pub mod par_engine;
pub mod report;
