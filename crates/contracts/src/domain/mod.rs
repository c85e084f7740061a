pub mod a001_training_catalog;
pub mod common;
