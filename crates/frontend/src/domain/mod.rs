pub mod a001_training_catalog;
pub mod a002_service_block;
