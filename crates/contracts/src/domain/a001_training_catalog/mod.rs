pub mod dto;

pub use dto::{
    CategoriesResponse, ProgramsResponse, TrainingCategory, TrainingProgram, TrainingProgramId,
    TrainingTypeId,
};
