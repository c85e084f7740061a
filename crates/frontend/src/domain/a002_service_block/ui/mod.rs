mod view;
mod view_model;

pub use view::ServiceBlocks;
pub use view_model::ServiceListViewModel;
