pub mod dataset;
pub mod view;
