pub mod query_service;
pub mod view_service;
