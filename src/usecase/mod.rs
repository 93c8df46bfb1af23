pub mod access;
pub mod ports;
pub mod services;
