pub mod entities;
pub mod extraction;
pub mod helpers;
pub mod ports;
pub mod services;
pub mod value_objects;
