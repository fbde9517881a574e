//! Request and response bodies

pub mod entity;
