//! HTTP handlers

pub mod entity;
