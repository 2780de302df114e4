//! Core library exports for the fruit store data layer.
//!
//! This crate exposes the domain model, Diesel models, repositories, forms
//! and service layers shared by the fruit store backend.

pub mod db;
pub mod domain;
pub mod dto;
pub mod error_conversions;
pub mod forms;
pub mod models;
pub mod repository;
pub mod schema;
pub mod services;
