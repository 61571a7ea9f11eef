//! Request Handlers

pub mod predictions;
