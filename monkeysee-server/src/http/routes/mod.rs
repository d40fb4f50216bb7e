//! Route modules, one per resource

pub mod health;
pub mod predictions;
pub mod rankings;
