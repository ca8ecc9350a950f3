//! Request/response data transfer objects

pub mod pricing;
pub mod proforma;
