//! Backend REST client

pub mod backend;
