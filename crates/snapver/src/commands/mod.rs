//! Command implementations

pub mod info;

pub mod prepare;

pub mod release;
