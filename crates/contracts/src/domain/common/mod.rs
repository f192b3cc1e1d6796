//! Common types shared by all domain contracts

pub mod record_id;
