//! Event Ticketing - booking and availability core
//!
//! This crate models people (administrators, customers), venues, events,
//! categories and tickets, with booking, cancellation, event cancellation
//! and revenue reporting on top of a pluggable store.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
pub mod telemetry;
