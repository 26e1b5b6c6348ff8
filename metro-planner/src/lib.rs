//! Metro route planner server.
//!
//! A web application that answers: "What is the fastest way from this
//! metro station to that one, and how many changes will it take?"

pub mod config;
pub mod domain;
pub mod geo;
pub mod network;
pub mod planner;
pub mod stations;
pub mod web;
