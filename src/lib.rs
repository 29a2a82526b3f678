//! Client-side core of the Likeat admin console.
//!
//! The crate models the stateful pieces of the console explicitly so they
//! can be unit tested without a rendering environment: a generic
//! [`controllers::list::ResourceListController`] drives the admin, customer
//! and restaurant collection pages, and a
//! [`controllers::register::RegistrationFlow`] drives account sign-up.
//! Network access goes through the gateway traits in [`gateway`]; a
//! reqwest-backed implementation is provided for the real API.

pub mod controllers;
pub mod domain;
pub mod forms;
pub mod gateway;
pub mod models;
pub mod pagination;
pub mod session;
