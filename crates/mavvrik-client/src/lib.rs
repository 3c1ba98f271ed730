//! # mavvrik-client
//!
//! Wire model and executor for the Mavvrik cost intelligence GraphQL API.
//!
//! This crate provides:
//! - [`schema`] - sparse `Filter`/`*Option` input types (unset fields are
//!   never serialized; the backend treats presence differently from value)
//! - [`queries`] - the static query catalog and its typed result rows
//! - [`identity`] - service-account header construction
//! - [`GraphqlClient`] - the executor returning `data` or a classified
//!   [`mavvrik_core::MavvrikError`]

pub mod client;
pub mod identity;
pub mod queries;
pub mod schema;

pub use client::GraphqlClient;
pub use queries::{CostRow, TopEntries, TopEntry, QUERY_COSTS, QUERY_COST_RANKINGS, QUERY_K8S_COSTS};
pub use schema::{CostOption, Filter};
