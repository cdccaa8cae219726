//! Outbound collaborators used by the HTTP handlers

pub mod fact_provider;

pub use fact_provider::{
    fun_fact_or_fallback, FactError, FactProvider, NumbersApiClient, StaticFactProvider,
};
