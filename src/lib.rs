// src/lib.rs

//! Glow & Grace storefront backend.
//!
//! The interesting part of this crate is the consistency layer between the
//! product catalog and per-session shopping carts:
//!  - A `store::EntityStore` trait covering CRUD and filtered reads over the
//!    three entity collections (products, cart items, sessions), with an
//!    in-memory and a Postgres implementation.
//!  - `services::cart`, which enforces the one-row-per-(session, product)
//!    cart invariant through an atomic increment-or-insert, and joins cart
//!    rows against products with orphan-skip semantics.
//!  - `services::catalog`, which validates and applies product mutations.
//!
//! Everything under `web/` is a thin actix-web adapter over those services.

pub mod config;
pub mod editor;
pub mod errors;
pub mod models;
pub mod money;
pub mod seed;
pub mod services;
pub mod state;
pub mod store;
pub mod web;
