// SPDX-License-Identifier: MPL-2.0
//! `leaf_loaf` is the desktop client for the Leaf & Loaf grocery-delivery
//! product, built with the Iced GUI framework.
//!
//! Onboarding, the pincode service-area gate, address capture, the home
//! feed, notes, and the profile menu all delegate their business logic to a
//! remote backend; the crate itself is screens, a reusable product-card
//! component, and a thin client layer over the hosted auth and row-store
//! endpoints.

pub mod app;
pub mod backend;
pub mod config;
pub mod error;
pub mod i18n;
pub mod ui;
