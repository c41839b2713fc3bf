// SPDX-License-Identifier: MPL-2.0
//! UI layer: design tokens, centralized styles, shared components, and the
//! per-screen view modules.

pub mod add_address;
pub mod card_gallery;
pub mod components;
pub mod design_tokens;
pub mod home;
pub mod notes;
pub mod opening;
pub mod pincode_check;
pub mod profile;
pub mod signin;
pub mod signup;
pub mod signup_email;
pub mod styles;
pub mod tab_bar;
