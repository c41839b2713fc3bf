// SPDX-License-Identifier: MPL-2.0
//! Internationalization (i18n) support for the application.
//!
//! Localization is provided by the Fluent system: translation files are
//! embedded at compile time and the active locale is resolved from the CLI,
//! the config file, or the OS, in that order.

pub mod fluent;
