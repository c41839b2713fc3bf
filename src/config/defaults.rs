// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for configuration constants.
//!
//! Single source of truth for defaults used across the application,
//! organized by category.

// ==========================================================================
// Backend Defaults
// ==========================================================================

/// Base URL of the hosted backend project (auth + row store).
pub const DEFAULT_BACKEND_URL: &str = "https://leaf-loaf.supabase.co";

/// Publishable anon key sent with every request. Row-level security on the
/// backend is what actually protects data; this key only identifies the
/// project.
pub const DEFAULT_ANON_KEY: &str = "anon-public-key";

// ==========================================================================
// Onboarding Defaults
// ==========================================================================

/// How long the opening splash stays up before moving signed-out users on.
pub const SPLASH_DELAY_MS: u64 = 2500;

/// Number of steps in the email sign-up wizard (email, password, name).
pub const SIGNUP_STEPS: usize = 3;

/// Maximum pincode length accepted by the service-area gate.
pub const PINCODE_MAX_LEN: usize = 5;

// ==========================================================================
// Cart Defaults
// ==========================================================================

/// Quantity floor for the cart stepper; decrementing at the floor is a no-op.
pub const CART_QUANTITY_FLOOR: u32 = 1;

/// Initial cart quantity when the caller does not supply one.
pub const DEFAULT_CART_QUANTITY: u32 = 1;

// ==========================================================================
// Compile-time Validation
// ==========================================================================

const _: () = {
    assert!(SPLASH_DELAY_MS > 0);
    assert!(SIGNUP_STEPS == 3);
    assert!(PINCODE_MAX_LEN > 0);
    assert!(CART_QUANTITY_FLOOR >= 1);
    assert!(DEFAULT_CART_QUANTITY >= CART_QUANTITY_FLOOR);
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cart_defaults_are_valid() {
        assert_eq!(CART_QUANTITY_FLOOR, 1);
        assert!(DEFAULT_CART_QUANTITY >= CART_QUANTITY_FLOOR);
    }

    #[test]
    fn onboarding_defaults_are_valid() {
        assert_eq!(SIGNUP_STEPS, 3);
        assert_eq!(PINCODE_MAX_LEN, 5);
        assert!(SPLASH_DELAY_MS >= 1000);
    }
}
