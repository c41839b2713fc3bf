// SPDX-License-Identifier: MPL-2.0
//! Auth redirect guard.
//!
//! An explicit, testable predicate over [`Screen`] replacing the source
//! product's ambient redirect hook: screens inside the signed-in area bounce
//! to sign-up the moment no session is present.

use super::Screen;

/// Screens that require a session. The gallery sits behind the guard along
/// with the tabs and the onboarding tail (pincode gate, address form).
#[must_use]
pub fn requires_session(screen: Screen) -> bool {
    matches!(
        screen,
        Screen::Home
            | Screen::Notes
            | Screen::Profile
            | Screen::AddAddress
            | Screen::PincodeCheck
            | Screen::CardGallery
    )
}

/// Where to send a signed-out user who landed on a guarded screen.
#[must_use]
pub fn redirect_for(screen: Screen, has_session: bool) -> Option<Screen> {
    (!has_session && requires_session(screen)).then_some(Screen::SignUp)
}

#[cfg(test)]
mod tests {
    use super::*;

    const PUBLIC: [Screen; 4] = [
        Screen::Opening,
        Screen::SignUp,
        Screen::SignIn,
        Screen::SignUpEmail,
    ];

    const GUARDED: [Screen; 6] = [
        Screen::Home,
        Screen::Notes,
        Screen::Profile,
        Screen::AddAddress,
        Screen::PincodeCheck,
        Screen::CardGallery,
    ];

    #[test]
    fn public_screens_never_redirect() {
        for screen in PUBLIC {
            assert_eq!(redirect_for(screen, false), None);
            assert_eq!(redirect_for(screen, true), None);
        }
    }

    #[test]
    fn guarded_screens_redirect_only_without_a_session() {
        for screen in GUARDED {
            assert_eq!(redirect_for(screen, false), Some(Screen::SignUp));
            assert_eq!(redirect_for(screen, true), None);
        }
    }
}
