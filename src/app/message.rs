// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the application.

use crate::backend::types::{AvailablePincode, Note, UserAddress};
use crate::backend::Session;
use crate::error::Error;
use crate::ui::components::alert;
use crate::ui::{add_address, card_gallery, home, pincode_check, profile, signin, signup,
    signup_email};

use super::{Screen, Tab};

/// Top-level messages consumed by `App::update`. The variants forward
/// lower-level screen messages while keeping a single update entrypoint;
/// the `*Completed`/`*Loaded` variants carry backend results.
#[derive(Debug, Clone)]
pub enum Message {
    /// Splash delay elapsed on the opening screen.
    SplashTick,
    SignUp(signup::Message),
    SignIn(signin::Message),
    SignUpEmail(signup_email::Message),
    Pincode(pincode_check::Message),
    Address(add_address::Message),
    Home(home::Message),
    Profile(profile::Message),
    Gallery(card_gallery::Message),
    TabSelected(Tab),
    Alert(alert::Message),
    /// Result of the email sign-up.
    SignUpCompleted(Result<Session, Error>),
    /// Result of the email sign-in.
    SignInCompleted(Result<Session, Error>),
    /// Result of revoking the session; navigation proceeds either way.
    SignOutCompleted {
        destination: Screen,
        result: Result<(), Error>,
    },
    /// Does the signed-in user have any saved address?
    AddressPresenceChecked(Result<Option<UserAddress>, Error>),
    /// Service-area lookup for the entered pincode.
    PincodeChecked(Result<Option<AvailablePincode>, Error>),
    /// Result of inserting the default address.
    AddressSaved(Result<(), Error>),
    /// Default address for the home header.
    DefaultAddressLoaded(Result<Option<UserAddress>, Error>),
    /// Notes for the notepad grid.
    NotesLoaded(Result<Vec<Note>, Error>),
}

/// Runtime flags passed in from the CLI to tweak startup behavior.
#[derive(Debug, Default)]
pub struct Flags {
    /// Optional locale override in BCP-47 form (e.g. `fr`, `en-US`).
    pub lang: Option<String>,
    /// Optional backend base-URL override (e.g. a local dev stack).
    pub backend_url: Option<String>,
}
