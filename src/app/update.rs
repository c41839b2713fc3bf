// SPDX-License-Identifier: MPL-2.0
//! Message handling for the application.
//!
//! Screens emit events; this module translates them into navigation and
//! backend tasks. Each user action starts at most one request and nothing is
//! cancelled or ordered: when two fetches overlap, whichever response lands
//! last wins.

use super::{guard, App, Message, Screen, Tab};
use crate::backend::tables;
use crate::backend::types::{AvailablePincode, NewUserAddress, Note, UserAddress};
use crate::error::Error;
use crate::ui::components::alert::{self, Alert};
use crate::ui::{add_address, card_gallery, home, pincode_check, profile, signin, signup,
    signup_email};
use iced::Task;

pub fn update(app: &mut App, message: Message) -> Task<Message> {
    let task = handle(app, message);

    // Guarded screens bounce to sign-up the moment the session is gone.
    if let Some(redirect) = guard::redirect_for(app.screen, app.session.is_some()) {
        app.screen = redirect;
    }

    task
}

fn handle(app: &mut App, message: Message) -> Task<Message> {
    match message {
        Message::SplashTick => splash_elapsed(app),

        Message::SignUp(message) => match signup::update(message) {
            signup::Event::None => Task::none(),
            signup::Event::OpenEmailSignUp => {
                app.signup_email = signup_email::State::default();
                app.screen = Screen::SignUpEmail;
                Task::none()
            }
            signup::Event::OpenSignIn => {
                app.signin = signin::State::default();
                app.screen = Screen::SignIn;
                Task::none()
            }
        },

        Message::SignIn(message) => match signin::update(&mut app.signin, message) {
            signin::Event::None => Task::none(),
            signin::Event::MissingFields => {
                presence_alert(app, "error-missing-fields");
                Task::none()
            }
            signin::Event::GoToSignUp => {
                app.screen = Screen::SignUp;
                Task::none()
            }
            signin::Event::Submit { email, password } => Task::perform(
                app.backend.session.clone().sign_in(email, password),
                Message::SignInCompleted,
            ),
        },

        Message::SignInCompleted(result) => {
            app.signin.loading = false;
            match result {
                Ok(session) => {
                    app.session = Some(session);
                    check_address_presence(app)
                }
                Err(error) => {
                    error_alert(app, &error);
                    Task::none()
                }
            }
        }

        Message::SignUpEmail(message) => {
            match signup_email::update(&mut app.signup_email, message) {
                signup_email::Event::None => Task::none(),
                signup_email::Event::Back => {
                    app.screen = Screen::SignUp;
                    Task::none()
                }
                signup_email::Event::MissingEmail => {
                    presence_alert(app, "error-missing-email");
                    Task::none()
                }
                signup_email::Event::MissingPassword => {
                    presence_alert(app, "error-missing-password");
                    Task::none()
                }
                signup_email::Event::MissingName => {
                    presence_alert(app, "error-missing-name");
                    Task::none()
                }
                signup_email::Event::TermsRequired => {
                    presence_alert(app, "error-terms-required");
                    Task::none()
                }
                signup_email::Event::Submit {
                    email,
                    password,
                    name,
                } => Task::perform(
                    app.backend.session.clone().sign_up(email, password, name),
                    Message::SignUpCompleted,
                ),
            }
        }

        Message::SignUpCompleted(result) => {
            app.signup_email.loading = false;
            match result {
                Ok(session) => {
                    app.session = Some(session);
                    app.pincode = pincode_check::State::default();
                    app.screen = Screen::PincodeCheck;
                    Task::none()
                }
                Err(error) => {
                    error_alert(app, &error);
                    Task::none()
                }
            }
        }

        Message::Pincode(message) => match pincode_check::update(&mut app.pincode, message) {
            pincode_check::Event::None => Task::none(),
            pincode_check::Event::Check(pincode) => {
                let mut builder = app
                    .backend
                    .store
                    .select(tables::AVAILABLE_PINCODES)
                    .eq("pincode", &pincode);
                if let Some(session) = &app.session {
                    builder = builder.with_token(&session.access_token);
                }
                Task::perform(
                    builder.maybe_single::<AvailablePincode>(),
                    Message::PincodeChecked,
                )
            }
            pincode_check::Event::Back => {
                app.screen = Screen::SignUp;
                Task::none()
            }
            pincode_check::Event::SignOutToSignUp => sign_out(app, Screen::SignUp),
        },

        Message::PincodeChecked(result) => {
            app.pincode.loading = false;
            match result {
                Ok(Some(row)) => {
                    app.address_form = add_address::State::start(row.pincode, row.city);
                    app.screen = Screen::AddAddress;
                    Task::none()
                }
                Ok(None) => {
                    app.alert = Some(Alert::DeliveryUnavailable);
                    Task::none()
                }
                Err(error) => {
                    error_alert(app, &error);
                    Task::none()
                }
            }
        }

        Message::Address(message) => match add_address::update(&mut app.address_form, message) {
            add_address::Event::None => Task::none(),
            add_address::Event::Back => {
                app.screen = Screen::PincodeCheck;
                Task::none()
            }
            add_address::Event::MissingFields => {
                presence_alert(app, "error-missing-fields");
                Task::none()
            }
            add_address::Event::Save {
                flat_house_building,
                area_street_block,
                address_type,
            } => {
                let Some(session) = &app.session else {
                    app.address_form.loading = false;
                    presence_alert(app, "error-not-signed-in");
                    return Task::none();
                };
                let row = NewUserAddress {
                    user_id: session.user.id.clone(),
                    name: session.display_name().unwrap_or_default().to_string(),
                    flat_house_building,
                    area_street_block,
                    pincode: app.address_form.pincode.clone(),
                    city: app.address_form.city.clone(),
                    address_type: address_type.row_value().to_string(),
                    is_default: true,
                };
                let token = session.access_token.clone();
                Task::perform(
                    app.backend
                        .store
                        .clone()
                        .insert(tables::USER_ADDRESSES, row, Some(token)),
                    Message::AddressSaved,
                )
            }
        },

        Message::AddressSaved(result) => {
            app.address_form.loading = false;
            match result {
                Ok(()) => enter_home(app),
                Err(error) => {
                    error_alert(app, &error);
                    Task::none()
                }
            }
        }

        Message::AddressPresenceChecked(result) => match result {
            Ok(Some(_)) => enter_home(app),
            Ok(None) => {
                app.pincode = pincode_check::State::default();
                app.screen = Screen::PincodeCheck;
                Task::none()
            }
            Err(error) => {
                error_alert(app, &error);
                Task::none()
            }
        },

        Message::Home(message) => match home::update(message) {
            home::Event::OpenGallery => {
                app.screen = Screen::CardGallery;
                Task::none()
            }
        },

        Message::Profile(message) => match profile::update(message) {
            profile::Event::Back => enter_home(app),
            profile::Event::OpenAddressBook => {
                // Re-opening the form from the profile keeps the known
                // pincode/city when an address is already loaded.
                let (pincode, city) = app
                    .home
                    .address
                    .as_ref()
                    .map(|address| (address.pincode.clone(), address.city.clone()))
                    .unwrap_or_default();
                app.address_form = add_address::State::start(pincode, city);
                app.screen = Screen::AddAddress;
                Task::none()
            }
            profile::Event::SignOut => sign_out(app, Screen::Opening),
        },

        Message::Gallery(message) => {
            card_gallery::update(&mut app.gallery, message);
            Task::none()
        }

        Message::TabSelected(tab) => {
            app.screen = tab.screen();
            match tab {
                Tab::Home => fetch_default_address(app),
                Tab::Notes => fetch_notes(app),
                Tab::Profile => Task::none(),
            }
        }

        Message::SignOutCompleted {
            destination,
            result,
        } => {
            // The local session is discarded even when the server did not
            // acknowledge the revocation.
            let _ = result;
            app.session = None;
            app.screen = destination;
            Task::none()
        }

        Message::DefaultAddressLoaded(result) => {
            match result {
                Ok(address) => app.home.address = address,
                Err(error) => error_alert(app, &error),
            }
            Task::none()
        }

        Message::NotesLoaded(result) => {
            match result {
                Ok(notes) => app.notes.notes = notes,
                Err(error) => error_alert(app, &error),
            }
            Task::none()
        }

        Message::Alert(message) => {
            match message {
                alert::Message::Dismissed => app.alert = None,
                alert::Message::UseAnotherPincode => {
                    app.alert = None;
                    app.pincode.clear();
                }
            }
            Task::none()
        }
    }
}

/// The opening splash resolved: route by session and address presence.
fn splash_elapsed(app: &mut App) -> Task<Message> {
    if app.screen != Screen::Opening {
        return Task::none();
    }
    if app.session.is_some() {
        check_address_presence(app)
    } else {
        app.screen = Screen::SignUp;
        Task::none()
    }
}

fn enter_home(app: &mut App) -> Task<Message> {
    app.screen = Screen::Home;
    fetch_default_address(app)
}

fn check_address_presence(app: &App) -> Task<Message> {
    let Some(session) = &app.session else {
        return Task::none();
    };
    Task::perform(
        app.backend
            .store
            .select(tables::USER_ADDRESSES)
            .eq("user_id", &session.user.id)
            .with_token(&session.access_token)
            .maybe_single::<UserAddress>(),
        Message::AddressPresenceChecked,
    )
}

fn fetch_default_address(app: &App) -> Task<Message> {
    let Some(session) = &app.session else {
        return Task::none();
    };
    Task::perform(
        app.backend
            .store
            .select(tables::USER_ADDRESSES)
            .eq("user_id", &session.user.id)
            .eq("is_default", "true")
            .with_token(&session.access_token)
            .maybe_single::<UserAddress>(),
        Message::DefaultAddressLoaded,
    )
}

fn fetch_notes(app: &App) -> Task<Message> {
    let Some(session) = &app.session else {
        return Task::none();
    };
    Task::perform(
        app.backend
            .store
            .select(tables::NOTES)
            .order_desc("created_at")
            .with_token(&session.access_token)
            .rows::<Note>(),
        Message::NotesLoaded,
    )
}

fn sign_out(app: &App, destination: Screen) -> Task<Message> {
    let Some(session) = &app.session else {
        return Task::done(Message::SignOutCompleted {
            destination,
            result: Ok(()),
        });
    };
    Task::perform(
        app.backend.session.clone().sign_out(session.access_token.clone()),
        move |result| Message::SignOutCompleted {
            destination,
            result,
        },
    )
}

fn error_alert(app: &mut App, error: &Error) {
    app.alert = Some(Alert::Error {
        title: app.i18n.tr("error-title"),
        body: error.message().to_string(),
    });
}

fn presence_alert(app: &mut App, body_key: &str) {
    app.alert = Some(Alert::Error {
        title: app.i18n.tr("error-title"),
        body: app.i18n.tr(body_key),
    });
}
