// SPDX-License-Identifier: MPL-2.0
//! View rendering for the application.
//!
//! Dispatches to the active screen's view, wraps the tab screens with the
//! bottom bar, and stacks the blocking alert over everything when present.

use super::{App, Message, Screen};
use crate::backend::Session;
use crate::ui::components::alert;
use crate::ui::{add_address, card_gallery, home, notes, opening, pincode_check, profile,
    signin, signup, signup_email, tab_bar};
use iced::widget::{container, Column, Stack};
use iced::{Element, Length};

pub fn view(app: &App) -> Element<'_, Message> {
    let user_name = app.session.as_ref().and_then(Session::display_name);

    let screen_view: Element<'_, Message> = match app.screen {
        Screen::Opening => opening::view(&app.i18n),
        Screen::SignUp => {
            signup::view(signup::ViewContext { i18n: &app.i18n }).map(Message::SignUp)
        }
        Screen::SignIn => signin::view(signin::ViewContext {
            i18n: &app.i18n,
            state: &app.signin,
        })
        .map(Message::SignIn),
        Screen::SignUpEmail => signup_email::view(signup_email::ViewContext {
            i18n: &app.i18n,
            state: &app.signup_email,
        })
        .map(Message::SignUpEmail),
        Screen::PincodeCheck => pincode_check::view(pincode_check::ViewContext {
            i18n: &app.i18n,
            state: &app.pincode,
        })
        .map(Message::Pincode),
        Screen::AddAddress => add_address::view(add_address::ViewContext {
            i18n: &app.i18n,
            state: &app.address_form,
        })
        .map(Message::Address),
        Screen::Home => home::view(home::ViewContext {
            i18n: &app.i18n,
            state: &app.home,
            user_name,
        })
        .map(Message::Home),
        Screen::Notes => notes::view(notes::ViewContext {
            i18n: &app.i18n,
            state: &app.notes,
        }),
        Screen::Profile => profile::view(profile::ViewContext {
            i18n: &app.i18n,
            user_name,
        })
        .map(Message::Profile),
        Screen::CardGallery => card_gallery::view(card_gallery::ViewContext {
            i18n: &app.i18n,
            state: &app.gallery,
        })
        .map(Message::Gallery),
    };

    let base: Element<'_, Message> = match app.screen.tab() {
        Some(active) => Column::new()
            .push(container(screen_view).height(Length::Fill))
            .push(tab_bar::view(&app.i18n, active).map(Message::TabSelected))
            .into(),
        None => screen_view,
    };

    match &app.alert {
        Some(alert) => Stack::new()
            .push(base)
            .push(alert::view(alert, &app.i18n).map(Message::Alert))
            .into(),
        None => base,
    }
}
