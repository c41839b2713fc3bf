// SPDX-License-Identifier: MPL-2.0
//! Notepad tab: static ongoing lists plus the "My Notes" grid fetched from
//! the `notes` table, newest first, each tile tinted by its color tag.

use crate::backend::types::{Note, NoteColor};
use crate::i18n::fluent::I18n;
use crate::ui::components::top_navbar;
use crate::ui::design_tokens::{opacity, palette, radius, sizing, spacing, typography, with_alpha};
use crate::ui::styles;
use iced::alignment::Vertical;
use iced::widget::{container, scrollable, text, Column, Row, Space};
use iced::{Color, Element, Length};

#[derive(Debug, Clone, Default)]
pub struct State {
    pub notes: Vec<Note>,
}

/// Swatch for a note's color tag.
fn note_tint(color: NoteColor) -> Color {
    match color {
        NoteColor::Brown300 => palette::BROWN_300,
        NoteColor::Blue200 => palette::BLUE_200,
        NoteColor::Orange300 => palette::ORANGE_300,
        NoteColor::Green300 => palette::GREEN_300,
    }
}

pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub state: &'a State,
}

pub fn view<'a, Message: 'a>(ctx: ViewContext<'a>) -> Element<'a, Message> {
    let i18n = ctx.i18n;
    let state = ctx.state;

    let navbar = top_navbar::view(
        Row::new()
            .align_y(Vertical::Center)
            .push(
                text(i18n.tr("notes-title"))
                    .size(typography::B1)
                    .color(palette::WHITE),
            )
            .push(Space::new().width(Length::Fill).height(Length::Shrink))
            .push(
                container(text("✎").size(typography::B2))
                    .style(styles::container::tint(
                        with_alpha(palette::BLACK, 0.5),
                        radius::SM,
                    ))
                    .padding(spacing::XS),
            )
            .into(),
    );

    let content = Column::new()
        .spacing(spacing::LG)
        .push(navbar)
        .push(ongoing_section(i18n))
        .push(notes_section(i18n, state));

    container(scrollable(
        container(content).padding([spacing::MD, spacing::MD]),
    ))
    .style(styles::container::screen)
    .width(Length::Fill)
    .height(Length::Fill)
    .into()
}

fn ongoing_section<'a, Message: 'a>(i18n: &I18n) -> Element<'a, Message> {
    let list_row = || {
        container(
            Row::new()
                .spacing(spacing::SM + spacing::XS)
                .align_y(Vertical::Center)
                .push(
                    container(Space::new().width(Length::Fixed(48.0)).height(Length::Fixed(48.0)))
                        .style(styles::container::image_placeholder),
                )
                .push(
                    Column::new()
                        .spacing(spacing::XXS)
                        .width(Length::Fill)
                        .push(
                            text(i18n.tr("notes-ongoing-item-title"))
                                .size(typography::B1)
                                .color(palette::HEADING),
                        )
                        .push(
                            text(i18n.tr("notes-ongoing-available"))
                                .size(typography::B2)
                                .color(palette::RED_300),
                        )
                        .push(
                            text("25 July 2025")
                                .size(typography::B2)
                                .color(with_alpha(palette::HEADING, opacity::BODY_TEXT)),
                        ),
                ),
        )
        .style(styles::container::tint(palette::BACKGROUND, radius::SM))
        .padding(12.0)
        .width(Length::Fill)
    };

    container(
        Column::new()
            .spacing(spacing::SM)
            .push(
                text(i18n.tr("notes-ongoing-title"))
                    .size(typography::B1)
                    .color(palette::HEADING),
            )
            .push(list_row())
            .push(list_row()),
    )
    .style(styles::container::cream_panel)
    .padding(spacing::MD)
    .width(Length::Fill)
    .into()
}

fn notes_section<'a, Message: 'a>(i18n: &I18n, state: &State) -> Element<'a, Message> {
    let header = Row::new()
        .align_y(Vertical::Center)
        .push(
            text(i18n.tr("notes-my-notes"))
                .size(typography::B1)
                .color(palette::HEADING),
        )
        .push(Space::new().width(Length::Fill).height(Length::Shrink))
        .push(
            text(i18n.tr("notes-see-all"))
                .size(typography::B1)
                .color(palette::ORANGE_300),
        );

    // Simple row wrap: four tiles per row.
    let mut grid = Column::new().spacing(spacing::SM + spacing::XXS);
    for chunk in state.notes.chunks(4) {
        let mut row = Row::new().spacing(spacing::SM + spacing::XXS);
        for note in chunk {
            row = row.push(note_tile(note));
        }
        grid = grid.push(row);
    }

    Column::new()
        .spacing(spacing::MD)
        .push(header)
        .push(grid)
        .into()
}

fn note_tile<'a, Message: 'a>(note: &Note) -> Element<'a, Message> {
    let strip = container(Space::new().width(Length::Fill).height(Length::Fixed(8.0)))
        .style(styles::container::tint(note_tint(note.color), 0.0));

    let body = container(
        Column::new()
            .spacing(spacing::SM)
            .push(
                text(note.name.clone())
                    .size(typography::L2)
                    .color(palette::HEADING),
            )
            .push(
                text(note.created_at.format("%-d %B %Y").to_string())
                    .size(typography::L2)
                    .color(with_alpha(palette::HEADING, opacity::BODY_TEXT)),
            ),
    )
    .padding(12.0)
    .height(Length::Fill);

    container(Column::new().push(strip).push(body))
        .style(styles::container::cream_panel)
        .width(Length::Fixed(sizing::NOTE_CARD_WIDTH))
        .height(Length::Fixed(sizing::NOTE_CARD_HEIGHT))
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_color_tag_has_a_tint() {
        // The match is exhaustive by construction; pin the accents.
        assert_eq!(note_tint(NoteColor::Orange300), palette::ORANGE_300);
        assert_eq!(note_tint(NoteColor::Blue200), palette::BLUE_200);
    }
}
