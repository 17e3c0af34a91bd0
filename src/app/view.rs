// SPDX-License-Identifier: MPL-2.0
//! Demo window layout: a row of buttons with the toast overlay on top.

use super::Message;
use crate::notifications::{Manager, ToastKind};
use crate::ui::design_tokens::{spacing, typography};
use crate::ui::overlay::OverlaySurface;
use iced::widget::{button, Column, Container, Row, Stack, Text};
use iced::{alignment, Element, Length};

/// Context required to render the demo window.
pub struct ViewContext<'a> {
    pub toasts: &'a Manager<OverlaySurface>,
    pub closed: u32,
}

pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let kind_buttons: Vec<Element<'_, Message>> = ToastKind::ALL
        .into_iter()
        .map(|kind| button(Text::new(label(kind))).on_press(Message::Show(kind)).into())
        .collect();

    let buttons = Row::with_children(kind_buttons)
        .push(button(Text::new("Sticky")).on_press(Message::ShowSticky))
        .push(button(Text::new("Clear")).on_press(Message::Clear))
        .spacing(spacing::XS);

    let status = Text::new(format!(
        "Live: {}  Closed: {}",
        ctx.toasts.len(),
        ctx.closed
    ))
    .size(typography::BODY);

    let content: Element<'_, Message> = Container::new(
        Column::new()
            .push(buttons)
            .push(status)
            .spacing(spacing::MD)
            .align_x(alignment::Horizontal::Center),
    )
    .width(Length::Fill)
    .height(Length::Fill)
    .align_x(alignment::Horizontal::Center)
    .align_y(alignment::Vertical::Center)
    .into();

    let Some(overlay) = ctx.toasts.surface() else {
        return content;
    };
    let on_top = overlay_on_top(overlay.z_index());
    let overlay = overlay.view().map(Message::Toast);

    // A non-positive layer puts the toasts underneath the content.
    let layers = if on_top {
        vec![content, overlay]
    } else {
        vec![overlay, content]
    };
    Stack::with_children(layers)
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
}

fn overlay_on_top(z_index: i32) -> bool {
    z_index > 0
}

fn label(kind: ToastKind) -> &'static str {
    match kind {
        ToastKind::Success => "Success",
        ToastKind::Error => "Error",
        ToastKind::Warning => "Warning",
        ToastKind::Info => "Info",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn positive_layer_draws_overlay_last() {
        assert!(overlay_on_top(9999));
        assert!(!overlay_on_top(0));
        assert!(!overlay_on_top(-1));
    }

    #[test]
    fn every_kind_has_a_label() {
        let labels: Vec<_> = ToastKind::ALL.into_iter().map(label).collect();
        assert_eq!(labels, vec!["Success", "Error", "Warning", "Info"]);
    }
}
