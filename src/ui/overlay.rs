// SPDX-License-Identifier: MPL-2.0
//! Iced surface rendering toasts as an overlay.
//!
//! Toasts are grouped by [`Position`]; each position that has at least one
//! toast gets one anchored column, stacked in mount order. Toasts in their
//! exit transition fade out linearly until the manager unmounts them.

use crate::notifications::{Position, Surface, SurfaceSpec, ToastId, ToastKind, ToastMessage, ToastView};
use crate::ui::design_tokens::{
    border, opacity, palette, radius, shadow, sizing, spacing, typography,
};
use iced::widget::{button, container, mouse_area, text, Column, Container, Row, Stack, Text};
use iced::{alignment, Color, Element, Length, Theme};
use std::time::{Duration, Instant};

#[derive(Debug, Clone, Copy)]
struct Exit {
    started: Instant,
    transition: Duration,
}

#[derive(Debug, Clone)]
struct Node {
    view: ToastView,
    exit: Option<Exit>,
}

/// Toast surface drawn with iced widgets.
#[derive(Debug, Clone)]
pub struct OverlaySurface {
    spec: SurfaceSpec,
    nodes: Vec<Node>,
}

impl OverlaySurface {
    #[must_use]
    pub fn new(spec: SurfaceSpec) -> Self {
        Self {
            spec,
            nodes: Vec::new(),
        }
    }

    /// Stacking layer requested for the overlay. Hosts place the overlay
    /// above their content when this is positive.
    #[must_use]
    pub fn z_index(&self) -> i32 {
        self.spec.z_index
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Returns whether any toast is fading out and needs redraws.
    #[must_use]
    pub fn is_animating(&self) -> bool {
        self.nodes.iter().any(|node| node.exit.is_some())
    }

    /// Renders all mounted toasts.
    pub fn view(&self) -> Element<'_, ToastMessage> {
        self.view_at(Instant::now())
    }

    fn view_at(&self, now: Instant) -> Element<'_, ToastMessage> {
        let layers: Vec<Element<'_, ToastMessage>> = Position::ALL
            .into_iter()
            .filter_map(|position| self.view_position(position, now))
            .collect();

        if layers.is_empty() {
            // Return an empty container that takes no space
            Container::new(text(""))
                .width(Length::Shrink)
                .height(Length::Shrink)
                .into()
        } else {
            Stack::with_children(layers)
                .width(Length::Fill)
                .height(Length::Fill)
                .into()
        }
    }

    fn view_position(&self, position: Position, now: Instant) -> Option<Element<'_, ToastMessage>> {
        let toasts: Vec<Element<'_, ToastMessage>> = self
            .nodes
            .iter()
            .filter(|node| node.view.position == position)
            .map(|node| {
                let alpha = node.exit.map_or(opacity::OPAQUE, |exit| exit_opacity(exit, now));
                toast(&node.view, alpha)
            })
            .collect();

        if toasts.is_empty() {
            return None;
        }

        let (horizontal, vertical) = anchor(position);
        let column = Column::with_children(toasts)
            .spacing(self.spec.spacing)
            .align_x(horizontal);

        Some(
            Container::new(column)
                .width(Length::Fill)
                .height(Length::Fill)
                .align_x(horizontal)
                .align_y(vertical)
                .padding(spacing::MD)
                .into(),
        )
    }
}

impl Surface for OverlaySurface {
    fn mount(&mut self, toast: ToastView) {
        self.nodes.push(Node {
            view: toast,
            exit: None,
        });
    }

    fn begin_exit(&mut self, id: ToastId, transition: Duration) {
        if let Some(node) = self.nodes.iter_mut().find(|node| node.view.id == id) {
            node.exit = Some(Exit {
                started: Instant::now(),
                transition,
            });
        }
    }

    fn unmount(&mut self, id: ToastId) {
        self.nodes.retain(|node| node.view.id != id);
    }
}

/// Renders a single toast: [icon] [message] [dismiss].
fn toast(view: &ToastView, alpha: f32) -> Element<'_, ToastMessage> {
    let accent_color = Color {
        a: alpha,
        ..accent_color(view.kind)
    };

    let icon = Text::new(kind_glyph(view.kind))
        .size(typography::ICON)
        .width(Length::Fixed(sizing::ICON_MD))
        .style(move |_theme: &Theme| text::Style {
            color: Some(accent_color),
        });

    let message = Text::new(view.message.as_str())
        .size(typography::BODY)
        .style(move |theme: &Theme| text::Style {
            color: Some(Color {
                a: alpha,
                ..theme.palette().text
            }),
        });

    let mut content = Row::new()
        .spacing(spacing::SM)
        .align_y(alignment::Vertical::Center)
        .push(Container::new(icon).padding(spacing::XXS))
        .push(
            Container::new(message)
                .width(Length::Fill)
                .align_x(alignment::Horizontal::Left),
        );

    if view.closable {
        // The button captures its press, so the body's mouse area never
        // sees dismiss clicks.
        let dismiss = button(Text::new("×").size(typography::ICON))
            .on_press(ToastMessage::Dismiss(view.id))
            .padding(spacing::XXS)
            .style(dismiss_button_style);
        content = content.push(dismiss);
    }

    let card = Container::new(content)
        .width(Length::Fixed(sizing::TOAST_WIDTH))
        .padding(spacing::SM)
        .style(move |theme: &Theme| toast_container_style(theme, accent_color, alpha));

    mouse_area(card).on_press(ToastMessage::Clicked(view.id)).into()
}

/// Primary color for a toast kind.
#[must_use]
pub fn accent_color(kind: ToastKind) -> Color {
    match kind {
        ToastKind::Success => palette::SUCCESS_500,
        ToastKind::Error => palette::ERROR_500,
        ToastKind::Warning => palette::WARNING_500,
        ToastKind::Info => palette::INFO_500,
    }
}

fn kind_glyph(kind: ToastKind) -> &'static str {
    match kind {
        ToastKind::Success => "✓",
        ToastKind::Error => "✕",
        ToastKind::Warning => "!",
        ToastKind::Info => "i",
    }
}

/// Horizontal and vertical alignment of a position's column.
fn anchor(position: Position) -> (alignment::Horizontal, alignment::Vertical) {
    let horizontal = match position {
        Position::TopLeft | Position::BottomLeft => alignment::Horizontal::Left,
        Position::TopCenter | Position::BottomCenter => alignment::Horizontal::Center,
        Position::TopRight | Position::BottomRight => alignment::Horizontal::Right,
    };
    let vertical = if position.is_top() {
        alignment::Vertical::Top
    } else {
        alignment::Vertical::Bottom
    };
    (horizontal, vertical)
}

/// Opacity of a toast `now`, fading linearly over its exit transition.
fn exit_opacity(exit: Exit, now: Instant) -> f32 {
    if exit.transition.is_zero() {
        return opacity::TRANSPARENT;
    }
    let elapsed = now.saturating_duration_since(exit.started);
    let progress = (elapsed.as_secs_f32() / exit.transition.as_secs_f32()).min(1.0);
    opacity::OPAQUE - progress
}

/// Style function for the toast container.
fn toast_container_style(theme: &Theme, accent_color: Color, alpha: f32) -> container::Style {
    let bg_color = theme.extended_palette().background.base.color;

    container::Style {
        background: Some(iced::Background::Color(Color {
            a: alpha,
            ..bg_color
        })),
        border: iced::Border {
            color: accent_color,
            width: border::WIDTH_MD,
            radius: radius::MD.into(),
        },
        shadow: shadow::MD,
        text_color: Some(theme.palette().text),
        ..Default::default()
    }
}

/// Style function for the dismiss button.
fn dismiss_button_style(theme: &Theme, status: button::Status) -> button::Style {
    let base = theme.extended_palette().background.base;

    let hover_background = |a: f32| {
        Some(iced::Background::Color(Color {
            a,
            ..palette::GRAY_400
        }))
    };
    let rounded = iced::Border {
        radius: radius::SM.into(),
        ..Default::default()
    };

    match status {
        button::Status::Active => button::Style {
            background: None,
            text_color: base.text,
            border: iced::Border::default(),
            shadow: shadow::NONE,
            snap: true,
        },
        button::Status::Hovered => button::Style {
            background: hover_background(opacity::OVERLAY_SUBTLE),
            text_color: base.text,
            border: rounded,
            shadow: shadow::NONE,
            snap: true,
        },
        button::Status::Pressed => button::Style {
            background: hover_background(opacity::OVERLAY_MEDIUM),
            text_color: base.text,
            border: rounded,
            shadow: shadow::NONE,
            snap: true,
        },
        button::Status::Disabled => button::Style {
            background: None,
            text_color: Color {
                a: opacity::OVERLAY_MEDIUM,
                ..base.text
            },
            border: iced::Border::default(),
            shadow: shadow::NONE,
            snap: true,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::notifications::{Manager, Settings, ToastOptions};

    fn spec() -> SurfaceSpec {
        Settings::default().surface_spec()
    }

    #[test]
    fn toast_container_style_uses_accent_color() {
        let theme = Theme::Dark;
        let accent = palette::SUCCESS_500;
        let style = toast_container_style(&theme, accent, opacity::OPAQUE);

        assert_eq!(style.border.color, accent);
        assert!(style.background.is_some());
    }

    #[test]
    fn accent_colors_follow_kind() {
        assert_eq!(accent_color(ToastKind::Success), palette::SUCCESS_500);
        assert_eq!(accent_color(ToastKind::Error), palette::ERROR_500);
        assert_eq!(accent_color(ToastKind::Warning), palette::WARNING_500);
        assert_eq!(accent_color(ToastKind::Info), palette::INFO_500);
    }

    #[test]
    fn positions_anchor_to_their_corner() {
        assert_eq!(
            anchor(Position::TopLeft),
            (alignment::Horizontal::Left, alignment::Vertical::Top)
        );
        assert_eq!(
            anchor(Position::BottomCenter),
            (alignment::Horizontal::Center, alignment::Vertical::Bottom)
        );
        assert_eq!(
            anchor(Position::BottomRight),
            (alignment::Horizontal::Right, alignment::Vertical::Bottom)
        );
    }

    #[test]
    fn exit_fades_linearly() {
        let started = Instant::now();
        let exit = Exit {
            started,
            transition: Duration::from_millis(300),
        };

        assert_eq!(exit_opacity(exit, started), opacity::OPAQUE);
        let half = exit_opacity(exit, started + Duration::from_millis(150));
        assert!((half - 0.5).abs() < 1e-3);
        assert_eq!(
            exit_opacity(exit, started + Duration::from_secs(1)),
            opacity::TRANSPARENT
        );
    }

    #[test]
    fn overlay_follows_manager_lifecycle() {
        let mut manager = Manager::new(Settings::default(), |spec| Some(OverlaySurface::new(*spec)));
        let id = manager.show("hello", ToastOptions::new()).unwrap();

        let overlay = manager.surface().unwrap();
        assert!(!overlay.is_empty());
        assert!(!overlay.is_animating());
        assert_eq!(overlay.z_index(), spec().z_index);

        manager.remove_toast(id);
        assert!(manager.surface().unwrap().is_animating());
    }

    #[test]
    fn unmount_removes_only_the_given_toast() {
        let mut overlay = OverlaySurface::new(spec());
        let first = ToastId::from_raw(1);
        let second = ToastId::from_raw(2);

        for id in [first, second] {
            overlay.mount(ToastView {
                id,
                kind: ToastKind::Info,
                message: id.to_string(),
                position: Position::TopRight,
                closable: true,
                class_name: None,
            });
        }
        overlay.unmount(first);

        assert_eq!(overlay.nodes.len(), 1);
        assert_eq!(overlay.nodes[0].view.id, second);
    }
}
