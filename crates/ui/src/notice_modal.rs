//! Blocking notice modal.
//!
//! Shows the front of the notice queue over a dimmed backdrop until the
//! operator clicks OK; the next queued notice (if any) takes its place
//! on the following frame.

use bevy::prelude::*;
use bevy_egui::{egui, EguiContexts};

use simulation::clock::format_stamp;
use simulation::notices::NoticeLog;

use crate::theme;

pub fn notice_modal_ui(mut contexts: EguiContexts, mut log: ResMut<NoticeLog>) {
    let Some(notice) = log.current() else {
        return;
    };
    let title = notice.title.clone();
    let body = notice.body.clone();
    let stamp = format_stamp(notice.day, notice.hour);

    let ctx = contexts.ctx_mut();

    // Semi-transparent backdrop to block interaction with the panels.
    let screen_rect = ctx.screen_rect();
    egui::Area::new(egui::Id::new("notice_modal_backdrop"))
        .fixed_pos(screen_rect.min)
        .order(egui::Order::Foreground)
        .show(ctx, |ui| {
            let painter = ui.painter();
            painter.rect_filled(
                screen_rect,
                egui::CornerRadius::ZERO,
                egui::Color32::from_black_alpha(120),
            );
            ui.allocate_rect(screen_rect, egui::Sense::click());
        });

    let mut should_ack = false;

    egui::Window::new("notice_modal")
        .collapsible(false)
        .resizable(false)
        .title_bar(false)
        .anchor(egui::Align2::CENTER_CENTER, egui::Vec2::ZERO)
        .default_width(320.0)
        .order(egui::Order::Foreground)
        .show(ctx, |ui| {
            ui.vertical_centered(|ui| {
                ui.spacing_mut().item_spacing.y = 10.0;
                ui.add_space(12.0);

                ui.heading(&title);
                ui.add_space(4.0);
                ui.label(&body);
                ui.label(
                    egui::RichText::new(stamp)
                        .size(theme::FONT_SMALL)
                        .color(theme::TEXT_MUTED),
                );
                ui.add_space(12.0);

                if ui
                    .add_sized(egui::Vec2::new(120.0, 32.0), egui::Button::new("OK"))
                    .clicked()
                {
                    should_ack = true;
                }

                ui.add_space(12.0);
            });
        });

    if should_ack {
        log.acknowledge_current();
    }
}
