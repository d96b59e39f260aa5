//! AI advisory feed panel.

use bevy::prelude::*;
use bevy_egui::{egui, EguiContexts};

use simulation::suggestions::{SuggestionFeed, SuggestionPriority};

use crate::theme;
use crate::ui_widgets::{
    caption, progress_bar_with_text, section_separator, stat_row, themed_button,
};

fn priority_color(priority: SuggestionPriority) -> egui::Color32 {
    match priority {
        SuggestionPriority::Critical => theme::ERROR,
        SuggestionPriority::High => theme::WARNING,
        SuggestionPriority::Medium => theme::PRIMARY,
        SuggestionPriority::Low => theme::TEXT_MUTED,
    }
}

pub fn suggestions_panel_ui(mut contexts: EguiContexts, mut feed: ResMut<SuggestionFeed>) {
    egui::Window::new("AI Suggestions")
        .default_pos((1280.0, 48.0))
        .default_width(310.0)
        .show(contexts.ctx_mut(), |ui| {
            if feed.suggestions.is_empty() {
                caption(ui, "No pending suggestions.");
                return;
            }

            let mut pending_ack: Option<u64> = None;
            let mut pending_dismiss: Option<u64> = None;

            egui::ScrollArea::vertical().max_height(300.0).show(ui, |ui| {
                for suggestion in &feed.suggestions {
                    ui.horizontal(|ui| {
                        ui.label(
                            egui::RichText::new(format!(
                                "{} {}",
                                suggestion.category.icon(),
                                suggestion.category.name()
                            ))
                            .size(theme::FONT_SMALL)
                            .color(theme::TEXT_MUTED),
                        );
                        ui.label(
                            egui::RichText::new(suggestion.priority.label())
                                .size(theme::FONT_SMALL)
                                .color(priority_color(suggestion.priority))
                                .strong(),
                        );
                    });
                    ui.label(
                        egui::RichText::new(&suggestion.title)
                            .color(theme::TEXT_HEADING)
                            .strong(),
                    );
                    ui.label(egui::RichText::new(&suggestion.detail).color(theme::TEXT));
                    progress_bar_with_text(
                        ui,
                        suggestion.confidence as f32 / 100.0,
                        &format!("{}% confidence", suggestion.confidence),
                        Some(theme::PRIMARY),
                    );
                    ui.horizontal(|ui| {
                        if let Some(savings) = suggestion.savings_min {
                            ui.label(
                                egui::RichText::new(format!("~{savings} min saved"))
                                    .size(theme::FONT_SMALL)
                                    .color(theme::SUCCESS),
                            );
                        }
                        if !suggestion.acknowledged && themed_button(ui, "Acknowledge").clicked() {
                            pending_ack = Some(suggestion.id);
                        }
                        if themed_button(ui, "Dismiss").clicked() {
                            pending_dismiss = Some(suggestion.id);
                        }
                    });
                    ui.add_space(4.0);
                }
            });

            if let Some(id) = pending_ack {
                feed.acknowledge(id);
            }
            if let Some(id) = pending_dismiss {
                feed.dismiss(id);
            }

            section_separator(ui);
            stat_row(
                ui,
                "Mean confidence",
                &format!("{:.0}%", feed.mean_confidence()),
            );
            stat_row(
                ui,
                "Acknowledged",
                &format!("{:.0}%", feed.acknowledged_share() * 100.0),
            );
            stat_row(
                ui,
                "Est. savings",
                &format!("{} min", feed.total_savings_min()),
            );
        });
}
