//! Control-room palette and egui style setup.
//!
//! All panels pull their colors from here so status coloring reads the
//! same everywhere: green is healthy, amber is degraded, red needs a
//! human. Applied once at startup by [`apply_control_room_theme`].

use bevy_egui::{egui, EguiContexts};

// =============================================================================
// Palette
// =============================================================================

/// Accent for interactive elements and selection.
pub const PRIMARY: egui::Color32 = egui::Color32::from_rgb(100, 160, 220);
/// Softer informational accent.
pub const SECONDARY: egui::Color32 = egui::Color32::from_rgb(140, 220, 255);
/// Healthy / on-time / confirmed.
pub const SUCCESS: egui::Color32 = egui::Color32::from_rgb(60, 200, 80);
/// Degraded / delayed / needs attention soon.
pub const WARNING: egui::Color32 = egui::Color32::from_rgb(230, 180, 60);
/// Failed / critical / locked out.
pub const ERROR: egui::Color32 = egui::Color32::from_rgb(220, 60, 50);

pub const BG_DARK: egui::Color32 = egui::Color32::from_rgb(30, 32, 40);
pub const BG_PANEL: egui::Color32 = egui::Color32::from_rgb(35, 37, 48);

pub const TEXT: egui::Color32 = egui::Color32::from_rgb(220, 223, 228);
pub const TEXT_MUTED: egui::Color32 = egui::Color32::from_rgb(150, 155, 165);
pub const TEXT_HEADING: egui::Color32 = egui::Color32::from_rgb(235, 238, 245);

pub const FONT_HEADING: f32 = 16.0;
pub const FONT_SUBHEADING: f32 = 14.0;
pub const FONT_BODY: f32 = 13.0;
pub const FONT_SMALL: f32 = 11.0;

pub const WIDGET_CORNER_RADIUS: u8 = 6;
pub const ITEM_SPACING: f32 = 6.0;

// =============================================================================
// Style setup
// =============================================================================

pub fn apply_control_room_theme(mut contexts: EguiContexts) {
    let ctx = contexts.ctx_mut();
    let mut style = (*ctx.style()).clone();

    // Dark console background
    let inactive = egui::Color32::from_rgb(50, 55, 65);
    let hover = egui::Color32::from_rgb(70, 80, 100);

    style.visuals.widgets.noninteractive.bg_fill = BG_PANEL;
    style.visuals.widgets.inactive.bg_fill = inactive;
    style.visuals.widgets.hovered.bg_fill = hover;
    style.visuals.widgets.active.bg_fill = PRIMARY;
    style.visuals.widgets.inactive.weak_bg_fill = inactive;
    style.visuals.widgets.hovered.weak_bg_fill = hover;
    style.visuals.widgets.active.weak_bg_fill = PRIMARY;

    style.visuals.window_fill = BG_PANEL;
    style.visuals.panel_fill = BG_PANEL;
    style.visuals.extreme_bg_color = BG_DARK;
    style.visuals.faint_bg_color = egui::Color32::from_rgb(40, 42, 52);

    // Selection highlight
    style.visuals.selection.bg_fill = PRIMARY;
    style.visuals.selection.stroke = egui::Stroke::new(1.0, PRIMARY);

    // Rounded corners (egui 0.31+ uses CornerRadius with u8 values)
    let window_rounding = egui::CornerRadius::same(8);
    let widget_rounding = egui::CornerRadius::same(WIDGET_CORNER_RADIUS);

    style.visuals.window_corner_radius = window_rounding;
    style.visuals.widgets.noninteractive.corner_radius = widget_rounding;
    style.visuals.widgets.inactive.corner_radius = widget_rounding;
    style.visuals.widgets.hovered.corner_radius = widget_rounding;
    style.visuals.widgets.active.corner_radius = widget_rounding;

    ctx.set_style(style);
}
