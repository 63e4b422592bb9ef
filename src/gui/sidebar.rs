//! Sidebar Filter Panel
//! Left side panel with the category multi-select.

use egui::{Color32, RichText, ScrollArea};
use std::collections::{HashMap, HashSet};

/// Category filter state. Every category starts selected; the checkboxes
/// narrow the dashboard down.
pub struct Sidebar {
    pub categories: Vec<String>,
    pub selected: Vec<bool>,
}

impl Default for Sidebar {
    fn default() -> Self {
        Self {
            categories: Vec::new(),
            selected: Vec::new(),
        }
    }
}

impl Sidebar {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the category list after a (re)load. Choices made for
    /// categories that survive the refresh are kept; new ones start
    /// selected.
    pub fn update_categories(&mut self, categories: Vec<String>) {
        let previous: HashMap<&String, bool> = self
            .categories
            .iter()
            .zip(self.selected.iter().copied())
            .collect();
        let selected = categories
            .iter()
            .map(|c| previous.get(c).copied().unwrap_or(true))
            .collect();
        self.categories = categories;
        self.selected = selected;
    }

    /// The currently selected categories.
    pub fn selection(&self) -> HashSet<String> {
        self.categories
            .iter()
            .zip(self.selected.iter())
            .filter(|(_, &selected)| selected)
            .map(|(cat, _)| cat.clone())
            .collect()
    }

    /// Draw the filter panel
    pub fn show(&mut self, ui: &mut egui::Ui) {
        ui.vertical_centered(|ui| {
            ui.add_space(5.0);
            ui.label(
                RichText::new("🎛 Filters")
                    .size(22.0)
                    .color(Color32::from_rgb(100, 149, 237)),
            );
            ui.label(
                RichText::new("Choose what the dashboard shows")
                    .size(11.0)
                    .color(Color32::GRAY),
            );
        });
        ui.add_space(10.0);
        ui.separator();
        ui.add_space(5.0);

        if self.categories.is_empty() {
            ui.label(RichText::new("No categories in this sheet").color(Color32::GRAY));
        } else {
            ui.label(RichText::new("📂 Categories").size(14.0).strong());
            ui.add_space(5.0);

            egui::Frame::none()
                .fill(ui.visuals().widgets.noninteractive.bg_fill)
                .rounding(5.0)
                .inner_margin(5.0)
                .show(ui, |ui| {
                    ScrollArea::vertical().max_height(320.0).show(ui, |ui| {
                        for (i, cat) in self.categories.iter().enumerate() {
                            if i < self.selected.len() {
                                ui.checkbox(&mut self.selected[i], cat);
                            }
                        }
                    });
                });

            ui.add_space(5.0);
            ui.horizontal(|ui| {
                if ui.small_button("Select All").clicked() {
                    self.selected.iter_mut().for_each(|v| *v = true);
                }
                if ui.small_button("Clear All").clicked() {
                    self.selected.iter_mut().for_each(|v| *v = false);
                }
            });
        }

        ui.add_space(15.0);
        ui.separator();
        ui.label(
            RichText::new("Updated live from the published sheet")
                .size(11.0)
                .color(Color32::GRAY),
        );
    }
}
