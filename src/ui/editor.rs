// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Specification editor popup.
//!
//! Shown under the active point while an edit session is open. Enter saves,
//! Shift+Enter inserts a newline and Escape cancels.

/// Result of editor interaction.
pub enum EditorAction {
    None,
    TextChanged(String),
    Save,
    Cancel,
}

/// Consume the save and cancel keys, returning `(save, cancel)`.
///
/// `consume_key` ignores Shift unless asked for it, so Shift+Enter has to be
/// left alone explicitly for the text field to receive the newline.
fn take_editor_keys(input: &mut egui::InputState) -> (bool, bool) {
    let save = !input.modifiers.shift && input.consume_key(egui::Modifiers::NONE, egui::Key::Enter);
    let cancel = input.consume_key(egui::Modifiers::NONE, egui::Key::Escape);
    (save, cancel)
}

/// Show the editor anchored below `anchor`.
pub fn show(ctx: &egui::Context, anchor: egui::Pos2, point_number: usize, buffer: &str) -> EditorAction {
    let mut action = EditorAction::None;

    // Take the keys before the text field sees them
    let (save_key, cancel_key) = ctx.input_mut(take_editor_keys);

    egui::Area::new(egui::Id::new("specification_editor"))
        .order(egui::Order::Foreground)
        .fixed_pos(anchor + egui::vec2(-130.0, 16.0))
        .show(ctx, |ui| {
            egui::Frame::popup(ui.style()).show(ui, |ui| {
                ui.set_width(260.0);
                ui.label(egui::RichText::new(format!("Point #{}", point_number)).small().strong());

                let mut text = buffer.to_string();
                ui.horizontal(|ui| {
                    let response = ui.add(
                        egui::TextEdit::multiline(&mut text)
                            .hint_text("Add a specification...")
                            .desired_rows(1)
                            .desired_width(180.0),
                    );
                    response.request_focus();
                    if response.changed() {
                        action = EditorAction::TextChanged(text.clone());
                    }

                    if ui.small_button("✔").on_hover_text("Save (Enter)").clicked() {
                        action = EditorAction::Save;
                    }
                    if ui.small_button("✖").on_hover_text("Cancel (Esc)").clicked() {
                        action = EditorAction::Cancel;
                    }
                });
            });
        });

    if cancel_key {
        EditorAction::Cancel
    } else if save_key {
        EditorAction::Save
    } else {
        action
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn input_with_key(key: egui::Key, modifiers: egui::Modifiers) -> egui::InputState {
        let mut input = egui::InputState::default();
        input.modifiers = modifiers;
        input.events.push(egui::Event::Key {
            key,
            physical_key: None,
            pressed: true,
            repeat: false,
            modifiers,
        });
        input
    }

    #[test]
    fn test_enter_saves() {
        let mut input = input_with_key(egui::Key::Enter, egui::Modifiers::NONE);
        assert_eq!(take_editor_keys(&mut input), (true, false));
        assert!(input.events.is_empty());
    }

    #[test]
    fn test_shift_enter_is_left_for_the_text_field() {
        let mut input = input_with_key(egui::Key::Enter, egui::Modifiers::SHIFT);
        assert_eq!(take_editor_keys(&mut input), (false, false));
        assert_eq!(input.events.len(), 1);
    }

    #[test]
    fn test_escape_cancels() {
        let mut input = input_with_key(egui::Key::Escape, egui::Modifiers::NONE);
        assert_eq!(take_editor_keys(&mut input), (false, true));
    }
}
