use app::LOG_WIDGET;
use bevy::prelude::*;

use crate::presentation::{Presentation, WidgetTuning};
use crate::ui::components::{AffirmativeButton, ButtonPalette, LastInteraction, ResetButton};

/// Hover feedback for every button with a palette.
pub(super) fn style_buttons(
    mut buttons: Query<(&Interaction, &ButtonPalette, &mut BackgroundColor), Changed<Interaction>>,
) {
    for (interaction, palette, mut color) in &mut buttons {
        *color = palette.color_for(*interaction).into();
    }
}

/// Entering "Yes" grows it; pressing it accepts.
pub(super) fn handle_affirmative(
    mut buttons: Query<
        (&Interaction, &mut LastInteraction),
        (Changed<Interaction>, With<AffirmativeButton>),
    >,
    tuning: Res<WidgetTuning>,
    mut presentation: ResMut<Presentation>,
) {
    for (interaction, mut last) in &mut buttons {
        if presentation.is_resolved() {
            break;
        }
        let previous = std::mem::replace(&mut last.0, *interaction);
        match *interaction {
            Interaction::Pressed => {
                if presentation.activate_affirmative() {
                    info!(target: LOG_WIDGET, "Affirmative button pressed");
                }
            }
            Interaction::Hovered if previous == Interaction::None => {
                let grew = presentation
                    .bypass_change_detection()
                    .hover_affirmative(&tuning.tuning.emphasis);
                if grew {
                    presentation.set_changed();
                    debug!(
                        target: LOG_WIDGET,
                        "Emphasis now {:.2}",
                        presentation.emphasis().value()
                    );
                }
            }
            _ => {}
        }
    }
}

pub(super) fn handle_reset(
    buttons: Query<&Interaction, (Changed<Interaction>, With<ResetButton>)>,
    mut presentation: ResMut<Presentation>,
) {
    for interaction in &buttons {
        if *interaction == Interaction::Pressed {
            presentation.reset();
            info!(target: LOG_WIDGET, "Starting over");
        }
    }
}
