//! Pointer and button input feeding the widget record.
//!
//! - [`evasion`]: cursor movement against the evasive control
//! - [`buttons`]: hover, press and reset on the real buttons

mod buttons;
mod evasion;

use bevy::prelude::*;

use crate::presentation::{Screen, WidgetSet};

pub struct InputPlugin;

impl Plugin for InputPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(
            Update,
            (
                (evasion::evade_pointer, buttons::handle_affirmative)
                    .run_if(in_state(Screen::Asking)),
                buttons::handle_reset.run_if(in_state(Screen::Accepted)),
                buttons::style_buttons,
            )
                .in_set(WidgetSet::Input),
        );
    }
}
