use app::LOG_WIDGET;
use bevy::{prelude::*, window::CursorMoved};
use valentine_core::{Bounds, EvasivePosition, Point};

use crate::presentation::{Presentation, WidgetRng, WidgetTuning};
use crate::ui::components::{EvasiveControl, InteractionSurface};
use crate::ui::logical_bounds;

/// Runs every cursor movement through the evasion controller.
///
/// Coordinates are relative to the interaction surface. Once the control has
/// moved, its box is taken from the stored offset rather than from layout,
/// which may still be mid-animation.
pub(super) fn evade_pointer(
    mut cursor_moves: MessageReader<CursorMoved>,
    surface: Query<(&ComputedNode, &UiGlobalTransform), With<InteractionSurface>>,
    controls: Query<(&ComputedNode, &UiGlobalTransform), With<EvasiveControl>>,
    tuning: Res<WidgetTuning>,
    mut rng: ResMut<WidgetRng>,
    mut presentation: ResMut<Presentation>,
) {
    let surface = surface
        .single()
        .ok()
        .map(|(node, transform)| logical_bounds(node, transform));
    let drawn = controls
        .single()
        .ok()
        .map(|(node, transform)| logical_bounds(node, transform));

    for moved in cursor_moves.read() {
        let Some(surface) = surface else {
            continue;
        };
        let origin = surface.origin;
        let pointer = Point::new(moved.position.x - origin.x, moved.position.y - origin.y);

        let control = drawn.map(|drawn| match presentation.evasive() {
            EvasivePosition::Offset(at) => Bounds::new(at, drawn.size),
            EvasivePosition::Natural => Bounds::new(
                Point::new(drawn.origin.x - origin.x, drawn.origin.y - origin.y),
                drawn.size,
            ),
        });

        let moved_to = presentation.bypass_change_detection().pointer_moved(
            pointer,
            control,
            Some(surface.size),
            &tuning.tuning.evasion,
            &mut **rng,
        );
        if let Some(next) = moved_to {
            presentation.set_changed();
            debug!(
                target: LOG_WIDGET,
                "Evasive control hops to ({:.0}, {:.0})",
                next.x,
                next.y
            );
        }
    }
}
