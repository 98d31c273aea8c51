//! Static message for touch devices and narrow windows. Has no interactive
//! controls at all.

use bevy::prelude::*;

use crate::presentation::Screen;
use crate::ui::components::{ROSE_400, ROSE_600, ROSE_800};
use crate::ui::images::TextStyle;
use crate::ui::motion::view_intro;
use crate::utils::cleanup;

pub struct CompactScenePlugin;

impl Plugin for CompactScenePlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(OnEnter(Screen::Compact), spawn_compact_view)
            .add_systems(OnExit(Screen::Compact), cleanup::<CompactView>);
    }
}

/// Marker for the root of the compact view.
#[derive(Component)]
pub struct CompactView;

fn spawn_compact_view(mut commands: Commands, text_style: Res<TextStyle>) {
    commands
        .spawn((
            Node {
                width: Val::Percent(100.0),
                height: Val::Percent(100.0),
                align_items: AlignItems::Center,
                justify_content: JustifyContent::Center,
                padding: UiRect::all(Val::Px(24.0)),
                ..default()
            },
            CompactView,
            Name::new("Compact View"),
        ))
        .with_children(|root| {
            root.spawn((
                Node {
                    flex_direction: FlexDirection::Column,
                    align_items: AlignItems::Center,
                    row_gap: Val::Px(16.0),
                    max_width: Val::Px(384.0),
                    ..default()
                },
                view_intro(),
            ))
            .with_children(|content| {
                content.spawn((
                    Text::new("A Little Surprise..."),
                    text_style.font(40.0),
                    TextColor(ROSE_600),
                    TextLayout::new_with_justify(Justify::Center),
                ));
                content.spawn((
                    Text::new(
                        "This special request contains interactive magic that works best on a Laptop or Desktop.",
                    ),
                    text_style.font(18.0),
                    TextColor(ROSE_800),
                    TextLayout::new_with_justify(Justify::Center),
                ));
                content.spawn((
                    Text::new("Please open this link on your computer for the full experience!"),
                    text_style.font(14.0),
                    TextColor(ROSE_400),
                    TextLayout::new_with_justify(Justify::Center),
                ));
            });
        });
}
