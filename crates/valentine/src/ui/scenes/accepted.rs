use bevy::prelude::*;

use crate::presentation::Screen;
use crate::ui::components::{ButtonPalette, ROSE_300, ROSE_400, ROSE_500, ROSE_600, ResetButton};
use crate::ui::images::{DecorativeImages, TextStyle};
use crate::ui::motion::view_intro;
use crate::utils::cleanup;

pub struct AcceptedScenePlugin;

impl Plugin for AcceptedScenePlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(OnEnter(Screen::Accepted), spawn_accepted_view)
            .add_systems(OnExit(Screen::Accepted), cleanup::<AcceptedView>);
    }
}

/// Marker for the root of the accepted view.
#[derive(Component)]
pub struct AcceptedView;

fn spawn_accepted_view(
    mut commands: Commands,
    images: Res<DecorativeImages>,
    text_style: Res<TextStyle>,
) {
    commands
        .spawn((
            Node {
                width: Val::Percent(100.0),
                height: Val::Percent(100.0),
                align_items: AlignItems::Center,
                justify_content: JustifyContent::Center,
                padding: UiRect::all(Val::Px(16.0)),
                ..default()
            },
            AcceptedView,
            Name::new("Accepted View"),
        ))
        .with_children(|root| {
            root.spawn((
                Node {
                    flex_direction: FlexDirection::Column,
                    align_items: AlignItems::Center,
                    row_gap: Val::Px(24.0),
                    ..default()
                },
                view_intro(),
            ))
            .with_children(|content| {
                content.spawn((
                    ImageNode::new(images.success.clone()),
                    Node {
                        width: Val::Px(256.0),
                        height: Val::Px(256.0),
                        border: UiRect::all(Val::Px(8.0)),
                        margin: UiRect::bottom(Val::Px(8.0)),
                        ..default()
                    },
                    BorderColor::all(ROSE_300),
                    BorderRadius::MAX,
                    BackgroundColor(ROSE_300),
                    Name::new("Success Picture"),
                ));

                content.spawn((
                    Text::new("Yay! I knew it! ♥"),
                    text_style.font(64.0),
                    TextColor(ROSE_600),
                    TextLayout::new_with_justify(Justify::Center),
                ));

                content.spawn((
                    Text::new("You've made me the happiest person today."),
                    text_style.font(24.0),
                    TextColor(ROSE_400),
                    TextLayout::new_with_justify(Justify::Center),
                ));

                content
                    .spawn((
                        Button,
                        ResetButton,
                        ButtonPalette::RESET,
                        Node {
                            margin: UiRect::top(Val::Px(48.0)),
                            padding: UiRect::axes(Val::Px(16.0), Val::Px(6.0)),
                            ..default()
                        },
                        BackgroundColor(ButtonPalette::RESET.normal),
                        BorderRadius::all(Val::Px(8.0)),
                        Name::new("Start Over"),
                    ))
                    .with_children(|button| {
                        button.spawn((
                            Text::new("Start Over?"),
                            text_style.font(14.0),
                            TextColor(ROSE_500),
                        ));
                    });
            });
        });
}
