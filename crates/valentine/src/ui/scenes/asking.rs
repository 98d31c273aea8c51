//! The question: picture, title, a growing "Yes" and a "No" that runs away.
//!
//! The "No" control starts inside the button row. Its first evasion lifts it
//! out of the row onto the [`InteractionSurface`] with absolute insets; from
//! then on its position is the widget's stored offset, reached through an
//! [`evasive_hop`] tween.

use bevy::prelude::*;
use valentine_core::EvasivePosition;

use crate::presentation::{Presentation, Screen, WidgetSet};
use crate::ui::components::{
    AffirmativeButton, ButtonPalette, EvasiveControl, GRAY_200, GRAY_600, InteractionSurface,
    LastInteraction, ROSE_300, ROSE_500, ROSE_600,
};
use crate::ui::images::{DecorativeImages, TextStyle};
use crate::ui::logical_bounds;
use crate::ui::motion::{EvasiveTarget, drop_finished_tweens, evasive_hop, view_intro};
use crate::utils::cleanup;

pub struct AskingScenePlugin;

impl Plugin for AskingScenePlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(OnEnter(Screen::Asking), spawn_asking_view)
            .add_systems(
                Update,
                (
                    apply_emphasis,
                    // Completions are handled first so they never remove a fresh hop.
                    place_evasive_control.after(drop_finished_tweens),
                )
                    .in_set(WidgetSet::Present)
                    .run_if(in_state(Screen::Asking)),
            )
            .add_systems(OnExit(Screen::Asking), cleanup::<AskingView>);
    }
}

/// Marker for the root of the asking view.
#[derive(Component)]
pub struct AskingView;

fn control_padding() -> UiRect {
    UiRect::axes(Val::Px(48.0), Val::Px(16.0))
}

fn spawn_asking_view(
    mut commands: Commands,
    presentation: Res<Presentation>,
    images: Res<DecorativeImages>,
    text_style: Res<TextStyle>,
) {
    let surface = commands
        .spawn((
            Node {
                width: Val::Percent(100.0),
                height: Val::Percent(100.0),
                align_items: AlignItems::Center,
                justify_content: JustifyContent::Center,
                padding: UiRect::all(Val::Px(16.0)),
                ..default()
            },
            AskingView,
            InteractionSurface,
            Name::new("Asking View"),
        ))
        .id();

    let content = commands
        .spawn((
            Node {
                flex_direction: FlexDirection::Column,
                align_items: AlignItems::Center,
                row_gap: Val::Px(32.0),
                ..default()
            },
            view_intro(),
            ZIndex(10),
            ChildOf(surface),
        ))
        .id();

    commands.spawn((
        ImageNode::new(images.question.clone()),
        Node {
            width: Val::Px(400.0),
            height: Val::Px(300.0),
            border: UiRect::all(Val::Px(4.0)),
            margin: UiRect::bottom(Val::Px(16.0)),
            ..default()
        },
        BorderColor::all(Color::WHITE),
        BorderRadius::all(Val::Px(24.0)),
        BackgroundColor(ROSE_300),
        Name::new("Question Picture"),
        ChildOf(content),
    ));

    commands.spawn((
        Text::new("Will you be my Valentine?"),
        text_style.font(56.0),
        TextColor(ROSE_600),
        TextLayout::new_with_justify(Justify::Center),
        ChildOf(content),
    ));

    let row = commands
        .spawn((
            Node {
                flex_direction: FlexDirection::Row,
                align_items: AlignItems::Center,
                justify_content: JustifyContent::Center,
                column_gap: Val::Px(32.0),
                min_height: Val::Px(192.0),
                padding: UiRect::top(Val::Px(32.0)),
                ..default()
            },
            Name::new("Button Row"),
            ChildOf(content),
        ))
        .id();

    let emphasis = presentation.emphasis().value();
    commands
        .spawn((
            Button,
            AffirmativeButton,
            LastInteraction::default(),
            ButtonPalette::AFFIRMATIVE,
            Node {
                padding: control_padding(),
                justify_content: JustifyContent::Center,
                align_items: AlignItems::Center,
                ..default()
            },
            UiTransform {
                scale: Vec2::splat(emphasis),
                ..default()
            },
            BackgroundColor(ROSE_500),
            BorderRadius::MAX,
            ZIndex(20),
            Name::new("Yes"),
            ChildOf(row),
        ))
        .with_children(|button| {
            button.spawn((Text::new("Yes!"), text_style.font(24.0), TextColor(Color::WHITE)));
        });

    // Coming back from the compact view: the control already ran away once.
    let (node, parent, target) = match presentation.evasive() {
        EvasivePosition::Natural => (
            Node {
                padding: control_padding(),
                justify_content: JustifyContent::Center,
                align_items: AlignItems::Center,
                ..default()
            },
            row,
            None,
        ),
        EvasivePosition::Offset(at) => (
            Node {
                position_type: PositionType::Absolute,
                left: Val::Px(at.x),
                top: Val::Px(at.y),
                padding: control_padding(),
                justify_content: JustifyContent::Center,
                align_items: AlignItems::Center,
                ..default()
            },
            surface,
            Some(EvasiveTarget(Vec2::new(at.x, at.y))),
        ),
    };

    let mut control = commands.spawn((
        EvasiveControl,
        node,
        BackgroundColor(GRAY_200),
        BorderRadius::MAX,
        ZIndex(30),
        Name::new("No"),
        ChildOf(parent),
    ));
    if let Some(target) = target {
        control.insert(target);
    }
    control.with_children(|no| {
        no.spawn((Text::new("No"), text_style.font(24.0), TextColor(GRAY_600)));
    });
}

fn apply_emphasis(
    presentation: Res<Presentation>,
    mut buttons: Query<&mut UiTransform, With<AffirmativeButton>>,
) {
    let scale = Vec2::splat(presentation.emphasis().value());
    for mut transform in &mut buttons {
        if transform.scale != scale {
            transform.scale = scale;
        }
    }
}

type ControlQuery<'w, 's> = Query<
    'w,
    's,
    (
        Entity,
        &'static mut Node,
        &'static ComputedNode,
        &'static UiGlobalTransform,
        &'static ChildOf,
        Option<&'static EvasiveTarget>,
    ),
    With<EvasiveControl>,
>;

/// Lifts the control onto the surface and hops it to the widget's stored
/// offset. The offset only goes back to `Natural` through reset, which
/// happens on the accepted view; the next asking view spawns fresh.
fn place_evasive_control(
    mut commands: Commands,
    presentation: Res<Presentation>,
    surface: Query<(Entity, &ComputedNode, &UiGlobalTransform), With<InteractionSurface>>,
    mut controls: ControlQuery,
) {
    let EvasivePosition::Offset(at) = presentation.evasive() else {
        return;
    };
    let Ok((surface_entity, surface_node, surface_transform)) = surface.single() else {
        return;
    };
    let surface_box = logical_bounds(surface_node, surface_transform);
    let to = Vec2::new(at.x, at.y);

    for (entity, mut node, computed, transform, child_of, target) in &mut controls {
        if target.map(|target| target.0) == Some(to) {
            continue;
        }

        // Start the hop from wherever the control is drawn right now.
        let drawn = logical_bounds(computed, transform);
        let from = if drawn.is_measurable() {
            Vec2::new(
                drawn.origin.x - surface_box.origin.x,
                drawn.origin.y - surface_box.origin.y,
            )
        } else {
            to
        };

        if child_of.parent() != surface_entity {
            commands.entity(entity).insert(ChildOf(surface_entity));
        }
        node.position_type = PositionType::Absolute;
        node.left = Val::Px(from.x);
        node.top = Val::Px(from.y);
        commands.entity(entity).insert(evasive_hop(from, to));
    }
}
