//! Headless runs of the input and sampling systems, fed with the same
//! messages and components the windowed client produces:
//! - window resizes and touches reaching the screen
//! - cursor movement converted to surface coordinates and evaded
//! - hover / press / reset on the real buttons
//! - evasive hops surviving while earlier hops finish

use std::time::Duration;

use bevy::{
    input::touch::{TouchInput, TouchPhase},
    math::Affine2,
    prelude::*,
    state::app::StatesPlugin,
    time::TimeUpdateStrategy,
    window::{CursorMoved, PrimaryWindow, WindowResized},
};
use bevy_tweening::TweenAnim;
use valentine::{
    Presentation, PresentationPlugin, Screen, WidgetRng,
    input::InputPlugin,
    ui::{
        components::{
            AffirmativeButton, EvasiveControl, InteractionSurface, LastInteraction, ResetButton,
        },
        images::{DecorativeImages, TextStyle},
        motion::{EvasiveTarget, MotionPlugin},
        scenes::ScenePlugin,
    },
    viewport::ViewportPlugin,
};
use valentine_core::{EvasivePosition, EvasionTuning, Point, Stage, Widget};

/// Surface box in window pixels: origin (200, 100), 1000 x 800.
const SURFACE_CENTER: Vec2 = Vec2::new(700.0, 500.0);
const SURFACE_SIZE: Vec2 = Vec2::new(1000.0, 800.0);
const SURFACE_ORIGIN: Vec2 = Vec2::new(200.0, 100.0);
/// The evasive control's natural box, centred at (700, 600) in the window.
const CONTROL_CENTER: Vec2 = Vec2::new(700.0, 600.0);
const CONTROL_SIZE: Vec2 = Vec2::new(100.0, 40.0);

fn base_app() -> App {
    let mut app = App::new();
    app.add_plugins((
        MinimalPlugins,
        StatesPlugin,
        PresentationPlugin,
        ViewportPlugin,
        InputPlugin,
    ))
    .add_message::<CursorMoved>()
    .add_message::<WindowResized>()
    .add_message::<TouchInput>()
    .insert_resource(WidgetRng::seeded(7));
    app
}

/// Default primary window (1280 logical pixels wide), measured and settled.
fn open_window(app: &mut App) -> Entity {
    let window = app
        .world_mut()
        .spawn((Window::default(), PrimaryWindow))
        .id();
    settle(app);
    window
}

fn settle(app: &mut App) {
    app.update();
    app.update();
}

fn screen(app: &App) -> Screen {
    *app.world().resource::<State<Screen>>().get()
}

fn widget(app: &App) -> Widget {
    app.world().resource::<Presentation>().0.clone()
}

/// What layout would have computed for a node centred at `center`.
fn laid_out(center: Vec2, size: Vec2) -> (ComputedNode, UiGlobalTransform) {
    (
        ComputedNode {
            size,
            ..default()
        },
        UiGlobalTransform::from(Affine2::from_translation(center)),
    )
}

fn resize(app: &mut App, window: Entity, width: f32) {
    app.world_mut().write_message(WindowResized {
        window,
        width,
        height: 720.0,
    });
    settle(app);
}

fn point_at(app: &mut App, window: Entity, position: Vec2) {
    app.world_mut().write_message(CursorMoved {
        window,
        position,
        delta: None,
    });
    app.update();
}

fn interact(app: &mut App, button: Entity, interaction: Interaction) {
    *app
        .world_mut()
        .get_mut::<Interaction>(button)
        .expect("button has an interaction") = interaction;
    app.update();
}

fn spawn_affirmative(app: &mut App) -> Entity {
    app.world_mut()
        .spawn((AffirmativeButton, Interaction::None, LastInteraction::default()))
        .id()
}

/// Window-space centre of the control as the widget currently places it.
fn control_center(app: &App) -> Vec2 {
    match widget(app).evasive() {
        EvasivePosition::Natural => CONTROL_CENTER,
        EvasivePosition::Offset(at) => {
            SURFACE_ORIGIN + Vec2::new(at.x, at.y) + CONTROL_SIZE / 2.0
        }
    }
}

#[test]
fn first_frame_measures_the_primary_window() {
    let mut app = base_app();
    settle(&mut app);
    assert_eq!(screen(&app), Screen::Mounting);

    open_window(&mut app);
    assert_eq!(screen(&app), Screen::Asking);
}

#[test]
fn window_resizes_swap_views_and_keep_progress() {
    let mut app = base_app();
    let window = open_window(&mut app);
    let yes = spawn_affirmative(&mut app);
    for _ in 0..3 {
        interact(&mut app, yes, Interaction::Hovered);
        interact(&mut app, yes, Interaction::None);
    }
    assert_eq!(widget(&app).emphasis().value(), 1.75);

    resize(&mut app, window, 1024.0);
    assert_eq!(screen(&app), Screen::Asking);

    resize(&mut app, window, 600.0);
    assert_eq!(screen(&app), Screen::Compact);
    assert_eq!(widget(&app).emphasis().value(), 1.75);

    resize(&mut app, window, 1280.0);
    assert_eq!(screen(&app), Screen::Asking);
    assert_eq!(widget(&app).emphasis().value(), 1.75);
}

#[test]
fn resizes_of_other_windows_are_ignored() {
    let mut app = base_app();
    let window = open_window(&mut app);
    let other = app.world_mut().spawn(Window::default()).id();

    resize(&mut app, other, 320.0);
    assert_eq!(screen(&app), Screen::Asking);

    resize(&mut app, window, 320.0);
    assert_eq!(screen(&app), Screen::Compact);
}

#[test]
fn touch_input_turns_the_session_compact() {
    let mut app = base_app();
    let window = open_window(&mut app);

    app.world_mut().write_message(TouchInput {
        phase: TouchPhase::Started,
        position: Vec2::new(10.0, 10.0),
        window,
        force: None,
        id: 0,
    });
    settle(&mut app);
    assert_eq!(screen(&app), Screen::Compact);

    // Sticky: widening the window does not bring the question back.
    resize(&mut app, window, 1920.0);
    assert_eq!(screen(&app), Screen::Compact);
}

#[test]
fn only_entering_the_button_grows_it() {
    let mut app = base_app();
    open_window(&mut app);
    let yes = spawn_affirmative(&mut app);

    interact(&mut app, yes, Interaction::Hovered);
    assert_eq!(widget(&app).emphasis().value(), 1.25);

    interact(&mut app, yes, Interaction::None);
    interact(&mut app, yes, Interaction::Hovered);
    assert_eq!(widget(&app).emphasis().value(), 1.5);

    // Pressing while hovered accepts without another step.
    interact(&mut app, yes, Interaction::Pressed);
    assert_eq!(widget(&app).stage(), Stage::Accepted);
    assert_eq!(widget(&app).emphasis().value(), 1.5);

    settle(&mut app);
    assert_eq!(screen(&app), Screen::Accepted);
}

#[test]
fn start_over_restores_the_question() {
    let mut app = base_app();
    open_window(&mut app);
    let yes = spawn_affirmative(&mut app);
    interact(&mut app, yes, Interaction::Pressed);
    // The accepted view replaces the question's buttons.
    app.world_mut().despawn(yes);
    settle(&mut app);
    assert_eq!(screen(&app), Screen::Accepted);

    let again = app
        .world_mut()
        .spawn((ResetButton, Interaction::None))
        .id();
    interact(&mut app, again, Interaction::Hovered);
    assert_eq!(widget(&app).stage(), Stage::Accepted);

    interact(&mut app, again, Interaction::Pressed);
    settle(&mut app);
    assert_eq!(screen(&app), Screen::Asking);
    assert_eq!(widget(&app), Widget::default());
}

#[test]
fn cursor_is_measured_against_the_surface() {
    let mut app = base_app();
    let window = open_window(&mut app);
    app.world_mut()
        .spawn((InteractionSurface, laid_out(SURFACE_CENTER, SURFACE_SIZE)));
    app.world_mut()
        .spawn((EvasiveControl, laid_out(CONTROL_CENTER, CONTROL_SIZE)));

    // (500, 500) in the window is (300, 400) on the surface, 223 px from the
    // control's centre at (500, 500).
    point_at(&mut app, window, Vec2::new(500.0, 500.0));
    assert_eq!(widget(&app).evasive(), EvasivePosition::Natural);

    point_at(&mut app, window, CONTROL_CENTER);
    let EvasivePosition::Offset(first) = widget(&app).evasive() else {
        panic!("the control should have moved");
    };
    let margin = EvasionTuning::default().margin;
    assert!((margin..=SURFACE_SIZE.x - CONTROL_SIZE.x - margin).contains(&first.x));
    assert!((margin..=SURFACE_SIZE.y - CONTROL_SIZE.y - margin).contains(&first.y));

    // Layout still reports the natural box; the stored offset is what counts.
    let center = control_center(&app);
    point_at(&mut app, window, center);
    let second = widget(&app).evasive().offset().expect("still offset");
    assert_ne!(second, first);
}

#[test]
fn cursor_without_a_surface_is_dropped() {
    let mut app = base_app();
    let window = open_window(&mut app);
    app.world_mut()
        .spawn((EvasiveControl, laid_out(CONTROL_CENTER, CONTROL_SIZE)));

    point_at(&mut app, window, CONTROL_CENTER);
    assert_eq!(widget(&app).evasive(), EvasivePosition::Natural);
}

#[test]
fn hops_keep_animating_while_earlier_ones_finish() {
    let mut app = base_app();
    app.add_plugins((MotionPlugin, ScenePlugin))
        .insert_resource(TimeUpdateStrategy::ManualDuration(Duration::from_millis(100)))
        .insert_resource(DecorativeImages {
            question: Handle::default(),
            success: Handle::default(),
        })
        .init_resource::<TextStyle>();
    let window = open_window(&mut app);
    assert_eq!(screen(&app), Screen::Asking);

    // Layout does not run headless; give the spawned view its boxes.
    let world = app.world_mut();
    let surface = world
        .query_filtered::<Entity, With<InteractionSurface>>()
        .single(world)
        .expect("asking view has a surface");
    let control = world
        .query_filtered::<Entity, With<EvasiveControl>>()
        .single(world)
        .expect("asking view has an evasive control");
    world
        .entity_mut(surface)
        .insert(laid_out(SURFACE_CENTER, SURFACE_SIZE));
    world
        .entity_mut(control)
        .insert(laid_out(CONTROL_CENTER, CONTROL_SIZE));

    // Each gap lands the next hop at a different point of the previous
    // hop's 150 ms tween, including the frame its completion is handled.
    for idle_frames in 0..5 {
        let center = control_center(&app);
        point_at(&mut app, window, center);

        let Point { x, y } = widget(&app).evasive().offset().expect("control moved");
        let world = app.world();
        assert_eq!(
            world.get::<EvasiveTarget>(control),
            Some(&EvasiveTarget(Vec2::new(x, y)))
        );
        assert!(
            world.get::<TweenAnim>(control).is_some(),
            "hop after {idle_frames} idle frame(s) lost its tween"
        );

        for _ in 0..idle_frames {
            app.update();
        }
    }
}
