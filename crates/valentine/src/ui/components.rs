use bevy::prelude::*;

/// Rose palette shared by all views.
pub const ROSE_50: Color = Color::srgb(1.0, 0.945, 0.949);
pub const ROSE_100: Color = Color::srgb(1.0, 0.894, 0.902);
pub const ROSE_200: Color = Color::srgb(0.996, 0.804, 0.827);
pub const ROSE_300: Color = Color::srgb(0.992, 0.643, 0.686);
pub const ROSE_400: Color = Color::srgb(0.984, 0.443, 0.522);
pub const ROSE_500: Color = Color::srgb(0.957, 0.247, 0.369);
pub const ROSE_600: Color = Color::srgb(0.882, 0.114, 0.282);
pub const ROSE_800: Color = Color::srgb(0.624, 0.071, 0.224);
pub const GRAY_200: Color = Color::srgb(0.898, 0.906, 0.922);
pub const GRAY_600: Color = Color::srgb(0.294, 0.333, 0.388);
pub const HEART_TINT: Color = Color::srgba(0.992, 0.643, 0.686, 0.5);

/// The click target that accepts the prompt ("Yes").
#[derive(Component)]
pub struct AffirmativeButton;

/// The control that runs from the pointer ("No"). Has no `Interaction`,
/// so it can never be clicked.
#[derive(Component)]
pub struct EvasiveControl;

/// The full-window node that evasion offsets are relative to.
#[derive(Component)]
pub struct InteractionSurface;

/// "Start Over?" on the accepted view.
#[derive(Component)]
pub struct ResetButton;

/// Background colors for the three interaction states.
#[derive(Component, Clone, Copy)]
pub struct ButtonPalette {
    pub normal: Color,
    pub hovered: Color,
    pub pressed: Color,
}

impl ButtonPalette {
    pub const AFFIRMATIVE: Self = Self {
        normal: ROSE_500,
        hovered: ROSE_600,
        pressed: ROSE_800,
    };

    pub const RESET: Self = Self {
        normal: Color::NONE,
        hovered: ROSE_100,
        pressed: ROSE_200,
    };

    pub fn color_for(&self, interaction: Interaction) -> Color {
        match interaction {
            Interaction::Pressed => self.pressed,
            Interaction::Hovered => self.hovered,
            Interaction::None => self.normal,
        }
    }
}

/// Interaction seen on the previous change, to tell "entered" from
/// "pressed while already hovering".
#[derive(Component, Default)]
pub struct LastInteraction(pub Interaction);
