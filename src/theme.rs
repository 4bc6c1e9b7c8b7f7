//! Theme palettes and the eased transition between them.

use std::fmt;

use crate::color::Color;
use crate::util::{lerp, sanitize_delta, smoothstep};

/// Seconds a theme switch takes when the caller does not ask for a duration.
pub const DEFAULT_THEME_TRANSITION: f32 = 0.45;

/// Identifies one of the built-in palettes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ThemeKind {
    #[default]
    Dark,
    Light,
}

impl ThemeKind {
    pub const ALL: [ThemeKind; 2] = [ThemeKind::Dark, ThemeKind::Light];

    pub fn name(self) -> &'static str {
        match self {
            ThemeKind::Dark => "Dark",
            ThemeKind::Light => "Light",
        }
    }

    pub fn palette(self) -> &'static Palette {
        match self {
            ThemeKind::Dark => &Palette::DARK,
            ThemeKind::Light => &Palette::LIGHT,
        }
    }

    /// The other built-in theme.
    pub fn toggled(self) -> Self {
        match self {
            ThemeKind::Dark => ThemeKind::Light,
            ThemeKind::Light => ThemeKind::Dark,
        }
    }
}

impl fmt::Display for ThemeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// The color slots a palette provides to UI painters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ColorRole {
    Background,
    Panel,
    Accent,
    Text,
    MutedText,
    MenuBackground,
    MenuHover,
}

impl ColorRole {
    /// Every role, in declaration order.
    pub const ALL: [ColorRole; 7] = [
        ColorRole::Background,
        ColorRole::Panel,
        ColorRole::Accent,
        ColorRole::Text,
        ColorRole::MutedText,
        ColorRole::MenuBackground,
        ColorRole::MenuHover,
    ];
}

/// A set of UI colors plus the two scalars that modulate the idle sweep.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Palette {
    pub background: Color,
    pub panel: Color,
    pub accent: Color,
    pub text: Color,
    pub muted_text: Color,
    pub menu_background: Color,
    pub menu_hover: Color,
    /// Scales the brightness pulse added on top of the sweep.
    pub idle_gain: f32,
    /// Multiplies the tinted sweep before the pulse is added.
    pub idle_intensity: f32,
}

impl Palette {
    pub const DARK: Palette = Palette {
        background: Color::rgb(0.08, 0.09, 0.11),
        panel: Color::rgb(0.13, 0.14, 0.17),
        accent: Color::rgb(0.43, 0.70, 1.0),
        text: Color::rgb(0.92, 0.93, 0.95),
        muted_text: Color::rgb(0.60, 0.63, 0.68),
        menu_background: Color::rgb(0.16, 0.17, 0.20),
        menu_hover: Color::rgb(0.24, 0.30, 0.40),
        idle_gain: 1.6,
        idle_intensity: 0.7,
    };

    pub const LIGHT: Palette = Palette {
        background: Color::rgb(0.95, 0.96, 0.97),
        panel: Color::rgb(0.88, 0.90, 0.93),
        accent: Color::rgb(0.20, 0.48, 0.72),
        text: Color::rgb(0.10, 0.11, 0.13),
        muted_text: Color::rgb(0.40, 0.43, 0.48),
        menu_background: Color::rgb(0.92, 0.93, 0.95),
        menu_hover: Color::rgb(0.78, 0.85, 0.93),
        idle_gain: 3.0,
        idle_intensity: 1.0,
    };

    pub fn color(&self, role: ColorRole) -> Color {
        match role {
            ColorRole::Background => self.background,
            ColorRole::Panel => self.panel,
            ColorRole::Accent => self.accent,
            ColorRole::Text => self.text,
            ColorRole::MutedText => self.muted_text,
            ColorRole::MenuBackground => self.menu_background,
            ColorRole::MenuHover => self.menu_hover,
        }
    }

    pub fn color_mut(&mut self, role: ColorRole) -> &mut Color {
        match role {
            ColorRole::Background => &mut self.background,
            ColorRole::Panel => &mut self.panel,
            ColorRole::Accent => &mut self.accent,
            ColorRole::Text => &mut self.text,
            ColorRole::MutedText => &mut self.muted_text,
            ColorRole::MenuBackground => &mut self.menu_background,
            ColorRole::MenuHover => &mut self.menu_hover,
        }
    }

    /// Blends every color role and both scalars from `self` toward `other`.
    pub fn lerp(&self, other: &Palette, t: f32) -> Palette {
        let mut blended = *self;
        for role in ColorRole::ALL {
            *blended.color_mut(role) = self.color(role).lerp(other.color(role), t);
        }
        blended.idle_gain = lerp(self.idle_gain, other.idle_gain, t);
        blended.idle_intensity = lerp(self.idle_intensity, other.idle_intensity, t);
        blended
    }
}

impl Default for Palette {
    fn default() -> Self {
        Palette::DARK
    }
}

/// Holds the live palette and morphs it toward a newly selected theme.
///
/// A switch requested mid-transition starts from the palette currently on
/// screen, so the colors never jump. Once a transition completes, the live
/// palette is exactly the target palette.
///
/// # Examples
///
/// ```
/// use idle_sweep::{Palette, ThemeKind, ThemeTransitioner};
///
/// let mut theme = ThemeTransitioner::new(ThemeKind::Dark);
/// theme.switch_to(ThemeKind::Light, 0.45);
/// theme.update(0.2);
/// assert!(theme.is_transitioning());
///
/// theme.update(0.3);
/// assert_eq!(theme.current(), &Palette::LIGHT);
/// ```
#[derive(Debug, Clone)]
pub struct ThemeTransitioner {
    start: Palette,
    target: Palette,
    target_kind: ThemeKind,
    current: Palette,
    elapsed: f32,
    duration: f32,
}

impl ThemeTransitioner {
    /// Starts settled on `kind`, with no transition pending.
    pub fn new(kind: ThemeKind) -> Self {
        let palette = *kind.palette();
        Self {
            start: palette,
            target: palette,
            target_kind: kind,
            current: palette,
            elapsed: DEFAULT_THEME_TRANSITION,
            duration: DEFAULT_THEME_TRANSITION,
        }
    }

    /// Begins morphing toward `kind` over `duration_seconds`.
    ///
    /// A non-positive or non-finite duration uses [`DEFAULT_THEME_TRANSITION`].
    pub fn switch_to(&mut self, kind: ThemeKind, duration_seconds: f32) {
        let duration = if duration_seconds.is_finite() && duration_seconds > 0.0 {
            duration_seconds
        } else {
            DEFAULT_THEME_TRANSITION
        };

        log::debug!(
            "Switching theme {} -> {} over {duration:.3}s (interrupting: {})",
            self.target_kind,
            kind,
            self.is_transitioning()
        );

        self.start = self.current;
        self.target = *kind.palette();
        self.target_kind = kind;
        self.elapsed = 0.0;
        self.duration = duration;
    }

    /// Switches to the other theme. Returns the newly targeted kind.
    pub fn toggle(&mut self, duration_seconds: f32) -> ThemeKind {
        let next = self.target_kind.toggled();
        self.switch_to(next, duration_seconds);
        next
    }

    pub fn update(&mut self, delta_seconds: f32) {
        if !self.is_transitioning() {
            return;
        }

        self.elapsed = (self.elapsed + sanitize_delta(delta_seconds)).min(self.duration);
        if self.elapsed >= self.duration {
            self.current = self.target;
            return;
        }

        let t = smoothstep(self.elapsed / self.duration);
        self.current = self.start.lerp(&self.target, t);
    }

    pub fn current(&self) -> &Palette {
        &self.current
    }

    /// The theme being transitioned to, or the settled theme.
    pub fn target_kind(&self) -> ThemeKind {
        self.target_kind
    }

    pub fn is_transitioning(&self) -> bool {
        self.elapsed < self.duration
    }

    /// Linear progress of the current transition, `1.0` when settled.
    pub fn progress(&self) -> f32 {
        self.elapsed / self.duration
    }
}

impl Default for ThemeTransitioner {
    fn default() -> Self {
        Self::new(ThemeKind::default())
    }
}
