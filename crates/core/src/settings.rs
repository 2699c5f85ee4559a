//! Session settings and their validated construction.
//!
//! [`Config`] holds raw user-supplied values. [`Config::build`] validates
//! them and loads the level, producing the [`Settings`] snapshot the renderer
//! reads and the input loop mutates between frames.

use std::path::PathBuf;

use crate::level::{Level, LevelFormatError};
use crate::player::{Camera, Player, Screen};
use crate::types::{
    Action, FillMode, DEFAULT_CAMERA_DISTANCE, DEFAULT_CAMERA_WIDTH, DEFAULT_LEVEL_PATH,
    DEFAULT_SCREEN_HEIGHT, DEFAULT_SCREEN_WIDTH, TURN_STEP_DEGREES,
};
use crate::world::World;

/// Invalid session configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigurationError {
    #[error("{field} must be positive, got {value}")]
    NonPositive { field: &'static str, value: String },
    #[error("{field} is too large: {value}")]
    TooLarge { field: &'static str, value: i64 },
    #[error("could not create world from {path}: {source}")]
    Level {
        path: PathBuf,
        #[source]
        source: LevelFormatError,
    },
}

/// Raw configuration as given on the command line.
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub screen_width: i64,
    pub screen_height: i64,
    pub camera_distance: f32,
    pub camera_width: f32,
    pub level_path: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            screen_width: DEFAULT_SCREEN_WIDTH as i64,
            screen_height: DEFAULT_SCREEN_HEIGHT as i64,
            camera_distance: DEFAULT_CAMERA_DISTANCE,
            camera_width: DEFAULT_CAMERA_WIDTH,
            level_path: PathBuf::from(DEFAULT_LEVEL_PATH),
        }
    }
}

impl Config {
    /// Validate screen and camera parameters.
    pub fn validate(&self) -> Result<(Screen, Camera), ConfigurationError> {
        let width = cells("screen width", self.screen_width)?;
        let height = cells("screen height", self.screen_height)?;
        let distance = positive_len("camera distance", self.camera_distance)?;
        let camera_width = positive_len("camera width", self.camera_width)?;

        tracing::info!(width, height, "screen size set");
        tracing::info!(distance, width = camera_width, "camera set");

        Ok((
            Screen::new(width, height),
            Camera {
                distance,
                width: camera_width,
            },
        ))
    }

    /// Validate and load the level into a ready session.
    pub fn build(&self) -> Result<Settings, ConfigurationError> {
        let (screen, camera) = self.validate()?;
        let level = Level::load(&self.level_path).map_err(|source| ConfigurationError::Level {
            path: self.level_path.clone(),
            source,
        })?;
        Ok(Settings::new(level, screen, camera))
    }
}

fn cells(field: &'static str, value: i64) -> Result<u16, ConfigurationError> {
    if value <= 0 {
        return Err(ConfigurationError::NonPositive {
            field,
            value: value.to_string(),
        });
    }
    u16::try_from(value).map_err(|_| ConfigurationError::TooLarge { field, value })
}

fn positive_len(field: &'static str, value: f32) -> Result<f32, ConfigurationError> {
    if value.is_finite() && value > 0.0 {
        Ok(value)
    } else {
        Err(ConfigurationError::NonPositive {
            field,
            value: value.to_string(),
        })
    }
}

/// Everything one render reads.
#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
    pub player: Player,
    pub world: World,
    pub screen: Screen,
    pub camera: Camera,
    pub minimap: bool,
    pub mode: FillMode,
}

impl Settings {
    pub fn new(level: Level, screen: Screen, camera: Camera) -> Self {
        Self {
            player: Player::new(level.start),
            world: level.world,
            screen,
            camera,
            minimap: false,
            mode: FillMode::default(),
        }
    }

    pub fn toggle_minimap(&mut self) {
        self.minimap = !self.minimap;
    }

    pub fn cycle_fill_mode(&mut self) {
        self.mode = self.mode.next();
        tracing::debug!(mode = self.mode.as_str(), "fill mode changed");
    }

    /// Apply one input action.
    pub fn apply(&mut self, action: Action) {
        match action {
            Action::StepForward => self.player.step_forward(),
            Action::StepBackward => self.player.step_backward(),
            Action::StrafeLeft => self.player.strafe_left(),
            Action::StrafeRight => self.player.strafe_right(),
            Action::TurnPositive => self.player.turn(TURN_STEP_DEGREES),
            Action::TurnNegative => self.player.turn(-TURN_STEP_DEGREES),
            Action::ToggleMinimap => self.toggle_minimap(),
            Action::CycleFillMode => self.cycle_fill_mode(),
        }
        tracing::debug!(?action, position = ?self.player.position, "action applied");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Vec2;

    fn settings() -> Settings {
        let level = Level::parse("3\n3\n###\n# #\n###\n1\n1\n").unwrap();
        Settings::new(level, Screen::default(), Camera::default())
    }

    #[test]
    fn defaults_match_the_classic_session() {
        let (screen, camera) = Config::default().validate().unwrap();
        assert_eq!(screen, Screen::new(75, 25));
        assert_eq!(camera, Camera::default());
        assert_eq!(Config::default().level_path, PathBuf::from("level"));
    }

    #[test]
    fn non_positive_values_are_rejected() {
        let bad = [
            Config {
                screen_width: 0,
                ..Config::default()
            },
            Config {
                screen_height: -3,
                ..Config::default()
            },
            Config {
                camera_distance: 0.0,
                ..Config::default()
            },
            Config {
                camera_width: f32::NAN,
                ..Config::default()
            },
        ];
        for cfg in bad {
            assert!(matches!(
                cfg.validate(),
                Err(ConfigurationError::NonPositive { .. })
            ));
        }
    }

    #[test]
    fn oversized_screen_is_rejected() {
        let cfg = Config {
            screen_width: 70_000,
            ..Config::default()
        };
        assert!(matches!(
            cfg.validate(),
            Err(ConfigurationError::TooLarge {
                field: "screen width",
                ..
            })
        ));
    }

    #[test]
    fn missing_level_surfaces_as_configuration_error() {
        let cfg = Config {
            level_path: PathBuf::from("/no/such/level"),
            ..Config::default()
        };
        assert!(matches!(
            cfg.build(),
            Err(ConfigurationError::Level {
                source: LevelFormatError::Io(_),
                ..
            })
        ));
    }

    #[test]
    fn new_session_faces_up_without_minimap() {
        let s = settings();
        assert_eq!(s.player.position, Vec2::new(1.0, 1.0));
        assert_eq!(s.player.direction, Vec2::new(0.0, -1.0));
        assert!(!s.minimap);
        assert_eq!(s.mode, FillMode::Characters);
    }

    #[test]
    fn actions_mutate_the_session() {
        let mut s = settings();
        s.apply(Action::ToggleMinimap);
        assert!(s.minimap);
        s.apply(Action::ToggleMinimap);
        assert!(!s.minimap);

        s.apply(Action::CycleFillMode);
        assert_eq!(s.mode, FillMode::ColouredCharacters);

        s.apply(Action::StepForward);
        assert_eq!(s.player.position, Vec2::new(1.0, 0.0));
        s.apply(Action::StepBackward);
        assert_eq!(s.player.position, Vec2::new(1.0, 1.0));

        s.apply(Action::TurnPositive);
        assert!(s.player.direction.x > 0.0);
        s.apply(Action::TurnNegative);
        s.apply(Action::TurnNegative);
        assert!(s.player.direction.x < 0.0);
    }
}
