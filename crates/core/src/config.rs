//! Game configuration
//!
//! Supplied once at initialization and never reloaded mid-session. Every field has a default, so
//! a configuration file only needs to name what it changes:
//!
//! ```
//! use blockfall_core::GameConfig;
//!
//! let config = GameConfig::from_json_str(r#"{ "width": 8, "step_delay_ms": 250 }"#).unwrap();
//! let rules = config.build().unwrap();
//! assert_eq!(rules.bounds.width, 8);
//! assert_eq!(rules.catalog.len(), 7);
//! ```

use std::path::Path;

use serde::Deserialize;

use crate::board::Bounds;
use crate::catalog::{ShapeCatalog, ShapeDef};
use crate::collision::absolute;
use crate::error::ConfigError;
use crate::types::{Offset, BOARD_HEIGHT, BOARD_WIDTH, LOCK_DELAY_MS, SPAWN_POSITION, STEP_DELAY_MS};

/// Largest accepted board, in cells
pub const MAX_BOARD_CELLS: i32 = 1 << 20;

/// Raw configuration, as read from JSON
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    pub width: i32,
    pub height: i32,
    pub spawn: Offset,
    pub step_delay_ms: u32,
    pub lock_delay_ms: u32,
    /// Custom shape definitions; the standard catalog is used when absent
    pub shapes: Option<Vec<ShapeDef>>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            width: BOARD_WIDTH,
            height: BOARD_HEIGHT,
            spawn: SPAWN_POSITION,
            step_delay_ms: STEP_DELAY_MS,
            lock_delay_ms: LOCK_DELAY_MS,
            shapes: None,
        }
    }
}

impl GameConfig {
    pub fn from_json_str(s: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(s)?)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path)?;
        Self::from_json_str(&text)
    }

    /// Validate into the fixed rules of a session
    pub fn build(&self) -> Result<Rules, ConfigError> {
        if self.width <= 0 || self.height <= 0 {
            return Err(ConfigError::NonPositiveBoard {
                width: self.width,
                height: self.height,
            });
        }
        match self.width.checked_mul(self.height) {
            Some(cells) if cells <= MAX_BOARD_CELLS => {}
            _ => {
                return Err(ConfigError::BoardTooLarge {
                    width: self.width,
                    height: self.height,
                    max: MAX_BOARD_CELLS,
                })
            }
        }
        if self.step_delay_ms == 0 {
            return Err(ConfigError::ZeroDelay {
                name: "step_delay_ms",
            });
        }
        if self.lock_delay_ms == 0 {
            return Err(ConfigError::ZeroDelay {
                name: "lock_delay_ms",
            });
        }

        let catalog = match &self.shapes {
            Some(defs) => ShapeCatalog::new(defs.clone())?,
            None => ShapeCatalog::standard(),
        };

        let bounds = Bounds::centered(self.width, self.height);
        for shape in catalog.iter() {
            let cells = absolute(&shape.cells(), self.spawn);
            if !cells.iter().all(|&(x, y)| bounds.contains(x, y)) {
                return Err(ConfigError::SpawnOutOfBounds {
                    kind: shape.kind(),
                    spawn: self.spawn,
                });
            }
        }

        Ok(Rules {
            bounds,
            spawn: self.spawn,
            step_delay_ms: self.step_delay_ms,
            lock_delay_ms: self.lock_delay_ms,
            catalog,
        })
    }
}

/// Validated session rules
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rules {
    pub bounds: Bounds,
    pub spawn: Offset,
    pub step_delay_ms: u32,
    pub lock_delay_ms: u32,
    pub catalog: ShapeCatalog,
}

impl Default for Rules {
    fn default() -> Self {
        Self {
            bounds: Bounds::centered(BOARD_WIDTH, BOARD_HEIGHT),
            spawn: SPAWN_POSITION,
            step_delay_ms: STEP_DELAY_MS,
            lock_delay_ms: LOCK_DELAY_MS,
            catalog: ShapeCatalog::standard(),
        }
    }
}
