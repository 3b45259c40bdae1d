//! Text-grid scene description.
//!
//! A scene is a JSON file whose `grid` rows describe the level one world unit
//! per character:
//!
//! - `#` – solid tile
//! - `H` – smash hammer (spawned at that cell, hanging from above)
//! - `.` or space – empty
//!
//! ```json
//! {
//!   "grid": [
//!     "########",
//!     "#..H...#",
//!     "#......#",
//!     "########"
//!   ],
//!   "viewport": { "x": 0, "y": 0, "width": 8, "height": 4 }
//! }
//! ```

use serde::{Deserialize, Serialize};

use crate::components::mapposition::MapPosition;
use crate::resources::collision::CollisionMap;
use crate::resources::viewport::Viewport;

pub const SOLID_CELL: char = '#';
pub const HAMMER_CELL: char = 'H';

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub struct ViewportSpec {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct SceneLayout {
    pub grid: Vec<String>,
    #[serde(default)]
    pub viewport: Option<ViewportSpec>,
}

impl SceneLayout {
    pub fn load_from_file(path: &str) -> Result<Self, String> {
        let json = std::fs::read_to_string(path)
            .map_err(|e| format!("Failed to read scene {}: {}", path, e))?;
        Self::from_json_str(&json).map_err(|e| format!("{} ({})", e, path))
    }

    pub fn from_json_str(json: &str) -> Result<Self, String> {
        let layout: SceneLayout =
            serde_json::from_str(json).map_err(|e| format!("Invalid scene JSON: {}", e))?;
        if layout.grid.is_empty() {
            return Err("Scene grid is empty".to_string());
        }
        Ok(layout)
    }

    /// Small demo room: one hammer over open floor, one over a ledge.
    pub fn builtin() -> Self {
        let rows = [
            "################",
            "#...H......H...#",
            "#..............#",
            "#..............#",
            "#..........##..#",
            "#..............#",
            "#..............#",
            "#..............#",
            "#..............#",
            "################",
        ];
        Self {
            grid: rows.iter().map(|row| row.to_string()).collect(),
            viewport: None,
        }
    }

    pub fn width(&self) -> i32 {
        self.grid
            .iter()
            .map(|row| row.chars().count())
            .max()
            .unwrap_or(0) as i32
    }

    pub fn height(&self) -> i32 {
        self.grid.len() as i32
    }

    /// Iterate `(x, y, cell)` over every character of the grid.
    pub fn iter_cells(&self) -> impl Iterator<Item = (i32, i32, char)> + '_ {
        self.grid.iter().enumerate().flat_map(|(y, row)| {
            row.chars()
                .enumerate()
                .map(move |(x, cell)| (x as i32, y as i32, cell))
        })
    }

    pub fn collision_map(&self) -> CollisionMap {
        let mut map = CollisionMap::new(self.width(), self.height());
        for (x, y, cell) in self.iter_cells() {
            if cell == SOLID_CELL {
                map.set_solid(x, y, true);
            }
        }
        map
    }

    pub fn hammer_positions(&self) -> Vec<MapPosition> {
        self.iter_cells()
            .filter(|(_, _, cell)| *cell == HAMMER_CELL)
            .map(|(x, y, _)| MapPosition::new(x, y))
            .collect()
    }

    /// Viewport from the file, or one covering the whole grid.
    pub fn viewport(&self) -> Viewport {
        match self.viewport {
            Some(spec) => Viewport::new(spec.x, spec.y, spec.width, spec.height),
            None => Viewport::new(0, 0, self.width(), self.height()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_scene_has_two_hammers() {
        let scene = SceneLayout::builtin();
        assert_eq!(
            scene.hammer_positions(),
            vec![MapPosition::new(4, 1), MapPosition::new(11, 1)]
        );
        assert_eq!(scene.width(), 16);
        assert_eq!(scene.height(), 10);
    }

    #[test]
    fn test_collision_map_marks_walls_only() {
        let map = SceneLayout::builtin().collision_map();
        assert!(map.is_solid(0, 0));
        assert!(map.is_solid(11, 4));
        assert!(!map.is_solid(4, 1));
        assert!(!map.is_solid(4, 8));
    }

    #[test]
    fn test_parse_with_viewport() {
        // Rows contain `"###`, so the raw string needs four hashes.
        let json = r####"{ "grid": ["###", "#H#"], "viewport": { "x": 1, "y": 0, "width": 2, "height": 2 } }"####;
        let scene = SceneLayout::from_json_str(json).unwrap();
        assert_eq!(scene.viewport(), Viewport::new(1, 0, 2, 2));
        assert_eq!(scene.hammer_positions(), vec![MapPosition::new(1, 1)]);
    }

    #[test]
    fn test_rejects_empty_grid_and_bad_json() {
        assert!(SceneLayout::from_json_str(r#"{ "grid": [] }"#).is_err());
        assert!(SceneLayout::from_json_str("not json").is_err());
        assert!(SceneLayout::load_from_file("/nonexistent/scene.json").is_err());
    }
}
