//! TileMap: the mutable tile grid every vehicle and projectile collides with.

use glam::Vec2;
use tank_core::config::GridSpec;
use tank_core::enums::Tile;
use tank_core::types::Rect;

use crate::layout;

/// Result of a projectile striking the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TileHit {
    /// The cell under the projectile is empty.
    None,
    /// A destructible tile was consumed and is now empty.
    Destroyed { col: usize, row: usize },
    /// Steel, or the outside of the grid.
    Blocked,
}

impl TileHit {
    pub fn is_hit(&self) -> bool {
        !matches!(self, TileHit::None)
    }
}

/// Fixed-size grid of tiles, row-major.
#[derive(Debug, Clone, PartialEq)]
pub struct TileMap {
    width: usize,
    height: usize,
    tile_size: f32,
    tiles: Vec<Tile>,
}

impl TileMap {
    /// All-empty grid.
    pub fn new_empty(spec: GridSpec) -> Self {
        Self {
            width: spec.width,
            height: spec.height,
            tile_size: spec.tile_size,
            tiles: vec![Tile::Empty; spec.width * spec.height],
        }
    }

    /// Build a grid from text layout rows.
    pub fn from_layout<S: AsRef<str>>(rows: &[S], spec: GridSpec) -> Self {
        Self {
            width: spec.width,
            height: spec.height,
            tile_size: spec.tile_size,
            tiles: layout::parse_layout(rows, spec.width, spec.height),
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn tile_size(&self) -> f32 {
        self.tile_size
    }

    /// Cell containing `point`, or None outside the grid.
    pub fn cell_at(&self, point: Vec2) -> Option<(usize, usize)> {
        let col = (point.x / self.tile_size).floor();
        let row = (point.y / self.tile_size).floor();
        if col.is_nan() || row.is_nan() || col < 0.0 || row < 0.0 {
            return None;
        }
        let (col, row) = (col as usize, row as usize);
        if col >= self.width || row >= self.height {
            return None;
        }
        Some((col, row))
    }

    /// Tile at a grid cell. Out of range reads as steel.
    pub fn tile_at_cell(&self, col: usize, row: usize) -> Tile {
        if col >= self.width || row >= self.height {
            return Tile::Indestructible;
        }
        self.tiles[row * self.width + col]
    }

    /// Tile under a pixel position. Outside the grid reads as steel.
    pub fn tile_at(&self, point: Vec2) -> Tile {
        match self.cell_at(point) {
            Some((col, row)) => self.tile_at_cell(col, row),
            None => Tile::Indestructible,
        }
    }

    pub fn set_tile(&mut self, col: usize, row: usize, tile: Tile) {
        if col < self.width && row < self.height {
            self.tiles[row * self.width + col] = tile;
        }
    }

    /// Whether any corner of `rect` lies on a non-empty tile.
    ///
    /// Only the four corners are sampled, so a rect wider than a tile can
    /// straddle a one-cell obstacle between its corners.
    pub fn is_blocked(&self, rect: &Rect) -> bool {
        rect.corners()
            .iter()
            .any(|corner| self.tile_at(*corner) != Tile::Empty)
    }

    /// Resolve a projectile against the cell under its centre, consuming a
    /// destructible tile.
    pub fn resolve_projectile_hit(&mut self, rect: &Rect) -> TileHit {
        let Some((col, row)) = self.cell_at(rect.center()) else {
            return TileHit::Blocked;
        };
        match self.tile_at_cell(col, row) {
            Tile::Empty => TileHit::None,
            Tile::Indestructible => TileHit::Blocked,
            Tile::Destructible => {
                self.set_tile(col, row, Tile::Empty);
                TileHit::Destroyed { col, row }
            }
        }
    }

    /// Number of cells holding `tile`.
    pub fn count(&self, tile: Tile) -> usize {
        self.tiles.iter().filter(|t| **t == tile).count()
    }

    /// Current grid as layout rows.
    pub fn to_rows(&self) -> Vec<String> {
        layout::render_layout(&self.tiles, self.width)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn spec() -> GridSpec {
        GridSpec {
            width: 4,
            height: 3,
            tile_size: 10.0,
        }
    }

    fn make_map() -> TileMap {
        TileMap::from_layout(&["SSSS", "S.B.", "...."], spec())
    }

    #[test]
    fn test_out_of_bounds_reads_as_steel() {
        let map = TileMap::new_empty(spec());
        assert_eq!(map.tile_at(Vec2::new(5.0, 5.0)), Tile::Empty);
        assert_eq!(map.tile_at(Vec2::new(-0.1, 5.0)), Tile::Indestructible);
        assert_eq!(map.tile_at(Vec2::new(5.0, -3.0)), Tile::Indestructible);
        assert_eq!(map.tile_at(Vec2::new(40.0, 5.0)), Tile::Indestructible);
        assert_eq!(map.tile_at(Vec2::new(5.0, 30.0)), Tile::Indestructible);
        assert_eq!(map.tile_at_cell(4, 0), Tile::Indestructible);
    }

    #[test]
    fn test_cell_floor_division() {
        let map = make_map();
        assert_eq!(map.cell_at(Vec2::new(0.0, 0.0)), Some((0, 0)));
        assert_eq!(map.cell_at(Vec2::new(19.99, 10.0)), Some((1, 1)));
        assert_eq!(map.cell_at(Vec2::new(20.0, 10.0)), Some((2, 1)));
        assert_eq!(map.tile_at(Vec2::new(25.0, 15.0)), Tile::Destructible);
    }

    #[test]
    fn test_is_blocked_samples_corners() {
        let map = make_map();
        // Fully inside the empty cell (1,1).
        assert!(!map.is_blocked(&Rect::new(11.0, 11.0, 8.0, 8.0)));
        // Right edge reaches the brick at (2,1).
        assert!(map.is_blocked(&Rect::new(15.0, 11.0, 8.0, 8.0)));
        // Top edge reaches steel in row 0.
        assert!(map.is_blocked(&Rect::new(11.0, 9.0, 8.0, 8.0)));
        // Leaving the grid counts as blocked.
        assert!(map.is_blocked(&Rect::new(35.0, 22.0, 8.0, 8.0)));
    }

    #[test]
    fn test_wide_rect_straddles_single_cell() {
        let map = TileMap::from_layout(&["....", "..S.", "...."], spec());
        // Corners sit in columns 1 and 3 of rows 0 and 2; the steel at (2,1)
        // falls between them.
        assert!(!map.is_blocked(&Rect::new(15.0, 5.0, 20.0, 20.0)));
    }

    #[test]
    fn test_projectile_consumes_brick_once() {
        let mut map = make_map();
        let shot = Rect::from_center(Vec2::new(25.0, 15.0), 4.0);
        assert_eq!(
            map.resolve_projectile_hit(&shot),
            TileHit::Destroyed { col: 2, row: 1 }
        );
        assert_eq!(map.tile_at(Vec2::new(25.0, 15.0)), Tile::Empty);
        assert_eq!(map.resolve_projectile_hit(&shot), TileHit::None);
        assert_eq!(map.count(Tile::Destructible), 0);
    }

    #[test]
    fn test_projectile_blocked_by_steel_and_edges() {
        let mut map = make_map();
        let steel = Rect::from_center(Vec2::new(5.0, 5.0), 4.0);
        assert_eq!(map.resolve_projectile_hit(&steel), TileHit::Blocked);
        assert_eq!(map.tile_at(Vec2::new(5.0, 5.0)), Tile::Indestructible);

        let outside = Rect::from_center(Vec2::new(45.0, 15.0), 4.0);
        assert_eq!(map.resolve_projectile_hit(&outside), TileHit::Blocked);
    }

    #[test]
    fn test_projectile_uses_centre_not_corners() {
        let mut map = make_map();
        // Corners overlap the brick at (2,1), centre is in empty (1,1).
        let shot = Rect::from_center(Vec2::new(18.0, 15.0), 6.0);
        assert_eq!(map.resolve_projectile_hit(&shot), TileHit::None);
        assert_eq!(map.count(Tile::Destructible), 1);
    }

    #[test]
    fn test_counts_and_rows() {
        let map = make_map();
        assert_eq!(map.count(Tile::Indestructible), 5);
        assert_eq!(map.count(Tile::Destructible), 1);
        assert_eq!(map.count(Tile::Empty), 6);
        assert_eq!(map.to_rows(), vec!["SSSS", "S.B.", "...."]);
    }
}
