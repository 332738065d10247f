//! Text layouts: one row per string, one symbol per cell.
//!
//! `S` is steel, `B` is brick, anything else is empty ground. Rows shorter
//! than the grid pad with empty cells and missing rows are empty; the config
//! loader rejects both before a level is ever built.

use tank_core::enums::Tile;

/// Parse `rows` into a row-major tile vector of exactly `width * height`.
pub fn parse_layout<S: AsRef<str>>(rows: &[S], width: usize, height: usize) -> Vec<Tile> {
    let mut tiles = vec![Tile::Empty; width * height];
    for (row, text) in rows.iter().take(height).enumerate() {
        for (col, symbol) in text.as_ref().chars().take(width).enumerate() {
            tiles[row * width + col] = Tile::from_symbol(symbol);
        }
    }
    tiles
}

/// Render a row-major tile vector back into layout rows.
pub fn render_layout(tiles: &[Tile], width: usize) -> Vec<String> {
    if width == 0 {
        return Vec::new();
    }
    tiles
        .chunks(width)
        .map(|row| row.iter().map(|tile| tile.symbol()).collect())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_symbols() {
        let tiles = parse_layout(&["SB.", "x.B"], 3, 2);
        assert_eq!(
            tiles,
            vec![
                Tile::Indestructible,
                Tile::Destructible,
                Tile::Empty,
                Tile::Empty,
                Tile::Empty,
                Tile::Destructible,
            ]
        );
    }

    #[test]
    fn test_extra_columns_and_rows_ignored() {
        let tiles = parse_layout(&["..S", "...", "SSS"], 2, 2);
        assert_eq!(tiles, vec![Tile::Empty; 4]);
    }

    #[test]
    fn test_short_input_pads_with_empty() {
        let tiles = parse_layout(&["S"], 3, 2);
        assert_eq!(tiles[0], Tile::Indestructible);
        assert!(tiles[1..].iter().all(|t| *t == Tile::Empty));
    }

    #[test]
    fn test_render_matches_source() {
        let rows = ["SSSS", "S.B.", "SSSS"];
        let tiles = parse_layout(&rows, 4, 3);
        assert_eq!(render_layout(&tiles, 4), rows);
    }
}
