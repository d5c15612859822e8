//! Sample map and text rendering shared by the demo binary.
//!
//! Maps are drawn as text, one line per row: `#` is a wall, `.` is floor,
//! `S` and `G` mark the start and goal (both on floor).

use gridstar_core::{Coord, GridError, OccupancyGrid, PASSABLE};
use thiserror::Error;

const WALL: i32 = 0;

pub const MAP: &str = "\
##############################
#S.......#..........#........#
#.######.#.########.#.######.#
#.#....#.#.#......#.#.#....#.#
#.#.##.#...#.####.#...#.##.#.#
#.#.#..#####.#..#.#####.#..#.#
#...#.......#..#.......#.#...#
#####.#####.####.#####.#.#####
#.....#...#......#...#.#.....#
#.#####.#.########.#.#.#####.#
#.......#..........#.......G.#
##############################";

#[derive(Error, Debug)]
pub enum ScenarioError {
    #[error(transparent)]
    Grid(#[from] GridError),

    #[error("unknown tile {ch:?} at column {col}, row {row}")]
    UnknownTile { ch: char, col: usize, row: usize },

    #[error("map has no {0:?} marker")]
    MissingMarker(char),
}

/// A grid with a start and a goal.
#[derive(Debug, Clone)]
pub struct Scenario {
    pub grid: OccupancyGrid,
    pub start: Coord,
    pub goal: Coord,
}

impl Scenario {
    /// Parse a text map. Rows are lines; columns are character positions.
    pub fn parse(text: &str) -> Result<Self, ScenarioError> {
        let lines: Vec<&str> = text.lines().filter(|l| !l.is_empty()).collect();
        let width = lines.iter().map(|l| l.chars().count()).max().unwrap_or(0);

        let mut columns = vec![Vec::with_capacity(lines.len()); width];
        let mut start = None;
        let mut goal = None;

        for (row, line) in lines.iter().enumerate() {
            for (col, ch) in line.chars().enumerate() {
                let value = match ch {
                    '#' => WALL,
                    '.' => PASSABLE,
                    'S' => {
                        start = Some(coord(col, row)?);
                        PASSABLE
                    }
                    'G' => {
                        goal = Some(coord(col, row)?);
                        PASSABLE
                    }
                    _ => return Err(ScenarioError::UnknownTile { ch, col, row }),
                };
                columns[col].push(value);
            }
        }

        let grid = OccupancyGrid::from_columns(columns)?;
        Ok(Self {
            grid,
            start: start.ok_or(ScenarioError::MissingMarker('S'))?,
            goal: goal.ok_or(ScenarioError::MissingMarker('G'))?,
        })
    }
}

/// Text position to grid coordinate, rejecting positions past `i32::MAX`.
fn coord(col: usize, row: usize) -> Result<Coord, ScenarioError> {
    let c = i32::try_from(col).map_err(|_| GridError::TooLarge(col))?;
    let r = i32::try_from(row).map_err(|_| GridError::TooLarge(row))?;
    Ok(Coord::new(c, r))
}

/// Draw the scenario with `path` overlaid as `*`.
pub fn render(scenario: &Scenario, path: &[Coord]) -> String {
    let grid = &scenario.grid;
    let mut out = String::with_capacity(grid.dims().len() + grid.rows() as usize);
    for row in 0..grid.rows() {
        for col in 0..grid.cols() {
            let c = Coord::new(col, row);
            let ch = if c == scenario.start {
                'S'
            } else if c == scenario.goal {
                'G'
            } else if path.contains(&c) {
                '*'
            } else if grid.is_passable(c) {
                '.'
            } else {
                '#'
            };
            out.push(ch);
        }
        out.push('\n');
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use gridstar_paths::{NullSink, manhattan, search};

    #[test]
    fn sample_map_parses_and_has_a_path() {
        let s = Scenario::parse(MAP).unwrap();
        assert_eq!(s.grid.cols(), 30);
        assert_eq!(s.grid.rows(), 12);
        assert_eq!(s.start, Coord::new(1, 1));
        assert_eq!(s.goal, Coord::new(27, 10));

        let path = search(&s.grid, s.start, s.goal, &mut NullSink);
        assert!(path.len() - 1 >= manhattan(s.start, s.goal) as usize);
        assert_eq!(path.first(), Some(&s.start));
        assert_eq!(path.last(), Some(&s.goal));
    }

    #[test]
    fn parse_errors() {
        assert!(matches!(
            Scenario::parse("S.x\n..G"),
            Err(ScenarioError::UnknownTile { ch: 'x', col: 2, row: 0 })
        ));
        assert!(matches!(
            Scenario::parse("S..\n..."),
            Err(ScenarioError::MissingMarker('G'))
        ));
        assert!(matches!(
            Scenario::parse("S..\n.G"),
            Err(ScenarioError::Grid(GridError::Ragged { .. }))
        ));
        assert!(matches!(
            Scenario::parse(""),
            Err(ScenarioError::Grid(GridError::Empty))
        ));
    }

    #[test]
    fn oversized_positions_are_rejected() {
        assert_eq!(coord(3, 4).unwrap(), Coord::new(3, 4));
        let too_far = i32::MAX as usize + 1;
        assert!(matches!(
            coord(too_far, 0),
            Err(ScenarioError::Grid(GridError::TooLarge(n))) if n == too_far
        ));
        assert!(matches!(
            coord(0, usize::MAX),
            Err(ScenarioError::Grid(GridError::TooLarge(_)))
        ));
    }

    #[test]
    fn render_overlays_path() {
        let s = Scenario::parse("S.#\n..G").unwrap();
        let path = search(&s.grid, s.start, s.goal, &mut NullSink);
        assert_eq!(render(&s, &path), "S*#\n.*G\n");
    }
}
