//! Moves: row rotations and blank slides.
//!
//! A move is an in-memory tagged value. Its canonical text form,
//! `rotate(<row>,<dir>)` or `slide(<x>,<y>,<x2>,<y2>)`, is what the command
//! line prints and is also the key moves are ordered by, so a move index
//! means the same thing here as in the printed `actions` list.

use std::fmt;
use std::str::FromStr;

use crate::error::{Result, RotatorError};
use crate::grid::{Coord, PuzzleState};

/// Which way a row rotation shifts its tiles.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Direction {
    Left,
    Right,
}

impl Direction {
    /// Column offset applied to every tile: -1 or +1.
    pub fn offset(self) -> isize {
        match self {
            Direction::Left => -1,
            Direction::Right => 1,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Move {
    /// Circular shift of a whole row.
    Rotate { row: usize, direction: Direction },
    /// Moves the tile at `from` into the blank at `to`.
    Slide { from: Coord, to: Coord },
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Move::Rotate { row, direction } => {
                write!(f, "rotate({},{})", row, direction.offset())
            }
            Move::Slide {
                from: (x, y),
                to: (x2, y2),
            } => write!(f, "slide({x},{y},{x2},{y2})"),
        }
    }
}

/// Parses a decimal index without sign or redundant leading zeros.
fn parse_index(text: &str) -> Option<usize> {
    let canonical = !text.is_empty()
        && text.bytes().all(|b| b.is_ascii_digit())
        && (text == "0" || !text.starts_with('0'));
    canonical.then(|| text.parse().ok()).flatten()
}

impl FromStr for Move {
    type Err = RotatorError;

    fn from_str(text: &str) -> Result<Self> {
        let invalid = || RotatorError::InvalidMove(text.to_owned());

        let (name, args) = text
            .strip_suffix(')')
            .and_then(|inner| inner.split_once('('))
            .ok_or_else(invalid)?;
        let args: Vec<&str> = args.split(',').collect();

        match (name, args.as_slice()) {
            ("rotate", &[row, direction]) => {
                let direction = match direction {
                    "-1" => Direction::Left,
                    "1" => Direction::Right,
                    _ => return Err(invalid()),
                };
                let row = parse_index(row).ok_or_else(invalid)?;
                Ok(Move::Rotate { row, direction })
            }
            ("slide", &[x, y, x2, y2]) => {
                let mut coords = [x, y, x2, y2].into_iter().map(parse_index);
                let mut next = || coords.next().flatten().ok_or_else(invalid);
                Ok(Move::Slide {
                    from: (next()?, next()?),
                    to: (next()?, next()?),
                })
            }
            _ => Err(invalid()),
        }
    }
}

impl PuzzleState {
    /// Lists the legal moves, ordered by their canonical text.
    ///
    /// Every row can rotate either way. If there is a blank, the tiles
    /// directly above and below it can slide into it.
    pub fn moves(&self) -> Vec<Move> {
        let mut moves: Vec<Move> = (0..self.rows())
            .flat_map(|row| {
                [Direction::Left, Direction::Right]
                    .map(|direction| Move::Rotate { row, direction })
            })
            .collect();

        if let Some((x, y)) = self.locate_blank() {
            if y > 0 {
                moves.push(Move::Slide {
                    from: (x, y - 1),
                    to: (x, y),
                });
            }
            if y + 1 < self.rows() {
                moves.push(Move::Slide {
                    from: (x, y + 1),
                    to: (x, y),
                });
            }
        }

        moves.sort_by_cached_key(Move::to_string);
        moves
    }

    /// Canonical text of every legal move, in index order.
    pub fn actions(&self) -> Vec<String> {
        self.moves().iter().map(Move::to_string).collect()
    }

    /// Applies a move to the grid.
    ///
    /// Slides are plain swaps; the move itself is not checked against the
    /// blank's position.
    pub fn apply(&mut self, mv: Move) -> Result<()> {
        match mv {
            Move::Rotate { row, direction } if row < self.rows() => {
                self.rotate_row(row, direction.offset());
            }
            Move::Slide { from, to } if self.contains(from) && self.contains(to) => {
                self.swap(from, to);
            }
            _ => return Err(RotatorError::MoveOutOfBounds(mv)),
        }
        Ok(())
    }

    /// Executes the move at `index` in this state's own move list and
    /// returns it. Out-of-range indices leave the grid unchanged.
    pub fn execute(&mut self, index: usize) -> Result<Move> {
        let moves = self.moves();
        let mv = *moves.get(index).ok_or(RotatorError::ActionOutOfRange {
            index,
            count: moves.len(),
        })?;

        log::debug!("executing {} on {}", mv, self);
        self.apply(mv)?;
        Ok(mv)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::notation::DEFAULT_STATE;

    fn state(serialized: &str) -> PuzzleState {
        serialized.parse().expect("test state must parse")
    }

    fn count_slides(moves: &[Move]) -> usize {
        moves
            .iter()
            .filter(|mv| matches!(mv, Move::Slide { .. }))
            .count()
    }

    #[test]
    fn test_default_state_actions() {
        assert_eq!(
            state(DEFAULT_STATE).actions(),
            [
                "rotate(0,-1)",
                "rotate(0,1)",
                "rotate(1,-1)",
                "rotate(1,1)",
                "rotate(2,-1)",
                "rotate(2,1)",
                "slide(4,0,4,1)",
                "slide(4,2,4,1)",
            ]
        );
    }

    #[test]
    fn test_no_blank_means_no_slides() {
        let moves = state("ab|cd|ef").moves();
        assert_eq!(moves.len(), 6);
        assert_eq!(count_slides(&moves), 0);
    }

    #[test]
    fn test_slide_count_depends_on_blank_row() {
        assert_eq!(count_slides(&state("a |cd|ef").moves()), 1);
        assert_eq!(count_slides(&state("ab|c |ef").moves()), 2);
        assert_eq!(count_slides(&state("ab|cd| f").moves()), 1);
        assert_eq!(
            state("a b|cde|fgh").moves().last(),
            Some(&Move::Slide {
                from: (1, 1),
                to: (1, 0)
            })
        );
    }

    #[test]
    fn test_ordering_is_textual() {
        let rows = vec!["ab"; 11].join("|");
        let actions = state(&rows).actions();
        assert_eq!(actions[0], "rotate(0,-1)");
        assert_eq!(actions[2], "rotate(1,-1)");
        assert_eq!(actions[4], "rotate(10,-1)");
        assert_eq!(actions[6], "rotate(2,-1)");
    }

    #[test]
    fn test_move_text_roundtrip() {
        for mv in state(DEFAULT_STATE).moves() {
            assert_eq!(mv.to_string().parse::<Move>().unwrap(), mv);
        }
    }

    #[test]
    fn test_move_parse_rejects_noncanonical_text() {
        for text in [
            "rotate(0,2)",
            "rotate(01,1)",
            "rotate(+1,1)",
            "rotate(0,1",
            "rotate(0)",
            "slide(1,2,3)",
            "slide(1,2,3,-4)",
            "spin(0,1)",
            "",
        ] {
            assert!(
                matches!(text.parse::<Move>(), Err(RotatorError::InvalidMove(_))),
                "{text:?} should be rejected"
            );
        }
        assert_eq!(
            "slide(0,10,0,9)".parse::<Move>().unwrap(),
            Move::Slide {
                from: (0, 10),
                to: (0, 9)
            }
        );
    }

    #[test]
    fn test_execute_each_default_action() {
        let expected = [
            "23451|1234 |12354",
            "51234|1234 |12354",
            "12345|234 1|12354",
            "12345| 1234|12354",
            "12345|1234 |23541",
            "12345|1234 |41235",
            "1234 |12345|12354",
            "12345|12344|1235 ",
        ];
        for (index, after) in expected.into_iter().enumerate() {
            let mut s = state(DEFAULT_STATE);
            s.execute(index).unwrap();
            assert_eq!(s.to_string(), after, "action {index}");
        }
    }

    #[test]
    fn test_execute_out_of_range_leaves_grid() {
        let mut s = state(DEFAULT_STATE);
        for index in [8, 9, usize::MAX] {
            assert!(matches!(
                s.execute(index),
                Err(RotatorError::ActionOutOfRange { count: 8, .. })
            ));
            assert_eq!(s.to_string(), DEFAULT_STATE);
        }
    }

    #[test]
    fn test_apply_rejects_moves_outside_grid() {
        let mut s = state("ab|c ");
        let mv = Move::Rotate {
            row: 2,
            direction: Direction::Left,
        };
        assert!(matches!(s.apply(mv), Err(RotatorError::MoveOutOfBounds(_))));
        let mv: Move = "slide(1,2,1,1)".parse().unwrap();
        assert!(matches!(s.apply(mv), Err(RotatorError::MoveOutOfBounds(_))));
        assert_eq!(s.to_string(), "ab|c ");
    }

    #[test]
    fn test_slide_is_plain_swap() {
        let mut s = state("ab|cd");
        s.apply("slide(0,0,1,1)".parse().unwrap()).unwrap();
        assert_eq!(s.to_string(), "db|ca");
    }
}
