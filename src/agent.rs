use std::collections::HashSet;

use ndarray::Array2;

use crate::environment::{GridMap, Movement, Pos};
use crate::error::{ExploreError, Result};

#[derive(Debug, Copy, Clone, Default, PartialEq, Eq)]
pub struct AgentConfig {
    /// Whether the start cell counts as visited from the beginning.
    /// Off by default, which lets the agent walk back into its start
    /// cell exactly once.
    pub include_start_in_visited: bool,
}

/// An explorer walking a [`GridMap`] without ever re-entering a cell it
/// has moved into.
#[derive(Debug, Clone)]
pub struct Agent<'a> {
    map: &'a GridMap,
    pos: Pos,
    visited: HashSet<Pos>,
}

impl<'a> Agent<'a> {
    pub fn new(map: &'a GridMap, start: Pos) -> Result<Self> {
        Self::with_config(map, start, AgentConfig::default())
    }

    pub fn with_config(map: &'a GridMap, start: Pos, config: AgentConfig) -> Result<Self> {
        if !map.is_traversable(start) {
            return Err(ExploreError::InvalidStartPosition { position: start });
        }
        let mut visited = HashSet::new();
        if config.include_start_in_visited {
            visited.insert(start);
        }
        Ok(Self {
            map,
            pos: start,
            visited,
        })
    }

    pub fn position(&self) -> Pos {
        self.pos
    }

    pub fn visited(&self) -> &HashSet<Pos> {
        &self.visited
    }

    fn is_legal(&self, movement: Movement) -> bool {
        let target = self.pos.translate(movement.delta());
        self.map.is_traversable(target) && !self.visited.contains(&target)
    }

    /// Moves whose destination is traversable and not yet visited, in
    /// catalog order. Empty once the agent is stuck.
    pub fn legal_moves(&self) -> Vec<Movement> {
        Movement::all()
            .iter()
            .copied()
            .filter(|m| self.is_legal(*m))
            .collect()
    }

    pub fn is_terminal(&self) -> bool {
        self.legal_moves().is_empty()
    }

    /// Applies a legal move and returns the new position.
    ///
    /// The state is left untouched when the destination is out of bounds,
    /// an obstacle, or already visited.
    pub fn apply(&mut self, movement: Movement) -> Result<Pos> {
        let target = self.pos.translate(movement.delta());
        if !self.is_legal(movement) {
            tracing::warn!("Rejected {} from {} to {}", movement, self.pos, target);
            return Err(ExploreError::IllegalMoveApplication {
                movement,
                from: self.pos,
                to: target,
            });
        }
        self.pos = target;
        self.visited.insert(target);
        tracing::debug!("{} => {} ({} visited)", movement, target, self.visited.len());
        Ok(target)
    }

    /// `'X'` for obstacles, `'*'` for visited cells and `'.'` elsewhere.
    pub fn render(&self) -> Array2<char> {
        Array2::from_shape_fn((self.map.rows(), self.map.cols()), |(row, col)| {
            let pos = Pos::new(row as i32, col as i32);
            if self.map.is_obstacle(pos) {
                'X'
            } else if self.visited.contains(&pos) {
                '*'
            } else {
                '.'
            }
        })
    }

    pub fn render_text(&self) -> String {
        let grid = self.render();
        let (rows, cols) = grid.dim();
        let mut output = String::with_capacity(rows * (cols + 1));
        for row in 0..rows {
            for col in 0..cols {
                output.push(grid[[row, col]]);
            }
            output.push('\n');
        }
        output
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::environment::Cell;

    fn two_by_two_with_rock() -> GridMap {
        GridMap::new(2, 2, vec![Cell::Open, Cell::Obstacle, Cell::Open, Cell::Open]).unwrap()
    }

    #[test]
    fn corner_start_on_open_grid() {
        let map = GridMap::open(3, 3);
        let agent = Agent::new(&map, Pos::new(0, 0)).unwrap();
        assert_eq!(agent.legal_moves(), vec![Movement::South, Movement::East]);
        assert!(agent.visited().is_empty());
    }

    #[test]
    fn obstacle_and_bounds_exclude_moves() {
        let map = two_by_two_with_rock();
        let agent = Agent::new(&map, Pos::new(0, 0)).unwrap();
        assert_eq!(agent.legal_moves(), vec![Movement::South]);
    }

    #[test]
    fn visited_cells_are_excluded() {
        let map = GridMap::open(3, 3);
        let mut agent = Agent::new(&map, Pos::new(0, 0)).unwrap();
        assert_eq!(agent.apply(Movement::South).unwrap(), Pos::new(1, 0));
        assert!(agent.visited().contains(&Pos::new(1, 0)));

        agent.apply(Movement::East).unwrap();
        agent.apply(Movement::North).unwrap();
        // South of (0, 1) is visited, West is the start which never was.
        assert_eq!(agent.position(), Pos::new(0, 1));
        assert_eq!(agent.legal_moves(), vec![Movement::East, Movement::West]);

        agent.apply(Movement::West).unwrap();
        assert!(agent.legal_moves().is_empty());
        assert!(agent.is_terminal());
    }

    #[test]
    fn start_can_be_marked_visited() {
        let map = GridMap::open(1, 2);
        let config = AgentConfig {
            include_start_in_visited: true,
        };
        let mut agent = Agent::with_config(&map, Pos::new(0, 0), config).unwrap();
        assert!(agent.visited().contains(&Pos::new(0, 0)));
        agent.apply(Movement::East).unwrap();
        assert!(agent.legal_moves().is_empty());

        let mut default = Agent::new(&map, Pos::new(0, 0)).unwrap();
        default.apply(Movement::East).unwrap();
        assert_eq!(default.legal_moves(), vec![Movement::West]);
    }

    #[test]
    fn start_on_obstacle_fails() {
        let map = two_by_two_with_rock();
        match Agent::new(&map, Pos::new(0, 1)) {
            Err(ExploreError::InvalidStartPosition { position }) => {
                assert_eq!(position, Pos::new(0, 1))
            }
            other => panic!("unexpected {:?}", other),
        }
        assert!(Agent::new(&map, Pos::new(5, 0)).is_err());
    }

    #[test]
    fn illegal_apply_leaves_state_untouched() {
        let map = two_by_two_with_rock();
        let mut agent = Agent::new(&map, Pos::new(0, 0)).unwrap();
        for movement in [Movement::North, Movement::East, Movement::West].iter() {
            let err = agent.apply(*movement).unwrap_err();
            assert!(matches!(err, ExploreError::IllegalMoveApplication { .. }));
        }
        assert_eq!(agent.position(), Pos::new(0, 0));
        assert!(agent.visited().is_empty());

        agent.apply(Movement::South).unwrap();
        agent.apply(Movement::East).unwrap();
        // Going back West into a visited cell is rejected.
        let err = agent.apply(Movement::West).unwrap_err();
        match err {
            ExploreError::IllegalMoveApplication { movement, from, to } => {
                assert_eq!(movement, Movement::West);
                assert_eq!(from, Pos::new(1, 1));
                assert_eq!(to, Pos::new(1, 0));
            }
            other => panic!("unexpected {:?}", other),
        }
    }

    #[test]
    fn render_marks_obstacles_and_visited() {
        let map = two_by_two_with_rock();
        let mut agent = Agent::new(&map, Pos::new(0, 0)).unwrap();
        assert_eq!(agent.render_text(), ".X\n..\n");
        agent.apply(Movement::South).unwrap();
        agent.apply(Movement::East).unwrap();
        let grid = agent.render();
        assert_eq!(grid[[0, 1]], 'X');
        assert_eq!(grid[[1, 0]], '*');
        assert_eq!(grid[[1, 1]], '*');
        assert_eq!(grid[[0, 0]], '.');
        assert_eq!(agent.render_text(), ".X\n**\n");
    }
}
