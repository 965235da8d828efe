use crate::grid::{Cell, GridSize};
use crate::input::Direction;
use crate::obstacles::ObstacleSet;
use crate::snake::{Segment, Snake};

/// Body indices below this never count as a self-hit. The head sits next to
/// its neck on every turn of a short snake.
pub const SELF_COLLISION_FIRST_INDEX: usize = 3;

/// Classified result of one tick.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum Outcome {
    AteApple,
    HitSelf,
    HitObstacle,
    HitWall,
    /// Nothing was hit; the tick continues normally.
    Clear,
}

impl Outcome {
    /// Returns true for outcomes that end the game.
    #[must_use]
    pub fn is_fatal(self) -> bool {
        matches!(self, Self::HitSelf | Self::HitObstacle | Self::HitWall)
    }
}

/// Snapshot of everything the collision check looks at.
#[derive(Debug, Clone, Copy)]
pub struct TickView<'a> {
    pub snake: &'a Snake,
    pub apple: Cell,
    pub obstacles: &'a ObstacleSet,
    pub bounds: GridSize,
}

/// Classifies the head position after a walk. First match wins: apple,
/// self, obstacle, wall.
#[must_use]
pub fn resolve(view: TickView<'_>) -> Outcome {
    let head = view.snake.head();

    if head == view.apple {
        return Outcome::AteApple;
    }
    if hits_own_body(head, view.snake.segments()) {
        return Outcome::HitSelf;
    }
    if view.obstacles.contains(head) {
        return Outcome::HitObstacle;
    }
    if crossed_leading_edge(head, view.snake.direction(), view.bounds) {
        return Outcome::HitWall;
    }

    Outcome::Clear
}

/// Self-hit against body indices from [`SELF_COLLISION_FIRST_INDEX`] on.
/// Snakes shorter than four segments never hit themselves; pending
/// segments never collide.
#[must_use]
pub fn hits_own_body(head: Cell, segments: impl Iterator<Item = Segment>) -> bool {
    segments
        .skip(SELF_COLLISION_FIRST_INDEX)
        .any(|segment| segment == Segment::Placed(head))
}

/// Only the edge in the direction of travel is checked.
#[must_use]
pub fn crossed_leading_edge(head: Cell, direction: Direction, bounds: GridSize) -> bool {
    match direction {
        Direction::Left => head.x < 0,
        Direction::Right => head.x >= i32::from(bounds.width),
        Direction::Up => head.y < 0,
        Direction::Down => head.y >= i32::from(bounds.height),
    }
}

#[cfg(test)]
mod tests {
    use crate::grid::{Cell, GridSize};
    use crate::input::Direction;
    use crate::obstacles::ObstacleSet;
    use crate::snake::Snake;

    use super::{crossed_leading_edge, resolve, Outcome, TickView};

    const BOUNDS: GridSize = GridSize {
        width: 10,
        height: 10,
    };

    fn view<'a>(snake: &'a Snake, apple: Cell, obstacles: &'a ObstacleSet) -> TickView<'a> {
        TickView {
            snake,
            apple,
            obstacles,
            bounds: BOUNDS,
        }
    }

    #[test]
    fn head_on_apple_is_eaten() {
        let snake = Snake::new(Cell::new(4, 4), Direction::Right, 2);
        let obstacles = ObstacleSet::empty(BOUNDS);

        assert_eq!(
            resolve(view(&snake, Cell::new(4, 4), &obstacles)),
            Outcome::AteApple
        );
    }

    #[test]
    fn head_past_left_edge_moving_left_hits_wall() {
        let mut snake = Snake::new(Cell::new(0, 6), Direction::Left, 2);
        snake.walk();
        let obstacles = ObstacleSet::empty(BOUNDS);

        assert_eq!(snake.head(), Cell::new(-1, 6));
        assert_eq!(
            resolve(view(&snake, Cell::new(5, 5), &obstacles)),
            Outcome::HitWall
        );
    }

    #[test]
    fn every_leading_edge_is_detected() {
        assert!(crossed_leading_edge(Cell::new(10, 3), Direction::Right, BOUNDS));
        assert!(crossed_leading_edge(Cell::new(3, -1), Direction::Up, BOUNDS));
        assert!(crossed_leading_edge(Cell::new(3, 10), Direction::Down, BOUNDS));
        assert!(!crossed_leading_edge(Cell::new(9, 9), Direction::Right, BOUNDS));
        assert!(!crossed_leading_edge(Cell::new(0, 0), Direction::Left, BOUNDS));
    }

    #[test]
    fn trailing_edge_is_not_checked() {
        assert!(!crossed_leading_edge(Cell::new(-1, 3), Direction::Right, BOUNDS));
        assert!(!crossed_leading_edge(Cell::new(3, 10), Direction::Up, BOUNDS));
    }

    #[test]
    fn head_on_obstacle_is_fatal() {
        let snake = Snake::new(Cell::new(2, 3), Direction::Down, 2);
        let obstacles = ObstacleSet::new(BOUNDS, [Cell::new(2, 3)]);

        let outcome = resolve(view(&snake, Cell::new(8, 8), &obstacles));

        assert_eq!(outcome, Outcome::HitObstacle);
        assert!(outcome.is_fatal());
    }

    #[test]
    fn head_on_fourth_segment_hits_self() {
        let snake = Snake::from_cells(
            Cell::new(2, 2),
            &[
                Cell::new(3, 2),
                Cell::new(3, 3),
                Cell::new(2, 2),
                Cell::new(1, 2),
            ],
            Direction::Left,
        );
        let obstacles = ObstacleSet::empty(BOUNDS);

        assert_eq!(
            resolve(view(&snake, Cell::new(8, 8), &obstacles)),
            Outcome::HitSelf
        );
    }

    #[test]
    fn neck_segments_never_trigger_self_hit() {
        let obstacles = ObstacleSet::empty(BOUNDS);
        let head = Cell::new(5, 5);

        // Overlap at body index 1, then index 2, with a long tail elsewhere.
        let neck_overlap = Snake::from_cells(
            head,
            &[head, Cell::new(5, 6), Cell::new(5, 7), Cell::new(5, 8)],
            Direction::Up,
        );
        let second_overlap = Snake::from_cells(
            head,
            &[Cell::new(5, 6), head, Cell::new(5, 7), Cell::new(5, 8)],
            Direction::Up,
        );

        for snake in [neck_overlap, second_overlap] {
            assert_eq!(
                resolve(view(&snake, Cell::new(0, 0), &obstacles)),
                Outcome::Clear
            );
        }
    }

    #[test]
    fn short_snake_cannot_hit_itself() {
        let head = Cell::new(5, 5);
        let snake = Snake::from_cells(head, &[head, head], Direction::Up);
        let obstacles = ObstacleSet::empty(BOUNDS);

        assert_eq!(
            resolve(view(&snake, Cell::new(0, 0), &obstacles)),
            Outcome::Clear
        );
    }

    #[test]
    fn apple_takes_precedence_over_self_hit() {
        let head = Cell::new(4, 4);
        let snake = Snake::from_cells(
            head,
            &[Cell::new(5, 4), Cell::new(5, 5), head],
            Direction::Left,
        );
        let obstacles = ObstacleSet::empty(BOUNDS);

        assert_eq!(resolve(view(&snake, head, &obstacles)), Outcome::AteApple);
    }

    #[test]
    fn self_hit_takes_precedence_over_obstacle() {
        let head = Cell::new(4, 4);
        let snake = Snake::from_cells(
            head,
            &[Cell::new(5, 4), Cell::new(5, 5), head],
            Direction::Left,
        );
        let obstacles = ObstacleSet::new(BOUNDS, [head]);

        assert_eq!(
            resolve(view(&snake, Cell::new(0, 0), &obstacles)),
            Outcome::HitSelf
        );
    }
}
