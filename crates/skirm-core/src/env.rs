//! Per-tick environment snapshot: walls, fences, and bullets.
//!
//! A snapshot is plain data produced by the data-acquisition layer once per
//! tick and consumed read-only by the rest of the agent. Nothing here is
//! mutated by consumers; the path search in particular only ever borrows the
//! obstacle collections for the duration of one query.

use crate::geom::Point;

/// Side length of the standard arena: cells span [0, `MAP_SIZE`) on each axis.
pub const MAP_SIZE: i32 = 100;

/// Static impassable obstacle occupying one grid cell.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Wall {
    pub position: Point,
}

/// Destructible obstacle. `health` is informational for combat logic; for
/// navigation a fence is impassable no matter how damaged it is.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Fence {
    pub position: Point,
    pub health: u32,
}

/// A projectile in flight. Tracked for combat awareness only; the path
/// search never treats bullets as obstacles.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Bullet {
    pub position: Point,
    pub speed: f64,
    pub damage: f64,
    pub traveled_distance: f64,
}

/// Everything the agent knows about the arena at one instant.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EnvironmentInfo {
    pub walls: Vec<Wall>,
    pub fences: Vec<Fence>,
    pub bullets: Vec<Bullet>,
}

/// Anything with a fixed cell position that blocks movement.
///
/// Lets navigation code treat walls and fences uniformly without caring
/// which kind it is looking at.
pub trait Obstacle {
    /// The grid cell this obstacle occupies.
    fn position(&self) -> Point;
}

impl Obstacle for Wall {
    #[inline]
    fn position(&self) -> Point {
        self.position
    }
}

impl Obstacle for Fence {
    #[inline]
    fn position(&self) -> Point {
        self.position
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn snapshot_starts_empty() {
        let env = EnvironmentInfo::default();
        assert!(env.walls.is_empty());
        assert!(env.fences.is_empty());
        assert!(env.bullets.is_empty());
    }

    #[test]
    fn snapshot_iterates_in_insertion_order() {
        let env = EnvironmentInfo {
            walls: vec![
                Wall {
                    position: Point::new(1, 1),
                },
                Wall {
                    position: Point::new(2, 1),
                },
            ],
            fences: vec![Fence {
                position: Point::new(9, 9),
                health: 30,
            }],
            bullets: vec![Bullet {
                position: Point::new(4, 4),
                speed: 10.0,
                damage: 25.0,
                traveled_distance: 3.5,
            }],
        };
        let xs: Vec<i32> = env.walls.iter().map(|w| w.position.x).collect();
        assert_eq!(xs, vec![1, 2]);
        assert_eq!(env.fences[0].health, 30);
    }

    #[test]
    fn obstacle_trait_projects_positions() {
        let wall = Wall {
            position: Point::new(3, 4),
        };
        let fence = Fence {
            position: Point::new(5, 6),
            health: 0,
        };
        assert_eq!(Obstacle::position(&wall), Point::new(3, 4));
        assert_eq!(Obstacle::position(&fence), Point::new(5, 6));
    }
}
