use std::collections::{BinaryHeap, HashMap, HashSet};

use skirm_core::{Fence, MAP_SIZE, Obstacle, Point, Range, Wall};

use crate::distance::manhattan;

/// Minimum Manhattan distance a traversable cell must keep from every wall
/// and fence. Cells closer than this are treated as blocked, which stands in
/// for the agent's physical footprint without exact collision checks.
pub const CLEARANCE: i32 = 2;

/// Frontier entry, ordered for `BinaryHeap` so that the cell closest to the
/// goal pops first. Equal distances pop in insertion order (`seq`).
#[derive(Clone, Copy, PartialEq, Eq)]
struct Candidate {
    dist: i32,
    seq: u32,
    pos: Point,
}

impl Ord for Candidate {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        // Reverse so BinaryHeap (max-heap) pops smallest dist first,
        // then smallest seq (earliest insertion) on ties.
        other
            .dist
            .cmp(&self.dist)
            .then_with(|| other.seq.cmp(&self.seq))
    }
}

impl PartialOrd for Candidate {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

/// Whether `cell` lies within the clearance radius of any obstacle.
fn near_any<O: Obstacle>(cell: Point, obstacles: &[O]) -> bool {
    obstacles
        .iter()
        .any(|o| manhattan(o.position(), cell) <= CLEARANCE)
}

/// Greedy best-first path search over a bounded arena.
///
/// The finder holds only the arena bounds; each [`find_path`](Self::find_path)
/// call is a pure function of its arguments, so one finder may serve any
/// number of independent queries.
#[derive(Clone, Copy, Debug)]
pub struct PathFinder {
    bounds: Range,
}

impl Default for PathFinder {
    /// A finder for the standard [0, `MAP_SIZE`)² arena.
    fn default() -> Self {
        Self::new(Range::square(MAP_SIZE))
    }
}

impl PathFinder {
    /// Create a finder for the given arena bounds.
    pub fn new(bounds: Range) -> Self {
        Self { bounds }
    }

    /// The arena bounds being searched.
    #[inline]
    pub fn bounds(&self) -> Range {
        self.bounds
    }

    /// Search for a route from `start` to `goal`, avoiding every cell within
    /// Manhattan distance [`CLEARANCE`] of a wall or fence.
    ///
    /// Returns the route ordered **goal → start** (both endpoints included);
    /// the movement executor reverses it as needed. An empty vector means no
    /// route was found: the goal sits on an obstacle, the frontier was
    /// exhausted, or `start`/`goal` lie outside the bounds.
    ///
    /// The frontier always expands the cell closest to the goal by Manhattan
    /// distance, ties resolved by insertion order, so identical inputs yield
    /// identical routes. This favors answering quickly over route
    /// optimality; the result is not guaranteed shortest.
    ///
    /// `start` itself is seeded without a clearance check: an agent already
    /// standing next to an obstacle must still be able to path out of there.
    pub fn find_path(
        &self,
        start: Point,
        goal: Point,
        walls: &[Wall],
        fences: &[Fence],
    ) -> Vec<Point> {
        if !self.bounds.contains(start) || !self.bounds.contains(goal) {
            return Vec::new();
        }
        // An occupied goal can never be reached; skip the search entirely.
        if walls.iter().any(|w| w.position == goal) || fences.iter().any(|f| f.position == goal) {
            return Vec::new();
        }

        let mut frontier: BinaryHeap<Candidate> = BinaryHeap::new();
        let mut visited: HashSet<Point> = HashSet::new();
        let mut parents: HashMap<Point, Point> = HashMap::new();
        let mut seq = 0u32;

        frontier.push(Candidate {
            dist: manhattan(start, goal),
            seq,
            pos: start,
        });
        visited.insert(start);

        let mut found = false;
        while let Some(current) = frontier.pop() {
            let cp = current.pos;
            if cp == goal {
                found = true;
                break;
            }

            for np in cp.neighbors_8() {
                if !self.bounds.contains(np) || visited.contains(&np) {
                    continue;
                }
                if near_any(np, walls) || near_any(np, fences) {
                    continue;
                }
                visited.insert(np);
                parents.insert(np, cp);
                seq += 1;
                frontier.push(Candidate {
                    dist: manhattan(np, goal),
                    seq,
                    pos: np,
                });
            }
        }

        if !found {
            return Vec::new();
        }

        // Walk parent links back from the goal; start has no parent entry.
        let mut path = vec![goal];
        let mut cp = goal;
        while let Some(&prev) = parents.get(&cp) {
            path.push(prev);
            cp = prev;
        }
        path
    }
}

/// Search the standard [0, [`MAP_SIZE`])² arena.
///
/// Convenience wrapper over [`PathFinder::find_path`] with default bounds.
pub fn find_path(start: Point, goal: Point, walls: &[Wall], fences: &[Fence]) -> Vec<Point> {
    PathFinder::default().find_path(start, goal, walls, fences)
}
