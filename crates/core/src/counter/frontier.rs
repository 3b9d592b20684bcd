//! Pending cells of an in-flight flood-fill

use std::collections::VecDeque;

use super::{FloodOrder, NEIGHBOR_ORDER};
use crate::grid::{Cell, GridModel};

/// Cells waiting to be visited by the current flood-fill
///
/// A stack gives depth-first order, a queue breadth-first. Neighbours are
/// pushed so that they come back out in [`NEIGHBOR_ORDER`] either way.
#[derive(Debug, Clone)]
pub(crate) enum Frontier {
    Stack(Vec<(usize, usize)>),
    Queue(VecDeque<(usize, usize)>),
}

impl Frontier {
    pub(crate) fn new(order: FloodOrder) -> Self {
        match order {
            FloodOrder::DepthFirst => Frontier::Stack(Vec::new()),
            FloodOrder::BreadthFirst => Frontier::Queue(VecDeque::new()),
        }
    }

    pub(crate) fn push(&mut self, cell: (usize, usize)) {
        match self {
            Frontier::Stack(stack) => stack.push(cell),
            Frontier::Queue(queue) => queue.push_back(cell),
        }
    }

    pub(crate) fn pop(&mut self) -> Option<(usize, usize)> {
        match self {
            Frontier::Stack(stack) => stack.pop(),
            Frontier::Queue(queue) => queue.pop_front(),
        }
    }

    pub(crate) fn len(&self) -> usize {
        match self {
            Frontier::Stack(stack) => stack.len(),
            Frontier::Queue(queue) => queue.len(),
        }
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Queue the land neighbours of `(row, col)`
    ///
    /// Cells are still re-checked when popped: one cell can be queued by
    /// several neighbours before it is sunk.
    pub(crate) fn push_land_neighbors(&mut self, grid: &GridModel, row: usize, col: usize) {
        let land = |&(r, c): &(usize, usize)| grid.cell(r, c) == Some(Cell::Land);
        let neighbors = NEIGHBOR_ORDER
            .iter()
            .filter_map(|&direction| grid.neighbor(row, col, direction));

        match self {
            // LIFO: push in reverse so the first direction pops first
            Frontier::Stack(stack) => {
                let ordered: Vec<(usize, usize)> = neighbors.filter(land).collect();
                stack.extend(ordered.into_iter().rev());
            }
            Frontier::Queue(queue) => queue.extend(neighbors.filter(land)),
        }
    }
}
