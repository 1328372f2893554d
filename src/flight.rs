//! The flight log: every discrete move the drone makes, in order.

use crate::geometry::{Heading, Point};

/// One logged move. `order_no` is `None` on the return-to-home leg.
#[derive(Debug, Clone, PartialEq)]
pub struct Move {
    pub order_no: Option<String>,
    pub from: Point,
    pub heading: Heading,
    pub to: Point,
}

impl Move {
    pub fn is_hover(&self) -> bool {
        self.heading == Heading::Hover
    }
}

/// Append-only move log together with the move budget it draws from.
///
/// `len() + remaining()` always equals the budget; `remaining` goes negative
/// once the log overruns it.
#[derive(Debug, Clone, PartialEq)]
pub struct FlightLog {
    moves: Vec<Move>,
    budget: usize,
}

impl FlightLog {
    pub fn new(budget: usize) -> Self {
        Self {
            moves: Vec::new(),
            budget,
        }
    }

    pub(crate) fn record(&mut self, entry: Move) {
        self.moves.push(entry);
    }

    pub fn moves(&self) -> &[Move] {
        &self.moves
    }

    pub fn into_moves(self) -> Vec<Move> {
        self.moves
    }

    pub fn len(&self) -> usize {
        self.moves.len()
    }

    pub fn is_empty(&self) -> bool {
        self.moves.is_empty()
    }

    pub fn budget(&self) -> usize {
        self.budget
    }

    pub fn remaining(&self) -> i64 {
        self.budget as i64 - self.moves.len() as i64
    }

    /// Moves logged beyond the budget.
    pub fn overrun(&self) -> usize {
        self.moves.len().saturating_sub(self.budget)
    }

    /// True once no more than `margin` moves are left.
    pub fn is_exhausted(&self, margin: usize) -> bool {
        self.remaining() <= margin as i64
    }

    /// Where the drone is after the last move, or `start` if nothing has moved.
    pub fn position_or(&self, start: Point) -> Point {
        self.moves.last().map_or(start, |entry| entry.to)
    }

    /// Moves logged while servicing `order_no`.
    pub fn moves_for<'a>(&'a self, order_no: &'a str) -> impl Iterator<Item = &'a Move> + 'a {
        self.moves
            .iter()
            .filter(move |entry| entry.order_no.as_deref() == Some(order_no))
    }
}
