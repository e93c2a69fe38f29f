// Copyright 2025 John Brosnihan
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.
//! The balls still in play
//!
//! Insertion order is preserved and is the order in which collision pairs
//! are visited, so two runs with the same rack and inputs give identical
//! results. Removal keeps the relative order of the remaining balls.

use super::{Ball, BallId};

/// Ordered collection of balls still on the table
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ActiveSet {
    balls: Vec<Ball>,
}

impl ActiveSet {
    /// Create an empty set
    pub fn new() -> Self {
        ActiveSet { balls: Vec::new() }
    }

    /// Add a ball
    ///
    /// Returns false, leaving the set untouched, if a ball with the same id
    /// is already in play.
    pub fn insert(&mut self, ball: Ball) -> bool {
        if self.contains(ball.id()) {
            return false;
        }
        self.balls.push(ball);
        true
    }

    /// Remove a ball, keeping the order of the rest
    pub fn remove(&mut self, id: BallId) -> Option<Ball> {
        let index = self.index_of(id)?;
        Some(self.balls.remove(index))
    }

    /// Get a ball by id
    pub fn get(&self, id: BallId) -> Option<&Ball> {
        self.balls.iter().find(|ball| ball.id() == id)
    }

    /// Get a mutable ball by id
    pub fn get_mut(&mut self, id: BallId) -> Option<&mut Ball> {
        self.balls.iter_mut().find(|ball| ball.id() == id)
    }

    /// Check if a ball is still in play
    pub fn contains(&self, id: BallId) -> bool {
        self.index_of(id).is_some()
    }

    /// Number of balls in play
    pub fn len(&self) -> usize {
        self.balls.len()
    }

    /// Check if every ball has been pocketed
    pub fn is_empty(&self) -> bool {
        self.balls.is_empty()
    }

    /// Snapshot of the ids in play, in order
    pub fn ids(&self) -> Vec<BallId> {
        self.balls.iter().map(Ball::id).collect()
    }

    /// Iterate over the balls in order
    pub fn iter(&self) -> std::slice::Iter<'_, Ball> {
        self.balls.iter()
    }

    /// Iterate mutably over the balls in order
    pub fn iter_mut(&mut self) -> std::slice::IterMut<'_, Ball> {
        self.balls.iter_mut()
    }

    /// Borrow the balls as a mutable slice for pairwise updates
    pub fn as_mut_slice(&mut self) -> &mut [Ball] {
        &mut self.balls
    }

    /// Remove every ball
    pub fn clear(&mut self) {
        self.balls.clear();
    }

    fn index_of(&self, id: BallId) -> Option<usize> {
        self.balls.iter().position(|ball| ball.id() == id)
    }
}

impl FromIterator<Ball> for ActiveSet {
    fn from_iter<I: IntoIterator<Item = Ball>>(iter: I) -> Self {
        let mut set = ActiveSet::new();
        for ball in iter {
            set.insert(ball);
        }
        set
    }
}

impl<'a> IntoIterator for &'a ActiveSet {
    type Item = &'a Ball;
    type IntoIter = std::slice::Iter<'a, Ball>;

    fn into_iter(self) -> Self::IntoIter {
        self.balls.iter()
    }
}
