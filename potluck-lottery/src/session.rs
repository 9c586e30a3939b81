//! The `ready → drawing → result → ready` cycle around a priority draw.
//!
//! Timing and animation belong to the presentation layer; the session only
//! guards the transitions so a second draw cannot start while one is running.

use potluck_core::Ranking;
use rand::Rng;

use crate::{DrawError, LotteryDrawer};

/// Observable state of a [`DrawSession`].
#[derive(Debug, Clone, Default, PartialEq)]
pub enum DrawState {
    /// Waiting for a draw to start.
    #[default]
    Ready,
    /// A draw has started and its order has not been recorded yet.
    Drawing,
    /// The order produced by the last draw.
    Result(Vec<Ranking>),
}

/// Guards the transitions between draw states.
///
/// A new draw may start from [`DrawState::Ready`] or over a shown
/// [`DrawState::Result`], which it discards.
///
/// # Examples
///
/// ```
/// use potluck_lottery::{DrawError, DrawSession, DrawState};
///
/// let mut session = DrawSession::new();
/// assert_eq!(session.begin(&[]), Err(DrawError::EmptyRanking));
/// assert_eq!(session.state(), &DrawState::Ready);
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DrawSession {
    state: DrawState,
}

impl DrawSession {
    /// Start a session in [`DrawState::Ready`].
    #[must_use]
    pub const fn new() -> Self {
        Self {
            state: DrawState::Ready,
        }
    }

    /// Current state.
    #[must_use]
    pub const fn state(&self) -> &DrawState {
        &self.state
    }

    /// Move to [`DrawState::Drawing`].
    ///
    /// # Errors
    /// Returns [`DrawError::AlreadyDrawing`] while a draw is running and
    /// [`DrawError::EmptyRanking`] when `rankings` is empty. The state is
    /// unchanged on error.
    pub fn begin(&mut self, rankings: &[Ranking]) -> Result<(), DrawError> {
        if self.state == DrawState::Drawing {
            return Err(DrawError::AlreadyDrawing);
        }
        if rankings.is_empty() {
            return Err(DrawError::EmptyRanking);
        }
        self.state = DrawState::Drawing;
        Ok(())
    }

    /// Record the drawn order and move to [`DrawState::Result`].
    ///
    /// # Errors
    /// Returns [`DrawError::NotDrawing`] unless a draw is running.
    pub fn complete(&mut self, order: Vec<Ranking>) -> Result<&[Ranking], DrawError> {
        if self.state != DrawState::Drawing {
            return Err(DrawError::NotDrawing);
        }
        self.state = DrawState::Result(order);
        Ok(self.result().unwrap_or_default())
    }

    /// Order recorded by the last completed draw, if it is still shown.
    #[must_use]
    pub fn result(&self) -> Option<&[Ranking]> {
        match &self.state {
            DrawState::Result(order) => Some(order),
            DrawState::Ready | DrawState::Drawing => None,
        }
    }

    /// Return to [`DrawState::Ready`], dropping any shown result.
    pub fn reset(&mut self) {
        self.state = DrawState::Ready;
    }

    /// Begin, draw a full priority order with `drawer`, and complete.
    ///
    /// # Errors
    /// Propagates the errors of [`Self::begin`].
    pub fn run<R>(
        &mut self,
        drawer: &mut LotteryDrawer<R>,
        rankings: &[Ranking],
    ) -> Result<&[Ranking], DrawError>
    where
        R: Rng,
    {
        self.begin(rankings)?;
        let order = drawer.priority_draw(rankings);
        self.complete(order)
    }
}
