//! Game configuration options.

use crate::outcome::Winner;

/// Configuration options for a game of War.
///
/// Use the builder pattern to customize options:
///
/// ```
/// use warrs::{GameOptions, Winner};
///
/// let options = GameOptions::default()
///     .with_war_stake(3)
///     .with_first_deal(Winner::Player);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameOptions {
    /// Maximum number of cards each side commits per war escalation level,
    /// face-up card included. A side holding fewer cards commits everything
    /// it has left. Values below 1 behave as 1.
    pub war_stake: u8,
    /// The side that receives the first card of the deal.
    pub first_deal: Winner,
}

impl Default for GameOptions {
    fn default() -> Self {
        Self {
            war_stake: 4,
            first_deal: Winner::Opponent,
        }
    }
}

impl GameOptions {
    /// Sets the number of cards each side commits per war level.
    ///
    /// # Example
    ///
    /// ```
    /// use warrs::GameOptions;
    ///
    /// let options = GameOptions::default().with_war_stake(2);
    /// assert_eq!(options.war_stake, 2);
    /// ```
    #[must_use]
    pub const fn with_war_stake(mut self, stake: u8) -> Self {
        self.war_stake = stake;
        self
    }

    /// Sets the side that receives the first card of the deal.
    ///
    /// # Example
    ///
    /// ```
    /// use warrs::{GameOptions, Winner};
    ///
    /// let options = GameOptions::default().with_first_deal(Winner::Player);
    /// assert_eq!(options.first_deal, Winner::Player);
    /// ```
    #[must_use]
    pub const fn with_first_deal(mut self, side: Winner) -> Self {
        self.first_deal = side;
        self
    }
}
