//! Events the engine reports to players and observers.

extern crate alloc;

use alloc::string::String;
use core::fmt;

/// Kind of game event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NotificationKind {
    /// A new game has started. `data` lists the players.
    NewGame,
    /// A player cut for deal. `data` names the card.
    CutForDeal,
    /// The dealer dealt the hands.
    Deal,
    /// The starter card was cut. `data` names the card.
    StarterCard,
    /// A card was pegged. `data` names the card.
    Play,
    /// A player could not play and said "go".
    Go,
    /// Points were pegged. `data` explains them.
    Points,
    /// A hand was counted. `data` explains the count.
    ScoreHand,
    /// The crib was counted. `data` explains the count.
    ScoreCrib,
    /// Pegging has finished. `data` names the starter card.
    RoundOver,
    /// Somebody reached the winning score. `data` gives the final score.
    GameOver,
}

/// An immutable record of something that happened in the game.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    /// What happened.
    pub kind: NotificationKind,
    /// Seat of the acting player, if any.
    pub player: Option<usize>,
    /// Name of the acting player. The game fills this in before reporting.
    pub name: String,
    /// Points credited by this event.
    pub points: u8,
    /// The acting player's score after the event (0 when there is no player).
    pub score: u8,
    /// Human-readable detail.
    pub data: String,
}

impl Notification {
    /// Creates a notification.
    #[must_use]
    pub fn new(kind: NotificationKind, player: Option<usize>, data: impl Into<String>) -> Self {
        Self {
            kind,
            player,
            name: String::new(),
            points: 0,
            score: 0,
            data: data.into(),
        }
    }

    /// Names the acting player.
    #[must_use]
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Attaches points credited and the resulting score.
    #[must_use]
    pub const fn with_points(mut self, points: u8, score: u8) -> Self {
        self.points = points;
        self.score = score;
        self
    }

    /// Returns whether this event credited points.
    #[must_use]
    pub const fn is_scoring(&self) -> bool {
        self.points > 0
    }
}

impl fmt::Display for Notification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = &self.name;
        match self.kind {
            NotificationKind::NewGame => write!(f, "A new game has started between {}", self.data),
            NotificationKind::CutForDeal => write!(f, "{name} cut the {}", self.data),
            NotificationKind::Deal => write!(f, "{name} dealt and has the crib"),
            NotificationKind::StarterCard => write!(f, "{name} cut the {} as starter", self.data),
            NotificationKind::Play => write!(f, "{name} played the {}", self.data),
            NotificationKind::Go => write!(f, "{name} said go"),
            NotificationKind::Points => {
                write!(f, "{name} pegged {} for ", self.points)?;
                for (i, line) in self.data.lines().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    f.write_str(line)?;
                }
                write!(f, " (score {})", self.score)
            }
            NotificationKind::ScoreHand | NotificationKind::ScoreCrib => {
                let what = if self.kind == NotificationKind::ScoreCrib {
                    "crib"
                } else {
                    "hand"
                };
                write!(
                    f,
                    "{name}'s {what} scored {} (score {})\n{}",
                    self.points, self.score, self.data
                )
            }
            NotificationKind::RoundOver => {
                write!(f, "The round is over, the starter was the {}", self.data)
            }
            NotificationKind::GameOver => {
                write!(f, "{name} won the game\nFinal score: {}", self.data)
            }
        }
    }
}
