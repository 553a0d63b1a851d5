//! Slide sequence for replaying a stored draw.
//!
//! Only the data model lives here. Whatever renders the slides reads
//! [`Slideshow::current`] and calls [`Slideshow::next`] / [`Slideshow::prev`].

use serde::Serialize;

use crate::constants::{BIG_GAME, DARTS_SENTINEL};
use crate::draw::{DrawOutcome, DrawResult, PoolCounts};
use crate::error::DrawError;
use crate::store::{load_draw, DrawStore};

const INTRO_TEXT: &str = "Mach dich bereit für die Spielenthüllung!";
const OUTRO_TEXT: &str = "Du kannst die Präsentation jetzt schließen.";
const MISSING_TEXT: &str = "Keine Präsentationsdaten gefunden. Bitte starte auf der Auswahlseite.";
const INVALID_TEXT: &str = "Ungültiges Präsentationsdatenformat.";

/// Games drawn per pool, keyed the way the slide record names them.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct SlideCounts {
    pub pool1: usize,
    pub pool2: usize,
    pub pool3: usize,
}

impl SlideCounts {
    pub fn as_array(&self) -> PoolCounts {
        [self.pool1, self.pool2, self.pool3]
    }
}

impl From<PoolCounts> for SlideCounts {
    fn from([pool1, pool2, pool3]: PoolCounts) -> Self {
        SlideCounts { pool1, pool2, pool3 }
    }
}

/// One slide.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Step {
    TitleSlide { title: String, text: String },
    FixedGames { games: Vec<String> },
    RevealDarts { darts: String },
    /// Full pool contents before the draw (pooled cups only)
    PoolOverview { pools: [Vec<String>; 3] },
    RevealFinalGame {
        index: usize,
        total: usize,
        game: String,
        big_game_choice: Option<String>,
    },
    PoolCounts { counts: SlideCounts },
    RevealPool { pool: usize, games: Vec<String> },
    Message { title: String, text: String },
    End,
    Error { text: String },
}

impl Step {
    pub fn title(&self) -> String {
        match self {
            Step::TitleSlide { title, .. } | Step::Message { title, .. } => title.clone(),
            Step::FixedGames { .. } => "Fixed Games".to_string(),
            Step::RevealDarts { .. } => "Drawn Darts Game".to_string(),
            Step::PoolOverview { .. } => "Pool-Spieleübersicht".to_string(),
            Step::RevealFinalGame { index, total, .. } => format!("Drawn Game {index}/{total}"),
            Step::PoolCounts { .. } => "Games Drawn per Pool".to_string(),
            Step::RevealPool { pool, .. } => format!("Pool {pool} Games"),
            Step::End => "Draw Complete!".to_string(),
            Step::Error { .. } => "Error".to_string(),
        }
    }

    /// Body text for the text-only slides.
    pub fn text(&self) -> Option<&str> {
        match self {
            Step::TitleSlide { text, .. } | Step::Message { text, .. } | Step::Error { text } => {
                Some(text.as_str())
            }
            Step::End => Some(OUTRO_TEXT),
            _ => None,
        }
    }
}

/// Build the slide sequence for a draw.
pub fn presentation_steps(draw: &DrawResult) -> Vec<Step> {
    let mut steps = vec![Step::TitleSlide {
        title: format!("{} Cup Draw", draw.cup_type.label()),
        text: INTRO_TEXT.to_string(),
    }];

    let fixed: Vec<String> = draw
        .fixed_games
        .iter()
        .filter(|g| *g != DARTS_SENTINEL)
        .cloned()
        .collect();
    if !fixed.is_empty() {
        steps.push(Step::FixedGames { games: fixed });
    }

    if !draw.fixed_darts_game.is_empty() {
        steps.push(Step::RevealDarts {
            darts: draw.fixed_darts_game.clone(),
        });
    }

    match &draw.outcome {
        DrawOutcome::Final {
            drawn_pool_games,
            selected_big_game,
        } => {
            if drawn_pool_games.is_empty() {
                steps.push(Step::Message {
                    title: "Drawn Games".to_string(),
                    text: "No games were drawn from the pools.".to_string(),
                });
            }
            let total = drawn_pool_games.len();
            for (i, game) in drawn_pool_games.iter().enumerate() {
                steps.push(Step::RevealFinalGame {
                    index: i + 1,
                    total,
                    game: game.clone(),
                    big_game_choice: if game == BIG_GAME {
                        selected_big_game.clone()
                    } else {
                        None
                    },
                });
            }
        }
        DrawOutcome::Pooled {
            original_pool_1,
            original_pool_2,
            original_pool_3,
            drawn_pool_1,
            drawn_pool_2,
            drawn_pool_3,
            ..
        } => {
            steps.push(Step::PoolOverview {
                pools: [original_pool_1.clone(), original_pool_2.clone(), original_pool_3.clone()],
            });

            let drawn = [drawn_pool_1, drawn_pool_2, drawn_pool_3];
            let counts = drawn.map(|games| games.len());
            if counts.iter().all(|&c| c == 0) {
                steps.push(Step::Message {
                    title: "Drawn Games".to_string(),
                    text: "No additional games were drawn from the pools.".to_string(),
                });
            } else {
                steps.push(Step::PoolCounts { counts: counts.into() });
                for (i, games) in drawn.into_iter().enumerate() {
                    if !games.is_empty() {
                        steps.push(Step::RevealPool {
                            pool: i + 1,
                            games: games.clone(),
                        });
                    }
                }
            }
        }
    }

    steps.push(Step::End);
    steps
}

/// Cursor over the slides of one stored draw.
#[derive(Clone, Debug)]
pub struct Slideshow {
    title: String,
    steps: Vec<Step>,
    index: usize,
    blocked: bool,
}

impl Slideshow {
    pub fn from_draw(draw: &DrawResult) -> Self {
        Slideshow {
            title: format!("{} Cup Auslosung", draw.cup_type.label()),
            steps: presentation_steps(draw),
            index: 0,
            blocked: false,
        }
    }

    /// Error state: a single slide, navigation disabled until the flow restarts.
    pub fn failed(err: &DrawError) -> Self {
        let text = match err {
            DrawError::MissingRecord => MISSING_TEXT,
            _ => INVALID_TEXT,
        };
        Slideshow {
            title: "Fehler".to_string(),
            steps: vec![Step::Error {
                text: text.to_string(),
            }],
            index: 0,
            blocked: true,
        }
    }

    /// Load the stored draw. Never fails; a missing or bad record yields the error state.
    pub fn load<S: DrawStore + ?Sized>(store: &S) -> Self {
        match load_draw(store) {
            Ok(draw) => Slideshow::from_draw(&draw),
            Err(e) => {
                tracing::warn!(%e, "could not load draw record");
                Slideshow::failed(&e)
            }
        }
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn steps(&self) -> &[Step] {
        &self.steps
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn current(&self) -> &Step {
        &self.steps[self.index]
    }

    pub fn is_blocked(&self) -> bool {
        self.blocked
    }

    pub fn has_next(&self) -> bool {
        !self.blocked && self.index + 1 < self.steps.len()
    }

    pub fn has_prev(&self) -> bool {
        !self.blocked && self.index > 0
    }

    /// Advance one slide. `None` at the end or when blocked.
    pub fn next(&mut self) -> Option<&Step> {
        if !self.has_next() {
            return None;
        }
        self.index += 1;
        Some(self.current())
    }

    /// Go back one slide. `None` at the start or when blocked.
    pub fn prev(&mut self) -> Option<&Step> {
        if !self.has_prev() {
            return None;
        }
        self.index -= 1;
        Some(self.current())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::DRAW_DATA_KEY;
    use crate::cup::Cup;
    use crate::draw::Drawer;
    use crate::store::{save_draw, MemoryStore};

    fn final_draw(drawn: &[&str], big: Option<&str>) -> DrawResult {
        DrawResult {
            cup_type: Cup::Final,
            fixed_games: vec!["Minigolf".to_string(), "1 Dart".to_string()],
            fixed_darts_game: "501".to_string(),
            outcome: DrawOutcome::Final {
                drawn_pool_games: drawn.iter().map(|g| g.to_string()).collect(),
                selected_big_game: big.map(str::to_string),
            },
        }
    }

    #[test]
    fn test_final_steps() {
        let draw = final_draw(&["Beat", "Big Game", "Dobble"], Some("Scrabble"));
        let steps = presentation_steps(&draw);

        assert_eq!(steps[0].title(), "Finale Cup Draw");
        // Darts placeholder is never shown with the fixed games
        assert_eq!(
            steps[1],
            Step::FixedGames {
                games: vec!["Minigolf".to_string()]
            }
        );
        assert_eq!(steps[2], Step::RevealDarts { darts: "501".to_string() });
        assert_eq!(steps.len(), 3 + 3 + 1);
        assert_eq!(steps[4].title(), "Drawn Game 2/3");
        assert!(matches!(
            &steps[4],
            Step::RevealFinalGame { big_game_choice: Some(choice), .. } if choice == "Scrabble"
        ));
        assert!(matches!(&steps[3], Step::RevealFinalGame { big_game_choice: None, .. }));
        assert_eq!(steps.last(), Some(&Step::End));
    }

    #[test]
    fn test_final_without_games_shows_message() {
        let steps = presentation_steps(&final_draw(&[], None));
        assert!(steps.iter().any(|s| matches!(s, Step::Message { .. })));
    }

    #[test]
    fn test_pooled_steps() {
        let draw = Drawer::new(Some(4)).draw(Cup::Mikro).unwrap();
        let steps = presentation_steps(&draw);

        assert!(matches!(steps[3], Step::PoolOverview { .. }));
        let Step::PoolCounts { counts } = &steps[4] else {
            panic!("expected pool counts, got {:?}", steps[4]);
        };
        assert!(counts.as_array().iter().all(|&c| c >= 1));
        let reveals = steps.iter().filter(|s| matches!(s, Step::RevealPool { .. })).count();
        assert_eq!(reveals, 3);
        assert!(!steps.iter().any(|s| matches!(s, Step::RevealFinalGame { .. })));
    }

    #[test]
    fn test_slideshow_navigation() {
        let mut store = MemoryStore::new();
        save_draw(&mut store, &Drawer::new(Some(2)).draw(Cup::Piko).unwrap()).unwrap();

        let mut show = Slideshow::load(&store);
        assert_eq!(show.title(), "Piko Cup Auslosung");
        assert!(!show.is_blocked());
        assert!(!show.has_prev());
        assert!(show.prev().is_none());

        let len = show.steps().len();
        while show.next().is_some() {}
        assert_eq!(show.index(), len - 1);
        assert_eq!(show.current(), &Step::End);
        assert!(show.prev().is_some());
        assert_eq!(show.index(), len - 2);
    }

    #[test]
    fn test_missing_record_blocks_navigation() {
        let store = MemoryStore::new();
        let mut show = Slideshow::load(&store);

        assert_eq!(show.title(), "Fehler");
        assert!(show.is_blocked());
        assert_eq!(show.steps().len(), 1);
        assert_eq!(show.current().text(), Some(MISSING_TEXT));
        assert!(show.next().is_none());
        assert!(show.prev().is_none());
    }

    #[test]
    fn test_malformed_record_shows_generic_error() {
        let mut store = MemoryStore::new();
        store.set(DRAW_DATA_KEY, "{\"cup_type\":".to_string());
        let show = Slideshow::load(&store);

        assert!(show.is_blocked());
        assert_eq!(show.current().text(), Some(INVALID_TEXT));
    }

    #[test]
    fn test_impossible_record_shows_generic_error() {
        let mut store = MemoryStore::new();
        let record = serde_json::json!({
            "cup_type": "Piko",
            "fixed_games": [],
            "fixed_darts_game": "501",
            "original_pool_1": ["A"],
            "original_pool_2": [],
            "original_pool_3": [],
            "drawn_pool_1": ["Z", "Y"],
            "drawn_pool_2": [],
            "drawn_pool_3": []
        });
        store.set(DRAW_DATA_KEY, record.to_string());
        let mut show = Slideshow::load(&store);

        assert!(show.is_blocked());
        assert_eq!(show.title(), "Fehler");
        assert_eq!(show.current().text(), Some(INVALID_TEXT));
        assert!(show.next().is_none());
    }

    #[test]
    fn test_steps_serialize_with_type_tag() {
        let json = serde_json::to_value(Step::RevealDarts { darts: "501".to_string() }).unwrap();
        assert_eq!(json["type"], "reveal_darts");
        assert_eq!(json["darts"], "501");

        let counts = Step::PoolCounts {
            counts: SlideCounts::from([2, 1, 3]),
        };
        let json = serde_json::to_value(counts).unwrap();
        assert_eq!(json["type"], "pool_counts");
        assert_eq!(json["counts"], serde_json::json!({"pool1": 2, "pool2": 1, "pool3": 3}));
    }
}
