//! Score tracking, high-score persistence and game history
//!
//! The record is a two-line text file: holder name, then the score as
//! decimal text. History is an append-only log with one line per completed
//! run. Both live in a data directory owned by this board; every I/O
//! failure is logged and swallowed, never propagated.

use std::fs;
use std::io::Write as _;
use std::path::PathBuf;

const HIGH_SCORE_FILE: &str = "highscore.txt";
const HISTORY_FILE: &str = "scores.txt";
const DEFAULT_HOLDER: &str = "None";
const DEFAULT_PLAYER: &str = "Player";

/// Session score plus the persisted record.
#[derive(Debug, Clone)]
pub struct ScoreBoard {
    score: f32,
    coins: u32,
    multiplier: u32,
    player_name: String,
    high_score: f32,
    high_score_name: String,
    coin_value: f32,
    data_dir: PathBuf,
}

impl ScoreBoard {
    /// Create a board rooted at `data_dir`, loading any existing record.
    /// The current player defaults to the system username.
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        let mut board = Self {
            score: 0.0,
            coins: 0,
            multiplier: 1,
            player_name: default_player_name(),
            high_score: 0.0,
            high_score_name: DEFAULT_HOLDER.to_owned(),
            coin_value: 50.0,
            data_dir: data_dir.into(),
        };
        board.load_high_score();
        board
    }

    pub fn with_coin_value(mut self, value: f32) -> Self {
        self.coin_value = value;
        self
    }

    /// Empty names are rejected; the previous name stays.
    pub fn set_player_name(&mut self, name: &str) {
        if !name.is_empty() {
            self.player_name = name.to_owned();
        }
    }

    /// Add to the running score (multiplier applies) and re-check the
    /// record; beating it persists immediately, not only at game end.
    pub fn add_score(&mut self, amount: f32) {
        self.score += amount * self.multiplier as f32;
        self.check_record();
    }

    /// Award collected coins: bumps the coin count and adds flat coin
    /// value to the score. The multiplier does not apply here.
    pub fn add_coins(&mut self, count: u32) {
        self.coins += count;
        self.score += count as f32 * self.coin_value;
        self.check_record();
    }

    fn check_record(&mut self) {
        if self.score > self.high_score {
            self.high_score = self.score;
            self.high_score_name = self.player_name.clone();
            self.save_high_score();
        }
    }

    /// Write the two-line record. Failures are logged and the save is
    /// skipped for this call.
    pub fn save_high_score(&self) {
        if let Err(err) = fs::create_dir_all(&self.data_dir) {
            log::warn!(
                "could not create data directory {}: {err}",
                self.data_dir.display()
            );
            return;
        }
        let path = self.data_dir.join(HIGH_SCORE_FILE);
        let record = format!("{}\n{}\n", self.high_score_name, self.high_score);
        if let Err(err) = fs::write(&path, record) {
            log::warn!("failed to save high score to {}: {err}", path.display());
        }
    }

    /// Load the record; missing or malformed files fall back to
    /// (0, "None").
    pub fn load_high_score(&mut self) {
        let path = self.data_dir.join(HIGH_SCORE_FILE);
        let (score, name) = match fs::read_to_string(&path) {
            Ok(text) => parse_record(&text).unwrap_or_else(|| {
                log::warn!("malformed high score file {}", path.display());
                (0.0, DEFAULT_HOLDER.to_owned())
            }),
            Err(_) => (0.0, DEFAULT_HOLDER.to_owned()),
        };
        self.high_score = score;
        self.high_score_name = name;
    }

    /// Append one history line for a completed run:
    /// `timestamp | player | score | coins | flag`.
    pub fn append_history(&self, timestamp: &str) {
        if let Err(err) = fs::create_dir_all(&self.data_dir) {
            log::warn!(
                "could not create data directory {}: {err}",
                self.data_dir.display()
            );
            return;
        }
        let path = self.data_dir.join(HISTORY_FILE);
        let flag = if self.is_record_run() { "HIGH SCORE!" } else { "" };
        let line = format!(
            "{timestamp} | {} | {} | {} | {flag}\n",
            self.player_name, self.score as i64, self.coins
        );
        let result = fs::OpenOptions::new()
            .append(true)
            .create(true)
            .open(&path)
            .and_then(|mut file| file.write_all(line.as_bytes()));
        if let Err(err) = result {
            log::warn!("failed to append history to {}: {err}", path.display());
        }
    }

    /// Whether the current run holds the stored record.
    pub fn is_record_run(&self) -> bool {
        self.score >= self.high_score
    }

    pub fn score(&self) -> f32 {
        self.score
    }

    pub fn coins(&self) -> u32 {
        self.coins
    }

    pub fn multiplier(&self) -> u32 {
        self.multiplier
    }

    pub fn set_multiplier(&mut self, multiplier: u32) {
        self.multiplier = multiplier;
    }

    pub fn high_score(&self) -> f32 {
        self.high_score
    }

    pub fn high_score_name(&self) -> &str {
        &self.high_score_name
    }

    pub fn player_name(&self) -> &str {
        &self.player_name
    }
}

fn parse_record(text: &str) -> Option<(f32, String)> {
    let mut lines = text.lines();
    let name = lines.next()?.to_owned();
    let score = lines.next()?.trim().parse::<f32>().ok()?;
    Some((score, name))
}

fn default_player_name() -> String {
    std::env::var("USER")
        .or_else(|_| std::env::var("USERNAME"))
        .unwrap_or_else(|_| DEFAULT_PLAYER.to_owned())
}
