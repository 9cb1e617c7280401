//! Mission sheet parsing.

use std::fs;
use std::io;
use std::path::Path;

use thiserror::Error;

/// Error reading or interpreting a mission sheet.
#[derive(Debug, Error)]
pub enum MissionError {
    /// The sheet could not be read at all.
    #[error("failed to read the mission sheet: {0}")]
    Io(#[from] io::Error),
    /// No line named the origin system.
    #[error("the mission sheet names no origin system (no \"I'm at\" line)")]
    MissingOrigin,
}

/// A parsed mission sheet: the origin system and one destination list
/// per traveler, in sheet order.
#[derive(Debug, Clone, PartialEq)]
pub struct Missions {
    origin: String,
    travelers: Vec<Vec<String>>,
}

impl Missions {
    /// The system the travelers are picked up at and returned to.
    pub fn origin(&self) -> &str {
        &self.origin
    }

    /// Each traveler's destination names, in required visiting order.
    pub fn travelers(&self) -> &[Vec<String>] {
        &self.travelers
    }
}

/// Reads and parses a mission sheet from disk.
pub fn load(path: impl AsRef<Path>) -> Result<Missions, MissionError> {
    parse(&fs::read_to_string(path)?)
}

/// Parses mission sheet text.
///
/// The line containing `I'm at` names the origin in its second
/// tab-separated field. Every non-blank line after the
/// `< Missions START >` marker describes one traveler as tab-separated
/// destination names; blank fields from stray tabs are dropped and lines
/// before the marker are ignored.
///
/// # Examples
///
/// ```
/// use sightseer::mission::parse;
///
/// let sheet = "I'm at\tFotla\n\
///              < Missions START >\n\
///              Aerial\tExbeur\n\
///              Hors\n";
/// let missions = parse(sheet).unwrap();
/// assert_eq!(missions.origin(), "Fotla");
/// assert_eq!(missions.travelers().len(), 2);
/// assert_eq!(missions.travelers()[0], vec!["Aerial", "Exbeur"]);
/// ```
pub fn parse(text: &str) -> Result<Missions, MissionError> {
    let mut origin = None;
    let mut in_missions = false;
    let mut travelers = Vec::new();

    for line in text.lines() {
        let line = line.trim();
        if line.contains("I'm at") {
            if let Some(name) = line.split('\t').nth(1).map(str::trim) {
                if !name.is_empty() {
                    origin = Some(name.to_string());
                }
            }
            continue;
        }
        if line.contains("< Missions START >") {
            in_missions = true;
            continue;
        }
        if in_missions && !line.is_empty() {
            let destinations: Vec<String> = line
                .split('\t')
                .map(str::trim)
                .filter(|field| !field.is_empty())
                .map(str::to_string)
                .collect();
            travelers.push(destinations);
        }
    }

    match origin {
        Some(origin) => Ok(Missions { origin, travelers }),
        None => Err(MissionError::MissingOrigin),
    }
}
