//! Candidate selection — pick the single best military flight per scan cycle.
//!
//! Stateless. Ties go to the flight that appears first in the input, so the
//! running best is only replaced on a strictly higher score.

use log::{debug, info};

use crate::score::{ScoreResult, Scorer};
use crate::types::FlightRecord;

#[derive(Debug, Clone, Copy)]
pub struct CandidateSelector<'a> {
    scorer: Scorer<'a>,
}

impl<'a> CandidateSelector<'a> {
    pub fn new(scorer: Scorer<'a>) -> Self {
        CandidateSelector { scorer }
    }

    /// Every military flight with its score, in input order.
    pub fn rank<'f>(&self, flights: &'f [FlightRecord]) -> Vec<ScoreResult<'f>> {
        let candidates: Vec<ScoreResult<'f>> = flights
            .iter()
            .filter_map(|f| self.scorer.candidate(f))
            .inspect(|c| debug!("candidate {} scored {}", c.flight.label(), c.score))
            .collect();
        info!(
            "found {} military flights out of {} total",
            candidates.len(),
            flights.len()
        );
        candidates
    }

    /// Highest-scoring military flight with its score.
    pub fn pick_best_scored<'f>(&self, flights: &'f [FlightRecord]) -> Option<ScoreResult<'f>> {
        best_of(self.rank(flights))
    }

    /// Highest-scoring military flight, or `None` if nothing classifies.
    pub fn pick_best<'f>(&self, flights: &'f [FlightRecord]) -> Option<&'f FlightRecord> {
        self.pick_best_scored(flights).map(|c| c.flight)
    }
}

/// Running best over already-scored candidates, in the order given.
pub fn best_of<'f, I>(candidates: I) -> Option<ScoreResult<'f>>
where
    I: IntoIterator<Item = ScoreResult<'f>>,
{
    let mut best: Option<ScoreResult<'f>> = None;
    for candidate in candidates {
        match best {
            Some(b) if candidate.score <= b.score => {}
            _ => best = Some(candidate),
        }
    }
    best
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
