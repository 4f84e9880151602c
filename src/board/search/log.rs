use std::fmt;

use crate::board::{Move, Side};

/// One line of information per completed decision.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SearchInfo {
    pub depth: u32,
    pub side: Side,
    pub best_move: Option<Move>,
    /// Root score; `None` when the move was forced
    pub score: Option<i32>,
    pub nodes: u64,
    pub qnodes: u64,
    pub tt_hits: u64,
    pub time_ms: u128,
}

impl fmt::Display for SearchInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "info depth {} side {}", self.depth, self.side)?;
        match self.score {
            Some(score) => write!(f, " score {score}")?,
            None => write!(f, " score forced")?,
        }
        write!(
            f,
            " nodes {} qnodes {} tthits {} time {}",
            self.nodes, self.qnodes, self.tt_hits, self.time_ms
        )?;
        match self.best_move {
            Some(mv) => write!(f, " bestmove {mv}"),
            None => write!(f, " bestmove none"),
        }
    }
}

pub trait SearchLogger {
    fn info(&self, info: &SearchInfo);
}

/// Forwards search info to the `log` facade at debug level.
///
/// Does nothing when the `logging` feature is off.
pub struct LogLogger;

impl SearchLogger for LogLogger {
    fn info(&self, info: &SearchInfo) {
        #[cfg(feature = "logging")]
        ::log::debug!("{info}");
        #[cfg(not(feature = "logging"))]
        let _ = info;
    }
}

/// Discards everything.
pub struct SilentLogger;

impl SearchLogger for SilentLogger {
    fn info(&self, _info: &SearchInfo) {}
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::Square;

    #[test]
    fn info_line_format() {
        let info = SearchInfo {
            depth: 4,
            side: Side::First,
            best_move: Some(Move::new(Square(2, 1), Square(3, 2))),
            score: Some(37),
            nodes: 1200,
            qnodes: 300,
            tt_hits: 12,
            time_ms: 5,
        };
        assert_eq!(
            info.to_string(),
            "info depth 4 side First score 37 nodes 1200 qnodes 300 tthits 12 time 5 bestmove b3c4"
        );
    }

    #[test]
    fn forced_move_line() {
        let info = SearchInfo {
            depth: 2,
            side: Side::Second,
            best_move: None,
            score: None,
            nodes: 0,
            qnodes: 0,
            tt_hits: 0,
            time_ms: 0,
        };
        assert!(info.to_string().contains("score forced"));
        assert!(info.to_string().ends_with("bestmove none"));
    }
}
