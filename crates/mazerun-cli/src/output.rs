use std::fmt::Write as _;

use anyhow::Result;
use serde::Serialize;

use mazerun_core::{Facing, Grid, render_with_tiles};
use mazerun_paths::{Cost, Outcome, SearchConfig, Strategy};

use crate::Format;

/// Summary printed in `--format json` mode.
#[derive(Debug, Serialize)]
pub(crate) struct Report {
    pub(crate) facing: Facing,
    pub(crate) strategy: Strategy,
    pub(crate) lowest: Option<Cost>,
    pub(crate) tiles: usize,
}

impl Report {
    pub(crate) fn new(config: &SearchConfig, outcome: &Outcome) -> Self {
        Self {
            facing: config.start_facing,
            strategy: config.strategy,
            lowest: outcome.lowest(),
            tiles: outcome.tile_count(),
        }
    }
}

/// Format `outcome` for stdout. The result always ends with a newline.
pub(crate) fn render(
    grid: &Grid,
    config: &SearchConfig,
    outcome: &Outcome,
    format: Format,
    show: bool,
) -> Result<String> {
    match format {
        Format::Json => {
            let mut s = serde_json::to_string(&Report::new(config, outcome))?;
            s.push('\n');
            Ok(s)
        }
        Format::Text => {
            let mut s = String::new();
            match outcome.lowest() {
                Some(lowest) => {
                    writeln!(s, "lowest score: {lowest}")?;
                    writeln!(s, "tiles on any best path: {}", outcome.tile_count())?;
                }
                None => writeln!(s, "no path from start to goal")?,
            }
            if show {
                writeln!(s)?;
                writeln!(s, "{}", render_with_tiles(grid, outcome.tiles()))?;
            }
            Ok(s)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mazerun_paths::search;

    fn solved(text: &str) -> (Grid, Outcome) {
        let grid: Grid = text.parse().unwrap();
        let outcome = search(&grid, &SearchConfig::default()).unwrap();
        (grid, outcome)
    }

    #[test]
    fn text_summary() {
        let (grid, out) = solved("#S..E#");
        let s = render(&grid, &SearchConfig::default(), &out, Format::Text, false).unwrap();
        assert_eq!(s, "lowest score: 3\ntiles on any best path: 4\n");
    }

    #[test]
    fn text_with_overlay() {
        let (grid, out) = solved("#S..E#");
        let s = render(&grid, &SearchConfig::default(), &out, Format::Text, true).unwrap();
        assert!(s.ends_with("\n#OOOO#\n"));
    }

    #[test]
    fn unreachable_text() {
        let (grid, out) = solved("S#E");
        let s = render(&grid, &SearchConfig::default(), &out, Format::Text, false).unwrap();
        assert_eq!(s, "no path from start to goal\n");
    }

    #[test]
    fn json_summary() {
        let (grid, out) = solved("#S..E#");
        let s = render(&grid, &SearchConfig::default(), &out, Format::Json, false).unwrap();
        assert_eq!(
            s,
            "{\"facing\":\"east\",\"strategy\":\"dijkstra\",\"lowest\":3,\"tiles\":4}\n"
        );

        let (grid, out) = solved("S#E");
        let s = render(&grid, &SearchConfig::default(), &out, Format::Json, true).unwrap();
        assert!(s.ends_with("\"lowest\":null,\"tiles\":0}\n"));
    }
}
