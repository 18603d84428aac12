// Copyright @yucwang 2026

use std::fs;
use std::path::Path;

use crate::core::control_grid::{ControlGrid, POINT_COUNT};
use crate::math::constants::{Float, Vector3f};

pub const DEFAULT_POINTS_FILE: &str = "patchPoints.txt";

/// Reads the first 16 whitespace-separated triples, row by row. Returns
/// `None` when fewer than 16 complete triples parse; tokens after the 16th
/// triple are ignored.
pub fn parse_control_points(input: &str) -> Option<ControlGrid> {
    let mut values = Vec::with_capacity(POINT_COUNT * 3);
    for token in input.split_whitespace() {
        if values.len() == POINT_COUNT * 3 {
            break;
        }
        match token.parse::<Float>() {
            Ok(v) => values.push(v),
            Err(_) => break,
        }
    }
    if values.len() < POINT_COUNT * 3 {
        return None;
    }

    let points: Vec<Vector3f> = values
        .chunks_exact(3)
        .map(|c| Vector3f::new(c[0], c[1], c[2]))
        .collect();
    ControlGrid::from_row_major(&points)
}

/// Loads a control-point file. Missing, unreadable and truncated files all
/// yield the default grid.
pub fn load_control_points<P: AsRef<Path>>(path: P) -> ControlGrid {
    let path = path.as_ref();
    let data = match fs::read_to_string(path) {
        Ok(data) => data,
        Err(err) => {
            log::warn!("Cannot read control points from {} ({}), using default patch.", path.display(), err);
            return ControlGrid::default();
        }
    };

    match parse_control_points(&data) {
        Some(grid) => {
            log::info!("Loaded {} control points from {}.", POINT_COUNT, path.display());
            grid
        }
        None => {
            log::warn!("Fewer than {} control points in {}, using default patch.", POINT_COUNT, path.display());
            ControlGrid::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn triples(count: usize) -> String {
        (0..count)
            .map(|k| format!("{} {} {}\n", k as Float, k as Float * 0.5, -(k as Float)))
            .collect()
    }

    #[test]
    fn test_sixteen_triples_fill_row_major() {
        let grid = parse_control_points(&triples(16)).expect("16 triples");
        for k in 0..POINT_COUNT {
            let f = k as Float;
            assert_eq!(grid.point(k), Vector3f::new(f, f * 0.5, -f));
        }
        // Row 1, column 2.
        assert_eq!(grid.get(2, 1), Vector3f::new(6.0, 3.0, -6.0));
    }

    #[test]
    fn test_extra_tokens_are_ignored() {
        let mut text = triples(16);
        text.push_str("9 9 9 junk");
        assert!(parse_control_points(&text).is_some());
    }

    #[test]
    fn test_truncated_input_is_rejected() {
        assert!(parse_control_points(&triples(10)).is_none());
        assert!(parse_control_points("1 2 3 x 5 6").is_none());
        assert!(parse_control_points("").is_none());
    }

    #[test]
    fn test_loader_falls_back_to_default() {
        let dir = std::env::temp_dir();
        let short = dir.join(format!("patchlab_{}_short.txt", std::process::id()));
        fs::write(&short, triples(10)).expect("write temp file");
        assert_eq!(load_control_points(&short), ControlGrid::default());
        let _ = fs::remove_file(&short);

        let missing = dir.join("patchlab_definitely_missing_points.txt");
        assert_eq!(load_control_points(&missing), ControlGrid::default());
    }

    #[test]
    fn test_loader_reads_full_file() {
        let path = std::env::temp_dir().join(format!("patchlab_{}_full.txt", std::process::id()));
        fs::write(&path, triples(16)).expect("write temp file");
        let grid = load_control_points(&path);
        assert_eq!(grid.point(15), Vector3f::new(15.0, 7.5, -15.0));
        let _ = fs::remove_file(&path);
    }
}
