//! Level persistence: the collectible coordinate list.
//!
//! One collectible per line, `x, y` as integers. A missing file is seeded
//! with the default row and written back before returning, so the rest of
//! the app never observes the absence.

use std::fmt;
use std::path::Path;

pub const LEVEL_FILE: &str = "level.csv";

/// Seed layout used when no level file exists yet
pub const DEFAULT_POINTS: [(i32, i32); 5] =
    [(440, 670), (540, 670), (640, 670), (740, 670), (840, 670)];

#[derive(Debug)]
pub enum LevelError {
    Io(std::io::Error),
    Parse { line: usize, content: String },
}

impl From<std::io::Error> for LevelError {
    fn from(e: std::io::Error) -> Self {
        LevelError::Io(e)
    }
}

impl fmt::Display for LevelError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LevelError::Io(e) => write!(f, "IO error: {}", e),
            LevelError::Parse { line, content } => {
                write!(f, "bad coordinate pair on line {}: {:?}", line, content)
            }
        }
    }
}

impl std::error::Error for LevelError {}

/// Write the coordinate list, one `x, y` pair per line.
pub fn save_points<P: AsRef<Path>>(path: P, points: &[(i32, i32)]) -> Result<(), LevelError> {
    let mut out = String::new();
    for &(x, y) in points {
        out.push_str(&format!("{}, {}\n", x, y));
    }
    std::fs::write(path, out)?;
    Ok(())
}

/// Read the coordinate list from an existing file.
pub fn load_points<P: AsRef<Path>>(path: P) -> Result<Vec<(i32, i32)>, LevelError> {
    parse_points(&std::fs::read_to_string(path)?)
}

/// Read the coordinate list, seeding the file with the default layout when
/// it does not exist yet.
pub fn load_or_init<P: AsRef<Path>>(path: P) -> Result<Vec<(i32, i32)>, LevelError> {
    let path = path.as_ref();
    match load_points(path) {
        Err(LevelError::Io(e)) if e.kind() == std::io::ErrorKind::NotFound => {
            save_points(path, &DEFAULT_POINTS)?;
            Ok(DEFAULT_POINTS.to_vec())
        }
        other => other,
    }
}

fn parse_points(contents: &str) -> Result<Vec<(i32, i32)>, LevelError> {
    let mut points = Vec::new();
    for (i, line) in contents.lines().enumerate() {
        if line.trim().is_empty() {
            continue;
        }
        let pair = line.split_once(',').and_then(|(x, y)| {
            Some((x.trim().parse::<i32>().ok()?, y.trim().parse::<i32>().ok()?))
        });
        match pair {
            Some(p) => points.push(p),
            None => {
                return Err(LevelError::Parse {
                    line: i + 1,
                    content: line.to_string(),
                })
            }
        }
    }
    Ok(points)
}
