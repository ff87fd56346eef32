use std::path::PathBuf;

use bill_core::TrueTypeFace;
use log::{info, warn};

/// Font files tried in order; the first one that loads wins.
pub const CANDIDATES: [&str; 4] = [
    "arialbd.ttf",
    "Arial Bold.ttf",
    "DejaVuSans-Bold.ttf",
    "DejaVuSans.ttf",
];

/// Directories searched after the ones given on the command line.
pub fn system_font_dirs() -> Vec<PathBuf> {
    [
        ".",
        "/usr/share/fonts/truetype/dejavu",
        "/usr/share/fonts/truetype/msttcorefonts",
        "/usr/share/fonts/TTF",
        "/Library/Fonts",
        "C:\\Windows\\Fonts",
    ]
    .iter()
    .map(PathBuf::from)
    .collect()
}

/// First loadable candidate, trying every directory for one candidate
/// before moving to the next.
pub fn find_font(dirs: &[PathBuf]) -> Option<(PathBuf, TrueTypeFace)> {
    for name in CANDIDATES {
        for dir in dirs {
            let path = dir.join(name);
            if !path.is_file() {
                continue;
            }
            match TrueTypeFace::load(&path) {
                Ok(face) => return Some((path, face)),
                Err(e) => warn!("skipping font {}: {}", path.display(), e),
            }
        }
    }
    None
}

/// Resolve the face used for the statement, falling back to the face
/// compiled into `bill-core`.
pub fn resolve_face(dirs: &[PathBuf]) -> bill_core::Result<TrueTypeFace> {
    match find_font(dirs) {
        Some((path, face)) => {
            info!("using font {} ({})", face.name(), path.display());
            Ok(face)
        }
        None => {
            warn!("no font file found; using the built-in face");
            TrueTypeFace::builtin()
        }
    }
}
