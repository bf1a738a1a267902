//! Swatch map fixtures and on-disk helpers.

use std::path::{Path, PathBuf};

/// Colors used by the fixture maps
pub mod colors {
    use harmonic_colors::Rgb;

    pub const NAVY: Rgb = Rgb::new(0x1e, 0x3c, 0x78);
    pub const GOLD: Rgb = Rgb::new(0xf0, 0xc8, 0x5a);
    pub const TEAL: Rgb = Rgb::new(0x1a, 0x6b, 0x6b);
    pub const SAND: Rgb = Rgb::new(0xe6, 0xd7, 0xb4);
    pub const PAPER: Rgb = Rgb::new(0xfc, 0xfc, 0xfa);
    pub const RED: Rgb = Rgb::new(0xc8, 0x1e, 0x1e);
}

/// 300x300 navy poster with a gold title band
pub const POSTER_YAML: &str = r##"
width: 300
height: 300
patches:
  - color: "#1e3c78"
    rect: { left: 0, top: 0, right: 300, bottom: 300 }
  - color: "#f0c85a"
    rect: { left: 0, top: 200, right: 300, bottom: 260 }
"##;

/// Mostly white page with a thin red headline
pub const PAGE_JSON: &str = r##"{
  "width": 300,
  "height": 300,
  "patches": [
    {"color": "#fcfcfa", "rect": {"left": 0, "top": 0, "right": 300, "bottom": 300}},
    {"color": "#c81e1e", "rect": {"left": 0, "top": 20, "right": 300, "bottom": 40}}
  ]
}"##;

/// Teal photo on the left 40%, sand on the rest
pub const DIPTYCH_YAML: &str = r##"
width: 300
height: 200
patches:
  - color: "#1a6b6b"
    rect: { left: 0, top: 0, right: 120, bottom: 200 }
  - color: "#e6d7b4"
    rect: { left: 120, top: 0, right: 300, bottom: 200 }
"##;

/// Write `content` to `name` inside `dir` and return the path
pub fn write_file(dir: &Path, name: &str, content: &str) -> PathBuf {
    let path = dir.join(name);
    std::fs::write(&path, content).expect("write fixture");
    path
}
