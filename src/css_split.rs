//! Stylesheet splitter
//!
//! Cuts the monolithic `style.css` into per-section files using the
//! `/* ===== NAME =====` banner comments as delimiters.

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::SplitError;
use crate::logger;

/// Where a section starts
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Start {
    FileStart,
    Marker(&'static str),
}

/// Where a section ends (exclusive)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum End {
    Marker(&'static str),
    FileEnd,
}

/// One output file and the delimiters bounding it
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Section {
    pub file: &'static str,
    pub start: Start,
    pub end: End,
}

const fn section(file: &'static str, start: Start, end: End) -> Section {
    Section { file, start, end }
}

const NAVIGATION: &str = "/* ===== NAVIGATION =====";
const HERO: &str = "/* ===== HERO SECTION =====";
const FEATURED: &str = "/* ===== FEATURED SECTION =====";
const PORTFOLIO_HEADER: &str = "/* ===== PORTFOLIO HEADER =====";
const ABOUT: &str = "/* ===== ABOUT SECTION =====";
const CONCEPT_DETAIL: &str = "/* ===== CONCEPT DETAIL =====";
const FOOTER: &str = "/* ===== FOOTER =====";
const ANIMATIONS: &str = "/* ===== ANIMATIONS =====";
const RESPONSIVE: &str = "/* ===== RESPONSIVE DESIGN =====";

/// The site's stylesheet layout
pub const SECTIONS: &[Section] = &[
    section("base.css", Start::FileStart, End::Marker(NAVIGATION)),
    section("components/navbar.css", Start::Marker(NAVIGATION), End::Marker(HERO)),
    section("components/footer.css", Start::Marker(FOOTER), End::Marker(ANIMATIONS)),
    section("pages/home.css", Start::Marker(HERO), End::Marker(FEATURED)),
    section("pages/portfolio.css", Start::Marker(PORTFOLIO_HEADER), End::Marker(ABOUT)),
    section("pages/about.css", Start::Marker(ABOUT), End::Marker(CONCEPT_DETAIL)),
    section("pages/concepts.css", Start::Marker(CONCEPT_DETAIL), End::Marker(FOOTER)),
    section("utils/animations.css", Start::Marker(ANIMATIONS), End::Marker(RESPONSIVE)),
    section("utils/responsive.css", Start::Marker(RESPONSIVE), End::FileEnd),
];

/// Extract one section's text, or `None` if its start marker is absent.
///
/// The end marker is searched for after the start; a missing end marker
/// runs the section to the end of the stylesheet.
pub fn extract<'a>(css: &'a str, section: &Section) -> Option<&'a str> {
    let (from, skip) = match section.start {
        Start::FileStart => (0, 0),
        Start::Marker(marker) => (css.find(marker)?, marker.len()),
    };
    let rest = &css[from..];
    let to = match section.end {
        End::Marker(marker) => rest[skip..].find(marker).map_or(rest.len(), |i| i + skip),
        End::FileEnd => rest.len(),
    };
    Some(&rest[..to])
}

/// Split `css` into `(file, text)` pairs, in table order.
/// Sections whose start marker is missing are skipped.
pub fn split_sections<'a>(css: &'a str, sections: &[Section]) -> Vec<(&'static str, &'a str)> {
    sections
        .iter()
        .filter_map(|s| match extract(css, s) {
            Some(text) => Some((s.file, text)),
            None => {
                logger::log_warning(&format!(
                    "Start marker for {} not found, section skipped",
                    s.file
                ));
                None
            }
        })
        .collect()
}

/// Read `input`, write every section under `out_dir`, return the files written
pub fn split_file(input: &Path, out_dir: &Path) -> Result<Vec<PathBuf>, SplitError> {
    let css = fs::read_to_string(input).map_err(|source| SplitError::Read {
        path: input.to_path_buf(),
        source,
    })?;

    let mut written = Vec::new();
    for (file, text) in split_sections(&css, SECTIONS) {
        let path = out_dir.join(file);
        write_section(&path, text)?;
        written.push(path);
    }
    Ok(written)
}

fn write_section(path: &Path, text: &str) -> Result<(), SplitError> {
    let to_err = |source| SplitError::Write {
        path: path.to_path_buf(),
        source,
    };
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(to_err)?;
    }
    fs::write(path, text).map_err(to_err)
}
