//! Chart font registration
//!
//! plotters renders text with fonts registered at runtime. Registration is an
//! explicit step invoked once by the report compiler (not an import-time side
//! effect) so that startup stays deterministic and testable. The first usable
//! TTF among the candidates becomes the `sans-serif` face; when none is found
//! chart rendering fails soft and the chart pages are skipped.

use std::path::{Path, PathBuf};
use std::sync::OnceLock;

use plotters::style::{register_font, FontStyle};
use tracing::{info, warn};

static CHART_FONT: OnceLock<Option<PathBuf>> = OnceLock::new();

/// Register the chart font from the first usable candidate.
///
/// Idempotent: only the first call scans the candidates; later calls return
/// the recorded outcome. Returns the path of the registered font, if any.
pub fn register_chart_fonts(candidates: &[PathBuf]) -> Option<&'static Path> {
    CHART_FONT
        .get_or_init(|| {
            for candidate in candidates {
                if !candidate.exists() {
                    continue;
                }
                let bytes = match std::fs::read(candidate) {
                    Ok(bytes) => bytes,
                    Err(e) => {
                        warn!("failed to read font {}: {}", candidate.display(), e);
                        continue;
                    }
                };
                // register_font keeps the bytes for the process lifetime.
                let bytes: &'static [u8] = Box::leak(bytes.into_boxed_slice());
                match register_font("sans-serif", FontStyle::Normal, bytes) {
                    Ok(()) => {
                        info!("registered chart font {}", candidate.display());
                        return Some(candidate.clone());
                    }
                    Err(_) => {
                        warn!("invalid font file {}", candidate.display());
                    }
                }
            }
            warn!("no usable chart font found; chart pages will be skipped");
            None
        })
        .as_deref()
}
