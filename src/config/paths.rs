//! Path management for spendtrack
//!
//! All data and artifacts live under a single base directory.
//!
//! ## Path Resolution Order
//!
//! 1. `SPENDTRACK_HOME` environment variable (if set)
//! 2. The current working directory

use std::path::PathBuf;

/// Manages all paths used by spendtrack
#[derive(Debug, Clone)]
pub struct Paths {
    /// Base directory for all spendtrack data and artifacts
    base_dir: PathBuf,
}

impl Paths {
    /// Create a new Paths instance
    ///
    /// Path resolution:
    /// 1. `SPENDTRACK_HOME` env var (explicit override)
    /// 2. The current working directory
    pub fn new() -> Self {
        let base_dir = match std::env::var("SPENDTRACK_HOME") {
            Ok(custom) => PathBuf::from(custom),
            Err(_) => PathBuf::from("."),
        };
        Self { base_dir }
    }

    /// Create Paths with a custom base directory (useful for testing)
    pub fn with_base_dir(base_dir: PathBuf) -> Self {
        Self { base_dir }
    }

    /// Get the base directory
    pub fn base_dir(&self) -> &PathBuf {
        &self.base_dir
    }

    /// Get the path to the expense CSV file
    pub fn expenses_file(&self) -> PathBuf {
        self.base_dir.join("data").join("expenses.csv")
    }

    /// Get the directory all report artifacts are written to
    pub fn reports_dir(&self) -> PathBuf {
        self.base_dir.join("reports")
    }

    /// Get the path to the optional project metadata file
    pub fn project_info_file(&self) -> PathBuf {
        self.base_dir.join("project_info.json")
    }

    /// Get the path to the optional cover-page logo
    pub fn logo_file(&self) -> PathBuf {
        self.base_dir.join("logo.png")
    }

    /// Get the path to the trend line chart image
    pub fn trend_chart(&self) -> PathBuf {
        self.reports_dir().join("spending_trend.png")
    }

    /// Get the path to the category pie chart image
    pub fn category_chart(&self) -> PathBuf {
        self.reports_dir().join("category_pie_chart.png")
    }

    /// Get the path to the monthly bar chart image
    pub fn monthly_bar_chart(&self) -> PathBuf {
        self.reports_dir().join("monthly_bar_chart.png")
    }

    /// Get the path to the top-10 expenses chart image
    pub fn top_expenses_chart(&self) -> PathBuf {
        self.reports_dir().join("top_10_expenses.png")
    }

    /// Get the path to the monthly summary spreadsheet
    pub fn spreadsheet_file(&self) -> PathBuf {
        self.reports_dir().join("monthly_summary.xlsx")
    }

    /// Get the path to the generated PDF report
    pub fn pdf_file(&self) -> PathBuf {
        self.reports_dir().join("Full_Expense_Report.pdf")
    }

    /// Candidate TTF files probed when registering the chart font.
    ///
    /// Project-root candidates first (matching the fonts a user may drop next
    /// to the data), then common system locations.
    pub fn font_candidates(&self) -> Vec<PathBuf> {
        let mut candidates = vec![
            self.base_dir.join("NotoSansDevanagari-Regular.ttf"),
            self.base_dir.join("DejaVuSans.ttf"),
            self.base_dir.join("NotoSans-Regular.ttf"),
        ];
        for system in [
            "/usr/share/fonts/truetype/dejavu/DejaVuSans.ttf",
            "/usr/share/fonts/TTF/DejaVuSans.ttf",
            "/usr/share/fonts/dejavu/DejaVuSans.ttf",
            "/usr/share/fonts/truetype/liberation/LiberationSans-Regular.ttf",
            "/Library/Fonts/Arial.ttf",
            "/System/Library/Fonts/Supplemental/Arial.ttf",
        ] {
            candidates.push(PathBuf::from(system));
        }
        candidates
    }
}

impl Default for Paths {
    fn default() -> Self {
        Self::new()
    }
}
