//! Report compiler
//!
//! Orchestrates the full pipeline: load records, derive aggregates, render
//! chart images, export the spreadsheet and assemble the paginated PDF
//! (cover, chart pages, tabular appendix). Missing optional assets never
//! abort the document; the compiler always produces a valid, possibly
//! shorter, PDF.

use std::path::PathBuf;

use chrono::Local;
use tracing::{info, warn};

use crate::config::{Paths, ProjectInfo};
use crate::error::ExpenseResult;
use crate::models::Expense;
use crate::reports::{charts, document::DocumentBuilder, fonts, spreadsheet};
use crate::services::aggregate;
use crate::storage::ExpenseStore;

/// Records per appendix table page
pub const ROWS_PER_PAGE: usize = 28;

/// Cursor floor on the cover page; below this the team list wraps to a new page
const COVER_BOTTOM_MARGIN_MM: f32 = 42.0;

/// Top of the content area
const CONTENT_TOP_MM: f32 = 269.0;

/// Paths of everything the compiler produced
#[derive(Debug, Clone)]
pub struct ReportArtifacts {
    pub trend_chart: Option<PathBuf>,
    pub category_chart: Option<PathBuf>,
    pub monthly_bar_chart: Option<PathBuf>,
    pub top_expenses_chart: Option<PathBuf>,
    pub spreadsheet: Option<PathBuf>,
    pub pdf: PathBuf,
    pub pdf_pages: u32,
}

/// Compiles the report artifact set from the expense store
pub struct ReportCompiler<'a> {
    store: &'a ExpenseStore,
    paths: &'a Paths,
}

impl<'a> ReportCompiler<'a> {
    pub fn new(store: &'a ExpenseStore, paths: &'a Paths) -> Self {
        Self { store, paths }
    }

    /// Run the whole pipeline: charts, spreadsheet and the PDF document
    pub fn compile(&self) -> ExpenseResult<ReportArtifacts> {
        std::fs::create_dir_all(self.paths.reports_dir())?;
        fonts::register_chart_fonts(&self.paths.font_candidates());

        let expenses = self.store.read_all()?;
        let summary = aggregate::monthly_summary(&expenses);
        let info = ProjectInfo::load_or_default(&self.paths.project_info_file());

        let trend_chart = self.render_soft(charts::render_trend_chart(
            &self.paths.trend_chart(),
            &summary,
        ));
        let mut categories: Vec<(String, f64)> = aggregate::category_summary(&expenses)
            .into_iter()
            .collect();
        categories.sort_by(|a, b| a.0.cmp(&b.0));
        let category_chart = self.render_soft(charts::render_category_pie(
            &self.paths.category_chart(),
            &categories,
        ));
        let monthly_bar_chart = self.render_soft(charts::render_monthly_bar(
            &self.paths.monthly_bar_chart(),
            &summary,
        ));
        let top = aggregate::top_n(&expenses, aggregate::DEFAULT_TOP_N);
        let top_expenses_chart = self.render_soft(charts::render_top_expenses(
            &self.paths.top_expenses_chart(),
            &top,
        ));

        let spreadsheet =
            spreadsheet::export_monthly_summary(&self.paths.spreadsheet_file(), &summary)?;

        let (pdf, pdf_pages) = self.assemble_pdf(
            &info,
            &expenses,
            trend_chart.as_deref(),
            category_chart.as_deref(),
            monthly_bar_chart.as_deref(),
            top_expenses_chart.as_deref(),
        )?;

        info!("report written to {}", pdf.display());
        Ok(ReportArtifacts {
            trend_chart,
            category_chart,
            monthly_bar_chart,
            top_expenses_chart,
            spreadsheet,
            pdf,
            pdf_pages,
        })
    }

    /// Spreadsheet export alone (the `export` command)
    pub fn export_spreadsheet(&self) -> ExpenseResult<Option<PathBuf>> {
        std::fs::create_dir_all(self.paths.reports_dir())?;
        let expenses = self.store.read_all()?;
        let summary = aggregate::monthly_summary(&expenses);
        spreadsheet::export_monthly_summary(&self.paths.spreadsheet_file(), &summary)
    }

    /// A failed chart render skips the page instead of aborting the report
    fn render_soft(&self, result: ExpenseResult<Option<PathBuf>>) -> Option<PathBuf> {
        match result {
            Ok(path) => path,
            Err(e) => {
                warn!("chart skipped: {}", e);
                None
            }
        }
    }

    fn assemble_pdf(
        &self,
        info: &ProjectInfo,
        expenses: &[Expense],
        trend_chart: Option<&std::path::Path>,
        category_chart: Option<&std::path::Path>,
        monthly_bar_chart: Option<&std::path::Path>,
        top_expenses_chart: Option<&std::path::Path>,
    ) -> ExpenseResult<(PathBuf, u32)> {
        let mut doc = DocumentBuilder::new(&info.project_title)?;

        self.cover_page(&mut doc, info);

        if let Some(chart) = trend_chart {
            doc.text_bold("Monthly Spending Trend", 16.0, 20.0, 277.0);
            doc.image(chart, 20.0, 265.0, 170.0, 85.0);
            doc.finish_page();
        }

        if let Some(chart) = category_chart {
            doc.text_bold("Category-wise Spending Distribution", 16.0, 20.0, 277.0);
            doc.image(chart, 35.0, 265.0, 140.0, 140.0);
            doc.finish_page();
        }

        if monthly_bar_chart.is_some() || top_expenses_chart.is_some() {
            doc.text_bold("Monthly Overview and Top Expenses", 16.0, 20.0, 277.0);
            if let Some(chart) = monthly_bar_chart {
                doc.image(chart, 20.0, 268.0, 170.0, 85.0);
            }
            if let Some(chart) = top_expenses_chart {
                doc.image(chart, 20.0, 165.0, 170.0, 85.0);
            }
            doc.finish_page();
        }

        self.appendix(&mut doc, expenses);

        // The page scheduled by the last finish_page never materializes,
        // so this is the count of pages actually in the document.
        let pages = doc.page_number();
        let path = self.paths.pdf_file();
        doc.save(&path)?;
        Ok((path, pages))
    }

    /// Cover page: metadata block, optional logo, team member list.
    /// The team list paginates forward when it overflows the page.
    fn cover_page(&self, doc: &mut DocumentBuilder, info: &ProjectInfo) {
        let logo = self.paths.logo_file();
        if logo.exists() {
            doc.image(&logo, 160.0, 290.0, 35.0, 35.0);
        }

        doc.text_centered(&info.project_title, 24.0, CONTENT_TOP_MM, true);
        doc.text_centered(&info.project_name, 12.0, 258.0, false);
        doc.text_centered(&info.course, 12.0, 251.0, false);
        doc.text_centered(&info.institute, 12.0, 244.0, false);
        doc.text_centered(&format!("Semester: {}", info.semester), 12.0, 237.0, false);

        doc.text(&format!("Supervisor: {}", info.supervisor), 11.0, 28.0, 226.0);
        doc.text(
            &format!("Generated by: {}", info.generated_by),
            11.0,
            28.0,
            219.0,
        );
        doc.text(
            &format!("Date: {}", Local::now().format("%Y-%m-%d %H:%M:%S")),
            11.0,
            28.0,
            212.0,
        );

        doc.text_bold("Team Members:", 13.0, 28.0, 200.0);
        let mut y = 193.0;
        for member in &info.team {
            doc.text(&format!("- {}", member.name), 11.0, 32.0, y);
            y -= 6.0;
            if y < COVER_BOTTOM_MARGIN_MM {
                doc.finish_page();
                y = CONTENT_TOP_MM;
            }
        }

        doc.finish_page();
    }

    /// Full record set as a paginated table, a fixed number of records per
    /// page, each page self-contained with its own header row.
    fn appendix(&self, doc: &mut DocumentBuilder, expenses: &[Expense]) {
        if expenses.is_empty() {
            return;
        }

        for chunk in expenses.chunks(ROWS_PER_PAGE) {
            self.table_page(doc, chunk);
            doc.finish_page();
        }
    }

    fn table_page(&self, doc: &mut DocumentBuilder, rows: &[Expense]) {
        // Column edges in mm: date, category, amount, description
        const EDGES: [f32; 5] = [14.0, 42.0, 84.0, 112.0, 196.0];
        const ROW_H: f32 = 7.0;
        let top = 280.0;

        doc.text_bold("Date", 9.0, EDGES[0] + 2.0, top - 5.0);
        doc.text_bold("Category", 9.0, EDGES[1] + 2.0, top - 5.0);
        doc.text_bold("Amount", 9.0, EDGES[2] + 2.0, top - 5.0);
        doc.text_bold("Description", 9.0, EDGES[3] + 2.0, top - 5.0);

        for (i, expense) in rows.iter().enumerate() {
            let row_top = top - ROW_H * (i + 1) as f32;
            let baseline = row_top - 5.0;
            doc.text(
                &expense.date.format("%Y-%m-%d").to_string(),
                9.0,
                EDGES[0] + 2.0,
                baseline,
            );
            doc.text(&truncate(&expense.category, 26), 9.0, EDGES[1] + 2.0, baseline);
            doc.text(&format!("{:.2}", expense.amount), 9.0, EDGES[2] + 2.0, baseline);
            doc.text(
                &truncate(&expense.description, 52),
                9.0,
                EDGES[3] + 2.0,
                baseline,
            );
        }

        let bottom = top - ROW_H * (rows.len() + 1) as f32;
        for i in 0..=(rows.len() + 1) {
            doc.hline(EDGES[0], EDGES[4], top - ROW_H * i as f32);
        }
        for x in EDGES {
            doc.vline(x, bottom, top);
        }
    }
}

/// Number of appendix table pages a record count occupies
pub fn appendix_page_count(records: usize, per_page: usize) -> usize {
    if records == 0 {
        0
    } else {
        (records + per_page - 1) / per_page
    }
}

fn truncate(text: &str, max_chars: usize) -> String {
    if text.chars().count() <= max_chars {
        text.to_string()
    } else {
        let mut out: String = text.chars().take(max_chars.saturating_sub(1)).collect();
        out.push('…');
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use tempfile::TempDir;

    fn expense(date: &str, category: &str, amount: f64, description: &str) -> Expense {
        Expense::new(
            NaiveDate::parse_from_str(date, "%Y-%m-%d").unwrap(),
            category,
            amount,
            description,
        )
    }

    #[test]
    fn test_appendix_page_count() {
        assert_eq!(appendix_page_count(0, 28), 0);
        assert_eq!(appendix_page_count(1, 28), 1);
        assert_eq!(appendix_page_count(28, 28), 1);
        assert_eq!(appendix_page_count(29, 28), 2);
        assert_eq!(appendix_page_count(57, 28), 3);
    }

    #[test]
    fn test_57_records_chunk_into_28_28_1() {
        let expenses: Vec<Expense> = (0..57)
            .map(|i| expense("2024-01-15", "Food", i as f64, "x"))
            .collect();
        let sizes: Vec<usize> = expenses.chunks(ROWS_PER_PAGE).map(|c| c.len()).collect();
        assert_eq!(sizes, vec![28, 28, 1]);
    }

    #[test]
    fn test_compile_over_empty_store_produces_cover_only_pdf() {
        let dir = TempDir::new().unwrap();
        let paths = Paths::with_base_dir(dir.path().to_path_buf());
        let store = ExpenseStore::new(paths.expenses_file());
        store.init().unwrap();

        let artifacts = ReportCompiler::new(&store, &paths).compile().unwrap();
        assert!(artifacts.pdf.exists());
        assert_eq!(artifacts.trend_chart, None);
        assert_eq!(artifacts.category_chart, None);
        assert_eq!(artifacts.monthly_bar_chart, None);
        assert_eq!(artifacts.top_expenses_chart, None);
        assert_eq!(artifacts.spreadsheet, None);
        // No charts, no records: the cover is the whole document.
        assert_eq!(artifacts.pdf_pages, 1);
    }

    #[test]
    fn test_57_records_assemble_three_appendix_pages() {
        let dir = TempDir::new().unwrap();
        let paths = Paths::with_base_dir(dir.path().to_path_buf());
        let store = ExpenseStore::new(paths.expenses_file());
        store.init().unwrap();
        for i in 0..57 {
            store
                .append(&expense("2024-01-15", "Food", 1.0 + i as f64, "x"))
                .unwrap();
        }

        let artifacts = ReportCompiler::new(&store, &paths).compile().unwrap();
        let chart_pages = artifacts.trend_chart.is_some() as u32
            + artifacts.category_chart.is_some() as u32
            + (artifacts.monthly_bar_chart.is_some() || artifacts.top_expenses_chart.is_some())
                as u32;
        assert_eq!(artifacts.pdf_pages, 1 + chart_pages + 3);
    }

    #[test]
    fn test_compile_with_data_produces_pdf_and_spreadsheet() {
        let dir = TempDir::new().unwrap();
        let paths = Paths::with_base_dir(dir.path().to_path_buf());
        let store = ExpenseStore::new(paths.expenses_file());
        store.init().unwrap();
        store
            .append(&expense("2024-01-05", "Food", 12.5, "lunch"))
            .unwrap();
        store
            .append(&expense("2024-02-09", "Travel", 55.0, "train"))
            .unwrap();

        let artifacts = ReportCompiler::new(&store, &paths).compile().unwrap();
        assert!(artifacts.pdf.exists());
        assert_eq!(artifacts.spreadsheet, Some(paths.spreadsheet_file()));
        assert!(paths.spreadsheet_file().exists());
    }

    #[test]
    fn test_long_team_list_does_not_break_compilation() {
        let dir = TempDir::new().unwrap();
        let paths = Paths::with_base_dir(dir.path().to_path_buf());
        let team: Vec<String> = (0..80).map(|i| format!("{{\"name\": \"member {}\"}}", i)).collect();
        std::fs::write(
            paths.project_info_file(),
            format!("{{\"team\": [{}]}}", team.join(",")),
        )
        .unwrap();
        let store = ExpenseStore::new(paths.expenses_file());
        store.init().unwrap();

        let artifacts = ReportCompiler::new(&store, &paths).compile().unwrap();
        assert!(artifacts.pdf.exists());
    }
}
