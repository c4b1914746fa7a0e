use chrono::{DateTime, SecondsFormat, Utc};
use serde::Serialize;
use std::time::Duration;

use crate::core::constants::output_formats;
use crate::core::error::Result;
use crate::core::types::{ProbeResult, ScanMode};
use crate::ui::color::Colors;
use crate::ui::table::{Table, TableAlignment, TableBuilder, render_panel, render_rule};

const RULE_WIDTH: usize = 60;

/// Every result of one scan plus when and how long it ran.
#[derive(Debug, Clone)]
pub struct ScanReport {
    mode: ScanMode,
    target: Option<String>,
    results: Vec<ProbeResult>,
    elapsed: Duration,
    generated_at: DateTime<Utc>,
}

#[derive(Serialize)]
struct JsonReport<'a> {
    mode: ScanMode,
    #[serde(skip_serializing_if = "Option::is_none")]
    target: Option<&'a str>,
    generated_at: String,
    elapsed_seconds: f64,
    total: usize,
    valid_count: usize,
    results: &'a [ProbeResult],
    valid: Vec<&'a ProbeResult>,
}

impl ScanReport {
    pub fn new(
        mode: ScanMode,
        target: Option<String>,
        results: Vec<ProbeResult>,
        elapsed: Duration,
    ) -> Self {
        Self {
            mode,
            target,
            results,
            elapsed,
            generated_at: Utc::now(),
        }
    }

    pub fn mode(&self) -> ScanMode {
        self.mode
    }

    pub fn target(&self) -> Option<&str> {
        self.target.as_deref()
    }

    pub fn results(&self) -> &[ProbeResult] {
        &self.results
    }

    pub fn elapsed(&self) -> Duration {
        self.elapsed
    }

    /// Results whose status lies in [200, 400), in report order.
    pub fn valid(&self) -> Vec<&ProbeResult> {
        self.results.iter().filter(|r| r.is_finding()).collect()
    }

    /// Every result, numbered from 1 in report order.
    pub fn full_table(&self) -> Table {
        let rows = self.results.iter().enumerate().map(|(i, r)| {
            let mut row = vec![(i + 1).to_string()];
            if self.mode == ScanMode::Breach {
                row.push(r.job.site.clone());
            }
            row.extend([
                r.job.path.clone(),
                r.job.url.clone(),
                r.status.to_string(),
                r.reason.clone(),
            ]);
            row
        });

        let builder = match self.mode {
            ScanMode::Directory => TableBuilder::new()
                .title("Directory scan results")
                .headers(["No", "Path", "URL", "Status", "Note"]),
            ScanMode::Breach => TableBuilder::new()
                .title("Data breach scan results")
                .headers(["No", "Site", "Path", "URL", "Status", "Note"]),
        };

        builder
            .align(0, TableAlignment::Right)
            .rows(rows)
            .build()
    }

    /// The valid subset, or `None` when nothing qualified.
    pub fn valid_table(&self) -> Option<Table> {
        let valid = self.valid();
        if valid.is_empty() {
            return None;
        }

        let rows = valid.iter().enumerate().map(|(i, r)| {
            let mut row = vec![(i + 1).to_string()];
            if self.mode == ScanMode::Breach {
                row.push(r.job.site.clone());
            }
            row.extend([r.job.path.clone(), r.job.url.clone(), r.status.to_string()]);
            row
        });

        let builder = match self.mode {
            ScanMode::Directory => TableBuilder::new()
                .title("Valid paths")
                .headers(["No", "Path", "URL", "Status"]),
            ScanMode::Breach => TableBuilder::new()
                .title("Potential exposures (status 2xx/3xx)")
                .headers(["No", "Site", "Path", "URL", "Status"]),
        };

        Some(
            builder
                .align(0, TableAlignment::Right)
                .rows(rows)
                .build(),
        )
    }

    /// Notice shown instead of an empty valid table.
    pub fn empty_notice(&self) -> &'static str {
        match self.mode {
            ScanMode::Directory => "No valid results found.",
            ScanMode::Breach => "No clear sign of exposure (status 2xx/3xx).",
        }
    }

    pub fn render_text(&self) -> String {
        let mut output = format!("Finished in {:.2} seconds.\n", self.elapsed.as_secs_f64());
        output.push_str(&self.full_table().render());
        output.push_str(&render_rule("Valid results (summary)", RULE_WIDTH));
        match self.valid_table() {
            Some(table) => output.push_str(&table.render()),
            None => output.push_str(&render_panel(self.empty_notice(), Colors::GREEN)),
        }
        output
    }

    pub fn render_json(&self) -> Result<String> {
        let document = JsonReport {
            mode: self.mode,
            target: self.target(),
            generated_at: self.generated_at.to_rfc3339_opts(SecondsFormat::Secs, true),
            elapsed_seconds: self.elapsed.as_secs_f64(),
            total: self.results.len(),
            valid_count: self.valid().len(),
            results: &self.results,
            valid: self.valid(),
        };
        Ok(serde_json::to_string_pretty(&document)?)
    }

    /// One `status url` line per valid result.
    pub fn render_minimal(&self) -> String {
        self.valid()
            .iter()
            .map(|r| format!("{} {}\n", r.status, r.job.url))
            .collect()
    }

    pub fn render(&self, format: &str) -> Result<String> {
        match format {
            output_formats::JSON => self.render_json().map(|json| json + "\n"),
            output_formats::MINIMAL => Ok(self.render_minimal()),
            _ => Ok(self.render_text()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::types::Job;

    fn result(index: usize, site: &str, path: &str, status: u16, reason: &str) -> ProbeResult {
        ProbeResult::new(
            index,
            Job::new(site, path, format!("{site}/{path}")),
            status,
            reason.to_string(),
        )
    }

    fn directory_report() -> ScanReport {
        ScanReport::new(
            ScanMode::Directory,
            Some("https://a.example".to_string()),
            vec![
                result(0, "https://a.example", "admin", 200, "OK"),
                result(1, "https://a.example", "old", 301, "Moved Permanently"),
                result(2, "https://a.example", "secret", 403, "Forbidden"),
                result(3, "https://a.example", "down", 0, "connection refused"),
            ],
            Duration::from_millis(1500),
        )
    }

    #[test]
    fn test_valid_filter() {
        let report = directory_report();
        let statuses: Vec<u16> = report.valid().iter().map(|r| r.status).collect();
        assert_eq!(statuses, vec![200, 301]);
    }

    #[test]
    fn test_full_table_lists_every_result() {
        let table = directory_report().full_table();
        assert_eq!(table.headers, vec!["No", "Path", "URL", "Status", "Note"]);
        assert_eq!(table.rows.len(), 4);
        assert_eq!(
            table.rows[3],
            vec!["4", "down", "https://a.example/down", "0", "connection refused"]
        );
    }

    #[test]
    fn test_breach_tables_include_site() {
        let report = ScanReport::new(
            ScanMode::Breach,
            None,
            vec![
                result(0, "https://a.example", ".env", 200, "OK"),
                result(1, "https://b.example", ".env", 404, "Not Found"),
            ],
            Duration::ZERO,
        );

        let full = report.full_table();
        assert_eq!(full.headers[1], "Site");
        assert_eq!(full.rows[1][1], "https://b.example");

        let valid = report.valid_table().unwrap();
        assert_eq!(valid.headers, vec!["No", "Site", "Path", "URL", "Status"]);
        assert_eq!(valid.rows.len(), 1);
    }

    #[test]
    fn test_valid_table_renumbers_from_one() {
        let table = directory_report().valid_table().unwrap();
        assert_eq!(table.rows[0][0], "1");
        assert_eq!(table.rows[1][0], "2");
        assert_eq!(table.rows[1][1], "old");
    }

    #[test]
    fn test_render_text_with_findings() {
        let text = directory_report().render_text();
        assert!(text.starts_with("Finished in 1.50 seconds.\n"));
        assert!(text.contains("Directory scan results"));
        assert!(text.contains("Valid paths"));
        assert!(!text.contains("No valid results found."));
    }

    #[test]
    fn test_render_text_without_findings_shows_notice() {
        let report = ScanReport::new(
            ScanMode::Breach,
            None,
            vec![result(0, "https://a.example", ".env", 404, "Not Found")],
            Duration::ZERO,
        );

        assert!(report.valid_table().is_none());
        let text = report.render_text();
        assert!(text.contains("No clear sign of exposure (status 2xx/3xx)."));
        assert!(!text.contains("Potential exposures"));
    }

    #[test]
    fn test_render_json() -> Result<()> {
        let json: serde_json::Value = serde_json::from_str(&directory_report().render_json()?)?;

        assert_eq!(json["mode"], "directory");
        assert_eq!(json["target"], "https://a.example");
        assert_eq!(json["total"], 4);
        assert_eq!(json["valid_count"], 2);
        assert_eq!(json["results"][3]["status"], 0);
        assert_eq!(json["valid"][1]["path"], "old");
        assert!(json["generated_at"].as_str().unwrap().ends_with('Z'));
        Ok(())
    }

    #[test]
    fn test_render_minimal() {
        assert_eq!(
            directory_report().render_minimal(),
            "200 https://a.example/admin\n301 https://a.example/old\n"
        );
    }

    #[test]
    fn test_render_dispatches_on_format() -> Result<()> {
        let report = directory_report();
        assert!(report.render("json")?.trim_start().starts_with('{'));
        assert!(report.render("minimal")?.starts_with("200 "));
        assert!(report.render("text")?.starts_with("Finished"));
        Ok(())
    }
}
