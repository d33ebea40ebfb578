//! Report storage API.

use std::fs;
use std::path::{Path, PathBuf};

use crate::types::{NetworkReport, OutletSheet, ReportManifest};
use crate::{ResultsError, ResultsResult};

#[derive(Clone)]
pub struct ReportStore {
    root_dir: PathBuf,
}

impl ReportStore {
    pub fn new(root_dir: PathBuf) -> ResultsResult<Self> {
        if !root_dir.exists() {
            fs::create_dir_all(&root_dir)?;
        }
        Ok(Self { root_dir })
    }

    /// Store rooted next to the drawing file, under `.pipenet/reports`.
    pub fn for_drawing(drawing_path: &Path) -> ResultsResult<Self> {
        let dir = drawing_path
            .parent()
            .ok_or_else(|| ResultsError::InvalidPath {
                message: "drawing path has no parent directory".to_string(),
            })?;
        Self::new(dir.join(".pipenet").join("reports"))
    }

    fn report_dir(&self, report_id: &str) -> PathBuf {
        self.root_dir.join(report_id)
    }

    pub fn has_report(&self, report_id: &str) -> bool {
        self.report_dir(report_id).join("manifest.json").exists()
    }

    pub fn save_report(&self, report: &NetworkReport) -> ResultsResult<()> {
        let dir = self.report_dir(&report.manifest.report_id);
        fs::create_dir_all(&dir)?;

        let manifest_json = serde_json::to_string_pretty(&report.manifest)?;
        fs::write(dir.join("manifest.json"), manifest_json)?;

        let mut sheets_content = String::new();
        for sheet in &report.sheets {
            sheets_content.push_str(&serde_json::to_string(sheet)?);
            sheets_content.push('\n');
        }
        fs::write(dir.join("sheets.jsonl"), sheets_content)?;

        Ok(())
    }

    pub fn load_manifest(&self, report_id: &str) -> ResultsResult<ReportManifest> {
        let path = self.report_dir(report_id).join("manifest.json");
        if !path.exists() {
            return Err(ResultsError::ReportNotFound {
                report_id: report_id.to_string(),
            });
        }

        let content = fs::read_to_string(path)?;
        Ok(serde_json::from_str(&content)?)
    }

    pub fn load_sheets(&self, report_id: &str) -> ResultsResult<Vec<OutletSheet>> {
        let path = self.report_dir(report_id).join("sheets.jsonl");
        if !path.exists() {
            return Err(ResultsError::ReportNotFound {
                report_id: report_id.to_string(),
            });
        }

        let content = fs::read_to_string(path)?;
        let mut sheets = Vec::new();
        for line in content.lines() {
            if !line.trim().is_empty() {
                sheets.push(serde_json::from_str(line)?);
            }
        }
        Ok(sheets)
    }

    pub fn load_report(&self, report_id: &str) -> ResultsResult<NetworkReport> {
        Ok(NetworkReport {
            manifest: self.load_manifest(report_id)?,
            sheets: self.load_sheets(report_id)?,
        })
    }

    pub fn list_reports(&self, network: &str) -> ResultsResult<Vec<ReportManifest>> {
        let mut reports = Vec::new();

        if !self.root_dir.exists() {
            return Ok(reports);
        }

        for entry in fs::read_dir(&self.root_dir)? {
            let entry = entry?;
            if entry.path().is_dir() {
                let report_id = entry.file_name().to_string_lossy().to_string();
                if let Ok(manifest) = self.load_manifest(&report_id) {
                    if manifest.network == network {
                        reports.push(manifest);
                    }
                }
            }
        }

        Ok(reports)
    }

    pub fn delete_report(&self, report_id: &str) -> ResultsResult<()> {
        let dir = self.report_dir(report_id);
        if dir.exists() {
            fs::remove_dir_all(dir)?;
        }
        Ok(())
    }
}
