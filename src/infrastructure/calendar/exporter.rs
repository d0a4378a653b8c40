//! Writes calendar requests as `.ics` files.

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use chrono::Utc;
use tracing::{debug, info};
use uuid::Uuid;

use super::ics::{file_name, generate_ics};
use crate::domain::CalendarRequest;
use crate::domain::errors::IntegrationError;
use crate::domain::ports::CalendarPort;
use crate::infrastructure::config::save_atomic;

/// Calendar integration that drops `.ics` files into a directory.
#[derive(Debug, Clone)]
pub struct IcsCalendarExporter {
    export_dir: PathBuf,
}

impl IcsCalendarExporter {
    #[must_use]
    pub fn new(export_dir: PathBuf) -> Self {
        Self { export_dir }
    }

    #[must_use]
    pub fn export_dir(&self) -> &Path {
        &self.export_dir
    }
}

#[async_trait]
impl CalendarPort for IcsCalendarExporter {
    async fn add_event(&self, request: &CalendarRequest) -> Result<PathBuf, IntegrationError> {
        let uid = format!("{}@jubilee", Uuid::new_v4());
        let content = generate_ics(request, &uid, Utc::now())?;

        tokio::fs::create_dir_all(&self.export_dir).await?;

        let path = self.export_dir.join(file_name(&request.event_name));
        debug!(path = %path.display(), "Writing calendar file");

        let target = path.clone();
        tokio::task::spawn_blocking(move || save_atomic(&target, content.as_bytes()))
            .await
            .map_err(|e| IntegrationError::export(e.to_string()))??;

        info!(path = %path.display(), event = %request.event_name, "Calendar file written");
        Ok(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[tokio::test]
    async fn test_add_event_writes_ics_file() {
        let dir = tempdir().unwrap();
        let exporter = IcsCalendarExporter::new(dir.path().join("calendar"));
        let request = CalendarRequest::new("Haldi Ceremony", "20260214", "11:00 AM");

        let path = exporter.add_event(&request).await.unwrap();

        assert_eq!(path, dir.path().join("calendar").join("haldi-ceremony.ics"));
        let content = std::fs::read_to_string(&path).unwrap();
        assert!(content.contains("SUMMARY:Haldi Ceremony"));
        assert!(content.contains("DTSTART:20260214T110000"));
    }

    #[tokio::test]
    async fn test_add_event_rejects_bad_time_without_writing() {
        let dir = tempdir().unwrap();
        let exporter = IcsCalendarExporter::new(dir.path().join("calendar"));
        let request = CalendarRequest::new("Haldi Ceremony", "20260214", "soon");

        let result = exporter.add_event(&request).await;

        assert!(matches!(result, Err(IntegrationError::InvalidTime { .. })));
        assert!(!exporter.export_dir().exists());
    }
}
