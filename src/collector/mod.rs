//! Elevated half of the tool: scan Live's plugin databases and write the report.

pub mod discover;
pub mod pretty;
pub mod query;
pub mod report;

use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::model::config::DiagnosticConfig;
use crate::model::privilege::{Privilege, PrivilegeProbe};

pub use discover::discover_databases;
pub use query::query_plugin_rows;
pub use report::{DatabaseScan, write_report};

#[derive(Debug, Error)]
pub enum CollectError {
    #[error("failed to run as superuser, the collector must be started with sudo")]
    NotElevated,

    #[error("{0}")]
    Sqlite(#[from] rusqlite::Error),

    #[error("failed to write report {}: {source}", .path.display())]
    Report {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// What a finished run produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunSummary {
    pub report_path: PathBuf,
    pub databases: usize,
    pub failed: usize,
}

pub fn require_elevated(probe: &dyn PrivilegeProbe) -> Privilege {
    let privilege = probe.check();
    if !privilege.is_elevated() {
        tracing::error!("collector started without superuser rights");
    }
    privilege
}

/// Query every database, recording failures inline instead of stopping.
pub fn scan_databases(databases: &[PathBuf], name_prefix: &str) -> Vec<DatabaseScan> {
    databases
        .iter()
        .map(|db| {
            let result = query_plugin_rows(db, name_prefix).map_err(CollectError::from);
            if let Err(err) = &result {
                tracing::warn!("failed to scan {}: {err}", db.display());
            }
            DatabaseScan {
                path: db.clone(),
                result,
            }
        })
        .collect()
}

/// Check privilege, discover, scan and write the report.
pub fn run(
    config: &DiagnosticConfig,
    probe: &dyn PrivilegeProbe,
) -> Result<RunSummary, CollectError> {
    if !require_elevated(probe).is_elevated() {
        return Err(CollectError::NotElevated);
    }

    collect_into(
        &config.database_dir(),
        config.plugin_prefix(),
        &config.report_path(),
    )
}

fn collect_into(
    database_dir: &Path,
    name_prefix: &str,
    report_path: &Path,
) -> Result<RunSummary, CollectError> {
    tracing::info!("collecting plugin rows for {name_prefix:?}");

    let databases = discover_databases(database_dir);
    let scans = scan_databases(&databases, name_prefix);
    write_report(report_path, &databases, &scans)?;

    Ok(RunSummary {
        report_path: report_path.to_path_buf(),
        databases: databases.len(),
        failed: scans.iter().filter(|scan| scan.is_err()).count(),
    })
}

#[cfg(test)]
mod tests {
    use super::query::fixtures::plugin_db;
    use super::*;
    use crate::model::privilege::FixedPrivilege;
    use std::fs;

    fn config_for(dir: &Path) -> DiagnosticConfig {
        let mut config = DiagnosticConfig::defaults().unwrap();
        config.collector.database_dir = dir.join("Live Database").display().to_string();
        config.collector.report_path = dir.join("tempo-diagnostic.txt").display().to_string();
        config
    }

    #[test]
    fn not_elevated_writes_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let config = config_for(dir.path());

        let err = run(&config, &FixedPrivilege(Privilege::NotElevated)).unwrap_err();

        assert!(matches!(err, CollectError::NotElevated));
        assert!(!config.report_path().exists());
    }

    #[test]
    fn failing_database_does_not_stop_the_run() {
        let dir = tempfile::tempdir().unwrap();
        let config = config_for(dir.path());
        let db_dir = config.database_dir();
        fs::create_dir_all(&db_dir).unwrap();
        fs::write(
            db_dir.join("Live-files-1.db"),
            b"definitely not sqlite, definitely not",
        )
        .unwrap();
        plugin_db(&db_dir.join("Live-plugins-1.db"), &["KClip3", "Serum"]);

        let summary = run(&config, &FixedPrivilege(Privilege::Elevated)).unwrap();

        assert_eq!(summary.databases, 2);
        assert_eq!(summary.failed, 1);

        let report = fs::read_to_string(config.report_path()).unwrap();
        let broken = format!("on db: {}\nerror: ", db_dir.join("Live-files-1.db").display());
        let good = format!(
            "on db: {}\nrows:\n[(1, 'device:vst3:0', 'KClip3', 'Kazrog', 3.0)]\n\n",
            db_dir.join("Live-plugins-1.db").display()
        );
        assert!(report.contains(&broken), "{report}");
        assert!(report.contains(&good), "{report}");
        assert!(report.contains("'KClip3'"));
        assert!(!report.contains("'Serum'"));
    }

    #[test]
    fn missing_database_dir_still_writes_report() {
        let dir = tempfile::tempdir().unwrap();
        let config = config_for(dir.path());

        let summary = run(&config, &FixedPrivilege(Privilege::Elevated)).unwrap();

        assert_eq!(summary.databases, 0);
        assert_eq!(
            fs::read_to_string(config.report_path()).unwrap(),
            "found dbs:\n[]\n\n"
        );
    }
}
