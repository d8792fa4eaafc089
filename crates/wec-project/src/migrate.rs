//! Scenario schema migration.

use crate::ProjectError;
use crate::schema::ScenarioFile;

pub const LATEST_VERSION: u32 = 1;

pub fn migrate_to_latest(mut scenario: ScenarioFile) -> Result<ScenarioFile, ProjectError> {
    while scenario.version < LATEST_VERSION {
        scenario = migrate_one_version(scenario)?;
    }
    Ok(scenario)
}

// Version 1 is the first schema; older versions have no upgrade path.
fn migrate_one_version(scenario: ScenarioFile) -> Result<ScenarioFile, ProjectError> {
    Err(ProjectError::Migration {
        what: format!("No migration path from version {}", scenario.version),
    })
}
