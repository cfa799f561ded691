use std::io::Write;

use anyhow::Context;
use tracing::{debug, info};

use crate::databases::traits::DBSession;
use crate::error::Error;
use crate::render::render;

pub const FIELD: &str = "myfield";

pub const CREATE_TABLE: &str = "CREATE TABLE #MyTable (
   myfield VARCHAR(10) NULL
)";

// The '' row is never the expected answer of any check below.
pub const SEED: &str = "INSERT INTO #MyTable VALUES('')
INSERT INTO #MyTable VALUES(NULL)
INSERT INTO #MyTable VALUES(' ')
INSERT INTO #MyTable VALUES('a')";

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Check {
    pub query: &'static str,
    pub expected: &'static str,
}

/// Comparisons ignore trailing spaces, so `= ''` has to hit the `' '` row.
pub const CHECKS: [Check; 4] = [
    Check {
        query: "SELECT top 1 * FROM #MyTable WHERE myfield = ''",
        expected: "' '",
    },
    Check {
        query: "SELECT top 1 * FROM #MyTable WHERE myfield IS NULL",
        expected: "(NULL)",
    },
    Check {
        query: "SELECT top 1 * FROM #MyTable WHERE myfield = ' '",
        expected: "' '",
    },
    Check {
        query: "SELECT top 1 * FROM #MyTable WHERE myfield = 'a'",
        expected: "'a'",
    },
];

pub fn setup(session: &mut dyn DBSession) -> anyhow::Result<()> {
    session
        .execute_batch(CREATE_TABLE)
        .context("Unable to create the test table")?;
    session
        .execute_batch(SEED)
        .context("Unable to fill the test table")?;
    debug!("Test table created and filled");
    return Ok(());
}

/// Runs one query and compares the rendered `myfield` of its first row with
/// `expected`. Returns whether they matched; errors are only for failures of
/// the query itself.
pub fn run_check(
    session: &mut dyn DBSession,
    query: &str,
    expected: &str,
    out: &mut dyn Write,
) -> anyhow::Result<bool> {
    let row = session
        .fetch_first(query)
        .with_context(|| format!("Query failed: {query}"))?
        .ok_or_else(|| Error::NoRows(query.to_owned()))?;
    let value = row.get(FIELD).ok_or_else(|| Error::MissingColumn {
        column: FIELD.to_owned(),
        query: query.to_owned(),
    })?;
    let rendered = render(value);
    writeln!(out, "{query} -> {rendered}")?;
    if rendered != expected {
        writeln!(out, "error!")?;
        info!("Check failed, expected {expected} got {rendered}");
        return Ok(false);
    }
    return Ok(true);
}

/// Runs every check, never stopping at a mismatch. Returns true only if all
/// of them passed.
pub fn run_checks(
    session: &mut dyn DBSession,
    checks: &[Check],
    out: &mut dyn Write,
) -> anyhow::Result<bool> {
    let mut failed = false;
    for check in checks {
        let passed = run_check(session, check.query, check.expected, out)?;
        failed |= !passed;
    }
    return Ok(!failed);
}

/// Prepares the table and runs the standard checks on it.
pub fn run(session: &mut dyn DBSession, out: &mut dyn Write) -> anyhow::Result<bool> {
    setup(session)?;
    return run_checks(session, &CHECKS, out);
}
