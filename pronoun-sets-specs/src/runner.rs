//! Runs fixture cases against the resolver and tallies the results.

use std::fmt;

use pronoun_sets::{
    abbreviate, complete_with, expand_string, Config, Pronouns, Row, Table,
};

use crate::fixture::{CompleteCase, ExpandCase, PathCase, ProfileCase, SpecFixture};
use crate::SpecResult;

/// Result of one fixture case.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CaseOutcome {
    /// Case label, e.g. `complete[2] "sh"`.
    pub case: String,
    /// Why the case failed; `None` when it passed.
    pub failure: Option<String>,
}

impl CaseOutcome {
    pub fn passed(&self) -> bool {
        self.failure.is_none()
    }
}

impl fmt::Display for CaseOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.failure {
            None => write!(f, "ok    {}", self.case),
            Some(reason) => write!(f, "FAIL  {}: {}", self.case, reason),
        }
    }
}

/// Run every case of `fixture`.
///
/// Fails only when the fixture's own table is invalid; case mismatches are
/// reported through [`CaseOutcome::failure`].
pub fn run_fixture(fixture: &SpecFixture) -> SpecResult<Vec<CaseOutcome>> {
    let owned;
    let table: &Table = match &fixture.table {
        Some(rows) => {
            owned = Table::from_slugs(rows)?;
            &owned
        }
        None => Table::builtin(),
    };

    let mut outcomes = Vec::with_capacity(fixture.case_count());
    for (idx, case) in fixture.expand.iter().enumerate() {
        outcomes.push(CaseOutcome {
            case: format!("expand[{}] {:?}", idx, case.input),
            failure: check_expand(case, table),
        });
    }
    for (idx, case) in fixture.path.iter().enumerate() {
        outcomes.push(CaseOutcome {
            case: format!("path[{}] {:?}", idx, case.row.join("/")),
            failure: check_path(case, table),
        });
    }
    for (idx, case) in fixture.complete.iter().enumerate() {
        outcomes.push(CaseOutcome {
            case: format!("complete[{}] {:?}", idx, case.input),
            failure: check_complete(case, table),
        });
    }
    for (idx, case) in fixture.profile.iter().enumerate() {
        outcomes.push(CaseOutcome {
            case: format!("profile[{}]", idx),
            failure: check_profile(case, table),
        });
    }
    Ok(outcomes)
}

fn slug_lists(rows: &[&Row]) -> Vec<Vec<String>> {
    rows.iter().map(|row| row.slugs().to_vec()).collect()
}

fn check_expand(case: &ExpandCase, table: &Table) -> Option<String> {
    let actual = slug_lists(&expand_string(&case.input, table));
    (actual != case.expect).then(|| format!("expected {:?}, got {:?}", case.expect, actual))
}

fn check_path(case: &PathCase, table: &Table) -> Option<String> {
    let row = Row::new(&case.row);
    if table.position(&row).is_none() {
        return Some("row is not in the table".to_string());
    }
    let actual = abbreviate(table, &row);
    (actual != case.expect).then(|| format!("expected {:?}, got {:?}", case.expect, actual))
}

fn check_complete(case: &CompleteCase, table: &Table) -> Option<String> {
    let actual = complete_with(&case.input, table, &Config::default());
    if let Some(expect) = &case.expect {
        if &actual != expect {
            return Some(format!("expected {:?}, got {:?}", expect, actual));
        }
    }
    if let Some(missing) = case.includes.iter().find(|c| !actual.contains(*c)) {
        return Some(format!("missing {:?} in {:?}", missing, actual));
    }
    if let Some(present) = case.excludes.iter().find(|c| actual.contains(*c)) {
        return Some(format!("unexpected {:?} in {:?}", present, actual));
    }
    None
}

fn check_profile(case: &ProfileCase, table: &Table) -> Option<String> {
    let mut profile = Pronouns::new(case.pronoun_input(), table, Config::default());
    for more in &case.add {
        profile.add(more.as_str());
    }
    if let Some(index) = case.form_index {
        profile.generate_forms(index);
    }

    let forms = profile.forms();
    let mut mismatches = Vec::new();
    let mut compare = |field: &str, expect: Option<String>, actual: String| {
        if let Some(expect) = expect {
            if expect != actual {
                mismatches.push(format!("{}: expected {:?}, got {:?}", field, expect, actual));
            }
        }
    };
    compare("subject", case.subject.clone(), forms.subject.to_string());
    compare("object", case.object.clone(), forms.object.to_string());
    compare("determiner", case.determiner.clone(), forms.determiner.to_string());
    compare("possessive", case.possessive.clone(), forms.possessive.to_string());
    compare("reflexive", case.reflexive.clone(), forms.reflexive.to_string());
    compare("to_string", case.to_string.clone(), profile.to_string());
    compare("to_url", case.to_url.clone(), profile.to_url());
    compare("len", case.len.map(|n| n.to_string()), profile.len().to_string());
    compare("any", case.any.map(|b| b.to_string()), profile.any().to_string());

    (!mismatches.is_empty()).then(|| mismatches.join("; "))
}

/// Totals across a set of fixtures.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HarnessResult {
    pub total: usize,
    pub passed: usize,
    /// `(fixture, outcome)` for each failed case.
    pub failed: Vec<(String, CaseOutcome)>,
}

impl HarnessResult {
    pub fn record(&mut self, fixture: &str, outcome: CaseOutcome) {
        self.total += 1;
        if outcome.passed() {
            self.passed += 1;
        } else {
            self.failed.push((fixture.to_string(), outcome));
        }
    }

    pub fn success(&self) -> bool {
        self.failed.is_empty()
    }
}

impl fmt::Display for HarnessResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}/{} cases passed", self.passed, self.total)?;
        for (fixture, outcome) in &self.failed {
            writeln!(f, "  {}: {}", fixture, outcome)?;
        }
        Ok(())
    }
}

/// Run named fixtures, as returned by [`crate::load_all_fixtures`].
pub fn run_all(fixtures: &[(String, SpecFixture)]) -> SpecResult<HarnessResult> {
    let mut result = HarnessResult::default();
    for (name, fixture) in fixtures {
        for outcome in run_fixture(fixture)? {
            result.record(name, outcome);
        }
    }
    Ok(result)
}
