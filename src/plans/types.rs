//! Training plan types.
//!
//! A plan is an insertion-ordered set of named routines. Each routine body is
//! either an exercise table (columns + rows of cells) or a plain ordered list
//! of exercise entries.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::{Map, Value};
use thiserror::Error;

/// Column holding the exercise name.
pub const EXERCISE_COLUMN: &str = "Exercício";
/// Column holding the number of sets.
pub const SETS_COLUMN: &str = "Séries";
/// Column holding the repetition prescription.
pub const REPS_COLUMN: &str = "Repetições";
/// Column holding the rest interval between sets.
pub const REST_COLUMN: &str = "Descanso";

/// Columns written by the plan generator, in display order.
pub const CANONICAL_COLUMNS: [&str; 4] = [EXERCISE_COLUMN, SETS_COLUMN, REPS_COLUMN, REST_COLUMN];

/// A single prescribed exercise.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExerciseEntry {
    /// Exercise name
    pub name: String,
    /// Number of working sets
    pub sets: u8,
    /// Repetition prescription (e.g. "8-12", "30s")
    #[serde(default)]
    pub reps: String,
    /// Rest between sets in seconds
    pub rest_seconds: Option<u32>,
    /// Free-form notes
    pub notes: Option<String>,
}

impl ExerciseEntry {
    /// Create an entry with the given prescription.
    pub fn new(name: impl Into<String>, sets: u8, reps: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            sets,
            reps: reps.into(),
            rest_seconds: None,
            notes: None,
        }
    }

    /// Create an entry that only carries a name (one set, no prescription).
    pub fn named(name: impl Into<String>) -> Self {
        Self::new(name, 1, String::new())
    }

    /// Set the rest interval.
    pub fn with_rest(mut self, seconds: u32) -> Self {
        self.rest_seconds = Some(seconds);
        self
    }
}

/// A tabular routine body: ordered column names and rows of string cells.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExerciseTable {
    /// Column names in display order
    pub columns: Vec<String>,
    /// Rows of cells; a well-shaped table has one cell per column in every row
    pub rows: Vec<Vec<String>>,
}

impl ExerciseTable {
    /// Create an empty table with the given columns.
    pub fn with_columns<I, S>(columns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            columns: columns.into_iter().map(Into::into).collect(),
            rows: Vec::new(),
        }
    }

    /// Build a table with the canonical columns from exercise entries.
    pub fn from_entries(entries: &[ExerciseEntry]) -> Self {
        let mut table = Self::with_columns(CANONICAL_COLUMNS);
        for entry in entries {
            table.rows.push(vec![
                entry.name.clone(),
                entry.sets.to_string(),
                entry.reps.clone(),
                entry
                    .rest_seconds
                    .map(|s| format!("{}s", s))
                    .unwrap_or_default(),
            ]);
        }
        table
    }

    /// Append a row.
    pub fn push_row<I, S>(&mut self, cells: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.rows.push(cells.into_iter().map(Into::into).collect());
    }

    /// Number of rows.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Whether the table has no rows.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Position of a column by exact name.
    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.columns.iter().position(|c| c == name)
    }

    /// Whether a column with this exact name exists.
    pub fn has_column(&self, name: &str) -> bool {
        self.column_index(name).is_some()
    }

    /// Whether every row has exactly one cell per column.
    pub fn is_rectangular(&self) -> bool {
        self.rows.iter().all(|row| row.len() == self.columns.len())
    }

    /// Cell at (row, column name).
    pub fn cell(&self, row: usize, column: &str) -> Option<&str> {
        let col = self.column_index(column)?;
        self.rows.get(row)?.get(col).map(String::as_str)
    }

    /// Interpret the table as exercise entries.
    ///
    /// Rows without an exercise name are skipped. Unparseable set counts
    /// default to one set; rest cells accept "90", "90s" or "60-90s"
    /// (first number wins).
    pub fn entries(&self) -> Vec<ExerciseEntry> {
        (0..self.rows.len())
            .filter_map(|row| {
                let name = self.cell(row, EXERCISE_COLUMN)?.trim();
                if name.is_empty() {
                    return None;
                }

                let sets = self
                    .cell(row, SETS_COLUMN)
                    .and_then(leading_number)
                    .and_then(|n| u8::try_from(n).ok())
                    .filter(|n| *n > 0)
                    .unwrap_or(1);
                let reps = self
                    .cell(row, REPS_COLUMN)
                    .map(|s| s.trim().to_string())
                    .unwrap_or_default();
                let rest_seconds = self.cell(row, REST_COLUMN).and_then(leading_number);

                Some(ExerciseEntry {
                    name: name.to_string(),
                    sets,
                    reps,
                    rest_seconds,
                    notes: None,
                })
            })
            .collect()
    }
}

/// Parse the first run of ASCII digits in a cell.
fn leading_number(cell: &str) -> Option<u32> {
    let digits: String = cell
        .trim()
        .chars()
        .skip_while(|c| !c.is_ascii_digit())
        .take_while(|c| c.is_ascii_digit())
        .collect();
    digits.parse().ok()
}

/// Body of one routine in a plan.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RoutineBody {
    /// Exercise table
    Table(ExerciseTable),
    /// Ordered list of exercises
    List(Vec<ExerciseEntry>),
}

impl RoutineBody {
    /// Exercises described by this body, in order.
    pub fn entries(&self) -> Vec<ExerciseEntry> {
        match self {
            RoutineBody::Table(table) => table.entries(),
            RoutineBody::List(entries) => entries.clone(),
        }
    }

    /// Decode a routine body from JSON.
    ///
    /// Accepted shapes:
    /// - array of records (`[{"Exercício": "Supino", "Séries": 4}]`) ⇒ table,
    ///   columns in first-seen order, missing cells left empty
    /// - object of columns (`{"Exercício": ["Supino"], "Séries": [4]}`) ⇒ table,
    ///   columns of different length produce ragged rows
    /// - array of strings ⇒ list of named exercises
    /// - array of entry objects with `name` and `sets` fields ⇒ list
    pub fn from_value(value: &Value) -> Result<Self, PlanError> {
        match value {
            Value::Array(items) if items.is_empty() => Ok(RoutineBody::List(Vec::new())),
            Value::Array(items) if items.iter().all(Value::is_string) => Ok(RoutineBody::List(
                items
                    .iter()
                    .filter_map(Value::as_str)
                    .map(ExerciseEntry::named)
                    .collect(),
            )),
            Value::Array(items) if items.iter().all(is_entry_object) => {
                let entries = items
                    .iter()
                    .map(|item| serde_json::from_value(item.clone()))
                    .collect::<Result<Vec<ExerciseEntry>, _>>()?;
                Ok(RoutineBody::List(entries))
            }
            Value::Array(items) => table_from_records(items).map(RoutineBody::Table),
            Value::Object(columns) => table_from_columns(columns).map(RoutineBody::Table),
            other => Err(PlanError::InvalidBody(format!(
                "expected an array or object, found {}",
                value_kind(other)
            ))),
        }
    }

    /// Encode this body as JSON (tables as arrays of records).
    pub fn to_value(&self) -> Value {
        match self {
            RoutineBody::Table(table) => Value::Array(
                table
                    .rows
                    .iter()
                    .map(|row| {
                        let record: Map<String, Value> = table
                            .columns
                            .iter()
                            .zip(row.iter())
                            .map(|(col, cell)| (col.clone(), Value::String(cell.clone())))
                            .collect();
                        Value::Object(record)
                    })
                    .collect(),
            ),
            RoutineBody::List(entries) => {
                serde_json::to_value(entries).unwrap_or(Value::Array(Vec::new()))
            }
        }
    }
}

fn is_entry_object(value: &Value) -> bool {
    value
        .as_object()
        .map(|obj| obj.contains_key("name") && obj.contains_key("sets"))
        .unwrap_or(false)
}

fn table_from_records(items: &[Value]) -> Result<ExerciseTable, PlanError> {
    let mut table = ExerciseTable::default();

    for item in items {
        let record = item.as_object().ok_or_else(|| {
            PlanError::InvalidBody(format!("table row is {}, expected an object", value_kind(item)))
        })?;
        for key in record.keys() {
            if !table.has_column(key) {
                table.columns.push(key.clone());
            }
        }
    }

    for item in items {
        // Shape checked above.
        let Some(record) = item.as_object() else {
            continue;
        };
        let row = table
            .columns
            .iter()
            .map(|col| record.get(col).map(cell_text).unwrap_or(Ok(String::new())))
            .collect::<Result<Vec<_>, _>>()?;
        table.rows.push(row);
    }

    Ok(table)
}

fn table_from_columns(columns: &Map<String, Value>) -> Result<ExerciseTable, PlanError> {
    let mut cells: Vec<Vec<String>> = Vec::with_capacity(columns.len());
    for (name, values) in columns {
        let values = values.as_array().ok_or_else(|| {
            PlanError::InvalidBody(format!("column '{}' is not an array", name))
        })?;
        cells.push(values.iter().map(cell_text).collect::<Result<_, _>>()?);
    }

    let height = cells.iter().map(Vec::len).max().unwrap_or(0);
    let rows = (0..height)
        .map(|row| {
            cells
                .iter()
                .filter_map(|column| column.get(row).cloned())
                .collect()
        })
        .collect();

    Ok(ExerciseTable {
        columns: columns.keys().cloned().collect(),
        rows,
    })
}

fn cell_text(value: &Value) -> Result<String, PlanError> {
    match value {
        Value::String(s) => Ok(s.clone()),
        Value::Number(n) => Ok(n.to_string()),
        Value::Bool(b) => Ok(b.to_string()),
        Value::Null => Ok(String::new()),
        other => Err(PlanError::InvalidCell(value_kind(other).to_string())),
    }
}

fn value_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

/// A named routine inside a plan.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Routine {
    /// Routine name, unique within its plan
    pub name: String,
    /// Routine content
    pub body: RoutineBody,
}

/// Insertion-ordered mapping of routine name to routine body.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TrainingPlan {
    routines: Vec<Routine>,
}

impl TrainingPlan {
    /// Create an empty plan.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a routine. An existing routine with the same name keeps its
    /// position and has its body replaced.
    pub fn insert(&mut self, name: impl Into<String>, body: RoutineBody) {
        let name = name.into();
        match self.routines.iter_mut().find(|r| r.name == name) {
            Some(existing) => existing.body = body,
            None => self.routines.push(Routine { name, body }),
        }
    }

    /// Builder-style insert.
    pub fn with_routine(mut self, name: impl Into<String>, body: RoutineBody) -> Self {
        self.insert(name, body);
        self
    }

    /// Look up a routine body by name.
    pub fn get(&self, name: &str) -> Option<&RoutineBody> {
        self.routines.iter().find(|r| r.name == name).map(|r| &r.body)
    }

    /// Whether a routine with this name exists.
    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    /// Name of the routine at `index` in insertion order.
    pub fn name_at(&self, index: usize) -> Option<&str> {
        self.routines.get(index).map(|r| r.name.as_str())
    }

    /// Routine names in insertion order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.routines.iter().map(|r| r.name.as_str())
    }

    /// Routines in insertion order.
    pub fn routines(&self) -> &[Routine] {
        &self.routines
    }

    /// Number of routines.
    pub fn len(&self) -> usize {
        self.routines.len()
    }

    /// Whether the plan has no routines.
    pub fn is_empty(&self) -> bool {
        self.routines.is_empty()
    }

    /// Decode a plan from a JSON object keyed by routine name.
    pub fn from_value(value: &Value) -> Result<Self, PlanError> {
        let days = value.as_object().ok_or(PlanError::NotAMapping)?;

        let mut plan = Self::new();
        for (name, body) in days {
            let body = RoutineBody::from_value(body).map_err(|e| PlanError::Routine {
                name: name.clone(),
                source: Box::new(e),
            })?;
            plan.insert(name.clone(), body);
        }
        Ok(plan)
    }

    /// Decode a plan from JSON text.
    pub fn from_json(json: &str) -> Result<Self, PlanError> {
        let value: Value = serde_json::from_str(json)?;
        Self::from_value(&value)
    }

    /// Encode the plan as a JSON object, preserving routine order.
    pub fn to_value(&self) -> Value {
        Value::Object(
            self.routines
                .iter()
                .map(|r| (r.name.clone(), r.body.to_value()))
                .collect(),
        )
    }
}

impl Serialize for TrainingPlan {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.to_value().serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for TrainingPlan {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = Value::deserialize(deserializer)?;
        Self::from_value(&value).map_err(serde::de::Error::custom)
    }
}

/// Errors decoding a training plan.
#[derive(Debug, Error)]
pub enum PlanError {
    /// Input is not valid JSON
    #[error("Invalid JSON: {0}")]
    InvalidJson(#[from] serde_json::Error),

    /// Top-level value is not an object keyed by routine name
    #[error("Plan must be an object keyed by routine name")]
    NotAMapping,

    /// A routine body has an unsupported shape
    #[error("Invalid routine body: {0}")]
    InvalidBody(String),

    /// A table cell is not a scalar
    #[error("Table cells must be scalars, found {0}")]
    InvalidCell(String),

    /// Error inside a named routine
    #[error("Routine '{name}': {source}")]
    Routine {
        name: String,
        #[source]
        source: Box<PlanError>,
    },
}
