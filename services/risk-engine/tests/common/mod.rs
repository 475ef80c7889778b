//! Reference fixture loaders shared by the integration tests.
//!
//! - `permutations.tsv`: all 1024 answer combinations with every stage letter
//! - `stage_tables.tsv`: the full truth table of each stage, one row per input pair

#![allow(dead_code)]

use types::answers::{AnswerField, AnswerSet};
use types::codes::Stage;

const PERMUTATIONS: &str = include_str!("../fixtures/permutations.tsv");
const STAGE_TABLES: &str = include_str!("../fixtures/stage_tables.tsv");

/// One row of `permutations.tsv`
#[derive(Debug, Clone)]
pub struct Permutation {
    pub line: usize,
    pub answers: AnswerSet,
    /// Expected letter per stage, in `Stage::ALL` order
    pub expected: Vec<(Stage, char)>,
}

impl Permutation {
    pub fn expected(&self, stage: Stage) -> char {
        self.expected
            .iter()
            .find(|(s, _)| *s == stage)
            .map(|(_, code)| *code)
            .unwrap_or_else(|| panic!("line {}: no column for {stage}", self.line))
    }
}

/// One row of `stage_tables.tsv`
#[derive(Debug, Clone)]
pub struct TableRow {
    pub line: usize,
    pub stage: Stage,
    pub left: char,
    pub right: char,
    pub output: char,
}

fn parse_bool(cell: &str, line: usize) -> bool {
    match cell {
        "TRUE" => true,
        "FALSE" => false,
        other => panic!("line {line}: expected TRUE/FALSE, got {other:?}"),
    }
}

fn parse_letter(cell: &str, line: usize) -> char {
    let mut chars = cell.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) => c,
        _ => panic!("line {line}: expected a single letter, got {cell:?}"),
    }
}

pub fn permutations() -> Vec<Permutation> {
    let mut lines = PERMUTATIONS.lines().enumerate();
    let (_, header) = lines.next().expect("fixture has a header");
    let columns: Vec<&str> = header.split('\t').collect();

    let field_columns: Vec<(usize, AnswerField)> = AnswerField::ALL
        .iter()
        .map(|field| {
            let idx = columns
                .iter()
                .position(|c| *c == field.name())
                .unwrap_or_else(|| panic!("missing column {field}"));
            (idx, *field)
        })
        .collect();
    let stage_columns: Vec<(usize, Stage)> = Stage::ALL
        .iter()
        .map(|stage| {
            let idx = columns
                .iter()
                .position(|c| *c == stage.name())
                .unwrap_or_else(|| panic!("missing column {stage}"));
            (idx, *stage)
        })
        .collect();

    lines
        .filter(|(_, l)| !l.trim().is_empty())
        .map(|(i, l)| {
            let line = i + 1;
            let cells: Vec<&str> = l.split('\t').collect();
            assert_eq!(cells.len(), columns.len(), "line {line}: column count");

            let answers = field_columns
                .iter()
                .fold(AnswerSet::ALL_FALSE, |set, (idx, field)| {
                    set.with(*field, parse_bool(cells[*idx], line))
                });
            let expected = stage_columns
                .iter()
                .map(|(idx, stage)| (*stage, parse_letter(cells[*idx], line)))
                .collect();

            Permutation {
                line,
                answers,
                expected,
            }
        })
        .collect()
}

pub fn stage_tables() -> Vec<TableRow> {
    STAGE_TABLES
        .lines()
        .enumerate()
        .skip(1)
        .filter(|(_, l)| !l.trim().is_empty())
        .map(|(i, l)| {
            let line = i + 1;
            let cells: Vec<&str> = l.split('\t').collect();
            assert_eq!(cells.len(), 4, "line {line}: column count");
            TableRow {
                line,
                stage: Stage::from_name(cells[0])
                    .unwrap_or_else(|| panic!("line {line}: unknown stage {:?}", cells[0])),
                left: parse_letter(cells[1], line),
                right: parse_letter(cells[2], line),
                output: parse_letter(cells[3], line),
            }
        })
        .collect()
}
