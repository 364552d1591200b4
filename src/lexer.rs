//! Classifies every line of an assembly source into labels, directives and operations.

use std::io::{self, BufRead};

use log::{debug, trace};
use regex::Regex;
use thiserror::Error;

use crate::tokens::{Category, ClassificationResult, ClassifiedLine};

// Word and space classes are ASCII only.
const LABEL_PATTERN: &str = r"^(?-u:\w)+:$";
const DIRECTIVE_PATTERN: &str = r"^[\t\n\f\r ]*\.[a-z]*";
const COMMENT_PATTERN: &str = r";[a-zA-Z ]*";

#[derive(Debug, Error)]
pub enum LexError {
    #[error("failed to compile pattern `{pattern}`: {source}")]
    PatternCompilation {
        pattern: &'static str,
        #[source]
        source: regex::Error,
    },
    #[error("failed to read line {line}: {source}")]
    StreamRead {
        line: usize,
        #[source]
        source: io::Error,
    },
}

/// The line rules, in the order they are tried
#[derive(Debug, Clone)]
pub struct Rules {
    label: Regex,
    directive: Regex,
    comment: Regex,
}

fn compile_pattern(pattern: &'static str) -> Result<Regex, LexError> {
    Regex::new(pattern).map_err(|source| LexError::PatternCompilation { pattern, source })
}

impl Rules {
    pub fn compile() -> Result<Self, LexError> {
        Ok(Rules {
            label: compile_pattern(LABEL_PATTERN)?,
            directive: compile_pattern(DIRECTIVE_PATTERN)?,
            comment: compile_pattern(COMMENT_PATTERN)?,
        })
    }

    /// Cuts the line off where the first comment starts. Lines without a comment are returned as is.
    pub fn strip_comment<'a>(&self, line: &'a str) -> &'a str {
        match self.comment.find(line) {
            Some(comment) => {
                trace!("Stripped comment {:?}", comment.as_str());
                &line[..comment.start()]
            }
            None => line,
        }
    }

    /// Applies the rules to a single line. Returns None for blank and comment-only lines.
    pub fn classify_line(&self, line_number: usize, line: &str) -> Option<ClassifiedLine> {
        let trimmed = line.trim();

        // Labels and directives live on their own line, so they are checked
        // before anything is stripped
        if self.label.is_match(trimmed) {
            return Some(ClassifiedLine::new(line_number, Category::Label, trimmed));
        }
        if self.directive.is_match(line) {
            return Some(ClassifiedLine::new(line_number, Category::Directive, trimmed));
        }

        let operation = self.strip_comment(line).trim();
        if operation.is_empty() {
            trace!("Line {line_number} skipped");
            return None;
        }
        Some(ClassifiedLine::new(line_number, Category::Operation, operation))
    }
}

/// Reads the source until it is exhausted. The source is only borrowed for reading,
/// closing it is up to the caller. A read error discards everything classified so far.
pub fn classify(source: impl BufRead) -> Result<ClassificationResult, LexError> {
    let rules = Rules::compile()?;

    let mut lines: Vec<ClassifiedLine> = Vec::new();
    let mut line_number: usize = 0;

    for line in source.lines() {
        line_number += 1;
        let line = line.map_err(|source| LexError::StreamRead {
            line: line_number,
            source,
        })?;

        if let Some(classified) = rules.classify_line(line_number, &line) {
            debug!("{classified}");
            lines.push(classified);
        }
    }

    debug!("Classified {} of {} lines", lines.len(), line_number);
    Ok(ClassificationResult::new(lines, line_number))
}

pub fn classify_str(text: &str) -> Result<ClassificationResult, LexError> {
    classify(text.as_bytes())
}
