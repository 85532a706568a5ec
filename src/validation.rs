use crate::render::resolve;
use crate::{Block, BlockList};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use ulid::Ulid;

/// Validation severity level
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum ValidationSeverity {
    Info,    // Blue - placeholder or cosmetic
    Warning, // Yellow - block will not appear on the page
}

/// Validation issue
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationIssue {
    pub severity: ValidationSeverity,
    pub message: String,
    pub affected_blocks: Vec<Ulid>,
    pub issue_type: ValidationIssueType,
}

/// Types of validation issues
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ValidationIssueType {
    MissingUrl,
    PlaceholderContent,
    EmptyPage,
}

/// Complete validation result
#[derive(Debug, Clone, Default)]
pub struct ValidationResult {
    pub issues: Vec<ValidationIssue>,
}

impl ValidationResult {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_issue(&mut self, issue: ValidationIssue) {
        self.issues.push(issue);
    }

    pub fn has_warnings(&self) -> bool {
        self.issues
            .iter()
            .any(|i| i.severity == ValidationSeverity::Warning)
    }

    /// Get all warnings
    pub fn warnings(&self) -> Vec<&ValidationIssue> {
        self.issues
            .iter()
            .filter(|i| i.severity == ValidationSeverity::Warning)
            .collect()
    }

    /// Get all info messages
    pub fn info(&self) -> Vec<&ValidationIssue> {
        self.issues
            .iter()
            .filter(|i| i.severity == ValidationSeverity::Info)
            .collect()
    }

    /// True when every block will render as authored
    pub fn is_clean(&self) -> bool {
        self.issues.is_empty()
    }
}

/// Reports blocks that will be hidden or show placeholder text
///
/// Purely informational: export never depends on the result.
pub struct Validator;

impl Validator {
    pub fn validate(blocks: &[Block]) -> ValidationResult {
        let mut result = ValidationResult::new();

        for block in blocks {
            if block.kind.requires_url() && block.url().is_none() {
                result.add_issue(ValidationIssue {
                    severity: ValidationSeverity::Warning,
                    message: format!(
                        "{} block has no URL and is hidden from the page.",
                        block.kind.label()
                    ),
                    affected_blocks: vec![block.id],
                    issue_type: ValidationIssueType::MissingUrl,
                });
            } else if block.kind.uses_content() && block.content.is_empty() {
                result.add_issue(ValidationIssue {
                    severity: ValidationSeverity::Info,
                    message: format!(
                        "{} block is empty and shows placeholder text.",
                        block.kind.label()
                    ),
                    affected_blocks: vec![block.id],
                    issue_type: ValidationIssueType::PlaceholderContent,
                });
            }
        }

        if blocks.iter().all(|b| resolve(b).is_none()) {
            result.add_issue(ValidationIssue {
                severity: ValidationSeverity::Info,
                message: "Nothing on the page renders yet.".to_string(),
                affected_blocks: vec![],
                issue_type: ValidationIssueType::EmptyPage,
            });
        }

        result
    }
}

/// Extension trait for BlockList to add validation
pub trait ValidatedBlocks {
    fn validate(&self) -> ValidationResult;

    /// Highest severity per block
    fn blocks_with_issues(&self, result: &ValidationResult) -> HashMap<Ulid, ValidationSeverity>;
}

impl ValidatedBlocks for BlockList {
    fn validate(&self) -> ValidationResult {
        Validator::validate(self.blocks())
    }

    fn blocks_with_issues(&self, result: &ValidationResult) -> HashMap<Ulid, ValidationSeverity> {
        let mut blocks = HashMap::new();

        for issue in &result.issues {
            for id in &issue.affected_blocks {
                blocks
                    .entry(*id)
                    .and_modify(|severity: &mut ValidationSeverity| {
                        *severity = (*severity).max(issue.severity);
                    })
                    .or_insert(issue.severity);
            }
        }

        blocks
    }
}
