use crate::github::corpus::IssueSource;
use crate::github::issues::{GitHubIssue, SelectedIssue};
use anyhow::Result;
use std::ops::ControlFlow;

/// Milestone that marks an issue as an active proposal.
pub const PROPOSAL_MILESTONE: &str = "Proposal";
/// Label for issues waiting on a decision from the review group.
pub const NEEDS_DECISION_LABEL: &str = "NeedsDecision";
/// Label for proposals that are already accepted.
pub const ACCEPTED_LABEL: &str = "Proposal-Accepted";

/// Reports whether an issue belongs in the proposal list.
///
/// The issue must be open, titled, materialized and not yet accepted, and
/// either sit in the `Proposal` milestone or carry `NeedsDecision`.
pub fn is_selected(issue: &GitHubIssue) -> bool {
    if issue.closed || issue.title.is_empty() || issue.not_exist {
        return false;
    }
    if issue.has_label(ACCEPTED_LABEL) {
        return false;
    }
    issue.milestone_title() == Some(PROPOSAL_MILESTONE) || issue.has_label(NEEDS_DECISION_LABEL)
}

/// Collects the `{number, title}` projection of every selected issue, in
/// traversal order.
///
/// A traversal error is returned as is and no selection is produced.
pub fn select_issues<S: IssueSource>(source: &S) -> Result<Vec<SelectedIssue>> {
    let mut selected = Vec::new();
    source.for_each_issue(|issue| {
        if is_selected(issue) {
            selected.push(SelectedIssue {
                number: i32::try_from(issue.number)?,
                title: issue.title.clone(),
            });
        }
        Ok(ControlFlow::Continue(()))
    })?;
    tracing::debug!(count = selected.len(), "selected issues");
    Ok(selected)
}
