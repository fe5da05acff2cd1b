use crate::github::issues::GitHubIssue;
use anyhow::{Context, Result};
use serde::Deserialize;
use std::collections::HashSet;
use std::ops::ControlFlow;

/// Traversal over the issues of one repository.
///
/// The visitor is called once per issue. Returning `ControlFlow::Break`
/// stops the traversal; returning an error aborts it and the error is
/// handed back to the caller unchanged.
pub trait IssueSource {
    fn for_each_issue<F>(&self, visit: F) -> Result<()>
    where
        F: FnMut(&GitHubIssue) -> Result<ControlFlow<()>>;
}

#[derive(Deserialize, Debug)]
struct CorpusDocument {
    #[serde(default)]
    repos: Vec<RepoDocument>,
}

#[derive(Deserialize, Debug)]
struct RepoDocument {
    owner: String,
    name: String,
    #[serde(default)]
    issues: Vec<GitHubIssue>,
}

/// A validated, read-only snapshot of mirrored repositories.
#[derive(Debug, Clone, PartialEq)]
pub struct Corpus {
    repos: Vec<GitHubRepo>,
}

/// Issues of one repository, ordered by ascending issue number.
#[derive(Debug, Clone, PartialEq)]
pub struct GitHubRepo {
    pub owner: String,
    pub name: String,
    issues: Vec<GitHubIssue>,
}

/// Parses and validates a corpus snapshot document.
///
/// - Returns an `Err` if the JSON is malformed.
/// - Returns an `Err` if an issue number is not a positive 32-bit integer.
/// - Returns an `Err` if a repository lists the same issue number twice.
/// - Returns an `Err` if the same repository appears twice.
pub fn parse_corpus(content: &[u8]) -> Result<Corpus> {
    let document: CorpusDocument =
        serde_json::from_slice(content).context("Failed to parse corpus snapshot JSON")?;

    let mut seen_repos = HashSet::new();
    let mut repos = Vec::with_capacity(document.repos.len());

    for repo in document.repos {
        if !seen_repos.insert((repo.owner.clone(), repo.name.clone())) {
            return Err(anyhow::anyhow!(
                "Corrupt snapshot: repository {}/{} appears more than once",
                repo.owner,
                repo.name
            ));
        }
        repos.push(GitHubRepo::new(repo.owner, repo.name, repo.issues)?);
    }

    Ok(Corpus { repos })
}

impl Corpus {
    /// Looks up one repository by owner and name.
    pub fn repo(&self, owner: &str, name: &str) -> Result<&GitHubRepo> {
        self.repos
            .iter()
            .find(|repo| repo.owner == owner && repo.name == name)
            .ok_or_else(|| anyhow::anyhow!("Repository {owner}/{name} not found in snapshot"))
    }
}

impl GitHubRepo {
    pub fn new(owner: String, name: String, mut issues: Vec<GitHubIssue>) -> Result<Self> {
        issues.sort_by_key(|issue| issue.number);

        for issue in &issues {
            if issue.number <= 0 || issue.number > i64::from(i32::MAX) {
                return Err(anyhow::anyhow!(
                    "Corrupt snapshot: {owner}/{name} has invalid issue number {}",
                    issue.number
                ));
            }
        }
        if let Some(pair) = issues.windows(2).find(|pair| pair[0].number == pair[1].number) {
            return Err(anyhow::anyhow!(
                "Corrupt snapshot: {owner}/{name} has duplicate issue #{}",
                pair[0].number
            ));
        }

        Ok(GitHubRepo {
            owner,
            name,
            issues,
        })
    }
}

impl IssueSource for GitHubRepo {
    fn for_each_issue<F>(&self, mut visit: F) -> Result<()>
    where
        F: FnMut(&GitHubIssue) -> Result<ControlFlow<()>>,
    {
        for issue in &self.issues {
            if visit(issue)?.is_break() {
                break;
            }
        }
        Ok(())
    }
}
