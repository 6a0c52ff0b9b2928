//! Profile normalization and the process-wide saved-profile slot.
//!
//! `normalize` is total: any subset of profile fields renders into
//! deterministic text, with explicit markers where whole sections are
//! missing. The generation prompt embeds this text verbatim, so the exact
//! line formats here are part of the prompt contract.

pub mod handlers;

use std::sync::Arc;

use tokio::sync::RwLock;

use crate::models::profile::CandidateProfile;

/// Renders a profile into the canonical text block used in the prompt.
///
/// Section order is fixed: header → experience → projects. Header lines
/// (name, education, skills, linkedin, github) appear only when their
/// source value is present; empty experience/project lists render a single
/// "no ... listed" marker line instead of disappearing.
pub fn normalize(profile: &CandidateProfile) -> String {
    let mut out = String::new();

    if let Some(name) = non_empty(&profile.name) {
        out.push_str(&format!("Name: {name}\n"));
    }
    match (non_empty(&profile.degree), non_empty(&profile.university)) {
        (Some(degree), Some(university)) => {
            out.push_str(&format!("Education: {degree}, {university}\n"));
        }
        (Some(degree), None) => out.push_str(&format!("Education: {degree}\n")),
        (None, Some(university)) => out.push_str(&format!("Education: {university}\n")),
        (None, None) => {}
    }
    if !profile.skills.is_empty() {
        out.push_str(&format!("Skills: {}\n", profile.skills.join(", ")));
    }
    if let Some(linkedin) = non_empty(&profile.linkedin) {
        out.push_str(&format!("LinkedIn: {linkedin}\n"));
    }
    if let Some(github) = non_empty(&profile.github) {
        out.push_str(&format!("GitHub: {github}\n"));
    }
    if !out.is_empty() {
        out.push('\n');
    }

    out.push_str("Experience:\n");
    if profile.experience.is_empty() {
        out.push_str("- no experience listed\n");
    } else {
        for entry in &profile.experience {
            match non_empty(&entry.summary) {
                Some(summary) => out.push_str(&format!(
                    "- {} at {}: {}\n",
                    entry.role, entry.company, summary
                )),
                None => out.push_str(&format!("- {} at {}\n", entry.role, entry.company)),
            }
        }
    }

    out.push_str("\nProjects:\n");
    if profile.projects.is_empty() {
        out.push_str("- no projects listed\n");
    } else {
        for project in &profile.projects {
            if project.technologies.is_empty() {
                out.push_str(&format!("- {}: {}\n", project.name, project.description));
            } else {
                out.push_str(&format!(
                    "- {}: {} (Tech: {})\n",
                    project.name,
                    project.description,
                    project.technologies.join(", ")
                ));
            }
        }
    }

    out
}

/// Whitespace-only values are treated the same as absent ones.
fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().map(str::trim).filter(|v| !v.is_empty())
}

/// Process-wide "current profile" slot.
///
/// One slot for the whole process — the extension is single-user. Each
/// update replaces the stored profile wholesale; readers never observe a
/// partially-written profile.
#[derive(Clone, Default)]
pub struct ProfileStore {
    inner: Arc<RwLock<Option<CandidateProfile>>>,
}

impl ProfileStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the stored profile. No merging: fields from the previous
    /// profile do not survive an update.
    pub async fn replace(&self, profile: CandidateProfile) {
        *self.inner.write().await = Some(profile);
    }

    /// Returns a clone of the stored profile, if one has been saved.
    pub async fn current(&self) -> Option<CandidateProfile> {
        self.inner.read().await.clone()
    }
}
