//! Content records.
//!
//! All records borrow `'static` data: the site content is compiled in and
//! never changes while a page is open. They serialize so the prerenderer can
//! emit a manifest and so tests can snapshot them.

use std::fmt;

use serde::Serialize;

use crate::route::Route;
use crate::selector::Section;

/// One entry in the top navigation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct NavEntry {
    pub label: &'static str,
    pub route: Route,
}

impl NavEntry {
    /// Fragment the link points at, e.g. `#/expos`.
    pub fn target(&self) -> &'static str {
        self.route.fragment()
    }
}

/// Rover subsystems shown in the "Systems" selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SystemKey {
    Drivetrain,
    Arm,
    Autonomy,
    Power,
    Science,
}

impl SystemKey {
    pub fn as_str(&self) -> &'static str {
        match self {
            SystemKey::Drivetrain => "drivetrain",
            SystemKey::Arm => "arm",
            SystemKey::Autonomy => "autonomy",
            SystemKey::Power => "power",
            SystemKey::Science => "science",
        }
    }
}

impl fmt::Display for SystemKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A rover subsystem with its headline and bullet points.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SystemDescriptor {
    pub key: SystemKey,
    pub title: &'static str,
    pub summary: &'static str,
    pub points: &'static [&'static str],
}

impl Section for SystemDescriptor {
    type Key = SystemKey;

    fn key(&self) -> SystemKey {
        self.key
    }
}

/// Whether an exhibition already happened.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ExpoStatus {
    Participated,
    Upcoming,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ExpoEntry {
    pub name: &'static str,
    pub status: ExpoStatus,
    pub description: &'static str,
    pub image: Option<&'static str>,
}

/// A support programme the team belongs to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProgramEntry {
    pub name: &'static str,
    /// Short badge text, e.g. a selection note.
    pub note: Option<&'static str>,
}

/// A team captain.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TeamMember {
    pub name: &'static str,
    pub email: &'static str,
    pub photo: &'static str,
}

impl TeamMember {
    pub fn mailto(&self) -> String {
        format!("mailto:{}", self.email)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Subteam {
    pub key: &'static str,
    pub title: &'static str,
}

/// A past rover in the hardware gallery.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RoverEntry {
    pub name: &'static str,
    pub caption: &'static str,
    pub image: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SocialLink {
    pub label: &'static str,
    pub href: &'static str,
}
