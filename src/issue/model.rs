//! Issue records.
//!
//! A reported issue, its category and its append-only update log.

use crate::core::{IssueId, Timestamp};
use crate::sla::SlaStatus;
use serde::{Deserialize, Serialize};

/// Workflow status of an issue.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum IssueStatus {
    /// Reported, not yet assigned
    Submitted,
    /// Assigned to a worker
    InProgress,
    /// Terminal
    Resolved,
}

impl IssueStatus {
    /// Display label.
    pub fn label(&self) -> &'static str {
        match self {
            IssueStatus::Submitted => "Submitted",
            IssueStatus::InProgress => "In Progress",
            IssueStatus::Resolved => "Resolved",
        }
    }

    /// Whether no further workflow transitions apply.
    pub fn is_terminal(&self) -> bool {
        *self == IssueStatus::Resolved
    }
}

impl std::fmt::Display for IssueStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Routine civic issue categories.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum IssueCategory {
    GarbageAndWaste,
    WaterSupplyQuality,
    Drainage,
    RoadsAndInfrastructure,
    StreetlightsAndElectricity,
    ParksAndEnvironment,
    IllegalConstruction,
    StrayAnimalsAndHealthHazards,
    Sanitation,
    MosquitoControl,
}

impl IssueCategory {
    pub fn label(&self) -> &'static str {
        match self {
            IssueCategory::GarbageAndWaste => "Garbage & Waste Management Problems",
            IssueCategory::WaterSupplyQuality => "Water Supply Quality",
            IssueCategory::Drainage => "Drainage Issues",
            IssueCategory::RoadsAndInfrastructure => "Roads, Footpaths & Infrastructure Damage",
            IssueCategory::StreetlightsAndElectricity => "Streetlights & Electricity Failures",
            IssueCategory::ParksAndEnvironment => "Parks, Trees & Environmental Concerns",
            IssueCategory::IllegalConstruction => "Illegal Constructions & Encroachments",
            IssueCategory::StrayAnimalsAndHealthHazards => "Stray Animals & Public Health Hazards",
            IssueCategory::Sanitation => "Sanitation & Toiletry Issues",
            IssueCategory::MosquitoControl => "Mosquito Control & Fogging",
        }
    }
}

/// Categories reported through the emergency channel.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EmergencyCategory {
    PipelineBurst,
    RoadAccident,
    FireHazard,
    MedicalWaste,
    MajorBlockage,
}

impl EmergencyCategory {
    pub fn label(&self) -> &'static str {
        match self {
            EmergencyCategory::PipelineBurst => "Pipeline Burst",
            EmergencyCategory::RoadAccident => "Road Accident",
            EmergencyCategory::FireHazard => "Fire Hazard",
            EmergencyCategory::MedicalWaste => "Medical Waste",
            EmergencyCategory::MajorBlockage => "Major Blockage",
        }
    }
}

/// Category of a reported issue.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    Routine(IssueCategory),
    Emergency(EmergencyCategory),
}

impl Category {
    pub fn label(&self) -> &'static str {
        match self {
            Category::Routine(c) => c.label(),
            Category::Emergency(c) => c.label(),
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Geographic location of an issue.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Location {
    pub lat: f64,
    pub lng: f64,
}

/// Citizen who reported an issue.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Reporter {
    /// User ID
    pub uid: String,
    /// Display name
    pub name: String,
    /// Contact email
    pub email: String,
}

/// An image attached to a report or update.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImageRef {
    /// Image location
    pub url: String,
    /// Short description for accessibility/search
    pub hint: String,
}

impl ImageRef {
    pub fn new(url: &str, hint: &str) -> Self {
        Self {
            url: url.to_string(),
            hint: hint.to_string(),
        }
    }
}

/// One entry in an issue's update log.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct IssueUpdate {
    /// Issue status at the time of the update
    pub status: IssueStatus,
    /// When the update was recorded
    pub updated_at: Timestamp,
    /// Free-text description
    pub description: String,
    /// Attached image
    pub image: Option<ImageRef>,
    /// Marks SLA remarks apart from workflow updates
    pub is_sla_update: bool,
}

impl IssueUpdate {
    /// Create a workflow update.
    pub fn new(status: IssueStatus, updated_at: Timestamp, description: &str) -> Self {
        Self {
            status,
            updated_at,
            description: description.to_string(),
            image: None,
            is_sla_update: false,
        }
    }

    /// Create an SLA remark.
    pub fn sla_remark(status: IssueStatus, updated_at: Timestamp, description: &str) -> Self {
        Self {
            is_sla_update: true,
            ..Self::new(status, updated_at, description)
        }
    }

    /// Attach an image.
    pub fn with_image(mut self, image: ImageRef) -> Self {
        self.image = Some(image);
        self
    }
}

/// Data supplied by a citizen when reporting an issue.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct NewIssue {
    pub description: String,
    pub category: Category,
    pub location: Location,
    /// Photo of the issue
    pub photo_url: String,
    pub city: Option<String>,
    pub is_emergency: bool,
}

impl NewIssue {
    /// Create a routine report.
    pub fn new(description: &str, category: Category, location: Location, photo_url: &str) -> Self {
        Self {
            description: description.to_string(),
            category,
            location,
            photo_url: photo_url.to_string(),
            city: None,
            is_emergency: matches!(category, Category::Emergency(_)),
        }
    }

    /// Flag as emergency.
    pub fn emergency(mut self) -> Self {
        self.is_emergency = true;
        self
    }

    /// Set city.
    pub fn with_city(mut self, city: &str) -> Self {
        self.city = Some(city.to_string());
        self
    }
}

/// A status change requested by a worker or admin.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct IssueUpdateRequest {
    pub status: IssueStatus,
    pub description: String,
    pub image: Option<ImageRef>,
}

impl IssueUpdateRequest {
    pub fn new(status: IssueStatus, description: &str) -> Self {
        Self {
            status,
            description: description.to_string(),
            image: None,
        }
    }

    /// Attach an image.
    pub fn with_image(mut self, image: ImageRef) -> Self {
        self.image = Some(image);
        self
    }
}

/// A reported issue.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Issue {
    pub id: IssueId,
    pub title: String,
    pub description: String,
    pub category: Category,
    pub status: IssueStatus,
    pub city: Option<String>,
    /// Last stored SLA status; reads replace derived values with a fresh one
    pub sla_status: SlaStatus,
    /// Resolution deadline; only moves forward
    pub sla_deadline: Timestamp,
    pub location: Location,
    pub image: ImageRef,
    pub submitted_by: Reporter,
    pub submitted_at: Timestamp,
    /// Assigned worker ID
    pub assigned_to: Option<String>,
    /// Append-only
    pub updates: Vec<IssueUpdate>,
    pub is_emergency: bool,
}

impl Issue {
    /// Append an entry to the update log.
    pub fn push_update(&mut self, update: IssueUpdate) {
        self.updates.push(update);
    }

    /// SLA remarks in log order.
    pub fn sla_updates(&self) -> impl Iterator<Item = &IssueUpdate> {
        self.updates.iter().filter(|u| u.is_sla_update)
    }

    /// Most recent update.
    pub fn latest_update(&self) -> Option<&IssueUpdate> {
        self.updates.last()
    }
}
