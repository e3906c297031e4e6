//! Seam to the external impact-map renderer.
//!
//! The simulator calls the installed [`MapGenerator`] exactly once per recorded impact.
//! Rendering the map itself is the collaborator's job.

use parking_lot::Mutex;
use serde::{Deserialize, Serialize};

use crate::{collision::ImpactEvent, error::Result, impact::ImpactAssessment, presets::ImpactSite};

/// Everything a map renderer needs to draw one impact.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MapRequest {
    pub site: ImpactSite,
    pub event: ImpactEvent,
    pub assessment: ImpactAssessment,
}

/// What a collaborator produced for a request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MapArtifact {
    pub generator: String,
    /// Where the rendered map can be found, if anything was written.
    pub location: Option<String>,
}

/// Trait implemented by impact-map renderers.
pub trait MapGenerator: Send + Sync {
    fn name(&self) -> &str;

    fn generate(&self, request: &MapRequest) -> Result<MapArtifact>;
}

/// Default collaborator that renders nothing.
#[derive(Debug, Default)]
pub struct NoopMapGenerator;

impl NoopMapGenerator {
    pub fn new() -> Self {
        Self
    }
}

impl MapGenerator for NoopMapGenerator {
    fn name(&self) -> &str {
        "noop"
    }

    fn generate(&self, _request: &MapRequest) -> Result<MapArtifact> {
        Ok(MapArtifact {
            generator: self.name().to_owned(),
            location: None,
        })
    }
}

/// Keeps every request in memory. Useful for hosts that render later, and for tests.
#[derive(Debug, Default)]
pub struct RecordingMapGenerator {
    requests: Mutex<Vec<MapRequest>>,
}

impl RecordingMapGenerator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn requests(&self) -> Vec<MapRequest> {
        self.requests.lock().clone()
    }

    pub fn request_count(&self) -> usize {
        self.requests.lock().len()
    }
}

impl MapGenerator for RecordingMapGenerator {
    fn name(&self) -> &str {
        "recording"
    }

    fn generate(&self, request: &MapRequest) -> Result<MapArtifact> {
        let mut requests = self.requests.lock();
        requests.push(request.clone());
        Ok(MapArtifact {
            generator: self.name().to_owned(),
            location: Some(format!("memory://impact-map/{}", requests.len())),
        })
    }
}
