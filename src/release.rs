//! Release publishing collaborator.
//!
//! The workflow only describes the release it wants; submitting it to a
//! hosting service is left to a [ReleasePublisher] implementation.

use crate::error::{ReleaseError, Result};
use crate::outputs::OutputSink;
use serde::{Deserialize, Serialize};

/// Output key carrying the serialized release request
pub const RELEASE_REQUEST_OUTPUT: &str = "release-request";

/// Payload for creating a hosted release
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReleaseRequest {
    pub tag_name: String,
    pub name: String,
    pub body: String,
    pub draft: bool,
    pub prerelease: bool,
}

pub trait ReleasePublisher {
    fn publish(&mut self, request: &ReleaseRequest) -> Result<()>;
}

/// Hands the JSON request to an [OutputSink] under [RELEASE_REQUEST_OUTPUT]
/// so a later pipeline step can submit it.
#[derive(Debug, Clone, Default)]
pub struct OutputReleasePublisher<O: OutputSink> {
    sink: O,
}

impl<O: OutputSink> OutputReleasePublisher<O> {
    pub fn new(sink: O) -> Self {
        OutputReleasePublisher { sink }
    }

    pub fn into_inner(self) -> O {
        self.sink
    }
}

impl<O: OutputSink> ReleasePublisher for OutputReleasePublisher<O> {
    fn publish(&mut self, request: &ReleaseRequest) -> Result<()> {
        let payload = serde_json::to_string(request)
            .map_err(|e| ReleaseError::release(format!("cannot encode request: {}", e)))?;
        self.sink.set_output(RELEASE_REQUEST_OUTPUT, &payload)
    }
}

/// Keeps every request it is given; used by tests and dry runs
#[derive(Debug, Clone, Default)]
pub struct RecordingPublisher {
    pub requests: Vec<ReleaseRequest>,
}

impl ReleasePublisher for RecordingPublisher {
    fn publish(&mut self, request: &ReleaseRequest) -> Result<()> {
        self.requests.push(request.clone());
        Ok(())
    }
}
