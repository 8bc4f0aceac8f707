//! The boundary with the external capacity service.
//!
//! Regions are sent as a GeoJSON feature collection holding one polygon feature per ring, and
//! the service answers with another feature collection holding the placements it computed.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::{debug, warn};

use crate::{
    cartesian::{Point, Ring},
    editor::Parameters,
    error::Error,
    region::{RegionId, RegionSet},
};

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
enum FeatureCollectionType {
    #[default]
    FeatureCollection,
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
enum FeatureType {
    #[default]
    Feature,
}

/// The geometry of a [`Feature`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Geometry {
    Point { coordinates: Point },
    Polygon { coordinates: Vec<Vec<Point>> },
    /// Any geometry the editor has no use for.
    #[serde(other)]
    Unsupported,
}

/// A geometry with arbitrary properties.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Feature<P> {
    #[serde(rename = "type", default)]
    kind: FeatureType,
    pub geometry: Geometry,
    #[serde(default)]
    pub properties: P,
}

/// The properties of every ring sent to the service.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RingProperties {
    /// The region the ring belongs to.
    pub id: RegionId,
    /// Whether the ring is not the outer boundary of its region.
    pub hole: bool,
}

/// The body of a capacity calculation request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CapacityRequest {
    #[serde(rename = "type")]
    kind: FeatureCollectionType,
    pub features: Vec<Feature<RingProperties>>,
    pub properties: Parameters,
}

impl CapacityRequest {
    pub fn new(regions: &RegionSet, parameters: &Parameters) -> Self {
        let features = regions
            .iter()
            .flat_map(|region| {
                region
                    .rings()
                    .iter()
                    .enumerate()
                    .map(move |(index, ring)| Feature {
                        kind: FeatureType::Feature,
                        geometry: Geometry::Polygon {
                            coordinates: vec![closed(ring)],
                        },
                        properties: RingProperties {
                            id: region.id(),
                            hole: index > 0,
                        },
                    })
            })
            .collect();

        Self {
            kind: FeatureCollectionType::FeatureCollection,
            features,
            properties: *parameters,
        }
    }

    pub fn to_json(&self) -> Result<String, Error> {
        Ok(serde_json::to_string(self)?)
    }
}

/// Returns the vertices of the given ring with the first one repeated at the end.
fn closed(ring: &Ring) -> Vec<Point> {
    ring.vertices()
        .iter()
        .chain(ring.vertices().first())
        .copied()
        .collect()
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResponseProperties {
    /// How many people fit in the regions.
    pub n_humans: u64,
}

/// The body of a successful capacity calculation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CapacityResponse {
    #[serde(default)]
    pub features: Vec<Feature<Value>>,
    #[serde(default)]
    pub properties: ResponseProperties,
}

/// The body of a failed capacity calculation.
#[derive(Deserialize)]
struct ServiceFailure {
    message: String,
}

impl CapacityResponse {
    /// Decodes the given HTTP answer of the service.
    ///
    /// Any status other than 200 is an [`Error::Service`] carrying the message of the service.
    pub fn from_http(status: u16, body: &str) -> Result<Self, Error> {
        if status != 200 {
            let message = serde_json::from_str::<ServiceFailure>(body)
                .map(|failure| failure.message)
                .unwrap_or_else(|_| format!("capacity service answered with status {status}"));

            return Err(Error::Service(message));
        }

        Ok(serde_json::from_str(body)?)
    }

    pub fn n_humans(&self) -> u64 {
        self.properties.n_humans
    }

    /// Returns an iterator over every point feature of the response.
    pub fn placements(&self) -> impl Iterator<Item = &Point> {
        self.features
            .iter()
            .filter_map(|feature| match &feature.geometry {
                Geometry::Point { coordinates } => Some(coordinates),
                _ => None,
            })
    }
}

/// A capacity calculation backend.
pub trait CapacityService {
    fn calculate(&self, request: &CapacityRequest) -> Result<CapacityResponse, Error>;
}

impl<F> CapacityService for F
where
    F: Fn(&CapacityRequest) -> Result<CapacityResponse, Error>,
{
    fn calculate(&self, request: &CapacityRequest) -> Result<CapacityResponse, Error> {
        self(request)
    }
}

/// The state of the last capacity calculation.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct Calculation {
    loading: bool,
    result: Option<CapacityResponse>,
    error: Option<String>,
}

impl Calculation {
    /// Marks a request as in flight.
    pub fn begin(&mut self) {
        self.loading = true;
        self.error = None;
    }

    /// Stores the outcome of the request in flight.
    ///
    /// On failure, the result of the previous request is kept.
    pub fn complete(&mut self, outcome: Result<CapacityResponse, Error>) {
        self.loading = false;

        match outcome {
            Ok(response) => {
                debug!(n_humans = response.n_humans(), "capacity calculated");
                self.result = Some(response);
            }
            Err(error) => {
                warn!(%error, "capacity calculation failed");
                self.error = Some(error.to_string());
            }
        }
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn result(&self) -> Option<&CapacityResponse> {
        self.result.as_ref()
    }

    /// Returns the user-facing message of the last failure, if any.
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn dismiss_error(&mut self) {
        self.error = None;
    }
}
