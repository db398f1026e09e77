//! Sample data the demo feed draws from.
//!
//! The archetypes mirror the alerts the console ships as sample data; the
//! camera registry is the console's installed camera list.

use shared_types::{CameraId, CameraStatus, ViolationCategory, ViolationDetails};

/// One installed camera.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CameraRecord {
    pub id: CameraId,
    pub name: String,
    pub location: String,
    pub zone: String,
    pub status: CameraStatus,
}

/// Lookup table from camera id to its labels.
#[derive(Clone, Debug, Default)]
pub struct CameraRegistry {
    cameras: Vec<CameraRecord>,
}

impl CameraRegistry {
    /// Create a registry from explicit records.
    pub fn new(cameras: Vec<CameraRecord>) -> Self {
        Self { cameras }
    }

    /// The console's installed cameras.
    pub fn sample() -> Self {
        let rows: [(&str, &str, &str, &str, CameraStatus); 12] = [
            ("CAM-001", "Main Entrance", "Building A - Ground Floor", "Zone A", CameraStatus::Online),
            ("CAM-002", "Cafeteria North", "Building B - Level 1", "Zone B", CameraStatus::Online),
            ("CAM-003", "Library Entrance", "Building C - Ground Floor", "Zone C", CameraStatus::Online),
            ("CAM-004", "Parking Lot A", "Outdoor - East Side", "Zone D", CameraStatus::Warning),
            ("CAM-005", "Student Center", "Building D - Level 2", "Zone A", CameraStatus::Online),
            ("CAM-006", "Sports Complex", "Building E - Ground Floor", "Zone E", CameraStatus::Offline),
            ("CAM-007", "Science Lab Wing", "Building F - Level 3", "Zone F", CameraStatus::Online),
            ("CAM-008", "Admin Building", "Building G - Ground Floor", "Zone G", CameraStatus::Online),
            ("CAM-009", "Dormitory Block A", "Residence - East Wing", "Zone H", CameraStatus::Online),
            ("CAM-010", "Cafeteria South", "Building B - Level 1", "Zone B", CameraStatus::Online),
            ("CAM-011", "Engineering Block", "Building H - Level 2", "Zone I", CameraStatus::Online),
            ("CAM-012", "Medical Center", "Building I - Ground Floor", "Zone J", CameraStatus::Online),
        ];

        Self::new(
            rows.into_iter()
                .map(|(id, name, location, zone, status)| CameraRecord {
                    id: CameraId::new(id),
                    name: name.to_string(),
                    location: location.to_string(),
                    zone: zone.to_string(),
                    status,
                })
                .collect(),
        )
    }

    /// Find a camera by id.
    pub fn get(&self, id: &CameraId) -> Option<&CameraRecord> {
        self.cameras.iter().find(|c| &c.id == id)
    }

    /// Display name and location for a camera; unknown cameras fall back to
    /// their raw id.
    pub fn labels_for(&self, id: &CameraId) -> (String, String) {
        match self.get(id) {
            Some(camera) => (camera.name.clone(), camera.location.clone()),
            None => (id.to_string(), "Unknown location".to_string()),
        }
    }

    pub fn len(&self) -> usize {
        self.cameras.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cameras.is_empty()
    }
}

/// The fixed set of incidents the demo feed replays.
pub fn sample_archetypes() -> Vec<ViolationDetails> {
    let registry = CameraRegistry::sample();
    let rows: [(&str, ViolationCategory, f32); 6] = [
        ("CAM-002", ViolationCategory::Cigarette, 94.5),
        ("CAM-005", ViolationCategory::Vape, 87.2),
        ("CAM-010", ViolationCategory::FoodItem, 91.8),
        ("CAM-003", ViolationCategory::Beverage, 96.1),
        ("CAM-001", ViolationCategory::Cigarette, 89.3),
        ("CAM-009", ViolationCategory::Vape, 92.7),
    ];

    rows.into_iter()
        .map(|(camera, category, confidence_percent)| {
            let camera_id = CameraId::new(camera);
            let (camera_label, location_label) = registry.labels_for(&camera_id);
            ViolationDetails {
                category,
                confidence_percent,
                camera_id,
                camera_label,
                location_label,
            }
        })
        .collect()
}
