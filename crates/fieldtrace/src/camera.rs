//! Camera device selection.
//!
//! Purpose
//! - Pick which video input feeds the canvas: start the first camera on
//!   init, cycle to the next one on "switch". Nothing here touches the
//!   polygon engine; a failed camera never changes traced points.
//!
//! Model
//! - `CameraBackend` is the platform seam (enumerate, start, stop).
//! - `CameraSelector` keeps the current index into the filtered video-input
//!   list and the id of the running stream.
//! - Enumeration failure is logged and treated as "no cameras". Start
//!   failure is logged and returned; the index stays where it moved to.

use std::fmt;

use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DeviceKind {
    VideoInput,
    AudioInput,
    AudioOutput,
}

/// One entry of the platform's media device list.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MediaDevice {
    pub device_id: String,
    #[serde(default)]
    pub label: String,
    pub kind: DeviceKind,
}

/// Errors reported by a camera backend.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CameraError {
    /// The device list could not be read (permissions, no media stack).
    Enumerate(String),
    /// A specific device refused to start.
    Start { device_id: String, reason: String },
}

impl fmt::Display for CameraError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CameraError::Enumerate(reason) => write!(f, "error getting video devices: {reason}"),
            CameraError::Start { device_id, reason } => {
                write!(f, "error accessing camera {device_id}: {reason}")
            }
        }
    }
}

impl std::error::Error for CameraError {}

/// Platform seam for media devices.
pub trait CameraBackend {
    fn enumerate_devices(&mut self) -> Result<Vec<MediaDevice>, CameraError>;
    fn start(&mut self, device_id: &str) -> Result<(), CameraError>;
    /// Stop the running stream, if any.
    fn stop(&mut self);
}

/// Keep only video inputs, preserving platform order.
pub fn video_inputs(devices: Vec<MediaDevice>) -> Vec<MediaDevice> {
    devices
        .into_iter()
        .filter(|d| d.kind == DeviceKind::VideoInput)
        .collect()
}

/// Current-camera state over a backend.
#[derive(Debug)]
pub struct CameraSelector<B> {
    backend: B,
    index: usize,
    active: Option<String>,
}

impl<B: CameraBackend> CameraSelector<B> {
    pub fn new(backend: B) -> Self {
        Self {
            backend,
            index: 0,
            active: None,
        }
    }

    /// Video inputs; empty (and logged) when enumeration fails.
    pub fn video_devices(&mut self) -> Vec<MediaDevice> {
        match self.backend.enumerate_devices() {
            Ok(devices) => video_inputs(devices),
            Err(err) => {
                tracing::error!(%err, "enumerate_devices");
                Vec::new()
            }
        }
    }

    /// Start the camera at the current index. `Ok(None)` if there is none.
    pub fn init(&mut self) -> Result<Option<&str>, CameraError> {
        let devices = self.video_devices();
        if devices.is_empty() {
            return Ok(None);
        }
        self.index %= devices.len();
        let id = devices[self.index].device_id.clone();
        self.start_camera(id)
    }

    /// Advance to the next video input (wrapping) and start it.
    pub fn switch_camera(&mut self) -> Result<Option<&str>, CameraError> {
        let devices = self.video_devices();
        if devices.is_empty() {
            return Ok(None);
        }
        self.index = (self.index + 1) % devices.len();
        let id = devices[self.index].device_id.clone();
        self.start_camera(id)
    }

    fn start_camera(&mut self, device_id: String) -> Result<Option<&str>, CameraError> {
        if self.active.take().is_some() {
            self.backend.stop();
        }
        match self.backend.start(&device_id) {
            Ok(()) => {
                tracing::debug!(device_id, index = self.index, "camera started");
                self.active = Some(device_id);
                Ok(self.active.as_deref())
            }
            Err(err) => {
                tracing::error!(%err, "start_camera");
                Err(err)
            }
        }
    }

    pub fn index(&self) -> usize {
        self.index
    }

    /// Id of the running stream.
    pub fn active(&self) -> Option<&str> {
        self.active.as_deref()
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }
}

/// Backend over a fixed device list. Ids in `unavailable` fail to start.
#[derive(Clone, Debug, Default)]
pub struct StaticBackend {
    pub devices: Vec<MediaDevice>,
    pub unavailable: Vec<String>,
    /// Every successful start, in order.
    pub started: Vec<String>,
    pub stops: usize,
}

impl StaticBackend {
    pub fn new(devices: Vec<MediaDevice>) -> Self {
        Self {
            devices,
            ..Self::default()
        }
    }
}

impl CameraBackend for StaticBackend {
    fn enumerate_devices(&mut self) -> Result<Vec<MediaDevice>, CameraError> {
        Ok(self.devices.clone())
    }
    fn start(&mut self, device_id: &str) -> Result<(), CameraError> {
        if self.unavailable.iter().any(|u| u == device_id) {
            return Err(CameraError::Start {
                device_id: device_id.to_string(),
                reason: "device unavailable".to_string(),
            });
        }
        self.started.push(device_id.to_string());
        Ok(())
    }
    fn stop(&mut self) {
        self.stops += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dev(id: &str, kind: DeviceKind) -> MediaDevice {
        MediaDevice {
            device_id: id.to_string(),
            label: format!("{id} label"),
            kind,
        }
    }

    fn three_cams() -> Vec<MediaDevice> {
        vec![
            dev("front", DeviceKind::VideoInput),
            dev("mic", DeviceKind::AudioInput),
            dev("back", DeviceKind::VideoInput),
            dev("speaker", DeviceKind::AudioOutput),
            dev("wide", DeviceKind::VideoInput),
        ]
    }

    struct Broken;
    impl CameraBackend for Broken {
        fn enumerate_devices(&mut self) -> Result<Vec<MediaDevice>, CameraError> {
            Err(CameraError::Enumerate("permission denied".into()))
        }
        fn start(&mut self, _device_id: &str) -> Result<(), CameraError> {
            unreachable!("no devices to start")
        }
        fn stop(&mut self) {}
    }

    #[test]
    fn filters_video_inputs_in_order() {
        let ids: Vec<_> = video_inputs(three_cams())
            .into_iter()
            .map(|d| d.device_id)
            .collect();
        assert_eq!(ids, vec!["front", "back", "wide"]);
    }

    #[test]
    fn init_starts_first_camera() {
        let mut sel = CameraSelector::new(StaticBackend::new(three_cams()));
        assert_eq!(sel.init().unwrap(), Some("front"));
        assert_eq!(sel.index(), 0);
        assert_eq!(sel.backend().stops, 0);
    }

    #[test]
    fn switch_cycles_and_stops_previous_stream() {
        let mut sel = CameraSelector::new(StaticBackend::new(three_cams()));
        sel.init().unwrap();
        let seen: Vec<_> = (0..4)
            .map(|_| sel.switch_camera().unwrap().map(str::to_string))
            .collect();
        assert_eq!(
            seen,
            vec![
                Some("back".to_string()),
                Some("wide".to_string()),
                Some("front".to_string()),
                Some("back".to_string())
            ]
        );
        assert_eq!(sel.backend().stops, 4);
        assert_eq!(sel.backend().started.len(), 5);
    }

    #[test]
    fn no_devices_is_a_no_op() {
        let mut sel = CameraSelector::new(StaticBackend::new(vec![dev(
            "mic",
            DeviceKind::AudioInput,
        )]));
        assert_eq!(sel.init().unwrap(), None);
        assert_eq!(sel.switch_camera().unwrap(), None);
        assert_eq!(sel.index(), 0);
        assert!(sel.active().is_none());
    }

    #[test]
    fn enumeration_failure_means_no_cameras() {
        let mut sel = CameraSelector::new(Broken);
        assert!(sel.video_devices().is_empty());
        assert_eq!(sel.init().unwrap(), None);
    }

    #[test]
    fn start_failure_is_reported_and_leaves_no_active_stream() {
        let mut backend = StaticBackend::new(three_cams());
        backend.unavailable.push("back".into());
        let mut sel = CameraSelector::new(backend);
        sel.init().unwrap();
        let err = sel.switch_camera().unwrap_err();
        assert_eq!(
            err.to_string(),
            "error accessing camera back: device unavailable"
        );
        assert_eq!(sel.index(), 1);
        assert!(sel.active().is_none());
        // next switch moves on past the broken camera
        assert_eq!(sel.switch_camera().unwrap(), Some("wide"));
    }
}
