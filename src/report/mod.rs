pub mod visualization;

use serde::Serialize;

use crate::{
    LocateResult,
    detection::{AxisScan, CenterPoint},
};

#[derive(Serialize)]
pub struct JsonReport {
    pub width: u32,
    pub height: u32,
    pub anomaly_found: bool,
    pub circle: Option<CircleReportSection>,
}

#[derive(Serialize)]
pub struct CircleReportSection {
    pub anomaly_x: u32,
    pub anomaly_y: u32,
    pub stroke_color: [u8; 4],
    pub vertical_scan: AxisScan,
    pub horizontal_scan: AxisScan,
    pub center: CenterPoint,
    pub radius: Option<f32>,
}

impl From<&LocateResult> for JsonReport {
    fn from(result: &LocateResult) -> Self {
        let (width, height) = result.image.dimensions();

        Self {
            width,
            height,
            anomaly_found: result.detection.is_some(),
            circle: result.detection.as_ref().map(|d| CircleReportSection {
                anomaly_x: d.anomaly.x,
                anomaly_y: d.anomaly.y,
                stroke_color: d.anomaly.color.0,
                vertical_scan: d.vertical,
                horizontal_scan: d.horizontal,
                center: d.center,
                radius: d.radius,
            }),
        }
    }
}

impl JsonReport {
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}
