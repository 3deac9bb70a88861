use baro_types::SizePreset;
use serde::Serialize;

/// Canvas width the stroke and hover offsets are tuned for.
pub const REFERENCE_WIDTH: f64 = 600.0;

/// Logical canvas, gauge radius and the tight SVG viewBox around the half circle.
#[derive(Clone, Copy, Debug, Serialize, PartialEq)]
pub struct GaugeLayout {
    pub logical_width: f64,
    pub logical_height: f64,
    pub radius: f64,
    pub scale_factor: f64,
    pub center_x: f64,
    pub center_y: f64,
    pub view_box_min_x: f64,
    /// Zero unless the label ring reaches above the canvas top.
    pub view_box_min_y: f64,
    pub view_box_width: f64,
    pub view_box_height: f64,
}

impl GaugeLayout {
    /// `tick_radius_scale` decides how far the label ring reaches sideways and upwards.
    pub fn from_preset(preset: SizePreset, tick_radius_scale: f64) -> Self {
        let (width, height) = preset.dimensions();
        Self::from_dimensions(width, height, tick_radius_scale)
    }

    pub fn from_dimensions(width: f64, height: f64, tick_radius_scale: f64) -> Self {
        let radius = width.min(height) / 2.5;
        let centerX = width / 2.0;
        let centerY = height / 2.0;
        let tickLabelRadius = radius * tick_radius_scale;
        let sideMargin = (radius * 0.03).max(8.0);
        let viewBoxMinY = (centerY - tickLabelRadius - sideMargin).min(0.0);
        // nothing is drawn below the centre line
        let viewBoxHeight = centerY + (height * 0.04).max(20.0) - viewBoxMinY;

        Self {
            logical_width: width,
            logical_height: height,
            radius,
            scale_factor: width / REFERENCE_WIDTH,
            center_x: centerX,
            center_y: centerY,
            view_box_min_x: centerX - tickLabelRadius - sideMargin,
            view_box_min_y: viewBoxMinY,
            view_box_width: 2.0 * tickLabelRadius + 2.0 * sideMargin,
            view_box_height: viewBoxHeight,
        }
    }

    pub fn view_box(&self) -> String {
        format!(
            "{} {} {} {}",
            self.view_box_min_x, self.view_box_min_y, self.view_box_width, self.view_box_height
        )
    }

    /// Transform moving the origin to the gauge centre.
    pub fn center_transform(&self) -> String {
        format!("translate({}, {})", self.center_x, self.center_y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn medium_preset_view_box() {
        let layout = GaugeLayout::from_preset(SizePreset::M, 1.15);
        assert_eq!(layout.radius, 240.0);
        assert!((layout.scale_factor - 800.0 / 600.0).abs() < 1e-12);
        assert_eq!(layout.view_box_height, 324.0);

        let tickRadius = 240.0 * 1.15;
        let margin = 8.0;
        assert!((layout.view_box_min_x - (400.0 - tickRadius - margin)).abs() < 1e-9);
        assert!((layout.view_box_width - (2.0 * tickRadius + 2.0 * margin)).abs() < 1e-9);
        assert_eq!(layout.center_transform(), "translate(400, 300)");
    }

    #[test]
    fn small_presets_keep_minimum_margins() {
        let layout = GaugeLayout::from_preset(SizePreset::Xxs, 1.15);
        assert_eq!(layout.radius, 60.0);
        // label ring tops out at 75 - 69 - 8 = -2; 0.04 * 150 = 6 < 20
        assert_eq!(layout.view_box_min_y, -2.0);
        assert_eq!(layout.view_box_height, 97.0);
        assert!((layout.view_box_width - (2.0 * 69.0 + 16.0)).abs() < 1e-9);
    }

    #[test]
    fn large_presets_scale_margins() {
        let layout = GaugeLayout::from_preset(SizePreset::Xxxl, 1.15);
        assert_eq!(layout.radius, 480.0);
        assert!((layout.view_box_height - (600.0 + 48.0)).abs() < 1e-9);
        let margin = 480.0 * 0.03;
        assert!((layout.view_box_width - (2.0 * 480.0 * 1.15 + 2.0 * margin)).abs() < 1e-9);
    }

    #[test]
    fn wide_label_ring_extends_the_view_box_upwards() {
        let layout = GaugeLayout::from_preset(SizePreset::M, 1.5);
        // 300 - 360 - 8
        assert_eq!(layout.view_box_min_y, -68.0);
        assert!(layout.view_box_min_y <= layout.center_y - layout.radius * 1.5);
        assert_eq!(layout.view_box_height, 324.0 + 68.0);
        assert!(layout.view_box().starts_with("32 -68 "));
    }

    #[test]
    fn view_box_string_has_four_numbers() {
        let layout = GaugeLayout::from_preset(SizePreset::M, 1.0);
        assert_eq!(layout.view_box(), "152 0 496 324");
    }
}
