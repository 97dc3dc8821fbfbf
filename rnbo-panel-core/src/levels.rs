//! volume slider transforms. the sliders run 0..1, the gain parameters run
//! 0..240, and the labels show a percentage with one decimal

pub const LEVEL_PARAM_SCALE: f64 = 240.0;

pub fn level_param_value(slider: f64) -> f64 {
    slider * LEVEL_PARAM_SCALE
}

pub fn level_display_percent(slider: f64) -> f64 {
    (slider * 1000.0).round() / 10.0
}

pub fn level_display_text(slider: f64) -> String {
    format!("{}", level_display_percent(slider))
}

#[cfg(test)]
mod tests {
    use super::{level_display_percent, level_display_text, level_param_value};

    #[test_log::test]
    fn test_param_scale() {
        assert_eq!(level_param_value(0.0), 0.0);
        assert_eq!(level_param_value(0.5), 120.0);
        assert_eq!(level_param_value(1.0), 240.0);
    }

    #[test_log::test]
    fn test_display_rounds_to_one_decimal() {
        assert_eq!(level_display_percent(0.5), 50.0);
        assert_eq!(level_display_percent(0.499), 49.9);
        assert_eq!(level_display_percent(0.4999), 50.0);
        assert_eq!(level_display_percent(0.12345), 12.3);
    }

    #[test_log::test]
    fn test_display_text() {
        assert_eq!(level_display_text(0.5), "50");
        assert_eq!(level_display_text(0.499), "49.9");
    }
}
