use crate::config;

use super::smoother::Point;

const MIN_SPEED: f64 = 0.1;
const MAX_SPEED: f64 = 1.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ParallaxDirection {
    #[default]
    Vertical,
    Horizontal,
    Both,
}

impl ParallaxDirection {
    fn moves_x(self) -> bool {
        matches!(self, ParallaxDirection::Horizontal | ParallaxDirection::Both)
    }

    fn moves_y(self) -> bool {
        matches!(self, ParallaxDirection::Vertical | ParallaxDirection::Both)
    }
}

/// Scroll-linked offset for a decorative element.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ParallaxConfig {
    speed: f64,
    direction: ParallaxDirection,
    reverse: bool,
}

impl Default for ParallaxConfig {
    fn default() -> Self {
        Self::new(config::DEFAULT_PARALLAX_SPEED, ParallaxDirection::Vertical, false)
    }
}

impl ParallaxConfig {
    pub fn new(speed: f64, direction: ParallaxDirection, reverse: bool) -> Self {
        let speed = if speed.is_nan() {
            config::DEFAULT_PARALLAX_SPEED
        } else {
            speed.clamp(MIN_SPEED, MAX_SPEED)
        };
        Self {
            speed,
            direction,
            reverse,
        }
    }


    /// Signed speed, negative when reversed.
    pub fn effective_speed(&self) -> f64 {
        if self.reverse {
            -self.speed
        } else {
            self.speed
        }
    }

    /// Offset for an element at `element_top` (relative to the viewport).
    ///
    /// Vertical motion follows the distance between the element centre and
    /// the viewport centre; horizontal motion follows scroll progress.
    pub fn offset(&self, element_top: f64, element_height: f64, viewport_height: f64) -> Point {
        let speed = self.effective_speed();
        let mut offset = Point::ORIGIN;

        if self.direction.moves_y() {
            let element_center = element_top + element_height / 2.0;
            offset.y = (element_center - viewport_height / 2.0) * speed;
        }
        if self.direction.moves_x() && viewport_height > 0.0 {
            let scroll_progress = element_top / viewport_height;
            offset.x = scroll_progress * 100.0 * speed;
        }
        offset
    }

    pub fn transform(&self, offset: Point) -> String {
        let x = if self.direction.moves_x() { offset.x } else { 0.0 };
        let y = if self.direction.moves_y() { offset.y } else { 0.0 };
        format!("translate3d({}px, {}px, 0)", x, y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_speed_clamped() {
        assert_eq!(ParallaxConfig::new(5.0, ParallaxDirection::Vertical, false).speed, 1.0);
        assert_eq!(ParallaxConfig::new(0.0, ParallaxDirection::Vertical, false).speed, 0.1);
        assert_eq!(
            ParallaxConfig::new(0.5, ParallaxDirection::Vertical, true).effective_speed(),
            -0.5
        );
    }

    #[test]
    fn test_vertical_offset() {
        let config = ParallaxConfig::new(0.5, ParallaxDirection::Vertical, false);
        // Centre of a 200px element at top 400 sits 100px below an 800px viewport centre
        let offset = config.offset(400.0, 200.0, 800.0);
        assert_eq!(offset, Point::new(0.0, 50.0));
        assert_eq!(config.transform(offset), "translate3d(0px, 50px, 0)");
    }

    #[test]
    fn test_horizontal_offset() {
        let config = ParallaxConfig::new(0.5, ParallaxDirection::Horizontal, false);
        let offset = config.offset(400.0, 200.0, 800.0);
        assert_eq!(offset, Point::new(25.0, 0.0));

        // Zero viewport leaves the element in place
        assert_eq!(config.offset(400.0, 200.0, 0.0), Point::ORIGIN);
    }

    #[test]
    fn test_both_axes_reversed() {
        let config = ParallaxConfig::new(1.0, ParallaxDirection::Both, true);
        let offset = config.offset(50.0, 100.0, 100.0);
        assert_eq!(offset, Point::new(-50.0, -50.0));
    }
}
