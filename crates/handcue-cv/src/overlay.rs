//! On-screen feedback: the last command's banner and the static title layer
//!
//! Text itself is left to the host window; the renderer paints the
//! backgrounds into an RGB frame and exposes the strings to draw on top.

use crate::Result;
use anyhow::Context;
use handcue_core::CommandTable;
use image::{Rgb, RgbImage};
use std::path::Path;

pub const TITLE: &str = "Hand Gesture Video Controller";
pub const SUBTITLE: &str = "Control any browser video | Press 'q' to quit";

/// Remembers what was last dispatched and hides it after a timeout
#[derive(Debug, Clone)]
pub struct GestureDisplay {
    timeout_secs: f64,
    current: Option<(String, f64)>,
}

impl GestureDisplay {
    pub fn new(timeout_secs: f64) -> Self {
        Self {
            timeout_secs,
            current: None,
        }
    }

    pub fn show(&mut self, text: impl Into<String>, now: f64) {
        self.current = Some((text.into(), now));
    }

    /// Text to display at `now`; expired text is dropped.
    pub fn current(&mut self, now: f64) -> Option<&str> {
        if let Some((_, shown_at)) = &self.current {
            if now - *shown_at > self.timeout_secs {
                self.current = None;
            }
        }
        self.current.as_ref().map(|(text, _)| text.as_str())
    }

    pub fn clear(&mut self) {
        self.current = None;
    }
}

/// Overlay geometry and colours
#[derive(Debug, Clone)]
pub struct OverlayRenderer {
    pub title_bar_height: u32,
    pub title_bar_color: Rgb<u8>,
    pub banner_color: Rgb<u8>,
    /// Banner weight when blending over the frame
    pub banner_alpha: f32,
    /// Approximate rendered width of one banner character
    pub glyph_width: u32,
}

impl Default for OverlayRenderer {
    fn default() -> Self {
        Self {
            title_bar_height: 100,
            title_bar_color: Rgb([40, 40, 40]),
            banner_color: Rgb([234, 51, 147]),
            banner_alpha: 0.7,
            glyph_width: 30,
        }
    }
}

impl OverlayRenderer {
    pub fn blank_frame(width: u32, height: u32) -> RgbImage {
        RgbImage::new(width, height)
    }

    /// Title bar plus, when `banner` is set, a translucent box at the centre.
    pub fn render(&self, frame: &mut RgbImage, banner: Option<&str>) {
        let (width, height) = frame.dimensions();
        self.fill_rect(frame, 0, 0, width, self.title_bar_height.min(height), 1.0, self.title_bar_color);

        if let Some(text) = banner {
            let (x, y, w, h) = self.banner_rect(text, width, height);
            self.fill_rect(frame, x, y, w, h, self.banner_alpha, self.banner_color);
        }
    }

    /// Banner rectangle `(x, y, width, height)` for `text`, clipped to the frame.
    pub fn banner_rect(&self, text: &str, width: u32, height: u32) -> (u32, u32, u32, u32) {
        let text_width = self.glyph_width * text.chars().count() as u32;
        let x = width.saturating_sub(text_width) / 2;
        let y = height / 2;

        let left = x.saturating_sub(30);
        let top = y.saturating_sub(60);
        let right = (x + text_width + 30).min(width);
        let bottom = (y + 20).min(height);
        (left, top, right.saturating_sub(left), bottom.saturating_sub(top))
    }

    #[allow(clippy::too_many_arguments)]
    fn fill_rect(&self, frame: &mut RgbImage, x: u32, y: u32, w: u32, h: u32, alpha: f32, color: Rgb<u8>) {
        let (width, height) = frame.dimensions();
        for py in y..(y + h).min(height) {
            for px in x..(x + w).min(width) {
                let pixel = frame.get_pixel_mut(px, py);
                for c in 0..3 {
                    let blended = alpha * color[c] as f32 + (1.0 - alpha) * pixel[c] as f32;
                    pixel[c] = blended.round().clamp(0.0, 255.0) as u8;
                }
            }
        }
    }

    pub fn save_snapshot<P: AsRef<Path>>(&self, frame: &RgbImage, path: P) -> Result<()> {
        frame
            .save(path.as_ref())
            .with_context(|| format!("Failed to save overlay: {:?}", path.as_ref()))
    }
}

/// Title, subtitle and one line per gesture, in drawing order.
pub fn guide_lines(table: &CommandTable) -> Vec<String> {
    let mut lines = vec![TITLE.to_string(), SUBTITLE.to_string()];
    lines.extend(table.guide_lines());
    lines
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_times_out() {
        let mut display = GestureDisplay::new(1.5);
        assert!(display.current(0.0).is_none());

        display.show("Play/Pause", 10.0);
        assert_eq!(display.current(11.0), Some("Play/Pause"));
        assert_eq!(display.current(11.5), Some("Play/Pause"));
        assert!(display.current(11.6).is_none());
        // Stays gone
        assert!(display.current(10.5).is_none());
    }

    #[test]
    fn test_newer_text_replaces_older() {
        let mut display = GestureDisplay::new(1.5);
        display.show("Volume up", 0.0);
        display.show("Volume down", 1.0);
        assert_eq!(display.current(2.0), Some("Volume down"));
    }

    #[test]
    fn test_render_title_bar_and_banner() {
        let renderer = OverlayRenderer::default();
        let mut frame = OverlayRenderer::blank_frame(640, 480);
        renderer.render(&mut frame, Some("Play/Pause"));

        assert_eq!(*frame.get_pixel(5, 5), Rgb([40, 40, 40]));
        assert_eq!(*frame.get_pixel(5, 300), Rgb([0, 0, 0]));

        // 0.7 of the banner colour over black
        let centre = frame.get_pixel(320, 230);
        assert_eq!(*centre, Rgb([164, 36, 103]));
    }

    #[test]
    fn test_banner_rect_is_clipped() {
        let renderer = OverlayRenderer::default();
        let text = "x".repeat(50);
        let (x, y, w, h) = renderer.banner_rect(&text, 320, 240);
        assert_eq!((x, y), (0, 60));
        assert!(x + w <= 320);
        assert!(y + h <= 240);
    }

    #[test]
    fn test_guide_lines() {
        let lines = guide_lines(&CommandTable::standard());
        assert_eq!(lines.len(), 8);
        assert_eq!(lines[0], TITLE);
        assert!(lines.iter().any(|l| l.contains("Skip forward 10s")));
    }
}
