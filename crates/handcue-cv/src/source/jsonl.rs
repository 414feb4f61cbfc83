//! JSON-lines landmark stream, as written by a MediaPipe helper process
//!
//! One object per line:
//! `{"t": 1.25, "hands": [{"score": 0.93, "landmarks": [{"x": 0.5, "y": 0.6, "z": 0.0}, ...]}]}`
//! `t` and `score` are optional, extra fields such as `z` are ignored.

use super::Frame;
use crate::error::FrameError;
use crate::traits::LandmarkSource;
use crate::Result;
use anyhow::Context;
use handcue_core::{HandLandmarks, Landmark};
use serde::Deserialize;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;
use tracing::warn;

#[derive(Deserialize, Debug)]
struct HandJson {
    #[serde(default = "full_score")]
    score: f32,
    landmarks: Vec<Landmark>,
}

#[derive(Deserialize, Debug)]
struct FrameJson {
    #[serde(default)]
    t: Option<f64>,
    #[serde(default)]
    hands: Vec<HandJson>,
}

fn full_score() -> f32 {
    1.0
}

/// Reads frames line by line; bad lines become no-hand frames
pub struct JsonLinesSource<R> {
    reader: R,
    line: usize,
    min_confidence: f32,
    mirror: bool,
    skipped: usize,
}

impl JsonLinesSource<BufReader<File>> {
    pub fn open<P: AsRef<Path>>(path: P, min_confidence: f32) -> Result<Self> {
        let file = File::open(path.as_ref())
            .with_context(|| format!("Failed to open landmark stream: {:?}", path.as_ref()))?;
        Ok(Self::new(BufReader::new(file), min_confidence))
    }
}

impl<R: BufRead> JsonLinesSource<R> {
    pub fn new(reader: R, min_confidence: f32) -> Self {
        Self {
            reader,
            line: 0,
            min_confidence,
            mirror: false,
            skipped: 0,
        }
    }

    /// Flip x of every landmark, for streams taken from an unmirrored camera.
    pub fn with_mirror(mut self, mirror: bool) -> Self {
        self.mirror = mirror;
        self
    }

    /// Lines that could not be used
    pub fn skipped(&self) -> usize {
        self.skipped
    }

    fn parse_line(&self, text: &str) -> std::result::Result<Frame, FrameError> {
        let frame: FrameJson = serde_json::from_str(text).map_err(|source| FrameError::Json {
            line: self.line,
            source,
        })?;

        // Single-hand tracking: the first confident hand wins
        let Some(hand) = frame.hands.iter().find(|h| h.score >= self.min_confidence) else {
            return Ok(Frame::empty(frame.t));
        };

        let landmarks = HandLandmarks::from_slice(&hand.landmarks)
            .ok_or(FrameError::LandmarkCount(hand.landmarks.len()))?;
        let landmarks = if self.mirror { landmarks.mirrored() } else { landmarks };

        Ok(Frame::new(frame.t, Some(landmarks)))
    }
}

impl<R: BufRead> LandmarkSource for JsonLinesSource<R> {
    fn next_frame(&mut self) -> Result<Option<Frame>> {
        let mut buf = String::new();
        loop {
            buf.clear();
            let read = self
                .reader
                .read_line(&mut buf)
                .with_context(|| format!("Failed to read landmark line {}", self.line + 1))?;
            if read == 0 {
                return Ok(None);
            }
            self.line += 1;

            if buf.trim().is_empty() {
                continue;
            }

            return match self.parse_line(buf.trim()) {
                Ok(frame) => Ok(Some(frame)),
                Err(e) => {
                    warn!("Skipping frame at line {}: {}", self.line, e);
                    self.skipped += 1;
                    Ok(Some(Frame::empty(None)))
                }
            };
        }
    }
}
