//! Synthetic landmark stream driven by a script of poses and swipes
//!
//! Stands in for the camera in demos and tests. The hand is a fan of five
//! fingers around the palm base; the spread of the fan sets the pose, and
//! swipes move the whole hand. Between swipes the hand glides back to its
//! home position slowly enough not to register as a swipe itself.

use super::Frame;
use crate::traits::LandmarkSource;
use crate::Result;
use anyhow::{bail, Context};
use handcue_core::hand::landmark::*;
use handcue_core::{Gesture, HandLandmarks, Landmark, SwipeDirection};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::str::FromStr;

/// Fingertip radius of an open hand
pub const OPEN_RADIUS: f32 = 0.30;
/// Fingertip radius of a fist
pub const CLOSED_RADIUS: f32 = 0.10;
/// Fingertip radius between the open and closed cut-offs
pub const RELAXED_RADIUS: f32 = 0.20;

const HOME: (f32, f32) = (0.5, 0.6);
const SWIPE_TRAVEL: f32 = 0.4;
/// Per-frame glide back to `HOME`; ten frames of it stay under a swipe
const RETURN_SPEED: f32 = 0.012;

const DEFAULT_POSE_FRAMES: usize = 30;
const DEFAULT_SWIPE_FRAMES: usize = 6;

/// Finger ray angles in degrees, counter-clockwise from +x with y pointing up
const FINGER_ANGLES: [f32; 5] = [160.0, 110.0, 90.0, 70.0, 50.0];

/// Landmark chain of each finger from base to tip
const FINGER_CHAINS: [[usize; 4]; 5] = [
    [THUMB_CMC, THUMB_MCP, THUMB_IP, THUMB_TIP],
    [INDEX_MCP, INDEX_PIP, INDEX_DIP, INDEX_TIP],
    [MIDDLE_MCP, MIDDLE_PIP, MIDDLE_DIP, MIDDLE_TIP],
    [RING_MCP, RING_PIP, RING_DIP, RING_TIP],
    [PINKY_MCP, PINKY_PIP, PINKY_DIP, PINKY_TIP],
];

/// One step of a script
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ScriptStep {
    Open { frames: usize },
    Closed { frames: usize },
    /// Hand visible but neither open nor closed
    Relaxed { frames: usize },
    NoHand { frames: usize },
    Swipe { direction: SwipeDirection, frames: usize },
}

impl ScriptStep {
    pub fn frames(&self) -> usize {
        match *self {
            Self::Open { frames }
            | Self::Closed { frames }
            | Self::Relaxed { frames }
            | Self::NoHand { frames }
            | Self::Swipe { frames, .. } => frames,
        }
    }
}

impl FromStr for ScriptStep {
    type Err = anyhow::Error;

    /// `name[:frames]`, e.g. `open`, `idle:40`, `swipe-left:6`, `none:15`.
    fn from_str(s: &str) -> anyhow::Result<Self> {
        let (name, frames) = match s.trim().split_once(':') {
            Some((name, count)) => {
                let count = count
                    .trim()
                    .parse::<usize>()
                    .with_context(|| format!("Invalid frame count in script step '{}'", s))?;
                (name.trim(), Some(count))
            }
            None => (s.trim(), None),
        };
        if frames == Some(0) {
            bail!("Script step '{}' has no frames", s);
        }

        let pose_frames = frames.unwrap_or(DEFAULT_POSE_FRAMES);
        let step = match name.to_lowercase().as_str() {
            "idle" | "relaxed" => Self::Relaxed { frames: pose_frames },
            "none" | "gone" => Self::NoHand { frames: pose_frames },
            other => match other.parse::<Gesture>()? {
                Gesture::Open => Self::Open { frames: pose_frames },
                Gesture::Closed => Self::Closed { frames: pose_frames },
                swipe => Self::Swipe {
                    direction: swipe.swipe_direction().context("swipe without direction")?,
                    frames: frames.unwrap_or(DEFAULT_SWIPE_FRAMES),
                },
            },
        };
        Ok(step)
    }
}

/// Parse a comma separated script such as `open,idle:40,swipe-left`.
pub fn parse_script(text: &str) -> Result<Vec<ScriptStep>> {
    text.split(',')
        .filter(|part| !part.trim().is_empty())
        .map(|part| part.parse::<ScriptStep>())
        .collect()
}

pub struct ScriptedSource {
    steps: Vec<ScriptStep>,
    step_index: usize,
    frame_in_step: usize,
    frame_count: u64,
    frame_rate: f64,
    jitter: f32,
    cursor: (f32, f32),
    swipe_origin: (f32, f32),
    rng: StdRng,
}

impl ScriptedSource {
    pub fn new(steps: Vec<ScriptStep>, seed: u64) -> Self {
        Self {
            steps,
            step_index: 0,
            frame_in_step: 0,
            frame_count: 0,
            frame_rate: 30.0,
            jitter: 0.003,
            cursor: HOME,
            swipe_origin: HOME,
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Every gesture once, with rests in between and a hand drop at the end.
    pub fn demo_script() -> Vec<ScriptStep> {
        let rest = ScriptStep::Relaxed { frames: 40 };
        let swipe = |direction| ScriptStep::Swipe {
            direction,
            frames: DEFAULT_SWIPE_FRAMES,
        };
        vec![
            ScriptStep::Open { frames: DEFAULT_POSE_FRAMES },
            rest,
            ScriptStep::Closed { frames: DEFAULT_POSE_FRAMES },
            rest,
            swipe(SwipeDirection::Left),
            rest,
            swipe(SwipeDirection::Right),
            rest,
            swipe(SwipeDirection::Up),
            rest,
            swipe(SwipeDirection::Down),
            rest,
            ScriptStep::NoHand { frames: 15 },
            ScriptStep::Open { frames: DEFAULT_POSE_FRAMES },
        ]
    }

    pub fn with_frame_rate(mut self, frame_rate: f64) -> Self {
        self.frame_rate = frame_rate.max(1.0);
        self
    }

    pub fn with_jitter(mut self, jitter: f32) -> Self {
        self.jitter = jitter.abs();
        self
    }

    pub fn total_frames(&self) -> usize {
        self.steps.iter().map(ScriptStep::frames).sum()
    }

    fn glide_home(&mut self) {
        let step = |from: f32, to: f32| from + (to - from).clamp(-RETURN_SPEED, RETURN_SPEED);
        self.cursor = (step(self.cursor.0, HOME.0), step(self.cursor.1, HOME.1));
    }

    /// Hand with its palm base at `palm` and fingertips `radius` away.
    fn render(&mut self, palm: (f32, f32), radius: f32) -> HandLandmarks {
        let mut points = [Landmark::new(palm.0, palm.1); LANDMARK_COUNT];
        for (chain, angle) in FINGER_CHAINS.iter().zip(FINGER_ANGLES) {
            let (sin, cos) = angle.to_radians().sin_cos();
            for (joint, fraction) in chain.iter().zip([0.35, 0.6, 0.8, 1.0]) {
                let reach = radius * fraction;
                points[*joint] = Landmark::new(palm.0 + cos * reach, palm.1 - sin * reach);
            }
        }
        if self.jitter > 0.0 {
            for point in points.iter_mut() {
                point.x += self.rng.gen_range(-self.jitter..=self.jitter);
                point.y += self.rng.gen_range(-self.jitter..=self.jitter);
            }
        }
        HandLandmarks::new(points)
    }

    fn swipe_offset(direction: SwipeDirection) -> (f32, f32) {
        match direction {
            SwipeDirection::Left => (-SWIPE_TRAVEL, 0.0),
            SwipeDirection::Right => (SWIPE_TRAVEL, 0.0),
            SwipeDirection::Up => (0.0, -SWIPE_TRAVEL),
            SwipeDirection::Down => (0.0, SWIPE_TRAVEL),
        }
    }
}

impl LandmarkSource for ScriptedSource {
    fn next_frame(&mut self) -> Result<Option<Frame>> {
        while let Some(step) = self.steps.get(self.step_index).copied() {
            if self.frame_in_step >= step.frames() {
                self.step_index += 1;
                self.frame_in_step = 0;
                continue;
            }

            let timestamp = self.frame_count as f64 / self.frame_rate;
            let hand = match step {
                ScriptStep::NoHand { .. } => None,
                ScriptStep::Swipe { direction, frames } => {
                    if self.frame_in_step == 0 {
                        self.swipe_origin = self.cursor;
                    }
                    let (dx, dy) = Self::swipe_offset(direction);
                    let progress = (self.frame_in_step + 1) as f32 / frames as f32;
                    self.cursor = (
                        self.swipe_origin.0 + dx * progress,
                        self.swipe_origin.1 + dy * progress,
                    );
                    Some(self.render(self.cursor, RELAXED_RADIUS))
                }
                ScriptStep::Open { .. } => {
                    self.glide_home();
                    Some(self.render(self.cursor, OPEN_RADIUS))
                }
                ScriptStep::Closed { .. } => {
                    self.glide_home();
                    Some(self.render(self.cursor, CLOSED_RADIUS))
                }
                ScriptStep::Relaxed { .. } => {
                    self.glide_home();
                    Some(self.render(self.cursor, RELAXED_RADIUS))
                }
            };

            self.frame_in_step += 1;
            self.frame_count += 1;
            return Ok(Some(Frame::new(Some(timestamp), hand)));
        }
        Ok(None)
    }
}
