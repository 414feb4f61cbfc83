//! Per-frame control loop tying the source, pipeline, dispatcher and overlay together

use handcue_core::GestureEvent;
use handcue_cv::{
    detection::{GestureConfig, GesturePipeline, PipelineStats},
    overlay::{GestureDisplay, OverlayRenderer},
    source::Frame,
    traits::{KeySink, LandmarkSource},
    Dispatcher, Result,
};
use anyhow::Context;
use image::RgbImage;
use serde::Serialize;
use std::path::PathBuf;
use std::time::Instant;
use tracing::{debug, info};

const CANVAS_SIZE: (u32, u32) = (640, 480);

/// What happened during a run
#[derive(Debug, Clone, Serialize)]
pub struct RunSummary {
    pub stats: PipelineStats,
    pub events: Vec<GestureEvent>,
    pub commands_sent: u64,
    pub snapshots_saved: usize,
    pub processing_time_ms: u64,
}

pub struct Controller<S: KeySink> {
    pipeline: GesturePipeline,
    dispatcher: Dispatcher<S>,
    display: GestureDisplay,
    display_active: bool,
    renderer: OverlayRenderer,
    overlay_dir: Option<PathBuf>,
    started: Instant,
    last_time: f64,
    timestamped: bool,
    events: Vec<GestureEvent>,
    snapshots_saved: usize,
}

impl<S: KeySink> Controller<S> {
    pub fn new(config: GestureConfig, sink: S) -> Self {
        let display = GestureDisplay::new(config.display_timeout_secs);
        Self {
            pipeline: GesturePipeline::new(config),
            dispatcher: Dispatcher::new(sink),
            display,
            display_active: false,
            renderer: OverlayRenderer::default(),
            overlay_dir: None,
            started: Instant::now(),
            last_time: 0.0,
            timestamped: false,
            events: Vec::new(),
            snapshots_saved: 0,
        }
    }

    /// Save an overlay PNG into `dir` for every dispatched gesture.
    pub fn with_overlay_dir(mut self, dir: impl Into<PathBuf>) -> Result<Self> {
        let dir = dir.into();
        std::fs::create_dir_all(&dir)
            .with_context(|| format!("Failed to create overlay directory: {:?}", dir))?;
        self.overlay_dir = Some(dir);
        Ok(self)
    }

    /// Frame time in seconds. Frames without a timestamp reuse the last
    /// stream time, or the wall clock if the stream never carried one.
    fn frame_time(&mut self, frame: &Frame) -> f64 {
        match frame.timestamp {
            Some(t) => {
                self.timestamped = true;
                self.last_time = t;
            }
            None if !self.timestamped => {
                self.last_time = self.started.elapsed().as_secs_f64();
            }
            None => {}
        }
        self.last_time
    }

    /// Process a single frame, dispatching the gesture it produced, if any.
    pub fn step(&mut self, frame: &Frame) -> Result<Option<GestureEvent>> {
        let now = self.frame_time(frame);

        let Some(event) = self.pipeline.process_frame(frame.hand.as_ref(), now) else {
            if self.display.current(now).is_none() && self.display_active {
                debug!("Overlay cleared at {:.3}s", now);
                self.display_active = false;
            }
            return Ok(None);
        };

        let command = self.dispatcher.dispatch(&event)?;
        self.display.show(command.description, now);
        self.display_active = true;
        self.events.push(event);

        if let Some(dir) = &self.overlay_dir {
            let mut canvas = RgbImage::new(CANVAS_SIZE.0, CANVAS_SIZE.1);
            self.renderer.render(&mut canvas, self.display.current(now));
            let path = dir.join(format!("gesture_{:03}_{}.png", self.events.len(), event.gesture));
            self.renderer.save_snapshot(&canvas, &path)?;
            self.snapshots_saved += 1;
            info!("Overlay saved: {:?}", path);
        }

        Ok(Some(event))
    }

    /// Drain `source`, or stop after `max_frames` frames.
    pub fn run<L: LandmarkSource>(&mut self, source: &mut L, max_frames: Option<u64>) -> Result<RunSummary> {
        let start_time = Instant::now();

        while max_frames.is_none_or(|max| self.pipeline.stats().frames < max) {
            let Some(frame) = source.next_frame()? else {
                break;
            };
            self.step(&frame)?;
        }

        Ok(RunSummary {
            stats: self.pipeline.stats().clone(),
            events: self.events.clone(),
            commands_sent: self.dispatcher.dispatched(),
            snapshots_saved: self.snapshots_saved,
            processing_time_ms: start_time.elapsed().as_millis() as u64,
        })
    }

    pub fn sink(&self) -> &S {
        self.dispatcher.sink()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use handcue_core::{Gesture, KeySignal};
    use handcue_cv::{RecordingKeySink, ScriptStep, ScriptedSource};

    #[test]
    fn test_demo_script_dispatches_every_gesture() -> Result<()> {
        let mut controller = Controller::new(GestureConfig::default(), RecordingKeySink::default());
        let mut source = ScriptedSource::new(ScriptedSource::demo_script(), 3);

        let summary = controller.run(&mut source, None)?;
        let gestures: Vec<Gesture> = summary.events.iter().map(|e| e.gesture).collect();
        assert_eq!(
            gestures,
            vec![
                Gesture::Open,
                Gesture::Closed,
                Gesture::SwipeLeft,
                Gesture::SwipeRight,
                Gesture::SwipeUp,
                Gesture::SwipeDown,
                Gesture::Open,
            ]
        );
        assert_eq!(controller.sink().keys[2], KeySignal::SeekForward);
        assert_eq!(summary.commands_sent, 7);
        Ok(())
    }

    #[test]
    fn test_max_frames() -> Result<()> {
        let mut controller = Controller::new(GestureConfig::default(), RecordingKeySink::default());
        let mut source = ScriptedSource::new(vec![ScriptStep::Open { frames: 100 }], 3);

        let summary = controller.run(&mut source, Some(10))?;
        assert_eq!(summary.stats.frames, 10);
        assert_eq!(summary.events.len(), 1);
        Ok(())
    }

    #[test]
    fn test_overlay_snapshots() -> Result<()> {
        let dir = std::env::temp_dir().join(format!("handcue-overlay-{}", std::process::id()));
        let mut controller = Controller::new(GestureConfig::default(), RecordingKeySink::default())
            .with_overlay_dir(&dir)?;
        let mut source = ScriptedSource::new(vec![ScriptStep::Closed { frames: 3 }], 3);

        let summary = controller.run(&mut source, None)?;
        let saved = dir.join("gesture_001_closed.png");
        let exists = saved.exists();
        std::fs::remove_dir_all(&dir)?;

        assert_eq!(summary.snapshots_saved, 1);
        assert!(exists);
        Ok(())
    }
}
