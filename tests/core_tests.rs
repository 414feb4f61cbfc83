// tests/core_tests.rs
use handcue_core::{
    hand::{Landmark, FINGERTIPS, LANDMARK_COUNT, PALM_BASE},
    Gesture, GestureEvent, HandLandmarks, HandState, KeySignal,
};
use handcue_cv::{
    traits::LandmarkSource, Dispatcher, GestureConfig, GesturePipeline, HandStateClassifier,
    JsonLinesSource, RecordingKeySink, ScriptedSource,
};
use serde_json::json;
use std::io::Cursor;

const FRAME: f64 = 1.0 / 30.0;

/// Hand whose index tip sits at `tip`, every fingertip `radius` above the palm base.
fn hand_with_tip(tip: (f32, f32), radius: f32) -> HandLandmarks {
    let palm = Landmark::new(tip.0, tip.1 + radius);
    let mut points = [palm; LANDMARK_COUNT];
    for index in FINGERTIPS {
        points[index] = Landmark::new(tip.0, tip.1);
    }
    points[PALM_BASE] = palm;
    HandLandmarks::new(points)
}

fn frame_line(t: f64, hand: Option<&HandLandmarks>) -> String {
    let hands = match hand {
        Some(hand) => {
            let landmarks: Vec<_> = (0..LANDMARK_COUNT)
                .map(|i| {
                    let p = hand.get(i);
                    json!({ "x": p.x, "y": p.y, "z": 0.0 })
                })
                .collect();
            vec![json!({ "score": 0.95, "landmarks": landmarks })]
        }
        None => Vec::new(),
    };
    json!({ "t": t, "hands": hands }).to_string()
}

/// Run a JSON-lines stream through the pipeline and dispatcher.
fn replay(lines: &[String], mirror: bool) -> (Vec<GestureEvent>, Vec<KeySignal>, usize) {
    let mut source = JsonLinesSource::new(Cursor::new(lines.join("\n")), 0.7).with_mirror(mirror);
    let mut pipeline = GesturePipeline::new(GestureConfig::default());
    let mut dispatcher = Dispatcher::new(RecordingKeySink::default());
    let mut events = Vec::new();
    let mut now = 0.0;

    while let Some(frame) = source.next_frame().unwrap() {
        now = frame.timestamp.unwrap_or(now);
        if let Some(event) = pipeline.process_frame(frame.hand.as_ref(), now) {
            dispatcher.dispatch(&event).unwrap();
            events.push(event);
        }
    }
    let skipped = source.skipped();
    (events, dispatcher.into_sink().keys, skipped)
}

/// Index tip moving in a straight line from `from` to `to` over five frames,
/// with the hand relaxed so hand state never fires.
fn straight_track(from: (f32, f32), to: (f32, f32)) -> Vec<String> {
    (0..5)
        .map(|i| {
            let f = i as f32 / 4.0;
            let tip = (from.0 + (to.0 - from.0) * f, from.1 + (to.1 - from.1) * f);
            frame_line(i as f64 * FRAME, Some(&hand_with_tip(tip, 0.20)))
        })
        .collect()
}

#[test]
fn test_open_stream_emits_once() {
    let open = hand_with_tip((0.5, 0.4), 0.30);
    let lines: Vec<String> = (0..4).map(|i| frame_line(i as f64 * FRAME, Some(&open))).collect();

    let (events, keys, _) = replay(&lines, false);
    assert_eq!(events, vec![GestureEvent::new(Gesture::Open, 0.0)]);
    assert_eq!(keys, vec![KeySignal::PlayPause]);
}

#[test]
fn test_classifier_bands() {
    let classifier = HandStateClassifier::new(GestureConfig::default().hand_state);

    assert_eq!(classifier.classify(&hand_with_tip((0.5, 0.4), 0.30)), HandState::Open);
    assert_eq!(classifier.classify(&hand_with_tip((0.5, 0.4), 0.10)), HandState::Closed);
    assert_eq!(classifier.classify(&hand_with_tip((0.5, 0.4), 0.20)), HandState::Indeterminate);

    assert_eq!(classifier.classify_distance(0.25), HandState::Indeterminate);
    assert_eq!(classifier.classify_distance(0.15), HandState::Indeterminate);
    assert_eq!(classifier.classify_distance(0.2501), HandState::Open);
    assert_eq!(classifier.classify_distance(0.1499), HandState::Closed);
}

#[test]
fn test_swipe_left_seeks_forward() {
    let (events, keys, _) = replay(&straight_track((0.5, 0.5), (0.2, 0.5)), false);
    let gestures: Vec<Gesture> = events.iter().map(|e| e.gesture).collect();
    assert_eq!(gestures, vec![Gesture::SwipeLeft]);
    assert_eq!(keys, vec![KeySignal::SeekForward]);
}

#[test]
fn test_swipe_up_raises_volume() {
    let (events, keys, _) = replay(&straight_track((0.5, 0.8), (0.5, 0.5)), false);
    let gestures: Vec<Gesture> = events.iter().map(|e| e.gesture).collect();
    assert_eq!(gestures, vec![Gesture::SwipeUp]);
    assert_eq!(keys, vec![KeySignal::VolumeUp]);
}

#[test]
fn test_mirror_flips_horizontal_swipes() {
    let (events, _, _) = replay(&straight_track((0.5, 0.5), (0.2, 0.5)), true);
    assert_eq!(events.len(), 1);
    assert_eq!(events[0].gesture, Gesture::SwipeRight);
}

#[test]
fn test_four_samples_are_not_enough() {
    let mut lines = straight_track((0.5, 0.5), (0.2, 0.5));
    lines.remove(1);
    let (events, _, _) = replay(&lines, false);
    assert!(events.is_empty());
}

#[test]
fn test_lost_hand_rearms_hand_state() {
    let open = hand_with_tip((0.5, 0.4), 0.30);
    let lines = vec![
        frame_line(0.0, Some(&open)),
        frame_line(1.2, Some(&open)),
        frame_line(1.3, None),
        frame_line(1.4, Some(&open)),
        // Malformed lines count as a missing hand too
        "not json".to_string(),
        frame_line(2.6, Some(&open)),
    ];

    let (events, keys, skipped) = replay(&lines, false);
    let times: Vec<f64> = events.iter().map(|e| e.timestamp).collect();
    assert_eq!(times, vec![0.0, 1.4, 2.6]);
    assert_eq!(keys, vec![KeySignal::PlayPause; 3]);
    assert_eq!(skipped, 1);
}

#[test]
fn test_demo_script_covers_every_command() {
    for seed in 0..4 {
        let mut source = ScriptedSource::new(ScriptedSource::demo_script(), seed);
        let mut pipeline = GesturePipeline::new(GestureConfig::default());
        let mut dispatcher = Dispatcher::new(RecordingKeySink::default());

        while let Some(frame) = source.next_frame().unwrap() {
            let now = frame.timestamp.unwrap();
            if let Some(event) = pipeline.process_frame(frame.hand.as_ref(), now) {
                dispatcher.dispatch(&event).unwrap();
            }
        }

        assert_eq!(
            dispatcher.sink().keys,
            vec![
                KeySignal::PlayPause,
                KeySignal::FullscreenToggle,
                KeySignal::SeekForward,
                KeySignal::SeekBackward,
                KeySignal::VolumeUp,
                KeySignal::VolumeDown,
                KeySignal::PlayPause,
            ],
            "seed {seed}"
        );
    }
}
