//! End-to-end sessions through `StrikeEngine`

mod common;

use std::sync::Arc;
use std::thread;
use std::time::Duration;

use common::{wrist_track, Body};
use shadowbox_core::{
    EngineConfig, FrameMailbox, HandState, Joint, LandmarkFrame, SessionStats, Side,
    SideOnlyModel, Stance, StrikeEngine, StrikeEvent, Technique,
};

/// Left wrist velocities 0, 2, 25, 30, 22, 8, 1
const JAB_TRACK: [f32; 8] = [340.0, 340.0, 342.0, 367.0, 397.0, 419.0, 411.0, 410.0];

/// Mirror of the jab on the right hand
const CROSS_TRACK: [f32; 8] = [220.0, 220.0, 218.0, 193.0, 163.0, 141.0, 149.0, 150.0];

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

fn run(engine: &mut StrikeEngine, frames: &[LandmarkFrame]) -> Vec<StrikeEvent> {
    frames
        .iter()
        .flat_map(|frame| engine.process_frame(frame).unwrap())
        .collect()
}

#[test]
fn test_left_jab_counted_once() {
    init_tracing();
    let mut engine = StrikeEngine::default();
    let events = run(&mut engine, &wrist_track(Joint::LeftWrist, &JAB_TRACK, 205.0));

    assert_eq!(
        events,
        vec![StrikeEvent {
            side: Side::Left,
            technique: Technique::Jab,
            frame: 7,
        }]
    );

    let stats = engine.snapshot();
    assert_eq!(stats.jabs, 1);
    assert_eq!(stats.left_strikes, 1);
    assert_eq!(stats.total_strikes, 1);
    assert_eq!(stats.frame_count, 8);
    assert_eq!(stats.last_strike.map(|e| e.to_string()), Some("Left Jab".to_string()));
    assert_eq!(engine.hand_state(Side::Left), HandState::Retracted);
}

#[test]
fn test_rear_straight_is_cross() {
    init_tracing();
    let mut engine = StrikeEngine::default();
    let events = run(&mut engine, &wrist_track(Joint::RightWrist, &CROSS_TRACK, 205.0));

    assert_eq!(events.len(), 1);
    assert_eq!(events[0].side, Side::Right);
    assert_eq!(events[0].technique, Technique::Cross);
    assert_eq!(engine.snapshot().crosses, 1);
}

#[test]
fn test_southpaw_swaps_jab_and_cross() {
    let config = EngineConfig {
        stance: Stance::Southpaw,
        ..EngineConfig::default()
    };
    let mut engine = StrikeEngine::new(config).unwrap();
    let mut events = run(&mut engine, &wrist_track(Joint::LeftWrist, &JAB_TRACK, 205.0));
    let offset = JAB_TRACK.len() as u64;
    events.extend(
        CROSS_TRACK
            .iter()
            .enumerate()
            .flat_map(|(i, &x)| {
                let frame = Body::standing()
                    .at(Joint::LeftWrist, 410.0, 205.0)
                    .at(Joint::RightWrist, x, 205.0)
                    .frame(offset + i as u64);
                engine.process_frame(&frame).unwrap()
            })
            .collect::<Vec<_>>(),
    );

    let techniques: Vec<_> = events.iter().map(|e| (e.side, e.technique)).collect();
    assert_eq!(
        techniques,
        vec![(Side::Left, Technique::Cross), (Side::Right, Technique::Jab)]
    );
}

#[test]
fn test_lead_hook() {
    init_tracing();
    // Elbow raised and out, wrist arcing down and across instead of reaching out
    let path = [
        (360.0, 150.0),
        (360.0, 150.0),
        (367.0, 170.0),
        (373.0, 190.0),
        (380.0, 210.0),
        (381.0, 210.0),
        (381.0, 210.0),
    ];
    let frames: Vec<_> = path
        .iter()
        .enumerate()
        .map(|(i, &(x, y))| {
            Body::standing()
                .at(Joint::LeftElbow, 400.0, 170.0)
                .at(Joint::LeftWrist, x, y)
                .frame(i as u64)
        })
        .collect();

    let mut engine = StrikeEngine::default();
    let events = run(&mut engine, &frames);
    assert_eq!(
        events,
        vec![StrikeEvent {
            side: Side::Left,
            technique: Technique::Hook,
            frame: 6,
        }]
    );
}

#[test]
fn test_rear_uppercut() {
    init_tracing();
    let path = [
        (255.0, 250.0),
        (255.0, 250.0),
        (257.0, 228.0),
        (259.0, 206.0),
        (261.0, 184.0),
        (263.0, 162.0),
        (264.0, 140.0),
        (264.0, 139.0),
        (264.0, 139.0),
    ];
    let frames: Vec<_> = path
        .iter()
        .enumerate()
        .map(|(i, &(x, y))| {
            Body::standing()
                .at(Joint::RightElbow, 250.0, 230.0)
                .at(Joint::RightWrist, x, y)
                .frame(i as u64)
        })
        .collect();

    let mut engine = StrikeEngine::default();
    let events = run(&mut engine, &frames);
    assert_eq!(
        events,
        vec![StrikeEvent {
            side: Side::Right,
            technique: Technique::Uppercut,
            frame: 8,
        }]
    );
    assert_eq!(engine.snapshot().uppercuts, 1);
}

#[test]
fn test_side_only_model_labels_by_hand() {
    let path = [
        (255.0, 250.0),
        (255.0, 250.0),
        (257.0, 228.0),
        (259.0, 206.0),
        (261.0, 184.0),
        (263.0, 162.0),
        (264.0, 140.0),
        (264.0, 139.0),
        (264.0, 139.0),
    ];
    let frames: Vec<_> = path
        .iter()
        .enumerate()
        .map(|(i, &(x, y))| {
            Body::standing()
                .at(Joint::RightElbow, 250.0, 230.0)
                .at(Joint::RightWrist, x, y)
                .frame(i as u64)
        })
        .collect();

    let mut engine =
        StrikeEngine::with_model(EngineConfig::default(), Box::new(SideOnlyModel)).unwrap();
    let events = run(&mut engine, &frames);
    assert_eq!(events.len(), 1);
    assert_eq!(events[0].technique, Technique::Cross);
}

#[test]
fn test_wrist_dropout_aborts_strike() {
    let mut frames = wrist_track(Joint::LeftWrist, &JAB_TRACK, 205.0);
    // Wrist lost mid-extension
    frames[4] = Body::standing()
        .at(Joint::LeftWrist, 397.0, 205.0)
        .confidence(Joint::LeftWrist, 0.1)
        .frame(4);

    let mut engine = StrikeEngine::default();
    let events = run(&mut engine, &frames);
    assert!(events.is_empty());
    assert_eq!(engine.snapshot().total_strikes, 0);
    assert_eq!(engine.hand_state(Side::Left), HandState::Retracted);
}

#[test]
fn test_full_guard_session() {
    let mut engine = StrikeEngine::default();
    for i in 0..100 {
        engine.process_frame(&Body::guard().frame(i)).unwrap();
    }
    let stats = engine.snapshot();
    assert_eq!(stats.frame_count, 100);
    assert_eq!(stats.covered_frames, 100);
    assert_eq!(stats.head_coverage_percent, 100.0);
    assert_eq!(stats.footwork_active_percent, 0.0);
    assert_eq!(stats.total_strikes, 0);
    assert!((stats.covered_seconds(25.0) - 4.0).abs() < 1e-9);
}

#[test]
fn test_guard_dropped_half_the_time() {
    let mut engine = StrikeEngine::default();
    for i in 0..40 {
        // Hands sink just below the nose every other frame
        let body = if i % 2 == 0 {
            Body::guard()
        } else {
            Body::guard()
                .at(Joint::LeftWrist, 292.0, 105.0)
                .at(Joint::RightWrist, 268.0, 105.0)
        };
        engine.process_frame(&body.frame(i)).unwrap();
    }
    assert_eq!(engine.snapshot().head_coverage_percent, 50.0);
}

#[test]
fn test_stepping_counts_as_footwork() {
    let mut engine = StrikeEngine::default();
    for i in 0..10 {
        let body = Body::standing().stepped(5.0 * i as f32);
        engine.process_frame(&body.frame(i)).unwrap();
    }
    let stats = engine.snapshot();
    // Two frames of history are needed before the window exceeds the threshold
    assert_eq!(stats.footwork_active_frames, 8);
    assert_eq!(stats.footwork_active_percent, 80.0);
}

#[test]
fn test_no_detection_frames_still_count() {
    let mut engine = StrikeEngine::default();
    engine.process_frame(&Body::guard().frame(0)).unwrap();
    engine.process_frame(&LandmarkFrame::empty(1)).unwrap();
    let stats = engine.snapshot();
    assert_eq!(stats.frame_count, 2);
    assert_eq!(stats.head_coverage_percent, 50.0);
}

#[test]
fn test_snapshot_is_idempotent() {
    let mut engine = StrikeEngine::default();
    run(&mut engine, &wrist_track(Joint::LeftWrist, &JAB_TRACK, 205.0));
    let first = engine.snapshot();
    let second = engine.snapshot();
    assert_eq!(first, second);
}

#[test]
fn test_reset_starts_new_session() {
    let mut engine = StrikeEngine::default();
    run(&mut engine, &wrist_track(Joint::LeftWrist, &JAB_TRACK, 205.0));
    assert_eq!(engine.snapshot().total_strikes, 1);

    engine.reset();
    assert_eq!(engine.snapshot(), SessionStats::default());
    assert_eq!(engine.hand_state(Side::Left), HandState::Retracted);
    assert_eq!(engine.hand_velocity(Side::Left), None);

    // Frame numbering may restart after a reset
    let events = run(&mut engine, &wrist_track(Joint::LeftWrist, &JAB_TRACK, 205.0));
    assert_eq!(events.len(), 1);
}

#[test]
fn test_config_from_json() {
    let config = EngineConfig::from_json(r#"{"stance":"southpaw","strike":{"vHigh":35.0}}"#).unwrap();
    assert_eq!(config.stance, Stance::Southpaw);
    assert_eq!(config.strike.v_high, 35.0);
    assert_eq!(config.strike.v_low, 5.0);

    // A jab peaking at 30 units/frame is no longer an onset
    let mut engine = StrikeEngine::new(config).unwrap();
    let events = run(&mut engine, &wrist_track(Joint::LeftWrist, &JAB_TRACK, 205.0));
    assert!(events.is_empty());
}

#[test]
fn test_mailbox_feeds_engine() {
    let mailbox = Arc::new(FrameMailbox::new());
    let consumer = {
        let mailbox = Arc::clone(&mailbox);
        thread::spawn(move || {
            let mut engine = StrikeEngine::default();
            while let Some(frame) = mailbox.take_timeout(Duration::from_secs(5)) {
                engine.process_frame(&frame).unwrap();
            }
            engine.snapshot()
        })
    };

    for i in 0..200 {
        mailbox.post(Body::guard().frame(i));
    }
    mailbox.close();

    let stats = consumer.join().unwrap();
    assert_eq!(stats.frame_count + mailbox.dropped(), 200);
    assert_eq!(stats.covered_frames, stats.frame_count);
}
