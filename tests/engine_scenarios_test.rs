//! End-to-end gesture scenarios through the engine


use hand_gesture_remote::{
    config::Config,
    constants::{INDEX_MCP, INDEX_TIP, NUM_HAND_LANDMARKS},
    EngineStatus, GestureEngine, GestureEvent, Landmark, LandmarkSnapshot,
};
use test_helpers::{fist, pointing_hand, swipe_frames, thumbs_up, thumbs_up_pointing, FRAME_DT};

/// Feed frames and collect every gesture with its frame time
fn run(engine: &mut GestureEngine, frames: &[LandmarkSnapshot]) -> Vec<(f64, GestureEvent)> {
    frames
        .iter()
        .filter_map(|frame| {
            engine
                .process(Some(frame), frame.timestamp())
                .map(|gesture| (frame.timestamp(), gesture))
        })
        .collect()
}

#[test]
fn test_swipe_right_fires_once_and_clears_history() {
    let mut engine = GestureEngine::new();
    let frames = swipe_frames((0.2, 0.5), (0.5, 0.5), 7, 0.0);

    let mut fired_at = None;
    for (i, frame) in frames.iter().enumerate() {
        if let Some(gesture) = engine.process(Some(frame), frame.timestamp()) {
            assert_eq!(gesture, GestureEvent::Right);
            assert!(fired_at.is_none(), "swipe fired twice");
            assert_eq!(engine.history().size(), 0);
            fired_at = Some(i);
        }
    }
    // Five samples are the minimum evidence
    assert_eq!(fired_at, Some(4));
}

#[test]
fn test_all_directions() {
    let cases = [
        ((0.2, 0.5), (0.5, 0.5), GestureEvent::Right),
        ((0.7, 0.5), (0.4, 0.5), GestureEvent::Left),
        ((0.5, 0.3), (0.5, 0.6), GestureEvent::Down),
        ((0.5, 0.6), (0.5, 0.3), GestureEvent::Up),
    ];

    for (from, to, expected) in cases {
        let mut engine = GestureEngine::new();
        let gestures = run(&mut engine, &swipe_frames(from, to, 7, 0.0));
        assert_eq!(gestures.len(), 1, "{expected:?}");
        assert_eq!(gestures[0].1, expected);
    }
}

#[test]
fn test_return_swing_does_not_fire() {
    let mut engine = GestureEngine::new();
    let mut frames = swipe_frames((0.2, 0.5), (0.5, 0.5), 7, 0.0);
    frames.extend(swipe_frames((0.5, 0.5), (0.2, 0.5), 7, 7.0 * FRAME_DT));

    let gestures = run(&mut engine, &frames);
    assert_eq!(gestures.len(), 1);
    assert_eq!(gestures[0].1, GestureEvent::Right);
}

#[test]
fn test_swipe_cooldown_expires() {
    let mut engine = GestureEngine::new();
    let mut frames = swipe_frames((0.2, 0.5), (0.5, 0.5), 7, 0.0);
    // Same swipe again while cooling, then once more after the cooldown
    frames.extend(swipe_frames((0.2, 0.5), (0.5, 0.5), 7, 0.4));
    frames.extend(swipe_frames((0.2, 0.5), (0.5, 0.5), 7, 1.5));

    let gestures = run(&mut engine, &frames);
    assert_eq!(gestures.len(), 2);
    assert!(gestures[1].0 - gestures[0].0 >= 1.0);
}

#[test]
fn test_confirm_pose_fires_once_per_cooldown() {
    let mut engine = GestureEngine::new();
    let frames: Vec<_> = (0..=36).map(|i| thumbs_up(f64::from(i) * FRAME_DT)).collect();

    let gestures = run(&mut engine, &frames);
    assert_eq!(gestures.len(), 2);
    assert_eq!(gestures[0], (0.0, GestureEvent::Center));
    assert_eq!(gestures[1].1, GestureEvent::Center);
    assert!(gestures[1].0 > 0.99);
}

#[test]
fn test_cooldowns_are_independent() {
    let mut engine = GestureEngine::new();

    // Swipe first, then confirm inside the swipe cooldown
    let mut gestures = run(&mut engine, &swipe_frames((0.2, 0.5), (0.5, 0.5), 7, 0.0));
    gestures.extend(run(&mut engine, &[thumbs_up(0.3)]));
    assert_eq!(
        gestures.iter().map(|g| g.1).collect::<Vec<_>>(),
        vec![GestureEvent::Right, GestureEvent::Center]
    );
    assert!(engine.swipe_cooldown_remaining(0.3) > 0.0);

    // Confirm first, then swipe inside the confirm cooldown
    let mut engine = GestureEngine::new();
    let mut gestures = run(&mut engine, &[thumbs_up(0.0)]);
    gestures.extend(run(&mut engine, &swipe_frames((0.2, 0.5), (0.5, 0.5), 7, 0.1)));
    assert_eq!(
        gestures.iter().map(|g| g.1).collect::<Vec<_>>(),
        vec![GestureEvent::Center, GestureEvent::Right]
    );
}

#[test]
fn test_confirm_takes_priority_over_swipe() {
    let mut engine = GestureEngine::new();
    let mut frames = swipe_frames((0.2, 0.5), (0.35, 0.5), 4, 0.0);
    // Fifth frame would complete a swipe but also shows the confirm pose
    frames.push(thumbs_up_pointing(0.4, 0.5, 4.0 * FRAME_DT));

    let gestures = run(&mut engine, &frames);
    assert_eq!(gestures.len(), 1);
    assert_eq!(gestures[0].1, GestureEvent::Center);
    // The swipe evidence survives the confirm frame
    assert_eq!(engine.history().size(), 5);

    let next = pointing_hand(0.45, 0.5, 5.0 * FRAME_DT);
    assert_eq!(engine.process(Some(&next), next.timestamp()), Some(GestureEvent::Right));
}

#[test]
fn test_slow_drift_is_ignored() {
    let mut engine = GestureEngine::new();
    // 0.13 of travel spread over two seconds
    let frames = swipe_frames((0.3, 0.5), (0.43, 0.5), 61, 0.0);
    assert!(run(&mut engine, &frames).is_empty());
}

#[test]
fn test_diagonal_swipe_is_ignored() {
    let mut engine = GestureEngine::new();
    let frames = swipe_frames((0.2, 0.2), (0.5, 0.5), 7, 0.0);
    assert!(run(&mut engine, &frames).is_empty());
}

#[test]
fn test_curled_index_never_collects_evidence() {
    let mut engine = GestureEngine::new();
    for i in 0..10 {
        let t = f64::from(i) * FRAME_DT;
        assert_eq!(engine.process(Some(&fist(t)), t), None);
        assert_eq!(engine.history().size(), 0);
    }
    assert_eq!(engine.status(0.5), EngineStatus::PointIndex);
}

#[test]
fn test_extension_threshold_is_strict() {
    let hand_with_reach = |reach: f64| {
        let mut landmarks = vec![Landmark::new(0.5, 0.8); NUM_HAND_LANDMARKS];
        landmarks[INDEX_TIP] = Landmark::new(reach, 0.0);
        landmarks[INDEX_MCP] = Landmark::new(0.0, 0.0);
        LandmarkSnapshot::new(&landmarks, 0.0).unwrap()
    };

    let mut engine = GestureEngine::new();
    engine.process(Some(&hand_with_reach(0.14)), 0.0);
    assert!(!engine.index_extended());
    assert_eq!(engine.history().size(), 0);

    engine.process(Some(&hand_with_reach(0.141)), 0.033);
    assert!(engine.index_extended());
    assert_eq!(engine.history().size(), 1);
}

#[test]
fn test_hand_lost_mid_swipe_resets_evidence() {
    let mut engine = GestureEngine::new();
    let frames = swipe_frames((0.2, 0.5), (0.5, 0.5), 7, 0.0);

    assert!(run(&mut engine, &frames[..3]).is_empty());
    assert_eq!(engine.process(None, 3.0 * FRAME_DT), None);
    // Only two fresh samples after the gap: not enough evidence
    assert!(run(&mut engine, &frames[5..]).is_empty());
}

#[test]
fn test_configured_thresholds_apply() {
    let mut config = Config::default();
    config.swipe.min_distance = 0.5;
    let mut engine = GestureEngine::with_config(&config).unwrap();
    assert!(run(&mut engine, &swipe_frames((0.2, 0.5), (0.5, 0.5), 7, 0.0)).is_empty());

    config.swipe.min_distance = 0.12;
    config.swipe.min_samples = 3;
    let mut engine = GestureEngine::with_config(&config).unwrap();
    let gestures = run(&mut engine, &swipe_frames((0.2, 0.5), (0.5, 0.5), 7, 0.0));
    assert_eq!(gestures.len(), 1);
}
