use std::collections::HashMap;

use super::*;

fn env(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let map: HashMap<String, String> = pairs
        .iter()
        .map(|(k, v)| ((*k).to_owned(), (*v).to_owned()))
        .collect();
    move |key| map.get(key).cloned()
}

#[test]
fn defaults_match_reference_scene() {
    let s = SceneSettings::default();
    assert_eq!(s.fps, Fps::new(60, 1).unwrap());
    assert_eq!((s.canvas.width, s.canvas.height), (300, 300));
    assert_eq!(s.background, Rgba8::WHITE);
    assert!(s.validate().is_ok());
}

#[test]
fn env_overrides_apply() {
    let s = SceneSettings::from_env_with(env(&[
        (ENV_FPS, "30"),
        (ENV_WIDTH, " 640 "),
        (ENV_HEIGHT, "480"),
    ]))
    .unwrap();
    assert_eq!(s.fps, Fps::whole(30).unwrap());
    assert_eq!((s.canvas.width, s.canvas.height), (640, 480));
}

#[test]
fn missing_vars_keep_defaults() {
    let s = SceneSettings::from_env_with(env(&[])).unwrap();
    assert_eq!(s, SceneSettings::default());
}

#[test]
fn zero_fps_is_rejected() {
    let err = SceneSettings::from_env_with(env(&[(ENV_FPS, "0")])).unwrap_err();
    assert!(err.to_string().contains("validation error:"));
}

#[test]
fn garbage_values_name_the_variable() {
    let err = SceneSettings::from_env_with(env(&[(ENV_WIDTH, "wide")])).unwrap_err();
    assert!(err.to_string().contains(ENV_WIDTH));
}

#[test]
fn deserialized_settings_are_validated() {
    let s: SceneSettings = serde_json::from_str(
        r#"{"fps":{"num":0,"den":1},"canvas":{"width":10,"height":10},"background":{"r":0,"g":0,"b":0,"a":255}}"#,
    )
    .unwrap();
    assert!(s.validate().is_err());
}
