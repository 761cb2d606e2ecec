use bezier_draw::DrawOptions;

fn temp_path(name: &str) -> std::path::PathBuf {
    std::env::temp_dir().join(format!("bezier_draw_{}_{}.toml", name, std::process::id()))
}

#[test]
fn test_save_and_load_roundtrip() {
    let path = temp_path("roundtrip");
    let mut options = DrawOptions::default();
    options.repeat_mode = true;
    options.max_points = 4;
    options.shape.color = "#ff0000".to_string();
    options.locale.start = "Click to start.".to_string();

    options.save_to_file(&path).expect("Speichern sollte funktionieren");
    let loaded = DrawOptions::load_from_file(&path);
    let _ = std::fs::remove_file(&path);

    assert_eq!(loaded, options);
}

#[test]
fn test_missing_file_falls_back_to_defaults() {
    let path = temp_path("missing");
    assert_eq!(DrawOptions::load_from_file(&path), DrawOptions::default());
}

#[test]
fn test_broken_file_falls_back_to_defaults() {
    let path = temp_path("broken");
    std::fs::write(&path, "allow_intersection = [").expect("Schreiben sollte funktionieren");
    let loaded = DrawOptions::load_from_file(&path);
    let _ = std::fs::remove_file(&path);

    assert_eq!(loaded, DrawOptions::default());
}
