//! Interaction stories for the button widget
//!
//! Each test mounts a button in a fresh context, dispatches synthetic
//! activations, and asserts the observable behavior — the same scenarios the
//! component gallery demonstrates.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use tinct_theme::{ThemeMode, ThemeStore};
use tinct_widgets::{button, ButtonBehavior, Size, Variant, Widget, WidgetContext};

/// Interactive story: a transient primary button alternates between the
/// primary and danger scales on every activation.
#[test]
fn interactive_color_toggle() {
    let mut ctx = WidgetContext::new();
    let store = ThemeStore::with_mode(ThemeMode::Light);
    let mut btn = button("Toggle Color")
        .variant(Variant::Primary)
        .size(Size::Medium)
        .behavior(ButtonBehavior::Transient)
        .build(&mut ctx);
    btn.attach_theme(&ctx, &store);

    // Initial state: blue (primary)
    assert_eq!(
        btn.build(&ctx).unwrap().background.to_hex_string(),
        "#3b82f6"
    );

    // First activation: red (danger scale)
    btn.activate(&mut ctx);
    assert_eq!(
        btn.build(&ctx).unwrap().background.to_hex_string(),
        "#ef4444"
    );

    // Second activation: back to blue
    btn.activate(&mut ctx);
    assert_eq!(
        btn.build(&ctx).unwrap().background.to_hex_string(),
        "#3b82f6"
    );
}

/// The pressed scale shows immediately and reverts after the 200 ms window,
/// driven by a simulated clock. The toggled color survives the reset.
#[test]
fn transient_pressed_scale_reverts() {
    let mut ctx = WidgetContext::new();
    let store = ThemeStore::with_mode(ThemeMode::Light);
    let mut btn = button("Press me")
        .behavior(ButtonBehavior::Transient)
        .build(&mut ctx);
    btn.attach_theme(&ctx, &store);

    btn.activate(&mut ctx);
    assert_eq!(btn.build(&ctx).unwrap().scale, 0.95);

    // Advance simulated time in frames past the window
    for _ in 0..5 {
        btn.update(&mut ctx, 50.0);
    }
    let style = btn.build(&ctx).unwrap();
    assert_eq!(style.scale, 1.0);
    assert_eq!(style.background.to_hex_string(), "#ef4444");
}

/// Default story: a one-shot button disables itself after the first click
/// and shows the activated caption.
#[test]
fn one_shot_click_disables_and_relabels() {
    let mut ctx = WidgetContext::new();
    let clicks = Arc::new(AtomicUsize::new(0));
    let clicks_clone = clicks.clone();
    let mut btn = button("Test")
        .on_activate(move || {
            clicks_clone.fetch_add(1, Ordering::SeqCst);
        })
        .build(&mut ctx);

    btn.activate(&mut ctx);
    assert_eq!(clicks.load(Ordering::SeqCst), 1);
    assert_eq!(btn.display_text(&ctx), "Clicked!");
    assert!(btn.is_disabled(&ctx));

    btn.activate(&mut ctx);
    assert_eq!(clicks.load(Ordering::SeqCst), 1);
}

/// Alert story: exactly one notification per activation, carrying the
/// displayed text.
#[test]
fn alert_story_emits_displayed_text() {
    let mut ctx = WidgetContext::new();
    let alerts: Arc<Mutex<Vec<String>>> = Arc::default();
    let alerts_clone = alerts.clone();
    let mut btn = button("Alert Button")
        .show_alert(true)
        .on_alert(move |text| {
            alerts_clone.lock().unwrap().push(text.to_string());
        })
        .build(&mut ctx);

    btn.activate(&mut ctx);
    assert_eq!(*alerts.lock().unwrap(), vec!["Alert Button".to_string()]);
}

/// Theme toggle story: flipping the provider's mode re-resolves every
/// mounted button from the new token set.
#[test]
fn theme_toggle_propagates_to_consumers() {
    let mut ctx = WidgetContext::new();
    let store = ThemeStore::with_mode(ThemeMode::Light);

    let mut primary = button("Primary").variant(Variant::Primary).build(&mut ctx);
    let mut danger = button("Danger").variant(Variant::Danger).build(&mut ctx);
    primary.attach_theme(&ctx, &store);
    danger.attach_theme(&ctx, &store);

    assert_eq!(
        primary.build(&ctx).unwrap().background.to_hex_string(),
        "#3b82f6"
    );
    assert_eq!(
        danger.build(&ctx).unwrap().background.to_hex_string(),
        "#ef4444"
    );

    store.toggle();
    assert!(ctx.take_rebuild_request());
    assert_eq!(
        primary.build(&ctx).unwrap().background.to_hex_string(),
        "#60a5fa"
    );
    assert_eq!(
        danger.build(&ctx).unwrap().background.to_hex_string(),
        "#f87171"
    );

    // Toggling back restores the original palette
    store.toggle();
    assert_eq!(
        primary.build(&ctx).unwrap().background.to_hex_string(),
        "#3b82f6"
    );
}

/// Variant matrix story: each variant resolves its own background.
#[test]
fn variant_matrix() {
    let mut ctx = WidgetContext::new();
    let store = ThemeStore::with_mode(ThemeMode::Light);

    let cases = [
        (Variant::Primary, "#3b82f6"),
        (Variant::Secondary, "#f3f4f6"),
        (Variant::Danger, "#ef4444"),
    ];
    for (variant, expected) in cases {
        let mut btn = button("Button").variant(variant).build(&mut ctx);
        btn.attach_theme(&ctx, &store);
        assert_eq!(
            btn.build(&ctx).unwrap().background.to_hex_string(),
            expected,
            "variant {variant:?}"
        );
        ctx.remove_widget(btn.id());
    }
}

/// Size matrix story: the three tiers resolve pairwise-distinct paddings.
#[test]
fn size_matrix() {
    let mut ctx = WidgetContext::new();
    let store = ThemeStore::with_mode(ThemeMode::Light);

    let mut paddings = Vec::new();
    for size in [Size::Small, Size::Medium, Size::Large] {
        let mut btn = button("Button").size(size).build(&mut ctx);
        btn.attach_theme(&ctx, &store);
        paddings.push(btn.build(&ctx).unwrap().padding);
        ctx.remove_widget(btn.id());
    }

    assert_eq!(paddings[0], (16.0, 8.0));
    assert_eq!(paddings[1], (24.0, 16.0));
    assert_eq!(paddings[2], (24.0, 24.0));
}

/// Disabled story: visual override applies and interaction is inert.
#[test]
fn disabled_story() {
    let mut ctx = WidgetContext::new();
    let store = ThemeStore::with_mode(ThemeMode::Light);
    let clicks = Arc::new(AtomicUsize::new(0));
    let clicks_clone = clicks.clone();
    let mut btn = button("Disabled Button")
        .disabled(true)
        .on_activate(move || {
            clicks_clone.fetch_add(1, Ordering::SeqCst);
        })
        .build(&mut ctx);
    btn.attach_theme(&ctx, &store);

    let style = btn.build(&ctx).unwrap();
    assert_eq!(style.opacity, 0.5);
    assert_eq!(style.cursor, tinct_widgets::Cursor::NotAllowed);

    btn.activate(&mut ctx);
    assert_eq!(clicks.load(Ordering::SeqCst), 0);
    assert_eq!(btn.display_text(&ctx), "Disabled Button");
}
