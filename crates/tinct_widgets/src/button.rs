//! Button widget with FSM-driven interactions
//!
//! The button owns its interaction state and computes a [`Style`] from
//! `{variant, size, theme tokens, state}` on every build. Two mutually
//! exclusive behavior families exist and are chosen at construction:
//!
//! - [`ButtonBehavior::OneShot`]: a successful activation permanently
//!   disables the button and fixes its caption to `"Clicked!"`. Remount to
//!   reset.
//! - [`ButtonBehavior::Transient`]: each activation flips the color-inversion
//!   flag (primary ⇄ danger scale) and shows a pressed scale that reverts
//!   after a 200 ms window. The inversion persists across the reset.

use crate::context::WidgetContext;
use crate::style::{resolve_style, Size, Style, Variant, PRESSED_SCALE};
use crate::widget::{Widget, WidgetId};
use std::sync::atomic::Ordering;
use tinct_core::events::{event_types, Event};
use tinct_core::fsm::StateMachine;
use tinct_theme::{ThemeError, ThemeHandle, ThemeStore, ThemeSubscription};

/// Button states
pub mod states {
    pub const READY: u32 = 0;
    pub const PRESSED: u32 = 1;
    pub const ACTIVATED: u32 = 2;
    pub const DISABLED: u32 = 3;
}

/// Length of the transient pressed window in milliseconds
pub const PRESS_RESET_MS: f32 = 200.0;

/// Caption shown by a one-shot button after activation
pub const ACTIVATED_CAPTION: &str = "Clicked!";

/// Fallback caption when no label is supplied
pub const DEFAULT_LABEL: &str = "Button";

/// Which interaction design the button follows
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ButtonBehavior {
    /// Activation permanently disables the button and fixes its caption
    #[default]
    OneShot,
    /// Activation toggles color inversion and shows a timed pressed state
    Transient,
}

/// Button configuration
#[derive(Clone, Debug)]
pub struct ButtonConfig {
    /// Display text; `None` falls back to `"Button"`
    pub label: Option<String>,
    pub variant: Variant,
    pub size: Size,
    /// Externally controlled disabled flag
    pub disabled: bool,
    /// Emit a notification with the displayed text on each activation
    pub show_alert: bool,
    pub behavior: ButtonBehavior,
}

impl Default for ButtonConfig {
    fn default() -> Self {
        Self {
            label: None,
            variant: Variant::Primary,
            size: Size::Medium,
            disabled: false,
            show_alert: false,
            behavior: ButtonBehavior::OneShot,
        }
    }
}

impl ButtonConfig {
    /// Create a new button config with a label
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: Some(label.into()),
            ..Default::default()
        }
    }

    pub fn variant(mut self, variant: Variant) -> Self {
        self.variant = variant;
        self
    }

    pub fn size(mut self, size: Size) -> Self {
        self.size = size;
        self
    }

    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    pub fn show_alert(mut self, show_alert: bool) -> Self {
        self.show_alert = show_alert;
        self
    }

    pub fn behavior(mut self, behavior: ButtonBehavior) -> Self {
        self.behavior = behavior;
        self
    }
}

/// Button widget state
#[derive(Clone, Debug)]
pub struct ButtonState {
    /// Currently displayed text (mirrors the label until a one-shot
    /// activation fixes the caption)
    pub display_text: String,
    /// Color-inversion flag (transient design only)
    pub color_inverted: bool,
    /// One-shot latch
    pub activated: bool,
    /// Current visual scale
    pub scale: f32,
    /// Remaining milliseconds of the pressed window; `None` when idle.
    /// Lives in the widget state so teardown cancels it implicitly.
    reset_remaining_ms: Option<f32>,
    /// Whether the button was activated (cleared after reading)
    was_activated: bool,
}

impl ButtonState {
    /// Create a new button state from a config
    pub fn new(config: &ButtonConfig) -> Self {
        Self {
            display_text: config
                .label
                .clone()
                .unwrap_or_else(|| DEFAULT_LABEL.to_string()),
            color_inverted: false,
            activated: false,
            scale: 1.0,
            reset_remaining_ms: None,
            was_activated: false,
        }
    }

    /// Check if the button was activated and clear the flag
    pub fn take_activated(&mut self) -> bool {
        std::mem::take(&mut self.was_activated)
    }

    /// Whether a pressed-window reset is pending
    pub fn reset_pending(&self) -> bool {
        self.reset_remaining_ms.is_some()
    }
}

/// Button widget
pub struct Button {
    id: WidgetId,
    config: ButtonConfig,
    theme: ThemeHandle,
    _theme_subscription: Option<ThemeSubscription>,
    on_activate: Option<Box<dyn FnMut() + Send>>,
    on_alert: Option<Box<dyn FnMut(&str) + Send>>,
}

impl Button {
    /// Create a new button
    pub fn new(ctx: &mut WidgetContext, label: impl Into<String>) -> Self {
        Self::with_config(ctx, ButtonConfig::new(label))
    }

    /// Create a button with custom config
    pub fn with_config(ctx: &mut WidgetContext, config: ButtonConfig) -> Self {
        let fsm = Self::create_fsm(&config);
        let id = ctx.register_widget_with_fsm(fsm);
        ctx.set_widget_state(id, ButtonState::new(&config));

        Self {
            id,
            config,
            theme: ThemeHandle::detached(),
            _theme_subscription: None,
            on_activate: None,
            on_alert: None,
        }
    }

    /// Create the button FSM
    fn create_fsm(config: &ButtonConfig) -> StateMachine {
        if config.disabled {
            // Disabled button has no transitions
            StateMachine::builder(states::DISABLED).build()
        } else {
            match config.behavior {
                ButtonBehavior::OneShot => StateMachine::builder(states::READY)
                    .on(states::READY, event_types::ACTIVATE, states::ACTIVATED)
                    .build(),
                ButtonBehavior::Transient => StateMachine::builder(states::READY)
                    .on(states::READY, event_types::ACTIVATE, states::PRESSED)
                    .on(states::PRESSED, event_types::ACTIVATE, states::PRESSED)
                    .on(states::PRESSED, event_types::PRESS_RESET, states::READY)
                    .build(),
            }
        }
    }

    /// Get the widget ID
    pub fn id(&self) -> WidgetId {
        self.id
    }

    /// Subscribe to a theme store and read tokens from it.
    ///
    /// The subscription sets the context's rebuild flag on every theme
    /// change and is dropped with the button.
    pub fn attach_theme(&mut self, ctx: &WidgetContext, store: &ThemeStore) {
        let flag = ctx.dirty_flag();
        self.theme = store.handle();
        self._theme_subscription = Some(store.subscribe(move || {
            flag.store(true, Ordering::SeqCst);
        }));
    }

    /// Set the activation callback
    pub fn on_activate<F: FnMut() + Send + 'static>(mut self, callback: F) -> Self {
        self.on_activate = Some(Box::new(callback));
        self
    }

    /// Set the notification sink used when `show_alert` is enabled
    pub fn on_alert<F: FnMut(&str) + Send + 'static>(mut self, callback: F) -> Self {
        self.on_alert = Some(Box::new(callback));
        self
    }

    /// Resync the displayed text from the external label (input wins).
    ///
    /// A one-shot button keeps its activated caption.
    pub fn set_label(&mut self, ctx: &mut WidgetContext, label: impl Into<String>) {
        let label = label.into();
        self.config.label = Some(label.clone());
        if let Some(state) = ctx.get_widget_state_mut::<ButtonState>(self.id) {
            if !state.activated {
                state.display_text = label;
                ctx.mark_dirty(self.id);
            }
        }
    }

    /// Resync the external disabled flag, swapping the interaction FSM.
    ///
    /// Re-enabling a one-shot button that already fired keeps it in its
    /// terminal state.
    pub fn set_disabled(&mut self, ctx: &mut WidgetContext, disabled: bool) {
        if self.config.disabled == disabled {
            return;
        }
        self.config.disabled = disabled;
        let activated = ctx
            .get_widget_state::<ButtonState>(self.id)
            .map(|state| state.activated)
            .unwrap_or(false);
        let fsm = if !disabled && activated {
            StateMachine::builder(states::ACTIVATED).build()
        } else {
            Self::create_fsm(&self.config)
        };
        ctx.replace_fsm(self.id, fsm);
        ctx.mark_dirty(self.id);
    }

    /// Whether the control currently rejects activation
    pub fn is_disabled(&self, ctx: &WidgetContext) -> bool {
        self.config.disabled
            || matches!(
                ctx.get_fsm_state(self.id),
                Some(states::ACTIVATED) | Some(states::DISABLED)
            )
    }

    /// The currently displayed text
    pub fn display_text(&self, ctx: &WidgetContext) -> String {
        ctx.get_widget_state::<ButtonState>(self.id)
            .map(|state| state.display_text.clone())
            .unwrap_or_else(|| DEFAULT_LABEL.to_string())
    }

    /// Check if the button was activated (and clear the flag)
    pub fn was_activated(&self, ctx: &mut WidgetContext) -> bool {
        ctx.get_widget_state_mut::<ButtonState>(self.id)
            .map(|state| state.take_activated())
            .unwrap_or(false)
    }

    /// Dispatch a synthetic activation to this button
    pub fn activate(&mut self, ctx: &mut WidgetContext) {
        let event = Event::new(event_types::ACTIVATE, 0);
        self.handle_activate(ctx, &event);
    }

    fn handle_activate(&mut self, ctx: &mut WidgetContext, event: &Event) {
        // Re-entrant activation while disabled never accumulates effects
        if self.config.disabled {
            return;
        }
        // Covers the one-shot terminal state and the disabled machine
        if !ctx.can_send(self.id, event_types::ACTIVATE) {
            return;
        }

        ctx.dispatch_event(self.id, event);

        let Some(state) = ctx.get_widget_state_mut::<ButtonState>(self.id) else {
            return;
        };

        // Alert carries the text displayed at click time, before any
        // caption change.
        let displayed = state.display_text.clone();

        match self.config.behavior {
            ButtonBehavior::OneShot => {
                state.activated = true;
                state.display_text = ACTIVATED_CAPTION.to_string();
            }
            ButtonBehavior::Transient => {
                state.color_inverted = !state.color_inverted;
                state.scale = PRESSED_SCALE;
                // Replaces any pending window from a prior activation
                state.reset_remaining_ms = Some(PRESS_RESET_MS);
            }
        }
        state.was_activated = true;
        ctx.mark_dirty(self.id);

        tracing::debug!(
            button = ?self.id,
            behavior = ?self.config.behavior,
            "button activated"
        );

        if self.config.show_alert {
            if let Some(callback) = self.on_alert.as_mut() {
                callback(&displayed);
            }
        }

        // Always invoked last; absent handler is a safe no-op
        if let Some(callback) = self.on_activate.as_mut() {
            callback();
        }
    }

    /// Build the button's visual description from the current theme tokens.
    ///
    /// Fails with [`ThemeError::NotInitialized`] when no theme store is
    /// attached or the store has been dropped.
    pub fn build(&self, ctx: &WidgetContext) -> Result<Style, ThemeError> {
        let tokens = self.theme.tokens()?;
        let (inverted, scale) = ctx
            .get_widget_state::<ButtonState>(self.id)
            .map(|state| (state.color_inverted, state.scale))
            .unwrap_or((false, 1.0));

        let mut style = resolve_style(
            &tokens,
            self.config.variant,
            self.config.size,
            self.is_disabled(ctx),
            inverted,
        );
        style.scale = scale;
        Ok(style)
    }
}

impl Widget for Button {
    fn id(&self) -> WidgetId {
        self.id
    }

    fn handle_event(&mut self, ctx: &mut WidgetContext, event: &Event) {
        if event.event_type == event_types::ACTIVATE {
            self.handle_activate(ctx, event);
        }
    }

    /// Advance the pressed-window countdown. The reset fires at most once
    /// per scheduled window and dies with the widget state on teardown.
    fn update(&mut self, ctx: &mut WidgetContext, dt_ms: f32) {
        let mut fire = false;
        if let Some(state) = ctx.get_widget_state_mut::<ButtonState>(self.id) {
            if let Some(remaining) = state.reset_remaining_ms.as_mut() {
                *remaining -= dt_ms;
                if *remaining <= 0.0 {
                    state.reset_remaining_ms = None;
                    state.scale = 1.0;
                    fire = true;
                }
            }
        }
        if fire {
            let event = Event::new(event_types::PRESS_RESET, 0);
            ctx.dispatch_event(self.id, &event);
            ctx.mark_dirty(self.id);
        }
    }
}

/// Create a button with a label
pub fn button(label: impl Into<String>) -> ButtonBuilder {
    ButtonBuilder {
        config: ButtonConfig::new(label),
        on_activate: None,
        on_alert: None,
    }
}

/// Builder for creating buttons
pub struct ButtonBuilder {
    config: ButtonConfig,
    on_activate: Option<Box<dyn FnMut() + Send>>,
    on_alert: Option<Box<dyn FnMut(&str) + Send>>,
}

impl ButtonBuilder {
    pub fn variant(mut self, variant: Variant) -> Self {
        self.config.variant = variant;
        self
    }

    pub fn size(mut self, size: Size) -> Self {
        self.config.size = size;
        self
    }

    pub fn disabled(mut self, disabled: bool) -> Self {
        self.config.disabled = disabled;
        self
    }

    pub fn show_alert(mut self, show_alert: bool) -> Self {
        self.config.show_alert = show_alert;
        self
    }

    pub fn behavior(mut self, behavior: ButtonBehavior) -> Self {
        self.config.behavior = behavior;
        self
    }

    /// Set the activation callback
    pub fn on_activate<F: FnMut() + Send + 'static>(mut self, callback: F) -> Self {
        self.on_activate = Some(Box::new(callback));
        self
    }

    /// Set the notification sink
    pub fn on_alert<F: FnMut(&str) + Send + 'static>(mut self, callback: F) -> Self {
        self.on_alert = Some(Box::new(callback));
        self
    }

    /// Build the button widget
    pub fn build(self, ctx: &mut WidgetContext) -> Button {
        let mut button = Button::with_config(ctx, self.config);
        button.on_activate = self.on_activate;
        button.on_alert = self.on_alert;
        button
    }
}
