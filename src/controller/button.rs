/// Enabled state and style class of the custom timeframe submit button.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ButtonState {
    pub enabled: bool,
    pub class: &'static str,
}

impl ButtonState {
    pub const ENABLED: Self = Self {
        enabled: true,
        class: "btn-primary",
    };
    pub const DISABLED: Self = Self {
        enabled: false,
        class: "btn-secondary",
    };
}

/// Button state for the timeframe length field: enabled for numbers in 1..=100.
///
/// Empty and non-numeric input disables the button.
#[must_use]
pub fn enable_button(input: &str) -> ButtonState {
    match input.trim().parse::<f64>() {
        Ok(value) if (1.0..=100.0).contains(&value) => ButtonState::ENABLED,
        Ok(_) | Err(_) => ButtonState::DISABLED,
    }
}
