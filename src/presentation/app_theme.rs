use iced::widget::button;
use iced::{Background, Border, Color, Shadow, Theme};

use crate::core::models::ThemeMode;

const BUTTON_RADIUS: f32 = 6.0;

pub fn get_theme(mode: &ThemeMode) -> Theme {
    match mode {
        ThemeMode::Dark => Theme::custom(
            "Dark".to_string(),
            iced::theme::Palette {
                background: Color::from_rgb(0.08, 0.08, 0.1),
                text: Color::from_rgb(0.95, 0.95, 0.95),
                primary: Color::from_rgb(0.2, 0.47, 0.95),
                success: Color::from_rgb(0.2, 0.9, 0.4),
                danger: Color::from_rgb(1.0, 0.3, 0.3),
                warning: Color::from_rgb(1.0, 0.7, 0.0),
            },
        ),
        ThemeMode::Light => Theme::custom(
            "Light".to_string(),
            iced::theme::Palette {
                background: Color::from_rgb(0.95, 0.95, 0.97),
                text: Color::from_rgb(0.1, 0.1, 0.1),
                primary: Color::from_rgb(0.0, 0.4, 0.9),
                success: Color::from_rgb(0.1, 0.7, 0.3),
                danger: Color::from_rgb(0.9, 0.2, 0.2),
                warning: Color::from_rgb(0.9, 0.6, 0.0),
            },
        ),
    }
}

fn solid_button(background: Color, text_color: Color, border_color: Color, snap: bool) -> button::Style {
    button::Style {
        background: Some(Background::Color(background)),
        text_color,
        border: Border {
            color: border_color,
            width: 1.0,
            radius: BUTTON_RADIUS.into(),
        },
        shadow: Shadow::default(),
        snap,
    }
}

fn disabled_button() -> button::Style {
    solid_button(
        Color::from_rgb(0.3, 0.3, 0.3),
        Color::from_rgb(0.5, 0.5, 0.5),
        Color::from_rgb(0.4, 0.4, 0.4),
        false,
    )
}

/// Filled button in the theme's primary colour.
pub fn primary_button_style(theme: &Theme, status: button::Status) -> button::Style {
    let primary = theme.palette().primary;

    match status {
        button::Status::Active => solid_button(primary, Color::WHITE, primary, false),
        button::Status::Hovered => {
            let hovered = lighten(primary, 0.12);
            solid_button(hovered, Color::WHITE, hovered, false)
        }
        button::Status::Pressed => {
            let pressed = lighten(primary, -0.12);
            solid_button(pressed, Color::WHITE, pressed, true)
        }
        button::Status::Disabled => disabled_button(),
    }
}

pub fn secondary_button_style(_theme: &Theme, status: button::Status) -> button::Style {
    match status {
        button::Status::Active => solid_button(
            Color::from_rgb(0.25, 0.25, 0.25),
            Color::from_rgb(0.7, 0.7, 0.7),
            Color::from_rgb(0.4, 0.4, 0.4),
            false,
        ),
        button::Status::Hovered => solid_button(
            Color::from_rgb(0.35, 0.35, 0.35),
            Color::from_rgb(0.9, 0.9, 0.9),
            Color::from_rgb(0.5, 0.5, 0.5),
            false,
        ),
        button::Status::Pressed => solid_button(
            Color::from_rgb(0.2, 0.2, 0.2),
            Color::from_rgb(0.8, 0.8, 0.8),
            Color::from_rgb(0.35, 0.35, 0.35),
            true,
        ),
        button::Status::Disabled => disabled_button(),
    }
}

fn lighten(color: Color, amount: f32) -> Color {
    Color::from_rgb(
        (color.r + amount).clamp(0.0, 1.0),
        (color.g + amount).clamp(0.0, 1.0),
        (color.b + amount).clamp(0.0, 1.0),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_theme_dark_mode() {
        let theme = get_theme(&ThemeMode::Dark);
        let palette = theme.palette();

        assert_eq!(palette.background, Color::from_rgb(0.08, 0.08, 0.1));
        assert_eq!(palette.text, Color::from_rgb(0.95, 0.95, 0.95));
    }

    #[test]
    fn test_get_theme_light_mode() {
        let theme = get_theme(&ThemeMode::Light);
        let palette = theme.palette();

        assert_eq!(palette.background, Color::from_rgb(0.95, 0.95, 0.97));
        assert_eq!(palette.text, Color::from_rgb(0.1, 0.1, 0.1));
    }

    #[test]
    fn test_primary_button_style_active_uses_palette_primary() {
        let theme = get_theme(&ThemeMode::Dark);
        let style = primary_button_style(&theme, button::Status::Active);

        assert_eq!(
            style.background,
            Some(Background::Color(theme.palette().primary))
        );
        assert_eq!(style.text_color, Color::WHITE);
    }

    #[test]
    fn test_primary_button_style_hovered_is_lighter_than_active() {
        let theme = get_theme(&ThemeMode::Light);

        let Some(Background::Color(active)) =
            primary_button_style(&theme, button::Status::Active).background
        else {
            panic!("Expected background color");
        };
        let Some(Background::Color(hovered)) =
            primary_button_style(&theme, button::Status::Hovered).background
        else {
            panic!("Expected background color");
        };

        assert!(hovered.g > active.g);
    }

    #[test]
    fn test_pressed_buttons_snap() {
        let theme = Theme::Dark;

        assert!(primary_button_style(&theme, button::Status::Pressed).snap);
        assert!(secondary_button_style(&theme, button::Status::Pressed).snap);
        assert!(!secondary_button_style(&theme, button::Status::Active).snap);
    }

    #[test]
    fn test_disabled_buttons_are_gray() {
        let theme = Theme::Dark;

        let primary = primary_button_style(&theme, button::Status::Disabled);
        let secondary = secondary_button_style(&theme, button::Status::Disabled);

        assert_eq!(
            primary.background,
            Some(Background::Color(Color::from_rgb(0.3, 0.3, 0.3)))
        );
        assert_eq!(primary.text_color, secondary.text_color);
    }

    #[test]
    fn test_button_styles_have_consistent_border_radius_and_no_shadow() {
        let theme = Theme::Dark;

        let primary = primary_button_style(&theme, button::Status::Active);
        let secondary = secondary_button_style(&theme, button::Status::Hovered);

        assert_eq!(primary.border.radius, BUTTON_RADIUS.into());
        assert_eq!(secondary.border.radius, BUTTON_RADIUS.into());
        assert_eq!(primary.shadow.blur_radius, 0.0);
    }

    #[test]
    fn test_lighten_clamps_channels() {
        let color = lighten(Color::from_rgb(0.95, 0.05, 0.5), 0.1);

        assert_eq!(color.r, 1.0);
        assert!((color.g - 0.15).abs() < 1e-6);
    }
}
