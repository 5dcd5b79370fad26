//! MiniJinja filter registration.
//!
//! ```rust
//! use minijinja::{context, Environment};
//!
//! let mut env = Environment::new();
//! unistyle::register_filters(&mut env);
//!
//! let out = env
//!     .render_str(r#"{{ title | bold_sans }} {{ "no" | strikethrough("solidus-long") }}"#, context! { title => "Hi" })
//!     .unwrap();
//! assert_eq!(out, "𝗛𝗶 n\u{0338}o\u{0338}");
//! ```

use std::str::FromStr;

use minijinja::{Environment, Error, ErrorKind, Value};

use crate::diacritic::{overline, strikethrough, underline};
use crate::error::StyleError;
use crate::letterform::Letterform;
use crate::style::Style;

/// Registers the unistyle filters on a minijinja environment.
///
/// - `strikethrough(style?)`, `underline(style?)`, `overline(style?)`: an
///   optional variant name such as `"solidus-long"`; the default variant is
///   used when omitted.
/// - `bold_sans`, `bold_serif`, `italic_sans`, `italic_serif`,
///   `bold_italic_sans`, `bold_italic_serif`, `cursive`, `fraktur`.
/// - `unistyle(spec)`: any style in its textual form, e.g.
///   `{{ name | unistyle("overline:dot") }}`.
///
/// Unknown style names fail the render with [`ErrorKind::InvalidOperation`].
pub fn register_filters(env: &mut Environment<'_>) {
    env.add_filter(
        "strikethrough",
        |value: Value, style: Option<String>| -> Result<String, Error> {
            Ok(strikethrough(&value.to_string(), variant(style)?))
        },
    );
    env.add_filter(
        "underline",
        |value: Value, style: Option<String>| -> Result<String, Error> {
            Ok(underline(&value.to_string(), variant(style)?))
        },
    );
    env.add_filter(
        "overline",
        |value: Value, style: Option<String>| -> Result<String, Error> {
            Ok(overline(&value.to_string(), variant(style)?))
        },
    );

    for form in Letterform::ALL {
        let name = form.name().replace('-', "_");
        env.add_filter(name, move |value: Value| -> String {
            form.apply(&value.to_string())
        });
    }

    env.add_filter(
        "unistyle",
        |value: Value, spec: String| -> Result<String, Error> {
            let style: Style = spec.parse().map_err(render_error)?;
            Ok(style.apply(&value.to_string()))
        },
    );
}

fn variant<T>(name: Option<String>) -> Result<T, Error>
where
    T: FromStr<Err = StyleError> + Default,
{
    match name {
        Some(name) => name.parse().map_err(render_error),
        None => Ok(T::default()),
    }
}

fn render_error(err: StyleError) -> Error {
    Error::new(ErrorKind::InvalidOperation, err.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use minijinja::context;

    fn env() -> Environment<'static> {
        let mut env = Environment::new();
        register_filters(&mut env);
        env
    }

    #[test]
    fn test_diacritic_filters_default_variant() {
        let out = env()
            .render_str("{{ 'ab' | underline }}", context! {})
            .unwrap();
        assert_eq!(out, "a\u{0332}b\u{0332}");
    }

    #[test]
    fn test_diacritic_filters_named_variant() {
        let env = env();
        let out = env
            .render_str("{{ 'ab' | overline('diaeresis') }}", context! {})
            .unwrap();
        assert_eq!(out, "a\u{0308}b\u{0308}");

        let out = env
            .render_str("{{ 'ab' | strikethrough('tilde') }}", context! {})
            .unwrap();
        assert_eq!(out, "a\u{0334}b\u{0334}");
    }

    #[test]
    fn test_letterform_filters_use_snake_case_names() {
        let env = env();
        let out = env
            .render_str(
                "{{ 'Z' | fraktur }} {{ 'a' | bold_italic_serif }}",
                context! {},
            )
            .unwrap();
        assert_eq!(out, "ℨ 𝒂");
    }

    #[test]
    fn test_filters_stringify_non_string_values() {
        let out = env()
            .render_str("{{ n | bold_serif }}", context! { n => 42 })
            .unwrap();
        assert_eq!(out, "𝟒𝟐");
    }

    #[test]
    fn test_unistyle_filter() {
        let out = env()
            .render_str("{{ 'O' | unistyle('overline:breve') }}", context! {})
            .unwrap();
        assert_eq!(out, "O\u{0306}");
    }

    #[test]
    fn test_unknown_style_is_a_render_error() {
        let err = env()
            .render_str("{{ 'x' | underline('squiggle') }}", context! {})
            .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidOperation);
        assert!(err.to_string().contains("squiggle"));

        let err = env()
            .render_str("{{ 'x' | unistyle('blink') }}", context! {})
            .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidOperation);
    }
}
