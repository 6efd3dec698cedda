//! Stylesheet assembly.
//!
//! The stylesheet is a pure function of the resolved theme: the base rules, the print rules,
//! and for [`Theme::Dark`] an override block appended last so it wins the cascade.

use crate::theme::Theme;

const BASE_CSS: &str = include_str!("../css/base.css");
const PRINT_CSS: &str = include_str!("../css/print.css");
const DARK_CSS: &str = include_str!("../css/dark.css");

/// CSS text for `theme`, without the surrounding `<style>` element.
pub fn build(theme: Theme) -> String {
    let mut css = String::with_capacity(BASE_CSS.len() + PRINT_CSS.len() + DARK_CSS.len() + 2);
    css.push_str(BASE_CSS);
    css.push('\n');
    css.push_str(PRINT_CSS);
    if theme.is_dark() {
        css.push('\n');
        css.push_str(DARK_CSS);
    }
    css
}
