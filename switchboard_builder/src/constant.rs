pub(crate) const LONG_PREFIX: &str = "--";
pub(crate) const SHORT_PREFIX: &str = "-";
pub(crate) const INLINE_SEPARATOR: char = '=';

pub(crate) const DEFAULT_DISPLAY_WIDTH: usize = 70;
pub(crate) const DEFAULT_TAB_WIDTH: usize = 20;
