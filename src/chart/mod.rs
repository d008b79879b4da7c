pub(crate) mod annotation;
pub(crate) mod axis;
pub(crate) mod format;
pub(crate) mod scale;
pub(crate) mod svg;
pub(crate) mod tooltip;
