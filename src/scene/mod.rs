pub(crate) mod bubbles;
pub(crate) mod controls;
pub(crate) mod pipeline;
pub(crate) mod ranking;
pub(crate) mod scatter;
