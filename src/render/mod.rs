//! Render planning: deriving a consistent configuration from a trace,
//! checking it, and handing frames to an external drawing layer.
//!
//! Nothing here draws. The output of this module is a [`RenderPlan`]
//! (one authoritative coordinate config plus styles and a quality
//! report) and a stream of frames into a caller-supplied [`FrameSink`].

mod bounds;
mod builder;
mod plan;
mod sink;
mod style;

pub use bounds::{WorldBounds, MARGIN_FRACTION, MIN_MARGIN};
pub use builder::{
    build_render_config, BuilderOptions, RenderConfig, DEFAULT_OVERLAY_MARGIN_PX,
    DEFAULT_SCALE_CAP, HEIGHT_FILL, WIDTH_FILL,
};
pub use plan::{
    plan_render, CheckKind, QualityCheck, QualityReport, RenderPlan, RenderRequest,
    RenderStrategy, MIN_READABLE_SCALE,
};
pub use sink::{render_trace, FrameSink, HeadlessSink, SinkError};
pub use style::{BodyShape, BodyStyle, Color, MotionPhase, RenderStyle, SurfaceStyle};
