pub mod disruption;
pub mod widget_settings;

pub use disruption::{Disruption, DisruptionFields, DisruptionPatch, NewDisruption, Slot};
pub use widget_settings::{
    Animation, BorderRadius, BorderWidth, FontStyle, Layout, Shadow, WidgetSettings,
    WidgetSettingsPatch,
};
