mod card_vm;
mod fast_talk_vm;
mod time_fmt;

pub use card_vm::{
    CardFaceVm, CategoryOptionVm, CustomizationVm, SizeOptionVm, StyleOptionVm, SwatchVm,
    ViewerVm, map_card_faces, map_category_options, map_customization, map_viewer,
};
pub use fast_talk_vm::{
    ActiveVm, CompletedVm, ConfigureVm, FastTalkVm, PresetVm, map_fast_talk,
};
pub use time_fmt::{format_time_of_day, format_timer};
